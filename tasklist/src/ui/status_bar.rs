//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = match app.focus {
        PanelFocus::Input if app.store().is_editing() => {
            "Enter: save | Esc: cancel edit | Tab: tasks"
        }
        PanelFocus::Input => "Enter: add | Tab: tasks | Esc: quit",
        PanelFocus::Tasks => {
            "↑↓/jk: select | K/J: move | x: done | space: check | e: edit | d: delete | D/C/X: clear done/checked/all | Tab: input"
        }
    };

    let store = app.store();
    let counts = format!(
        "{} tasks, {} done, {} checked",
        store.len(),
        store.done_count(),
        store.checked_count()
    );

    let status_line = Line::from(vec![
        Span::styled(concat!("tasklist v", env!("CARGO_PKG_VERSION")), theme::bold()),
        Span::raw(" | "),
        Span::raw(counts),
        Span::raw(" | "),
        Span::styled(help_text, theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
