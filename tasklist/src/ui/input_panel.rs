//! Input box and validation error line.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the input box.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Input;
    let input = app.store().input();

    let input_line = if input.is_empty() && !is_focused {
        Line::from(Span::styled("Type something...", theme::dimmed()))
    } else if is_focused {
        // Split around the cursor so it can be drawn as a block
        let before: String = input.chars().take(app.cursor_position).collect();
        let mut rest = input.chars().skip(app.cursor_position);
        let under = rest.next().map_or_else(|| " ".to_string(), String::from);
        let after: String = rest.collect();
        Line::from(vec![
            Span::styled(before, theme::normal()),
            Span::styled(under, theme::input_cursor()),
            Span::styled(after, theme::normal()),
        ])
    } else {
        Line::from(Span::styled(input, theme::normal()))
    };

    let title = match app.store().edit_index() {
        Some(i) => format!("Edit task {}", i + 1),
        None => "New task".to_string(),
    };

    let block = Block::default()
        .title(Span::styled(title, theme::panel_title(theme::INPUT_TITLE)))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    frame.render_widget(Paragraph::new(input_line).block(block), area);
}

/// Render the error message line. Draws nothing when there is no error.
pub fn render_error(frame: &mut Frame, area: Rect, app: &App) {
    let message = app.store().error_message();
    if message.is_empty() {
        return;
    }
    let line = Line::from(Span::styled(format!(" {message}"), theme::error()));
    frame.render_widget(Paragraph::new(line), area);
}
