//! Task list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the task list.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Tasks;
    let store = app.store();
    let edit_index = store.edit_index();

    let items: Vec<ListItem> = store
        .tasks()
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let checkbox = if task.is_checked { "[x]" } else { "[ ]" };
            let text_style = if task.is_done {
                theme::dimmed().add_modifier(Modifier::CROSSED_OUT)
            } else {
                theme::normal()
            };

            let mut spans = vec![
                Span::styled(checkbox, theme::normal().fg(theme::CHECKBOX)),
                Span::raw(" "),
                Span::styled(task.text.as_str(), text_style),
            ];
            if edit_index == Some(idx) {
                spans.push(Span::styled(" (editing)", theme::editing()));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!("Tasks ({})", store.len());
    let block = Block::default()
        .title(Span::styled(title, theme::panel_title(theme::TASKS_TITLE)))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let list = List::new(items).block(block).highlight_style(if is_focused {
        theme::selected()
    } else {
        theme::highlighted()
    });

    let mut state = ListState::default();
    if !store.is_empty() {
        state.select(Some(app.selected));
    }

    frame.render_stateful_widget(list, area, &mut state);
}
