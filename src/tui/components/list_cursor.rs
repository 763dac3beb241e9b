//! # ListCursor Component
//!
//! The highlighted row of whatever list the current screen shows.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ListCursor` lives in `TuiState` and is reset whenever the view changes
//! - `SelectableList` is created each frame with borrowed state
//!
//! The screen tells the cursor how many rows it has (`set_len`) before
//! routing an event, so the selection never points past the end.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    /// Enter on the row at this index.
    Activate(usize),
}

#[derive(Debug, Default)]
pub struct ListCursor {
    selected: usize,
    len: usize,
    list_state: ListState,
}

impl ListCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn reset(&mut self) {
        self.selected = 0;
        self.list_state = ListState::default();
    }
}

impl EventHandler for ListCursor {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if self.selected + 1 < self.len {
                    self.selected += 1;
                }
                None
            }
            TuiEvent::Submit if self.len > 0 => Some(ListEvent::Activate(self.selected)),
            _ => None,
        }
    }
}

/// Transient render wrapper around a `ListCursor`.
pub struct SelectableList<'a> {
    cursor: &'a mut ListCursor,
    items: Vec<ListItem<'a>>,
    title: &'a str,
    empty_text: &'a str,
}

impl<'a> SelectableList<'a> {
    pub fn new(cursor: &'a mut ListCursor, items: Vec<ListItem<'a>>, title: &'a str) -> Self {
        Self {
            cursor,
            items,
            title,
            empty_text: "Nenhum conteúdo disponível ainda",
        }
    }

    pub fn empty_text(mut self, text: &'a str) -> Self {
        self.empty_text = text;
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Line::from(format!(" {} ", self.title)))
            .padding(Padding::horizontal(1));

        self.cursor.set_len(self.items.len());
        if self.items.is_empty() {
            let empty = Paragraph::new(self.empty_text)
                .style(Style::default().fg(Color::DarkGray))
                .centered()
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.cursor.list_state.select(Some(self.cursor.selected));
        let list = List::new(self.items)
            .block(block)
            .highlight_symbol("› ")
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(list, area, &mut self.cursor.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_bounds() {
        let mut cursor = ListCursor::new();
        cursor.set_len(3);
        cursor.handle_event(&TuiEvent::CursorUp);
        assert_eq!(cursor.selected(), 0);
        for _ in 0..5 {
            cursor.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(cursor.selected(), 2);
        assert_eq!(
            cursor.handle_event(&TuiEvent::Submit),
            Some(ListEvent::Activate(2))
        );
    }

    #[test]
    fn test_empty_list_never_activates() {
        let mut cursor = ListCursor::new();
        cursor.set_len(0);
        assert_eq!(cursor.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_shrinking_list_clamps_selection() {
        let mut cursor = ListCursor::new();
        cursor.set_len(5);
        cursor.handle_event(&TuiEvent::CursorDown);
        cursor.handle_event(&TuiEvent::CursorDown);
        cursor.set_len(2);
        assert_eq!(cursor.selected(), 1);
        cursor.reset();
        assert_eq!(cursor.selected(), 0);
    }
}
