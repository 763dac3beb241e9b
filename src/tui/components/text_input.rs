//! # TextInput Component
//!
//! Single-line text entry used by the login form, the search boxes and the
//! chat draft. Characters are appended at the end; there is no in-line
//! cursor movement, so ←/→ stay free for the screens.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the TextInput
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Enter with the current text
    Submit(String),
    /// Text content changed
    ContentChanged,
}

#[derive(Debug, Default)]
pub struct TextInput {
    pub buffer: String,
    /// Prop: render as bullets (password field).
    pub masked: bool,
    /// Prop: draw the terminal cursor and highlight the border.
    pub focused: bool,
    /// Prop: shown in the border.
    pub title: String,
    /// Prop: shown dimmed while the buffer is empty.
    pub placeholder: String,
}

impl TextInput {
    pub fn new(title: &str, placeholder: &str) -> Self {
        Self {
            title: title.to_string(),
            placeholder: placeholder.to_string(),
            ..Self::default()
        }
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    fn display_text(&self) -> String {
        if self.masked {
            "•".repeat(self.buffer.chars().count())
        } else {
            self.buffer.clone()
        }
    }
}

impl Component for TextInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", self.title));

        let text = self.display_text();
        let paragraph = if text.is_empty() {
            Paragraph::new(self.placeholder.as_str()).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(text.as_str())
        }
        .block(block);
        frame.render_widget(paragraph, area);

        if self.focused && area.height >= 3 {
            let max_x = area.x + area.width.saturating_sub(2);
            let x = (area.x + 1 + text.width() as u16).min(max_x);
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl EventHandler for TextInput {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<InputEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single line: newlines become spaces
                self.buffer
                    .extend(text.chars().map(|c| if c == '\n' { ' ' } else { c }));
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => self.buffer.pop().map(|_| InputEvent::ContentChanged),
            TuiEvent::Submit => Some(InputEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_backspace() {
        let mut input = TextInput::new("Buscar", "");
        input.handle_event(&TuiEvent::InputChar('o'));
        input.handle_event(&TuiEvent::InputChar('á'));
        assert_eq!(input.buffer, "oá");
        assert_eq!(
            input.handle_event(&TuiEvent::Backspace),
            Some(InputEvent::ContentChanged)
        );
        assert_eq!(input.buffer, "o");
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = TextInput::new("Mensagem", "");
        input.handle_event(&TuiEvent::Paste("a\nb".to_string()));
        assert_eq!(input.buffer, "a b");
    }

    #[test]
    fn test_submit_returns_buffer() {
        let mut input = TextInput::new("Senha", "").masked();
        input.handle_event(&TuiEvent::InputChar('x'));
        assert_eq!(input.display_text(), "•");
        assert_eq!(
            input.handle_event(&TuiEvent::Submit),
            Some(InputEvent::Submit("x".to_string()))
        );
    }

    #[test]
    fn test_arrows_are_not_consumed() {
        let mut input = TextInput::new("Buscar", "");
        assert_eq!(input.handle_event(&TuiEvent::CursorLeft), None);
        assert_eq!(input.handle_event(&TuiEvent::CursorUp), None);
    }
}
