//! # BottomNav Component
//!
//! The tab bar shown under every tab-rooted screen. Highlights the active
//! tab and shows the unread count next to Mensagens.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::navigation::Tab;
use crate::tui::component::Component;

pub struct BottomNav {
    pub active: Tab,
    pub unread: u32,
}

impl BottomNav {
    pub fn new(active: Tab, unread: u32) -> Self {
        Self { active, unread }
    }

    fn label(&self, tab: Tab) -> String {
        if tab == Tab::Messages && self.unread > 0 {
            format!(" {} ({}) ", tab.label(), self.unread)
        } else {
            format!(" {} ", tab.label())
        }
    }
}

impl Component for BottomNav {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for tab in Tab::ALL {
            let style = if tab == self.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(self.label(tab), style));
            spans.push(Span::raw(" "));
        }
        let bar = Paragraph::new(Line::from(spans).centered()).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray))
                .title_bottom(Line::from(" Tab/Shift+Tab trocar aba ").right_aligned()),
        );
        frame.render_widget(bar, area);
    }
}
