//! # TitleBar Component
//!
//! One line at the top: app name, current screen, plan badge, and the
//! status message from the last action.
//!
//! ```text
//! EduApp · Explicações  [Pro]  | Plano alterado para Pro
//! ```
//!
//! Stateless: every field is a prop filled from `App` each frame.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::plan::Plan;
use crate::tui::component::Component;
use crate::tui::components::plan_color;

pub struct TitleBar {
    pub screen_title: String,
    pub plan: Plan,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(screen_title: String, plan: Plan, status_message: String) -> Self {
        Self {
            screen_title,
            plan,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("EduApp", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" · "),
            Span::raw(self.screen_title.clone()),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", self.plan.label()),
                Style::default().fg(plan_color(self.plan)),
            ),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!("  | {}", self.status_message),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
