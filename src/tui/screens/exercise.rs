//! Exercise screen: the attempt created when the screen opened.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::action::Action;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::event::TuiEvent;
use crate::tui::screens::quiz;

pub fn handle_event(app: &App, _tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if *event == TuiEvent::Escape {
        return Some(Action::Back);
    }
    let attempt = app.attempt.as_ref()?;
    if attempt.is_finished() && *event == TuiEvent::Submit {
        return Some(Action::Back);
    }
    quiz::handle_event(attempt, event)
}

pub fn render(frame: &mut Frame, area: Rect, app: &App, _tui: &mut TuiState) {
    match &app.attempt {
        Some(attempt) => quiz::render(frame, area, attempt, "Enter voltar ao tópico"),
        None => frame.render_widget(
            Paragraph::new("Exercício não encontrado")
                .style(Style::default().fg(Color::DarkGray))
                .centered()
                .block(Block::default().borders(Borders::ALL)),
            area,
        ),
    }
}
