//! # Screens
//!
//! One module per `Screen`. Each exposes the same two functions:
//!
//! ```text
//! handle_event(&App, &mut TuiState, &TuiEvent) -> Option<Action>
//! render(&mut Frame, Rect, &App, &mut TuiState)
//! ```
//!
//! Handlers read `App` and emit at most one `Action`; they only mutate
//! presentation state in `TuiState`. Esc maps to `Action::Back` unless the
//! screen has something of its own to close first.

pub mod activity;
pub mod course_detail;
pub mod disciplines;
pub mod exercise;
pub mod explanations;
pub mod explore;
pub mod home;
pub mod login;
pub mod messages;
pub mod profile;
mod quiz;
pub mod subscription;
pub mod topic_detail;
pub mod topics;
pub mod video_player;

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::action::Action;
use crate::core::navigation::Screen;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::event::TuiEvent;

pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match app.nav.current_screen() {
        Screen::Home => home::handle_event(app, tui, event),
        Screen::Explore => explore::handle_event(app, tui, event),
        Screen::Explanations => explanations::handle_event(app, tui, event),
        Screen::Disciplines => disciplines::handle_event(app, tui, event),
        Screen::Topics => topics::handle_event(app, tui, event),
        Screen::TopicDetail => topic_detail::handle_event(app, tui, event),
        Screen::Exercise => exercise::handle_event(app, tui, event),
        Screen::Subscription => subscription::handle_event(app, tui, event),
        Screen::CourseDetail => course_detail::handle_event(app, tui, event),
        Screen::VideoPlayer => video_player::handle_event(app, tui, event),
        Screen::Activity => activity::handle_event(app, tui, event),
        Screen::Messages => messages::handle_event(app, tui, event),
        Screen::Profile => profile::handle_event(app, tui, event),
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    match app.nav.current_screen() {
        Screen::Home => home::render(frame, area, app, tui),
        Screen::Explore => explore::render(frame, area, app, tui),
        Screen::Explanations => explanations::render(frame, area, app, tui),
        Screen::Disciplines => disciplines::render(frame, area, app, tui),
        Screen::Topics => topics::render(frame, area, app, tui),
        Screen::TopicDetail => topic_detail::render(frame, area, app, tui),
        Screen::Exercise => exercise::render(frame, area, app, tui),
        Screen::Subscription => subscription::render(frame, area, app, tui),
        Screen::CourseDetail => course_detail::render(frame, area, app, tui),
        Screen::VideoPlayer => video_player::render(frame, area, app, tui),
        Screen::Activity => activity::render(frame, area, app, tui),
        Screen::Messages => messages::render(frame, area, app, tui),
        Screen::Profile => profile::render(frame, area, app, tui),
    }
}

/// Heading shown in the title bar.
pub fn title(app: &App) -> String {
    match app.nav.current_screen() {
        Screen::Disciplines => app
            .current_class()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Disciplinas".to_string()),
        Screen::Topics => app
            .current_discipline()
            .map(|d| d.name.clone())
            .unwrap_or_else(|| "Tópicos".to_string()),
        Screen::TopicDetail => app
            .current_topic()
            .map(|t| t.name.clone())
            .unwrap_or_else(|| "Tópico".to_string()),
        Screen::Exercise => "Exercício".to_string(),
        Screen::Subscription => "Planos".to_string(),
        Screen::CourseDetail => "Curso".to_string(),
        Screen::VideoPlayer => "Aula".to_string(),
        other => other
            .as_tab()
            .map(|tab| tab.label().to_string())
            .unwrap_or_default(),
    }
}
