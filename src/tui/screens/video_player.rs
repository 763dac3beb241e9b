//! Video player: simulated playback plus the optional lesson quiz overlay.
//!
//! ```text
//! Space play/pause   ←/→ skip   0 restart   x quiz   Esc back
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph};

use crate::core::action::Action;
use crate::core::player::format_time;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::event::TuiEvent;
use crate::tui::screens::quiz;

pub fn handle_event(app: &App, _tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if let Some(attempt) = &app.lesson_quiz {
        return match event {
            TuiEvent::Escape => Some(Action::CloseLessonQuiz),
            TuiEvent::Submit if attempt.is_finished() => Some(Action::CloseLessonQuiz),
            _ => quiz::handle_event(attempt, event),
        };
    }

    let skip = app.skip_secs as i32;
    match event {
        TuiEvent::Escape => Some(Action::Back),
        TuiEvent::InputChar(' ') | TuiEvent::Submit => Some(Action::TogglePlayback),
        TuiEvent::CursorLeft => Some(Action::SkipPlayback(-skip)),
        TuiEvent::CursorRight => Some(Action::SkipPlayback(skip)),
        TuiEvent::InputChar('0') => Some(Action::SeekPlayback(0)),
        TuiEvent::InputChar('x') => Some(Action::StartLessonQuiz),
        _ => None,
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App, _tui: &mut TuiState) {
    let [video_area, info_area, progress_area, hint_area] = Layout::vertical([
        Constraint::Min(5),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .areas(area);

    let playback = &app.playback;
    let glyph = if playback.is_complete() {
        "↺  Aula concluída"
    } else if playback.is_playing() {
        "❚❚  Reproduzindo"
    } else {
        "▶  Pausado"
    };
    frame.render_widget(
        Paragraph::new(glyph)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .centered()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            ),
        video_area,
    );

    let info = match app.current_playback_target() {
        Some(target) => {
            let badge = if target.free {
                Span::styled("  Gratuito", Style::default().fg(Color::Green))
            } else {
                Span::styled("  Premium", Style::default().fg(Color::Yellow))
            };
            vec![
                Line::from(vec![
                    Span::styled(
                        target.lesson_title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    badge,
                ]),
                Line::raw(target.course_title.clone()),
                Line::styled(
                    format!("{} · {}", target.instructor, target.duration),
                    Style::default().fg(Color::DarkGray),
                ),
            ]
        }
        None => vec![Line::styled(
            "Aula sem informações",
            Style::default().fg(Color::DarkGray),
        )],
    };
    frame.render_widget(Paragraph::new(info), info_area);

    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Red))
            .percent(playback.progress_percent().min(100))
            .label(format!(
                "{} / {}",
                format_time(playback.position()),
                format_time(playback.duration())
            )),
        Rect {
            height: 1,
            ..progress_area
        },
    );

    frame.render_widget(
        Paragraph::new(format!(
            "Espaço play/pausa  ←/→ {}s  0 reiniciar  x quiz da aula  Esc voltar",
            app.skip_secs
        ))
        .style(Style::default().fg(Color::DarkGray)),
        hint_area,
    );

    if let Some(attempt) = &app.lesson_quiz {
        let overlay = centered(area, 80, 80);
        frame.render_widget(Clear, overlay);
        quiz::render(frame, overlay, attempt, "Enter/Esc fechar");
    }
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(ratatui::layout::Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(ratatui::layout::Flex::Center)
        .areas(row);
    cell
}
