//! Course detail: summary, progress through the syllabus, and the lessons.
//! Only free or already completed lessons play; `p` starts the first free one.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, ListItem, Paragraph};

use crate::core::action::Action;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::EventHandler;
use crate::tui::components::{ListEvent, SelectableList};
use crate::tui::event::TuiEvent;

pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if *event == TuiEvent::Escape {
        return Some(Action::Back);
    }
    let course = app.current_course()?;
    if *event == TuiEvent::InputChar('p') {
        return app
            .courses
            .first_free_lesson()
            .map(|lesson_index| Action::PlayCourseLesson {
                course_id: course.id,
                lesson_index,
            });
    }
    tui.list.set_len(app.courses.syllabus.len());
    let ListEvent::Activate(lesson_index) = tui.list.handle_event(event)?;
    Some(Action::PlayCourseLesson {
        course_id: course.id,
        lesson_index,
    })
}

pub fn render(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let Some(course) = app.current_course() else {
        SelectableList::new(&mut tui.list, Vec::new(), "Curso")
            .empty_text("Curso não encontrado")
            .render(frame, area);
        return;
    };

    let [header, gauge_area, list_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(
                course.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::raw(format!("por {}", course.instructor)),
            Line::from(vec![
                Span::styled(
                    format!("★ {:.1}", course.rating),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!(
                        "  {} alunos · {} · {}",
                        course.students, course.duration, course.level
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(vec![
                Span::styled(course.price.clone(), Style::default().fg(Color::Green)),
                Span::styled(
                    "   p assistir aula grátis",
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ]),
        header,
    );

    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan))
            .percent(app.courses.syllabus_progress().min(100))
            .label(format!("{}% concluído", app.courses.syllabus_progress())),
        gauge_area,
    );

    let items: Vec<ListItem> = app
        .courses
        .syllabus
        .iter()
        .enumerate()
        .map(|(i, lesson)| {
            let (marker, style) = if lesson.completed {
                ("✓", Style::default().fg(Color::Green))
            } else if lesson.is_playable() {
                ("▶", Style::default())
            } else {
                ("🔒", Style::default().fg(Color::DarkGray))
            };
            let mut spans = vec![
                Span::styled(format!("{marker} {}. {}", i + 1, lesson.title), style),
                Span::styled(
                    format!("  {}", lesson.duration),
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            if lesson.free {
                spans.push(Span::styled("  Grátis", Style::default().fg(Color::Green)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    SelectableList::new(&mut tui.list, items, "Conteúdo do curso").render(frame, list_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::core::plan::Plan;
    use crate::test_support::logged_in_app;

    #[test]
    fn test_enter_plays_selected_lesson() {
        let mut app = logged_in_app(Plan::Free);
        update(&mut app, Action::OpenCourse(3));
        let mut tui = TuiState::new();
        handle_event(&app, &mut tui, &TuiEvent::CursorDown);
        assert_eq!(
            handle_event(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::PlayCourseLesson {
                course_id: 3,
                lesson_index: 1
            })
        );
    }

    #[test]
    fn test_p_plays_first_free_lesson() {
        let mut app = logged_in_app(Plan::Free);
        update(&mut app, Action::OpenCourse(2));
        let mut tui = TuiState::new();
        assert_eq!(
            handle_event(&app, &mut tui, &TuiEvent::InputChar('p')),
            Some(Action::PlayCourseLesson {
                course_id: 2,
                lesson_index: 0
            })
        );
    }
}
