//! Topic detail: lessons and exercises on two sub-tabs (←/→).

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{ListItem, Paragraph};

use crate::core::action::Action;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{ListEvent, SelectableList, availability_badge, row_style};
use crate::tui::event::TuiEvent;
use crate::tui::{TopicTab, TuiState};

pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Escape => return Some(Action::Back),
        TuiEvent::CursorLeft | TuiEvent::CursorRight => {
            tui.topic_tab = tui.topic_tab.toggle();
            tui.list.reset();
            return None;
        }
        _ => {}
    }

    let path = app.catalog_path();
    let topic = app.current_topic()?;
    let len = match tui.topic_tab {
        TopicTab::Lessons => topic.lessons.len(),
        TopicTab::Exercises => topic.exercises.len(),
    };
    tui.list.set_len(len);
    let ListEvent::Activate(index) = tui.list.handle_event(event)?;

    let class_id = path.class_id?.to_string();
    let discipline_id = path.discipline_id?.to_string();
    let topic_id = topic.id.clone();
    match tui.topic_tab {
        TopicTab::Lessons => Some(Action::OpenLesson {
            class_id,
            discipline_id,
            topic_id,
            lesson_id: topic.lessons.get(index)?.id.clone(),
        }),
        TopicTab::Exercises => Some(Action::OpenExercise {
            class_id,
            discipline_id,
            topic_id,
            exercise_id: topic.exercises.get(index)?.id.clone(),
        }),
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let plan = app.plan();
    let Some(topic) = app.current_topic() else {
        SelectableList::new(&mut tui.list, Vec::new(), "Tópico").render(frame, area);
        return;
    };

    let [header, tabs, list_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let stats = topic.content_stats(plan);
    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(
                topic.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                format!(
                    "{} de {} aulas · {} de {} exercícios disponíveis",
                    stats.accessible_lessons,
                    stats.total_lessons,
                    stats.accessible_exercises,
                    stats.total_exercises
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        header,
    );

    let tab_style = |tab: TopicTab| {
        if tab == tui.topic_tab {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    };
    frame.render_widget(
        Line::from(vec![
            Span::styled(
                format!(" Aulas ({}) ", topic.lessons.len()),
                tab_style(TopicTab::Lessons),
            ),
            Span::raw(" "),
            Span::styled(
                format!(" Exercícios ({}) ", topic.exercises.len()),
                tab_style(TopicTab::Exercises),
            ),
        ]),
        tabs,
    );

    let (items, title): (Vec<ListItem>, &str) = match tui.topic_tab {
        TopicTab::Lessons => (
            topic
                .lessons
                .iter()
                .map(|lesson| {
                    let availability = lesson.availability(plan);
                    ListItem::new(vec![
                        Line::from(vec![
                            Span::styled(format!("▶ {}", lesson.title), row_style(availability)),
                            Span::styled(
                                format!("  {}", lesson.duration),
                                Style::default().fg(Color::DarkGray),
                            ),
                            availability_badge(availability, lesson.required_plan),
                        ]),
                        Line::styled(
                            format!("  {}", lesson.description),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ])
                })
                .collect(),
            "Aulas",
        ),
        TopicTab::Exercises => (
            topic
                .exercises
                .iter()
                .map(|exercise| {
                    let availability = exercise.availability(plan);
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("✎ {}", exercise.title), row_style(availability)),
                        Span::styled(
                            format!("  {} questões", exercise.questions.len()),
                            Style::default().fg(Color::DarkGray),
                        ),
                        availability_badge(availability, exercise.required_plan),
                    ]))
                })
                .collect(),
            "Exercícios",
        ),
    };

    SelectableList::new(&mut tui.list, items, title).render(frame, list_area);
}
