//! Topics of the selected discipline. Locked topics stay listed, dimmed,
//! and lead to the plans screen when opened.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, ListItem};

use crate::core::action::Action;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ListEvent, SelectableList, availability_badge, row_style, tag_color,
};
use crate::tui::event::TuiEvent;

pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if *event == TuiEvent::Escape {
        return Some(Action::Back);
    }
    let path = app.catalog_path();
    let discipline = app.current_discipline()?;
    tui.list.set_len(discipline.topics.len());
    match tui.list.handle_event(event)? {
        ListEvent::Activate(index) => {
            let topic = discipline.topics.get(index)?;
            Some(Action::OpenTopic {
                class_id: path.class_id?.to_string(),
                discipline_id: discipline.id.clone(),
                topic_id: topic.id.clone(),
            })
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let plan = app.plan();
    let Some(discipline) = app.current_discipline() else {
        SelectableList::new(&mut tui.list, Vec::new(), "Tópicos").render(frame, area);
        return;
    };

    let [gauge_area, list_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    let stats = discipline.topic_stats(plan);
    let ratio = if stats.total == 0 {
        0.0
    } else {
        stats.accessible as f64 / stats.total as f64
    };
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(tag_color(&discipline.color)))
            .ratio(ratio)
            .label(format!(
                "{} de {} tópicos no seu plano",
                stats.accessible, stats.total
            )),
        gauge_area,
    );

    let items: Vec<ListItem> = discipline
        .topics
        .iter()
        .map(|topic| {
            let availability = topic.availability(plan);
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(topic.name.clone(), row_style(availability)),
                    availability_badge(availability, topic.required_plan),
                ]),
                Line::styled(
                    format!(
                        "  {} aulas · {} exercícios",
                        topic.lessons.len(),
                        topic.exercises.len()
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    SelectableList::new(&mut tui.list, items, "Tópicos").render(frame, list_area);
}
