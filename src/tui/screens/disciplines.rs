//! Disciplines of the selected class, dimmed when the plan opens none of
//! their topics.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

use crate::core::action::Action;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ListEvent, SelectableList, availability_badge, icon_glyph, row_style, tag_color,
};
use crate::tui::event::TuiEvent;

pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if *event == TuiEvent::Escape {
        return Some(Action::Back);
    }
    let class = app.current_class()?;
    tui.list.set_len(class.disciplines.len());
    match tui.list.handle_event(event)? {
        ListEvent::Activate(index) => {
            let discipline = class.disciplines.get(index)?;
            Some(Action::OpenDiscipline {
                class_id: class.id.clone(),
                discipline_id: discipline.id.clone(),
            })
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let plan = app.plan();
    let items: Vec<ListItem> = app
        .current_class()
        .map(|class| {
            class
                .disciplines
                .iter()
                .map(|discipline| {
                    let availability = discipline.availability(plan);
                    let stats = discipline.topic_stats(plan);
                    ListItem::new(vec![
                        Line::from(vec![
                            Span::styled(
                                format!("{} ", icon_glyph(discipline.icon)),
                                Style::default().fg(tag_color(&discipline.color)),
                            ),
                            Span::styled(discipline.name.clone(), row_style(availability)),
                            availability_badge(availability, discipline.entry_plan()),
                        ]),
                        Line::styled(
                            format!(
                                "  {} de {} tópicos disponíveis · {} gratuitos",
                                stats.accessible, stats.total, stats.free
                            ),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ])
                })
                .collect()
        })
        .unwrap_or_default();

    SelectableList::new(&mut tui.list, items, "Disciplinas").render(frame, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::core::plan::Plan;
    use crate::test_support::logged_in_app;

    #[test]
    fn test_enter_opens_selected_discipline() {
        let mut app = logged_in_app(Plan::Free);
        update(&mut app, Action::OpenClass("2".into()));
        let mut tui = TuiState::new();
        assert_eq!(
            handle_event(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::OpenDiscipline {
                class_id: "2".into(),
                discipline_id: "2-1".into()
            })
        );
    }

    #[test]
    fn test_without_class_only_back_works() {
        let app = logged_in_app(Plan::Free);
        let mut tui = TuiState::new();
        assert_eq!(handle_event(&app, &mut tui, &TuiEvent::Submit), None);
        assert_eq!(
            handle_event(&app, &mut tui, &TuiEvent::Escape),
            Some(Action::Back)
        );
    }
}
