//! Plans screen. Enter on a plan switches to it and returns to the screen
//! that asked for the upgrade.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{ListItem, Paragraph};

use crate::core::action::Action;
use crate::core::plan::Plan;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::EventHandler;
use crate::tui::components::{ListEvent, SelectableList, plan_color, section_title};
use crate::tui::event::TuiEvent;

pub fn handle_event(_app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if *event == TuiEvent::Escape {
        return Some(Action::Back);
    }
    tui.list.set_len(Plan::ALL.len());
    let ListEvent::Activate(index) = tui.list.handle_event(event)?;
    Plan::ALL.get(index).map(|plan| Action::ChangeSubscription(*plan))
}

pub fn render(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let [header, list_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(section_title("Escolha seu plano")),
            Line::styled(
                "Desbloqueie todo o conteúdo e acelere seu aprendizado",
                Style::default().fg(Color::Gray),
            ),
        ]),
        header,
    );

    let current = app.plan();
    let items: Vec<ListItem> = Plan::ALL
        .iter()
        .map(|&plan| {
            let mut title = vec![
                Span::styled(
                    plan.label(),
                    Style::default()
                        .fg(plan_color(plan))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  {}", plan.price())),
            ];
            if plan == Plan::Pro {
                title.push(Span::styled("  Mais popular", Style::default().fg(Color::Yellow)));
            }
            if plan == current {
                title.push(Span::styled("  ✓ Plano atual", Style::default().fg(Color::Green)));
            }
            let mut lines = vec![Line::from(title)];
            lines.extend(plan.features().iter().map(|feature| {
                Line::styled(format!("  ✓ {feature}"), Style::default().fg(Color::DarkGray))
            }));
            lines.push(Line::raw(""));
            ListItem::new(lines)
        })
        .collect();

    SelectableList::new(&mut tui.list, items, "Planos").render(frame, list_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::logged_in_app;

    #[test]
    fn test_enter_changes_to_selected_plan() {
        let app = logged_in_app(Plan::Free);
        let mut tui = TuiState::new();
        handle_event(&app, &mut tui, &TuiEvent::CursorDown);
        handle_event(&app, &mut tui, &TuiEvent::CursorDown);
        assert_eq!(
            handle_event(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::ChangeSubscription(Plan::ProPlus))
        );
    }
}
