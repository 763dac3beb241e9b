//! Explanations tab: the list of school classes, plus a shortcut to the plans.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{ListItem, Paragraph};

use crate::core::action::Action;
use crate::core::navigation::Screen;
use crate::core::plan::Plan;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::EventHandler;
use crate::tui::components::{ListEvent, SelectableList, plan_color, section_title};
use crate::tui::event::TuiEvent;

pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    let classes = &app.catalog.classes;
    // Last row is "Ver planos"
    tui.list.set_len(classes.len() + 1);
    match tui.list.handle_event(event) {
        Some(ListEvent::Activate(index)) => match classes.get(index) {
            Some(class) => Some(Action::OpenClass(class.id.clone())),
            None => Some(Action::Navigate(Screen::Subscription, None)),
        },
        None if *event == TuiEvent::Escape => Some(Action::Back),
        None => None,
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let [header, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let plan = app.plan();
    let banner = if plan == Plan::Free {
        "Assine o Pro para liberar todos os tópicos"
    } else {
        "Bons estudos!"
    };
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(section_title("Explicações por série")),
            Line::from(vec![
                Span::raw("Seu plano: "),
                Span::styled(plan.label(), Style::default().fg(plan_color(plan))),
                Span::styled(format!("  {banner}"), Style::default().fg(Color::DarkGray)),
            ]),
        ]),
        header,
    );

    let mut items: Vec<ListItem> = app
        .catalog
        .classes
        .iter()
        .map(|class| {
            ListItem::new(vec![
                Line::raw(class.name.clone()),
                Line::styled(
                    format!(
                        "  {} disciplinas · {} com conteúdo gratuito",
                        class.disciplines.len(),
                        class.free_disciplines()
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();
    items.push(ListItem::new(Line::styled(
        "★ Ver planos",
        Style::default().fg(Color::Yellow),
    )));

    SelectableList::new(&mut tui.list, items, "Séries").render(frame, list_area);
}
