//! Profile tab: user card, current plan and the settings menu.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{ListItem, Paragraph};

use crate::core::action::Action;
use crate::core::navigation::Screen;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::EventHandler;
use crate::tui::components::{ListEvent, SelectableList, plan_color};
use crate::tui::event::TuiEvent;

const USER_NAME: &str = "Ana Silva";
const USER_EMAIL: &str = "ana.silva@email.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Subscription,
    Activity,
    Account,
    Notifications,
    Privacy,
    Downloads,
    Help,
    Logout,
}

const MENU: [MenuItem; 8] = [
    MenuItem::Subscription,
    MenuItem::Activity,
    MenuItem::Account,
    MenuItem::Notifications,
    MenuItem::Privacy,
    MenuItem::Downloads,
    MenuItem::Help,
    MenuItem::Logout,
];

impl MenuItem {
    fn label(self) -> &'static str {
        match self {
            MenuItem::Subscription => "Assinatura",
            MenuItem::Activity => "Minha atividade",
            MenuItem::Account => "Configurações da conta",
            MenuItem::Notifications => "Notificações",
            MenuItem::Privacy => "Privacidade e segurança",
            MenuItem::Downloads => "Downloads",
            MenuItem::Help => "Ajuda e suporte",
            MenuItem::Logout => "Sair",
        }
    }

    /// Settings pages aren't implemented; those rows do nothing.
    fn action(self) -> Option<Action> {
        match self {
            MenuItem::Subscription => Some(Action::Navigate(Screen::Subscription, None)),
            MenuItem::Activity => Some(Action::Navigate(Screen::Activity, None)),
            MenuItem::Logout => Some(Action::Logout),
            _ => None,
        }
    }
}

pub fn handle_event(_app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if *event == TuiEvent::Escape {
        return Some(Action::Back);
    }
    tui.list.set_len(MENU.len());
    let ListEvent::Activate(index) = tui.list.handle_event(event)?;
    MENU.get(index).and_then(|item| item.action())
}

pub fn render(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let [card_area, menu_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let plan = app.plan();
    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(USER_NAME, Style::default().add_modifier(Modifier::BOLD)),
            Line::styled(USER_EMAIL, Style::default().fg(Color::DarkGray)),
            Line::from(vec![
                Span::raw("Plano "),
                Span::styled(
                    plan.label(),
                    Style::default()
                        .fg(plan_color(plan))
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ]),
        card_area,
    );

    let items: Vec<ListItem> = MENU
        .iter()
        .map(|item| {
            let style = if *item == MenuItem::Logout {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(item.label(), style))
        })
        .collect();
    SelectableList::new(&mut tui.list, items, "Conta").render(frame, menu_area);
}
