//! Login form with three views: sign in, sign up and sign in by code.
//! Any input is accepted; there is no real authentication.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::action::Action;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{InputEvent, TextInput};
use crate::tui::event::TuiEvent;
use crate::tui::{LoginField, LoginMode, TuiState};

fn input(tui: &mut TuiState, field: LoginField) -> &mut TextInput {
    match field {
        LoginField::Name => &mut tui.name,
        LoginField::Email => &mut tui.email,
        LoginField::Password => &mut tui.password,
        LoginField::Code => &mut tui.code,
    }
}

fn switch_mode(tui: &mut TuiState, mode: LoginMode) {
    tui.login_mode = mode;
    tui.login_focus = mode.fields()[0];
}

/// Moves focus to the next or previous field of the current view, wrapping.
fn move_focus(tui: &mut TuiState, forward: bool) {
    let fields = tui.login_mode.fields();
    let i = fields
        .iter()
        .position(|f| *f == tui.login_focus)
        .unwrap_or(0);
    let next = if forward {
        (i + 1) % fields.len()
    } else {
        (i + fields.len() - 1) % fields.len()
    };
    tui.login_focus = fields[next];
}

pub fn handle_event(tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if !tui.login_mode.fields().contains(&tui.login_focus) {
        tui.login_focus = tui.login_mode.fields()[0];
    }
    match event {
        TuiEvent::CursorDown | TuiEvent::NextTab => {
            move_focus(tui, true);
            None
        }
        TuiEvent::CursorUp | TuiEvent::PrevTab => {
            move_focus(tui, false);
            None
        }
        TuiEvent::CursorRight => {
            switch_mode(tui, tui.login_mode.next());
            None
        }
        TuiEvent::CursorLeft => {
            switch_mode(tui, tui.login_mode.prev());
            None
        }
        TuiEvent::Escape if tui.login_mode != LoginMode::SignIn => {
            switch_mode(tui, LoginMode::SignIn);
            None
        }
        _ => {
            let focus = tui.login_focus;
            match input(tui, focus).handle_event(event)? {
                InputEvent::Submit(_) if tui.login_mode.fields().last() == Some(&focus) => {
                    Some(Action::Login)
                }
                InputEvent::Submit(_) => {
                    move_focus(tui, true);
                    None
                }
                InputEvent::ContentChanged => None,
            }
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, tui: &mut TuiState) {
    let fields = tui.login_mode.fields();
    let [form] = Layout::horizontal([Constraint::Max(48)])
        .flex(Flex::Center)
        .areas(area);

    let mut constraints = vec![Constraint::Length(4), Constraint::Length(2)];
    constraints.extend(fields.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Length(2));
    let areas = Layout::vertical(constraints).flex(Flex::Center).split(form);

    let heading = Paragraph::new(vec![
        Line::styled(
            "EduApp",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Aprenda no seu ritmo, onde estiver",
            Style::default().fg(Color::Gray),
        ),
    ])
    .centered();
    frame.render_widget(heading, areas[0]);

    let mut modes = Vec::new();
    for mode in LoginMode::ALL {
        let style = if mode == tui.login_mode {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        modes.push(Span::styled(format!(" {} ", mode.label()), style));
        modes.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(modes)).centered(), areas[1]);

    let focus = tui.login_focus;
    for (field, field_area) in fields.iter().zip(areas.iter().skip(2)) {
        let widget = input(tui, *field);
        widget.focused = *field == focus;
        widget.render(frame, *field_area);
    }

    let hint = match tui.login_mode {
        LoginMode::Code => "Enviamos um código para o seu e-mail",
        _ => "Enter entrar  ↑/↓ trocar campo  ←/→ trocar modo  Ctrl+Q sair",
    };
    frame.render_widget(
        Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .centered(),
        areas[areas.len() - 1],
    );
}
