//! Messages tab. Two views share the screen: the conversation list, with
//! a search box that filters by mentor, and one open conversation with a
//! draft box. Esc closes the conversation before leaving the tab.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, ListItem, Paragraph, Wrap};

use crate::core::action::Action;
use crate::core::messages::{Conversation, Sender};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{InputEvent, ListEvent, SelectableList, truncate};
use crate::tui::event::TuiEvent;

pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match tui.conversation {
        Some(id) => handle_conversation(tui, id, event),
        None => handle_list(app, tui, event),
    }
}

fn handle_list(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::InputChar(_) | TuiEvent::Paste(_) | TuiEvent::Backspace => {
            tui.search.handle_event(event);
            tui.list.reset();
            None
        }
        TuiEvent::Escape => Some(Action::Back),
        _ => {
            let conversations = app.inbox.filter(&tui.search.buffer);
            tui.list.set_len(conversations.len());
            let ListEvent::Activate(index) = tui.list.handle_event(event)?;
            let id = conversations.get(index)?.id;
            tui.conversation = Some(id);
            tui.draft.clear();
            Some(Action::OpenConversation(id))
        }
    }
}

fn handle_conversation(tui: &mut TuiState, id: u32, event: &TuiEvent) -> Option<Action> {
    if *event == TuiEvent::Escape {
        tui.conversation = None;
        tui.draft.clear();
        return None;
    }
    match tui.draft.handle_event(event)? {
        InputEvent::Submit(text) if !text.trim().is_empty() => {
            tui.draft.clear();
            Some(Action::SendMessage {
                conversation_id: id,
                text,
            })
        }
        _ => None,
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    match tui.conversation.and_then(|id| app.inbox.find(id)) {
        Some(conversation) => render_conversation(frame, area, conversation, tui),
        None => render_list(frame, area, app, tui),
    }
}

fn render_list(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let [search_area, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    tui.search.focused = true;
    tui.search.render(frame, search_area);

    let width = list_area.width.saturating_sub(8) as usize;
    let items: Vec<ListItem> = app
        .inbox
        .filter(&tui.search.buffer)
        .into_iter()
        .map(|conversation| {
            let mentor = &conversation.mentor;
            let presence = if mentor.online {
                Span::styled("● ", Style::default().fg(Color::Green))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            };
            let mut header = vec![
                presence,
                Span::styled(
                    format!("[{}] {}", mentor.initials(), mentor.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", mentor.specialty),
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            if conversation.unread > 0 {
                header.push(Span::styled(
                    format!("  ({})", conversation.unread),
                    Style::default().fg(Color::Cyan),
                ));
            }
            let preview = conversation
                .last_message()
                .map(|m| format!("  {}  {}", m.time, truncate(&m.text, width.saturating_sub(8))))
                .unwrap_or_default();
            ListItem::new(vec![
                Line::from(header),
                Line::styled(preview, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    SelectableList::new(&mut tui.list, items, "Conversas")
        .empty_text("Nenhuma conversa encontrada")
        .render(frame, list_area);
}

fn render_conversation(
    frame: &mut Frame,
    area: Rect,
    conversation: &Conversation,
    tui: &mut TuiState,
) {
    let [history_area, draft_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

    let lines: Vec<Line> = conversation
        .messages
        .iter()
        .map(|message| {
            let (who, color) = match message.sender {
                Sender::Mentor => (conversation.mentor.name.as_str(), Color::Cyan),
                Sender::Student => ("Você", Color::Green),
            };
            Line::from(vec![
                Span::styled(format!("{} ", message.time), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{who}: "), Style::default().fg(color)),
                Span::raw(message.text.as_str()),
            ])
        })
        .collect();

    // Keep the newest messages in view.
    let inner_height = history_area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;
    let status = if conversation.mentor.online { "online" } else { "offline" };
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(format!(
                        " {} · {} ({status}) ",
                        conversation.mentor.name, conversation.mentor.specialty
                    ))
                    .title_bottom(" Esc voltar "),
            ),
        history_area,
    );

    tui.draft.focused = true;
    tui.draft.render(frame, draft_area);
}
