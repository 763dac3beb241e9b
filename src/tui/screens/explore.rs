//! Explore tab: free-text search, category chips (←/→) and the matching
//! courses. Typing always goes to the search box.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{ListItem, Paragraph};

use crate::core::action::Action;
use crate::core::courses::Course;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{ListEvent, SelectableList, truncate};
use crate::tui::event::TuiEvent;

fn visible_courses<'a>(app: &'a App, tui: &TuiState) -> Vec<&'a Course> {
    let names = app.courses.category_names();
    let category = names.get(tui.category).copied();
    app.courses.filter(&tui.search.buffer, category)
}

pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    let category_count = app.courses.category_names().len();
    match event {
        TuiEvent::CursorLeft => {
            tui.category = tui.category.checked_sub(1).unwrap_or(category_count - 1);
            tui.list.reset();
            None
        }
        TuiEvent::CursorRight => {
            tui.category = (tui.category + 1) % category_count;
            tui.list.reset();
            None
        }
        TuiEvent::InputChar(_) | TuiEvent::Paste(_) | TuiEvent::Backspace => {
            tui.search.handle_event(event);
            tui.list.reset();
            None
        }
        TuiEvent::Escape => Some(Action::Back),
        _ => {
            let courses = visible_courses(app, tui);
            tui.list.set_len(courses.len());
            match tui.list.handle_event(event)? {
                ListEvent::Activate(index) => courses.get(index).map(|c| Action::OpenCourse(c.id)),
            }
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let [search_area, chips_area, list_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    tui.search.focused = true;
    tui.search.render(frame, search_area);

    let mut chips = Vec::new();
    for (i, name) in app.courses.category_names().into_iter().enumerate() {
        let style = if i == tui.category {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        chips.push(Span::styled(format!(" {name} "), style));
        chips.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(chips)), chips_area);

    let width = list_area.width.saturating_sub(8) as usize;
    let courses = visible_courses(app, tui);
    let title = format!("{} cursos encontrados", courses.len());
    let items: Vec<ListItem> = courses
        .iter()
        .map(|course| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::raw(truncate(&course.title, width.saturating_sub(10))),
                    Span::styled(
                        format!("  {}", course.price),
                        Style::default().fg(Color::Green),
                    ),
                ]),
                Line::styled(
                    format!(
                        "  {} · ★ {:.1} · {} alunos · {} · {}",
                        course.instructor,
                        course.rating,
                        course.students,
                        course.duration,
                        course.level
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    SelectableList::new(&mut tui.list, items, &title)
        .empty_text("Nenhum curso encontrado")
        .render(frame, list_area);
}
