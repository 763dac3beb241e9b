//! Home tab: greeting, courses in progress, featured categories and the most
//! popular courses, in one selectable list.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{ListItem, Paragraph};

use crate::core::action::Action;
use crate::core::navigation::{Screen, ScreenData};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::EventHandler;
use crate::tui::components::{ListEvent, SelectableList, section_title, truncate};
use crate::tui::event::TuiEvent;

const POPULAR_LIMIT: usize = 4;

#[derive(Debug, Clone, PartialEq)]
enum HomeRow {
    Continue(u32),
    Category(String),
    Popular(u32),
}

fn rows(app: &App) -> Vec<HomeRow> {
    let mut rows: Vec<HomeRow> = app
        .courses
        .in_progress()
        .iter()
        .map(|c| HomeRow::Continue(c.id))
        .collect();
    rows.extend(
        app.courses
            .featured_categories()
            .map(|c| HomeRow::Category(c.name.clone())),
    );
    rows.extend(
        app.courses
            .popular(POPULAR_LIMIT)
            .iter()
            .map(|c| HomeRow::Popular(c.id)),
    );
    rows
}

pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    let rows = rows(app);
    tui.list.set_len(rows.len());
    match tui.list.handle_event(event) {
        Some(ListEvent::Activate(index)) => match rows.get(index)? {
            HomeRow::Continue(id) | HomeRow::Popular(id) => Some(Action::OpenCourse(*id)),
            HomeRow::Category(name) => Some(Action::Navigate(
                Screen::Explore,
                Some(ScreenData::Explore {
                    category: Some(name.clone()),
                }),
            )),
        },
        None if *event == TuiEvent::Escape => Some(Action::Back),
        None => None,
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let [greeting, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(section_title("Olá, Ana!")),
            Line::styled(
                "Pronta para aprender hoje?",
                Style::default().fg(Color::Gray),
            ),
        ]),
        greeting,
    );

    let width = list_area.width.saturating_sub(8) as usize;
    let items: Vec<ListItem> = rows(app)
        .into_iter()
        .filter_map(|row| {
            let line = match row {
                HomeRow::Continue(id) => {
                    let course = app.courses.find(id)?;
                    Line::from(vec![
                        Span::styled("▶ Continue  ", Style::default().fg(Color::Green)),
                        Span::raw(truncate(&course.title, width.saturating_sub(20))),
                        Span::styled(
                            format!("  {}%", course.progress.unwrap_or(0)),
                            Style::default().fg(Color::Green),
                        ),
                    ])
                }
                HomeRow::Category(name) => {
                    let count = app
                        .courses
                        .categories
                        .iter()
                        .find(|c| c.name == name)
                        .and_then(|c| c.course_count)
                        .map(|n| format!("  {n} cursos"))
                        .unwrap_or_default();
                    Line::from(vec![
                        Span::styled("# Categoria ", Style::default().fg(Color::Cyan)),
                        Span::raw(name),
                        Span::styled(count, Style::default().fg(Color::DarkGray)),
                    ])
                }
                HomeRow::Popular(id) => {
                    let course = app.courses.find(id)?;
                    Line::from(vec![
                        Span::styled(
                            format!("★ {:.1}  ", course.rating),
                            Style::default().fg(Color::Yellow),
                        ),
                        Span::raw(truncate(&course.title, width.saturating_sub(30))),
                        Span::styled(
                            format!("  {} · {}", course.instructor, course.price),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ])
                }
            };
            Some(ListItem::new(line))
        })
        .collect();

    SelectableList::new(
        &mut tui.list,
        items,
        "Continue assistindo · Categorias · Cursos populares",
    )
    .render(frame, list_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::plan::Plan;
    use crate::test_support::logged_in_app;

    #[test]
    fn test_rows_in_section_order() {
        let app = logged_in_app(Plan::Free);
        let rows = rows(&app);
        assert_eq!(rows[0], HomeRow::Continue(1));
        assert_eq!(rows[1], HomeRow::Continue(2));
        assert_eq!(rows[2], HomeRow::Category("Programação".into()));
        assert_eq!(rows.len(), 2 + 4 + POPULAR_LIMIT);
    }

    #[test]
    fn test_category_row_opens_explore_with_payload() {
        let app = logged_in_app(Plan::Free);
        let mut tui = TuiState::new();
        tui.list.set_len(rows(&app).len());
        tui.list.handle_event(&TuiEvent::CursorDown);
        tui.list.handle_event(&TuiEvent::CursorDown);
        let action = handle_event(&app, &mut tui, &TuiEvent::Submit);
        assert_eq!(
            action,
            Some(Action::Navigate(
                Screen::Explore,
                Some(ScreenData::Explore {
                    category: Some("Programação".into())
                })
            ))
        );
    }
}
