//! Activity tab: study stats, courses in progress and achievements.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, ListItem, Paragraph};

use crate::core::action::Action;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::EventHandler;
use crate::tui::components::{ListEvent, SelectableList, section_title, truncate};
use crate::tui::event::TuiEvent;

const STATS: [(&str, &str); 4] = [
    ("Cursos Concluídos", "12"),
    ("Horas Estudadas", "156h"),
    ("Sequência", "7 dias"),
    ("Certificados", "8"),
];

/// Name, description, progress percent.
const ACHIEVEMENTS: [(&str, &str, u16); 5] = [
    ("Primeira Semana", "Estudou 7 dias seguidos", 100),
    ("Maratonista", "Completou 5 aulas em um dia", 100),
    ("Colecionador", "Concluiu 10 cursos", 100),
    ("Especialista", "Conclua 20 cursos", 60),
    ("Dedicado", "Estude 500 horas", 23),
];

pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if *event == TuiEvent::Escape {
        return Some(Action::Back);
    }
    let courses = app.courses.in_progress();
    tui.list.set_len(courses.len());
    let ListEvent::Activate(index) = tui.list.handle_event(event)?;
    courses.get(index).map(|c| Action::OpenCourse(c.id))
}

pub fn render(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let [stats_area, goal_area, courses_area, achievements_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(4),
        Constraint::Length(ACHIEVEMENTS.len() as u16 + 1),
    ])
    .areas(area);

    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(stats_area);
    for ((label, value), column) in STATS.iter().zip(columns.iter()) {
        frame.render_widget(
            Paragraph::new(vec![
                Line::styled(
                    *value,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::styled(*label, Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
            *column,
        );
    }

    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Green))
            .percent(75)
            .label("Meta diária: 1h30 de 2h"),
        goal_area,
    );

    let width = courses_area.width.saturating_sub(8) as usize;
    let items: Vec<ListItem> = app
        .courses
        .in_progress()
        .iter()
        .map(|course| {
            let progress = course.progress.unwrap_or(0);
            ListItem::new(Line::from(vec![
                Span::raw(truncate(&course.title, width.saturating_sub(8))),
                Span::styled(
                    format!("  {progress}%"),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();
    SelectableList::new(&mut tui.list, items, "Continuar estudando")
        .empty_text("Nenhum curso em andamento")
        .render(frame, courses_area);

    let mut lines = vec![Line::from(section_title("Conquistas"))];
    lines.extend(ACHIEVEMENTS.iter().map(|(name, description, progress)| {
        let (marker, style) = if *progress >= 100 {
            ("🏆", Style::default().fg(Color::Yellow))
        } else {
            ("○", Style::default().fg(Color::DarkGray))
        };
        let mut spans = vec![
            Span::styled(format!("{marker} {name}"), style),
            Span::styled(
                format!("  {description}"),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if *progress < 100 {
            spans.push(Span::raw(format!("  {progress}%")));
        }
        Line::from(spans)
    }));
    frame.render_widget(Paragraph::new(lines), achievements_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::plan::Plan;
    use crate::test_support::logged_in_app;

    #[test]
    fn test_enter_opens_course_in_progress() {
        let app = logged_in_app(Plan::Free);
        let mut tui = TuiState::new();
        let first = app.courses.in_progress()[0].id;
        assert_eq!(
            handle_event(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::OpenCourse(first))
        );
    }

    #[test]
    fn test_escape_goes_back() {
        let app = logged_in_app(Plan::Free);
        let mut tui = TuiState::new();
        assert_eq!(
            handle_event(&app, &mut tui, &TuiEvent::Escape),
            Some(Action::Back)
        );
    }
}
