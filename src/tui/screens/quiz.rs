//! Question-by-question quiz view, shared by the exercise screen and the
//! lesson quiz in the player. Callers decide what Esc and "done" mean.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap};

use crate::core::action::Action;
use crate::core::exercise::{ExerciseAttempt, ScoreBand};
use crate::tui::event::TuiEvent;

pub fn handle_event(attempt: &ExerciseAttempt, event: &TuiEvent) -> Option<Action> {
    if attempt.is_finished() {
        return match event {
            TuiEvent::InputChar('r') => Some(Action::RestartExercise),
            _ => None,
        };
    }

    let options = attempt.current_question()?.options.len();
    if options == 0 {
        return None;
    }
    let last = options - 1;
    match event {
        TuiEvent::Submit if attempt.is_answered() => Some(Action::NextQuestion),
        TuiEvent::Submit => attempt.selected().map(|_| Action::SubmitAnswer),
        _ if attempt.is_answered() => None,
        TuiEvent::CursorUp => Some(Action::SelectAnswer(
            attempt.selected().map_or(0, |s| s.saturating_sub(1)),
        )),
        TuiEvent::CursorDown => Some(Action::SelectAnswer(
            attempt.selected().map_or(0, |s| (s + 1).min(last)),
        )),
        TuiEvent::InputChar(c) => {
            let digit = c.to_digit(10)? as usize;
            (1..=options)
                .contains(&digit)
                .then(|| Action::SelectAnswer(digit - 1))
        }
        _ => None,
    }
}

pub fn render(frame: &mut Frame, area: Rect, attempt: &ExerciseAttempt, done_hint: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", attempt.exercise().title))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if attempt.is_finished() {
        render_result(frame, inner, attempt, done_hint);
        return;
    }
    let Some(question) = attempt.current_question() else {
        frame.render_widget(
            Paragraph::new("Este exercício ainda não tem questões")
                .style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    };

    let [progress_area, body_area, hint_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan))
            .percent(attempt.progress_percent().min(100))
            .label(format!(
                "Questão {} de {}",
                attempt.index() + 1,
                attempt.total()
            )),
        Rect {
            height: 1,
            ..progress_area
        },
    );

    let mut lines = vec![
        Line::styled(
            question.prompt.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
    ];
    for (i, option) in question.options.iter().enumerate() {
        let is_selected = attempt.selected() == Some(i);
        let (marker, style) = if attempt.is_answered() {
            if i == question.correct_answer {
                ("✓", Style::default().fg(Color::Green))
            } else if is_selected {
                ("✗", Style::default().fg(Color::Red))
            } else {
                (" ", Style::default().fg(Color::DarkGray))
            }
        } else if is_selected {
            ("●", Style::default().add_modifier(Modifier::REVERSED))
        } else {
            ("○", Style::default())
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{marker} {}. ", i + 1)),
            Span::styled(option.clone(), style),
        ]));
    }
    if attempt.is_answered()
        && let Some(explanation) = &question.explanation
    {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("Explicação: {explanation}"),
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        body_area,
    );

    let hint = if !attempt.is_answered() {
        "↑/↓ ou 1-9 escolher  Enter confirmar"
    } else if attempt.is_last_question() {
        "Enter ver resultado"
    } else {
        "Enter próxima questão"
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
        hint_area,
    );
}

fn render_result(frame: &mut Frame, area: Rect, attempt: &ExerciseAttempt, done_hint: &str) {
    let score = attempt.score();
    let (headline, color) = match ScoreBand::from_score(score) {
        ScoreBand::High => ("Excelente!", Color::Green),
        ScoreBand::Medium => ("Bom trabalho!", Color::Yellow),
        ScoreBand::Low => ("Continue praticando!", Color::Red),
    };
    let lines = vec![
        Line::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Line::styled(format!("{score}%"), Style::default().fg(color)),
        Line::raw(format!(
            "Você acertou {} de {} questões",
            attempt.correct_count(),
            attempt.total()
        )),
        Line::raw(""),
        Line::styled(
            format!("r refazer  {done_hint}"),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    frame.render_widget(Paragraph::new(lines).centered(), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::courses::CourseCatalog;

    fn attempt() -> ExerciseAttempt {
        let courses = CourseCatalog::builtin().unwrap();
        ExerciseAttempt::new(courses.lesson_quiz)
    }

    #[test]
    fn test_enter_needs_a_selection() {
        let attempt = attempt();
        assert_eq!(handle_event(&attempt, &TuiEvent::Submit), None);
        assert_eq!(
            handle_event(&attempt, &TuiEvent::CursorDown),
            Some(Action::SelectAnswer(0))
        );
    }

    #[test]
    fn test_digits_select_options() {
        let attempt = attempt();
        assert_eq!(
            handle_event(&attempt, &TuiEvent::InputChar('2')),
            Some(Action::SelectAnswer(1))
        );
        assert_eq!(handle_event(&attempt, &TuiEvent::InputChar('9')), None);
        assert_eq!(handle_event(&attempt, &TuiEvent::InputChar('0')), None);
    }

    #[test]
    fn test_answered_question_only_advances() {
        let mut attempt = attempt();
        attempt.select(1);
        attempt.submit();
        assert_eq!(handle_event(&attempt, &TuiEvent::CursorUp), None);
        assert_eq!(
            handle_event(&attempt, &TuiEvent::Submit),
            Some(Action::NextQuestion)
        );
    }

    #[test]
    fn test_finished_offers_restart() {
        let mut attempt = attempt();
        for _ in 0..attempt.total() {
            attempt.select(0);
            attempt.submit();
            attempt.next();
        }
        assert!(attempt.is_finished());
        assert_eq!(
            handle_event(&attempt, &TuiEvent::InputChar('r')),
            Some(Action::RestartExercise)
        );
        assert_eq!(handle_event(&attempt, &TuiEvent::Submit), None);
    }
}
