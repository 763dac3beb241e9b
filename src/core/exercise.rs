//! # Exercise Attempts
//!
//! Ephemeral state for someone working through an `Exercise`: which question
//! is showing, what was picked, and the score once it's over. An attempt is
//! created fresh every time the exercise screen opens and dropped when the
//! user leaves; nothing here is written back to the catalog.
//!
//! Per question the flow is `select* → submit → next`. Once a question is
//! submitted its selection is frozen.

use std::collections::HashMap;

use crate::core::catalog::{Exercise, Question};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::High
        } else if score >= 60 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExerciseAttempt {
    exercise: Exercise,
    index: usize,
    answers: HashMap<String, usize>,
    selected: Option<usize>,
    answered: bool,
    finished: bool,
}

impl ExerciseAttempt {
    pub fn new(exercise: Exercise) -> Self {
        Self {
            exercise,
            index: 0,
            answers: HashMap::new(),
            selected: None,
            answered: false,
            finished: false,
        }
    }

    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.exercise.questions.get(self.index)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_last_question(&self) -> bool {
        self.index + 1 >= self.exercise.questions.len()
    }

    /// The recorded answer for a question, if it was submitted.
    pub fn answer_for(&self, question_id: &str) -> Option<usize> {
        self.answers.get(question_id).copied()
    }

    pub fn select(&mut self, option: usize) {
        if self.answered || self.finished {
            return;
        }
        let Some(question) = self.current_question() else {
            return;
        };
        if option < question.options.len() {
            self.selected = Some(option);
        }
    }

    /// Records the pending selection. Returns whether it was correct, or
    /// `None` if there was nothing to submit.
    pub fn submit(&mut self) -> Option<bool> {
        if self.answered || self.finished {
            return None;
        }
        let selected = self.selected?;
        let question = self.exercise.questions.get(self.index)?;
        let correct = selected == question.correct_answer;
        self.answers.insert(question.id.clone(), selected);
        self.answered = true;
        Some(correct)
    }

    pub fn next(&mut self) {
        if self.finished {
            return;
        }
        if self.is_last_question() {
            self.finished = true;
        } else {
            self.index += 1;
            self.selected = None;
            self.answered = false;
        }
    }

    pub fn restart(&mut self) {
        self.index = 0;
        self.answers.clear();
        self.selected = None;
        self.answered = false;
        self.finished = false;
    }

    pub fn correct_count(&self) -> usize {
        self.exercise
            .questions
            .iter()
            .filter(|q| self.answers.get(&q.id) == Some(&q.correct_answer))
            .count()
    }

    pub fn total(&self) -> usize {
        self.exercise.questions.len()
    }

    /// Percentage of correct answers, rounded.
    pub fn score(&self) -> u8 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        ((self.correct_count() as f64 / total as f64) * 100.0).round() as u8
    }

    /// Position in the exercise, counting the current question.
    pub fn progress_percent(&self) -> u16 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (((self.index + 1) * 100) / total) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::plan::Plan;

    fn question(id: &str, correct: usize) -> Question {
        Question {
            id: id.to_string(),
            prompt: format!("{id}?"),
            options: vec!["a".into(), "b".into(), "c".into()],
            correct_answer: correct,
            explanation: None,
        }
    }

    fn exercise(questions: Vec<Question>) -> Exercise {
        Exercise {
            id: "e".into(),
            title: "E".into(),
            required_plan: Plan::Free,
            questions,
        }
    }

    #[test]
    fn test_full_run_scores() {
        let mut attempt = ExerciseAttempt::new(exercise(vec![
            question("q1", 0),
            question("q2", 1),
            question("q3", 2),
        ]));

        attempt.select(0);
        assert_eq!(attempt.submit(), Some(true));
        attempt.next();
        attempt.select(0);
        assert_eq!(attempt.submit(), Some(false));
        attempt.next();
        attempt.select(2);
        assert_eq!(attempt.submit(), Some(true));
        assert!(!attempt.is_finished());
        attempt.next();

        assert!(attempt.is_finished());
        assert_eq!(attempt.correct_count(), 2);
        assert_eq!(attempt.score(), 67);
        assert_eq!(ScoreBand::from_score(attempt.score()), ScoreBand::Medium);
    }

    #[test]
    fn test_submit_requires_selection() {
        let mut attempt = ExerciseAttempt::new(exercise(vec![question("q1", 0)]));
        assert_eq!(attempt.submit(), None);
        assert!(!attempt.is_answered());
    }

    #[test]
    fn test_selection_frozen_after_submit() {
        let mut attempt = ExerciseAttempt::new(exercise(vec![question("q1", 1)]));
        attempt.select(1);
        attempt.submit();
        attempt.select(2);
        assert_eq!(attempt.selected(), Some(1));
        assert_eq!(attempt.answer_for("q1"), Some(1));
        assert_eq!(attempt.submit(), None);
    }

    #[test]
    fn test_out_of_range_selection_ignored() {
        let mut attempt = ExerciseAttempt::new(exercise(vec![question("q1", 1)]));
        attempt.select(7);
        assert_eq!(attempt.selected(), None);
    }

    #[test]
    fn test_restart_clears_answers() {
        let mut attempt = ExerciseAttempt::new(exercise(vec![question("q1", 0)]));
        attempt.select(0);
        attempt.submit();
        attempt.next();
        assert_eq!(attempt.score(), 100);

        attempt.restart();
        assert!(!attempt.is_finished());
        assert_eq!(attempt.index(), 0);
        assert_eq!(attempt.correct_count(), 0);
        assert_eq!(attempt.selected(), None);
    }

    #[test]
    fn test_empty_exercise_scores_zero() {
        let mut attempt = ExerciseAttempt::new(exercise(vec![]));
        assert_eq!(attempt.score(), 0);
        assert_eq!(attempt.progress_percent(), 0);
        attempt.next();
        assert!(attempt.is_finished());
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Low);
    }
}
