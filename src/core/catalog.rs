//! # Content Catalog
//!
//! The read-only explanations tree and the lookups and folds the screens
//! run against it.
//!
//! ```text
//! Catalog
//! └── Class            (9º Ano, 1º Ano - Ensino Médio, ...)
//!     └── Discipline   (Matemática, Física, ...)
//!         └── Topic    (required_plan)
//!             ├── Lesson    (required_plan)
//!             └── Exercise  (required_plan)
//!                 └── Question
//! ```
//!
//! The tree is deserialized once at startup (from the bundled
//! `assets/catalog.json` or a file named in config) and never mutated.
//! Parents own their children; nothing points back up.
//!
//! Lookups return `Option`. A miss is an empty state for the caller, not an
//! error. Aggregates such as "accessible topics" are recomputed on every call.

use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::plan::{Plan, can_access};

const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

// ============================================================================
// Tree
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Catalog {
    pub classes: Vec<Class>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Class {
    pub id: String,
    pub name: String,
    pub grade: String,
    #[serde(default)]
    pub disciplines: Vec<Discipline>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Discipline {
    pub id: String,
    pub name: String,
    pub icon: IconTag,
    pub color: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Topic {
    pub id: String,
    pub name: String,
    pub required_plan: Plan,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub video_url: String,
    pub description: String,
    pub required_plan: Plan,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Exercise {
    pub id: String,
    pub title: String,
    pub required_plan: Plan,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Icon shown next to a discipline. Unknown tags fall back to `BookOpen`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconTag {
    Calculator,
    Microscope,
    Zap,
    FlaskConical,
    Leaf,
    #[default]
    #[serde(other)]
    BookOpen,
}

// ============================================================================
// Access decisions
// ============================================================================

/// How a node should be presented to the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// Interactive.
    Unlocked,
    /// Dimmed; selecting it leads to the subscription screen.
    Locked,
    /// Accessible but nothing has been authored for it yet.
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TopicStats {
    pub total: usize,
    pub accessible: usize,
    pub free: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentStats {
    pub total_lessons: usize,
    pub accessible_lessons: usize,
    pub total_exercises: usize,
    pub accessible_exercises: usize,
}

impl Discipline {
    pub fn topic_stats(&self, plan: Plan) -> TopicStats {
        TopicStats {
            total: self.topics.len(),
            accessible: self
                .topics
                .iter()
                .filter(|t| can_access(t.required_plan, plan))
                .count(),
            free: self
                .topics
                .iter()
                .filter(|t| t.required_plan == Plan::Free)
                .count(),
        }
    }

    pub fn availability(&self, plan: Plan) -> Availability {
        let stats = self.topic_stats(plan);
        if stats.total == 0 {
            Availability::Empty
        } else if stats.accessible > 0 {
            Availability::Unlocked
        } else {
            Availability::Locked
        }
    }

    pub fn find_topic(&self, topic_id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == topic_id)
    }

    /// Lowest plan that opens at least one topic.
    pub fn entry_plan(&self) -> Plan {
        self.topics
            .iter()
            .map(|t| t.required_plan)
            .min_by_key(|p| p.rank())
            .unwrap_or_default()
    }
}

impl Topic {
    pub fn is_accessible(&self, plan: Plan) -> bool {
        can_access(self.required_plan, plan)
    }

    pub fn has_content(&self) -> bool {
        !self.lessons.is_empty() || !self.exercises.is_empty()
    }

    /// The topic's own plan decides first; children are never consulted for a
    /// locked topic.
    pub fn availability(&self, plan: Plan) -> Availability {
        if !self.is_accessible(plan) {
            Availability::Locked
        } else if !self.has_content() {
            Availability::Empty
        } else {
            Availability::Unlocked
        }
    }

    pub fn content_stats(&self, plan: Plan) -> ContentStats {
        ContentStats {
            total_lessons: self.lessons.len(),
            accessible_lessons: self
                .lessons
                .iter()
                .filter(|l| can_access(l.required_plan, plan))
                .count(),
            total_exercises: self.exercises.len(),
            accessible_exercises: self
                .exercises
                .iter()
                .filter(|e| can_access(e.required_plan, plan))
                .count(),
        }
    }

    pub fn find_lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == lesson_id)
    }

    pub fn find_exercise(&self, exercise_id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == exercise_id)
    }
}

impl Lesson {
    pub fn availability(&self, plan: Plan) -> Availability {
        if can_access(self.required_plan, plan) {
            Availability::Unlocked
        } else {
            Availability::Locked
        }
    }
}

impl Exercise {
    pub fn availability(&self, plan: Plan) -> Availability {
        if can_access(self.required_plan, plan) {
            Availability::Unlocked
        } else {
            Availability::Locked
        }
    }
}

impl Class {
    /// Disciplines that have at least one free topic.
    pub fn free_disciplines(&self) -> usize {
        self.disciplines
            .iter()
            .filter(|d| d.topics.iter().any(|t| t.required_plan == Plan::Free))
            .count()
    }

    pub fn find_discipline(&self, discipline_id: &str) -> Option<&Discipline> {
        self.disciplines.iter().find(|d| d.id == discipline_id)
    }
}

// ============================================================================
// Lookups
// ============================================================================

impl Catalog {
    pub fn find_class(&self, id: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.id == id)
    }

    pub fn find_discipline(&self, class_id: &str, discipline_id: &str) -> Option<&Discipline> {
        self.find_class(class_id)?.find_discipline(discipline_id)
    }

    pub fn find_topic(
        &self,
        class_id: &str,
        discipline_id: &str,
        topic_id: &str,
    ) -> Option<&Topic> {
        self.find_discipline(class_id, discipline_id)?
            .find_topic(topic_id)
    }

    pub fn find_exercise(
        &self,
        class_id: &str,
        discipline_id: &str,
        topic_id: &str,
        exercise_id: &str,
    ) -> Option<&Exercise> {
        self.find_topic(class_id, discipline_id, topic_id)?
            .find_exercise(exercise_id)
    }
}

// ============================================================================
// Loading
// ============================================================================

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(CatalogError::Parse)
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let catalog = Self::from_json(&contents)?;
        info!(
            "Loaded catalog from {} ({} classes)",
            path.display(),
            catalog.classes.len()
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().expect("bundled catalog must parse")
    }

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = catalog();
        assert_eq!(catalog.classes.len(), 3);
        let class = catalog.find_class("1").unwrap();
        assert_eq!(class.name, "9º Ano");
        assert_eq!(class.grade, "9");
        assert_eq!(class.disciplines.len(), 3);
    }

    #[test]
    fn test_lookups_walk_the_tree() {
        let catalog = catalog();
        let discipline = catalog.find_discipline("1", "1-1").unwrap();
        assert_eq!(discipline.name, "Matemática");
        assert_eq!(discipline.icon, IconTag::Calculator);

        let topic = catalog.find_topic("2", "2-1", "2-1-2").unwrap();
        assert_eq!(topic.name, "Dinâmica");
        assert_eq!(topic.required_plan, Plan::ProPlus);

        let exercise = catalog.find_exercise("1", "1-1", "1-1-1", "1-1-1-e1").unwrap();
        assert_eq!(exercise.questions.len(), 2);
        assert_eq!(exercise.questions[1].correct_answer, 1);
    }

    #[test]
    fn test_lookup_misses_are_none() {
        let catalog = catalog();
        assert!(catalog.find_class("99").is_none());
        assert!(catalog.find_discipline("1", "2-1").is_none());
        assert!(catalog.find_topic("1", "1-1", "nope").is_none());
        assert!(catalog.find_topic("missing", "1-1", "1-1-1").is_none());
    }

    #[test]
    fn test_discipline_topic_stats_by_plan() {
        let catalog = catalog();
        let math = catalog.find_discipline("1", "1-1").unwrap();

        let free = math.topic_stats(Plan::Free);
        assert_eq!(free, TopicStats { total: 3, accessible: 1, free: 1 });
        assert_eq!(math.topic_stats(Plan::Pro).accessible, 2);
        assert_eq!(math.topic_stats(Plan::ProPlus).accessible, 3);
    }

    #[test]
    fn test_free_user_on_pro_topic_sees_nothing() {
        let catalog = catalog();
        let topic = catalog.find_topic("1", "1-1", "1-1-2").unwrap();
        let stats = topic.content_stats(Plan::Free);

        assert_eq!(stats.total_lessons, 2);
        assert_eq!(stats.accessible_lessons, 0);
        assert!(!topic.is_accessible(Plan::Free));
        assert_eq!(topic.availability(Plan::Free), Availability::Locked);
        assert_eq!(topic.availability(Plan::Pro), Availability::Unlocked);
    }

    #[test]
    fn test_mixed_topic_counts_lessons_individually() {
        let catalog = catalog();
        let kinematics = catalog.find_topic("2", "2-1", "2-1-1").unwrap();
        let stats = kinematics.content_stats(Plan::Free);
        assert_eq!(stats.accessible_lessons, 1);
        assert_eq!(stats.total_lessons, 2);
        assert_eq!(stats.accessible_exercises, 1);
    }

    #[test]
    fn test_locked_parent_ignores_free_children() {
        let json = r#"{"classes":[{"id":"c","name":"C","grade":"1","disciplines":[
            {"id":"d","name":"D","icon":"leaf","color":"green","topics":[
                {"id":"t","name":"T","required_plan":"pro","lessons":[
                    {"id":"l","title":"L","duration":"1min","video_url":"","description":"","required_plan":"free"}
                ],"exercises":[]}
            ]}
        ]}]}"#;
        let catalog = Catalog::from_json(json).unwrap();
        let topic = catalog.find_topic("c", "d", "t").unwrap();
        assert_eq!(topic.availability(Plan::Free), Availability::Locked);
        assert_eq!(
            catalog.find_discipline("c", "d").unwrap().availability(Plan::Free),
            Availability::Locked
        );
    }

    #[test]
    fn test_empty_nodes() {
        let json = r#"{"classes":[{"id":"c","name":"C","grade":"1","disciplines":[
            {"id":"d","name":"D","icon":"rocket","color":"gray","topics":[
                {"id":"t","name":"T","required_plan":"free"}
            ]},
            {"id":"e","name":"E","icon":"zap","color":"gray"}
        ]}]}"#;
        let catalog = Catalog::from_json(json).unwrap();
        let discipline = catalog.find_discipline("c", "d").unwrap();
        assert_eq!(discipline.icon, IconTag::BookOpen);
        assert_eq!(
            discipline.find_topic("t").unwrap().availability(Plan::ProPlus),
            Availability::Empty
        );
        assert_eq!(
            catalog.find_discipline("c", "e").unwrap().availability(Plan::Free),
            Availability::Empty
        );
    }

    #[test]
    fn test_entry_plan_is_lowest_topic_plan() {
        let catalog = catalog();
        assert_eq!(catalog.find_discipline("2", "2-1").unwrap().entry_plan(), Plan::Free);
        assert_eq!(catalog.find_discipline("3", "3-1").unwrap().entry_plan(), Plan::Pro);
    }

    #[test]
    fn test_free_disciplines_count() {
        let catalog = catalog();
        assert_eq!(catalog.find_class("1").unwrap().free_disciplines(), 3);
        assert_eq!(catalog.find_class("3").unwrap().free_disciplines(), 0);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"{"classes":[]}"#).unwrap();
        let catalog = Catalog::load(&path).unwrap();
        assert!(catalog.classes.is_empty());

        let missing = Catalog::load(&dir.path().join("missing.json"));
        assert!(matches!(missing, Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
