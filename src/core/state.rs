//! # Application State
//!
//! Core business state for EduApp. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── nav: Navigator                 // screen, back stack, tab, session, plan
//! ├── catalog: Catalog               // explanations tree (read-only)
//! ├── courses: CourseCatalog         // marketplace sample data (read-only)
//! ├── inbox: Inbox                   // mentor conversations
//! ├── attempt: Option<ExerciseAttempt>    // exercise being taken
//! ├── lesson_quiz: Option<ExerciseAttempt> // quiz overlay in the player
//! ├── playback: Playback             // simulated video progress
//! ├── breadcrumb: Breadcrumb         // last opened class/discipline/topic/course
//! ├── status_message: String         // status bar text
//! └── skip_secs / playback_duration  // resolved player settings
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.
//!
//! Going back clears the screen payload, so the catalog screens fall back to
//! the breadcrumb when they are shown without one (see `catalog_path`).

use crate::core::catalog::{Catalog, Class, Discipline, Topic};
use crate::core::config::ResolvedConfig;
use crate::core::courses::{Course, CourseCatalog};
use crate::core::exercise::ExerciseAttempt;
use crate::core::messages::Inbox;
use crate::core::navigation::{Navigator, PlaybackTarget, ScreenData};
use crate::core::plan::Plan;
use crate::core::player::Playback;

/// Ids of the catalog nodes most recently opened, deepest last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breadcrumb {
    pub class_id: Option<String>,
    pub discipline_id: Option<String>,
    pub topic_id: Option<String>,
    pub course_id: Option<u32>,
}

/// Borrowed ids of a catalog node, shallowest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogPath<'a> {
    pub class_id: Option<&'a str>,
    pub discipline_id: Option<&'a str>,
    pub topic_id: Option<&'a str>,
}

pub struct App {
    pub nav: Navigator,
    pub catalog: Catalog,
    pub courses: CourseCatalog,
    pub inbox: Inbox,
    pub attempt: Option<ExerciseAttempt>,
    pub lesson_quiz: Option<ExerciseAttempt>,
    pub playback: Playback,
    pub breadcrumb: Breadcrumb,
    pub status_message: String,
    pub playback_duration: u32,
    pub skip_secs: u32,
}

impl App {
    pub fn new(
        catalog: Catalog,
        courses: CourseCatalog,
        inbox: Inbox,
        config: &ResolvedConfig,
    ) -> Self {
        Self {
            nav: Navigator::new(config.plan),
            catalog,
            courses,
            inbox,
            attempt: None,
            lesson_quiz: None,
            playback: Playback::new(config.playback_duration),
            breadcrumb: Breadcrumb::default(),
            status_message: String::from("Bem-vindo ao EduApp!"),
            playback_duration: config.playback_duration,
            skip_secs: config.skip_secs,
        }
    }

    pub fn plan(&self) -> Plan {
        self.nav.plan()
    }

    /// Catalog ids addressed by the current screen: its payload when it has
    /// one, otherwise the breadcrumb. A payload meant for another screen
    /// addresses nothing.
    pub fn catalog_path(&self) -> CatalogPath<'_> {
        match self.nav.screen_data() {
            Some(data) if data.screen() != self.nav.current_screen() => CatalogPath::default(),
            Some(ScreenData::Disciplines { class_id }) => CatalogPath {
                class_id: Some(class_id),
                ..CatalogPath::default()
            },
            Some(ScreenData::Topics {
                class_id,
                discipline_id,
            }) => CatalogPath {
                class_id: Some(class_id),
                discipline_id: Some(discipline_id),
                topic_id: None,
            },
            Some(
                ScreenData::TopicDetail {
                    class_id,
                    discipline_id,
                    topic_id,
                }
                | ScreenData::Exercise {
                    class_id,
                    discipline_id,
                    topic_id,
                    ..
                },
            ) => CatalogPath {
                class_id: Some(class_id),
                discipline_id: Some(discipline_id),
                topic_id: Some(topic_id),
            },
            Some(_) => CatalogPath::default(),
            None => CatalogPath {
                class_id: self.breadcrumb.class_id.as_deref(),
                discipline_id: self.breadcrumb.discipline_id.as_deref(),
                topic_id: self.breadcrumb.topic_id.as_deref(),
            },
        }
    }

    pub fn current_class(&self) -> Option<&Class> {
        self.catalog.find_class(self.catalog_path().class_id?)
    }

    pub fn current_discipline(&self) -> Option<&Discipline> {
        let path = self.catalog_path();
        self.catalog
            .find_discipline(path.class_id?, path.discipline_id?)
    }

    pub fn current_topic(&self) -> Option<&Topic> {
        let path = self.catalog_path();
        self.catalog
            .find_topic(path.class_id?, path.discipline_id?, path.topic_id?)
    }

    pub fn current_course(&self) -> Option<&Course> {
        let course_id = match self.nav.screen_data() {
            Some(ScreenData::CourseDetail { course_id }) => *course_id,
            Some(_) => return None,
            None => self.breadcrumb.course_id?,
        };
        self.courses.find(course_id)
    }

    pub fn current_playback_target(&self) -> Option<&PlaybackTarget> {
        match self.nav.screen_data()? {
            ScreenData::VideoPlayer(target) => Some(target),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CatalogPath;
    use crate::core::navigation::{Screen, ScreenData};
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Bem-vindo ao EduApp!");
        assert!(!app.nav.is_authenticated());
        assert!(app.attempt.is_none());
        assert_eq!(app.playback.position(), 0);
    }

    #[test]
    fn test_breadcrumb_used_without_payload() {
        let mut app = test_app();
        app.nav.login();
        app.breadcrumb.class_id = Some("1".into());
        app.breadcrumb.discipline_id = Some("1-1".into());
        app.breadcrumb.topic_id = Some("1-1-1".into());

        app.nav.navigate(Screen::TopicDetail, None);
        assert_eq!(app.current_topic().unwrap().name, "Equações do 1º Grau");
        assert_eq!(app.current_discipline().unwrap().name, "Matemática");
        assert_eq!(app.current_class().unwrap().name, "9º Ano");
    }

    #[test]
    fn test_payload_wins_over_breadcrumb() {
        let mut app = test_app();
        app.nav.login();
        app.breadcrumb.class_id = Some("1".into());
        app.nav.navigate(
            Screen::Topics,
            Some(ScreenData::Topics {
                class_id: "2".into(),
                discipline_id: "2-1".into(),
            }),
        );
        assert_eq!(app.current_discipline().unwrap().name, "Física");
        assert!(app.current_topic().is_none());
    }

    #[test]
    fn test_mismatched_payload_addresses_nothing() {
        let mut app = test_app();
        app.nav.login();
        app.breadcrumb.class_id = Some("1".into());
        app.nav.navigate(
            Screen::Topics,
            Some(ScreenData::Disciplines { class_id: "1".into() }),
        );
        assert_eq!(app.catalog_path(), CatalogPath::default());
        assert!(app.current_class().is_none());
    }

    #[test]
    fn test_current_lookups_without_payload() {
        let app = test_app();
        assert!(app.current_topic().is_none());
        assert!(app.current_course().is_none());
        assert!(app.current_playback_target().is_none());
    }
}
