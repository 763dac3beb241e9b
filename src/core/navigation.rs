//! # Navigation Controller
//!
//! Single source of truth for which screen is shown, what "back" means, and
//! which bottom tab is highlighted. Also owns the session flag and the
//! subscription plan, because changing plans is itself a navigation event
//! (it always returns to the screen that asked for the upgrade).
//!
//! ```text
//! Navigator
//! ├── authenticated: bool
//! ├── current: Screen            // rendered screen
//! ├── data: Option<ScreenData>   // payload for `current`
//! ├── history: Vec<Screen>       // previous screens, most recent last
//! ├── active_tab: Tab            // highlighted bottom tab
//! └── plan: Plan                 // subscription tier
//! ```
//!
//! Transition rules:
//!
//! | operation            | history       | data     | active_tab            |
//! |----------------------|---------------|----------|-----------------------|
//! | `navigate(s, d)`     | push current  | `d`      | `s` if `s` is a tab   |
//! | `go_back()`          | pop (or no-op)| cleared  | popped if it is a tab |
//! | `change_tab(t)`      | cleared       | cleared  | `t`                   |
//! | `change_subscription`| via go_back   | cleared  | via go_back           |
//!
//! Fields are private; the reducer in `action.rs` is the only caller of the
//! mutating methods.

use log::{debug, warn};
use std::fmt;
use std::str::FromStr;

use crate::core::plan::Plan;

// ============================================================================
// Screens and tabs
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Explore,
    Explanations,
    Disciplines,
    Topics,
    TopicDetail,
    Exercise,
    Subscription,
    CourseDetail,
    VideoPlayer,
    Activity,
    Messages,
    Profile,
}

impl Screen {
    pub const ALL: [Screen; 13] = [
        Screen::Home,
        Screen::Explore,
        Screen::Explanations,
        Screen::Disciplines,
        Screen::Topics,
        Screen::TopicDetail,
        Screen::Exercise,
        Screen::Subscription,
        Screen::CourseDetail,
        Screen::VideoPlayer,
        Screen::Activity,
        Screen::Messages,
        Screen::Profile,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Explore => "explore",
            Screen::Explanations => "explanations",
            Screen::Disciplines => "disciplines",
            Screen::Topics => "topics",
            Screen::TopicDetail => "topicDetail",
            Screen::Exercise => "exercise",
            Screen::Subscription => "subscription",
            Screen::CourseDetail => "courseDetail",
            Screen::VideoPlayer => "videoPlayer",
            Screen::Activity => "activity",
            Screen::Messages => "messages",
            Screen::Profile => "profile",
        }
    }

    /// The bottom tab this screen corresponds to, if it is one of the six
    /// tab roots.
    pub fn as_tab(self) -> Option<Tab> {
        match self {
            Screen::Home => Some(Tab::Home),
            Screen::Explore => Some(Tab::Explore),
            Screen::Explanations => Some(Tab::Explanations),
            Screen::Activity => Some(Tab::Activity),
            Screen::Messages => Some(Tab::Messages),
            Screen::Profile => Some(Tab::Profile),
            _ => None,
        }
    }

    pub fn is_tab(self) -> bool {
        self.as_tab().is_some()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Screen {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.tag() == s)
            .ok_or_else(|| NavigationError::UnknownScreen(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Home,
    Explore,
    Explanations,
    Activity,
    Messages,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Home,
        Tab::Explore,
        Tab::Explanations,
        Tab::Activity,
        Tab::Messages,
        Tab::Profile,
    ];

    pub fn screen(self) -> Screen {
        match self {
            Tab::Home => Screen::Home,
            Tab::Explore => Screen::Explore,
            Tab::Explanations => Screen::Explanations,
            Tab::Activity => Screen::Activity,
            Tab::Messages => Screen::Messages,
            Tab::Profile => Screen::Profile,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Início",
            Tab::Explore => "Explorar",
            Tab::Explanations => "Explicações",
            Tab::Activity => "Atividades",
            Tab::Messages => "Mensagens",
            Tab::Profile => "Perfil",
        }
    }

    fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

// ============================================================================
// Payloads
// ============================================================================

/// What the video player should show. Built by whichever screen starts
/// playback, so lessons from the catalog and from courses look the same.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackTarget {
    pub course_title: String,
    pub instructor: String,
    pub lesson_title: String,
    pub duration: String,
    pub free: bool,
}

/// Payload handed to the screen being navigated to. One variant per
/// destination that takes arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenData {
    Explore {
        category: Option<String>,
    },
    Disciplines {
        class_id: String,
    },
    Topics {
        class_id: String,
        discipline_id: String,
    },
    TopicDetail {
        class_id: String,
        discipline_id: String,
        topic_id: String,
    },
    Exercise {
        class_id: String,
        discipline_id: String,
        topic_id: String,
        exercise_id: String,
    },
    CourseDetail {
        course_id: u32,
    },
    VideoPlayer(PlaybackTarget),
}

impl ScreenData {
    /// The screen this payload is meant for.
    pub fn screen(&self) -> Screen {
        match self {
            ScreenData::Explore { .. } => Screen::Explore,
            ScreenData::Disciplines { .. } => Screen::Disciplines,
            ScreenData::Topics { .. } => Screen::Topics,
            ScreenData::TopicDetail { .. } => Screen::TopicDetail,
            ScreenData::Exercise { .. } => Screen::Exercise,
            ScreenData::CourseDetail { .. } => Screen::CourseDetail,
            ScreenData::VideoPlayer(_) => Screen::VideoPlayer,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    UnknownScreen(String),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::UnknownScreen(tag) => write!(f, "unknown screen '{tag}'"),
        }
    }
}

impl std::error::Error for NavigationError {}

// ============================================================================
// Controller
// ============================================================================

#[derive(Debug, Clone)]
pub struct Navigator {
    authenticated: bool,
    current: Screen,
    data: Option<ScreenData>,
    history: Vec<Screen>,
    active_tab: Tab,
    plan: Plan,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Plan::Free)
    }
}

impl Navigator {
    pub fn new(plan: Plan) -> Self {
        Self {
            authenticated: false,
            current: Screen::Home,
            data: None,
            history: Vec::new(),
            active_tab: Tab::Home,
            plan,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn current_screen(&self) -> Screen {
        self.current
    }

    pub fn screen_data(&self) -> Option<&ScreenData> {
        self.data.as_ref()
    }

    pub fn history(&self) -> &[Screen] {
        &self.history
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn plan(&self) -> Plan {
        self.plan
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Full-screen flows hide the tab bar.
    pub fn shows_bottom_navigation(&self) -> bool {
        !matches!(
            self.current,
            Screen::VideoPlayer | Screen::CourseDetail | Screen::Exercise | Screen::Subscription
        )
    }

    pub fn login(&mut self) {
        self.authenticated = true;
        self.reset_to_home();
        debug!("Logged in");
    }

    /// The plan survives logout; it belongs to the session, not the stack.
    pub fn logout(&mut self) {
        self.authenticated = false;
        self.reset_to_home();
        debug!("Logged out");
    }

    fn reset_to_home(&mut self) {
        self.current = Screen::Home;
        self.active_tab = Tab::Home;
        self.history.clear();
        self.data = None;
    }

    pub fn navigate(&mut self, target: Screen, data: Option<ScreenData>) {
        if let Some(payload) = &data
            && payload.screen() != target
        {
            warn!(
                "Payload for {} passed while navigating to {}",
                payload.screen(),
                target
            );
        }
        debug!("navigate: {} -> {}", self.current, target);
        self.history.push(self.current);
        self.current = target;
        self.data = data;
        if let Some(tab) = target.as_tab() {
            self.active_tab = tab;
        }
    }

    /// Navigate by string tag. Unknown tags are rejected and leave the state
    /// untouched.
    pub fn navigate_to_tag(
        &mut self,
        tag: &str,
        data: Option<ScreenData>,
    ) -> Result<(), NavigationError> {
        let target = tag.parse::<Screen>()?;
        self.navigate(target, data);
        Ok(())
    }

    pub fn go_back(&mut self) {
        let Some(previous) = self.history.pop() else {
            debug!("go_back: history empty, staying on {}", self.current);
            return;
        };
        debug!("go_back: {} -> {}", self.current, previous);
        self.current = previous;
        self.data = None;
        if let Some(tab) = previous.as_tab() {
            self.active_tab = tab;
        }
    }

    pub fn change_tab(&mut self, tab: Tab) {
        debug!("change_tab: {} -> {}", self.current, tab.screen());
        self.active_tab = tab;
        self.current = tab.screen();
        self.data = None;
        self.history.clear();
    }

    pub fn change_subscription(&mut self, plan: Plan) {
        debug!("change_subscription: {} -> {}", self.plan, plan);
        self.plan = plan;
        self.go_back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in() -> Navigator {
        let mut nav = Navigator::default();
        nav.login();
        nav
    }

    #[test]
    fn test_initial_state() {
        let nav = Navigator::default();
        assert!(!nav.is_authenticated());
        assert_eq!(nav.current_screen(), Screen::Home);
        assert_eq!(nav.active_tab(), Tab::Home);
        assert!(nav.history().is_empty());
        assert_eq!(nav.plan(), Plan::Free);
    }

    #[test]
    fn test_history_tracks_each_previous_screen() {
        let mut nav = logged_in();
        let targets = [
            Screen::Explanations,
            Screen::Disciplines,
            Screen::Topics,
            Screen::TopicDetail,
            Screen::Exercise,
        ];
        let mut expected = Vec::new();
        for target in targets {
            expected.push(nav.current_screen());
            nav.navigate(target, None);
            assert_ne!(nav.history().last(), Some(&nav.current_screen()));
        }
        assert_eq!(nav.history().len(), targets.len());
        assert_eq!(nav.history(), expected.as_slice());
    }

    #[test]
    fn test_back_restores_previous_and_clears_data() {
        let mut nav = logged_in();
        nav.navigate(Screen::Explanations, None);
        nav.navigate(
            Screen::Disciplines,
            Some(ScreenData::Disciplines { class_id: "1".into() }),
        );
        nav.go_back();
        assert_eq!(nav.current_screen(), Screen::Explanations);
        assert!(nav.screen_data().is_none());
        assert_eq!(nav.active_tab(), Tab::Explanations);
        assert_eq!(nav.history(), &[Screen::Home]);
    }

    #[test]
    fn test_back_on_empty_history_is_noop() {
        let mut nav = logged_in();
        nav.change_tab(Tab::Profile);
        let before = (nav.current_screen(), nav.active_tab(), nav.history().len());
        nav.go_back();
        nav.go_back();
        assert_eq!(
            (nav.current_screen(), nav.active_tab(), nav.history().len()),
            before
        );
    }

    #[test]
    fn test_non_tab_targets_keep_active_tab() {
        let mut nav = logged_in();
        nav.navigate(Screen::Explore, Some(ScreenData::Explore { category: None }));
        assert_eq!(nav.active_tab(), Tab::Explore);
        nav.navigate(Screen::CourseDetail, Some(ScreenData::CourseDetail { course_id: 1 }));
        nav.navigate(Screen::VideoPlayer, None);
        assert_eq!(nav.active_tab(), Tab::Explore);
    }

    #[test]
    fn test_change_tab_resets_stack() {
        let mut nav = logged_in();
        nav.navigate(Screen::Explanations, None);
        nav.navigate(Screen::Disciplines, Some(ScreenData::Disciplines { class_id: "1".into() }));
        nav.change_tab(Tab::Messages);
        assert!(nav.history().is_empty());
        assert_eq!(nav.active_tab(), Tab::Messages);
        assert_eq!(nav.current_screen(), Screen::Messages);
        assert!(nav.screen_data().is_none());
    }

    #[test]
    fn test_change_subscription_goes_back() {
        let mut nav = logged_in();
        nav.navigate(Screen::Explanations, None);
        nav.navigate(Screen::Disciplines, Some(ScreenData::Disciplines { class_id: "1".into() }));
        nav.navigate(Screen::Subscription, None);
        nav.change_subscription(Plan::Pro);
        assert_eq!(nav.plan(), Plan::Pro);
        assert_eq!(nav.current_screen(), Screen::Disciplines);
        assert_eq!(nav.history(), &[Screen::Home, Screen::Explanations]);
    }

    #[test]
    fn test_logout_resets_but_keeps_plan() {
        let mut nav = logged_in();
        nav.navigate(Screen::Subscription, None);
        nav.change_subscription(Plan::ProPlus);
        nav.navigate(Screen::Profile, None);
        nav.logout();
        assert!(!nav.is_authenticated());
        assert_eq!(nav.current_screen(), Screen::Home);
        assert_eq!(nav.active_tab(), Tab::Home);
        assert!(nav.history().is_empty());
        assert!(nav.screen_data().is_none());
        assert_eq!(nav.plan(), Plan::ProPlus);
    }

    #[test]
    fn test_login_clears_previous_stack() {
        let mut nav = logged_in();
        nav.navigate(Screen::Activity, None);
        nav.login();
        assert_eq!(nav.current_screen(), Screen::Home);
        assert!(nav.history().is_empty());
    }

    #[test]
    fn test_unknown_tag_rejected_without_side_effects() {
        let mut nav = logged_in();
        nav.navigate(Screen::Explore, None);
        let err = nav.navigate_to_tag("settings", None).unwrap_err();
        assert_eq!(err, NavigationError::UnknownScreen("settings".into()));
        assert_eq!(err.to_string(), "unknown screen 'settings'");
        assert_eq!(nav.current_screen(), Screen::Explore);
        assert_eq!(nav.history(), &[Screen::Home]);
        assert_eq!(nav.active_tab(), Tab::Explore);
    }

    #[test]
    fn test_known_tag_navigates() {
        let mut nav = logged_in();
        nav.navigate_to_tag("topicDetail", None).unwrap();
        assert_eq!(nav.current_screen(), Screen::TopicDetail);
        assert_eq!(nav.active_tab(), Tab::Home);
    }

    #[test]
    fn test_screen_tags_round_trip() {
        for screen in Screen::ALL {
            assert_eq!(screen.tag().parse::<Screen>(), Ok(screen));
        }
        assert!("TopicDetail".parse::<Screen>().is_err());
    }

    #[test]
    fn test_tab_subset() {
        let tabs: Vec<Screen> = Screen::ALL.into_iter().filter(|s| s.is_tab()).collect();
        assert_eq!(tabs.len(), 6);
        for tab in Tab::ALL {
            assert_eq!(tab.screen().as_tab(), Some(tab));
        }
    }

    #[test]
    fn test_tab_cycling_wraps() {
        assert_eq!(Tab::Profile.next(), Tab::Home);
        assert_eq!(Tab::Home.prev(), Tab::Profile);
        assert_eq!(Tab::Explore.next(), Tab::Explanations);
    }

    #[test]
    fn test_bottom_navigation_hidden_on_full_screen_flows() {
        let mut nav = logged_in();
        assert!(nav.shows_bottom_navigation());
        nav.navigate(Screen::Exercise, None);
        assert!(!nav.shows_bottom_navigation());
        nav.go_back();
        nav.navigate(Screen::Topics, None);
        assert!(nav.shows_bottom_navigation());
    }
}
