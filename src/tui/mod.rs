//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Playing** (video player, playback running): the poll timeout shrinks to
//!   the time left until the next `Tick`, so progress advances on schedule.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.

mod component;
mod components;
mod event;
mod screens;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::{Screen, ScreenData};
use crate::core::state::App;
use crate::tui::components::{ListCursor, TextInput};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    Name,
    #[default]
    Email,
    Password,
    Code,
}

/// Views of the login form. Every one of them ends in `Action::Login`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMode {
    #[default]
    SignIn,
    SignUp,
    Code,
}

impl LoginMode {
    pub const ALL: [LoginMode; 3] = [LoginMode::SignIn, LoginMode::SignUp, LoginMode::Code];

    /// Fields in focus order; the last one submits.
    pub fn fields(self) -> &'static [LoginField] {
        match self {
            LoginMode::SignIn => &[LoginField::Email, LoginField::Password],
            LoginMode::SignUp => &[LoginField::Name, LoginField::Email, LoginField::Password],
            LoginMode::Code => &[LoginField::Email, LoginField::Code],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LoginMode::SignIn => "Entrar",
            LoginMode::SignUp => "Criar conta",
            LoginMode::Code => "Entrar com código",
        }
    }

    pub fn next(self) -> Self {
        let i = LoginMode::ALL.iter().position(|m| *m == self).unwrap_or(0);
        LoginMode::ALL[(i + 1) % LoginMode::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = LoginMode::ALL.iter().position(|m| *m == self).unwrap_or(0);
        LoginMode::ALL[(i + LoginMode::ALL.len() - 1) % LoginMode::ALL.len()]
    }
}

/// Sub-tab on the topic detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopicTab {
    #[default]
    Lessons,
    Exercises,
}

impl TopicTab {
    pub fn toggle(self) -> Self {
        match self {
            TopicTab::Lessons => TopicTab::Exercises,
            TopicTab::Exercises => TopicTab::Lessons,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Highlighted row of the current screen's list.
    pub list: ListCursor,
    // Login form
    pub login_mode: LoginMode,
    pub name: TextInput,
    pub email: TextInput,
    pub password: TextInput,
    pub code: TextInput,
    pub login_focus: LoginField,
    /// Search box shared by Explorar and Mensagens.
    pub search: TextInput,
    /// Index into `CourseCatalog::category_names()`.
    pub category: usize,
    pub topic_tab: TopicTab,
    /// Conversation open on the messages screen.
    pub conversation: Option<u32>,
    pub draft: TextInput,
    view: Option<ViewKey>,
}

/// Identifies "the same view" across frames; any change resets the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ViewKey {
    authenticated: bool,
    screen: Screen,
    depth: usize,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            list: ListCursor::new(),
            login_mode: LoginMode::SignIn,
            name: TextInput::new("Nome", "Seu nome completo"),
            email: TextInput::new("E-mail", "seu@email.com"),
            password: TextInput::new("Senha", "••••••••").masked(),
            code: TextInput::new("Código", "000000"),
            login_focus: LoginField::Email,
            search: TextInput::new("Buscar", "Digite para filtrar"),
            category: 0,
            topic_tab: TopicTab::Lessons,
            conversation: None,
            draft: TextInput::new("Mensagem", "Digite sua mensagem..."),
            view: None,
        }
    }

    /// Reset per-view presentation state after the core moved somewhere new.
    pub fn sync_view(&mut self, app: &App) {
        let key = ViewKey {
            authenticated: app.nav.is_authenticated(),
            screen: app.nav.current_screen(),
            depth: app.nav.history().len(),
        };
        let Some(previous) = self.view.replace(key) else {
            self.enter(app, key, None);
            return;
        };
        if previous != key {
            self.enter(app, key, Some(previous));
        }
    }

    fn enter(&mut self, app: &App, key: ViewKey, previous: Option<ViewKey>) {
        debug!("TUI view: {:?} -> {:?}", previous, key);
        self.list.reset();

        let forward = previous
            .is_none_or(|p| key.depth > p.depth || (p.screen != key.screen && key.depth == 0));
        if key.screen != Screen::Messages {
            self.conversation = None;
            self.draft.clear();
        }
        if forward && matches!(key.screen, Screen::Explore | Screen::Messages) {
            self.search.clear();
            self.category = 0;
        }
        if forward && key.screen == Screen::TopicDetail {
            self.topic_tab = TopicTab::Lessons;
        }
        if !key.authenticated {
            self.password.clear();
            self.code.clear();
            self.login_mode = LoginMode::SignIn;
            self.login_focus = LoginField::Email;
        }

        if let Some(ScreenData::Explore {
            category: Some(category),
        }) = app.nav.screen_data()
        {
            self.category = app
                .courses
                .category_names()
                .iter()
                .position(|name| name == category)
                .unwrap_or(0);
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste, Hide)?;
        info!("Terminal modes enabled (bracketed paste, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Show);
    }
}

fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
    let effect = update(app, action);
    tui.sync_view(app);
    effect
}

fn is_playing(app: &App) -> bool {
    app.nav.current_screen() == Screen::VideoPlayer && app.playback.is_playing()
}

/// Run the terminal UI until the user quits.
///
/// `open` is applied once, right after the first successful login.
pub fn run(mut app: App, config: &ResolvedConfig, open: Option<Screen>) -> std::io::Result<()> {
    let mut tui = TuiState::new();
    let mut pending_open = open;
    let tick = Duration::from_millis(config.tick_ms);

    if config.auto_login {
        dispatch(&mut app, &mut tui, Action::Login);
    }
    tui.sync_view(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to set terminal modes: {}", e);
            None
        }
    };

    let mut last_tick = Instant::now();
    let mut needs_redraw = true;
    let mut should_quit = false;

    while !should_quit {
        if app.nav.is_authenticated()
            && let Some(screen) = pending_open.take()
        {
            info!("Opening {} after login", screen);
            dispatch(&mut app, &mut tui, Action::Navigate(screen, None));
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let playing = is_playing(&app);
        if !playing {
            last_tick = Instant::now();
        }
        let timeout = if playing {
            tick.saturating_sub(last_tick.elapsed())
        } else {
            IDLE_POLL
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            if let Some(action) = route_event(&app, &mut tui, &event)
                && dispatch(&mut app, &mut tui, action) == Effect::Quit
            {
                should_quit = true;
                break;
            }
        }

        if !should_quit && is_playing(&app) && last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            dispatch(&mut app, &mut tui, Action::Tick);
            needs_redraw = true;
        }
    }

    info!("EduApp shutting down");
    ratatui::restore();
    Ok(())
}

/// Global keys first, then the login form or the active screen.
fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        _ => {}
    }

    if !app.nav.is_authenticated() {
        return screens::login::handle_event(tui, event);
    }

    if app.nav.shows_bottom_navigation() {
        match event {
            TuiEvent::NextTab => return Some(Action::ChangeTab(app.nav.active_tab().next())),
            TuiEvent::PrevTab => return Some(Action::ChangeTab(app.nav.active_tab().prev())),
            _ => {}
        }
    }

    screens::handle_event(app, tui, event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::Tab;
    use crate::core::plan::Plan;
    use crate::test_support::{logged_in_app, test_app};

    fn press(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
        match route_event(app, tui, &event) {
            Some(action) => dispatch(app, tui, action),
            None => Effect::None,
        }
    }

    #[test]
    fn test_login_form_submits_on_password() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.sync_view(&app);
        press(&mut app, &mut tui, TuiEvent::InputChar('a'));
        press(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(tui.login_focus, LoginField::Password);
        assert!(!app.nav.is_authenticated());
        press(&mut app, &mut tui, TuiEvent::Submit);
        assert!(app.nav.is_authenticated());
    }

    #[test]
    fn test_explore_category_survives_course_detail_and_back() {
        let mut app = logged_in_app(Plan::Free);
        let mut tui = TuiState::new();
        tui.sync_view(&app);
        dispatch(
            &mut app,
            &mut tui,
            Action::Navigate(
                Screen::Explore,
                Some(ScreenData::Explore {
                    category: Some("Programação".into()),
                }),
            ),
        );
        dispatch(&mut app, &mut tui, Action::OpenCourse(1));
        assert_eq!(app.nav.current_screen(), Screen::CourseDetail);

        dispatch(&mut app, &mut tui, Action::Back);
        assert_eq!(app.nav.current_screen(), Screen::Explore);
        assert_eq!(app.nav.screen_data(), None);
        assert_eq!(app.courses.category_names()[tui.category], "Programação");

        dispatch(&mut app, &mut tui, Action::Back);
        assert_eq!(app.nav.current_screen(), Screen::Home);
        assert!(app.nav.history().is_empty());
        assert_eq!(app.nav.screen_data(), None);
    }

    #[test]
    fn test_logout_resets_login_mode() {
        let mut app = logged_in_app(Plan::Free);
        let mut tui = TuiState::new();
        tui.sync_view(&app);
        tui.login_mode = LoginMode::Code;
        tui.code.buffer.push_str("123456");
        dispatch(&mut app, &mut tui, Action::Logout);
        assert_eq!(tui.login_mode, LoginMode::SignIn);
        assert!(tui.code.buffer.is_empty());
    }

    #[test]
    fn test_force_quit_from_anywhere() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(press(&mut app, &mut tui, TuiEvent::ForceQuit), Effect::Quit);
    }

    #[test]
    fn test_tab_cycles_bottom_navigation() {
        let mut app = logged_in_app(Plan::Free);
        let mut tui = TuiState::new();
        tui.sync_view(&app);
        press(&mut app, &mut tui, TuiEvent::NextTab);
        assert_eq!(app.nav.active_tab(), Tab::Explore);
        press(&mut app, &mut tui, TuiEvent::PrevTab);
        press(&mut app, &mut tui, TuiEvent::PrevTab);
        assert_eq!(app.nav.active_tab(), Tab::Profile);
        assert_eq!(app.nav.current_screen(), Screen::Profile);
    }

    #[test]
    fn test_cursor_resets_on_screen_change() {
        let mut app = logged_in_app(Plan::Free);
        let mut tui = TuiState::new();
        dispatch(&mut app, &mut tui, Action::ChangeTab(Tab::Explanations));
        tui.list.set_len(4);
        press(&mut app, &mut tui, TuiEvent::CursorDown);
        assert_eq!(tui.list.selected(), 1);
        dispatch(&mut app, &mut tui, Action::OpenClass("1".into()));
        assert_eq!(tui.list.selected(), 0);
    }

    #[test]
    fn test_explore_payload_selects_category() {
        let mut app = logged_in_app(Plan::Free);
        let mut tui = TuiState::new();
        dispatch(
            &mut app,
            &mut tui,
            Action::Navigate(
                Screen::Explore,
                Some(ScreenData::Explore {
                    category: Some("Design".into()),
                }),
            ),
        );
        let names = app.courses.category_names();
        assert_eq!(names[tui.category], "Design");
    }

    #[test]
    fn test_playback_flow_through_keys() {
        let mut app = logged_in_app(Plan::Free);
        let mut tui = TuiState::new();
        dispatch(&mut app, &mut tui, Action::OpenCourse(1));
        dispatch(
            &mut app,
            &mut tui,
            Action::PlayCourseLesson {
                course_id: 1,
                lesson_index: 0,
            },
        );
        assert!(!app.nav.shows_bottom_navigation());
        press(&mut app, &mut tui, TuiEvent::InputChar(' '));
        assert!(is_playing(&app));
        press(&mut app, &mut tui, TuiEvent::NextTab);
        assert_eq!(app.nav.current_screen(), Screen::VideoPlayer);
        press(&mut app, &mut tui, TuiEvent::Escape);
        assert_eq!(app.nav.current_screen(), Screen::CourseDetail);
        assert!(!is_playing(&app));
    }
}
