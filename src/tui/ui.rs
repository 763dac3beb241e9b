use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{BottomNav, TitleBar};
use crate::tui::screens;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    if !app.nav.is_authenticated() {
        screens::login::render(frame, frame.area(), tui);
        return;
    }

    use Constraint::{Length, Min};
    let nav_height = if app.nav.shows_bottom_navigation() { 3 } else { 0 };
    let layout = Layout::vertical([Length(1), Min(0), Length(nav_height)]);
    let [title_area, main_area, nav_area] = layout.areas(frame.area());

    let title = if app.nav.can_go_back() {
        format!("‹ {}", screens::title(app))
    } else {
        screens::title(app)
    };
    TitleBar::new(title, app.plan(), app.status_message.clone()).render(frame, title_area);

    screens::render(frame, main_area, app, tui);

    if nav_height > 0 {
        BottomNav::new(app.nav.active_tab(), app.inbox.total_unread()).render(frame, nav_area);
    }
}
