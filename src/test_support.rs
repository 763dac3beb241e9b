//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::courses::CourseCatalog;
use crate::core::messages::Inbox;
use crate::core::plan::Plan;
use crate::core::state::App;

/// An `App` over the bundled data, logged out, on the free plan.
pub fn test_app() -> App {
    app_with_config(&ResolvedConfig::default())
}

/// An `App` that has already logged in with the given plan.
pub fn logged_in_app(plan: Plan) -> App {
    let config = ResolvedConfig {
        plan,
        ..ResolvedConfig::default()
    };
    let mut app = app_with_config(&config);
    app.nav.login();
    app
}

fn app_with_config(config: &ResolvedConfig) -> App {
    App::new(
        Catalog::builtin().expect("bundled catalog must parse"),
        CourseCatalog::builtin().expect("bundled courses must parse"),
        Inbox::builtin().expect("bundled conversations must parse"),
        config,
    )
}
