//! # Core Application Logic
//!
//! This module contains EduApp's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Pure transitions│
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │   Tests    │
//!     │  Adapter   │                          │ (scenarios)│
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`plan`]: Subscription tiers and the `can_access` check
//! - [`catalog`]: The explanations tree and per-plan availability
//! - [`navigation`]: Screens, tabs, and the `Navigator` back stack
//! - [`exercise`]: Answering a question set and scoring it
//! - [`player`]: Simulated video playback
//! - [`courses`]: Marketplace sample data
//! - [`messages`]: Mentor conversations
//! - [`config`]: Layered settings
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//!
//! Only `config` and `Catalog::load` touch the filesystem.

pub mod action;
pub mod catalog;
pub mod config;
pub mod courses;
pub mod exercise;
pub mod messages;
pub mod navigation;
pub mod plan;
pub mod player;
pub mod state;
