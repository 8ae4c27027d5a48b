//! # Core Application Logic
//!
//! This module contains tuido's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                ┌─────────────────────────────┐
//!                │           CORE              │
//!                │      (this module)          │
//!                │                             │
//!                │  • Task / TaskList (model)  │
//!                │  • State (app data)         │
//!                │  • Action (events)          │
//!                │  • update() (reducer)       │
//!                │  • TaskStore (persistence)  │
//!                │                             │
//!                │  No UI. No terminal.        │
//!                └──────────────┬──────────────┘
//!                               │
//!                               ▼
//!                        ┌────────────┐
//!                        │    TUI     │
//!                        │  Adapter   │
//!                        │ (ratatui)  │
//!                        └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`task`]: `Task` and `TaskList`, the ordered to-do items
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()`, everything that can
//!   happen in the app
//! - [`store`]: `TaskStore`, the JSON file the list round-trips through
//! - [`config`]: settings file and its resolution

pub mod action;
pub mod config;
pub mod state;
pub mod store;
pub mod task;
