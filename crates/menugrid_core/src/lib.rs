//! Core domain logic for the weekly menu grid.
//! Parses indented menu text into a 7-day × moment grid and owns the swap
//! contract used by re-arrangement front ends.

pub mod classifier;
pub mod config;
pub mod diagnostics;
pub mod distributor;
pub mod grid;
pub mod logging;
pub mod model;
pub mod parser;
pub mod service;

pub use config::{
    ConfigError, ConfigResult, DayDefinition, IngredientMode, MenuConfig, MomentDefinition,
    RepeatableFamily, GRID_DAYS,
};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use grid::{swap, Cell, GridError, GridResult, WeeklyGrid};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::menu::{Category, Dish, Ingredient, MenuOption, MomentSlot};
pub use service::menu_planner::{
    parse, parse_with_report, MenuPlanner, MomentAssignment, ParseReport,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
