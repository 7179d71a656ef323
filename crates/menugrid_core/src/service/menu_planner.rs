//! Menu planning use-case service.
//!
//! # Responsibility
//! - Run the parse → classify → distribute pipeline as one call.
//! - Own a validated configuration for repeated parses.
//!
//! # Invariants
//! - `parse` is total and deterministic for a given text and config.
//! - A fresh parse always returns a new grid; callers replace the old one.

use crate::config::{ConfigResult, MenuConfig};
use crate::diagnostics::Diagnostic;
use crate::distributor::distribute;
use crate::grid::{GridResult, WeeklyGrid};
use crate::model::menu::MomentSlot;
use crate::parser::structure_menu;
use log::info;
use std::time::Instant;

/// Section label and the moment it was assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MomentAssignment {
    pub label: String,
    pub moment: MomentSlot,
}

/// Full parse output: grid, per-section assignments and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
    pub grid: WeeklyGrid,
    /// One entry per section, in source order.
    pub assignments: Vec<MomentAssignment>,
    /// Dropped lines, unmapped sections and overflow, in pipeline order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses menu text into a weekly grid.
///
/// `config` is expected to be [`MenuConfig::default`] or to have passed
/// [`MenuConfig::into_validated`].
pub fn parse(raw_text: &str, config: &MenuConfig) -> WeeklyGrid {
    parse_with_report(raw_text, config).grid
}

/// Parses menu text and keeps the assignments and diagnostics.
pub fn parse_with_report(raw_text: &str, config: &MenuConfig) -> ParseReport {
    let started_at = Instant::now();

    let structured = structure_menu(raw_text, config);
    let assignments: Vec<MomentAssignment> = structured
        .categories
        .iter()
        .map(|category| MomentAssignment {
            label: category.raw_label.clone(),
            moment: category.moment.clone(),
        })
        .collect();
    let option_count: usize = structured
        .categories
        .iter()
        .map(|category| category.options.len())
        .sum();

    let mut diagnostics = structured.diagnostics;
    let distribution = distribute(structured.categories, config);
    diagnostics.extend(distribution.diagnostics);

    info!(
        "event=menu_parse module=service status=ok categories={} options={} filled_cells={} diagnostics={} duration_ms={}",
        assignments.len(),
        option_count,
        distribution.grid.filled_cells(),
        diagnostics.len(),
        started_at.elapsed().as_millis()
    );

    ParseReport {
        grid: distribution.grid,
        assignments,
        diagnostics,
    }
}

/// Planner facade holding one validated configuration.
#[derive(Debug, Clone)]
pub struct MenuPlanner {
    config: MenuConfig,
}

impl MenuPlanner {
    /// Creates a planner, normalizing and validating `config`.
    pub fn new(config: MenuConfig) -> ConfigResult<Self> {
        Ok(Self {
            config: config.into_validated()?,
        })
    }

    /// Planner with the built-in moment and day layout.
    pub fn with_defaults() -> Self {
        Self {
            config: MenuConfig::default(),
        }
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// See [`parse`].
    pub fn parse(&self, raw_text: &str) -> WeeklyGrid {
        parse(raw_text, &self.config)
    }

    /// See [`parse_with_report`].
    pub fn parse_with_report(&self, raw_text: &str) -> ParseReport {
        parse_with_report(raw_text, &self.config)
    }

    /// Swaps two days of one moment row in a caller-owned grid.
    pub fn swap(
        &self,
        grid: &mut WeeklyGrid,
        day_a: usize,
        moment_key: &str,
        day_b: usize,
    ) -> GridResult<()> {
        grid.swap(day_a, moment_key, day_b)
    }
}

impl Default for MenuPlanner {
    fn default() -> Self {
        Self::with_defaults()
    }
}
