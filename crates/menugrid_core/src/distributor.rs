//! Duration-weighted distribution of options onto the weekly grid.
//!
//! # Invariants
//! - Categories sharing a moment are concatenated in source order.
//! - An option with `duration_days = k` fills the next `k` free day slots of
//!   its moment row; the row is padded with absent cells and truncated to
//!   the grid width.
//! - Unmapped categories never contribute.

use crate::config::MenuConfig;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::grid::{Cell, WeeklyGrid};
use crate::model::menu::{Category, MenuOption};
use log::debug;
use std::sync::Arc;

/// Grid plus any overflow diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    pub grid: WeeklyGrid,
    pub diagnostics: Vec<Diagnostic>,
}

/// Consumes classified categories and builds the weekly grid.
pub fn distribute(categories: Vec<Category>, config: &MenuConfig) -> Distribution {
    let width = config.grid_width();
    let mut grid = WeeklyGrid::empty(config);
    let mut diagnostics = Vec::new();

    let shared: Vec<(Option<String>, Vec<Arc<MenuOption>>)> = categories
        .into_iter()
        .map(|category| {
            let key = category.moment.mapped_key().map(str::to_string);
            let options = category.options.into_iter().map(Arc::new).collect();
            (key, options)
        })
        .collect();

    // Grid rows follow `config.moments` order.
    for (index, moment_key) in config.moment_keys().enumerate() {
        let options = shared
            .iter()
            .filter(|(key, _)| key.as_deref() == Some(moment_key))
            .flat_map(|(_, options)| options.iter());

        let (row, discarded) = fill_row(options, width);
        if discarded > 0 {
            debug!(
                "event=menu_overflow module=distributor moment={} discarded={}",
                moment_key, discarded
            );
            diagnostics.push(Diagnostic::global(DiagnosticKind::OverflowDiscard {
                moment: moment_key.to_string(),
                discarded,
            }));
        }

        grid.set_row(index, row);
    }

    Distribution { grid, diagnostics }
}

/// Repeats each option `duration_days` times into a row of exactly `width`
/// cells. Returns the row and how many repetitions did not fit.
fn fill_row<'a>(
    options: impl Iterator<Item = &'a Arc<MenuOption>>,
    width: usize,
) -> (Vec<Cell>, u64) {
    let mut row: Vec<Cell> = Vec::with_capacity(width);
    let mut discarded: u64 = 0;
    for option in options {
        let wanted = u64::from(option.duration_days);
        let free = (width - row.len()) as u64;
        let placed = wanted.min(free);
        for _ in 0..placed {
            row.push(Some(Arc::clone(option)));
        }
        discarded += wanted - placed;
    }
    row.resize(width, None);
    (row, discarded)
}
