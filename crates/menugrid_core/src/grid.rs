//! Weekly grid: seven days × configured moments of optional menu options.
//!
//! # Responsibility
//! - Hold the distributed menu as the single durable output of a parse.
//! - Allow in-row swaps as the only mutation.
//!
//! # Invariants
//! - Every day index and every configured moment key has a cell.
//! - Swap never changes cells outside the two addressed ones.
//! - Rejected swaps leave the grid untouched.

use crate::config::{MenuConfig, GRID_DAYS};
use crate::model::menu::MenuOption;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// One grid cell: a shared option or nothing.
pub type Cell = Option<Arc<MenuOption>>;

/// Result type for grid APIs.
pub type GridResult<T> = Result<T, GridError>;

/// Invalid-argument errors for grid access and mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Day index is not in `0..days`.
    DayOutOfRange { day: usize, days: usize },
    /// Moment key is not configured for this grid.
    UnknownMoment(String),
    /// Deserialized grid data violates completeness or option invariants.
    InvalidSnapshot(String),
}

impl Display for GridError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DayOutOfRange { day, days } => {
                write!(f, "day index {day} out of range 0..{days}")
            }
            Self::UnknownMoment(key) => write!(f, "unknown moment key: `{key}`"),
            Self::InvalidSnapshot(message) => write!(f, "invalid grid snapshot: {message}"),
        }
    }
}

impl Error for GridError {}

/// Day index → moment key → option-or-absent.
///
/// Equality is structural: two grids are equal when their day names, moment
/// keys and option contents match, regardless of `Arc` identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridSnapshot", into = "GridSnapshot")]
pub struct WeeklyGrid {
    days: Vec<String>,
    moments: Vec<String>,
    // cells[day][moment_index]
    cells: Vec<Vec<Cell>>,
}

impl WeeklyGrid {
    /// Creates a grid with every cell absent for the configured layout.
    pub fn empty(config: &MenuConfig) -> Self {
        let moments: Vec<String> = config.moment_keys().map(str::to_string).collect();
        let days = config.days.names().to_vec();
        let cells = days.iter().map(|_| vec![None; moments.len()]).collect();
        Self {
            days,
            moments,
            cells,
        }
    }

    /// Day names in column order.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Moment keys in row order.
    pub fn moment_keys(&self) -> &[String] {
        &self.moments
    }

    /// Total cell count: days × moments.
    pub fn cell_count(&self) -> usize {
        self.days.len() * self.moments.len()
    }

    /// Returns one cell.
    pub fn get(&self, day: usize, moment_key: &str) -> GridResult<Option<&Arc<MenuOption>>> {
        let moment = self.moment_index(moment_key)?;
        self.check_day(day)?;
        Ok(self.cells[day][moment].as_ref())
    }

    /// Returns all cells of one moment row, in day order.
    pub fn row(&self, moment_key: &str) -> GridResult<Vec<Option<&Arc<MenuOption>>>> {
        let moment = self.moment_index(moment_key)?;
        Ok(self
            .cells
            .iter()
            .map(|day_cells| day_cells[moment].as_ref())
            .collect())
    }

    /// Returns `(moment_key, cell)` pairs for one day, in moment order.
    pub fn day(&self, day: usize) -> GridResult<Vec<(&str, Option<&Arc<MenuOption>>)>> {
        self.check_day(day)?;
        Ok(self
            .moments
            .iter()
            .zip(&self.cells[day])
            .map(|(key, cell)| (key.as_str(), cell.as_ref()))
            .collect())
    }

    /// Number of non-absent cells.
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Exchanges `(day_a, moment_key)` and `(day_b, moment_key)`.
    ///
    /// Swapping a day with itself, or two absent cells, is a no-op.
    ///
    /// # Errors
    /// - `DayOutOfRange` when either day is not a valid index.
    /// - `UnknownMoment` when `moment_key` is not configured.
    pub fn swap(&mut self, day_a: usize, moment_key: &str, day_b: usize) -> GridResult<()> {
        let checked = self
            .moment_index(moment_key)
            .and_then(|moment| self.check_day(day_a).map(|_| moment))
            .and_then(|moment| self.check_day(day_b).map(|_| moment));
        let moment = match checked {
            Ok(moment) => moment,
            Err(err) => {
                warn!(
                    "event=grid_swap module=grid status=rejected day_a={} day_b={} moment={} error={}",
                    day_a, day_b, moment_key, err
                );
                return Err(err);
            }
        };

        if day_a != day_b {
            let first = self.cells[day_a][moment].take();
            self.cells[day_a][moment] = self.cells[day_b][moment].take();
            self.cells[day_b][moment] = first;
        }
        debug!(
            "event=grid_swap module=grid status=ok day_a={} day_b={} moment={}",
            day_a, day_b, moment_key
        );
        Ok(())
    }

    /// Overwrites the row at `moment` (index into `moment_keys`).
    pub(crate) fn set_row(&mut self, moment: usize, row: Vec<Cell>) {
        for (day_cells, cell) in self.cells.iter_mut().zip(row) {
            if let Some(slot) = day_cells.get_mut(moment) {
                *slot = cell;
            }
        }
    }

    fn moment_index(&self, moment_key: &str) -> GridResult<usize> {
        self.moments
            .iter()
            .position(|key| key == moment_key)
            .ok_or_else(|| GridError::UnknownMoment(moment_key.to_string()))
    }

    fn check_day(&self, day: usize) -> GridResult<()> {
        if day < self.days.len() {
            Ok(())
        } else {
            Err(GridError::DayOutOfRange {
                day,
                days: self.days.len(),
            })
        }
    }
}

/// Swaps two cells of one moment row; see [`WeeklyGrid::swap`].
pub fn swap(grid: &mut WeeklyGrid, day_a: usize, moment_key: &str, day_b: usize) -> GridResult<()> {
    grid.swap(day_a, moment_key, day_b)
}

/// Wire shape of a grid: one key → option map per day.
#[derive(Serialize, Deserialize)]
struct GridSnapshot {
    days: Vec<String>,
    moments: Vec<String>,
    cells: Vec<BTreeMap<String, Cell>>,
}

impl From<WeeklyGrid> for GridSnapshot {
    fn from(value: WeeklyGrid) -> Self {
        let cells = value
            .cells
            .into_iter()
            .map(|day_cells| value.moments.iter().cloned().zip(day_cells).collect())
            .collect();
        Self {
            days: value.days,
            moments: value.moments,
            cells,
        }
    }
}

impl TryFrom<GridSnapshot> for WeeklyGrid {
    type Error = GridError;

    fn try_from(value: GridSnapshot) -> Result<Self, Self::Error> {
        if value.days.len() != GRID_DAYS {
            return Err(GridError::InvalidSnapshot(format!(
                "expected {GRID_DAYS} days, got {}",
                value.days.len()
            )));
        }
        if value.cells.len() != value.days.len() {
            return Err(GridError::InvalidSnapshot(format!(
                "expected {} day entries, got {}",
                value.days.len(),
                value.cells.len()
            )));
        }
        let mut seen = HashSet::new();
        if let Some(duplicate) = value.moments.iter().find(|key| !seen.insert(key.as_str())) {
            return Err(GridError::InvalidSnapshot(format!(
                "duplicate moment key `{duplicate}`"
            )));
        }

        let mut cells = Vec::with_capacity(value.cells.len());
        for (day, mut entries) in value.cells.into_iter().enumerate() {
            let mut day_cells = Vec::with_capacity(value.moments.len());
            for key in &value.moments {
                let cell = entries.remove(key).ok_or_else(|| {
                    GridError::InvalidSnapshot(format!("day {day} is missing moment `{key}`"))
                })?;
                if let Some(option) = cell.as_ref().filter(|option| option.duration_days == 0) {
                    return Err(GridError::InvalidSnapshot(format!(
                        "day {day} moment `{key}` has zero-day option `{}`",
                        option.title
                    )));
                }
                day_cells.push(cell);
            }
            if let Some(extra) = entries.keys().next() {
                return Err(GridError::InvalidSnapshot(format!(
                    "day {day} has unknown moment `{extra}`"
                )));
            }
            cells.push(day_cells);
        }

        Ok(Self {
            days: value.days,
            moments: value.moments,
            cells,
        })
    }
}
