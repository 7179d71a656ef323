//! Indentation-based menu text parser.
//!
//! # Responsibility
//! - Classify each line by indentation depth into section, option, dish or
//!   ingredient.
//! - Build the classified category tree with a small per-level grammar.
//!
//! # Invariants
//! - Parsing is total: malformed lines are dropped, never raised.
//! - Each level must be indented exactly one step deeper than its parent.
//!
//! # Input grammar
//! ```text
//! Comida                      <- section (depth 0)
//!   Pollo - 3 dias            <- option  (depth 1): <title> - <n> dia(s)
//!     Arroz con pollo         <- dish    (depth 2)
//!       Arroz | 200 | g       <- ingredient (depth 3): name | qty | unit
//! ```

pub mod grammar;
pub mod line;
pub mod structure;

pub use line::LineRole;
pub use structure::{structure_menu, StructuredMenu};
