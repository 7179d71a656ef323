//! Menu domain model recovered from indented menu text.
//!
//! # Responsibility
//! - Define the Category → Option → Dish → Ingredient hierarchy.
//! - Keep each node a plain value so grids compare structurally.
//!
//! # Invariants
//! - Children are owned by exactly one parent during parsing.
//! - After distribution an option may be shared by several grid cells.

pub mod menu;
