//! Menu nodes: ingredients, dishes, options and categories.
//!
//! # Invariants
//! - `MenuOption::duration_days` is at least 1 for every parsed option.
//! - `MomentSlot::Unmapped` categories never reach the weekly grid.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// Prefix of synthetic keys given to categories that match no moment.
pub const UNMAPPED_KEY_PREFIX: &str = "unmapped_";

/// One ingredient line of a dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Free-form amount, e.g. `200`. May be empty.
    pub quantity: String,
    /// Free-form unit, e.g. `g`. May be empty.
    pub unit: String,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit: unit.into(),
        }
    }

    /// Ingredient with only a name, used for lines without `|` fields.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, "", "")
    }

    /// Renders `name | quantity | unit`, skipping empty parts.
    pub fn display_line(&self) -> String {
        let mut line = self.name.clone();
        for part in [&self.quantity, &self.unit] {
            if !part.is_empty() {
                line.push_str(" | ");
                line.push_str(part);
            }
        }
        line
    }
}

/// A named dish with its ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
}

impl Dish {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
        }
    }
}

/// A menu alternative repeated on `duration_days` consecutive grid slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOption {
    pub title: String,
    /// Repetition count, not a calendar span.
    pub duration_days: u32,
    pub dishes: Vec<Dish>,
}

impl MenuOption {
    pub fn new(title: impl Into<String>, duration_days: u32) -> Self {
        Self {
            title: title.into(),
            duration_days,
            dishes: Vec::new(),
        }
    }
}

/// Moment assigned to a category by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MomentSlot {
    /// A configured moment key.
    Mapped(String),
    /// No free configured moment matched; carries the number of categories
    /// classified before this one.
    Unmapped(usize),
}

impl MomentSlot {
    /// Key as stored in classification history, e.g. `comida` or `unmapped_3`.
    pub fn key(&self) -> Cow<'_, str> {
        match self {
            Self::Mapped(key) => Cow::Borrowed(key.as_str()),
            Self::Unmapped(index) => Cow::Owned(format!("{UNMAPPED_KEY_PREFIX}{index}")),
        }
    }

    /// Configured key when mapped.
    pub fn mapped_key(&self) -> Option<&str> {
        match self {
            Self::Mapped(key) => Some(key.as_str()),
            Self::Unmapped(_) => None,
        }
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, Self::Mapped(_))
    }
}

impl Display for MomentSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.key())
    }
}

/// A top-level menu section, classified but not yet distributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Section label as written (trimmed).
    pub raw_label: String,
    pub moment: MomentSlot,
    pub options: Vec<MenuOption>,
}

impl Category {
    pub fn new(raw_label: impl Into<String>, moment: MomentSlot) -> Self {
        Self {
            raw_label: raw_label.into(),
            moment,
            options: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Ingredient, MomentSlot};

    #[test]
    fn display_line_skips_empty_parts() {
        assert_eq!(Ingredient::new("Arroz", "200", "g").display_line(), "Arroz | 200 | g");
        assert_eq!(Ingredient::named("Sal al gusto").display_line(), "Sal al gusto");
        assert_eq!(Ingredient::new("Limón", "1", "").display_line(), "Limón | 1");
    }

    #[test]
    fn unmapped_slot_renders_synthetic_key() {
        assert_eq!(MomentSlot::Unmapped(4).key(), "unmapped_4");
        assert_eq!(MomentSlot::Mapped("cena".into()).to_string(), "cena");
        assert_eq!(MomentSlot::Unmapped(0).mapped_key(), None);
    }
}
