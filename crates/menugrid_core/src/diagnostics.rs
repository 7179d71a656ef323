//! Non-fatal findings collected while parsing and distributing a menu.
//!
//! Nothing here is ever returned as an error: dropped lines, unmapped
//! sections and discarded repetitions are recorded so callers can show them,
//! and parsing always continues.

use std::fmt::{Display, Formatter};

/// What went wrong with one line or one moment row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Leading whitespace is not one of the four recognized depths.
    UnrecognizedIndent { width: usize },
    /// Option line with no open section.
    OrphanOption,
    /// Dish line with no open option.
    OrphanDish,
    /// Ingredient line with no open dish.
    OrphanIngredient,
    /// Option line that is not `<title> - <n> dia(s)` with `n >= 1`.
    MalformedOption,
    /// Ingredient line without three `|` fields, dropped in strict mode.
    MalformedIngredient,
    /// Section label matched no free moment.
    UnmappedCategory { label: String, key: String },
    /// Repetitions beyond the grid width for one moment.
    OverflowDiscard { moment: String, discarded: u64 },
}

impl DiagnosticKind {
    /// Stable snake_case code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnrecognizedIndent { .. } => "unrecognized_indent",
            Self::OrphanOption => "orphan_option",
            Self::OrphanDish => "orphan_dish",
            Self::OrphanIngredient => "orphan_ingredient",
            Self::MalformedOption => "malformed_option",
            Self::MalformedIngredient => "malformed_ingredient",
            Self::UnmappedCategory { .. } => "unmapped_category",
            Self::OverflowDiscard { .. } => "overflow_discard",
        }
    }
}

/// One finding, tied to a 1-based source line when there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: Option<usize>,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn at_line(line: usize, kind: DiagnosticKind) -> Self {
        Self {
            line: Some(line),
            kind,
        }
    }

    pub fn global(kind: DiagnosticKind) -> Self {
        Self { line: None, kind }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(line) = self.line {
            write!(f, "line {line}: ")?;
        }
        match &self.kind {
            DiagnosticKind::UnrecognizedIndent { width } => {
                write!(f, "unrecognized indentation of {width} spaces")
            }
            DiagnosticKind::OrphanOption => write!(f, "option outside of any section"),
            DiagnosticKind::OrphanDish => write!(f, "dish without an open option"),
            DiagnosticKind::OrphanIngredient => write!(f, "ingredient without an open dish"),
            DiagnosticKind::MalformedOption => {
                write!(f, "option line must look like `<title> - <n> dias`")
            }
            DiagnosticKind::MalformedIngredient => {
                write!(f, "ingredient line must look like `name | quantity | unit`")
            }
            DiagnosticKind::UnmappedCategory { label, key } => {
                write!(f, "section `{label}` matched no free moment (assigned `{key}`)")
            }
            DiagnosticKind::OverflowDiscard { moment, discarded } => write!(
                f,
                "moment `{moment}` has {discarded} repetitions beyond the week; discarded"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Diagnostic, DiagnosticKind};

    #[test]
    fn display_includes_line_when_present() {
        let diagnostic = Diagnostic::at_line(3, DiagnosticKind::OrphanDish);
        assert_eq!(diagnostic.to_string(), "line 3: dish without an open option");

        let overflow = Diagnostic::global(DiagnosticKind::OverflowDiscard {
            moment: "cena".into(),
            discarded: 2,
        });
        assert!(overflow.to_string().starts_with("moment `cena`"));
        assert_eq!(overflow.kind.code(), "overflow_discard");
    }
}
