//! Per-level line grammar: option headers and ingredient fields.

use crate::model::menu::Ingredient;
use once_cell::sync::Lazy;
use regex::Regex;

// Accepts `dia`, `dias`, `día`, `días` in any case.
static OPTION_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(.+?)\s*-\s*(\d+)\s*d[ií]as?$").expect("valid option header regex")
});

/// Parses `<title> - <n> dia(s)`; returns `(title, n)`.
///
/// Returns `None` when the pattern does not match, `n` is zero, or `n` does
/// not fit in `u32`.
pub fn parse_option_header(text: &str) -> Option<(String, u32)> {
    let caps = OPTION_HEADER_RE.captures(text.trim())?;
    let title = caps.get(1)?.as_str().trim();
    let duration = caps.get(2)?.as_str().parse::<u32>().ok()?;
    if title.is_empty() || duration == 0 {
        return None;
    }
    Some((title.to_string(), duration))
}

/// Splits `name | quantity | unit` into an ingredient.
///
/// Requires exactly three `|`-separated fields, each non-empty after trim.
pub fn parse_ingredient_fields(text: &str) -> Option<Ingredient> {
    let fields: Vec<&str> = text.split('|').map(str::trim).collect();
    match fields.as_slice() {
        [name, quantity, unit] if !name.is_empty() && !quantity.is_empty() && !unit.is_empty() => {
            Some(Ingredient::new(*name, *quantity, *unit))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_ingredient_fields, parse_option_header};
    use crate::model::menu::Ingredient;

    #[test]
    fn option_header_accepts_unit_variants() {
        for text in [
            "Pollo - 3 dias",
            "Pollo - 3 días",
            "Pollo-3 DIAS",
            "Pollo  -  3dia",
            "Pollo - 3 Día",
        ] {
            let (title, days) = parse_option_header(text).unwrap_or_else(|| panic!("{text}"));
            assert_eq!(title, "Pollo");
            assert_eq!(days, 3);
        }
    }

    #[test]
    fn option_header_keeps_inner_hyphens_in_title() {
        assert_eq!(
            parse_option_header("Pollo-asado con papas - 2 días"),
            Some(("Pollo-asado con papas".to_string(), 2))
        );
    }

    #[test]
    fn option_header_rejects_malformed_lines() {
        assert_eq!(parse_option_header("Pollo 3 dias"), None);
        assert_eq!(parse_option_header("Pollo - tres dias"), None);
        assert_eq!(parse_option_header("Pollo - 3 semanas"), None);
        assert_eq!(parse_option_header("Pollo - 0 dias"), None);
        assert_eq!(parse_option_header("Pollo - 99999999999 dias"), None);
    }

    #[test]
    fn ingredient_fields_need_exactly_three_parts() {
        assert_eq!(
            parse_ingredient_fields(" Arroz |200| g "),
            Some(Ingredient::new("Arroz", "200", "g"))
        );
        assert_eq!(parse_ingredient_fields("Sal al gusto"), None);
        assert_eq!(parse_ingredient_fields("Sal | pizca"), None);
        assert_eq!(parse_ingredient_fields("a | b | c | d"), None);
        assert_eq!(parse_ingredient_fields("Aceite |  | ml"), None);
    }
}
