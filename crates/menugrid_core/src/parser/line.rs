//! Line splitting and indentation-depth classification.

/// Structural role implied by a line's indentation depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// Depth 0: top-level section (category).
    Section,
    /// Depth 1: option header.
    Option,
    /// Depth 2: dish name.
    Dish,
    /// Depth 3: ingredient.
    Ingredient,
}

impl LineRole {
    fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            0 => Some(Self::Section),
            1 => Some(Self::Option),
            2 => Some(Self::Dish),
            3 => Some(Self::Ingredient),
            _ => None,
        }
    }
}

/// One non-blank source line after indentation analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    /// 1-based line number in the input.
    pub number: usize,
    /// Count of leading ASCII spaces.
    pub indent: usize,
    /// `None` when `indent` is not a recognized depth.
    pub role: Option<LineRole>,
    /// Line text with leading and trailing whitespace removed.
    pub text: &'a str,
}

/// Splits text on `\n`, `\r\n` or lone `\r`, yielding 1-based line numbers.
pub fn split_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut rest = Some(text);
    let mut number = 0;
    std::iter::from_fn(move || {
        let current = rest?;
        number += 1;
        match current.find(['\n', '\r']) {
            Some(index) => {
                let line = &current[..index];
                let skip = if current[index..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[index + skip..]);
                Some((number, line))
            }
            None => {
                rest = None;
                Some((number, current))
            }
        }
    })
}

/// Classifies one raw line; returns `None` for blank lines.
///
/// Only ASCII spaces count as indentation. A line whose leading run of spaces
/// is followed by other whitespace (a tab, for instance), or whose width is
/// not `0`, `w`, `2w` or `3w`, gets `role: None`.
pub fn classify_line(number: usize, raw: &str, indent_width: usize) -> Option<ClassifiedLine<'_>> {
    let line = raw.trim_end();
    let text = line.trim_start();
    if text.is_empty() {
        return None;
    }

    let indent = line.len() - line.trim_start_matches(' ').len();
    let mixed_whitespace = line.len() - text.len() != indent;
    let role = if mixed_whitespace || indent_width == 0 || indent % indent_width != 0 {
        None
    } else {
        LineRole::from_depth(indent / indent_width)
    };

    Some(ClassifiedLine {
        number,
        indent,
        role,
        text,
    })
}
