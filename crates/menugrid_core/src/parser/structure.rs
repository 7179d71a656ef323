//! Assembles classified lines into the category tree.

use super::grammar::{parse_ingredient_fields, parse_option_header};
use super::line::{classify_line, split_lines, ClassifiedLine, LineRole};
use crate::classifier::MomentClassifier;
use crate::config::{IngredientMode, MenuConfig};
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::model::menu::{Category, Dish, Ingredient, MenuOption, MomentSlot};
use log::debug;

/// Output of the structuring pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredMenu {
    /// Sections in source order, each already classified.
    pub categories: Vec<Category>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses menu text into classified categories.
///
/// Never fails: every line that does not fit the grammar is dropped and
/// recorded as a diagnostic.
pub fn structure_menu(text: &str, config: &MenuConfig) -> StructuredMenu {
    let mut structurer = Structurer::new(config);
    for (number, raw) in split_lines(text) {
        if let Some(line) = classify_line(number, raw, config.indent_width) {
            structurer.accept(&line);
        }
    }
    structurer.finish()
}

struct Structurer<'a> {
    ingredient_mode: IngredientMode,
    classifier: MomentClassifier<'a>,
    categories: Vec<Category>,
    diagnostics: Vec<Diagnostic>,
    option_open: bool,
    dish_open: bool,
}

impl<'a> Structurer<'a> {
    fn new(config: &'a MenuConfig) -> Self {
        Self {
            ingredient_mode: config.ingredient_mode,
            classifier: MomentClassifier::new(config),
            categories: Vec::new(),
            diagnostics: Vec::new(),
            option_open: false,
            dish_open: false,
        }
    }

    fn accept(&mut self, line: &ClassifiedLine<'_>) {
        match line.role {
            Some(LineRole::Section) => self.open_section(line),
            Some(LineRole::Option) => self.open_option(line),
            Some(LineRole::Dish) => self.open_dish(line),
            Some(LineRole::Ingredient) => self.push_ingredient(line),
            None => self.reject(
                line,
                DiagnosticKind::UnrecognizedIndent { width: line.indent },
            ),
        }
    }

    fn open_section(&mut self, line: &ClassifiedLine<'_>) {
        let moment = self.classifier.classify(line.text);
        if let MomentSlot::Unmapped(_) = moment {
            self.reject(
                line,
                DiagnosticKind::UnmappedCategory {
                    label: line.text.to_string(),
                    key: moment.key().into_owned(),
                },
            );
        }
        self.categories.push(Category::new(line.text, moment));
        self.option_open = false;
        self.dish_open = false;
    }

    fn open_option(&mut self, line: &ClassifiedLine<'_>) {
        let Some(category) = self.categories.last_mut() else {
            self.reject(line, DiagnosticKind::OrphanOption);
            return;
        };

        // A rejected header closes the previous option so its dishes are not
        // attached to a sibling.
        self.dish_open = false;
        match parse_option_header(line.text) {
            Some((title, duration_days)) => {
                category.options.push(MenuOption::new(title, duration_days));
                self.option_open = true;
            }
            None => {
                self.option_open = false;
                self.reject(line, DiagnosticKind::MalformedOption);
            }
        }
    }

    fn open_dish(&mut self, line: &ClassifiedLine<'_>) {
        let Some(option) = self.current_option_mut() else {
            self.reject(line, DiagnosticKind::OrphanDish);
            return;
        };
        option.dishes.push(Dish::new(line.text));
        self.dish_open = true;
    }

    fn push_ingredient(&mut self, line: &ClassifiedLine<'_>) {
        let ingredient = match (parse_ingredient_fields(line.text), self.ingredient_mode) {
            (Some(ingredient), _) => Some(ingredient),
            (None, IngredientMode::Lenient) => Some(Ingredient::named(line.text)),
            (None, IngredientMode::Strict) => None,
        };

        let Some(dish) = self.current_dish_mut() else {
            self.reject(line, DiagnosticKind::OrphanIngredient);
            return;
        };
        match ingredient {
            Some(ingredient) => dish.ingredients.push(ingredient),
            None => self.reject(line, DiagnosticKind::MalformedIngredient),
        }
    }

    fn current_option_mut(&mut self) -> Option<&mut MenuOption> {
        if !self.option_open {
            return None;
        }
        self.categories.last_mut()?.options.last_mut()
    }

    fn current_dish_mut(&mut self) -> Option<&mut Dish> {
        if !self.dish_open {
            return None;
        }
        self.current_option_mut()?.dishes.last_mut()
    }

    fn reject(&mut self, line: &ClassifiedLine<'_>, kind: DiagnosticKind) {
        debug!(
            "event=menu_line_dropped module=parser line={} code={}",
            line.number,
            kind.code()
        );
        self.diagnostics.push(Diagnostic::at_line(line.number, kind));
    }

    fn finish(self) -> StructuredMenu {
        StructuredMenu {
            categories: self.categories,
            diagnostics: self.diagnostics,
        }
    }
}
