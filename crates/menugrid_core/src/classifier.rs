//! Section label → moment classification.
//!
//! # Responsibility
//! - Map each section label to a configured moment key by alias prefix.
//! - Hand out repeatable-family slots in order of appearance.
//!
//! # Invariants
//! - A configured key is assigned to at most one section per parse.
//! - Unmapped sections get `Unmapped(n)`, where `n` counts sections
//!   classified before them, so synthetic keys never collide.

use crate::config::MenuConfig;
use crate::model::menu::MomentSlot;

/// Stateful classifier for one parse run.
///
/// Assignment depends on what earlier sections took, so one classifier must
/// see the sections in source order.
#[derive(Debug)]
pub struct MomentClassifier<'a> {
    config: &'a MenuConfig,
    assigned: Vec<MomentSlot>,
}

impl<'a> MomentClassifier<'a> {
    pub fn new(config: &'a MenuConfig) -> Self {
        Self {
            config,
            assigned: Vec::new(),
        }
    }

    /// Classifies the next section label and records the result.
    pub fn classify(&mut self, label: &str) -> MomentSlot {
        let normalized = label.trim().to_lowercase();
        let slot = self
            .resolve(&normalized)
            .map(MomentSlot::Mapped)
            .unwrap_or(MomentSlot::Unmapped(self.assigned.len()));
        self.assigned.push(slot.clone());
        slot
    }

    /// Slots assigned so far, in source order.
    pub fn assigned(&self) -> &[MomentSlot] {
        &self.assigned
    }

    fn resolve(&self, normalized_label: &str) -> Option<String> {
        for moment in &self.config.moments {
            if !moment.matches(normalized_label) {
                continue;
            }

            if let Some(family) = self.config.family_of(&moment.key) {
                if let Some(slot) = family.slots().iter().find(|slot| !self.is_used(slot)) {
                    return Some(slot.clone());
                }
                continue;
            }

            if !self.is_used(&moment.key) {
                return Some(moment.key.clone());
            }
        }
        None
    }

    fn is_used(&self, key: &str) -> bool {
        self.assigned
            .iter()
            .any(|slot| slot.mapped_key() == Some(key))
    }
}

#[cfg(test)]
mod tests {
    use super::MomentClassifier;
    use crate::config::{MenuConfig, MomentDefinition, RepeatableFamily};
    use crate::model::menu::MomentSlot;

    fn mapped(key: &str) -> MomentSlot {
        MomentSlot::Mapped(key.to_string())
    }

    #[test]
    fn labels_match_by_lowercase_prefix() {
        let config = MenuConfig::default();
        let mut classifier = MomentClassifier::new(&config);
        assert_eq!(classifier.classify("  DESAYUNO (8am)"), mapped("desayuno"));
        assert_eq!(classifier.classify("Comida principal"), mapped("comida"));
        assert_eq!(classifier.classify("Cena"), mapped("cena"));
    }

    #[test]
    fn snack_sections_fill_family_slots_in_order() {
        let config = MenuConfig::default();
        let mut classifier = MomentClassifier::new(&config);
        assert_eq!(classifier.classify("Snack"), mapped("colacion1"));
        assert_eq!(classifier.classify("Colación de la tarde"), mapped("colacion2"));
        assert_eq!(classifier.classify("snack extra"), MomentSlot::Unmapped(2));
    }

    #[test]
    fn repeated_plain_moment_becomes_unmapped_with_running_index() {
        let config = MenuConfig::default();
        let mut classifier = MomentClassifier::new(&config);
        classifier.classify("Desayuno");
        classifier.classify("Postres");
        assert_eq!(classifier.classify("Desayuno"), MomentSlot::Unmapped(2));
        assert_eq!(
            classifier.assigned(),
            &[mapped("desayuno"), MomentSlot::Unmapped(1), MomentSlot::Unmapped(2)]
        );
    }

    #[test]
    fn used_match_falls_through_to_later_moment() {
        let config = MenuConfig {
            moments: vec![
                MomentDefinition::new("almuerzo", "Almuerzo", ["almuerzo"]),
                MomentDefinition::new("lonche", "Lonche", ["almuerzo", "lonche"]),
            ],
            repeatable_families: Vec::new(),
            ..MenuConfig::default()
        };
        let mut classifier = MomentClassifier::new(&config);
        assert_eq!(classifier.classify("Almuerzo"), mapped("almuerzo"));
        assert_eq!(classifier.classify("Almuerzo ligero"), mapped("lonche"));
    }

    #[test]
    fn three_slot_family_is_supported() {
        let config = MenuConfig {
            moments: vec![
                MomentDefinition::new("s1", "Snack 1", ["snack"]),
                MomentDefinition::new("s2", "Snack 2", ["snack"]),
                MomentDefinition::new("s3", "Snack 3", ["snack"]),
            ],
            repeatable_families: vec![RepeatableFamily::new(["s1", "s2", "s3"])],
            ..MenuConfig::default()
        };
        let mut classifier = MomentClassifier::new(&config);
        let slots: Vec<MomentSlot> = (0..4).map(|_| classifier.classify("Snack")).collect();
        assert_eq!(
            slots,
            vec![mapped("s1"), mapped("s2"), mapped("s3"), MomentSlot::Unmapped(3)]
        );
    }
}
