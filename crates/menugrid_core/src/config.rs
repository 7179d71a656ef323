//! Menu grid configuration: moments of day, day names and parsing knobs.
//!
//! # Responsibility
//! - Define the fixed moment/day layout that shapes every weekly grid.
//! - Load overrides from TOML and validate them before use.
//!
//! # Invariants
//! - Exactly seven day names.
//! - Moment keys are non-empty and unique; each moment has at least one alias.
//! - Aliases are stored trimmed and lowercase.
//! - Every repeatable family references known moment keys, has at least two
//!   slots, and no key belongs to more than one family.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Number of day columns in every weekly grid.
pub const GRID_DAYS: usize = 7;

/// Default indentation step (in spaces) between structural levels.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Result type for configuration APIs.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration-layer errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Day list does not contain exactly [`GRID_DAYS`] names.
    InvalidDayCount(usize),
    /// A day name is blank after trim.
    EmptyDayName(usize),
    /// No moments configured.
    NoMoments,
    /// A moment key is blank after trim.
    EmptyMomentKey,
    /// The same moment key is configured twice.
    DuplicateMomentKey(String),
    /// A moment has no usable alias.
    MissingAliases(String),
    /// A repeatable family names a key that is not a configured moment.
    UnknownFamilySlot(String),
    /// A repeatable family has fewer than two slots.
    FamilyTooSmall(Vec<String>),
    /// A moment key appears in more than one repeatable family.
    SlotInMultipleFamilies(String),
    /// Indentation step must be at least one space.
    ZeroIndentWidth,
    /// Config file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// Config text is not valid TOML for [`MenuConfig`].
    Toml(toml::de::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDayCount(count) => {
                write!(f, "expected exactly {GRID_DAYS} day names, got {count}")
            }
            Self::EmptyDayName(index) => write!(f, "day name at index {index} is blank"),
            Self::NoMoments => write!(f, "at least one moment must be configured"),
            Self::EmptyMomentKey => write!(f, "moment key must not be blank"),
            Self::DuplicateMomentKey(key) => write!(f, "duplicate moment key: `{key}`"),
            Self::MissingAliases(key) => write!(f, "moment `{key}` has no aliases"),
            Self::UnknownFamilySlot(key) => {
                write!(f, "repeatable family references unknown moment `{key}`")
            }
            Self::FamilyTooSmall(slots) => write!(
                f,
                "repeatable family needs at least two slots, got [{}]",
                slots.join(", ")
            ),
            Self::SlotInMultipleFamilies(key) => {
                write!(f, "moment `{key}` belongs to more than one repeatable family")
            }
            Self::ZeroIndentWidth => write!(f, "indent_width must be at least 1"),
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Toml(err) => write!(f, "invalid config TOML: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Toml(err) => Some(err),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Toml(value)
    }
}

/// One meal slot of the day.
///
/// Section labels are matched against `aliases` by lowercase prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MomentDefinition {
    /// Stable key used by grid cells, e.g. `comida`.
    pub key: String,
    /// Human-readable row label, e.g. `Comida`.
    pub label: String,
    /// Lowercase label prefixes that select this moment.
    pub aliases: Vec<String>,
}

impl MomentDefinition {
    /// Creates a moment definition.
    pub fn new<I, S>(key: impl Into<String>, label: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            label: label.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns whether an already-lowercased label starts with any alias.
    ///
    /// Aliases are compared case-insensitively; blank aliases never match.
    pub fn matches(&self, normalized_label: &str) -> bool {
        self.aliases.iter().any(|alias| {
            let alias = alias.trim().to_lowercase();
            !alias.is_empty() && normalized_label.starts_with(&alias)
        })
    }
}

/// Ordered list of exactly seven day names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct DayDefinition {
    names: Vec<String>,
}

impl DayDefinition {
    /// Builds a day definition, rejecting any count other than [`GRID_DAYS`].
    pub fn new<I, S>(names: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| {
                let name: String = name.into();
                name.trim().to_string()
            })
            .collect();
        if names.len() != GRID_DAYS {
            return Err(ConfigError::InvalidDayCount(names.len()));
        }
        if let Some(index) = names.iter().position(|name| name.is_empty()) {
            return Err(ConfigError::EmptyDayName(index));
        }
        Ok(Self { names })
    }

    /// Day names in column order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Always [`GRID_DAYS`].
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for DayDefinition {
    fn default() -> Self {
        Self {
            names: [
                "Lunes",
                "Martes",
                "Miércoles",
                "Jueves",
                "Viernes",
                "Sábado",
                "Domingo",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
        }
    }
}

impl TryFrom<Vec<String>> for DayDefinition {
    type Error = ConfigError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayDefinition> for Vec<String> {
    fn from(value: DayDefinition) -> Self {
        value.names
    }
}

/// Moment keys that share one alias family and are filled in order.
///
/// With `["colacion1", "colacion2"]`, the first snack section takes
/// `colacion1` and the second takes `colacion2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepeatableFamily {
    slots: Vec<String>,
}

impl RepeatableFamily {
    pub fn new<I, S>(slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slots: slots.into_iter().map(Into::into).collect(),
        }
    }

    /// Slot keys in fill order.
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.iter().any(|slot| slot == key)
    }
}

/// Handling of ingredient lines that do not split into `name | qty | unit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientMode {
    /// Keep the whole line as the ingredient name with empty quantity/unit.
    #[default]
    Lenient,
    /// Drop the line and record a diagnostic.
    Strict,
}

/// Complete configuration consumed by parsing and distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuConfig {
    /// Moments in display and classification order.
    pub moments: Vec<MomentDefinition>,
    pub days: DayDefinition,
    pub repeatable_families: Vec<RepeatableFamily>,
    pub ingredient_mode: IngredientMode,
    /// Spaces per structural level (section=0, option=1, dish=2, ingredient=3).
    pub indent_width: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            moments: vec![
                MomentDefinition::new("desayuno", "Desayuno", ["desayuno"]),
                MomentDefinition::new(
                    "colacion1",
                    "Colación / Snack 1",
                    ["colación", "colacion", "snack"],
                ),
                MomentDefinition::new("comida", "Comida", ["comida"]),
                MomentDefinition::new(
                    "colacion2",
                    "Colación / Snack 2",
                    ["colación", "colacion", "snack"],
                ),
                MomentDefinition::new("cena", "Cena", ["cena"]),
            ],
            days: DayDefinition::default(),
            repeatable_families: vec![RepeatableFamily::new(["colacion1", "colacion2"])],
            ingredient_mode: IngredientMode::default(),
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl MenuConfig {
    /// Parses TOML overrides on top of [`MenuConfig::default`], then
    /// normalizes and validates.
    ///
    /// Omitted top-level fields keep their defaults.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.into_validated()
    }

    /// Reads and parses a TOML config file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Normalizes aliases and keys, then validates all invariants.
    pub fn into_validated(mut self) -> ConfigResult<Self> {
        for moment in &mut self.moments {
            moment.key = moment.key.trim().to_string();
            let mut seen = HashSet::new();
            moment.aliases = moment
                .aliases
                .iter()
                .map(|alias| alias.trim().to_lowercase())
                .filter(|alias| !alias.is_empty() && seen.insert(alias.clone()))
                .collect();
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks configuration invariants without modifying anything.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.indent_width == 0 {
            return Err(ConfigError::ZeroIndentWidth);
        }
        if self.moments.is_empty() {
            return Err(ConfigError::NoMoments);
        }

        let mut keys = HashSet::new();
        for moment in &self.moments {
            if moment.key.trim().is_empty() {
                return Err(ConfigError::EmptyMomentKey);
            }
            if !keys.insert(moment.key.as_str()) {
                return Err(ConfigError::DuplicateMomentKey(moment.key.clone()));
            }
            if moment.aliases.iter().all(|alias| alias.trim().is_empty()) {
                return Err(ConfigError::MissingAliases(moment.key.clone()));
            }
        }

        let mut family_members = HashSet::new();
        for family in &self.repeatable_families {
            if family.slots().len() < 2 {
                return Err(ConfigError::FamilyTooSmall(family.slots().to_vec()));
            }
            for slot in family.slots() {
                if !keys.contains(slot.as_str()) {
                    return Err(ConfigError::UnknownFamilySlot(slot.clone()));
                }
                if !family_members.insert(slot.as_str()) {
                    return Err(ConfigError::SlotInMultipleFamilies(slot.clone()));
                }
            }
        }

        Ok(())
    }

    /// Number of day columns; always [`GRID_DAYS`].
    pub fn grid_width(&self) -> usize {
        self.days.len()
    }

    /// Looks up one moment by key.
    pub fn moment(&self, key: &str) -> Option<&MomentDefinition> {
        self.moments.iter().find(|moment| moment.key == key)
    }

    /// Moment keys in configured order.
    pub fn moment_keys(&self) -> impl Iterator<Item = &str> {
        self.moments.iter().map(|moment| moment.key.as_str())
    }

    /// Returns the repeatable family that contains `key`, if any.
    pub fn family_of(&self, key: &str) -> Option<&RepeatableFamily> {
        self.repeatable_families
            .iter()
            .find(|family| family.contains(key))
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DayDefinition, IngredientMode, MenuConfig, RepeatableFamily};

    #[test]
    fn default_config_is_valid() {
        let config = MenuConfig::default();
        config.validate().expect("default config should validate");
        assert_eq!(config.grid_width(), 7);
        assert_eq!(
            config.moment_keys().collect::<Vec<_>>(),
            vec!["desayuno", "colacion1", "comida", "colacion2", "cena"]
        );
    }

    #[test]
    fn day_definition_rejects_wrong_count() {
        let err = DayDefinition::new(["Mon", "Tue"]).expect_err("two days must fail");
        assert!(matches!(err, ConfigError::InvalidDayCount(2)));
    }

    #[test]
    fn into_validated_lowercases_and_dedups_aliases() {
        let mut config = MenuConfig::default();
        config.moments[0].aliases = vec![" Desayuno ".into(), "DESAYUNO".into(), "  ".into()];
        let config = config.into_validated().expect("config should validate");
        assert_eq!(config.moments[0].aliases, vec!["desayuno".to_string()]);
    }

    #[test]
    fn validate_rejects_family_with_unknown_slot() {
        let mut config = MenuConfig::default();
        config.repeatable_families = vec![RepeatableFamily::new(["colacion1", "merienda"])];
        let err = config.validate().expect_err("unknown slot must fail");
        assert!(matches!(err, ConfigError::UnknownFamilySlot(key) if key == "merienda"));
    }

    #[test]
    fn validate_rejects_duplicate_keys_and_zero_indent() {
        let mut config = MenuConfig::default();
        config.moments[1].key = "desayuno".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateMomentKey(_))
        ));

        let mut config = MenuConfig::default();
        config.indent_width = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroIndentWidth)));
    }

    #[test]
    fn toml_overrides_keep_unspecified_defaults() {
        let config = MenuConfig::from_toml_str(
            r#"
ingredient_mode = "strict"
indent_width = 4
"#,
        )
        .expect("partial TOML should parse");
        assert_eq!(config.ingredient_mode, IngredientMode::Strict);
        assert_eq!(config.indent_width, 4);
        assert_eq!(config.moments.len(), 5);
        assert_eq!(config.days.names()[0], "Lunes");
    }
}
