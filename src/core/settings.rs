// LogSieve - core/settings.rs
//
// Per-category display settings and the default-selection rule.
// Core layer: pure data. Every update returns a new map; nothing is
// mutated in place.

use crate::core::model::{Severity, DEFAULT_SEVERITY};
use crate::core::registry::CategoryRegistry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Display setting for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySetting {
    /// Whether any line of this category is shown.
    pub enabled: bool,
    /// Least severe level still shown. Entries with a rank at or below this
    /// level's rank are visible.
    pub min_level: Severity,
}

/// Category -> setting for the current document.
///
/// Keys are exactly the categories of the document the settings were
/// derived from. Operations naming a category outside that set leave the
/// settings unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySettings(BTreeMap<String, CategorySetting>);

impl CategorySettings {
    pub fn get(&self, category: &str) -> Option<&CategorySetting> {
        self.0.get(category)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Settings in category order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategorySetting)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of enabled categories.
    pub fn enabled_count(&self) -> usize {
        self.0.values().filter(|s| s.enabled).count()
    }

    /// Flip `enabled` for one category.
    pub fn toggled(&self, category: &str) -> Self {
        self.updated(category, |s| CategorySetting {
            enabled: !s.enabled,
            ..s
        })
    }

    /// Set `enabled` for one category.
    pub fn with_enabled(&self, category: &str, enabled: bool) -> Self {
        self.updated(category, |s| CategorySetting { enabled, ..s })
    }

    /// Set the minimum level for one category.
    pub fn with_level(&self, category: &str, min_level: Severity) -> Self {
        self.updated(category, |s| CategorySetting { min_level, ..s })
    }

    /// Every category enabled, levels untouched.
    pub fn with_all_enabled(&self) -> Self {
        self.remapped(|_, s| CategorySetting { enabled: true, ..s })
    }

    /// Every category disabled, levels untouched.
    pub fn with_all_disabled(&self) -> Self {
        self.remapped(|_, s| CategorySetting { enabled: false, ..s })
    }

    /// Reset every `min_level` to the value in `defaults`, keeping each
    /// category's `enabled` flag. Categories missing from `defaults` fall
    /// back to [`DEFAULT_SEVERITY`].
    pub fn with_default_levels(&self, defaults: &CategorySettings) -> Self {
        self.remapped(|category, s| CategorySetting {
            min_level: defaults
                .get(category)
                .map(|d| d.min_level)
                .unwrap_or(DEFAULT_SEVERITY),
            ..s
        })
    }

    fn updated(&self, category: &str, f: impl FnOnce(CategorySetting) -> CategorySetting) -> Self {
        let mut next = self.0.clone();
        match next.get_mut(category) {
            Some(setting) => *setting = f(*setting),
            None => {
                tracing::debug!(category, "Ignoring settings update for unknown category");
            }
        }
        Self(next)
    }

    fn remapped(&self, f: impl Fn(&str, CategorySetting) -> CategorySetting) -> Self {
        Self(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), f(k.as_str(), *v)))
                .collect(),
        )
    }
}

impl FromIterator<(String, CategorySetting)> for CategorySettings {
    fn from_iter<I: IntoIterator<Item = (String, CategorySetting)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The initial minimum level for a category: the most verbose level that
/// actually occurs in it, or [`DEFAULT_SEVERITY`] if none were observed.
pub fn default_min_level(registry: &CategoryRegistry, category: &str) -> Severity {
    registry
        .levels(category)
        .and_then(|levels| levels.iter().max().copied())
        .unwrap_or(DEFAULT_SEVERITY)
}

/// Initial settings for a freshly loaded document: every category enabled
/// at its [`default_min_level`].
pub fn derive_default_settings(registry: &CategoryRegistry) -> CategorySettings {
    registry
        .categories()
        .map(|category| {
            (
                category.to_string(),
                CategorySetting {
                    enabled: true,
                    min_level: default_min_level(registry, category),
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "LogTemp: Error: Something broke!\n\
                          LogTemp: Warning: Be careful!\n\
                          LogTemp: Verbose: Details...\n\
                          LogTemp: Verbose: More details...\n\
                          LogTemp: Log: Just info\n\
                          LogStreaming: Display: Streaming started\n\
                          LogStreaming: Warning: Streaming warning\n\
                          LogStreaming: Display: Streaming running\n\
                          LogStreaming: Display: Streaming finished\n\
                          LogStreaming: Display: Streaming done";

    fn sample_defaults() -> CategorySettings {
        derive_default_settings(&CategoryRegistry::from_content(SAMPLE))
    }

    #[test]
    fn test_defaults_enable_every_category() {
        let settings = sample_defaults();
        assert_eq!(settings.len(), 2);
        assert!(settings.get("LogTemp").unwrap().enabled);
        assert!(settings.get("LogStreaming").unwrap().enabled);
    }

    #[test]
    fn test_default_level_is_most_verbose_present() {
        let settings = sample_defaults();
        assert_eq!(settings.get("LogTemp").unwrap().min_level, Severity::Verbose);
        assert_eq!(
            settings.get("LogStreaming").unwrap().min_level,
            Severity::Display
        );
    }

    #[test]
    fn test_default_level_single_severe_level() {
        let registry = CategoryRegistry::from_content("LogCrash: Fatal: boom");
        assert_eq!(default_min_level(&registry, "LogCrash"), Severity::Fatal);
    }

    #[test]
    fn test_default_level_for_unknown_category_is_log() {
        let registry = CategoryRegistry::from_content("LogA: Error: x");
        assert_eq!(default_min_level(&registry, "LogMissing"), Severity::Log);
    }

    #[test]
    fn test_empty_registry_gives_empty_settings() {
        let settings = derive_default_settings(&CategoryRegistry::default());
        assert!(settings.is_empty());
    }

    #[test]
    fn test_toggle_returns_new_map() {
        let original = sample_defaults();
        let toggled = original.toggled("LogTemp");
        assert!(original.get("LogTemp").unwrap().enabled);
        assert!(!toggled.get("LogTemp").unwrap().enabled);
        assert_eq!(toggled.toggled("LogTemp"), original);
    }

    #[test]
    fn test_enable_and_disable_all() {
        let original = sample_defaults();
        let disabled = original.with_all_disabled();
        assert_eq!(disabled.enabled_count(), 0);
        assert_eq!(
            disabled.get("LogTemp").unwrap().min_level,
            Severity::Verbose
        );
        let enabled = disabled.with_all_enabled();
        assert_eq!(enabled, original);
    }

    #[test]
    fn test_with_level_only_touches_one_category() {
        let original = sample_defaults();
        let changed = original.with_level("LogTemp", Severity::Error);
        assert_eq!(changed.get("LogTemp").unwrap().min_level, Severity::Error);
        assert_eq!(changed.get("LogStreaming"), original.get("LogStreaming"));
    }

    #[test]
    fn test_unknown_category_updates_are_noops() {
        let original = sample_defaults();
        assert_eq!(original.toggled("LogNope"), original);
        assert_eq!(original.with_level("LogNope", Severity::Fatal), original);
        assert_eq!(original.with_enabled("LogNope", false), original);
        assert!(!original.contains("LogNope"));
    }

    #[test]
    fn test_default_levels_revert_is_idempotent() {
        let defaults = sample_defaults();
        let edited = defaults
            .with_level("LogTemp", Severity::Fatal)
            .with_level("LogStreaming", Severity::VeryVerbose)
            .toggled("LogStreaming");

        let reverted = edited.with_default_levels(&defaults);
        assert_eq!(reverted.get("LogTemp").unwrap().min_level, Severity::Verbose);
        assert_eq!(
            reverted.get("LogStreaming").unwrap().min_level,
            Severity::Display
        );
        // enabled flags survive a level revert
        assert!(!reverted.get("LogStreaming").unwrap().enabled);
        assert_eq!(reverted.with_default_levels(&defaults), reverted);
    }

    #[test]
    fn test_settings_serialise_as_plain_map() {
        let settings = derive_default_settings(&CategoryRegistry::from_content("LogA: Error: x"));
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(json, r#"{"LogA":{"enabled":true,"min_level":"Error"}}"#);
    }
}
