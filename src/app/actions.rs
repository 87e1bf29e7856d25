// LogSieve - app/actions.rs
//
// Batch of settings actions requested up front (from the command line),
// applied to a freshly loaded document in a fixed order:
// disable-all, enables, disables, levels.

use crate::app::state::ViewerState;
use crate::core::model::Severity;

/// Settings changes to apply after a document is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsActions {
    pub disable_all: bool,
    pub enable: Vec<String>,
    pub disable: Vec<String>,
    pub levels: Vec<(String, Severity)>,
}

impl SettingsActions {
    pub fn is_empty(&self) -> bool {
        !self.disable_all
            && self.enable.is_empty()
            && self.disable.is_empty()
            && self.levels.is_empty()
    }

    /// Apply every action to `state`.
    ///
    /// Returns one warning per action naming a category that the loaded
    /// document does not contain; those actions change nothing.
    pub fn apply(&self, state: &mut ViewerState) -> Vec<String> {
        let mut warnings = Vec::new();
        let mut check = |state: &ViewerState, category: &str, action: &str| {
            let known = state.has_category(category);
            if !known {
                warnings.push(format!(
                    "--{action} {category}: no such category in this file"
                ));
            }
            known
        };

        if self.disable_all {
            state.disable_all();
        }
        for category in &self.enable {
            if check(state, category, "enable") {
                state.set_category_enabled(category, true);
            }
        }
        for category in &self.disable {
            if check(state, category, "disable") {
                state.set_category_enabled(category, false);
            }
        }
        for (category, level) in &self.levels {
            if check(state, category, "level") {
                state.set_category_level(category, *level);
            }
        }

        tracing::debug!(
            disable_all = self.disable_all,
            enabled = self.enable.len(),
            disabled = self.disable.len(),
            levels = self.levels.len(),
            unknown = warnings.len(),
            "Settings actions applied"
        );
        warnings
    }
}

/// Parse a `CATEGORY=LEVEL` argument. The level is case-insensitive.
pub fn parse_level_assignment(arg: &str) -> Result<(String, Severity), String> {
    let (category, level) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=LEVEL, got '{arg}'"))?;
    let category = category.trim();
    if category.is_empty() {
        return Err(format!("missing category name in '{arg}'"));
    }
    let level = level.parse::<Severity>()?;
    Ok((category.to_string(), level))
}
