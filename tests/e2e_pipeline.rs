// LogSieve - tests/e2e_pipeline.rs
//
// End-to-end tests for the read -> parse -> registry -> defaults -> filter
// -> export pipeline.
//
// These tests read a real fixture file from disk and write real export
// files into a temporary directory. No mocks.

use logsieve::app::actions::{parse_level_assignment, SettingsActions};
use logsieve::app::state::ViewerState;
use logsieve::core::filter::filter_entries;
use logsieve::core::model::{Severity, NO_LOG_CATEGORY};
use logsieve::core::parser::parse_content;
use logsieve::core::registry::CategoryRegistry;
use logsieve::core::settings::derive_default_settings;
use logsieve::platform::fs::read_log_file;
use logsieve::util::constants::{DEFAULT_MAX_FILE_SIZE, READ_FAILURE_MESSAGE};
use logsieve::util::error::ReadError;
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to an on-disk fixture file.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

const SAMPLE: &str = "unreal_editor_sample.log";

fn loaded_sample() -> ViewerState {
    let mut state = ViewerState::new();
    state
        .load_file(&fixture(SAMPLE), DEFAULT_MAX_FILE_SIZE)
        .expect("fixture should load");
    state
}

fn visible_texts(state: &ViewerState) -> Vec<String> {
    state.visible().lines.into_iter().map(|l| l.text).collect()
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn e2e_parses_fixture_into_entries() {
    let content = read_log_file(&fixture(SAMPLE), DEFAULT_MAX_FILE_SIZE).unwrap();
    let result = parse_content(&content);

    assert_eq!(result.lines_processed, 21);
    assert_eq!(result.continuation_lines, 5);
    assert_eq!(result.entries.len(), 16);

    // Banner line without a category.
    let first = &result.entries[0];
    assert_eq!(first.category, NO_LOG_CATEGORY);
    assert_eq!(first.level, Severity::Log);

    // "GetLastError=126" is not a level token.
    assert_eq!(result.entries[1].category, "LogWindows");
    assert_eq!(result.entries[1].level, Severity::Log);

    let settings_dump = result
        .entries
        .iter()
        .find(|e| e.category == "LogConsoleResponse")
        .unwrap();
    assert_eq!(settings_dump.multiline.len(), 3);
    assert!(settings_dump.multiline[0].starts_with("- Resolution"));

    let error = result
        .entries
        .iter()
        .find(|e| e.level == Severity::Error)
        .unwrap();
    assert_eq!(error.category, "LogTemp");
    assert_eq!(error.multiline.len(), 2);

    let rhi = result
        .entries
        .iter()
        .find(|e| e.category == "LogRHI")
        .unwrap();
    assert_eq!(rhi.level, Severity::VeryVerbose);
}

#[test]
fn e2e_every_physical_line_is_accounted_for() {
    let content = read_log_file(&fixture(SAMPLE), DEFAULT_MAX_FILE_SIZE).unwrap();
    let result = parse_content(&content);
    let total: usize = result.entries.iter().map(|e| e.physical_lines()).sum();
    assert_eq!(total, content.lines().count());
}

// =============================================================================
// Registry and defaults
// =============================================================================

#[test]
fn e2e_registry_lists_sorted_categories() {
    let content = read_log_file(&fixture(SAMPLE), DEFAULT_MAX_FILE_SIZE).unwrap();
    let registry = CategoryRegistry::from_content(&content);
    let categories: Vec<&str> = registry.categories().collect();

    assert_eq!(
        categories,
        vec![
            "LogConfig",
            "LogConsoleResponse",
            "LogDirectoryWatcher",
            "LogExit",
            "LogInit",
            "LogRHI",
            "LogStreaming",
            "LogTemp",
            "LogWindows",
            "NoLogCategory",
            "SourceControl",
        ]
    );
    assert!(registry.is_level_present("LogTemp", Severity::Verbose));
    assert!(!registry.is_level_present("LogTemp", Severity::Warning));
}

#[test]
fn e2e_defaults_use_most_verbose_observed_level() {
    let content = read_log_file(&fixture(SAMPLE), DEFAULT_MAX_FILE_SIZE).unwrap();
    let registry = CategoryRegistry::from_content(&content);
    let defaults = derive_default_settings(&registry);

    assert_eq!(defaults.len(), registry.len());
    assert_eq!(defaults.enabled_count(), registry.len());
    let level = |c: &str| defaults.get(c).unwrap().min_level;
    assert_eq!(level("LogTemp"), Severity::Verbose);
    assert_eq!(level("LogStreaming"), Severity::Display);
    assert_eq!(level("LogRHI"), Severity::VeryVerbose);
    assert_eq!(level("LogExit"), Severity::Fatal);
    assert_eq!(level("LogWindows"), Severity::Log);
    assert_eq!(level(NO_LOG_CATEGORY), Severity::Log);
}

#[test]
fn e2e_default_settings_show_the_whole_document() {
    let content = read_log_file(&fixture(SAMPLE), DEFAULT_MAX_FILE_SIZE).unwrap();
    let result = parse_content(&content);
    let registry = CategoryRegistry::from_entries(&result.entries);
    let filtered = filter_entries(&result.entries, &derive_default_settings(&registry));

    let texts: Vec<&str> = filtered.lines.iter().map(|l| l.text.as_str()).collect();
    let original: Vec<&str> = content.lines().collect();
    assert_eq!(texts, original);
    assert_eq!(filtered.visible_entries, result.entries.len());
}

// =============================================================================
// Viewer actions
// =============================================================================

#[test]
fn e2e_raising_min_level_hides_verbose_lines() {
    let mut state = loaded_sample();
    state.set_category_level("LogTemp", Severity::Error);

    let texts = visible_texts(&state);
    assert_eq!(texts.len(), 21 - 2);
    assert!(!texts.iter().any(|t| t.contains("LogTemp: Verbose:")));
    assert!(!texts.iter().any(|t| t.contains("LogTemp: Log:")));

    // The error keeps its stack trace, in order, right after it.
    let idx = texts
        .iter()
        .position(|t| t.contains("LogTemp: Error:"))
        .unwrap();
    assert_eq!(texts[idx + 1].trim(), "at USampleComponent::TickComponent");
    assert_eq!(texts[idx + 2].trim(), "at AActor::Tick");
}

#[test]
fn e2e_continuation_lines_inherit_parent_level() {
    let state = loaded_sample();
    let lines = state.visible().lines;
    let idx = lines
        .iter()
        .position(|l| l.text.contains("User settings details"))
        .unwrap();
    for line in &lines[idx..idx + 4] {
        assert_eq!(line.level, Severity::Log);
    }
}

#[test]
fn e2e_disable_all_then_enable_one() {
    let mut state = loaded_sample();
    state.disable_all();
    assert!(state.visible().lines.is_empty());

    state.set_category_enabled("LogExit", true);
    let texts = visible_texts(&state);
    assert_eq!(texts.len(), 1);
    assert!(texts[0].ends_with("LogExit: Fatal: Assertion failed: Ptr != nullptr"));
}

#[test]
fn e2e_toggle_twice_restores_output() {
    let mut state = loaded_sample();
    let before = state.visible();
    state.toggle_category("LogStreaming");
    assert_eq!(state.visible().lines.len(), before.lines.len() - 2);
    state.toggle_category("LogStreaming");
    assert_eq!(state.visible(), before);
}

#[test]
fn e2e_revert_levels_keeps_enabled_flags() {
    let mut state = loaded_sample();
    state.set_category_level("LogTemp", Severity::Fatal);
    state.set_category_level("LogRHI", Severity::Error);
    state.set_category_enabled("LogWindows", false);

    state.revert_levels();

    assert_eq!(
        state.settings.get("LogTemp").unwrap().min_level,
        Severity::Verbose
    );
    assert_eq!(
        state.settings.get("LogRHI").unwrap().min_level,
        Severity::VeryVerbose
    );
    assert!(!state.settings.get("LogWindows").unwrap().enabled);
    assert_eq!(visible_texts(&state).len(), 21 - 2);
}

#[test]
fn e2e_search_is_case_insensitive_substring() {
    let state = loaded_sample();
    let hits = state.search_categories("log");
    assert_eq!(hits.len(), 10);
    assert!(hits.contains(&NO_LOG_CATEGORY));
    assert!(!hits.contains(&"SourceControl"));

    assert_eq!(state.search_categories("STREAM"), vec!["LogStreaming"]);
    assert_eq!(state.search_categories("").len(), 11);
}

#[test]
fn e2e_command_line_actions_apply_in_order() {
    let mut state = loaded_sample();
    let actions = SettingsActions {
        disable_all: true,
        enable: vec!["LogTemp".to_string(), "LogNope".to_string()],
        disable: vec![],
        levels: vec![parse_level_assignment("LogTemp=error").unwrap()],
    };

    let warnings = actions.apply(&mut state);
    assert_eq!(
        warnings,
        vec!["--enable LogNope: no such category in this file".to_string()]
    );

    let texts = visible_texts(&state);
    assert_eq!(texts.len(), 3);
    assert!(texts[0].contains("LogTemp: Error: Something broke!"));
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn e2e_exports_visible_lines_as_json() {
    let mut state = loaded_sample();
    state.disable_all();
    state.set_category_enabled("LogStreaming", true);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("visible.json");
    let count = state.export_visible(&path).unwrap();
    assert_eq!(count, 2);

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["level"], "Warning");
    assert_eq!(rows[1]["level"], "Display");
    assert!(rows[1]["text"]
        .as_str()
        .unwrap()
        .ends_with("Package /Game/Maps/Entry loaded"));
}

#[test]
fn e2e_exports_visible_lines_as_csv() {
    let mut state = loaded_sample();
    state.disable_all();
    state.set_category_enabled("LogExit", true);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("visible.CSV");
    assert_eq!(state.export_visible(&path).unwrap(), 1);

    let written = fs::read_to_string(&path).unwrap();
    let rows: Vec<&str> = written.lines().collect();
    assert_eq!(rows[0], "level,text");
    assert!(rows[1].starts_with("Fatal,"));
    assert_eq!(rows.len(), 2);
}

#[test]
fn e2e_export_rejects_unknown_extension() {
    let state = loaded_sample();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("visible.txt");
    assert!(state.export_visible(&path).is_err());
    assert!(!path.exists());
}

// =============================================================================
// Read failures
// =============================================================================

#[test]
fn e2e_missing_file_clears_state_and_reports() {
    let mut state = loaded_sample();
    let err = state
        .load_file(&fixture("does_not_exist.log"), DEFAULT_MAX_FILE_SIZE)
        .unwrap_err();

    assert!(matches!(err, ReadError::Io { .. }));
    assert_eq!(state.error.as_deref(), Some(READ_FAILURE_MESSAGE));
    assert!(state.document.is_none());
    assert!(state.settings.is_empty());
    assert!(state.visible().lines.is_empty());
}

#[test]
fn e2e_oversized_file_is_rejected() {
    let mut state = ViewerState::new();
    let err = state.load_file(&fixture(SAMPLE), 64).unwrap_err();
    assert!(matches!(err, ReadError::FileTooLarge { max_size: 64, .. }));
    assert_eq!(state.error.as_deref(), Some(READ_FAILURE_MESSAGE));
}

#[test]
fn e2e_reloading_replaces_previous_document() {
    let mut state = loaded_sample();
    state.set_category_enabled("LogTemp", false);

    let dir = tempfile::tempdir().unwrap();
    let other = dir.path().join("other.log");
    fs::write(&other, "LogNet: Warning: timeout\r\nLogNet: Log: retry\r\n").unwrap();
    state.load_file(&other, DEFAULT_MAX_FILE_SIZE).unwrap();

    // CRLF line endings are kept in the raw text and add no category.
    assert_eq!(state.categories(), vec!["LogNet"]);
    assert_eq!(
        visible_texts(&state),
        vec!["LogNet: Warning: timeout\r", "LogNet: Log: retry\r"]
    );
}
