// LogSieve - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. Loading the log file and applying requested settings
// 4. Rendering the visible lines (or the category table) and optional export

pub use logsieve::app;
pub use logsieve::core;
pub use logsieve::platform;
pub use logsieve::ui;
pub use logsieve::util;

use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

/// LogSieve - view Unreal Engine style logs filtered by category and level.
///
/// Every category starts enabled at the most verbose level it contains.
/// Use the options below to narrow the output.
#[derive(Parser, Debug)]
#[command(name = "logsieve", version, about)]
struct Cli {
    /// Log file to open.
    file: PathBuf,

    /// Print the category table instead of the log lines.
    #[arg(long = "list-categories")]
    list_categories: bool,

    /// Only list categories whose name contains this text (case-insensitive).
    #[arg(long = "search", requires = "list_categories")]
    search: Option<String>,

    /// Start with every category disabled.
    #[arg(long = "disable-all")]
    disable_all: bool,

    /// Enable a category (repeatable).
    #[arg(short = 'e', long = "enable", value_name = "CATEGORY")]
    enable: Vec<String>,

    /// Disable a category (repeatable).
    #[arg(short = 'x', long = "disable", value_name = "CATEGORY")]
    disable: Vec<String>,

    /// Set a category's minimum level, e.g. LogNet=Warning (repeatable).
    #[arg(
        short = 'l',
        long = "level",
        value_name = "CATEGORY=LEVEL",
        value_parser = app::actions::parse_level_assignment
    )]
    levels: Vec<(String, core::model::Severity)>,

    /// Colour output: auto, always or never (overrides config).
    #[arg(long = "colour", alias = "color", value_name = "WHEN")]
    colour: Option<platform::config::ColourMode>,

    /// Prefix each output line with its index (overrides config).
    #[arg(short = 'n', long = "line-numbers", overrides_with = "no_line_numbers")]
    line_numbers: bool,

    /// Do not number output lines (overrides config).
    #[arg(long = "no-line-numbers", overrides_with = "line_numbers")]
    no_line_numbers: bool,

    /// Write the visible lines to a .csv or .json file.
    #[arg(long = "export", value_name = "PATH")]
    export: Option<PathBuf>,

    /// Read this config.toml instead of the platform default.
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

impl Cli {
    /// Line numbering: the last of --line-numbers / --no-line-numbers wins,
    /// otherwise the config value.
    fn line_numbers(&self, config_default: bool) -> bool {
        if self.line_numbers {
            true
        } else if self.no_line_numbers {
            false
        } else {
            config_default
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("  {e}");
            ExitCode::FAILURE
        }
    }
}

/// Load, filter and render. Read and export failures are returned after their
/// one-line summary is printed; a write failure on stdout is logged and
/// reported through the exit code.
fn run(cli: Cli) -> Result<ExitCode, util::error::LogSieveError> {
    // Config is loaded before logging so its level can take part.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_file());
    let (config, config_problems) = platform::config::load_config(&config_path);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::debug!(
        version = util::constants::APP_VERSION,
        config = %config_path.display(),
        "LogSieve starting"
    );
    for problem in config_problems {
        let problem = util::error::LogSieveError::from(problem);
        tracing::warn!(error = %problem, "Using default for invalid config");
    }

    let mut state = app::state::ViewerState::new();
    if let Err(e) = state.load_file(&cli.file, config.max_file_size) {
        let message = state
            .error
            .as_deref()
            .unwrap_or(util::constants::READ_FAILURE_MESSAGE);
        eprintln!("Error: {message}");
        return Err(e.into());
    }

    let actions = app::actions::SettingsActions {
        disable_all: cli.disable_all,
        enable: cli.enable.clone(),
        disable: cli.disable.clone(),
        levels: cli.levels.clone(),
    };
    if !actions.is_empty() {
        for warning in actions.apply(&mut state) {
            tracing::warn!("{}", warning);
        }
    }

    let stdout = std::io::stdout();
    let colour = cli
        .colour
        .unwrap_or(config.colour)
        .enabled(stdout.is_terminal());

    let rendered = if cli.list_categories {
        let categories = state.search_categories(cli.search.as_deref().unwrap_or(""));
        match state.registry() {
            Some(registry) => ui::console::render_category_table(
                &categories,
                registry,
                &state.settings,
                colour,
                stdout.lock(),
            ),
            None => Ok(()),
        }
    } else {
        let visible = state.visible();
        tracing::debug!(
            entries = visible.visible_entries,
            lines = visible.lines.len(),
            "Rendering visible lines"
        );
        let options = ui::console::RenderOptions {
            colour,
            line_numbers: cli.line_numbers(config.line_numbers),
        };
        ui::console::render_lines(&visible.lines, options, stdout.lock())
    };

    if let Err(e) = rendered {
        // A closed pipe (e.g. `| head`) is not a failure.
        if e.kind() != std::io::ErrorKind::BrokenPipe {
            tracing::error!(error = %e, "Failed to write output");
            return Ok(ExitCode::FAILURE);
        }
    }

    if let Some(ref path) = cli.export {
        if let Err(e) = state.export_visible(path) {
            eprintln!("Error: failed to export visible lines");
            return Err(e.into());
        }
    }

    Ok(ExitCode::SUCCESS)
}
