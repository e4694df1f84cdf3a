//! designkit command-line interface.
//!
//! Thin wrapper around the library for exercising the table engine and the
//! theme store from a terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Render the first page of a JSON array of objects
//! designkit table people.json
//!
//! # Filter, sort by name descending, show page 2 of 5-row pages
//! designkit table people.json --filter ali --sort name --sort name --page 2 --page-size 5
//!
//! # Only some columns, in this order
//! designkit table people.json --columns name,age
//!
//! # Show, toggle, or set the persisted theme
//! designkit theme show
//! designkit theme toggle
//! designkit theme set dark
//! ```

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use designkit::domain::{Column, JsonRecord};
use designkit::table::TableView;
use designkit::theme::{DarkModeFlag, EnvColorScheme, ThemeMode, ThemeOptions, ThemeStore};
use designkit::ui::Renderer;
use designkit::{open_storage, Config, DesignKitError, Result};

const DEFAULT_WIDTH: usize = 80;

/// Table view engine and theme preference store
#[derive(Parser)]
#[command(name = "designkit")]
#[command(version)]
#[command(about = "Table view engine and theme preference store")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a page of a JSON dataset
    Table {
        /// JSON file holding an array of objects, each with an `id`
        file: PathBuf,

        /// Keep rows where any field contains this text (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,

        /// Click a column header; repeat to flip the direction
        #[arg(short, long = "sort", value_name = "KEY")]
        sort: Vec<String>,

        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Rows per page (overrides the config)
        #[arg(long)]
        page_size: Option<usize>,

        /// Comma-separated column keys (default: all fields of the first row)
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,
    },

    /// Theme preference management
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the resolved theme
    Show,
    /// Flip light/dark and persist
    Toggle,
    /// Set and persist a theme
    Set {
        /// `light` or `dark`
        mode: ThemeMode,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    match cli.verbose {
        0 => {}
        1 => config.trace_level = Some("debug".to_string()),
        _ => config.trace_level = Some("trace".to_string()),
    }
    designkit::observability::init_tracing(&config);
    tracing::debug!(config = ?config, "configuration loaded");

    let color = !cli.no_color && std::io::stdout().is_terminal();
    let width = terminal_width();

    match cli.command {
        Commands::Table {
            file,
            filter,
            sort,
            page,
            page_size,
            columns,
        } => {
            if let Some(page_size) = page_size {
                config.page_size = page_size;
            }
            let output = render_table_command(&config, &file, filter, &sort, page, columns, color, width)?;
            print!("{output}");
        }
        Commands::Theme { action } => {
            let mut store = open_theme_store(&config, config.theme_options());
            match action {
                ThemeAction::Show => {}
                ThemeAction::Toggle => {
                    store.toggle_theme();
                }
                ThemeAction::Set { mode } => {
                    store.set_theme(mode);
                }
            }
            let palette = config.palette(store.theme());
            let mut renderer = Renderer::new(&palette, width);
            if !color {
                renderer = renderer.plain();
            }
            println!(
                "{}",
                renderer.render_theme_status(store.theme(), store.source(), store.is_degraded())
            );
        }
    }

    Ok(())
}

fn open_theme_store(config: &Config, options: ThemeOptions) -> ThemeStore {
    ThemeStore::initialize(open_storage(config), &EnvColorScheme, DarkModeFlag::default(), options)
}

#[allow(clippy::too_many_arguments)]
fn render_table_command(
    config: &Config,
    file: &Path,
    filter: Option<String>,
    sort: &[String],
    page: usize,
    columns: Vec<String>,
    color: bool,
    width: usize,
) -> Result<String> {
    let contents = std::fs::read_to_string(file)?;
    let rows = JsonRecord::parse_array(&contents)?;

    let keys: Vec<String> = if columns.is_empty() {
        rows.first()
            .map(|row| row.keys().filter(|k| *k != "id").map(String::from).collect())
            .unwrap_or_default()
    } else {
        columns
    };
    let columns = keys.iter().map(|key| Column::field(key, title_case(key))).collect();

    let mut view = TableView::new(rows, columns, config.table_options()?)?;

    if let Some(filter) = filter {
        view.set_filter_text(filter);
    }
    for key in sort {
        if !view.toggle_sort(key) {
            return Err(DesignKitError::Config(format!("unknown sort column: {key}")));
        }
    }
    if page != 1 && !view.set_page(page) {
        return Err(DesignKitError::Config(format!(
            "page {page} is out of range (1..={})",
            view.total_pages().max(1)
        )));
    }

    // Read-only: rendering a table never writes the preference file.
    let mode = open_theme_store(config, ThemeOptions::default()).theme();
    let palette = config.palette(mode);
    let mut renderer = Renderer::new(&palette, width);
    if !color {
        renderer = renderer.plain();
    }

    Ok(renderer.render_table(&view.compute_viewmodel(config.page_siblings)))
}

fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|&w: &usize| w > 0)
        .unwrap_or(DEFAULT_WIDTH)
}

fn title_case(key: &str) -> String {
    key.split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
