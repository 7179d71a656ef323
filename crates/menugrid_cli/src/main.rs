//! Command-line front end for the menu grid core.
//!
//! # Responsibility
//! - Read a menu text file, parse it into a weekly grid and print it.
//! - Apply optional in-row swaps before printing.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use menugrid_core::{
    init_logging, IngredientMode, MenuConfig, MenuPlanner, ParseReport, WeeklyGrid,
};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Command-line arguments for `menugrid`.
#[derive(Parser, Debug)]
#[command(name = "menugrid")]
#[command(about = "Turn an indented weekly menu into a 7-day grid")]
#[command(version)]
struct Args {
    /// Menu text file (use `-` for stdin).
    menu: PathBuf,

    /// TOML file overriding moments, days or parsing options.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Drop ingredient lines that are not `name | qty | unit`.
    #[arg(long)]
    strict_ingredients: bool,

    /// Swap two days of one moment, as `DAY_A:MOMENT:DAY_B` (0-based days).
    #[arg(short, long = "swap", value_name = "DAY_A:MOMENT:DAY_B")]
    swaps: Vec<SwapRequest>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level for file logging; requires `--log-dir`.
    #[arg(long, requires = "log_dir")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files.
    #[arg(long)]
    log_dir: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SwapRequest {
    day_a: usize,
    moment: String,
    day_b: usize,
}

impl FromStr for SwapRequest {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = value.split(':').map(str::trim).collect();
        let [day_a, moment, day_b] = parts.as_slice() else {
            return Err(format!("expected DAY_A:MOMENT:DAY_B, got `{value}`"));
        };
        let parse_day = |raw: &str| {
            raw.parse::<usize>()
                .map_err(|_| format!("`{raw}` is not a day index"))
        };
        if moment.is_empty() {
            return Err(format!("missing moment key in `{value}`"));
        }
        Ok(Self {
            day_a: parse_day(*day_a)?,
            moment: (*moment).to_string(),
            day_b: parse_day(*day_b)?,
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args
            .log_level
            .as_deref()
            .unwrap_or(menugrid_core::default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    let mut config = match &args.config {
        Some(path) => MenuConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => MenuConfig::default(),
    };
    if args.strict_ingredients {
        config.ingredient_mode = IngredientMode::Strict;
    }
    let planner = MenuPlanner::new(config).context("invalid configuration")?;

    let text = read_menu(&args.menu)?;
    if text.trim().is_empty() {
        bail!("menu text is empty");
    }

    let ParseReport {
        mut grid,
        diagnostics,
        ..
    } = planner.parse_with_report(&text);
    for diagnostic in &diagnostics {
        eprintln!("warning: {diagnostic}");
    }

    for request in &args.swaps {
        planner
            .swap(&mut grid, request.day_a, &request.moment, request.day_b)
            .with_context(|| {
                format!(
                    "cannot swap {}:{}:{}",
                    request.day_a, request.moment, request.day_b
                )
            })?;
    }

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&grid)?),
        OutputFormat::Text => print!("{}", render_text(&grid, planner.config())),
    }
    Ok(())
}

fn read_menu(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        return std::io::read_to_string(std::io::stdin()).context("failed to read stdin");
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Plain listing: one block per day, one line per moment.
fn render_text(grid: &WeeklyGrid, config: &MenuConfig) -> String {
    let mut out = String::new();
    for (index, day_name) in grid.days().iter().enumerate() {
        out.push_str(day_name);
        out.push('\n');
        let Ok(cells) = grid.day(index) else {
            continue;
        };
        for (key, cell) in cells {
            let label = config
                .moment(key)
                .map(|moment| moment.label.as_str())
                .unwrap_or(key);
            match cell {
                Some(option) => {
                    out.push_str(&format!("  {label}: {}\n", option.title));
                    for dish in &option.dishes {
                        out.push_str(&format!("    - {}\n", dish.name));
                        for ingredient in &dish.ingredients {
                            out.push_str(&format!("        {}\n", ingredient.display_line()));
                        }
                    }
                }
                None => out.push_str(&format!("  {label}: -\n")),
            }
        }
    }
    out
}
