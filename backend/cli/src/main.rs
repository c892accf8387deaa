mod commands;
mod settings;
mod terminal_output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use cronlens_config::{config_dir, config_file_path, load_and_prepare, MAX_PREVIEW_COUNT};
use cronlens_core::FieldKind;
use cronlens_logging::init_logger;
use cronlens_scheduler::CronBuilder;

use settings::Settings;
use terminal_output::{supports_color, Styler};

#[derive(Parser)]
#[command(name = "cronlens")]
#[command(about = "cronlens — validate, explain and preview cron expressions")]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.cronlens/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reference instant for next-run previews (YYYY-MM-DDTHH:MM:SS or RFC 3339)
    #[arg(long, global = true)]
    at: Option<String>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check an expression and show its summary and next runs
    Validate {
        /// 5 or 6 fields; quote it or pass the fields separately
        #[arg(required = true, num_args = 1..)]
        expression: Vec<String>,
    },
    /// Describe an expression in plain English, field by field
    Explain {
        #[arg(required = true, num_args = 1..)]
        expression: Vec<String>,
    },
    /// List the next matching times
    Preview {
        #[arg(required = true, num_args = 1..)]
        expression: Vec<String>,
        /// Number of runs, 1 to 100 (default from config)
        #[arg(
            short,
            long,
            value_parser = clap::value_parser!(u16).range(1..=MAX_PREVIEW_COUNT as i64)
        )]
        count: Option<u16>,
    },
    /// List built-in preset expressions
    Presets,
    /// Compose an expression from individual fields
    Build {
        #[arg(long)]
        second: Option<String>,
        #[arg(long)]
        minute: Option<String>,
        #[arg(long)]
        hour: Option<String>,
        #[arg(long)]
        day_of_month: Option<String>,
        #[arg(long)]
        month: Option<String>,
        #[arg(long)]
        day_of_week: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", Styler::new(supports_color()).error(&format!("{e:#}")));
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| config_file_path(&config_dir()));
    let prepared = load_and_prepare(&path).await?;
    let config = prepared.config;

    let log_dir = config.log_dir().map(Path::new);
    if let Err(e) = init_logger(config.log_level(), log_dir) {
        warn!(error = %e, "File logging disabled");
    }
    debug!(config = %path.display(), "Configuration loaded");
    for warning in &prepared.warnings {
        warn!(path = %warning.path, message = %warning.message, "Config warning");
    }

    let settings = Settings::resolve(&config, cli.at.as_deref(), cli.json)?;
    let styler = Styler::new(settings.color);

    let output = match cli.command {
        Commands::Validate { expression } => {
            commands::validate(&expression.join(" "), &settings, &styler)?
        }
        Commands::Explain { expression } => {
            commands::explain(&expression.join(" "), &settings, &styler)?
        }
        Commands::Preview { expression, count } => {
            let count = count.map_or(settings.preview_count, usize::from);
            commands::preview(&expression.join(" "), count, &settings, &styler)?
        }
        Commands::Presets => commands::presets(&settings, &styler)?,
        Commands::Build {
            second,
            minute,
            hour,
            day_of_month,
            month,
            day_of_week,
        } => {
            let mut builder = CronBuilder::new();
            for (kind, token) in [
                (FieldKind::Second, second),
                (FieldKind::Minute, minute),
                (FieldKind::Hour, hour),
                (FieldKind::DayOfMonth, day_of_month),
                (FieldKind::Month, month),
                (FieldKind::DayOfWeek, day_of_week),
            ] {
                if let Some(token) = token {
                    builder = builder.set(kind, token);
                }
            }
            commands::build(&builder, &settings, &styler)?
        }
    };

    println!("{}", output.text);
    Ok(if output.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
