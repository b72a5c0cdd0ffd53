use clap::{Parser, Subcommand, ValueEnum};
use liftlog_core::export::{export_csv, export_json};
use liftlog_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "liftlog")]
#[command(about = "Training log validation, export and statistics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override the training log directory
    #[arg(long, global = true)]
    logs_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a log file or a directory of logs
    Validate {
        /// File or directory to validate (defaults to the log directory)
        path: Option<PathBuf>,

        /// Print every decoded log
        #[arg(long)]
        show: bool,
    },

    /// Export logs and standard series
    Export {
        #[arg(value_enum)]
        format: ExportFormat,

        /// Directory to write into; created if missing
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Emit metric records as JSON lines
    Project {
        /// JSONL file to append to (stdout if neither this nor config sets one)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Username tag for every record
        #[arg(long)]
        username: Option<String>,
    },

    /// Show the log recorded on a day (YYYY-MM-DD)
    Show { date: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        liftlog_core::logging::init_with_level("debug");
    } else {
        liftlog_core::logging::init();
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let vocabulary = config.vocabulary()?;
    let logs_dir = cli
        .logs_dir
        .unwrap_or_else(|| config.data.logs_dir.clone());

    match cli.command {
        Commands::Validate { path, show } => {
            cmd_validate(path.as_deref().unwrap_or(&logs_dir), show, &vocabulary)
        }
        Commands::Export { format, output } => {
            let output = output.unwrap_or_else(|| config.export.output_dir.clone());
            cmd_export(&logs_dir, &output, format, &vocabulary)
        }
        Commands::Project { output, username } => {
            let output = output.or_else(|| config.metrics.output.clone());
            let username = username.unwrap_or_else(|| config.metrics.username.clone());
            cmd_project(&logs_dir, output, &username, &config, &vocabulary)
        }
        Commands::Show { date } => cmd_show(&logs_dir, &date, &vocabulary),
    }
}

fn cmd_validate(path: &Path, show: bool, vocabulary: &Vocabulary) -> Result<()> {
    let logs = load_path(path, vocabulary)?;

    if show {
        for log in &logs {
            display_log(log);
        }
    }

    println!("✓ {} valid training logs in {}", logs.len(), path.display());
    Ok(())
}

fn cmd_export(
    logs_dir: &Path,
    output: &Path,
    format: ExportFormat,
    vocabulary: &Vocabulary,
) -> Result<()> {
    let logs = load_directory(logs_dir, vocabulary)?;

    let written = match format {
        ExportFormat::Csv => export_csv(output, &logs)?,
        ExportFormat::Json => export_json(output, &logs)?,
    };

    println!("✓ Exported {} logs to {} files", logs.len(), written.len());
    println!("  Output: {}", output.display());
    Ok(())
}

fn cmd_project(
    logs_dir: &Path,
    output: Option<PathBuf>,
    username: &str,
    config: &Config,
    vocabulary: &Vocabulary,
) -> Result<()> {
    let logs = load_directory(logs_dir, vocabulary)?;
    let records = project_statistics(&logs, &config.projection.exercises, username);

    match output {
        Some(path) => {
            JsonlSink::new(&path).append(&records)?;
            println!("✓ Wrote {} metric records", records.len());
            println!("  Sink: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            WriterSink::new(stdout.lock()).append(&records)?;
        }
    }

    tracing::info!("Projected {} records from {} logs", records.len(), logs.len());
    Ok(())
}

fn cmd_show(logs_dir: &Path, date: &str, vocabulary: &Vocabulary) -> Result<()> {
    let logs = load_directory(logs_dir, vocabulary)?;
    let index = LogIndex::new(&logs);

    display_log(index.require(date)?);
    Ok(())
}

fn display_log(log: &TrainingLog) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", log.timestamp.format("%Y-%m-%d %-I:%M%p"));
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!(
        "  Duration: {}h{:02}m",
        log.duration.num_hours(),
        log.duration.num_minutes() % 60
    );
    println!("  Bodyweight: {}", log.bodyweight);

    if let Some(ref event) = log.event {
        println!(
            "  Event: {} (total {}, wilks {:.2})",
            event.name, event.total, event.wilks
        );
    }

    println!();
    for exercise in &log.workout {
        print!(
            "  → {}: {} x {} @ {}",
            exercise.name, exercise.sets, exercise.reps, exercise.weight
        );
        match exercise.exertion {
            Some(ref exertion) => println!(" ({})", exertion),
            None => println!(),
        }
    }

    if !log.notes.is_empty() {
        println!();
        for note in &log.notes {
            println!("  ℹ {}", note);
        }
    }

    println!();
}
