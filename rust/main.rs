use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use wa_deadline::json::JSON;
use wa_deadline::logger;
use wa_deadline::scheduling::{DateRoll, FixedHolidays, HolidayProvider, YearlyCal};
use wa_deadline::{DeadlineCalculator, DeadlineConfig, DeadlineError, Timeline};

#[derive(Parser, Debug)]
#[command(
    name = "wa-deadline",
    version,
    about = "Washington real estate contract deadline calculator"
)]
struct Cli {
    /// Log calculation steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a deadline from a mutual acceptance date
    Compute(ComputeArgs),
    /// List the holidays of a year
    Holidays {
        #[arg(short, long)]
        year: i32,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a month or a whole year, marking weekends and holidays
    Calendar {
        #[arg(short, long)]
        year: i32,
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
    /// List the preset timelines
    Timelines,
}

#[derive(Args, Debug)]
struct ComputeArgs {
    /// Mutual acceptance date, YYYY-MM-DD
    #[arg(short, long)]
    date: String,

    /// Number of days in the period
    #[arg(long, conflicts_with = "timeline", required_unless_present = "timeline")]
    days: Option<String>,

    /// Preset timeline: inspection, financing or appraisal
    #[arg(short, long)]
    timeline: Option<Timeline>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Write a two line deadline document to this file
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::error!("{}", e);
        eprintln!("❌ {}", e);
        let exit_code = if e.is_invalid_input() { 2 } else { 1 };
        std::process::exit(exit_code);
    }
}

fn run(cli: Cli) -> Result<(), DeadlineError> {
    let config = match &cli.config {
        Some(path) => DeadlineConfig::from_file(path)?,
        None => DeadlineConfig::default(),
    };
    tracing::debug!("configuration: {:?}", config);

    match cli.command {
        Command::Compute(args) => compute(args, config),
        Command::Holidays { year, json } => holidays(year, json, &config),
        Command::Calendar { year, month } => calendar(year, month, &config),
        Command::Timelines => {
            for timeline in Timeline::ALL {
                match timeline.days() {
                    Some(days) => println!("{:<12} {:>3}  {}", timeline.name(), days, timeline.label()),
                    None => println!("{:<12} {:>3}  {}", timeline.name(), "-", timeline.label()),
                }
            }
            Ok(())
        }
    }
}

fn compute(args: ComputeArgs, config: DeadlineConfig) -> Result<(), DeadlineError> {
    let calculator = DeadlineCalculator::from_config(config)?;
    let days = match (args.days, args.timeline.and_then(|t| t.days())) {
        (Some(days), _) => Some(days),
        (None, preset) => preset.map(|d| d.to_string()),
    };
    let result = calculator.compute_deadline(Some(&args.date), days.as_deref())?;
    tracing::info!(
        deadline = %result.deadline(),
        rolled = result.rolled(),
        "deadline computed"
    );

    if args.json {
        println!("{}", result.to_json_pretty()?);
    } else {
        println!("Deadline ({}):", result.deadline().format("%-I:%M %p"));
        println!("{}", result.display_text());
    }

    if let Some(path) = args.export {
        let lines = result.document_lines(&calculator.config().document_title);
        std::fs::write(&path, lines.join("\n") + "\n")?;
        tracing::info!(path = %path.display(), "deadline document written");
    }
    Ok(())
}

fn holidays(year: i32, json: bool, config: &DeadlineConfig) -> Result<(), DeadlineError> {
    let provider = FixedHolidays::try_from_name(&config.calendar)?;
    let set = provider.holidays_for(year);
    if json {
        println!("{}", set.to_json_pretty()?);
        return Ok(());
    }
    for date in set.iter() {
        println!(
            "{}  {:<9}  {}",
            date.format("%Y-%m-%d"),
            date.format("%A"),
            provider.holiday_name(date).unwrap_or_default()
        );
    }
    Ok(())
}

fn calendar(year: i32, month: Option<u32>, config: &DeadlineConfig) -> Result<(), DeadlineError> {
    let cal = YearlyCal::new(FixedHolidays::try_from_name(&config.calendar)?);
    let output = match month {
        Some(m) => cal.print_month(year, m),
        None => cal.print_year(year),
    };
    match output {
        Some(text) => {
            print!("{}", text);
            Ok(())
        }
        None => Err(DeadlineError::Config {
            message: format!("year {} cannot be displayed", year),
        }),
    }
}
