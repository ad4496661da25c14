use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use weight_core::*;

#[derive(Parser)]
#[command(name = "wplan")]
#[command(about = "Weight change planner: day-by-day weight and BMI projection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use an alternate config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Default log level (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask for each value on the terminal (default)
    Interactive,

    /// Compute a plan from command-line values
    Plan {
        /// Start weight in kg
        #[arg(long, allow_hyphen_values = true)]
        start_weight: String,

        /// Target weight in kg
        #[arg(long, allow_hyphen_values = true)]
        end_weight: String,

        /// Height in cm (defaults to profile.height_cm from the config)
        #[arg(long, allow_hyphen_values = true)]
        height: Option<String>,

        /// male or female (defaults to profile.gender from the config)
        #[arg(long)]
        gender: Option<String>,

        /// Start date (DD-MM-YYYY)
        #[arg(long)]
        start_date: String,

        /// End date (DD-MM-YYYY)
        #[arg(long)]
        end_date: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Print the per-day timeline
        #[arg(long)]
        timeline: bool,

        /// Export the timeline as CSV (to PATH, or to the configured export dir)
        #[arg(long, value_name = "PATH", num_args = 0..=1)]
        csv: Option<Option<PathBuf>>,
    },

    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    match cli.log_level.as_deref() {
        Some(level) => weight_core::logging::init_with_level(level),
        None => weight_core::logging::init(),
    }

    let config_path = cli.config.unwrap_or_else(Config::default_config_path);
    let config = Config::load_or_default(&config_path)?;

    match cli.command {
        Some(Commands::Plan {
            start_weight,
            end_weight,
            height,
            gender,
            start_date,
            end_date,
            json,
            timeline,
            csv,
        }) => {
            let raw = RawInput {
                start_weight,
                end_weight,
                height_cm: height.unwrap_or_else(|| profile_height(&config)),
                gender: gender.unwrap_or_else(|| profile_gender(&config)),
                start_date,
                end_date,
            };
            cmd_plan(&raw, json, timeline, csv, &config)
        }
        Some(Commands::Config { init }) => cmd_config(&config_path, &config, init),
        Some(Commands::Interactive) | None => cmd_interactive(&config),
    }
}

fn profile_height(config: &Config) -> String {
    config
        .profile
        .height_cm
        .map(|h| h.to_string())
        .unwrap_or_default()
}

fn profile_gender(config: &Config) -> String {
    config
        .profile
        .gender
        .map(|g| g.to_string())
        .unwrap_or_default()
}

fn cmd_plan(
    raw: &RawInput,
    json: bool,
    timeline: bool,
    csv: Option<Option<PathBuf>>,
    config: &Config,
) -> Result<()> {
    let result = match raw.validate().and_then(|input| calculate(&input)) {
        Ok(result) => result,
        Err(e) => {
            tracing::debug!(kind = %e.kind, field = %e.field, "Rejected input");
            eprintln!("[ERROR] {}", e);
            std::process::exit(1);
        }
    };

    if json {
        let report = PlanReport::new(&result, &config.pace);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_result(&result, &config.pace);
        if timeline {
            display_timeline(&result);
        }
    }

    if let Some(path) = csv {
        let path = path.unwrap_or_else(|| default_export_path(config));
        let rows = export_timeline(&result, &path)?;
        let notice = format!("✓ Exported {} days to {}", rows, path.display());
        if json {
            eprintln!("{}", notice);
        } else {
            println!("\n{}", notice);
        }
    }

    Ok(())
}

fn cmd_interactive(config: &Config) -> Result<()> {
    println!("\n=== Weight Change Calculator ===\n");

    let outcome =
        collect_input(config).and_then(|input| calculate(&input).map_err(Error::from));
    match outcome {
        Ok(result) => display_result(&result, &config.pace),
        Err(Error::Validation(e)) => println!("\n[ERROR] {}", e),
        Err(e) => return Err(e),
    }

    Ok(())
}

/// Prompt for each value and validate it as soon as it is entered
fn collect_input(config: &Config) -> Result<WeightChangeInput> {
    let start_weight = validate_positive(prompt("Start weight (kg): ")?.as_str(), "start_weight")?;
    let end_weight = validate_positive(prompt("End weight (kg): ")?.as_str(), "end_weight")?;

    let mut height = prompt(&with_default("Height (cm)", config.profile.height_cm))?;
    if height.is_empty() {
        height = profile_height(config);
    }
    let height_cm = validate_positive(height.as_str(), "height_cm")?;

    let mut gender = prompt(&with_default("Gender (male/female)", config.profile.gender))?;
    if gender.is_empty() {
        gender = profile_gender(config);
    }
    let gender = validate_gender(gender.as_str())?;

    let start_date = parse_date(prompt("Start date (DD-MM-YYYY): ")?.as_str(), "start_date")?;
    let end_date = parse_date(prompt("End date (DD-MM-YYYY): ")?.as_str(), "end_date")?;
    validate_date_range(start_date, end_date)?;

    Ok(WeightChangeInput {
        start_weight,
        end_weight,
        height_cm,
        gender,
        start_date,
        end_date,
    })
}

fn with_default<T: std::fmt::Display>(label: &str, default: Option<T>) -> String {
    match default {
        Some(value) => format!("{} [{}]: ", label, value),
        None => format!("{}: ", label),
    }
}

/// Read one trimmed line from stdin (empty at end of input)
fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

fn cmd_config(path: &Path, config: &Config, init: bool) -> Result<()> {
    if init {
        if path.exists() {
            println!("Config already exists at {}", path.display());
        } else {
            config.save_to(path)?;
            println!("✓ Wrote default config to {}", path.display());
        }
    } else {
        println!("Config file: {}", path.display());
        if !path.exists() {
            println!("(not found, showing defaults)");
        }
    }

    println!();
    print!("{}", config.to_toml()?);
    Ok(())
}

// ============================================================================
// Output
// ============================================================================

/// JSON view of a result plus the labels the text report shows
#[derive(Serialize)]
struct PlanReport<'a> {
    #[serde(flatten)]
    result: &'a WeightChangeResult,
    trend: Trend,
    bmi_start_category: BmiCategory,
    bmi_end_category: BmiCategory,
    pace_warning: Option<PaceWarning>,
}

impl<'a> PlanReport<'a> {
    fn new(result: &'a WeightChangeResult, thresholds: &PaceThresholds) -> Self {
        Self {
            result,
            trend: result.trend(),
            bmi_start_category: BmiCategory::from_bmi(result.bmi_start()),
            bmi_end_category: BmiCategory::from_bmi(result.bmi_end()),
            pace_warning: PaceWarning::assess(result.daily_change(), thresholds),
        }
    }
}

fn display_result(result: &WeightChangeResult, thresholds: &PaceThresholds) {
    println!("\n--- Results ---");
    println!("Start weight : {:.1} kg", result.start_weight());
    println!("End weight   : {:.1} kg", result.end_weight());
    println!("Difference   : {:+.2} kg", result.weight_difference());
    println!(
        "Days         : {} ({} → {})",
        result.days(),
        format_date(result.start_date()),
        format_date(result.end_date())
    );
    println!("Daily change : {:+.4} kg/day", result.daily_change());
    println!(
        "Start BMI    : {:.2} ({})",
        result.bmi_start(),
        BmiCategory::from_bmi(result.bmi_start()).label()
    );
    println!(
        "End BMI      : {:.2} ({})",
        result.bmi_end(),
        BmiCategory::from_bmi(result.bmi_end()).label()
    );

    let marker = match result.trend() {
        Trend::Loss => "✅",
        Trend::Gain => "⚠️",
        Trend::Stable => "➖",
    };
    println!("Status       : {} {}", result.trend().label(), marker);

    if let Some(warning) = PaceWarning::assess(result.daily_change(), thresholds) {
        let level = match warning.severity() {
            Severity::Danger => "DANGER",
            Severity::Warning => "WARNING",
        };
        println!();
        println!("⚠ Health Pace Warning [{}]", level);
        for line in warning.message().lines() {
            println!("  {}", line);
        }
    }
}

fn display_timeline(result: &WeightChangeResult) {
    println!();
    println!("{:>4}  {:<10}  {:>11}  {:>6}  Category", "Day", "Date", "Weight (kg)", "BMI");
    for entry in result.timeline() {
        println!(
            "{:>4}  {:<10}  {:>11.2}  {:>6.2}  {}",
            entry.day,
            format_date(entry.date),
            entry.weight,
            entry.bmi,
            BmiCategory::from_bmi(entry.bmi).label()
        );
    }
}

// ============================================================================
// Export
// ============================================================================

fn default_export_path(config: &Config) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    config
        .export
        .dir
        .join(format!("weight_timeline_{}.csv", stamp))
}

fn export_timeline(result: &WeightChangeResult, path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    let rows = write_timeline_csv(result, &mut writer)?;
    writer.flush()?;

    tracing::info!("Exported timeline to {:?}", path);
    Ok(rows)
}
