//! Mnemo CLI
//!
//! Command-line driver for the memory twin: replay SM-2 grade sequences,
//! sample forgetting and lag-effect curves, and run the reminder agent.

mod input;

use std::io;
use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use mnemo_core::decay::{days_until_retention, sample_gain, sample_retention, CurvePoint};
use mnemo_core::{
    ForgettingTrace, ReminderAgent, ReminderConfig, ReviewRecord, ReviewScheduler, ReviewSession,
    ReviewTiming,
};

/// Mnemo - Memory Twin CLI
#[derive(Parser)]
#[command(name = "mnemo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "CLI for the Mnemo memory twin")]
#[command(long_about = "Mnemo models how a single study item is remembered and forgotten.\n\nIt implements SM-2 review scheduling, exponential forgetting curves, and a threshold-triggered reminder agent.")]
struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a grade sequence against a new card and print every scheduling decision
    Replay {
        /// Grades 0-5, comma or space separated (names like "good" also work)
        #[arg(long)]
        grades: String,
        /// Day of the first review (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        start: Option<String>,
        /// Review each grade on the day the previous review scheduled
        #[arg(long)]
        on_schedule: bool,
        /// Scheduler config JSON file
        #[arg(long, env = "MNEMO_CONFIG")]
        config: Option<PathBuf>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show what each grade would do after replaying a history
    Preview {
        /// Grades already given, comma or space separated
        #[arg(long, default_value = "")]
        grades: String,
        /// Day of the first review (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        start: Option<String>,
        /// Scheduler config JSON file
        #[arg(long, env = "MNEMO_CONFIG")]
        config: Option<PathBuf>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Sample a decay curve
    Curve {
        #[command(subcommand)]
        curve: CurveCommand,
    },

    /// Simulate natural forgetting against the reminder agent
    Simulate {
        /// Number of simulated days
        #[arg(long, default_value = "60")]
        days: u32,
        /// Memory stability after first exposure (days)
        #[arg(long, default_value = "1.0")]
        initial_stability: f64,
        /// Stability multiplier per reminder
        #[arg(long, default_value = "2.0")]
        learning_rate: f64,
        /// Retention that triggers a reminder
        #[arg(long, default_value = "0.85")]
        threshold: f64,
        /// Print both traces as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum CurveCommand {
    /// Exponential retention e^(-t/S)
    Retention {
        /// Memory stability (days)
        #[arg(long)]
        stability: f64,
        #[arg(long, default_value = "30")]
        max_days: f64,
        #[arg(long, default_value = "31")]
        steps: usize,
        #[arg(long)]
        json: bool,
    },
    /// Lag-effect review gain r * e^(1 - r)
    Gain {
        /// Elapsed days at which a review gains the most
        #[arg(long)]
        optimal_interval: f64,
        #[arg(long, default_value = "25")]
        max_days: f64,
        #[arg(long, default_value = "26")]
        steps: usize,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    match cli.command {
        Commands::Replay {
            grades,
            start,
            on_schedule,
            config,
            json,
        } => run_replay(&grades, start, on_schedule, config, json),
        Commands::Preview {
            grades,
            start,
            config,
            json,
        } => run_preview(&grades, start, config, json),
        Commands::Curve { curve } => match curve {
            CurveCommand::Retention {
                stability,
                max_days,
                steps,
                json,
            } => run_retention_curve(stability, max_days, steps, json),
            CurveCommand::Gain {
                optimal_interval,
                max_days,
                steps,
                json,
            } => run_gain_curve(optimal_interval, max_days, steps, json),
        },
        Commands::Simulate {
            days,
            initial_stability,
            learning_rate,
            threshold,
            json,
        } => run_simulate(
            ReminderConfig {
                days,
                initial_stability,
                learning_rate,
                reminder_threshold: threshold,
            },
            json,
        ),
    }
}

/// Logs go to stderr so stdout stays clean for tables and JSON
fn init_logging(json: bool) {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(directives.as_deref());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.with_ansi(false).init();
    }
}

/// `RUST_LOG` directives win; WARN applies only when none are given
fn build_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Replay grades on a fresh card created on `start`
fn build_session<'a>(
    scheduler: &'a ReviewScheduler,
    grades: &str,
    start: Option<String>,
    on_schedule: bool,
) -> anyhow::Result<ReviewSession<'a>> {
    let start = match start {
        Some(raw) => input::parse_date(&raw)?,
        None => Local::now().date_naive(),
    };
    let grades = input::parse_grades(grades)?;
    let timing = if on_schedule {
        ReviewTiming::OnSchedule
    } else {
        ReviewTiming::Fixed(start)
    };

    let mut session = ReviewSession::starting_on(scheduler, start);
    session.replay(&grades, timing)?;
    info!(reviews = grades.len(), %start, "Replayed grade sequence");
    Ok(session)
}

/// Run replay command
fn run_replay(
    grades: &str,
    start: Option<String>,
    on_schedule: bool,
    config: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let scheduler = ReviewScheduler::with_config(input::load_scheduler_config(config.as_deref())?)?;
    let session = build_session(&scheduler, grades, start, on_schedule)?;

    if json {
        let out = serde_json::json!({
            "history": session.history(),
            "summary": session.summary(),
            "state": session.state(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", "=== Review History ===".cyan().bold());
    println!();
    print_history(session.history());

    let summary = session.summary();
    println!();
    println!("{}: {}", "Reviews".white().bold(), summary.reviews);
    println!("{}: {}", "Lapses".white().bold(), summary.lapses);
    println!("{}: {:.3}", "Ease Factor".white().bold(), summary.final_ease_factor);
    println!(
        "{}: {} ({} days)",
        "Next Review".white().bold(),
        summary.next_review_date,
        summary.final_interval_days
    );
    Ok(())
}

fn print_history(history: &[ReviewRecord]) {
    if history.is_empty() {
        println!("{}", "No reviews given.".dimmed());
        return;
    }

    println!(
        "  {:>3}  {:>5}  {:10}  {:>8}  {:>6}  {:10}",
        "#".bold(),
        "Grade".bold(),
        "Reviewed".bold(),
        "Interval".bold(),
        "Ease".bold(),
        "Next".bold()
    );
    for (i, record) in history.iter().enumerate() {
        let grade = record.grade.to_string();
        let grade = if record.grade.is_lapse() {
            grade.red()
        } else {
            grade.green()
        };
        println!(
            "  {:>3}  {:>5}  {:10}  {:>8}  {:>6.3}  {:10}",
            i + 1,
            grade,
            record.reviewed_on.to_string(),
            record.interval_days,
            record.ease_factor,
            record.next_review_date.to_string()
        );
    }
}

/// Run preview command
fn run_preview(
    grades: &str,
    start: Option<String>,
    config: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let scheduler = ReviewScheduler::with_config(input::load_scheduler_config(config.as_deref())?)?;
    let session = build_session(&scheduler, grades, start, true)?;
    let state = session.state();
    let preview = scheduler.preview(state, state.next_review_date);

    if json {
        let out = serde_json::json!({
            "state": state,
            "reviewOn": state.next_review_date,
            "outcomes": preview
                .iter()
                .map(|(grade, outcome)| serde_json::json!({ "grade": grade, "outcome": outcome }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "=== Grade Preview for".cyan().bold(),
        format!("{} ===", state.next_review_date).cyan().bold()
    );
    println!();
    for (grade, outcome) in preview.iter() {
        let label = format!("{} ({})", grade, grade.as_str());
        let label = if grade.is_lapse() { label.red() } else { label.green() };
        println!(
            "  {:16} interval {:>6} days  ease {:.3}  next {}",
            label, outcome.interval_days, outcome.ease_factor, outcome.next_review_date
        );
    }
    Ok(())
}

/// Run retention curve command
fn run_retention_curve(stability: f64, max_days: f64, steps: usize, json: bool) -> anyhow::Result<()> {
    let points = sample_retention(stability, max_days, steps)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    println!("{}", "=== Retention Curve ===".cyan().bold());
    println!("{}: {:.2} days", "Stability".white().bold(), stability);
    for threshold in [0.9, 0.5] {
        let t = days_until_retention(threshold, stability)?;
        println!(
            "{}: {:.2} days",
            format!("Falls to {:.0}%", threshold * 100.0).white().bold(),
            t
        );
    }
    println!();
    print_curve(&points);
    Ok(())
}

/// Run gain curve command
fn run_gain_curve(optimal_interval: f64, max_days: f64, steps: usize, json: bool) -> anyhow::Result<()> {
    let points = sample_gain(optimal_interval, max_days, steps)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    println!("{}", "=== Review Gain (Lag Effect) ===".cyan().bold());
    println!("{}: {:.2} days", "Optimal Interval".white().bold(), optimal_interval);
    println!();
    print_curve(&points);
    Ok(())
}

/// Print one bar per sample, scaled to a 0-1 value range
fn print_curve(points: &[CurvePoint]) {
    let bar_width: usize = 40;
    for point in points {
        let filled = ((point.value.clamp(0.0, 1.0)) * bar_width as f64).round() as usize;
        let empty = bar_width.saturating_sub(filled);
        let bar = format!("{}{}", "#".repeat(filled), "-".repeat(empty));
        let colored_bar = if point.value >= 0.7 {
            bar.green()
        } else if point.value >= 0.4 {
            bar.yellow()
        } else {
            bar.red()
        };
        println!(
            "  {:>7.2}d [{}] {:>6.1}%",
            point.elapsed_days,
            colored_bar,
            point.value * 100.0
        );
    }
}

/// Run reminder simulation command
fn run_simulate(config: ReminderConfig, json: bool) -> anyhow::Result<()> {
    let agent = ReminderAgent::with_config(config)?;
    let (natural, assisted) = agent.compare()?;

    if json {
        let out = serde_json::json!({
            "config": agent.config(),
            "natural": natural,
            "withAgent": assisted,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", "=== Reminder Agent Simulation ===".cyan().bold());
    println!();
    print_trace_summary("Natural Forgetting", &natural);
    print_trace_summary("With Memory Agent", &assisted);

    let days = assisted.reminder_days();
    if !days.is_empty() {
        let gaps: Vec<String> = days
            .windows(2)
            .map(|w| (w[1] - w[0]).to_string())
            .collect();
        println!();
        println!(
            "{}: {}",
            "Reminder Days".white().bold(),
            days.iter().map(u32::to_string).collect::<Vec<_>>().join(", ")
        );
        if !gaps.is_empty() {
            println!("{}: {}", "Gaps (days)".white().bold(), gaps.join(", "));
        }
    }
    Ok(())
}

fn print_trace_summary(label: &str, trace: &ForgettingTrace) {
    println!("{}", label.yellow().bold());
    println!("  {}: {}", "Reminders Sent".white(), trace.reminders_sent());
    println!(
        "  {}: {:.1}%",
        "Final Retention".white(),
        trace.final_retention() * 100.0
    );
}
