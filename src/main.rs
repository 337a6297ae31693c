use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use u_bookscan::format::{parse_instance, write_schedule};
use u_bookscan::scheduler::{GreedyScheduler, ScheduleKpi, SchedulerConfig, SelectionKey};
use u_bookscan::validation::verify_schedule;

/// Library ranking used by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KeyArg {
    /// Highest total score first.
    Total,
    /// Highest score per signup day first.
    PerDay,
}

impl From<KeyArg> for SelectionKey {
    fn from(key: KeyArg) -> Self {
        match key {
            KeyArg::Total => SelectionKey::ByTotalScore,
            KeyArg::PerDay => SelectionKey::ByScorePerSignupDay,
        }
    }
}

/// Builds book scanning schedules and writes `<input>.out` next to each input.
#[derive(Parser, Debug)]
#[command(name = "u-bookscan", version, about)]
struct Args {
    /// Problem file to solve (repeatable)
    #[arg(short, long = "input", required = true)]
    inputs: Vec<PathBuf>,

    /// Library ranking
    #[arg(short, long, value_enum, default_value_t = KeyArg::Total)]
    key: KeyArg,

    /// Value libraries in parallel (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Verify each schedule before writing it
    #[arg(long)]
    check: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let scheduler = GreedyScheduler::new().with_config(
        SchedulerConfig::default()
            .with_selection_key(args.key.into())
            .with_parallel(args.parallel),
    );

    let mut failed = 0;
    for path in &args.inputs {
        let message = format!("Solving file at {}", path.display());
        let separator = "#".repeat(message.chars().count());
        println!("{separator}\n{message}\n{separator}\n");

        match solve_file(&scheduler, path, args.check) {
            Ok(kpi) => println!(
                "score {} / {} ({:.1}%), {} libraries, {} books\n",
                kpi.total_score,
                kpi.reachable_score,
                kpi.score_ratio * 100.0,
                kpi.libraries_signed_up,
                kpi.books_scanned
            ),
            Err(err) => {
                error!("{}: {err:#}", path.display());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} input file(s) failed", args.inputs.len());
    }
    Ok(())
}

fn solve_file(scheduler: &GreedyScheduler, path: &Path, check: bool) -> Result<ScheduleKpi> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let instance = parse_instance(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    let schedule = scheduler.solve(&instance)?;

    if check {
        if let Err(violations) = verify_schedule(&instance, &schedule) {
            let details: Vec<String> = violations.iter().map(ToString::to_string).collect();
            bail!("schedule failed verification: {}", details.join("; "));
        }
    }

    let mut out_path = path.as_os_str().to_owned();
    out_path.push(".out");
    let out_path = PathBuf::from(out_path);
    fs::write(&out_path, write_schedule(&schedule))
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    Ok(ScheduleKpi::calculate(&schedule, &instance))
}
