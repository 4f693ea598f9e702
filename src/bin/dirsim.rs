use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::info;

use dirsim::benchmark::{
    BenchmarkConfig, BenchmarkRunner, DEFAULT_REPETITIONS, DEFAULT_WORKING_SET_CAP, SizeTier,
    TierReport, print_summary_table, print_tier_report, reports_to_csv,
};

#[derive(Parser, Debug)]
#[command(
    name = "dirsim",
    version,
    about = "Time vector operations on a simulated directory of files"
)]
struct Args {
    /// Tier to run. Without it an interactive menu is shown.
    #[arg(short, long, value_enum)]
    tier: Option<TierArg>,

    /// Repetitions per amortized phase
    #[arg(short, long, default_value_t = DEFAULT_REPETITIONS)]
    repetitions: usize,

    /// Upper bound on the number of keys actually measured per tier
    #[arg(long, default_value_t = DEFAULT_WORKING_SET_CAP)]
    cap: usize,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Parent directory for the dir_* working directories
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Generate names in memory instead of as empty files
    #[arg(long)]
    in_memory: bool,

    /// Verify sorted order after the sort phase
    #[arg(short, long)]
    verify: bool,

    /// Write all collected results to this CSV file on exit
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TierArg {
    Small,
    Medium,
    Large,
    All,
}

impl TierArg {
    fn tiers(self) -> Vec<SizeTier> {
        match self {
            TierArg::Small => vec![SizeTier::Small],
            TierArg::Medium => vec![SizeTier::Medium],
            TierArg::Large => vec![SizeTier::Large],
            TierArg::All => SizeTier::ALL.to_vec(),
        }
    }
}

fn run_and_print(runner: &mut BenchmarkRunner, tiers: &[SizeTier]) -> Vec<TierReport> {
    let reports = runner.run_tiers(tiers);
    for report in &reports {
        print_tier_report(report);
    }
    if reports.len() < tiers.len() {
        eprintln!(
            "{} of {} experiment(s) aborted, see log for details",
            tiers.len() - reports.len(),
            tiers.len()
        );
    }
    reports
}

fn print_menu(cap: usize) {
    println!("MAIN MENU:");
    for (i, tier) in SizeTier::ALL.iter().enumerate() {
        println!(
            "{}. Run experiment with {} directory ({} files, {} measured)",
            i + 1,
            tier.label(),
            tier.nominal_count(),
            tier.working_size(cap)
        );
    }
    println!("4. Run all experiments");
    println!("0. Exit");
    print!("Choose an option: ");
}

fn menu(runner: &mut BenchmarkRunner, collected: &mut Vec<TierReport>) -> io::Result<()> {
    println!("{}", "=".repeat(50));
    println!("FILE SYSTEM SIMULATION WITH VECTORS");
    println!("{}", "=".repeat(50));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_menu(runner.config().working_set_cap);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let tiers = match line?.trim() {
            "1" => vec![SizeTier::Small],
            "2" => vec![SizeTier::Medium],
            "3" => vec![SizeTier::Large],
            "4" => SizeTier::ALL.to_vec(),
            "0" => {
                println!("Exiting...");
                return Ok(());
            }
            other => {
                println!("Invalid option {:?}, try again.", other);
                continue;
            }
        };
        collected.extend(run_and_print(runner, &tiers));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = BenchmarkConfig {
        repetitions: args.repetitions,
        working_set_cap: args.cap,
        seed: args.seed,
        data_dir: args.dir,
        materialize: !args.in_memory,
        verify: args.verify,
    };
    info!(?config, "configuration");

    let mut runner = BenchmarkRunner::new(config)?;

    let mut reports = Vec::new();
    match args.tier {
        Some(tier) => reports.extend(run_and_print(&mut runner, &tier.tiers())),
        None => menu(&mut runner, &mut reports)?,
    }

    if reports.len() > 1 {
        print_summary_table(&reports);
    }

    if let Some(path) = args.csv {
        std::fs::write(&path, reports_to_csv(&reports))
            .map_err(|e| format!("Failed to write {:?}: {}", path, e))?;
        info!(path = %path.display(), rows = reports.len(), "wrote CSV");
    }

    Ok(())
}
