mod commands;
mod output;

use clap::{Parser, Subcommand};

use commands::{BaseArgs, DrawArgs, PrizeArgs, SourceArgs};

#[derive(Parser)]
#[command(name = "fechamento", about = "Lotofácil 19 -> 15 -> 50 closing toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand 19 base numbers into the 50 tickets
    Generate {
        /// Base numbers, as separate arguments or one list ("01 02 03", "1,2,3")
        numbers: Vec<String>,
        /// Pick a random base selection instead
        #[arg(long, conflicts_with = "numbers")]
        random: bool,
        /// Seed for --random (a fresh one is picked and printed when omitted)
        #[arg(long, requires = "random")]
        seed: Option<u64>,
    },
    /// Score the closing against a draw and compute the net result
    Score {
        #[command(flatten)]
        base: BaseArgs,
        #[command(flatten)]
        draw: DrawArgs,
        #[command(flatten)]
        prizes: PrizeArgs,
    },
    /// Load the latest contest from saved upstream payloads
    Fetch {
        #[command(flatten)]
        sources: SourceArgs,
    },
    /// Render the printable report
    Report {
        #[command(flatten)]
        base: BaseArgs,
        #[command(flatten)]
        draw: DrawArgs,
        #[command(flatten)]
        prizes: PrizeArgs,
        /// Write the report here instead of stdout
        #[arg(long)]
        out: Option<std::path::PathBuf>,
        /// Lines per printed page
        #[arg(long, default_value = "60")]
        page_lines: usize,
    },
    /// Score the closing against many random draws
    Simulate {
        #[command(flatten)]
        base: BaseArgs,
        #[command(flatten)]
        prizes: PrizeArgs,
        /// Number of random draws
        #[arg(long, default_value = "10000")]
        draws: u32,
        /// Number of parallel workers (0 = auto)
        #[arg(long, default_value = "0")]
        workers: usize,
        /// Seed of the first draw
        #[arg(long, default_value = "0")]
        seed_start: u64,
        /// Seed step between draws
        #[arg(long, default_value = "1")]
        seed_stride: u64,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            numbers,
            random,
            seed,
        } => commands::generate::run(&numbers, random, seed),
        Commands::Score { base, draw, prizes } => commands::score::run(&base, &draw, &prizes),
        Commands::Fetch { sources } => commands::fetch::run(&sources),
        Commands::Report {
            base,
            draw,
            prizes,
            out,
            page_lines,
        } => commands::report::run(&base, &draw, &prizes, out.as_deref(), page_lines),
        Commands::Simulate {
            base,
            prizes,
            draws,
            workers,
            seed_start,
            seed_stride,
        } => commands::simulate::run(&base, &prizes, draws, workers, seed_start, seed_stride),
    }
}
