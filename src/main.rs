use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use liac_bot::core::serialization::{self, MoveReply, Snapshot};
use liac_bot::player::ai::AIConfig;
use liac_bot::player::{NegamaxAI, PlayerController, RandomAI};
use liac_bot::selfplay::{run_selfplay, SelfPlayConfig, Strategy};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "liac-bot", about = "Pawn/rook/bishop variant move picker")]
struct Cli {
    /// AI config (JSON). Missing file falls back to defaults
    #[arg(long, global = true, default_value = "ai_config.json")]
    config: PathBuf,

    /// -v = debug, -vv = trace (RUST_LOG takes precedence)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read a snapshot and print the chosen move
    Decide {
        /// Snapshot file; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = StrategyArg::Negamax)]
        strategy: StrategyArg,
        #[arg(long)]
        depth: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        /// Disable tie-break jitter
        #[arg(long)]
        no_jitter: bool,
    },
    /// Play negamax against random and print statistics
    Selfplay {
        #[arg(long, default_value_t = 10)]
        games: usize,
        #[arg(long, default_value_t = 200)]
        max_plies: usize,
        #[arg(long)]
        depth: Option<usize>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Negamax,
    Random,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ai_config = AIConfig::load_or_default(&cli.config);

    match cli.command {
        Command::Decide {
            input,
            strategy,
            depth,
            seed,
            no_jitter,
        } => {
            if let Some(depth) = depth {
                ai_config.search.depth = depth;
            }
            if seed.is_some() {
                ai_config.search.seed = seed;
            }
            if no_jitter {
                ai_config.search.jitter = 0.0;
            }
            decide(input, strategy, &ai_config)
        }
        Command::Selfplay {
            games,
            max_plies,
            depth,
            seed,
        } => {
            if let Some(depth) = depth {
                ai_config.search.depth = depth;
            }
            let config = SelfPlayConfig {
                num_games: games,
                max_plies,
                first: Strategy::Negamax,
                second: Strategy::Random,
                ai: ai_config,
                base_seed: seed,
            };
            let stats = run_selfplay(&config)?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(())
        }
    }
}

fn decide(
    input: Option<PathBuf>,
    strategy: StrategyArg,
    ai_config: &AIConfig,
) -> anyhow::Result<()> {
    let raw = match &input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading snapshot {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let snapshot: Snapshot = serde_json::from_str(&raw).context("parsing snapshot JSON")?;

    let controller: Box<dyn PlayerController> = match strategy {
        StrategyArg::Negamax => Box::new(NegamaxAI::from_config("negamax", ai_config)),
        StrategyArg::Random => match ai_config.search.seed {
            Some(seed) => Box::new(RandomAI::seeded("random", seed)),
            None => Box::new(RandomAI::new("random")),
        },
    };

    let mv = serialization::decide(&snapshot, controller.as_ref())?;
    tracing::info!(player = controller.name(), %mv, "move chosen");

    println!("{}", serde_json::to_string(&MoveReply::from(mv))?);
    Ok(())
}
