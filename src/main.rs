use std::io::{self, BufRead, Read, Write};

use anyhow::anyhow;
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tileslide::{
    init_logging, play_out, BoardSnapshot, Direction, GameEngine, GameStatus, GreedyPolicy,
    RandomPolicy, StandardBoard, BOARD_SIZE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyType {
    Random,
    Greedy,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Read a board snapshot (JSON) from stdin and print the board after one move.
    Shift {
        /// One of up, down, left, right.
        direction: Direction,
    },
    /// Let a policy play a whole game and print a JSON summary.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = PolicyType::Greedy)]
        policy: PolicyType,
        #[arg(long, help = "Stop after this many moves")]
        max_moves: Option<usize>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            run_interactive(make_rng(seed))?;
        }
        Commands::Shift { direction } => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            let snapshot = BoardSnapshot::from_json(&input)?;
            let board = StandardBoard::try_from(&snapshot).map_err(|e| anyhow!(e))?;
            let next = board.shift(direction);
            println!("{}", BoardSnapshot::from(&next).to_json()?);
        }
        Commands::Sim {
            seed,
            policy,
            max_moves,
        } => {
            let mut rng = make_rng(seed);
            let mut engine = GameEngine::<BOARD_SIZE>::new().map_err(|e| anyhow!(e))?;
            engine.start(&mut rng).map_err(|e| anyhow!(e))?;
            let status = match policy {
                PolicyType::Random => {
                    play_out(&mut engine, &mut RandomPolicy::new(), &mut rng, max_moves)
                }
                PolicyType::Greedy => {
                    play_out(&mut engine, &mut GreedyPolicy::new(), &mut rng, max_moves)
                }
            }
            .map_err(|e| anyhow!(e))?;
            let summary = serde_json::json!({
                "policy": format!("{:?}", policy).to_lowercase(),
                "status": status,
                "score": engine.score(),
                "moves": engine.moves(),
                "highest": engine.board().highest_value(),
            });
            println!("{}", serde_json::to_string(&summary)?);
        }
    }
    Ok(())
}

fn parse_key(line: &str) -> Option<Direction> {
    match line.trim() {
        "w" | "k" => Some(Direction::Up),
        "s" | "j" => Some(Direction::Down),
        "a" | "h" => Some(Direction::Left),
        "d" | "l" => Some(Direction::Right),
        other => other.parse().ok(),
    }
}

fn run_interactive(mut rng: SmallRng) -> anyhow::Result<()> {
    let mut engine = GameEngine::<BOARD_SIZE>::new().map_err(|e| anyhow!(e))?;
    engine.start(&mut rng).map_err(|e| anyhow!(e))?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("\n{}\nScore: {}", engine.board(), engine.score());
        match engine.status() {
            GameStatus::Won => {
                println!("You reached {}!", tileslide::WIN_VALUE);
                return Ok(());
            }
            GameStatus::Lost => {
                println!("No moves left. Final score: {}", engine.score());
                return Ok(());
            }
            GameStatus::InProgress => {}
        }
        print!("Move (w/a/s/d, q to quit): ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };
        if line.trim() == "q" {
            return Ok(());
        }
        let Some(direction) = parse_key(&line) else {
            println!("Unrecognised input: {}", line.trim());
            continue;
        };
        let turn = engine.play(direction, &mut rng).map_err(|e| anyhow!(e))?;
        if !turn.changed {
            println!("Nothing moves {}.", direction);
        }
    }
}
