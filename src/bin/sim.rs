use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tileslide::{init_logging, play_out, GameEngine, GreedyPolicy, BOARD_SIZE};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut engine = GameEngine::<BOARD_SIZE>::new().map_err(|e| anyhow::anyhow!(e))?;
    engine.start(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let status = play_out(&mut engine, &mut GreedyPolicy::new(), &mut rng, None)
        .map_err(|e| anyhow::anyhow!(e))?;

    let result = json!({
        "seed": seed,
        "status": status,
        "score": engine.score(),
        "moves": engine.moves(),
        "highest": engine.board().highest_value(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
