use std::io::{self, BufRead, Write};

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use twenty48_core::*;

mod input;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Side length of the board
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: Coord,

    /// Tiles placed on a fresh board
    #[arg(long, default_value_t = NUM_STARTING_TILES)]
    starting_tiles: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout belongs to the board
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .try_init()
        .map_err(anyhow::Error::msg)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let config = GameConfig::new(args.size, args.starting_tiles, TWO_CHANCE_PERCENT);
    let mut session = Session::new(config, SmallRng::seed_from_u64(seed));

    let mut stdout = io::stdout().lock();
    let mut lines = io::stdin().lock().lines();
    let mut redraw = true;
    loop {
        if redraw {
            render::draw(&mut stdout, session.grid(), session.is_over())?;
        }

        let intent = match lines.next() {
            Some(line) => input::decode_line(&line?),
            None => MoveIntent::Quit,
        };

        let outcome = session.step(intent)?;
        log::debug!("{:?} -> {:?}", intent, outcome);
        if outcome == StepOutcome::Quit {
            break;
        }

        redraw = outcome.has_update();
        if !redraw {
            render::prompt(&mut stdout, session.is_over())?;
        }
    }

    writeln!(stdout)?;
    Ok(())
}
