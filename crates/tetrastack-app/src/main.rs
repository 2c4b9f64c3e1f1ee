//! Console Tetris Stack piece manager.
//!
//! Interactive menu loop over a bounded upcoming-piece queue and a reserve
//! stack: play pieces, reserve them, and swap pieces between the two.

use std::io;

use clap::Parser;
use tetrastack_game::Session;
use tetrastack_generator::PieceFactory;

use crate::app::App;

mod app;
mod menu;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed for the piece generator; drawn from entropy when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let factory = match args.seed {
        Some(seed) => PieceFactory::from_seed(seed),
        None => PieceFactory::from_entropy(),
    };
    log::info!(
        "piece generator seed: {} (pass --seed to replay this run)",
        factory.seed()
    );

    let mut app = App::new(Session::new(factory));
    app.run(io::stdin().lock(), &mut io::stdout())
}
