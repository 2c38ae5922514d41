mod config;
mod display;
mod game_runner;
mod input;

use clap::Parser;
use common::games::SessionRng;
use common::log;
use common::logger;
use std::io;
use std::time::Duration;

use config::Config;

#[derive(Parser)]
#[command(name = "tictactoe_console")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Fixed RNG seed for the computer's tie-breaking moves.
    #[arg(long)]
    seed: Option<u64>,

    /// Alternate config file location.
    #[arg(long)]
    config: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = config::get_config_manager(args.config.as_deref());
    let config: Config = config_manager.load()?;
    if !config_manager.exists()? {
        // First run: write the defaults next to the binary.
        if let Err(e) = config_manager.save(&config) {
            log!("Could not write default config: {}", e);
        }
    }

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session RNG seed: {}", rng.seed());

    let computer_delay = Duration::from_millis(config.computer_delay_ms);
    let mut reader = io::stdin().lock();

    println!("Tic Tac Toe Game!");
    println!("Positions are numbered 1-9 left to right, top to bottom");
    if config.show_position_reference {
        display::print_position_reference();
    }
    println!("\nGame starts now!\n");

    loop {
        game_runner::run_game(&mut reader, &mut rng, computer_delay)?;

        if !input::confirm_replay(&mut reader)? {
            println!("Game over. Thanks for playing!");
            break;
        }
        println!();
    }

    Ok(())
}
