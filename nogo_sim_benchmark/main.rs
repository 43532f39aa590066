use flexi_logger::Logger;
use instant::Instant;
use log::info;
use structopt::StructOpt;

use nogo_sim::{enum_map::EnumMap, prelude::*};
use nogo_sim_cli_utils::{Player, SearchConfig};

mod match_round;

use match_round::{match_round, RoundResult};

#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "NoGo MCTS agent benchmark")]
pub enum BenchmarkOpts {
    #[structopt(help = "Play games between two agents from the empty board, black moving first.")]
    Match {
        #[structopt(
            long,
            default_value = "",
            help = "Agent arguments for black, e.g. \"name=a mcts=T=500\""
        )]
        black: String,

        #[structopt(long, default_value = "", help = "Agent arguments for white")]
        white: String,

        #[structopt(long)]
        rounds: Option<u32>,

        #[structopt(long)]
        size: Option<u8>,

        #[structopt(long = "--print-boards", help = "Print the final board of every game")]
        print_boards: bool,
    },
    #[structopt(help = "Evaluate the first move on the empty board.")]
    Evaluate {
        #[structopt(long)]
        size: Option<u8>,

        #[structopt(long = "--json", help = "Print the search result as JSON")]
        json: bool,

        #[structopt(flatten)]
        search: SearchConfig,
    },
}

/// Agent arguments with the role forced to `role`.
fn agent_args(args: &str, role: Color) -> String {
    let role = match role {
        Color::Black => "black",
        Color::White => "white",
    };
    format!("{args} role={role}")
}

fn do_match(
    black: &str,
    white: &str,
    rounds: u32,
    size: u8,
    print_boards: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut players = ByColor::new(
        Player::from_args(&agent_args(black, Color::Black))?,
        Player::from_args(&agent_args(white, Color::White))?,
    );
    let board = Board::new(size)?;
    let t0 = Instant::now();
    let mut wins: EnumMap<Color, u32> = EnumMap::default();
    let mut total_moves = 0u64;
    for i in 0..rounds {
        let RoundResult {
            winner,
            moves,
            final_board,
            elapsed,
        } = match_round(board, &mut players);
        wins[winner] += 1;
        total_moves += moves as u64;
        println!(
            "- Round {:3} ... winner={winner} ({}) moves={moves:3} dt={:6.2}ms",
            i + 1,
            players[winner].name(),
            elapsed.as_secs_f64() * 1e3
        );
        if print_boards {
            println!("{final_board}");
        }
    }

    let dt = t0.elapsed();
    for color in Color::ALL {
        let n = wins[color];
        println!(
            "{color} {:>12}: {n:4} wins ({:.1}%)",
            players[color].name(),
            100.0 * (n as f64) / (rounds.max(1) as f64)
        );
    }
    info!(
        "match: rounds={rounds} size={size} avg_moves={:.1} dt={:.2}s",
        (total_moves as f64) / (rounds.max(1) as f64),
        dt.as_secs_f64()
    );
    Ok(())
}

fn evaluate(size: u8, json: bool, search: &SearchConfig) -> Result<(), Box<dyn std::error::Error>> {
    let board = Board::new(size)?;
    let config = search.agent_config("evaluate", Color::Black)?;
    let mut search = config.make_search();
    let t0 = Instant::now();
    let res = search.decide(&board, Color::Black, config.simulations);
    let dt_ns = t0.elapsed().as_nanos();
    if json {
        let value = serde_json::json!({
            "action": res.action,
            "root": res.root,
            "best": res.best,
            "counter": res.counter,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }
    match res.action {
        Some(action) => println!("{} | {} | {:?}", action.describe(size), res.best, res.counter),
        None => println!("no legal move"),
    }
    println!("{}", res.counter.summary(dt_ns));
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = Logger::try_with_env_or_str("info")?
        .format(flexi_logger::colored_default_format)
        .start()?;

    let opts = BenchmarkOpts::from_args();
    match opts {
        BenchmarkOpts::Match {
            black,
            white,
            rounds,
            size,
            print_boards,
        } => do_match(
            &black,
            &white,
            rounds.unwrap_or(10),
            size.unwrap_or(nogo_sim::board::STANDARD_SIZE),
            print_boards,
        )?,
        BenchmarkOpts::Evaluate { size, json, search } => {
            evaluate(size.unwrap_or(nogo_sim::board::STANDARD_SIZE), json, &search)?
        }
    };

    Ok(())
}
