#![warn(clippy::pedantic)]

mod bench;
mod render;

use std::{fs, path::PathBuf, time::Instant};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use layer_solver::{LayerSolver, Phase, SolverConfig, scramble::scramble};
use log::{LevelFilter, info};
use owo_colors::OwoColorize;
use rubik_core::{Cube, format_sequence, parse_sequence};

/// Applies, scrambles and solves a 3x3x3 cube
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML file overriding the solver's stall bounds
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print color letters instead of colored blocks
    #[arg(long)]
    plain: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a move sequence such as "F R U R' U' F'" to a solved cube and
    /// print the result
    Apply { sequence: String },
    /// Scramble a solved cube with a move sequence, then solve it
    Solve {
        sequence: String,
        /// Print the solution after compressing it
        #[arg(long, short)]
        normalized: bool,
    },
    /// Generate a random scramble
    Scramble {
        #[arg(long, short, default_value_t = 20)]
        length: usize,
        #[arg(long, short)]
        seed: Option<u64>,
    },
    /// Solve many random scrambles and report averages
    Bench {
        #[arg(long, short = 'n', default_value_t = 100)]
        count: usize,
        #[arg(long, short, default_value_t = 20)]
        length: usize,
        #[arg(long, short)]
        seed: Option<u64>,
    },
}

fn load_config(path: Option<&PathBuf>) -> color_eyre::Result<SolverConfig> {
    let Some(path) = path else {
        return Ok(SolverConfig::default());
    };

    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read solver configuration file {path:?}"))?;

    toml::from_str(&text).wrap_err("Failed to parse solver configuration file")
}

fn seeded_rng(seed: Option<u64>) -> fastrand::Rng {
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    info!("Using seed {seed}");

    fastrand::Rng::with_seed(seed)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    pretty_env_logger::formatted_builder()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .parse_default_env()
        .init();

    let config = load_config(cli.config.as_ref())?;
    let colored = !cli.plain;

    match cli.command {
        Commands::Apply { sequence } => {
            let mut cube = Cube::solved();
            cube.apply_command_sequence(&sequence)?;

            print!("{}", render::render_net(&cube, colored));
        }
        Commands::Solve {
            sequence,
            normalized,
        } => {
            let scramble = parse_sequence(&sequence)?;
            let mut cube = Cube::solved();
            cube.rotate_all(&scramble);

            let start = Instant::now();
            let mut solver = LayerSolver::with_config(&mut cube, config);
            let outcome = solver.solve();
            let elapsed = start.elapsed();

            for phase in Phase::ALL {
                println!("{phase}: {}", solver.phase_rotations(phase));
            }
            println!(
                "Total: {} moves in {:.3}s",
                solver.total_rotations(),
                elapsed.as_secs_f64()
            );

            if let Err(e) = outcome {
                eprintln!("{}", e.red());
                print!("{}", render::render_net(solver.cube(), colored));
                return Err(e.into());
            }

            println!("{}", format_sequence(&solver.rotations(normalized)).green());
        }
        Commands::Scramble { length, seed } => {
            let moves = scramble(&mut seeded_rng(seed), length);

            let mut cube = Cube::solved();
            cube.rotate_all(&moves);

            println!("{}", format_sequence(&moves));
            print!("{}", render::render_net(&cube, colored));
        }
        Commands::Bench {
            count,
            length,
            seed,
        } => {
            let stats = bench::run(&mut seeded_rng(seed), count, length, &config)?;

            println!("Solves: {}", stats.solves);
            println!(
                "Average time: {:.3}ms",
                stats.average_time().as_secs_f64() * 1000.0
            );
            println!("Average moves: {:.1}", stats.average_moves());
            println!(
                "Average normalized moves: {:.1}",
                stats.average_normalized_moves()
            );
            for phase in Phase::ALL {
                println!("  {phase}: {:.1}", stats.average_phase_moves(phase));
            }
        }
    }

    Ok(())
}
