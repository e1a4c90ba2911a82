//! Penny Drop Solver Binary
//!
//! Converges the value table for one or many configurations.
//!
//! - `solve`: one configuration, exporting every (state, action) value
//! - `grid`: every players x spots pair in parallel, reporting opening values

use clap::Parser;
use pennydrop::export::Export;
use pennydrop::export::Format;
use pennydrop::solver::Config;
use pennydrop::solver::Convergence;
use pennydrop::solver::Engine;
use pennydrop::*;
use rayon::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Command {
    #[command(about = "Solve one configuration and export its action values", alias = "s")]
    Solve {
        #[arg(long, default_value_t = 2)]
        players: usize,
        #[arg(long, default_value_t = 6)]
        spots: usize,
        #[arg(long, default_value_t = EPSILON)]
        epsilon: Utility,
        #[arg(long, default_value_t = MAX_SWEEPS)]
        max_sweeps: usize,
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
        #[arg(long, help = "write to this file instead of stdout")]
        output: Option<PathBuf>,
    },
    #[command(about = "Solve every players x spots pair in parallel", alias = "g")]
    Grid {
        #[arg(long, value_delimiter = ',', required = true)]
        players: Vec<usize>,
        #[arg(long, value_delimiter = ',', required = true)]
        spots: Vec<usize>,
        #[arg(long, default_value_t = EPSILON)]
        epsilon: Utility,
        #[arg(long, default_value_t = MAX_SWEEPS)]
        max_sweeps: usize,
    },
}

fn main() -> anyhow::Result<()> {
    log()?;
    match Command::parse() {
        Command::Solve {
            players,
            spots,
            epsilon,
            max_sweeps,
            format,
            output,
        } => solve(
            Config::new(players, spots)
                .with_epsilon(epsilon)
                .with_max_sweeps(max_sweeps),
            format,
            output,
        ),
        Command::Grid {
            players,
            spots,
            epsilon,
            max_sweeps,
        } => grid(
            players
                .iter()
                .flat_map(|p| spots.iter().map(move |s| Config::new(*p, *s)))
                .map(|c| c.with_epsilon(epsilon).with_max_sweeps(max_sweeps))
                .collect(),
        ),
    }
}

fn solve(config: Config, format: Format, output: Option<PathBuf>) -> anyhow::Result<()> {
    log::info!("{}", config);
    let (ref engine, convergence) = Engine::solve(&config)?;
    log::info!(
        "opening value {:+.6} after {} sweeps",
        engine.opening(),
        convergence.sweeps()
    );
    let export = Export::from(engine);
    match output {
        Some(ref path) => export.save(format, path),
        None => export.write(format, std::io::stdout().lock()),
    }
}

#[rustfmt::skip]
fn grid(configs: Vec<Config>) -> anyhow::Result<()> {
    log::info!("solving {} configurations", configs.len());
    let results = configs
        .par_iter()
        .map(|config| Engine::solve(config).map(|(engine, convergence)| (*config, engine.opening(), convergence)))
        .collect::<anyhow::Result<Vec<(Config, Utility, Convergence)>>>()?;
    println!("┌─────────┬───────┬────────────┬────────┐");
    println!("│ Players │ Spots │    Opening │ Sweeps │");
    println!("├─────────┼───────┼────────────┼────────┤");
    for (config, opening, convergence) in results {
        println!(
            "│ {:>7} │ {:>5} │ {:>+10.4} │ {:>6} │",
            config.players,
            config.spots,
            opening,
            convergence.sweeps(),
        );
    }
    println!("└─────────┴───────┴────────────┴────────┘");
    Ok(())
}
