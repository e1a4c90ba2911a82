//! Optimal value function for the multiplayer penny drop dice game.
//!
//! Player 0 minimizes its expected penalty while every other player
//! maximizes it. The crate packs game states into a dense address space,
//! models the stochastic outcome of each action, and runs in-place value
//! iteration over the packed table until it reaches a fixed point.
//!
//! # Module Structure
//!
//! - `game`: State, Action, Outcome, the address Codec and the transition Model
//! - `solver`: Config, Objective, Sweep diagnostics and the value iteration Engine
//! - `export`: per-(state, action) value rows in CSV, JSON or table form
pub mod export;
pub mod game;
pub mod solver;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Expected values and action values.
pub type Utility = f64;
/// Branch weights of a stochastic transition.
pub type Probability = f64;
/// Immediate reward attached to a single outcome.
pub type Reward = i32;
/// Dense index into the value table.
pub type Address = usize;

// ============================================================================
// VALUE ITERATION PARAMETERS
// ============================================================================
/// Total absolute change over one sweep at or below which the table is solved.
pub const EPSILON: Utility = 1e-6;
/// Sweeps allowed before a solve gives up and reports non-convergence.
pub const MAX_SWEEPS: usize = 1 << 16;
/// Tolerance for probability mass conservation checks.
pub const MASS_TOLERANCE: Probability = 1e-9;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
