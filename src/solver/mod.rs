//! Value iteration over the packed state table.
//!
//! - `Config`: validated solve parameters
//! - `Objective`: per-state minimize/maximize tag
//! - `Sweep`: per-pass change diagnostics
//! - `Convergence`: summary of a finished solve
//! - `Engine`: owns the value table and performs the Bellman backups
mod config;
mod convergence;
mod engine;
mod objective;
mod sweep;

pub use config::*;
pub use convergence::*;
pub use engine::*;
pub use objective::*;
pub use sweep::*;
