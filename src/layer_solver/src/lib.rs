#![warn(clippy::pedantic)]
#![allow(clippy::similar_names, clippy::too_many_lines)]

pub mod config;
pub mod error;
pub(crate) mod phases;
pub mod pieces;
pub mod recorder;
pub mod scramble;
pub(crate) mod search;
pub mod solver;
pub mod stall;

pub use config::SolverConfig;
pub use error::{SolverError, StallReason};
pub use recorder::{MoveRecorder, Phase, PhaseTracker};
pub use solver::LayerSolver;

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}
