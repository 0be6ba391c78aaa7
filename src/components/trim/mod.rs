mod aggregator;
mod config;
mod solver;
mod state;

pub use aggregator::{aggregate_thrust, ProducerSample};
pub use config::AutoTrimConfig;
pub use solver::solve_trim;
pub use state::{ThrustInfo, TrimSolution};
