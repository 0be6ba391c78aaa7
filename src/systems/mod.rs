pub mod trim;

pub use trim::{aggregate_thrust_system, apply_trim_system};
