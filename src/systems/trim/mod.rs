mod aggregate;
mod apply;

pub use aggregate::aggregate_thrust_system;
pub use apply::apply_trim_system;
