mod assertions;
mod fixtures;
mod test_app;

// Re-export
pub use assertions::{assert_direction_eq, assert_telemetry_clear};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
