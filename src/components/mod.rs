pub mod engine;
pub mod gimbal;
pub mod trim;
pub mod vehicle;

pub use engine::{EngineComponent, ThrustTransform};
pub use gimbal::{AutoTrimBundle, GimbalComponent, GimbalMount, GimbalView, TrimTelemetry};
pub use trim::{aggregate_thrust, solve_trim, AutoTrimConfig, ProducerSample, ThrustInfo, TrimSolution};
pub use vehicle::{VehicleId, VehicleMassState};
