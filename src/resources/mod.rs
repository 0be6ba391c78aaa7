pub mod cache;

pub use cache::ThrustInfoCache;
