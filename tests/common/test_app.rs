use bevy::prelude::*;

use autotrim::resources::ThrustInfoCache;
use autotrim::systems::{aggregate_thrust_system, apply_trim_system};

/// Builder for a headless app running the trim pipeline once per update.
///
/// The pipeline is registered in `Update` so each `app.update()` is one
/// physics step; the plugin's `FixedUpdate` wiring is covered separately.
pub struct TestAppBuilder;

impl TestAppBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .init_resource::<ThrustInfoCache>()
            .add_systems(Update, (aggregate_thrust_system, apply_trim_system).chain());

        // Run an initial update to initialize the time resources
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn cache(&self) -> &ThrustInfoCache {
        self.app.world().resource::<ThrustInfoCache>()
    }

    pub fn component<T: Component>(&self, entity: Entity) -> &T {
        self.app
            .world()
            .entity(entity)
            .get::<T>()
            .expect("entity is missing the requested component")
    }
}
