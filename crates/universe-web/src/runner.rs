use universe_engine::{
    build_render_buffer, ConfigError, PlanetId, RenderBuffer, Scheduler, Universe,
    UniverseConfig,
};

/// Wires a `Universe` to the host's frame loop.
///
/// The host calls `tick` with the wall-clock time since the previous frame;
/// the scheduler turns that into fixed-interval ticks and the render buffer is
/// rebuilt once afterwards.
pub struct UniverseRunner {
    universe: Universe,
    scheduler: Scheduler,
    render_buffer: RenderBuffer,
}

impl UniverseRunner {
    pub fn new(config: UniverseConfig) -> Result<Self, ConfigError> {
        let universe = Universe::new(config)?;
        let scheduler = Scheduler::new(universe.config().tick_interval_ms);
        let mut render_buffer = RenderBuffer::with_capacity(
            universe.state().planet_count()
                + universe.state().satellite_count()
                + universe.state().nebula_count(),
        );
        build_render_buffer(universe.state(), &mut render_buffer);

        Ok(Self {
            universe,
            scheduler,
            render_buffer,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::new(UniverseConfig::from_json(json)?)
    }

    /// Run as many ticks as `elapsed_ms` allows. Returns the number run.
    pub fn tick(&mut self, elapsed_ms: f64) -> u32 {
        let ticks = self.scheduler.accumulate(elapsed_ms);
        for _ in 0..ticks {
            self.universe.advance();
        }
        if ticks > 0 {
            build_render_buffer(self.universe.state(), &mut self.render_buffer);
        }
        ticks
    }

    /// Add a planet (and its satellites) and refresh the render buffer.
    /// A non-finite point adds nothing and returns `None`.
    pub fn create_planet_at(&mut self, x: f64, y: f64) -> Option<PlanetId> {
        let id = self.universe.create_planet_at(x, y)?;
        build_render_buffer(self.universe.state(), &mut self.render_buffer);
        Some(id)
    }

    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        self.universe.resize(width, height)
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn float_count(&self) -> u32 {
        self.render_buffer.float_count()
    }

    pub fn planet_count(&self) -> u32 {
        self.render_buffer.planet_count()
    }

    pub fn satellite_count(&self) -> u32 {
        self.render_buffer.satellite_count()
    }

    pub fn nebula_count(&self) -> u32 {
        self.render_buffer.nebula_count()
    }

    pub fn world_width(&self) -> f64 {
        self.universe.config().width
    }

    pub fn world_height(&self) -> f64 {
        self.universe.config().height
    }

    pub fn tick_count(&self) -> u64 {
        self.universe.tick_count()
    }

    /// Wall-clock milliseconds per tick, for hosts that schedule their own frames.
    pub fn tick_interval_ms(&self) -> f64 {
        self.scheduler.interval_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_ready_before_first_tick() {
        let runner = UniverseRunner::new(UniverseConfig::default()).unwrap();
        assert_eq!(runner.planet_count(), 3);
        assert_eq!(runner.satellite_count(), 20);
        assert_eq!(runner.instance_count(), 3 + 20 + 24);
    }

    #[test]
    fn elapsed_time_drives_ticks() {
        let mut runner = UniverseRunner::new(UniverseConfig::default()).unwrap();
        assert_eq!(runner.tick(10.0), 0);
        assert_eq!(runner.tick(30.0), 2);
        assert_eq!(runner.tick_count(), 2);
    }

    #[test]
    fn buffer_tracks_planet_motion() {
        let mut runner = UniverseRunner::new(UniverseConfig::default()).unwrap();
        let before = runner.render_buffer().planets()[0];
        runner.tick(200.0);
        let after = runner.render_buffer().planets()[0];
        assert_ne!(before, after);
    }

    #[test]
    fn created_planet_appears_in_buffer() {
        let mut runner = UniverseRunner::new(UniverseConfig::default()).unwrap();
        let id = runner.create_planet_at(100.0, 100.0);
        assert_eq!(id, Some(PlanetId(3)));
        assert_eq!(runner.planet_count(), 4);
        assert_eq!(runner.satellite_count(), 25);
        assert_eq!(runner.render_buffer().planets()[3].x, 100.0);
    }

    #[test]
    fn nan_click_leaves_buffer_alone() {
        let mut runner = UniverseRunner::new(UniverseConfig::default()).unwrap();
        assert_eq!(runner.create_planet_at(f64::NAN, 50.0), None);
        assert_eq!(runner.planet_count(), 3);
        assert_eq!(runner.instance_count(), 3 + 20 + 24);
    }

    #[test]
    fn float_count_and_interval_are_exposed() {
        let runner = UniverseRunner::from_json(r#"{ "tick_interval_ms": 16 }"#).unwrap();
        assert_eq!(runner.tick_interval_ms(), 16.0);
        assert_eq!(runner.float_count(), runner.instance_count() * 4);
    }

    #[test]
    fn bad_json_is_rejected() {
        assert!(UniverseRunner::from_json(r#"{ "width": -3 }"#).is_err());
    }
}
