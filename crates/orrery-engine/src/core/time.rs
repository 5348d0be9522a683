use crate::api::config::TimeMode;

/// Cap on ticks per frame for the fixed-step mode (prevents a spiral of death
/// after a long stall, e.g. a background tab).
pub const MAX_TICKS_PER_FRAME: u32 = 10;

/// Fixed timestep accumulator.
/// Turns variable frame deltas into a whole number of fixed ticks.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        self.accumulator = self.accumulator.min(self.dt * MAX_TICKS_PER_FRAME as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }
}

/// What one frame asks of the simulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickPlan {
    /// Number of ticks to run this frame.
    pub ticks: u32,
    /// Multiplier applied to each body's angular speed for those ticks.
    pub phase_scale: f64,
}

/// Maps frame time to ticks according to the configured `TimeMode`.
pub struct TickClock {
    mode: TimeMode,
    timestep: Option<FixedTimestep>,
}

impl TickClock {
    pub fn new(mode: TimeMode) -> Self {
        let timestep = match mode {
            TimeMode::FixedStep { dt } => Some(FixedTimestep::new(dt)),
            _ => None,
        };
        Self { mode, timestep }
    }

    pub fn plan(&mut self, frame_dt: f32) -> TickPlan {
        let frame_dt = if frame_dt.is_finite() { frame_dt.max(0.0) } else { 0.0 };
        match (self.mode, self.timestep.as_mut()) {
            (TimeMode::FixedStep { .. }, Some(ts)) => TickPlan {
                ticks: ts.accumulate(frame_dt),
                phase_scale: 1.0,
            },
            (TimeMode::Scaled { reference_dt }, _) => TickPlan {
                ticks: 1,
                phase_scale: frame_dt as f64 / reference_dt as f64,
            },
            _ => TickPlan {
                ticks: 1,
                phase_scale: 1.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(0.25);
        assert_eq!(ts.accumulate(0.25), 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(0.008), 0);
        assert_eq!(ts.accumulate(0.010), 1);
    }

    #[test]
    fn caps_at_ten_steps() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0), MAX_TICKS_PER_FRAME);
    }

    #[test]
    fn per_frame_ignores_frame_time() {
        let mut clock = TickClock::new(TimeMode::PerFrame);
        for dt in [0.0, 0.016, 0.5] {
            assert_eq!(clock.plan(dt), TickPlan { ticks: 1, phase_scale: 1.0 });
        }
    }

    #[test]
    fn scaled_uses_elapsed_ratio() {
        let mut clock = TickClock::new(TimeMode::Scaled { reference_dt: 0.02 });
        let plan = clock.plan(0.04);
        assert_eq!(plan.ticks, 1);
        assert!((plan.phase_scale - 2.0).abs() < 1e-6);
    }

    #[test]
    fn scaled_treats_bad_frame_time_as_zero() {
        let mut clock = TickClock::new(TimeMode::Scaled { reference_dt: 0.02 });
        assert_eq!(clock.plan(f32::NAN).phase_scale, 0.0);
        assert_eq!(clock.plan(-1.0).phase_scale, 0.0);
    }

    #[test]
    fn fixed_step_may_skip_a_frame() {
        let mut clock = TickClock::new(TimeMode::FixedStep { dt: 0.25 });
        assert_eq!(clock.plan(0.125).ticks, 0);
        assert_eq!(clock.plan(0.125).ticks, 1);
        assert_eq!(clock.plan(0.5).ticks, 2);
    }
}
