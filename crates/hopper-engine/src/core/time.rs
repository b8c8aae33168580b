/// Most simulation steps run for a single frame, so a stalled tab
/// does not fast-forward the hero through the level.
pub const MAX_STEPS_PER_FRAME: u32 = 10;

/// Fixed timestep accumulator.
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time and return how many fixed steps are due.
    /// Negative or non-finite frame times count as zero.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += frame_dt;
        }
        self.accumulator = self.accumulator.min(self.dt * MAX_STEPS_PER_FRAME as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }
}

/// Decides how many simulation steps each rendered frame runs.
pub enum FrameStepper {
    /// One step per frame. Game speed follows the display refresh rate.
    PerFrame,
    /// Steps of a fixed length, independent of the refresh rate.
    Fixed(FixedTimestep),
}

impl FrameStepper {
    /// `None` selects per-frame stepping. A non-positive `dt` falls back to it too.
    pub fn new(fixed_dt: Option<f32>) -> Self {
        match fixed_dt {
            Some(dt) if dt.is_finite() && dt > 0.0 => FrameStepper::Fixed(FixedTimestep::new(dt)),
            Some(dt) => {
                log::warn!("ignoring invalid fixed timestep {}, stepping once per frame", dt);
                FrameStepper::PerFrame
            }
            None => FrameStepper::PerFrame,
        }
    }

    /// Number of steps to run for a frame that took `frame_dt` seconds.
    pub fn steps(&mut self, frame_dt: f32) -> u32 {
        match self {
            FrameStepper::PerFrame => 1,
            FrameStepper::Fixed(ts) => ts.accumulate(frame_dt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_frame_ignores_frame_time() {
        let mut stepper = FrameStepper::new(None);
        assert_eq!(stepper.steps(0.0), 1);
        assert_eq!(stepper.steps(0.5), 1);
    }

    #[test]
    fn fixed_accumulates_partial_frames() {
        let mut stepper = FrameStepper::new(Some(1.0 / 60.0));
        assert_eq!(stepper.steps(0.008), 0);
        assert_eq!(stepper.steps(0.010), 1);
    }

    #[test]
    fn fixed_caps_long_frames() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0), MAX_STEPS_PER_FRAME);
    }

    #[test]
    fn bad_frame_times_are_ignored() {
        let mut ts = FixedTimestep::new(0.1);
        assert_eq!(ts.accumulate(-3.0), 0);
        assert_eq!(ts.accumulate(f32::NAN), 0);
        assert_eq!(ts.accumulate(0.25), 2);
    }

    #[test]
    fn invalid_fixed_dt_falls_back_to_per_frame() {
        assert!(matches!(FrameStepper::new(Some(0.0)), FrameStepper::PerFrame));
        assert!(matches!(FrameStepper::new(Some(1.0 / 30.0)), FrameStepper::Fixed(_)));
    }
}
