/// Fixed timestep accumulator.
/// Turns variable host frame times into a whole number of simulation steps.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// The fixed delta time per step.
    dt: f32,
    /// Upper bound on steps per host frame, so a stalled tab cannot spiral.
    max_steps: u32,
    accumulator: f32,
    /// Simulation steps run so far.
    frames: u64,
}

impl FrameClock {
    pub fn new(dt: f32, max_steps: u32) -> Self {
        Self {
            dt,
            max_steps: max_steps.max(1),
            accumulator: 0.0,
            frames: 0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if !(frame_dt > 0.0) || !(self.dt > 0.0) {
            return 0;
        }
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        self.frames += u64::from(steps);
        steps
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
