/// Default time advance per animation frame.
pub const DEFAULT_TIME_STEP: f64 = 0.05;

/// Fixed-step time accumulator driving the `time` uniform.
///
/// The render loop calls [`AnimationClock::tick`] at the top of every frame;
/// a `false` return means the loop must stop rescheduling itself.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    time: f64,
    step: f64,
    playing: bool,
}

impl AnimationClock {
    pub fn new(step: f64) -> Self {
        Self {
            time: 0.0,
            step: step.max(0.0),
            playing: true,
        }
    }

    /// Advances time by one step while playing.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        self.time += self.step;
        true
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn resume(&mut self) {
        self.playing = true;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_STEP)
    }
}
