pub const ROUND_SECONDS: u32 = 60;

/// Bumped on every start. A scheduled tick carries the generation it was
/// created for, so an interval left over from an earlier round can never
/// advance a newer round's countdown.
pub type TimerGeneration = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Stopped timer or outdated generation; nothing happened.
    Stale,
    Running(u32),
    Expired,
}

#[derive(Clone, Debug)]
pub struct CountdownTimer {
    remaining: u32,
    running: bool,
    generation: TimerGeneration,
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self {
            remaining: ROUND_SECONDS,
            running: false,
            generation: 0,
        }
    }

    /// Restarts the countdown at the full round length and invalidates any
    /// pending tick from the previous generation.
    pub fn start(&mut self) -> TimerGeneration {
        self.generation = self.generation.wrapping_add(1);
        self.remaining = ROUND_SECONDS;
        self.running = true;
        self.generation
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn tick(&mut self, generation: TimerGeneration) -> Tick {
        if !self.running || generation != self.generation {
            return Tick::Stale;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            Tick::Expired
        } else {
            Tick::Running(self.remaining)
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> TimerGeneration {
        self.generation
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
