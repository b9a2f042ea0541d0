use serde::{Deserialize, Serialize};

use crate::best_time::BestTime;
use crate::catalog::{pick_background, BackgroundImage};
use crate::grid::in_bounds;
use crate::placement::Placement;
use crate::timer::{format_clock, CountdownTimer, Tick, TimerGeneration, ROUND_SECONDS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Constructed but no round started yet.
    Idle,
    Playing,
    Won,
    TimedOut,
}

/// What the shell must render after an engine call. Won and TimedOut leave
/// the timer stopped; BestTimeUpdated is the shell's cue to persist.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineEvent {
    PlacementChanged(Placement),
    TileSelected(usize),
    TileDeselected(usize),
    TimerTick(String),
    TimeExpired,
    Won(String),
    BestTimeUpdated(u32),
}

pub struct PuzzleEngine {
    catalog: &'static [BackgroundImage],
    placement: Placement,
    selected: Option<usize>,
    timer: CountdownTimer,
    best: BestTime,
    background: Option<&'static BackgroundImage>,
    phase: GamePhase,
}

impl PuzzleEngine {
    pub fn new(catalog: &'static [BackgroundImage], best_seconds: Option<u32>) -> Self {
        Self {
            catalog,
            placement: Placement::solved(),
            selected: None,
            timer: CountdownTimer::new(),
            best: BestTime::new(best_seconds),
            background: None,
            phase: GamePhase::Idle,
        }
    }

    /// Starts a fresh round: shuffled placement, newly picked background,
    /// selection cleared, countdown restarted at the full round length.
    /// Reachable from any phase; everything but the best time is replaced.
    pub fn initialize(&mut self, seed: u32) -> Vec<EngineEvent> {
        self.placement = Placement::shuffled(seed);
        self.background = pick_background(self.catalog, seed);
        self.selected = None;
        self.timer.start();
        self.phase = GamePhase::Playing;
        vec![
            EngineEvent::PlacementChanged(self.placement),
            EngineEvent::TimerTick(format_clock(self.timer.remaining())),
        ]
    }

    /// Click-mode gesture: first pick selects, picking the selected position
    /// again deselects, a second distinct pick swaps the two tiles.
    pub fn select_or_swap(&mut self, position: usize) -> Vec<EngineEvent> {
        if self.phase != GamePhase::Playing || !in_bounds(position) {
            return Vec::new();
        }
        match self.selected {
            None => {
                self.selected = Some(position);
                vec![EngineEvent::TileSelected(position)]
            }
            Some(current) if current == position => {
                self.selected = None;
                vec![EngineEvent::TileDeselected(position)]
            }
            Some(current) => self.swap(current, position),
        }
    }

    /// Shared primitive behind both interaction modes; drag-and-drop calls
    /// it directly. Out-of-range positions are ignored. Any pending
    /// selection is cleared before the exchange.
    pub fn swap(&mut self, a: usize, b: usize) -> Vec<EngineEvent> {
        if self.phase != GamePhase::Playing {
            return Vec::new();
        }
        let mut events = Vec::new();
        if let Some(selected) = self.selected.take() {
            events.push(EngineEvent::TileDeselected(selected));
        }
        if !self.placement.swap(a, b) {
            return events;
        }
        events.push(EngineEvent::PlacementChanged(self.placement));
        if self.placement.is_solved() {
            events.extend(self.win());
        }
        events
    }

    /// One countdown step, scheduled by the shell. Ticks carrying an
    /// outdated generation belong to an abandoned round and do nothing.
    pub fn tick(&mut self, generation: TimerGeneration) -> Vec<EngineEvent> {
        match self.timer.tick(generation) {
            Tick::Stale => Vec::new(),
            Tick::Running(remaining) => vec![EngineEvent::TimerTick(format_clock(remaining))],
            Tick::Expired => {
                self.phase = GamePhase::TimedOut;
                vec![
                    EngineEvent::TimerTick(format_clock(0)),
                    EngineEvent::TimeExpired,
                ]
            }
        }
    }

    fn win(&mut self) -> Vec<EngineEvent> {
        self.timer.stop();
        self.phase = GamePhase::Won;
        let time_taken = ROUND_SECONDS - self.timer.remaining();
        let mut events = Vec::new();
        if self.best.record(time_taken) {
            events.push(EngineEvent::BestTimeUpdated(time_taken));
        }
        events.push(EngineEvent::Won(format_clock(time_taken)));
        events
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn background(&self) -> Option<&'static BackgroundImage> {
        self.background
    }

    pub fn best(&self) -> &BestTime {
        &self.best
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.timer.remaining()
    }

    pub fn timer_generation(&self) -> TimerGeneration {
        self.timer.generation()
    }
}
