use std::fmt;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{DEFAULT_TICK_RATE, MAX_TICK_RATE, MIN_TICK_RATE};
use crate::grid::Grid;

/// Updates per second.
///
/// Speed keys keep it within `MIN_TICK_RATE..=MAX_TICK_RATE`, but a rate
/// built from an explicit interval is kept as given, even below one per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickRate(f64);

impl TickRate {
    pub fn new(per_second: u32) -> Self {
        TickRate(f64::from(per_second.clamp(MIN_TICK_RATE, MAX_TICK_RATE)))
    }

    /// One tick every `seconds`. Non-positive or non-finite values give the default rate.
    pub fn from_interval(seconds: f64) -> Self {
        if !seconds.is_finite() || seconds <= 0.0 {
            return TickRate::default();
        }
        TickRate(1.0 / seconds)
    }

    pub fn per_second(self) -> f64 {
        self.0
    }

    pub fn interval(self) -> Duration {
        Duration::from_secs_f64(1.0 / self.0)
    }

    pub fn faster(self, step: u32) -> Self {
        let max = f64::from(MAX_TICK_RATE);
        if self.0 >= max {
            return self;
        }
        TickRate((self.0 + f64::from(step)).min(max))
    }

    pub fn slower(self, step: u32) -> Self {
        let min = f64::from(MIN_TICK_RATE);
        if self.0 <= min {
            return self;
        }
        TickRate((self.0 - f64::from(step)).max(min))
    }
}

impl Default for TickRate {
    fn default() -> Self {
        TickRate::new(DEFAULT_TICK_RATE)
    }
}

impl fmt::Display for TickRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}", self.0)
        } else {
            write!(f, "{:.2}", self.0)
        }
    }
}

/// User commands shared by every front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Reset,
    Clear,
    Faster,
    Slower,
    Quit,
}

/// What the front-end loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A running session: the grid plus the state the controls act on.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    rng: StdRng,
    paused: bool,
    tick_rate: TickRate,
    generation: u64,
    settled: bool,
}

impl Simulation {
    /// Seeds a random `rows` x `cols` grid from `rng`; later resets draw from it too.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize, mut rng: StdRng) -> Self {
        let grid = Grid::random(rows, cols, &mut rng);
        log::debug!("seeded {}x{} grid with {} live cells", rows, cols, grid.population());
        Simulation {
            grid,
            rng,
            paused: false,
            tick_rate: TickRate::default(),
            generation: 0,
            settled: false,
        }
    }

    /// Deterministic session, same seed gives the same run
    pub fn seeded(rows: usize, cols: usize, seed: u64) -> Self {
        Simulation::new(rows, cols, StdRng::seed_from_u64(seed))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn tick_rate(&self) -> TickRate {
        self.tick_rate
    }

    pub fn set_tick_rate(&mut self, tick_rate: TickRate) {
        self.tick_rate = tick_rate;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the last tick left every cell as it was
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// One simulation step. Does nothing while paused, returns whether it advanced.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.settled = !self.grid.advance();
        self.generation += 1;
        log::trace!("generation {} population {}", self.generation, self.grid.population());
        true
    }

    /// Applies a command; `rate_step` is how far `Faster`/`Slower` move the tick rate.
    pub fn apply(&mut self, command: Command, rate_step: u32) -> Flow {
        match command {
            Command::TogglePause => {
                self.paused = !self.paused;
                log::trace!("paused: {}", self.paused);
            }
            Command::Reset => {
                self.grid.randomize(&mut self.rng);
                self.generation = 0;
                self.settled = false;
                log::trace!("grid reset, {} live cells", self.grid.population());
            }
            Command::Clear => {
                self.grid.clear();
                self.generation = 0;
                self.settled = false;
                log::trace!("grid cleared");
            }
            Command::Faster => {
                self.tick_rate = self.tick_rate.faster(rate_step);
                log::trace!("tick rate: {}/s", self.tick_rate);
            }
            Command::Slower => {
                self.tick_rate = self.tick_rate.slower(rate_step);
                log::trace!("tick rate: {}/s", self.tick_rate);
            }
            Command::Quit => return Flow::Exit,
        }
        Flow::Continue
    }
}
