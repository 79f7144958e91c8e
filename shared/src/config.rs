/// Probability that a freshly seeded cell starts alive
pub const ALIVE_PROBABILITY: f64 = 0.5;

/// Tick rate bounds, in updates per second
pub const MIN_TICK_RATE: u32 = 1;
pub const MAX_TICK_RATE: u32 = 60;
pub const DEFAULT_TICK_RATE: u32 = 10;

/// How far one speed key press moves the tick rate
pub const GUI_RATE_STEP: u32 = 5;
pub const TEXT_RATE_STEP: u32 = 1;

// ============================================
// Command line defaults
// ============================================

pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 30;

/// Cell edge length in pixels (graphical mode only)
pub const DEFAULT_CELL_SIZE: u32 = 20;

/// Seconds between ticks (text mode only)
pub const DEFAULT_TEXT_SPEED: f64 = 0.5;

// ============================================
// Colours
// ============================================

pub const COLOR_BACKGROUND: [u8; 3] = [255, 255, 255];
pub const COLOR_TEXT: [u8; 3] = [0, 0, 0];
pub const COLOR_ALIVE: [u8; 3] = [50, 205, 50];
pub const COLOR_DEAD: [u8; 3] = [30, 30, 30];

pub const CHAR_ALIVE: char = '#';
pub const CHAR_DEAD: char = '.';
