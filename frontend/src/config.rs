use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose carousel tracing while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Period of the carousel's automatic advance.
pub const AUTO_ADVANCE_MS: u32 = 4_000;

pub const NAV_ENTRANCE_MS: u32 = 500;

// Hero entrance: the container fades in, then each child rises in turn.
pub const HERO_FADE_MS: u32 = 300;
pub const HERO_CHILDREN_DELAY_MS: u32 = 300;
pub const HERO_STAGGER_MS: u32 = 200;
pub const HERO_CHILD_MS: u32 = 800;
pub const HERO_BLOB_DRIFT_MS: u32 = 8_000;

pub const SLIDE_FADE_MS: u32 = 500;
pub const SLIDE_OFFSET_PX: f64 = 300.0;
pub const INFO_PANEL_MS: u32 = 800;
