//! Log-sheet grid geometry: 4 lanes by 96 quarter-hour slots.
//!
//! Everything here works in slot space. [`scale::GridScale`] maps slots and
//! lanes onto whatever surface the caller draws on.

pub mod axis;
pub mod layout;
pub mod scale;
pub mod slots;

pub use layout::{GridLayout, GridRect, SkipReason, SkippedEntry, layout};
pub use scale::{GridScale, ScaledRect};

pub const LANE_COUNT: usize = 4;
pub const HOURS_PER_DAY: u32 = 24;
pub const SLOTS_PER_HOUR: u32 = 4;
pub const SLOTS_PER_DAY: u32 = HOURS_PER_DAY * SLOTS_PER_HOUR;
