//! Built-in NetLogo primitives.
//!
//! Terminals append a fixed NetLogo reporter; `closest-water-patch` combines
//! two child fragments into a `min-one-of` selection.

mod closest_water_patch;
mod terminal;

pub use closest_water_patch::ClosestWaterPatch;
pub use terminal::{Terminal, FARMS, MYSELF, PATCHES, PATCHES_WITH_WATER};
