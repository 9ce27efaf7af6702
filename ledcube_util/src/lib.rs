#![cfg_attr(not(test), no_std)]

use fugit::MicrosDurationU32;

pub use buffer::{Buffer, FrameBuffer, SharedFrameBuffer};
pub use display::Cube;
pub use error::Error;
pub use frame::Frame;
pub use refresh::{Polarity, Refresher};

mod buffer;
mod dither;
mod display;
mod error;
pub mod font;
mod frame;
mod refresh;

pub type Brightness = u8;

pub const EXTENT: usize = 4;
pub const NUM_VOXELS: usize = EXTENT * EXTENT * EXTENT;

pub const BRIGHTNESS_LEVELS: u16 = 16;
pub const BRIGHTNESS_MAX: u16 = 256;
pub const BRIGHTNESS_INCREMENT: u16 = BRIGHTNESS_MAX / BRIGHTNESS_LEVELS;

/// One full sweep of every layer at every brightness sub-step.
pub const REFRESH_PERIOD: MicrosDurationU32 = MicrosDurationU32::from_ticks(40_000);
pub const FRAME_PERIOD: MicrosDurationU32 =
    MicrosDurationU32::from_ticks(REFRESH_PERIOD.ticks() / BRIGHTNESS_LEVELS as u32);

const SLICES: u32 = EXTENT as u32 * BRIGHTNESS_LEVELS as u32;

/// How long a single layer stays powered per refresh invocation.
pub const LAYER_DWELL: MicrosDurationU32 =
    MicrosDurationU32::from_ticks(FRAME_PERIOD.ticks() / SLICES);

/// Period of the refresh callback, one layer per tick.
pub const TICK_PERIOD: MicrosDurationU32 =
    MicrosDurationU32::from_ticks(REFRESH_PERIOD.ticks() / SLICES);
