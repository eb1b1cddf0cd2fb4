//! Background preparation: exact resize, tone adjustments and source resolution.
pub mod adjust;
pub mod background;
pub mod resize;

pub use background::{BackgroundSource, resolve_background};
