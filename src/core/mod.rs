//! Core rendering building blocks: configuration, text layout, background
//! preparation and card composition. These are consumed by the high-level
//! `api` module.
pub mod compose;
pub mod params;
pub mod processing;
pub mod text;
