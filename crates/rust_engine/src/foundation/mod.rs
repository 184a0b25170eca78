//! Foundation types shared by every engine module
//!
//! - [`math`]: `Vec2` and degree-based rotation helpers
//! - [`collections`]: slot-map handles
//! - [`time`]: frame governor and gameplay countdowns
//! - [`logging`]: `env_logger` setup

pub mod math;
pub mod collections;
pub mod time;
pub mod logging;
