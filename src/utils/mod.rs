//! Utility Module
//!
//! - [`time`]: Frame clock and duration helpers
//!
//! ```rust,ignore
//! use chitbox::utils::FrameClock;
//!
//! let mut clock = FrameClock::new();
//! loop {
//!     let now = clock.tick();
//!     explorer.update(&mut scene, now);
//! }
//! ```

pub mod time;

pub use time::FrameClock;
