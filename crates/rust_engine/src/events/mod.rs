//! Event sources
//!
//! The engine pulls platform events once per frame from an [`EventSource`].
//! Window backends translate their native events; headless backends replay a
//! script.

use crate::application::AppEvent;

/// Producer of per-frame application events
pub trait EventSource {
    /// Drain the events that arrived for frame `frame`
    fn poll_events(&mut self, frame: u64) -> Vec<AppEvent>;
}
