// SPDX-License-Identifier: MIT OR Apache-2.0
//! The track capability and a basic track.

use crate::error::{Result, SequencerError};
use crate::event::{IntervalEvent, StopEvent};
use crate::timeline::Timeline;
use parking_lot::Mutex;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// Anything a coordinator can drive with a time cursor.
///
/// A `MultiTrack` is itself a `Track`, so coordinators nest.
pub trait Track {
    /// Duration in seconds, never negative
    fn duration(&self) -> f64;

    /// Move the track's cursor to `t`
    fn set_t(&mut self, t: f64, event: IntervalEvent) -> Result<()>;

    /// Stop events of this track, in firing order
    fn stop_events(&self) -> Vec<StopEvent>;

    /// Textual description at the given nesting level
    fn describe(&self, indent: usize) -> String;

    /// Drop any stop events this track queued itself.
    ///
    /// A coordinator calls this after each forwarded update, since it fires
    /// its tracks' stop events from its own aggregated list.
    fn clear_fired(&mut self) {}
}

impl<T: Track + ?Sized> Track for Box<T> {
    fn duration(&self) -> f64 {
        (**self).duration()
    }

    fn set_t(&mut self, t: f64, event: IntervalEvent) -> Result<()> {
        (**self).set_t(t, event)
    }

    fn stop_events(&self) -> Vec<StopEvent> {
        (**self).stop_events()
    }

    fn describe(&self, indent: usize) -> String {
        (**self).describe(indent)
    }

    fn clear_fired(&mut self) {
        (**self).clear_fired();
    }
}

/// Shared handle: the caller keeps a clone and can inspect the track between updates.
///
/// `duration`, `stop_events` and `describe` panic if the caller holds a
/// `borrow_mut` guard on the track while they run; `set_t` reports
/// [`SequencerError::SharedTrackBusy`] instead.
impl<T: Track> Track for Rc<RefCell<T>> {
    fn duration(&self) -> f64 {
        self.borrow().duration()
    }

    fn set_t(&mut self, t: f64, event: IntervalEvent) -> Result<()> {
        self.try_borrow_mut()
            .map_err(|_| SequencerError::SharedTrackBusy)?
            .set_t(t, event)
    }

    fn stop_events(&self) -> Vec<StopEvent> {
        self.borrow().stop_events()
    }

    fn describe(&self, indent: usize) -> String {
        self.borrow().describe(indent)
    }

    fn clear_fired(&mut self) {
        if let Ok(mut track) = self.try_borrow_mut() {
            track.clear_fired();
        }
    }
}

/// Shared handle usable across threads
impl<T: Track> Track for Arc<Mutex<T>> {
    fn duration(&self) -> f64 {
        self.lock().duration()
    }

    fn set_t(&mut self, t: f64, event: IntervalEvent) -> Result<()> {
        self.lock().set_t(t, event)
    }

    fn stop_events(&self) -> Vec<StopEvent> {
        self.lock().stop_events()
    }

    fn describe(&self, indent: usize) -> String {
        self.lock().describe(indent)
    }

    fn clear_fired(&mut self) {
        self.lock().clear_fired();
    }
}

/// A track that only holds time for a fixed duration
#[derive(Debug, Clone)]
pub struct WaitTrack {
    base: Timeline,
}

impl WaitTrack {
    /// Create a new wait track; negative durations are clamped to zero
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        Self {
            base: Timeline::new(name, duration.max(0.0)),
        }
    }

    /// Add a stop event
    pub fn with_stop_event(mut self, name: impl Into<String>, time: f64) -> Self {
        self.base = self.base.with_stop_event(name, time);
        self
    }

    /// Base timeline state
    pub fn timeline(&self) -> &Timeline {
        &self.base
    }

    /// Get fired stop events and clear them
    pub fn take_fired(&mut self) -> Vec<StopEvent> {
        self.base.take_fired()
    }
}

impl Track for WaitTrack {
    fn duration(&self) -> f64 {
        self.base.duration()
    }

    fn set_t(&mut self, t: f64, event: IntervalEvent) -> Result<()> {
        self.base.begin(t);
        self.base.commit(t, event);
        Ok(())
    }

    fn stop_events(&self) -> Vec<StopEvent> {
        self.base.stop_events().to_vec()
    }

    fn describe(&self, indent: usize) -> String {
        self.base.describe(indent)
    }

    fn clear_fired(&mut self) {
        self.base.take_fired();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wait_track() {
        let mut wait = WaitTrack::new("hold", 2.0).with_stop_event("half", 1.0);
        assert_eq!(wait.duration(), 2.0);
        assert_eq!(wait.stop_events(), vec![StopEvent::new("half", 1.0)]);

        wait.set_t(0.0, IntervalEvent::Init).unwrap();
        wait.set_t(1.5, IntervalEvent::Intermediate).unwrap();
        assert_eq!(wait.timeline().prev_t(), 1.5);
        assert_eq!(wait.take_fired(), vec![StopEvent::new("half", 1.0)]);
    }

    #[test]
    fn test_clear_fired_through_shared_handle() {
        let shared = Rc::new(RefCell::new(
            WaitTrack::new("hold", 2.0).with_stop_event("half", 1.0),
        ));
        let mut handle = Rc::clone(&shared);

        handle.set_t(1.5, IntervalEvent::Intermediate).unwrap();
        handle.clear_fired();
        assert!(shared.borrow_mut().take_fired().is_empty());
        assert_eq!(shared.borrow().timeline().prev_t(), 1.5);
    }

    #[test]
    fn test_negative_duration_clamped() {
        assert_eq!(WaitTrack::new("hold", -1.0).duration(), 0.0);
    }

    #[test]
    fn test_boxed_track() {
        let mut track: Box<dyn Track> = Box::new(WaitTrack::new("boxed", 3.0));
        track.set_t(1.0, IntervalEvent::Intermediate).unwrap();
        assert_eq!(track.duration(), 3.0);
        assert_eq!(track.describe(1), " boxed dur: 3.00");
    }

    #[test]
    fn test_shared_track_sees_updates() {
        let shared = Rc::new(RefCell::new(WaitTrack::new("shared", 4.0)));
        let mut handle = Rc::clone(&shared);

        handle.set_t(2.5, IntervalEvent::Intermediate).unwrap();
        assert_eq!(shared.borrow().timeline().prev_t(), 2.5);
    }

    #[test]
    fn test_busy_shared_track() {
        let shared = Rc::new(RefCell::new(WaitTrack::new("shared", 4.0)));
        let mut handle = Rc::clone(&shared);

        let _guard = shared.borrow();
        let err = handle.set_t(1.0, IntervalEvent::Intermediate).unwrap_err();
        assert!(matches!(err, SequencerError::SharedTrackBusy));
    }

    #[test]
    fn test_thread_shared_track() {
        let shared = Arc::new(Mutex::new(WaitTrack::new("threaded", 1.0)));
        let mut handle = Arc::clone(&shared);

        std::thread::spawn(move || handle.set_t(1.0, IntervalEvent::Done))
            .join()
            .unwrap()
            .unwrap();
        assert_eq!(shared.lock().timeline().prev_t(), 1.0);
    }
}
