// SPDX-License-Identifier: MIT OR Apache-2.0
//! Base timeline bookkeeping shared by every timeline-like type.
//!
//! A [`Timeline`] holds the name, duration, cursor and stop events of one
//! timeline. Owners compose it as a field and bracket their own update with
//! [`Timeline::begin`] and [`Timeline::commit`].

use crate::config::DescribeStyle;
use crate::event::{IntervalEvent, StopEvent};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimelineId(pub Uuid);

impl TimelineId {
    /// Create a new random timeline ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TimelineId {
    fn default() -> Self {
        Self::new()
    }
}

/// Name, duration, cursor and trigger points of a timeline
#[derive(Debug, Clone)]
pub struct Timeline {
    id: TimelineId,
    name: String,
    duration: f64,
    curr_t: f64,
    prev_t: f64,
    stop_events: Vec<StopEvent>,
    /// Stop events crossed since the last `take_fired`
    fired: Vec<StopEvent>,
    style: DescribeStyle,
}

impl Timeline {
    /// Create a new timeline with its cursor at zero
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        Self {
            id: TimelineId::new(),
            name: name.into(),
            duration,
            curr_t: 0.0,
            prev_t: 0.0,
            stop_events: Vec::new(),
            fired: Vec::new(),
            style: DescribeStyle::default(),
        }
    }

    /// Add a stop event
    pub fn with_stop_event(mut self, name: impl Into<String>, time: f64) -> Self {
        self.stop_events.push(StopEvent::new(name, time));
        self
    }

    /// Set the description layout
    pub fn with_style(mut self, style: DescribeStyle) -> Self {
        self.style = style;
        self
    }

    /// Append stop events after the existing ones
    pub fn push_stop_events(&mut self, events: impl IntoIterator<Item = StopEvent>) {
        self.stop_events.extend(events);
    }

    /// Timeline ID
    pub fn id(&self) -> TimelineId {
        self.id
    }

    /// Timeline name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Cursor of the update in progress (or the last one)
    pub fn curr_t(&self) -> f64 {
        self.curr_t
    }

    /// Cursor of the last committed update
    pub fn prev_t(&self) -> f64 {
        self.prev_t
    }

    /// Stop events in firing order
    pub fn stop_events(&self) -> &[StopEvent] {
        &self.stop_events
    }

    /// Description layout
    pub fn style(&self) -> DescribeStyle {
        self.style
    }

    /// Record the cursor of an update that is about to run
    pub fn begin(&mut self, t: f64) {
        self.curr_t = t;
    }

    /// Finish an update: queue crossed stop events and move `prev_t` to `t`
    pub fn commit(&mut self, t: f64, event: IntervalEvent) {
        let prev_t = self.prev_t;

        if event == IntervalEvent::Init {
            self.fired.clear();
        }

        for stop in &self.stop_events {
            let crossed = match event {
                IntervalEvent::Init => stop.time == t,
                IntervalEvent::Intermediate => stop.time > prev_t && stop.time <= t,
                IntervalEvent::Done => stop.time > prev_t,
            };
            if crossed {
                tracing::trace!(
                    "{} fired stop event {} at {}",
                    self.name,
                    stop.name,
                    stop.time
                );
                self.fired.push(stop.clone());
            }
        }

        self.curr_t = t;
        self.prev_t = t;
    }

    /// Get fired stop events and clear them
    pub fn take_fired(&mut self) -> Vec<StopEvent> {
        std::mem::take(&mut self.fired)
    }

    /// One-line description at the given nesting level
    pub fn describe(&self, indent: usize) -> String {
        format!(
            "{}{} dur: {:.*}",
            self.style.indent(indent),
            self.name,
            self.style.precision,
            self.duration
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cued() -> Timeline {
        Timeline::new("cued", 5.0)
            .with_stop_event("a", 1.0)
            .with_stop_event("b", 3.0)
            .with_stop_event("c", 5.0)
    }

    fn names(events: &[StopEvent]) -> Vec<&str> {
        events.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_new_timeline() {
        let timeline = Timeline::new("intro", 2.5);
        assert_eq!(timeline.name(), "intro");
        assert_eq!(timeline.duration(), 2.5);
        assert_eq!(timeline.prev_t(), 0.0);
        assert!(timeline.stop_events().is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(Timeline::new("a", 1.0).id(), Timeline::new("a", 1.0).id());
    }

    #[test]
    fn test_begin_does_not_move_prev_t() {
        let mut timeline = cued();
        timeline.begin(2.0);
        assert_eq!(timeline.curr_t(), 2.0);
        assert_eq!(timeline.prev_t(), 0.0);

        timeline.commit(2.0, IntervalEvent::Intermediate);
        assert_eq!(timeline.prev_t(), 2.0);
    }

    #[test]
    fn test_forward_crossing_fires_in_order() {
        let mut timeline = cued();
        timeline.commit(0.0, IntervalEvent::Init);
        timeline.commit(3.0, IntervalEvent::Intermediate);
        assert_eq!(names(&timeline.take_fired()), vec!["a", "b"]);

        // Already crossed
        timeline.commit(3.0, IntervalEvent::Intermediate);
        assert!(timeline.take_fired().is_empty());
    }

    #[test]
    fn test_backward_jump_fires_nothing() {
        let mut timeline = cued();
        timeline.commit(4.0, IntervalEvent::Intermediate);
        timeline.take_fired();

        timeline.commit(0.5, IntervalEvent::Intermediate);
        assert!(timeline.take_fired().is_empty());
    }

    #[test]
    fn test_done_fires_remaining() {
        let mut timeline = cued();
        timeline.commit(2.0, IntervalEvent::Intermediate);
        timeline.take_fired();

        timeline.commit(5.0, IntervalEvent::Done);
        assert_eq!(names(&timeline.take_fired()), vec!["b", "c"]);
    }

    #[test]
    fn test_event_at_start_fires_on_init() {
        let mut timeline = Timeline::new("opening", 3.0)
            .with_stop_event("start", 0.0)
            .with_stop_event("mid", 1.5);

        timeline.commit(0.0, IntervalEvent::Init);
        assert_eq!(names(&timeline.take_fired()), vec!["start"]);

        timeline.commit(2.0, IntervalEvent::Intermediate);
        assert_eq!(names(&timeline.take_fired()), vec!["mid"]);

        timeline.commit(3.0, IntervalEvent::Done);
        assert!(timeline.take_fired().is_empty());
    }

    #[test]
    fn test_init_discards_pending() {
        let mut timeline = cued();
        timeline.commit(5.0, IntervalEvent::Intermediate);
        timeline.commit(0.0, IntervalEvent::Init);
        assert!(timeline.take_fired().is_empty());
        assert_eq!(timeline.prev_t(), 0.0);
    }

    #[test]
    fn test_describe() {
        let timeline = Timeline::new("intro", 2.5);
        assert_eq!(timeline.describe(0), "intro dur: 2.50");
        assert_eq!(timeline.describe(2), "  intro dur: 2.50");

        let wide = Timeline::new("intro", 2.75).with_style(DescribeStyle {
            indent_width: 4,
            precision: 0,
        });
        assert_eq!(wide.describe(1), "    intro dur: 3");
    }
}
