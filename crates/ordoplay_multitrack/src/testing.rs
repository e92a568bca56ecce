// SPDX-License-Identifier: MIT OR Apache-2.0
//! Test doubles.

use crate::config::DescribeStyle;
use crate::error::{Result, SequencerError};
use crate::event::{IntervalEvent, StopEvent};
use crate::track::Track;
use std::cell::RefCell;
use std::rc::Rc;

/// One `set_t` call seen by a [`RecordingTrack`]
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Call {
    pub track: String,
    pub t: f64,
    pub event: IntervalEvent,
}

/// Log shared by every recording track of a test, in call order
pub(crate) type CallLog = Rc<RefCell<Vec<Call>>>;

pub(crate) fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Track double that records every update it receives
pub(crate) struct RecordingTrack {
    name: String,
    duration: f64,
    stop_events: Vec<StopEvent>,
    log: CallLog,
    fail_with: Option<String>,
}

impl RecordingTrack {
    pub fn new(name: &str, duration: f64, log: &CallLog) -> Self {
        Self {
            name: name.to_string(),
            duration,
            stop_events: Vec::new(),
            log: Rc::clone(log),
            fail_with: None,
        }
    }

    pub fn with_stop_event(mut self, name: &str, time: f64) -> Self {
        self.stop_events.push(StopEvent::new(name, time));
        self
    }

    /// Record the call, then fail it
    pub fn failing(mut self, message: &str) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }

    pub fn boxed(self) -> Box<dyn Track> {
        Box::new(self)
    }
}

impl Track for RecordingTrack {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn set_t(&mut self, t: f64, event: IntervalEvent) -> Result<()> {
        self.log.borrow_mut().push(Call {
            track: self.name.clone(),
            t,
            event,
        });

        match &self.fail_with {
            Some(message) => Err(SequencerError::Track(message.clone())),
            None => Ok(()),
        }
    }

    fn stop_events(&self) -> Vec<StopEvent> {
        self.stop_events.clone()
    }

    fn describe(&self, indent: usize) -> String {
        format!(
            "{}{} dur: {:.2}",
            DescribeStyle::default().indent(indent),
            self.name,
            self.duration
        )
    }
}

/// Names of the tracks that were called, in order
pub(crate) fn called(log: &CallLog) -> Vec<String> {
    log.borrow().iter().map(|c| c.track.clone()).collect()
}
