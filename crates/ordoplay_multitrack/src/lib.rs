// SPDX-License-Identifier: MIT OR Apache-2.0
//! Composite timeline coordinator for `OrdoPlay`.
//!
//! This crate aggregates independently timed tracks into one timeline:
//! - One duration, the longest track's
//! - One time cursor, replayed to every track in order
//! - `Init`/`Done` lifecycle markers delivered to every track
//! - Stop events gathered from every track
//!
//! ## Architecture
//!
//! The coordinator is built on:
//! - A [`Track`] capability implemented by anything that can be driven by time
//! - A composed [`Timeline`] holding name, duration, cursor and stop events
//! - [`MultiTrack`], itself a `Track`, so coordinators nest
//! - Injected name sources for generated `MultiTrack-<n>` names

pub mod config;
pub mod error;
pub mod event;
pub mod multitrack;
pub mod naming;
pub mod timeline;
pub mod track;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{DescribeStyle, SequencerConfig, CONFIG_FORMAT_VERSION};
pub use error::{ConfigError, Result, SequencerError};
pub use event::{IntervalEvent, StopEvent};
pub use multitrack::{Dispatch, MultiTrack};
pub use naming::{generated_name, GlobalCounter, NameSource, SequentialNames};
pub use timeline::{Timeline, TimelineId};
pub use track::{Track, WaitTrack};
