// SPDX-License-Identifier: MIT OR Apache-2.0
//! Coordinator that drives several tracks from one time cursor.
//!
//! A [`MultiTrack`] owns an ordered list of tracks. Its duration is the longest
//! track's duration, taken once at construction, and its stop events are the
//! concatenation of every track's stop events in track order. Each update is
//! replayed to every track in construction order.

use crate::config::SequencerConfig;
use crate::error::{Result, SequencerError};
use crate::event::{IntervalEvent, StopEvent};
use crate::naming::{generated_name, GlobalCounter, NameSource};
use crate::timeline::{Timeline, TimelineId};
use crate::track::Track;

/// How a single track is reached by an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// `Init` or `Done`: every track observes it
    Lifecycle,
    /// The cursor reaches the track's end for the first time
    Crossing,
    /// The cursor is inside the track
    InRange,
    /// The cursor had already passed the track's end
    PastEnd,
}

impl Dispatch {
    /// Classify one track for an update moving the cursor from `prev_t` to `t`
    pub fn classify(t: f64, prev_t: f64, track_duration: f64, event: IntervalEvent) -> Self {
        if event.is_lifecycle() {
            Self::Lifecycle
        } else if t >= track_duration && prev_t < track_duration {
            Self::Crossing
        } else if t < track_duration {
            Self::InRange
        } else {
            Self::PastEnd
        }
    }
}

/// A timeline made of several tracks sharing one cursor
pub struct MultiTrack<T: Track = Box<dyn Track>> {
    base: Timeline,
    tracks: Vec<T>,
}

impl<T: Track> MultiTrack<T> {
    /// Create a coordinator; unnamed ones take the next global `MultiTrack-<n>` name
    pub fn new(tracks: Vec<T>, name: Option<&str>) -> Self {
        Self::with_config(tracks, name, &SequencerConfig::default(), &GlobalCounter)
    }

    /// Create a coordinator with explicit settings and name source.
    ///
    /// `names` is only consulted when `name` is `None`.
    pub fn with_config(
        tracks: Vec<T>,
        name: Option<&str>,
        config: &SequencerConfig,
        names: &dyn NameSource,
    ) -> Self {
        let name = match name {
            Some(name) => name.to_string(),
            None => generated_name(&config.name_prefix, names.next_index()),
        };

        let duration = tracks.iter().map(Track::duration).fold(0.0, f64::max);

        let mut base = Timeline::new(name, duration).with_style(config.describe);
        for track in &tracks {
            base.push_stop_events(track.stop_events());
        }

        tracing::debug!(
            "Created {} ({:?}): {} tracks, duration {}, {} stop events",
            base.name(),
            base.id(),
            tracks.len(),
            duration,
            base.stop_events().len()
        );

        Self { base, tracks }
    }

    /// Get the track at `index`
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.tracks.len();
        self.tracks.get(index).ok_or_else(|| {
            tracing::warn!(
                "{}: track index {} out of range ({} tracks)",
                self.base.name(),
                index,
                len
            );
            SequencerError::IndexOutOfRange { index, len }
        })
    }

    /// Get a mutable track at `index`.
    ///
    /// Changing a track's duration through this does not update the
    /// coordinator's duration.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.tracks.len();
        if index >= len {
            tracing::warn!(
                "{}: track index {} out of range ({} tracks)",
                self.base.name(),
                index,
                len
            );
            return Err(SequencerError::IndexOutOfRange { index, len });
        }
        Ok(&mut self.tracks[index])
    }

    /// Get all tracks, in construction order
    pub fn tracks(&self) -> impl Iterator<Item = &T> {
        self.tracks.iter()
    }

    /// Get track count
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether there are no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Give the tracks back
    pub fn into_tracks(self) -> Vec<T> {
        self.tracks
    }

    /// Coordinator ID
    pub fn id(&self) -> TimelineId {
        self.base.id()
    }

    /// Coordinator name
    pub fn name(&self) -> &str {
        self.base.name()
    }

    /// Duration taken at construction
    pub fn duration(&self) -> f64 {
        self.base.duration()
    }

    /// Cursor of the last completed update
    pub fn prev_t(&self) -> f64 {
        self.base.prev_t()
    }

    /// Base timeline state
    pub fn timeline(&self) -> &Timeline {
        &self.base
    }

    /// Aggregated stop events, in track order
    pub fn stop_events(&self) -> &[StopEvent] {
        self.base.stop_events()
    }

    /// Get fired stop events and clear them
    pub fn take_fired(&mut self) -> Vec<StopEvent> {
        self.base.take_fired()
    }

    /// Replay an update to every track, in construction order.
    ///
    /// The first track error aborts the remaining tracks and is returned as is.
    /// Tracks already updated are not rolled back.
    pub fn update(&mut self, t: f64, event: IntervalEvent) -> Result<()> {
        let prev_t = self.base.prev_t();

        if event.is_lifecycle() {
            tracing::debug!(
                "{}: {} at {} to {} tracks",
                self.base.name(),
                event.name(),
                t,
                self.tracks.len()
            );
        }

        for (index, track) in self.tracks.iter_mut().enumerate() {
            let track_duration = track.duration();

            // Every branch forwards; tracks past their end still see each update.
            match Dispatch::classify(t, prev_t, track_duration, event) {
                Dispatch::Lifecycle => {
                    tracing::trace!(
                        "{}: track {} {} at {}",
                        self.base.name(),
                        index,
                        event.name(),
                        t
                    );
                }
                Dispatch::Crossing => {
                    tracing::trace!(
                        "{}: track {} crosses its end {} at {}",
                        self.base.name(),
                        index,
                        track_duration,
                        t
                    );
                }
                Dispatch::InRange => {
                    tracing::trace!("{}: track {} in range at {}", self.base.name(), index, t);
                }
                Dispatch::PastEnd => {
                    tracing::trace!(
                        "{}: track {} already past its end {} at {}",
                        self.base.name(),
                        index,
                        track_duration,
                        t
                    );
                }
            }

            track.set_t(t, event)?;
            track.clear_fired();
        }

        Ok(())
    }
}

impl<T: Track> Track for MultiTrack<T> {
    fn duration(&self) -> f64 {
        self.base.duration()
    }

    fn set_t(&mut self, t: f64, event: IntervalEvent) -> Result<()> {
        self.base.begin(t);
        self.update(t, event)?;
        self.base.commit(t, event);
        Ok(())
    }

    fn stop_events(&self) -> Vec<StopEvent> {
        self.base.stop_events().to_vec()
    }

    fn clear_fired(&mut self) {
        self.base.take_fired();
    }

    fn describe(&self, indent: usize) -> String {
        let mut lines = vec![self.base.describe(indent)];
        lines.extend(self.tracks.iter().map(|track| track.describe(indent + 1)));
        lines.join("\n")
    }
}

impl<T: Track> std::fmt::Debug for MultiTrack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiTrack")
            .field("id", &self.base.id())
            .field("name", &self.base.name())
            .field("duration", &self.base.duration())
            .field("tracks", &self.tracks.len())
            .finish()
    }
}
