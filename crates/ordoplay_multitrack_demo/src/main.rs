// SPDX-License-Identifier: MIT OR Apache-2.0
//! `OrdoPlay` `MultiTrack` demo.
//!
//! Builds a nested coordinator, prints its description, then drives it through
//! a full run (`Init`, intermediate steps, `Done`) and logs every stop event
//! that fires.
//!
//! Usage: `ordoplay_multitrack_demo [config.ron]`

use ordoplay_multitrack::{
    GlobalCounter, IntervalEvent, MultiTrack, SequencerConfig, SequencerError, Track, WaitTrack,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Cursor advance per intermediate step
const STEP: f64 = 1.5;

fn main() -> ExitCode {
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "ordoplay_multitrack=debug".parse() {
        env_filter = env_filter.add_directive(directive);
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting MultiTrack demo v{}", env!("CARGO_PKG_VERSION"));

    match run(std::env::args_os().nth(1).map(PathBuf::from)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Demo failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: Option<PathBuf>) -> Result<(), SequencerError> {
    let config = match config_path {
        Some(path) => SequencerConfig::load(&path)?,
        None => SequencerConfig::default(),
    };

    let inner: Box<dyn Track> = Box::new(MultiTrack::with_config(
        vec![WaitTrack::new("fade", 1.0), WaitTrack::new("pan", 3.0)],
        None,
        &config,
        &GlobalCounter,
    ));
    let tracks: Vec<Box<dyn Track>> = vec![
        Box::new(WaitTrack::new("intro", 2.0)),
        Box::new(WaitTrack::new("dialogue", 5.0).with_stop_event("cue", 4.0)),
        inner,
    ];
    let mut root = MultiTrack::with_config(tracks, Some("scene"), &config, &GlobalCounter);

    println!("{}", root.describe(0));

    root.set_t(0.0, IntervalEvent::Init)?;

    let mut t = STEP;
    while t < root.duration() {
        root.set_t(t, IntervalEvent::Intermediate)?;
        report(&mut root);
        t += STEP;
    }

    root.set_t(root.duration(), IntervalEvent::Done)?;
    report(&mut root);

    tracing::info!("{} finished at {}", root.name(), root.prev_t());
    Ok(())
}

fn report(root: &mut MultiTrack) {
    for event in root.take_fired() {
        tracing::info!(
            "{}: stop event {} ({}) fired at {}",
            root.name(),
            event.name,
            event.time,
            root.prev_t()
        );
    }
}
