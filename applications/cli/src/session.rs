//! Simulated listening session
//!
//! Drives a [`PlaybackStore`] and a [`PlayerView`] over a [`SimulatedMedia`]
//! element in fixed ticks, the way a page's `<audio>` element would drive
//! them in real time.

use crate::config::Settings;
use crate::error::Result;
use podplayer_playback::{Episode, PlaybackStore, PlayerEvent};
use podplayer_view::{PlayerSnapshot, PlayerView, SimulatedMedia};
use std::time::Duration;

/// Per-run options from the command line
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Queue position to start at
    pub index: usize,
    /// Force shuffle on
    pub shuffle: bool,
    /// Force loop on
    pub looping: bool,
    /// Seed for shuffle picks
    pub seed: Option<u64>,
}

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Last episode ended and the queue was cleared
    Finished,
    /// Nothing is playing and nothing will change (e.g. a media error)
    Stalled,
    /// Tick limit reached
    TickLimit,
}

#[derive(Debug, Clone)]
pub struct SessionReport {
    /// Titles in the order they were selected
    pub played: Vec<String>,
    pub ticks: u64,
    pub end: SessionEnd,
}

/// Play `episodes` to completion (or until the tick limit)
///
/// `on_render` receives a fresh snapshot once playback starts and after
/// every tick.
pub fn run_session<F>(
    episodes: Vec<Episode>,
    options: &SessionOptions,
    settings: &Settings,
    mut on_render: F,
) -> Result<SessionReport>
where
    F: FnMut(&PlayerSnapshot),
{
    let mut store = match options.seed {
        Some(seed) => PlaybackStore::with_seed(settings.playback.clone(), seed),
        None => PlaybackStore::new(settings.playback.clone()),
    };
    if options.shuffle && !store.is_shuffling() {
        store.toggle_shuffle();
    }
    if options.looping && !store.is_looping() {
        store.toggle_loop();
    }

    let media = SimulatedMedia::with_catalog(
        episodes
            .iter()
            .map(|e| (e.url().to_string(), f64::from(e.duration_secs()))),
    );
    let mut view = PlayerView::new(media);
    let mut played = Vec::new();

    store.play_list(episodes, options.index)?;
    view.sync(&store);
    view.pump(&mut store);
    settle(&mut store, &view, &mut played, &mut on_render);

    let delay = Duration::from_millis(settings.tick_delay_ms);
    let mut ticks = 0;

    let end = loop {
        if store.queue().is_empty() {
            break SessionEnd::Finished;
        }
        if !store.is_playing() && !view.media().is_playing() {
            break SessionEnd::Stalled;
        }
        if ticks >= settings.max_ticks {
            break SessionEnd::TickLimit;
        }

        view.media_mut().advance(settings.tick_seconds);
        view.pump(&mut store);
        settle(&mut store, &view, &mut played, &mut on_render);
        ticks += 1;

        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    };

    tracing::info!(ticks, ?end, episodes = played.len(), "Session ended");
    Ok(SessionReport { played, ticks, end })
}

// Drain store events, record selections and render
fn settle<F>(
    store: &mut PlaybackStore,
    view: &PlayerView<SimulatedMedia>,
    played: &mut Vec<String>,
    on_render: &mut F,
) where
    F: FnMut(&PlayerSnapshot),
{
    for event in &store.drain_events() {
        tracing::debug!(?event, "Store event");
        if let PlayerEvent::EpisodeSelected { index, .. } = event {
            if let Some(episode) = store.queue().get(*index) {
                tracing::info!(index, title = episode.title(), "Now playing");
                played.push(episode.title().to_string());
            }
        }
    }

    on_render(&view.render(store));
}
