//! Queue navigation integration tests
//!
//! Real-world listening scenarios: picking an episode from a list, stepping
//! with next/previous, shuffle, and clearing.

use podplayer_playback::{Episode, PlaybackConfig, PlaybackStore, PlayerEvent};

// ===== Test Helpers =====

fn create_episode(id: u32, duration_secs: u32) -> Episode {
    Episode::new(
        format!("Episode {}", id),
        "Diego, Richard",
        format!("https://cdn.example.com/thumbs/{}.jpg", id),
        duration_secs,
        format!("https://cdn.example.com/episodes/{}.mp3", id),
    )
    .unwrap()
}

fn latest_episodes() -> Vec<Episode> {
    (1..=5).map(|id| create_episode(id, 1800 + id * 60)).collect()
}

// ===== Scenarios =====

#[test]
fn test_play_single_episode_from_card() {
    let mut store = PlaybackStore::default();
    let episode = create_episode(7, 3600);

    store.play(episode.clone());

    assert_eq!(store.queue(), &[episode]);
    assert_eq!(store.current_index(), 0);
    assert!(store.is_playing());
    assert!(!store.has_next());
    assert!(!store.has_previous());
}

#[test]
fn test_play_from_list_position() {
    let mut store = PlaybackStore::default();
    let episodes = latest_episodes();

    store.play_list(episodes[..3].to_vec(), 1).unwrap();

    assert_eq!(store.current_episode().unwrap().title(), "Episode 2");
    assert!(store.has_previous());
    assert!(store.has_next());
}

#[test]
fn test_walk_forward_and_back() {
    let mut store = PlaybackStore::default();
    store.play_list(latest_episodes(), 0).unwrap();

    for expected in 1..5 {
        store.play_next();
        assert_eq!(store.current_index(), expected);
    }
    assert!(!store.has_next());

    for expected in (0..4).rev() {
        store.play_previous();
        assert_eq!(store.current_index(), expected);
    }
    assert!(!store.has_previous());
}

#[test]
fn test_shuffle_draws_from_whole_queue() {
    let mut store = PlaybackStore::with_seed(PlaybackConfig::default(), 2024);
    store.play_list(latest_episodes(), 4).unwrap();
    store.toggle_shuffle();

    let mut seen = [false; 5];
    for _ in 0..200 {
        store.play_next();
        seen[store.current_index()] = true;
    }

    assert!(seen.iter().all(|s| *s), "shuffle never reached some episodes");
}

#[test]
fn test_same_seed_same_shuffle_sequence() {
    let run = |seed| {
        let mut store = PlaybackStore::with_seed(PlaybackConfig::default(), seed);
        store.play_list(latest_episodes(), 0).unwrap();
        store.toggle_shuffle();
        (0..20)
            .map(|_| {
                store.play_next();
                store.current_index()
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(run(11), run(11));
}

#[test]
fn test_turning_shuffle_off_resumes_sequential() {
    let mut store = PlaybackStore::with_seed(PlaybackConfig::default(), 5);
    store.play_list(latest_episodes(), 0).unwrap();
    store.toggle_shuffle();
    store.play_next();
    store.toggle_shuffle();

    let index = store.current_index();
    store.play_next();

    if index + 1 < 5 {
        assert_eq!(store.current_index(), index + 1);
    } else {
        assert_eq!(store.current_index(), index);
    }
}

#[test]
fn test_clear_then_play_again() {
    let mut store = PlaybackStore::default();
    store.play_list(latest_episodes(), 3).unwrap();
    store.toggle_loop();

    store.clear_player_state();
    assert!(store.current_episode().is_none());
    assert!(!store.has_next());
    assert!(store.is_looping());

    store.play(create_episode(9, 600));
    assert_eq!(store.current_episode().unwrap().title(), "Episode 9");
}

#[test]
fn test_events_report_selection_changes() {
    let mut store = PlaybackStore::default();
    store.play_list(latest_episodes(), 0).unwrap();
    store.drain_events();

    store.play_next();
    store.play_previous();

    let selected: Vec<usize> = store
        .drain_events()
        .into_iter()
        .filter_map(|event| match event {
            PlayerEvent::EpisodeSelected { index, .. } => Some(index),
            _ => None,
        })
        .collect();

    assert_eq!(selected, vec![1, 0]);
}
