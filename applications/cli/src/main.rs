/// Podplayer - plays an episode feed through a simulated audio element
use clap::{Parser, Subcommand};
use podplayer_cli::{config::Settings, feed, run_session, SessionOptions};
use podplayer_view::{format_time, PlayPauseIcon, PlayerSnapshot};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "podplayer")]
#[command(about = "Podcast player playback simulator", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./podplayer.toml when present)
    #[arg(short, long, global = true, env = "PODPLAYER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a feed from start to finish
    Play {
        /// Feed file (JSON array of episodes)
        feed: PathBuf,
        /// Queue position to start at
        #[arg(short, long, default_value_t = 0)]
        index: usize,
        /// Pick the next episode at random
        #[arg(long)]
        shuffle: bool,
        /// Repeat the current episode
        #[arg(long = "loop")]
        looping: bool,
        /// Seed for shuffle picks
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the episodes in a feed
    Inspect {
        /// Feed file (JSON array of episodes)
        feed: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Play {
            feed,
            index,
            shuffle,
            looping,
            seed,
        } => {
            let episodes = feed::load_feed(&feed)?;
            let options = SessionOptions {
                index,
                shuffle,
                looping,
                seed,
            };

            let mut last_line = String::new();
            let report = run_session(episodes, &options, &settings, |snapshot| {
                let line = panel_line(snapshot);
                if line != last_line {
                    println!("{}", line);
                    last_line = line;
                }
            })?;

            println!(
                "Played {} episode(s) in {} tick(s): {:?}",
                report.played.len(),
                report.ticks,
                report.end
            );
        }
        Commands::Inspect { feed } => {
            let episodes = feed::load_feed(&feed)?;
            for (i, episode) in episodes.iter().enumerate() {
                println!(
                    "{:>3}  {}  {} ({})",
                    i,
                    format_time(episode.duration_secs()),
                    episode.title(),
                    episode.members()
                );
            }
        }
    }

    Ok(())
}

// One-line rendering of the player panel
fn panel_line(snapshot: &PlayerSnapshot) -> String {
    let Some(now_playing) = &snapshot.now_playing else {
        return "[ ] Select a podcast to listen".to_string();
    };

    let icon = match snapshot.controls.play_pause_icon {
        PlayPauseIcon::Play => "||",
        PlayPauseIcon::Pause => ">",
    };
    let flag = |on: bool| if on { "on" } else { "off" };

    format!(
        "[{}] {} / {} ({:>3}%) {} - {} | shuffle {} loop {}",
        icon,
        snapshot.elapsed,
        snapshot.total,
        snapshot.fill_percent,
        now_playing.title,
        now_playing.members,
        flag(snapshot.controls.shuffle.active),
        flag(snapshot.controls.repeat.active),
    )
}
