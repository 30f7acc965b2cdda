use clap::Parser;
use lectern::core::config;
use lectern::deck;
use lectern::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "lectern", about = "Terminal slide-deck presenter")]
struct Args {
    /// Start on this topic (1-indexed)
    #[arg(short, long)]
    topic: Option<usize>,

    /// Print the topic list and exit
    #[arg(long)]
    list_topics: bool,

    /// Skip the welcome screen
    #[arg(long)]
    no_welcome: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to lectern.log in current directory.
    // The terminal itself belongs to the TUI, so nothing may log to it.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("lectern.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let deck = deck::curriculum();

    if args.list_topics {
        println!("{}", deck.title);
        for (index, topic) in deck.topics().iter().enumerate() {
            println!(
                "{:>2}. {:<40} {:>8}  {} slides",
                index + 1,
                topic.name,
                topic.duration,
                topic.slides.len()
            );
        }
        return Ok(());
    }

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("lectern: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&config, args.topic, args.no_welcome);

    if let Some(start) = resolved.start_topic
        && start >= deck.topic_count()
    {
        eprintln!(
            "lectern: topic {} does not exist (the deck has {} topics)",
            start + 1,
            deck.topic_count()
        );
        std::process::exit(1);
    }

    log::info!("Lectern starting up with {} topics", deck.topic_count());

    tui::run(deck, resolved)
}
