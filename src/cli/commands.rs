use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use crate::archive::DialogueBuilder;
use crate::config::{DialogueConfig, MINUTES};
use crate::utils::{display_line, format_path_with_tilde};

#[derive(Parser)]
#[command(name = "messenger-dialogues")]
#[command(version = "0.1.0")]
#[command(about = "Split Messenger archive exports into dialogues", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// TOML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Sender name whose messages are tagged as your own
    #[arg(long, global = true, value_name = "NAME")]
    pub me: Option<String>,

    /// Skip chunks listing more participants than this
    #[arg(long, global = true, value_name = "N")]
    pub max_participants: Option<usize>,

    /// Start a new dialogue after a silence longer than this many minutes
    #[arg(long, global = true, value_name = "MINUTES")]
    pub max_delay_minutes: Option<i64>,

    /// Log and skip chunk files that are not valid JSON instead of aborting
    #[arg(long, global = true)]
    pub skip_malformed: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count the dialogues and messages in an inbox
    Stats {
        /// Inbox directory holding one directory per conversation
        inbox: PathBuf,
    },
    /// Print the dialogues of a single conversation directory
    Conversation {
        /// Conversation directory holding message_*.json files
        directory: PathBuf,

        /// Print only the dialogue at this position (0-based)
        #[arg(long)]
        index: Option<usize>,

        /// Wrap each dialogue in the start/end-of-sequence tokens
        #[arg(long)]
        framed: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let Some(command) = &cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let config = resolve_config(&cli)?;

    match command {
        Commands::Stats { inbox } => show_stats(inbox, &config),
        Commands::Conversation { directory, index, framed } => {
            show_conversation(directory, *index, *framed, &config)
        }
    }
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    // Already initialised when run more than once in one process
    let _ = builder.target(env_logger::Target::Stderr).try_init();
}

/// Config file (explicit or default location) with command-line overrides applied
fn resolve_config(cli: &Cli) -> Result<DialogueConfig> {
    let mut config = DialogueConfig::load_or_default(cli.config.as_deref())?;

    if let Some(me) = &cli.me {
        config.self_name = me.clone();
    }
    if let Some(max_participants) = cli.max_participants {
        config.max_participants = max_participants;
    }
    if let Some(minutes) = cli.max_delay_minutes {
        if minutes < 0 {
            bail!("--max-delay-minutes must not be negative (got {})", minutes);
        }
        config.max_message_delay_ms = minutes.saturating_mul(MINUTES);
    }
    if cli.skip_malformed {
        config.skip_malformed_files = true;
    }

    Ok(config)
}

fn show_stats(inbox: &Path, config: &DialogueConfig) -> Result<()> {
    let (_, summary) = DialogueBuilder::new(config).build_all(inbox)?;

    println!("Messenger Dialogue Statistics");
    println!("=============================");
    println!("Conversations: {}", summary.conversations);
    println!("Dialogues: {}", summary.dialogues);
    println!("Messages: {}", summary.messages);
    println!();
    println!("Inbox: {}", format_path_with_tilde(inbox));

    Ok(())
}

fn show_conversation(
    directory: &Path,
    index: Option<usize>,
    framed: bool,
    config: &DialogueConfig,
) -> Result<()> {
    let dialogues = DialogueBuilder::new(config).dialogues_for_directory(directory)?;
    let total = dialogues.len();

    let selected: Vec<(usize, _)> = match index {
        Some(i) if i >= total => {
            bail!("Dialogue index {} out of range ({} dialogues)", i, total)
        }
        Some(i) => dialogues.into_iter().enumerate().skip(i).take(1).collect(),
        None => dialogues.into_iter().enumerate().collect(),
    };

    for (i, dialogue) in selected {
        let started = dialogue
            .started_at_utc()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| dialogue.started_at.to_string());
        println!("Dialogue {} of {} ({})", i + 1, total, started);

        let lines =
            if framed { dialogue.framed(&config.tokens) } else { dialogue.into_lines() };
        for line in lines {
            println!("  {}", display_line(&line));
        }
    }

    Ok(())
}
