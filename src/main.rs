mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use schedkit_core::notice::NoticeKind;
use schedkit_core::order::MoveDirection;

#[derive(Parser)]
#[command(name = "schedkit")]
#[command(about = "Compose scheduling email notices and manage event-type ordering")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose an organizer notice from an event description
    Compose {
        /// Path to the event JSON file
        event: PathBuf,

        /// Which notice to compose
        #[arg(short, long, default_value = "cancelled")]
        kind: Kind,

        /// Cancellation/reschedule reason included in the body
        #[arg(short, long)]
        reason: Option<String>,

        /// Where to write the ICS attachment
        #[arg(short, long, default_value = "event.ics")]
        out: PathBuf,
    },
    /// Move an item in an ordered list and print the persistence payload
    Order {
        /// Path to the ordered-items JSON file
        file: PathBuf,

        /// Index of the item to move
        #[arg(short, long)]
        index: usize,

        /// Direction to move the item
        #[arg(short, long)]
        direction: Direction,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Scheduled,
    Cancelled,
    Rescheduled,
}

impl From<Kind> for NoticeKind {
    fn from(kind: Kind) -> NoticeKind {
        match kind {
            Kind::Scheduled => NoticeKind::Scheduled,
            Kind::Cancelled => NoticeKind::Cancelled,
            Kind::Rescheduled => NoticeKind::Rescheduled,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Direction {
    Up,
    Down,
}

impl From<Direction> for MoveDirection {
    fn from(direction: Direction) -> MoveDirection {
        match direction {
            Direction::Up => MoveDirection::Up,
            Direction::Down => MoveDirection::Down,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Compose {
            event,
            kind,
            reason,
            out,
        } => commands::compose::run(&event, kind.into(), reason.as_deref(), &out).await,
        Commands::Order {
            file,
            index,
            direction,
        } => commands::order::run(&file, index, direction.into()).await,
    }
}
