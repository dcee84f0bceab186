//! Command-line argument definitions using clap.
//!
//! Argument structs carry clap attributes only; each converts into the core
//! parameter type it stands for:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::civil::Date;
use lectio_core::{CreatePlan, PartitionRule, PlanType, ProgressMode};

/// Time-based reading plan tracker
///
/// Lectio spreads a range of books over a date window, balancing each day by
/// estimated reading time, and tracks which chapters have been read.
#[derive(Parser)]
#[command(version, about, name = "lectio")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/lectio/lectio.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Treat this date (YYYY-MM-DD) as today instead of the system date
    #[arg(long, global = true)]
    pub today: Option<Date>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without a command, today's reading is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the reading plan
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Show today's chapters
    #[command(alias = "t")]
    Today,
    /// Mark a chapter as read
    #[command(alias = "r")]
    Read(ChapterArgs),
    /// Mark a chapter as unread
    #[command(alias = "u")]
    Unread(ChapterArgs),
    /// Show the status of a book's chapters
    #[command(alias = "s")]
    Status(StatusArgs),
    /// Show progress and statistics for the current plan
    Progress,
    /// Clear all read status
    Reset(ConfirmArgs),
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan, replacing the current one
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// Show the current plan and its schedule
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Delete the current plan; read status is kept
    #[command(alias = "d")]
    Delete(ConfirmArgs),
    /// List the available plan types
    Types,
}

/// Create a new plan
#[derive(ClapArgs)]
pub struct CreatePlanArgs {
    #[arg(help = "Books to cover: full_bible, old_testament, new_testament, pentateuch, \
                  psalms, gospels, wisdom, prophets or pauline")]
    pub plan_type: PlanType,
    #[arg(long, help = "First day of the plan (YYYY-MM-DD)")]
    pub start: Date,
    #[arg(long, help = "Last day of the plan, inclusive (YYYY-MM-DD)")]
    pub end: Date,
    #[arg(
        long,
        default_value = "chapters",
        help = "How progress is measured: chapters or time"
    )]
    pub progress_mode: ProgressMode,
    #[arg(
        long,
        default_value = "fill",
        help = "How days are filled: fill (reach the daily budget) or within (never exceed it)"
    )]
    pub partition: PartitionRule,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan {
            plan_type: val.plan_type,
            start_date: val.start,
            end_date: val.end,
            progress_mode: val.progress_mode,
            partition_rule: val.partition,
        }
    }
}

#[derive(ClapArgs)]
pub struct ShowPlanArgs {
    #[arg(long, help = "List every day of the schedule")]
    pub all: bool,
}

/// A chapter given as book and chapter number
#[derive(ClapArgs)]
pub struct ChapterArgs {
    #[arg(help = "Book index (1-66), abbreviation or name")]
    pub book: String,
    #[arg(help = "Chapter number")]
    pub chapter: u16,
}

#[derive(ClapArgs)]
pub struct StatusArgs {
    #[arg(help = "Book index (1-66), abbreviation or name")]
    pub book: String,
    #[arg(help = "Limit output to one chapter")]
    pub chapter: Option<u16>,
}

#[derive(ClapArgs)]
pub struct ConfirmArgs {
    #[arg(long, help = "Required to perform this destructive action")]
    pub confirm: bool,
}
