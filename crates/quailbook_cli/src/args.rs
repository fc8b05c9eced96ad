//! Command-line surface.
//!
//! # Invariants
//! - Required form fields (`--name`, `--count`, `--title`) are enforced here;
//!   the core store does not re-validate them.
//! - Dates, times and enum values go through the core `FromStr` impls, so the
//!   CLI accepts exactly what the store persists.

use clap::{builder::BoolishValueParser, ArgGroup, Args, Parser, Subcommand, ValueEnum};
use quailbook_core::{
    CalendarDate, ClockTime, EggDraft, Health, QuailDraft, QuailPatch, RecordId, Sex, TaskDraft,
    TaskKind,
};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(
    name = "quailbook",
    version,
    about = "Local record keeper for a quail flock",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Flock totals, today's tasks and recent activity.
    Dashboard,

    /// Quail records.
    Quail {
        #[command(subcommand)]
        cmd: QuailCmd,
    },

    /// Egg collection log.
    Eggs {
        #[command(subcommand)]
        cmd: EggsCmd,
    },

    /// Care tasks.
    Task {
        #[command(subcommand)]
        cmd: TaskCmd,
    },

    /// Month view of scheduled tasks, stepped from the current month.
    Calendar {
        #[arg(value_enum)]
        steps: Vec<CalendarStep>,
    },

    /// Assistant settings.
    Settings {
        #[command(subcommand)]
        cmd: SettingsCmd,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum QuailCmd {
    /// List all quails.
    #[command(alias = "ls")]
    List,
    /// Add a quail.
    Add(QuailAddArgs),
    /// Change fields of an existing quail.
    Edit(QuailEditArgs),
    /// Remove a quail after confirmation.
    #[command(alias = "rm")]
    Delete(QuailDeleteArgs),
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum EggsCmd {
    /// Log a collection.
    Add(EggsAddArgs),
    /// Ten most recent collections.
    #[command(alias = "ls")]
    List,
    /// Last seven days as a bar chart.
    Chart,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum TaskCmd {
    /// Schedule a task.
    Add(TaskAddArgs),
    /// Tasks dated today.
    Today,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SettingsCmd {
    /// Print the stored settings (key masked).
    Show,
    /// Update settings; omitted flags keep their current value.
    Set(SettingsSetArgs),
}

/// One calendar navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CalendarStep {
    Prev,
    Next,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct QuailAddArgs {
    #[arg(long, value_parser = parse_required_text)]
    pub name: String,

    #[arg(long)]
    pub breed: Option<String>,

    /// Acquisition date, YYYY-MM-DD (default: today).
    #[arg(long, value_parser = parse_value::<CalendarDate>)]
    pub date: Option<CalendarDate>,

    /// male | female | unknown
    #[arg(long, value_parser = parse_value::<Sex>)]
    pub sex: Option<Sex>,

    /// healthy | sick | recovering
    #[arg(long, value_parser = parse_value::<Health>)]
    pub health: Option<Health>,

    #[arg(long)]
    pub notes: Option<String>,
}

impl QuailAddArgs {
    pub fn into_draft(self) -> QuailDraft {
        QuailDraft {
            name: self.name,
            breed: self.breed,
            date: self.date,
            sex: self.sex,
            health: self.health,
            notes: self.notes,
        }
    }
}

#[derive(Args, Debug, PartialEq, Eq)]
#[command(group(
    ArgGroup::new("fields")
        .required(true)
        .multiple(true)
        .args(["name", "breed", "date", "sex", "health", "notes"])
))]
pub struct QuailEditArgs {
    pub id: RecordId,

    #[arg(long, value_parser = parse_required_text)]
    pub name: Option<String>,

    #[arg(long)]
    pub breed: Option<String>,

    #[arg(long, value_parser = parse_value::<CalendarDate>)]
    pub date: Option<CalendarDate>,

    #[arg(long, value_parser = parse_value::<Sex>)]
    pub sex: Option<Sex>,

    #[arg(long, value_parser = parse_value::<Health>)]
    pub health: Option<Health>,

    #[arg(long)]
    pub notes: Option<String>,
}

impl QuailEditArgs {
    pub fn into_patch(self) -> (RecordId, QuailPatch) {
        let patch = QuailPatch {
            name: self.name,
            breed: self.breed,
            date: self.date,
            sex: self.sex,
            health: self.health,
            notes: self.notes,
        };
        (self.id, patch)
    }
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct QuailDeleteArgs {
    pub id: RecordId,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long)]
    pub yes: bool,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct EggsAddArgs {
    #[arg(long)]
    pub count: u32,

    /// Collection date, YYYY-MM-DD (default: today).
    #[arg(long, value_parser = parse_value::<CalendarDate>)]
    pub date: Option<CalendarDate>,

    /// Collection time, HH:MM.
    #[arg(long, value_parser = parse_value::<ClockTime>)]
    pub time: Option<ClockTime>,

    #[arg(long)]
    pub notes: Option<String>,
}

impl EggsAddArgs {
    pub fn into_draft(self) -> EggDraft {
        EggDraft {
            count: self.count,
            date: self.date,
            time: self.time,
            notes: self.notes,
        }
    }
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct TaskAddArgs {
    #[arg(long, value_parser = parse_required_text)]
    pub title: String,

    #[arg(long, value_parser = parse_value::<CalendarDate>)]
    pub date: Option<CalendarDate>,

    #[arg(long, value_parser = parse_value::<ClockTime>)]
    pub time: Option<ClockTime>,

    /// feeding | cleaning | health | eggs | other
    #[arg(long = "type", value_parser = parse_value::<TaskKind>)]
    pub kind: Option<TaskKind>,

    #[arg(long)]
    pub notes: Option<String>,
}

impl TaskAddArgs {
    pub fn into_draft(self) -> TaskDraft {
        TaskDraft {
            title: self.title,
            date: self.date,
            time: self.time,
            kind: self.kind,
            notes: self.notes,
        }
    }
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct SettingsSetArgs {
    /// API key; an empty value removes the stored key.
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// on | off
    #[arg(long, value_parser = BoolishValueParser::new())]
    pub assistant: Option<bool>,
}

fn parse_value<T>(raw: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>().map_err(|err| err.to_string())
}

fn parse_required_text(raw: &str) -> Result<String, String> {
    if raw.trim().is_empty() {
        return Err("value must not be blank".to_string());
    }
    Ok(raw.to_string())
}
