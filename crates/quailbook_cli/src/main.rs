//! Quailbook command-line front end.
//!
//! # Responsibility
//! - Turn one command line into one store intent and print the resulting view.
//! - Own stdin/stdout; the core crate never touches the terminal.

mod args;
mod config;
mod render;

use args::{CalendarStep, Cli, Commands, EggsCmd, QuailCmd, SettingsCmd, TaskCmd};
use clap::Parser;
use config::CliConfig;
use log::warn;
use mockable::DefaultClock;
use quailbook_core::db::open_db;
use quailbook_core::{init_logging, FlockStore, KeyValueStore, SettingsService, SqliteKvStore};
use std::error::Error;
use std::io::{BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = CliConfig::from_env();
    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    match run(&config, cli.command) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CliConfig, command: Commands) -> Result<String, Box<dyn Error>> {
    let conn = open_db(&config.db_path)?;
    let kv = SqliteKvStore::new(&conn);

    match command {
        Commands::Settings { cmd } => run_settings_command(&kv, cmd),
        other => {
            let mut flock = FlockStore::open(&kv, Arc::new(DefaultClock))?;
            run_flock_command(&mut flock, other)
        }
    }
}

fn run_settings_command(
    kv: &impl KeyValueStore,
    cmd: SettingsCmd,
) -> Result<String, Box<dyn Error>> {
    let service = SettingsService::new(kv);
    match cmd {
        SettingsCmd::Show => Ok(render::render_settings(&service.load()?)),
        SettingsCmd::Set(args) => {
            let current = service.load()?;
            let api_key = args.api_key.or(current.api_key).unwrap_or_default();
            let saved = service.save(&api_key, args.assistant.unwrap_or(current.use_assistant))?;
            Ok(format!("Settings saved.\n{}", render::render_settings(&saved)))
        }
    }
}

fn run_flock_command<S: KeyValueStore>(
    flock: &mut FlockStore<S>,
    command: Commands,
) -> Result<String, Box<dyn Error>> {
    let output = match command {
        Commands::Dashboard => render::render_dashboard(
            &flock.dashboard(),
            &flock.today_tasks(),
            &flock.recent_activity(),
        ),
        Commands::Quail { cmd } => match cmd {
            QuailCmd::List => render::render_quails(flock.quails()),
            QuailCmd::Add(args) => {
                let quail = flock.create_quail(args.into_draft())?;
                format!("Added quail #{} {}", quail.id, quail.name)
            }
            QuailCmd::Edit(args) => {
                let (id, patch) = args.into_patch();
                match flock.update_quail(id, patch)? {
                    Some(quail) => format!("Updated quail #{} {}", quail.id, quail.name),
                    None => String::new(),
                }
            }
            QuailCmd::Delete(args) => {
                let removed = if args.yes {
                    flock.delete_quail(args.id, &mut |_: &str| true)?
                } else {
                    flock.delete_quail(args.id, &mut prompt_yes_no)?
                };
                if removed {
                    format!("Deleted quail #{}", args.id)
                } else {
                    String::new()
                }
            }
        },
        Commands::Eggs { cmd } => match cmd {
            EggsCmd::Add(args) => {
                let record = flock.create_egg_record(args.into_draft())?;
                format!("Logged {} eggs on {}", record.count, record.date)
            }
            EggsCmd::List => render::render_egg_history(&flock.recent_eggs()),
            EggsCmd::Chart => {
                render::render_egg_chart(&flock.egg_histogram(), !flock.eggs().is_empty())
            }
        },
        Commands::Task { cmd } => match cmd {
            TaskCmd::Add(args) => {
                let task = flock.create_task(args.into_draft())?;
                format!("Added task #{} {} on {}", task.id, task.title, task.date)
            }
            TaskCmd::Today => render::render_tasks(&flock.today_tasks()),
        },
        Commands::Calendar { steps } => {
            let month = steps
                .into_iter()
                .fold(flock.calendar_month(), |_, step| match step {
                    CalendarStep::Prev => flock.calendar_prev(),
                    CalendarStep::Next => flock.calendar_next(),
                });
            render::render_calendar(&month)
        }
        Commands::Settings { .. } => String::new(),
    };
    Ok(output)
}

/// Asks on stdin; anything but `y`/`yes` declines.
fn prompt_yes_no(question: &str) -> bool {
    print!("{question} [y/N] ");
    if let Err(err) = std::io::stdout().flush() {
        warn!("event=confirm_prompt module=cli status=error error={err}");
        return false;
    }

    let mut answer = String::new();
    match std::io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        Err(err) => {
            warn!("event=confirm_prompt module=cli status=error error={err}");
            false
        }
    }
}
