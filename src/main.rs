//! taskdesk CLI: host front-end for the task management engine.
//!
//! Each subcommand is one engine operation: load the task file, apply the
//! operation, save if it mutated anything, print the result. The engine
//! reports errors as values; this layer turns them into diagnostics.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};

use taskdesk::codec;
use taskdesk::engine::{Engine, EngineConfig};
use taskdesk::notify::CRITICAL_WINDOW_DAYS;
use taskdesk::task::{DATE_FORMAT, Priority, Task};

#[derive(Parser)]
#[command(name = "taskdesk", version, about = "Task tracker with due-date notifications")]
struct Cli {
    /// Task file to operate on.
    #[arg(long, global = true, default_value = codec::DEFAULT_DATA_FILE)]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a task and save.
    Add {
        /// Task title.
        title: String,

        /// Free-text description.
        #[arg(long, default_value = "")]
        description: String,

        /// Due date (dd/MM/yyyy). Must be in the future.
        #[arg(long)]
        due: Option<String>,

        /// Task priority.
        #[arg(long, value_enum, default_value = "high")]
        priority: PriorityArg,
    },

    /// List tasks, optionally sorted by due date.
    List {
        /// Sort by due date; dateless tasks always come last.
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,
    },

    /// Remove a task by its list position (1-based).
    Remove { position: usize },

    /// Mark a task as done by its list position (1-based).
    Done { position: usize },

    /// Find tasks whose title matches exactly (case-insensitive).
    Search { title: String },

    /// Filter tasks by a regex over the title and due-date columns.
    Filter { pattern: String },

    /// Show tasks due within the next 7 days.
    Notify,

    /// Export all tasks as JSON.
    Export,
}

#[derive(Clone, Copy, ValueEnum)]
enum PriorityArg {
    High,
    Medium,
    Low,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::High => Priority::High,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::Low => Priority::Low,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SortOrder {
    Asc,
    Desc,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let today = Local::now().date_naive();

    let mut engine = Engine::new(EngineConfig {
        data_file: cli.file.clone(),
    })?;
    if cli.file.exists() {
        engine.load()?;
    }

    match cli.command {
        Commands::Add {
            title,
            description,
            due,
            priority,
        } => {
            let due_date = match due {
                Some(token) => Some(parse_future_date(&token, today)?),
                None => None,
            };
            engine.add(Task::new(title, description, due_date, priority.into()));
            engine.save()?;
            println!("Task added ({} total).", engine.len());
        }

        Commands::List { sort } => {
            let tasks = match sort {
                Some(SortOrder::Asc) => engine.sorted_by_due_date(true),
                Some(SortOrder::Desc) => engine.sorted_by_due_date(false),
                None => engine.list(),
            };
            print_tasks(&tasks);
        }

        Commands::Remove { position } => {
            let id = id_at_position(&engine, position)?;
            engine.remove(id);
            engine.save()?;
            println!("Task {position} removed ({} left).", engine.len());
        }

        Commands::Done { position } => {
            let id = id_at_position(&engine, position)?;
            engine.mark_done(id);
            engine.save()?;
            println!("Task {position} marked as done.");
            if !engine.has_alerts(today) {
                println!("No unresolved tasks due within {CRITICAL_WINDOW_DAYS} days.");
            }
        }

        Commands::Search { title } => {
            print_tasks(&engine.search_by_title(&title));
        }

        Commands::Filter { pattern } => {
            print_tasks(&engine.filter(&pattern)?);
        }

        Commands::Notify => {
            let critical = engine.notifications(today);
            if critical.is_empty() {
                println!("No tasks due within {CRITICAL_WINDOW_DAYS} days.");
            } else {
                println!("Task(s) due within {CRITICAL_WINDOW_DAYS} days:");
                for task in &critical {
                    println!("  - {task}");
                }
                if engine.has_alerts(today) {
                    println!("ALERT: unresolved tasks in the window.");
                }
            }
        }

        Commands::Export => {
            let json = serde_json::to_string_pretty(&engine.snapshot()).into_diagnostic()?;
            println!("{json}");
        }
    }

    Ok(())
}

fn parse_future_date(token: &str, today: NaiveDate) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(token, DATE_FORMAT)
        .map_err(|_| miette::miette!("invalid date `{token}`, expected dd/MM/yyyy"))?;
    if date < today {
        return Err(miette::miette!("due date {token} is in the past"));
    }
    Ok(date)
}

fn id_at_position(engine: &Engine, position: usize) -> Result<taskdesk::task::TaskId> {
    engine
        .snapshot()
        .get(position.wrapping_sub(1))
        .map(|row| row.id)
        .ok_or_else(|| {
            miette::miette!(
                "no task at position {position} (have {} task(s))",
                engine.len()
            )
        })
}

fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks.");
        return;
    }
    for (index, task) in tasks.iter().enumerate() {
        println!(
            "{:>3}. [{}] {}",
            index + 1,
            task.priority,
            task
        );
    }
}
