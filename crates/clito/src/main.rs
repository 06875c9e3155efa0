use clap::{CommandFactory, Parser};
use clito::cli::{Cli, Command};
use clito_core::config::{self, Config, ConfigOverrides, Palette};
use clito_core::error::AppError;
use clito_core::model::Task;
use clito_core::storage::json_store;
use clito_core::store::{Mutation, TaskStore};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "CLITO_LOG";

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_task_json(task: &Task) -> Result<(), AppError> {
    let json = serde_json::to_string(task).map_err(|err| AppError::invalid_data(err.to_string()))?;
    println!("{json}");
    Ok(())
}

/// `total` counts the whole store, so an empty store (`0`) stays
/// distinguishable from one whose tasks were all filtered out.
fn print_tasks_json<'a>(tasks: impl Iterator<Item = &'a Task>, total: usize) {
    let tasks: Vec<&Task> = tasks.collect();
    let json = serde_json::json!({
        "total": total,
        "tasks": tasks,
    });
    println!("{json}");
}

fn print_not_found_json(err: &AppError, id: u64) {
    let json = serde_json::json!({
        "error": err.code(),
        "id": id,
        "message": err.message(),
    });
    println!("{json}");
}

fn print_tasks_plain<'a>(tasks: impl Iterator<Item = &'a Task>, palette: &Palette) {
    println!();
    println!("Todos:");
    println!("{}", "-".repeat(50));
    for task in tasks {
        if task.completed {
            println!(
                "{} [{}] {}",
                palette.accentize("✓"),
                task.id,
                palette.mutedize(&task.description)
            );
        } else {
            println!("○ [{}] {}", task.id, task.description);
        }
    }
    println!();
}

/// Prints the outcome, then surfaces a failed save so the caller can report it.
fn report_mutation(mutation: Mutation, verb: &str, json: bool) -> Result<(), AppError> {
    if json {
        print_task_json(&mutation.task)?;
    } else {
        println!("{verb} todo: {}", mutation.task.description);
    }
    mutation.saved
}

fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::invalid_input(message)
}

fn print_help() {
    let mut cmd = Cli::command();
    let help = cmd.render_help();
    println!("{help}");
}

fn resolve_config(raw_overrides: &[String]) -> Result<(Config, ConfigOverrides), AppError> {
    let loaded = config::load_config_with_fallback();
    if let Some(err) = loaded.error.as_ref() {
        warn!(error = %err, "ignoring unreadable config");
    }

    let mut overrides = ConfigOverrides::default();
    for raw in raw_overrides {
        overrides.apply(raw)?;
    }

    let merged = config::merge_overrides(&loaded.config, &overrides);
    Ok((merged, overrides))
}

fn run_command(cli: Cli) -> Result<(), AppError> {
    let Some(command) = cli.command else {
        print_help();
        return Ok(());
    };

    let (config, overrides) = resolve_config(&cli.config_override)?;
    // command-line locations outrank CLITO_STORE_PATH and the config file
    let explicit = cli.file.or(overrides.store_path);
    let path = json_store::store_path(explicit.as_deref(), &config);
    let mut store = TaskStore::open(&path);
    debug!(path = %store.path().display(), tasks = store.len(), "opened task store");

    match command {
        Command::Add { description } => {
            let mutation = store.add(&description)?;
            report_mutation(mutation, "Added", cli.json)?;
        }
        Command::List { pending } => {
            let tasks = store.list(!pending);
            if cli.json {
                print_tasks_json(tasks, store.len());
            } else if store.is_empty() {
                println!("No todos found.");
            } else {
                let palette = config::palette_for_theme(config.theme.as_deref());
                print_tasks_plain(tasks, &palette);
            }
        }
        Command::Complete { id } => {
            let mutation = store.complete(id)?;
            report_mutation(mutation, "Completed", cli.json)?;
        }
        Command::Remove { id } => {
            let mutation = store.remove(id)?;
            report_mutation(mutation, "Removed", cli.json)?;
        }
    }

    Ok(())
}

fn main() {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprintln!("ERROR: {}", normalize_parse_error(err));
            std::process::exit(1);
        }
    };

    let json = cli.json;
    match run_command(cli) {
        Ok(()) => {}
        Err(AppError::NotFound(id)) => {
            let err = AppError::NotFound(id);
            if json {
                print_not_found_json(&err, id);
            } else {
                println!("{}", err.message());
            }
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("ERROR: {}", err);
            std::process::exit(1);
        }
    }
}
