use std::process::ExitCode;

use color_eyre::Result;
use tasktrack_core::{
    store::TaskStore,
    tasks::{TaskError, TaskRepository, TaskStatus},
};
use tasktrack_repo::StoreTaskRepo;
use tracing::error;

use crate::{cli::Command, config, storage};

const EXIT_OK: u8 = 0;
const EXIT_FAILURE: u8 = 1;
const EXIT_USAGE: u8 = 2;

/// Execute a subcommand against the configured store.
///
/// Not-found is a reported outcome and exits zero; unknown commands exit 2;
/// store and decode failures exit 1.
pub fn handle(cmd: Command, config: &config::Config) -> Result<ExitCode> {
    Ok(ExitCode::from(run(cmd, config)))
}

fn run(cmd: Command, config: &config::Config) -> u8 {
    if let Command::External(args) = &cmd {
        let name = args.first().map(String::as_str).unwrap_or("");
        println!("Unknown command: {name}");
        return EXIT_USAGE;
    }

    let store = storage::store_from_config(config);
    if let Err(err) = store.ensure_exists() {
        error!(%err, "could not create task store");
        eprintln!("Error creating task store: {err}");
        return EXIT_FAILURE;
    }

    let repo = StoreTaskRepo::new(store);
    match dispatch(cmd, &repo) {
        Ok(()) => EXIT_OK,
        Err(TaskError::NotFound { id }) => {
            println!("Task not found: {id}");
            EXIT_OK
        }
        Err(err) => {
            error!(%err, "command failed");
            eprintln!("Error: {err}");
            EXIT_FAILURE
        }
    }
}

fn dispatch(cmd: Command, repo: &impl TaskRepository) -> Result<(), TaskError> {
    match cmd {
        Command::Add { description } => {
            let task = repo.create(description)?;
            println!("Task added successfully (ID: {})", task.id);
        }
        Command::Update { id, description } => {
            let task = repo.update_description(id, description)?;
            println!("Task updated successfully (ID: {})", task.id);
        }
        Command::Delete { id } => {
            repo.delete(id)?;
            println!("Task deleted successfully (ID: {id})");
        }
        Command::MarkInProgress { id } => {
            repo.set_status(id, TaskStatus::InProgress)?;
            println!("Task status updated successfully (ID: {id})");
        }
        Command::MarkDone { id } => {
            repo.set_status(id, TaskStatus::Done)?;
            println!("Task status updated successfully (ID: {id})");
        }
        Command::List { status } => {
            let tasks = repo.list(status.as_deref())?;
            if tasks.is_empty() {
                println!("No tasks found.");
            } else {
                for task in tasks {
                    println!("{}. {} ({})", task.id, task.description, task.status);
                }
            }
        }
        // Rejected in `run` before the store is touched.
        Command::External(_) => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::config::Config;
    use tasktrack_core::store::InMemoryTaskStore;

    fn temp_config(dir: &tempfile::TempDir) -> Config {
        Config {
            store_path: Some(dir.path().join("tasks.json")),
        }
    }

    #[test]
    fn add_creates_store_file_and_first_task() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = temp_config(&dir);

        let code = run(
            Command::Add {
                description: "buy milk".into(),
            },
            &config,
        );
        assert_eq!(code, EXIT_OK);

        let contents =
            fs::read_to_string(dir.path().join("tasks.json")).expect("store file exists");
        assert_eq!(
            contents,
            r#"[{"id":1,"description":"buy milk","status":"todo"}]"#
        );
    }

    #[test]
    fn missing_id_is_reported_but_exits_zero() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = temp_config(&dir);

        let code = run(
            Command::Update {
                id: 99,
                description: "x".into(),
            },
            &config,
        );
        assert_eq!(code, EXIT_OK);

        // The ensured-empty store stays byte-for-byte untouched.
        let contents = fs::read_to_string(dir.path().join("tasks.json")).expect("read");
        assert_eq!(contents, "[]");
    }

    #[test]
    fn unknown_command_exits_two_without_touching_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = temp_config(&dir);

        let code = run(Command::External(vec!["archive".into()]), &config);
        assert_eq!(code, EXIT_USAGE);
        assert!(!dir.path().join("tasks.json").exists());
    }

    #[test]
    fn delete_last_task_leaves_empty_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = temp_config(&dir);

        run(
            Command::Add {
                description: "buy milk".into(),
            },
            &config,
        );
        let code = run(Command::Delete { id: 1 }, &config);
        assert_eq!(code, EXIT_OK);

        let contents = fs::read_to_string(dir.path().join("tasks.json")).expect("read");
        assert_eq!(contents, "[]");
        assert_eq!(run(Command::List { status: None }, &config), EXIT_OK);
    }

    #[test]
    fn corrupt_store_exits_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = temp_config(&dir);
        fs::write(dir.path().join("tasks.json"), "not json").expect("seed");

        let code = run(Command::List { status: None }, &config);
        assert_eq!(code, EXIT_FAILURE);
    }

    #[test]
    fn mark_done_round_trip_through_dispatch() {
        let store = InMemoryTaskStore::new();
        let repo = StoreTaskRepo::new(store.clone());

        dispatch(
            Command::Add {
                description: "ship".into(),
            },
            &repo,
        )
        .expect("add");
        dispatch(Command::MarkDone { id: 1 }, &repo).expect("mark");

        assert_eq!(
            store.read_all().expect("read"),
            r#"[{"id":1,"description":"ship","status":"done"}]"#
        );
    }
}
