//! Repository operations over any `TaskStore`. Each operation decodes the
//! full store, mutates in memory, then re-encodes and rewrites the store.

use std::sync::Arc;

use tasktrack_core::{
    store::TaskStore,
    tasks::{Task, TaskError, TaskRepository, TaskStatus},
};
use tracing::instrument;

/// Task repository backed by a `TaskStore` holding one JSON array.
pub struct StoreTaskRepo<S: TaskStore> {
    store: Arc<S>,
}

impl<S: TaskStore> StoreTaskRepo<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    fn load(&self) -> Result<Vec<Task>, TaskError> {
        let contents = self.store.read_all()?;
        serde_json::from_str(&contents).map_err(|err| TaskError::Decode {
            reason: err.to_string(),
        })
    }

    fn save(&self, tasks: &[Task]) -> Result<(), TaskError> {
        let contents = serde_json::to_string(tasks).map_err(|err| TaskError::Decode {
            reason: err.to_string(),
        })?;
        self.store.write_all(&contents)?;
        Ok(())
    }

    /// Mutate the first task matching `id` and persist, or report not-found
    /// without touching the store.
    fn mutate_by_id(
        &self,
        id: u64,
        apply: impl FnOnce(&mut Task),
    ) -> Result<Task, TaskError> {
        let mut tasks = self.load()?;
        let mut updated: Option<Task> = None;
        for task in &mut tasks {
            if task.id == id {
                apply(task);
                updated = Some(task.clone());
                break;
            }
        }
        let updated = updated.ok_or(TaskError::NotFound { id })?;
        self.save(&tasks)?;
        Ok(updated)
    }
}

fn next_id(tasks: &[Task]) -> u64 {
    tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
}

impl<S: TaskStore> TaskRepository for StoreTaskRepo<S> {
    #[instrument(skip(self))]
    fn list(&self, filter: Option<&str>) -> Result<Vec<Task>, TaskError> {
        let tasks = self.load()?;
        Ok(match filter {
            Some(status) => tasks
                .into_iter()
                .filter(|t| t.status.as_str() == status)
                .collect(),
            None => tasks,
        })
    }

    #[instrument(skip(self, description))]
    fn create(&self, description: String) -> Result<Task, TaskError> {
        let mut tasks = self.load()?;
        let task = Task::new(next_id(&tasks), description);
        tasks.push(task.clone());
        self.save(&tasks)?;
        Ok(task)
    }

    #[instrument(skip(self, description))]
    fn update_description(&self, id: u64, description: String) -> Result<Task, TaskError> {
        self.mutate_by_id(id, |task| task.description = description)
    }

    #[instrument(skip(self))]
    fn delete(&self, id: u64) -> Result<(), TaskError> {
        let mut tasks = self.load()?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Err(TaskError::NotFound { id });
        }
        self.save(&tasks)
    }

    #[instrument(skip(self))]
    fn set_status(&self, id: u64, status: TaskStatus) -> Result<Task, TaskError> {
        self.mutate_by_id(id, |task| task.status = status)
    }
}
