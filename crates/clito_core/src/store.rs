//! The task list and its load/mutate/save cycle.
//!
//! A [`TaskStore`] is opened once per invocation, mutated at most once, and
//! written back in full after every mutation. There is no locking between
//! processes: two invocations that load then save race and the last save wins.

use crate::error::AppError;
use crate::model::Task;
use crate::storage::json_store;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Result of a mutating operation.
///
/// The in-memory change has already happened; `saved` tells whether it
/// reached the document. A failed save is not rolled back.
#[derive(Debug)]
pub struct Mutation {
    pub task: Task,
    pub saved: Result<(), AppError>,
}

#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Loads the document at `path`. Absent or unreadable documents give an
    /// empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let tasks = json_store::load_tasks_or_default(&path);
        Self { path, tasks }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn save(&self) -> Result<(), AppError> {
        json_store::save_tasks(&self.path, &self.tasks)
    }

    pub fn add(&mut self, description: &str) -> Result<Mutation, AppError> {
        let task = Task::new(self.next_id(), description, now_timestamp()?);
        self.tasks.push(task.clone());
        Ok(Mutation {
            task,
            saved: self.save(),
        })
    }

    /// Tasks in insertion order, skipping completed ones unless asked for.
    pub fn list(&self, include_completed: bool) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(move |task| include_completed || !task.completed)
    }

    pub fn complete(&mut self, id: u64) -> Result<Mutation, AppError> {
        let index = self.position(id).ok_or(AppError::NotFound(id))?;
        let completed_at = now_timestamp()?;

        let task = &mut self.tasks[index];
        task.mark_completed(completed_at);
        let task = task.clone();

        Ok(Mutation {
            task,
            saved: self.save(),
        })
    }

    pub fn remove(&mut self, id: u64) -> Result<Mutation, AppError> {
        let index = self.position(id).ok_or(AppError::NotFound(id))?;
        let task = self.tasks.remove(index);

        Ok(Mutation {
            task,
            saved: self.save(),
        })
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    // max of an empty store is 0, so ids restart at 1 once everything is removed
    fn next_id(&self) -> u64 {
        self.tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1
    }
}

fn now_timestamp() -> Result<String, AppError> {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .format(&Rfc3339)
        .map_err(|err| AppError::invalid_data(err.to_string()))
}
