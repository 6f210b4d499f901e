//! In-memory repository for task lifecycle tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{PersistedTaskData, Task, TaskId, TaskPatch, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Acts as the store: it assigns sequential identifiers and stamps records
/// from its clock, which tests may inject to control time.
#[derive(Clone)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

#[derive(Debug)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    next_id: i64,
}

impl Default for InMemoryTaskState {
    fn default() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty repository stamping records with the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty repository with an injected clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTaskState::default())),
            clock,
        }
    }

    fn read_state(&self) -> TaskRepositoryResult<std::sync::RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state
            .read()
            .map_err(|err| TaskRepositoryError::storage(std::io::Error::other(err.to_string())))
    }

    fn write_state(
        &self,
    ) -> TaskRepositoryResult<std::sync::RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state
            .write()
            .map_err(|err| TaskRepositoryError::storage(std::io::Error::other(err.to_string())))
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordering used for listing and duplicate tie-breaks: newest `created_at`
/// first, highest id first at equal timestamps.
fn newer_first(a: &Task, b: &Task) -> std::cmp::Ordering {
    b.created_at()
        .cmp(&a.created_at())
        .then(b.id().cmp(&a.id()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read_state()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_newest_first(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read_state()?;
        let mut tasks: Vec<Task> = state.tasks.values().cloned().collect();
        tasks.sort_by(newer_first);
        Ok(tasks)
    }

    async fn find_recent_duplicate(
        &self,
        title: &TaskTitle,
        description: Option<&str>,
        since: DateTime<Utc>,
    ) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read_state()?;
        let duplicate = state
            .tasks
            .values()
            .filter(|task| {
                task.title() == title
                    && task.description() == description
                    && task.created_at() >= since
            })
            .min_by(|a, b| newer_first(a, b))
            .cloned();
        Ok(duplicate)
    }

    async fn insert(
        &self,
        title: &TaskTitle,
        description: Option<&str>,
    ) -> TaskRepositoryResult<Task> {
        let now = self.clock.utc();
        let mut state = self.write_state()?;
        let id = TaskId::new(state.next_id);
        state.next_id += 1;

        let task = Task::from_persisted(PersistedTaskData {
            id,
            title: title.clone(),
            description: description.map(ToOwned::to_owned),
            completed: false,
            created_at: now,
            updated_at: now,
        });
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn apply_patch(&self, id: TaskId, patch: &TaskPatch) -> TaskRepositoryResult<Task> {
        let now = self.clock.utc();
        let mut state = self.write_state()?;
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.apply_patch(patch, now);
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write_state()?;
        state
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }
}
