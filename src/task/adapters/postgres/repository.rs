//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{PersistedTaskData, Task, TaskId, TaskPatch, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
///
/// Every operation runs on the blocking thread pool and commits as a single
/// implicit transaction; failures roll back and surface as
/// [`TaskRepositoryError::Storage`].
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::storage)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::storage)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::storage)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_newest_first(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .order((tasks::created_at.desc(), tasks::id.desc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::storage)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_recent_duplicate(
        &self,
        title: &TaskTitle,
        description: Option<&str>,
        since: DateTime<Utc>,
    ) -> TaskRepositoryResult<Option<Task>> {
        let lookup_title = title.as_str().to_owned();
        let lookup_description = description.map(ToOwned::to_owned);
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::title.eq(lookup_title))
                .filter(tasks::description.is_not_distinct_from(lookup_description))
                .filter(tasks::created_at.ge(since))
                .order((tasks::created_at.desc(), tasks::id.desc()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::storage)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn insert(
        &self,
        title: &TaskTitle,
        description: Option<&str>,
    ) -> TaskRepositoryResult<Task> {
        let new_row = NewTaskRow {
            title: title.as_str().to_owned(),
            description: description.map(ToOwned::to_owned),
        };
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::storage)?;
            row_to_task(row)
        })
        .await
    }

    async fn apply_patch(&self, id: TaskId, patch: &TaskPatch) -> TaskRepositoryResult<Task> {
        let changeset = TaskChangeset {
            title: patch.title.as_ref().map(|title| title.as_str().to_owned()),
            description: patch.description.clone(),
            completed: patch.completed,
        };
        self.run_blocking(move |connection| {
            // updated_at comes from the database clock, the same authority
            // that stamps created_at on insert.
            let row = diesel::update(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .set((&changeset, tasks::updated_at.eq(diesel::dsl::now)))
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::storage)?
                .ok_or(TaskRepositoryError::NotFound(id))?;
            row_to_task(row)
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::storage)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title: persisted_title,
        description,
        completed,
        created_at,
        updated_at,
    } = row;

    // A title that fails domain validation here means the row was written
    // outside this repository; surface it as a storage fault.
    let title = TaskTitle::new(persisted_title).map_err(TaskRepositoryError::storage)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        title,
        description,
        completed,
        created_at,
        updated_at,
    }))
}
