//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::account::domain::UserId;
use crate::project::domain::ProjectId;
use crate::task::{
    domain::{PersistedTaskData, Task, TaskId, TaskStatus, TaskTitle},
    ports::{TaskFilter, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use uuid::Uuid;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
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
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let title = task.title().as_str().to_owned();
        let description = task.description().map(str::to_owned);
        let assignee_id = task.assignee().map(UserId::into_inner);
        let status = task.status().as_str().to_owned();
        let due_date = task.due_date();

        self.run_blocking(move |connection| {
            let updated =
                diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                    .set((
                        tasks::title.eq(title),
                        tasks::description.eq(description),
                        tasks::assignee_id.eq(assignee_id),
                        tasks::status.eq(status),
                        tasks::due_date.eq(due_date),
                    ))
                    .execute(connection)
                    .map_err(TaskRepositoryError::persistence)?;
            if updated == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>> {
        let scope: Option<Vec<Uuid>> = filter
            .project_ids
            .as_ref()
            .map(|ids| ids.iter().copied().map(ProjectId::into_inner).collect());
        let project = filter.project.map(ProjectId::into_inner);
        let status = filter.status.map(|value| value.as_str().to_owned());

        self.run_blocking(move |connection| {
            let mut query = tasks::table.into_boxed();
            if let Some(ids) = scope {
                query = query.filter(tasks::project_id.eq_any(ids));
            }
            if let Some(project_id) = project {
                query = query.filter(tasks::project_id.eq(project_id));
            }
            if let Some(status_value) = status {
                query = query.filter(tasks::status.eq(status_value));
            }

            let rows = query
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete_for_project(&self, project_id: ProjectId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(tasks::table.filter(tasks::project_id.eq(project_id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn clear_assignee(&self, user_id: UserId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            diesel::update(tasks::table.filter(tasks::assignee_id.eq(user_id.into_inner())))
                .set(tasks::assignee_id.eq(None::<Uuid>))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn clear_assignee_in_project(
        &self,
        project_id: ProjectId,
        user_id: UserId,
    ) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            diesel::update(
                tasks::table
                    .filter(tasks::project_id.eq(project_id.into_inner()))
                    .filter(tasks::assignee_id.eq(user_id.into_inner())),
            )
            .set(tasks::assignee_id.eq(None::<Uuid>))
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        project_id: task.project_id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().map(str::to_owned),
        assignee_id: task.assignee().map(UserId::into_inner),
        status: task.status().as_str().to_owned(),
        due_date: task.due_date(),
        created_at: task.created_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let title = TaskTitle::new(row.title).map_err(TaskRepositoryError::persistence)?;
    let status =
        TaskStatus::try_from(row.status.as_str()).map_err(TaskRepositoryError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        project_id: ProjectId::from_uuid(row.project_id),
        title,
        description: row.description,
        assignee: row.assignee_id.map(UserId::from_uuid),
        status,
        due_date: row.due_date,
        created_at: row.created_at,
    };
    Ok(Task::from_persisted(data))
}
