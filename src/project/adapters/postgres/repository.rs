//! `PostgreSQL` repository implementation for project storage.
//!
//! The membership roster is stored in the `project_members` join table and
//! persisted together with the aggregate inside a transaction; `update`
//! rewrites the roster to match the aggregate.

use super::{
    models::{MemberRow, NewMemberRow, NewProjectRow, ProjectRow},
    schema::{project_members, projects},
};
use crate::account::domain::UserId;
use crate::project::{
    domain::{PersistedProjectData, Project, ProjectId, ProjectName},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::collections::HashMap;
use uuid::Uuid;

/// `PostgreSQL` connection pool type used by project adapters.
pub type ProjectPgPool = Pool<ConnectionManager<PgConnection>>;

impl From<DieselError> for ProjectRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

/// `PostgreSQL`-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: ProjectPgPool,
}

impl PostgresProjectRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ProjectPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ProjectRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProjectRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ProjectRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ProjectRepositoryError::persistence)?
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn store(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let project_id = project.id();
        let new_row = to_new_row(project);
        let member_rows = to_member_rows(project)?;

        self.run_blocking(move |connection| {
            connection.transaction(|conn| {
                diesel::insert_into(projects::table)
                    .values(&new_row)
                    .execute(conn)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            ProjectRepositoryError::DuplicateProject(project_id)
                        }
                        _ => ProjectRepositoryError::persistence(err),
                    })?;
                diesel::insert_into(project_members::table)
                    .values(&member_rows)
                    .execute(conn)?;
                Ok(())
            })
        })
        .await
    }

    async fn update(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let project_id = project.id();
        let name = project.name().as_str().to_owned();
        let description = project.description().map(str::to_owned);
        let member_rows = to_member_rows(project)?;

        self.run_blocking(move |connection| {
            connection.transaction(|conn| {
                let updated = diesel::update(
                    projects::table.filter(projects::id.eq(project_id.into_inner())),
                )
                .set((
                    projects::name.eq(name),
                    projects::description.eq(description),
                ))
                .execute(conn)?;
                if updated == 0 {
                    return Err(ProjectRepositoryError::NotFound(project_id));
                }

                diesel::delete(
                    project_members::table
                        .filter(project_members::project_id.eq(project_id.into_inner())),
                )
                .execute(conn)?;
                diesel::insert_into(project_members::table)
                    .values(&member_rows)
                    .execute(conn)?;
                Ok(())
            })
        })
        .await
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        self.run_blocking(move |connection| {
            let row = projects::table
                .filter(projects::id.eq(id.into_inner()))
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(ProjectRepositoryError::persistence)?;
            let Some(row) = row else {
                return Ok(None);
            };
            let mut rosters = load_rosters(connection, &[row.id])?;
            let members = rosters.remove(&row.id).unwrap_or_default();
            row_to_project(row, members).map(Some)
        })
        .await
    }

    async fn list_all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        self.run_blocking(move |connection| {
            let rows = projects::table
                .order((projects::created_at.asc(), projects::id.asc()))
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            assemble_projects(connection, rows)
        })
        .await
    }

    async fn list_for_member(&self, user_id: UserId) -> ProjectRepositoryResult<Vec<Project>> {
        self.run_blocking(move |connection| {
            let rows = projects::table
                .inner_join(project_members::table)
                .filter(project_members::user_id.eq(user_id.into_inner()))
                .order((projects::created_at.asc(), projects::id.asc()))
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            assemble_projects(connection, rows)
        })
        .await
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()> {
        self.run_blocking(move |connection| {
            connection.transaction(|conn| {
                diesel::delete(
                    project_members::table
                        .filter(project_members::project_id.eq(id.into_inner())),
                )
                .execute(conn)?;
                let deleted =
                    diesel::delete(projects::table.filter(projects::id.eq(id.into_inner())))
                        .execute(conn)?;
                if deleted == 0 {
                    return Err(ProjectRepositoryError::NotFound(id));
                }
                Ok(())
            })
        })
        .await
    }

    async fn remove_member_from_all(&self, user_id: UserId) -> ProjectRepositoryResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(
                project_members::table
                    .filter(project_members::user_id.eq(user_id.into_inner())),
            )
            .execute(connection)
            .map_err(ProjectRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn to_new_row(project: &Project) -> NewProjectRow {
    NewProjectRow {
        id: project.id().into_inner(),
        name: project.name().as_str().to_owned(),
        description: project.description().map(str::to_owned),
        created_at: project.created_at(),
    }
}

fn to_member_rows(project: &Project) -> ProjectRepositoryResult<Vec<NewMemberRow>> {
    project
        .members()
        .iter()
        .enumerate()
        .map(|(index, member)| {
            let position =
                i32::try_from(index).map_err(ProjectRepositoryError::persistence)?;
            Ok(NewMemberRow {
                project_id: project.id().into_inner(),
                user_id: member.into_inner(),
                position,
            })
        })
        .collect()
}

/// Loads membership rosters for the given projects, keyed by project ID and
/// ordered by roster position.
fn load_rosters(
    connection: &mut PgConnection,
    project_ids: &[Uuid],
) -> ProjectRepositoryResult<HashMap<Uuid, Vec<UserId>>> {
    let rows = project_members::table
        .filter(project_members::project_id.eq_any(project_ids.to_vec()))
        .order(project_members::position.asc())
        .select(MemberRow::as_select())
        .load::<MemberRow>(connection)
        .map_err(ProjectRepositoryError::persistence)?;

    let mut rosters: HashMap<Uuid, Vec<UserId>> = HashMap::new();
    for row in rows {
        rosters
            .entry(row.project_id)
            .or_default()
            .push(UserId::from_uuid(row.user_id));
    }
    Ok(rosters)
}

fn assemble_projects(
    connection: &mut PgConnection,
    rows: Vec<ProjectRow>,
) -> ProjectRepositoryResult<Vec<Project>> {
    let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
    let mut rosters = load_rosters(connection, &ids)?;
    rows.into_iter()
        .map(|row| {
            let members = rosters.remove(&row.id).unwrap_or_default();
            row_to_project(row, members)
        })
        .collect()
}

fn row_to_project(row: ProjectRow, members: Vec<UserId>) -> ProjectRepositoryResult<Project> {
    let name = ProjectName::new(row.name).map_err(ProjectRepositoryError::persistence)?;
    let data = PersistedProjectData {
        id: ProjectId::from_uuid(row.id),
        name,
        description: row.description,
        members,
        created_at: row.created_at,
    };
    Ok(Project::from_persisted(data))
}
