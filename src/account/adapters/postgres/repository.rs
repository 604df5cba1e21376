//! `PostgreSQL` repository implementation for user account storage.

use super::{
    models::{NewUserRow, UserRow},
    schema::users,
};
use crate::account::{
    domain::{EmailAddress, PasswordHashString, PersistedUserData, User, UserId, Username},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by account adapters.
pub type AccountPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed user repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: AccountPgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: AccountPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> UserRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> UserRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(UserRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(UserRepositoryError::persistence)?
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn store(&self, user: &User) -> UserRepositoryResult<()> {
        let user_id = user.id();
        let username = user.username().clone();
        let new_row = to_new_row(user);

        self.run_blocking(move |connection| {
            diesel::insert_into(users::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_username_unique_violation(info.as_ref()) =>
                    {
                        UserRepositoryError::DuplicateUsername(username.clone())
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        UserRepositoryError::DuplicateUser(user_id)
                    }
                    _ => UserRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::id.eq(id.into_inner()))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn find_by_username(&self, username: &Username) -> UserRepositoryResult<Option<User>> {
        let lookup = username.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::username.eq(lookup))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn list(&self) -> UserRepositoryResult<Vec<User>> {
        self.run_blocking(move |connection| {
            let rows = users::table
                .order((users::created_at.asc(), users::id.asc()))
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(UserRepositoryError::persistence)?;
            rows.into_iter().map(row_to_user).collect()
        })
        .await
    }

    async fn delete(&self, id: UserId) -> UserRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted =
                diesel::delete(users::table.filter(users::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(UserRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(UserRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_row(user: &User) -> NewUserRow {
    NewUserRow {
        id: user.id().into_inner(),
        username: user.username().as_str().to_owned(),
        email: user.email().map(|email| email.as_str().to_owned()),
        password_hash: user.password_hash().as_str().to_owned(),
        is_staff: user.is_staff(),
        created_at: user.created_at(),
    }
}

fn row_to_user(row: UserRow) -> UserRepositoryResult<User> {
    let username = Username::new(row.username).map_err(UserRepositoryError::persistence)?;
    let email = row
        .email
        .map(EmailAddress::new)
        .transpose()
        .map_err(UserRepositoryError::persistence)?;

    let data = PersistedUserData {
        id: UserId::from_uuid(row.id),
        username,
        email,
        password_hash: PasswordHashString::from_phc(row.password_hash),
        is_staff: row.is_staff,
        created_at: row.created_at,
    };
    Ok(User::from_persisted(data))
}

fn is_username_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "idx_users_username_unique")
}
