use crate::db::models::UserRecord;
use crate::error::LookupError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

const FIND_BY_USERNAME: &str = "SELECT * FROM users WHERE username = ?";

/// Build a lazily connecting, read-only pool for `database_url`.
///
/// A missing database file is never created. Connection failures surface on
/// first use, so the server can start before the store is reachable.
pub fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, LookupError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .read_only(true)
        .create_if_missing(false);
    Ok(SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy_with(options))
}

#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Point lookup on `users.username`. The username is bound as-is.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserRecord>, LookupError> {
        let row = sqlx::query(FIND_BY_USERNAME)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(UserRecord::from_row).transpose()?)
    }
}
