use crate::config::Config;
use crate::db::models::User;
use crate::db::query::{Operation, prepare_query};
use crate::db::schema;
use crate::error::StoreError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool against `cfg.database_url`, creating the file if missing.
    pub async fn connect(cfg: &Config) -> Result<Self, StoreError> {
        let connect_opts = SqliteConnectOptions::from_str(cfg.database_url.as_str())?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(cfg.max_connections.max(1))
            .connect_with(connect_opts)
            .await?;
        debug!(database_url = %cfg.database_url, "user store connected");
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Initialize the schema by executing the bundled DDL. Safe to repeat.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        for stmt in schema::statements() {
            sqlx::query(stmt).execute(&self.pool).await?;
        }
        debug!("user schema initialized");
        Ok(())
    }

    /// Insert `user` (its id is ignored). Returns the assigned row id.
    pub async fn create_user(&self, user: &User) -> Result<i64, StoreError> {
        validate(user)?;
        let res = prepare_query(Operation::Insert, user)
            .into_query()
            .execute(&self.pool)
            .await?;
        let id = res.last_insert_rowid();
        debug!(op = Operation::Insert.as_str(), id, "user created");
        Ok(id)
    }

    pub async fn get_user(&self, id: i64) -> Result<User, StoreError> {
        let key = User {
            id,
            ..User::default()
        };
        let row = prepare_query(Operation::Select, &key)
            .into_query()
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound { id })?;
        debug!(op = Operation::Select.as_str(), id, "user fetched");
        Self::row_to_model(row)
    }

    /// Overwrite name and age of the row with `user.id`.
    pub async fn update_user(&self, user: &User) -> Result<(), StoreError> {
        validate(user)?;
        let res = prepare_query(Operation::Update, user)
            .into_query()
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(StoreError::NotFound { id: user.id });
        }
        debug!(op = Operation::Update.as_str(), id = user.id, "user updated");
        Ok(())
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), StoreError> {
        let key = User {
            id,
            ..User::default()
        };
        let res = prepare_query(Operation::Delete, &key)
            .into_query()
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }
        debug!(op = Operation::Delete.as_str(), id, "user deleted");
        Ok(())
    }

    fn row_to_model(row: SqliteRow) -> Result<User, StoreError> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let age: i64 = row.try_get("age")?;

        Ok(User {
            id,
            name,
            age,
            comments: Vec::new(),
        })
    }
}

fn validate(user: &User) -> Result<(), StoreError> {
    if user.name.trim().is_empty() {
        return Err(StoreError::InvalidUser("name must not be blank".to_string()));
    }
    Ok(())
}
