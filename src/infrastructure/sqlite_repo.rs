use std::{fs, str::FromStr};

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow}, Row};
use tracing::{debug, info};

use crate::domain::{
    error::TodoError,
    repository::TodoRepository,
    todo::{TodoId, TodoItem},
};

#[derive(Clone)]
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    /// Opens a pool against `database_url`, creating the database file and
    /// its parent directories if needed.
    ///
    /// In-memory databases live and die with their connection, so those URLs
    /// get a single connection that is never recycled.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("invalid sqlite url `{database_url}`"))?
            .create_if_missing(true);

        let pool_options = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            let filename = options.clone().get_filename();
            if let Some(parent) = filename.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create database directory `{}`", parent.display()))?;
                }
            }
            SqlitePoolOptions::new().max_connections(max_connections)
        };
        let pool = pool_options
            .connect_with(options)
            .await
            .with_context(|| format!("failed to connect to `{database_url}`"))?;

        Ok(Self { pool })
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn init(&self) -> Result<(), TodoError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("failed to run migrations")?;
        info!("schema up to date");
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<TodoItem>, TodoError> {
        let rows = sqlx::query("SELECT id, title, description, is_complete FROM todo_items ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("failed to list todo items")?;
        let items = rows
            .iter()
            .map(row_to_item)
            .collect::<Result<Vec<_>, _>>()
            .context("failed to decode todo item row")?;
        debug!(count = items.len(), "listed todo items");
        Ok(items)
    }

    async fn get_by_id(&self, id: TodoId) -> Result<TodoItem, TodoError> {
        let row = sqlx::query("SELECT id, title, description, is_complete FROM todo_items WHERE id = ?1")
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("failed to load todo item {id}"))?;
        let Some(row) = row else { return Err(TodoError::NotFound(id)) };
        Ok(row_to_item(&row).context("failed to decode todo item row")?)
    }

    async fn add(&self, item: TodoItem) -> Result<TodoItem, TodoError> {
        let result = sqlx::query("INSERT INTO todo_items (title, description, is_complete) VALUES (?1, ?2, ?3)")
            .bind(&item.title)
            .bind(&item.description)
            .bind(item.is_complete)
            .execute(&self.pool)
            .await
            .context("failed to insert todo item")?;
        let id = TodoId(result.last_insert_rowid());
        info!(%id, "inserted todo item");
        Ok(item.with_id(id))
    }

    async fn update(&self, item: TodoItem) -> Result<(), TodoError> {
        let result = sqlx::query("UPDATE todo_items SET title = ?2, description = ?3, is_complete = ?4 WHERE id = ?1")
            .bind(item.id.0)
            .bind(&item.title)
            .bind(&item.description)
            .bind(item.is_complete)
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to update todo item {}", item.id))?;
        if result.rows_affected() == 0 {
            debug!(id = %item.id, "update matched no rows");
        } else {
            info!(id = %item.id, "updated todo item");
        }
        Ok(())
    }

    async fn delete(&self, id: TodoId) -> Result<(), TodoError> {
        let result = sqlx::query("DELETE FROM todo_items WHERE id = ?1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to delete todo item {id}"))?;
        if result.rows_affected() == 0 {
            debug!(%id, "delete matched no rows");
        } else {
            info!(%id, "deleted todo item");
        }
        Ok(())
    }
}

fn row_to_item(row: &SqliteRow) -> Result<TodoItem, sqlx::Error> {
    Ok(TodoItem {
        id: TodoId(row.try_get("id")?),
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        is_complete: row.try_get("is_complete")?,
    })
}
