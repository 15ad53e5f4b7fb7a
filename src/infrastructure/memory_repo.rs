use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    error::TodoError,
    repository::TodoRepository,
    todo::{TodoId, TodoItem},
};

#[derive(Default)]
struct Store {
    last_id: i64,
    items: BTreeMap<TodoId, TodoItem>,
}

/// Process-local repository with the same contract as the SQLite one.
/// Ids start at 1 and are never reused.
#[derive(Clone, Default)]
pub struct InMemoryTodoRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn init(&self) -> Result<(), TodoError> { Ok(()) }

    async fn get_all(&self) -> Result<Vec<TodoItem>, TodoError> {
        Ok(self.store.read().await.items.values().cloned().collect())
    }

    async fn get_by_id(&self, id: TodoId) -> Result<TodoItem, TodoError> {
        self.store.read().await.items.get(&id).cloned().ok_or(TodoError::NotFound(id))
    }

    async fn add(&self, item: TodoItem) -> Result<TodoItem, TodoError> {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let item = item.with_id(TodoId(store.last_id));
        store.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(&self, item: TodoItem) -> Result<(), TodoError> {
        let mut store = self.store.write().await;
        if let Some(existing) = store.items.get_mut(&item.id) {
            *existing = item;
        }
        Ok(())
    }

    async fn delete(&self, id: TodoId) -> Result<(), TodoError> {
        self.store.write().await.items.remove(&id);
        Ok(())
    }
}
