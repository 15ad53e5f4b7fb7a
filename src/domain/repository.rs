use async_trait::async_trait;
use super::{error::TodoError, todo::{TodoId, TodoItem}};

/// Exclusive access to persisted todo items.
///
/// Every call is a single storage statement; failures other than a missing
/// row surface as [`TodoError::Storage`].
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// Brings the schema up to date.
    async fn init(&self) -> Result<(), TodoError>;
    async fn get_all(&self) -> Result<Vec<TodoItem>, TodoError>;
    /// Fails with [`TodoError::NotFound`] when no item has `id`.
    async fn get_by_id(&self, id: TodoId) -> Result<TodoItem, TodoError>;
    /// Persists `item` under a freshly assigned id; `item.id` is ignored.
    async fn add(&self, item: TodoItem) -> Result<TodoItem, TodoError>;
    /// Overwrites the item stored under `item.id`. An absent id is a no-op.
    async fn update(&self, item: TodoItem) -> Result<(), TodoError>;
    /// Removes the item if present. Deleting an absent id succeeds.
    async fn delete(&self, id: TodoId) -> Result<(), TodoError>;
}
