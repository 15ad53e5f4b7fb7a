use crate::domain::error::TodoError;
use crate::domain::repository::TodoRepository;
use crate::domain::todo::{TodoId, TodoItem};
use async_trait::async_trait;

/// Business layer between the HTTP endpoints and the repository.
///
/// Every operation forwards to the repository and returns its result as is.
#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn get_all(&self) -> Result<Vec<TodoItem>, TodoError>;
    async fn get_by_id(&self, id: TodoId) -> Result<TodoItem, TodoError>;
    async fn create(&self, item: TodoItem) -> Result<TodoItem, TodoError>;
    async fn update(&self, item: TodoItem) -> Result<(), TodoError>;
    async fn delete(&self, id: TodoId) -> Result<(), TodoError>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn get_all(&self) -> Result<Vec<TodoItem>, TodoError> { self.repo.get_all().await }
    async fn get_by_id(&self, id: TodoId) -> Result<TodoItem, TodoError> { self.repo.get_by_id(id).await }
    async fn create(&self, item: TodoItem) -> Result<TodoItem, TodoError> { self.repo.add(item).await }
    async fn update(&self, item: TodoItem) -> Result<(), TodoError> { self.repo.update(item).await }
    async fn delete(&self, id: TodoId) -> Result<(), TodoError> { self.repo.delete(id).await }
}
