//! The same repository contract, checked against every implementation.

use todo_list_api::domain::{error::TodoError, repository::TodoRepository, todo::{TodoId, TodoItem}};
use todo_list_api::infrastructure::{memory_repo::InMemoryTodoRepository, sqlite_repo::SqliteTodoRepository};

async fn sqlite() -> SqliteTodoRepository {
    let repo = SqliteTodoRepository::connect("sqlite::memory:", 1).await.unwrap();
    repo.init().await.unwrap();
    repo
}

async fn add_then_get_round_trips<R: TodoRepository>(repo: R) {
    let input = TodoItem { id: TodoId(77), title: "Task 1".into(), description: Some("Description 1".into()), is_complete: true };
    let created = repo.add(input.clone()).await.unwrap();
    assert_ne!(created.id, TodoId(77));
    assert_eq!(created, input.clone().with_id(created.id));
    assert_eq!(repo.get_by_id(created.id).await.unwrap(), created);
}

async fn get_all_lists_in_id_order<R: TodoRepository>(repo: R) {
    assert!(repo.get_all().await.unwrap().is_empty());
    let first = repo.add(TodoItem::new("first", None)).await.unwrap();
    let second = repo.add(TodoItem::new("second", Some("two".into()))).await.unwrap();
    assert_eq!(repo.get_all().await.unwrap(), vec![first, second]);
}

async fn missing_and_deleted_ids_are_not_found<R: TodoRepository>(repo: R) {
    assert!(matches!(repo.get_by_id(TodoId(999)).await, Err(TodoError::NotFound(TodoId(999)))));

    let created = repo.add(TodoItem::new("doomed", None)).await.unwrap();
    repo.delete(created.id).await.unwrap();
    let err = repo.get_by_id(created.id).await.unwrap_err();
    assert_eq!(err.to_string(), format!("TodoItem with id {} was not found.", created.id));
}

async fn delete_twice_succeeds<R: TodoRepository>(repo: R) {
    let created = repo.add(TodoItem::new("twice", None)).await.unwrap();
    repo.delete(created.id).await.unwrap();
    repo.delete(created.id).await.unwrap();
    repo.delete(TodoId(4242)).await.unwrap();
}

async fn update_overwrites_all_but_id<R: TodoRepository>(repo: R) {
    let created = repo.add(TodoItem::new("before", Some("old".into()))).await.unwrap();
    let changed = TodoItem { id: created.id, title: "after".into(), description: None, is_complete: true };
    repo.update(changed.clone()).await.unwrap();
    assert_eq!(repo.get_by_id(created.id).await.unwrap(), changed);
}

async fn update_of_absent_id_is_silent<R: TodoRepository>(repo: R) {
    repo.update(TodoItem::new("ghost", None).with_id(TodoId(5))).await.unwrap();
    assert!(repo.get_all().await.unwrap().is_empty());
}

async fn ids_are_never_reused<R: TodoRepository>(repo: R) {
    let first = repo.add(TodoItem::new("first", None)).await.unwrap();
    repo.delete(first.id).await.unwrap();
    let second = repo.add(TodoItem::new("second", None)).await.unwrap();
    assert!(second.id > first.id);
}

mod sqlite_backend {
    use super::*;

    #[tokio::test]
    async fn add_then_get_round_trips() { super::add_then_get_round_trips(sqlite().await).await }

    #[tokio::test]
    async fn get_all_lists_in_id_order() { super::get_all_lists_in_id_order(sqlite().await).await }

    #[tokio::test]
    async fn missing_and_deleted_ids_are_not_found() { super::missing_and_deleted_ids_are_not_found(sqlite().await).await }

    #[tokio::test]
    async fn delete_twice_succeeds() { super::delete_twice_succeeds(sqlite().await).await }

    #[tokio::test]
    async fn update_overwrites_all_but_id() { super::update_overwrites_all_but_id(sqlite().await).await }

    #[tokio::test]
    async fn update_of_absent_id_is_silent() { super::update_of_absent_id_is_silent(sqlite().await).await }

    #[tokio::test]
    async fn ids_are_never_reused() { super::ids_are_never_reused(sqlite().await).await }
}

mod memory_backend {
    use super::*;

    #[tokio::test]
    async fn add_then_get_round_trips() { super::add_then_get_round_trips(InMemoryTodoRepository::new()).await }

    #[tokio::test]
    async fn get_all_lists_in_id_order() { super::get_all_lists_in_id_order(InMemoryTodoRepository::new()).await }

    #[tokio::test]
    async fn missing_and_deleted_ids_are_not_found() { super::missing_and_deleted_ids_are_not_found(InMemoryTodoRepository::new()).await }

    #[tokio::test]
    async fn delete_twice_succeeds() { super::delete_twice_succeeds(InMemoryTodoRepository::new()).await }

    #[tokio::test]
    async fn update_overwrites_all_but_id() { super::update_overwrites_all_but_id(InMemoryTodoRepository::new()).await }

    #[tokio::test]
    async fn update_of_absent_id_is_silent() { super::update_of_absent_id_is_silent(InMemoryTodoRepository::new()).await }

    #[tokio::test]
    async fn ids_are_never_reused() { super::ids_are_never_reused(InMemoryTodoRepository::new()).await }
}
