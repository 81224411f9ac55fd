use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use scribe_core::domain::{Author, BlogPost};
use scribe_core::error::RepoError;
use scribe_core::ports::{BaseRepository, BlogPostRepository};

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresBlogPostRepository;

fn model(id: Uuid) -> post::Model {
    post::Model {
        id,
        author_first_name: "Maria".to_owned(),
        author_last_name: "Pal".to_owned(),
        title: "Test Post".to_owned(),
        content: "Content".to_owned(),
        created: Utc::now().fixed_offset(),
    }
}

#[tokio::test]
async fn test_find_post_by_id_rebuilds_author() {
    let post_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model(post_id)]])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);
    let post: BlogPost = repo.find_by_id(post_id).await.unwrap().unwrap();

    assert_eq!(post.id, post_id);
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.author, Author::new("Maria", "Pal"));
}

#[tokio::test]
async fn test_find_missing_post_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);
    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_of_missing_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);
    let ghost = BlogPost::new(Author::new("A", "B"), "t".into(), "c".into(), None);

    let result = repo.update(ghost).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_update_never_writes_created() {
    let post = BlogPost::new(Author::new("Maria", "Pal"), "T".into(), "C".into(), None);
    let mut updated = model(post.id);
    updated.created = post.created.fixed_offset();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![updated]])
        .into_connection();
    let repo = PostgresBlogPostRepository::new(db);

    let result = repo.update(post.clone()).await.unwrap();
    assert_eq!(result.id, post.id);
    assert_eq!(result.author, Author::new("Maria", "Pal"));

    let log = repo.db.into_transaction_log();
    let sql = &log[0].statements()[0].sql;
    assert!(sql.starts_with("UPDATE"), "unexpected statement: {sql}");
    // RETURNING lists every column; only the SET clause matters.
    let set_clause = sql.split(" WHERE ").next().unwrap();
    assert!(set_clause.contains(r#""title""#));
    assert!(!set_clause.contains(r#""created""#), "created was updated: {sql}");
}

#[tokio::test]
async fn test_insert_writes_every_column() {
    let post = BlogPost::new(Author::new("Maria", "Pal"), "T".into(), "C".into(), None);
    let mut stored = model(post.id);
    stored.created = post.created.fixed_offset();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored]])
        .into_connection();
    let repo = PostgresBlogPostRepository::new(db);

    let result = repo.insert(post.clone()).await.unwrap();
    assert_eq!(result.id, post.id);
    assert_eq!(result.created, post.created);

    let log = repo.db.into_transaction_log();
    let sql = &log[0].statements()[0].sql;
    assert!(sql.starts_with("INSERT"), "unexpected statement: {sql}");
    for column in ["id", "author_first_name", "author_last_name", "created"] {
        assert!(sql.contains(&format!(r#""{column}""#)), "missing {column}: {sql}");
    }
}

#[tokio::test]
async fn test_delete_reports_rows_affected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);
    let id = Uuid::new_v4();

    assert!(repo.delete(id).await.unwrap());
    assert!(!repo.delete(id).await.unwrap());
}

#[tokio::test]
async fn test_insert_many_skips_empty_batch() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let repo = PostgresBlogPostRepository::new(db);

    assert_eq!(repo.insert_many(Vec::new()).await.unwrap(), 0);
}
