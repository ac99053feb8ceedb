use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use byov_core::domain::{Post, Preference, User};
use byov_core::error::RepoError;
use byov_core::ports::{BaseRepository, PostRepository};

use crate::database::entity::{post, preference, user};
use crate::database::postgres_repo::{
    PostgresPostRepository, PostgresPreferenceRepository, PostgresUserRepository,
};

fn post_model(id: &str, likes_count: i64) -> post::Model {
    post::Model {
        id: id.to_owned(),
        title: "Test Verse".to_owned(),
        content: "Content".to_owned(),
        author_id: "u1".to_owned(),
        author_name: "Ada".to_owned(),
        avatar: String::new(),
        likes_count,
        created_at: Some(chrono::Utc::now().into()),
        edited_at: None,
        is_private: None,
        is_draft: Some(true),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![post_model("p1", 3)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id("p1".to_string()).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Verse");
    assert_eq!(post.likes_count, 3);
    assert!(!post.is_public());
}

#[tokio::test]
async fn test_find_all_maps_every_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![post_model("p1", 0), post_model("p2", -4)]])
        .into_connection();

    let posts = PostgresPostRepository::new(db).find_all().await.unwrap();

    assert_eq!(posts.len(), 2);
    // Negative counts cannot be represented and read as zero.
    assert_eq!(posts[1].likes_count, 0);
}

#[tokio::test]
async fn test_update_likes_count_of_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let result = PostgresPostRepository::new(db)
        .update_likes_count("missing", 2)
        .await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_update_likes_count() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let result = PostgresPostRepository::new(db)
        .update_likes_count("p1", 2)
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_save_inserts_when_no_row_was_updated() {
    let now = chrono::Utc::now();
    let model = user::Model {
        id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        password_hash: "hash".to_owned(),
        display_name: "Ada".to_owned(),
        avatar: String::new(),
        created_at: now.into(),
        updated_at: now.into(),
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<user::Model>::new(), vec![model.clone()]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);
    let saved: User = repo.save(User::from(model)).await.unwrap();

    assert_eq!(saved.display_name, "Ada");
}

#[tokio::test]
async fn test_preference_reads_back_by_owner() {
    let model = preference::Model {
        owner: "user:u1".to_owned(),
        theme: "dark".to_owned(),
        updated_at: chrono::Utc::now().into(),
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model.clone()], vec![model]])
        .into_connection();

    let repo = PostgresPreferenceRepository::new(db);
    let saved: Preference = repo.save(Preference::new("user:u1", "dark")).await.unwrap();
    let found: Option<Preference> = repo.find_by_id("user:u1".to_string()).await.unwrap();

    assert_eq!(saved.theme, "dark");
    assert_eq!(found.map(|p| p.owner).as_deref(), Some("user:u1"));
}
