mod common;

use analytics_api::domain::user::models::EmailAddress;
use analytics_api::domain::user::models::User;
use analytics_api::domain::user::models::UserId;
use analytics_api::domain::user::models::Username;
use analytics_api::domain::user::ports::UserRepository;
use analytics_api::outbound::repositories::PostgresUserRepository;
use analytics_api::user::errors::UserError;
use chrono::SubsecRound;
use chrono::Utc;
use common::TestDb;

fn user(username: &str, email: &str) -> User {
    // Postgres keeps microseconds
    let now = Utc::now().trunc_subsecs(6);

    User {
        id: UserId::new(),
        username: Username::new(username.to_string()).unwrap(),
        email: EmailAddress::new(email.to_string()).unwrap(),
        password_hash: "$argon2id$v=19$m=8192,t=1,p=1$c2FsdA$aGFzaA".to_string(),
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn test_create_and_find() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let repository = PostgresUserRepository::new(db.pool.clone());

    let alice = user("alice.smith", "alice@example.com");
    let created = repository.create(alice.clone()).await.unwrap();
    assert_eq!(created, alice);

    assert_eq!(
        repository.find_by_username("alice.smith").await.unwrap(),
        Some(alice.clone())
    );
    assert_eq!(
        repository.find_by_email("alice@example.com").await.unwrap(),
        Some(alice.clone())
    );
    assert_eq!(
        repository.find_by_id(&alice.id).await.unwrap(),
        Some(alice.clone())
    );

    assert_eq!(repository.find_by_username("bob").await.unwrap(), None);
    assert_eq!(
        repository.find_by_email("bob@example.com").await.unwrap(),
        None
    );
    assert_eq!(repository.find_by_id(&UserId::new()).await.unwrap(), None);

    db.teardown().await;
}

#[tokio::test]
async fn test_create_duplicate_username_maps_to_conflict() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let repository = PostgresUserRepository::new(db.pool.clone());

    repository
        .create(user("alice", "alice@example.com"))
        .await
        .unwrap();

    let result = repository.create(user("alice", "other@example.com")).await;

    assert_eq!(
        result,
        Err(UserError::UsernameAlreadyExists("alice".to_string()))
    );

    db.teardown().await;
}

#[tokio::test]
async fn test_create_duplicate_email_maps_to_conflict() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let repository = PostgresUserRepository::new(db.pool.clone());

    repository
        .create(user("alice", "alice@example.com"))
        .await
        .unwrap();

    let result = repository.create(user("bob", "alice@example.com")).await;

    assert_eq!(
        result,
        Err(UserError::EmailAlreadyExists(
            "alice@example.com".to_string()
        ))
    );

    db.teardown().await;
}

#[tokio::test]
async fn test_invalid_stored_row_is_a_database_error() {
    let Some(db) = TestDb::new().await else {
        return;
    };
    let repository = PostgresUserRepository::new(db.pool.clone());

    // One character is below the username minimum
    sqlx::query(
        r#"
        INSERT INTO users (id, username, email, password_hash)
        VALUES ($1, 'a', 'a@example.com', 'hash')
        "#,
    )
    .bind(uuid::Uuid::new_v4())
    .execute(&db.pool)
    .await
    .unwrap();

    let result = repository.find_by_username("a").await;

    assert!(matches!(result, Err(UserError::DatabaseError(_))));

    db.teardown().await;
}
