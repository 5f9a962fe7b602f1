//! Integration tests for freelancer, client and project repositories.
//!
//! Exercises the repository layer against a fresh SQLite database:
//! - Create and read back each entity
//! - Joined project reads carry freelancer/client names
//! - Partial updates and foreign key violations
//! - Hard delete without cascade

use assert_matches::assert_matches;
use gigboard_db::models::client::CreateClient;
use gigboard_db::models::freelancer::CreateFreelancer;
use gigboard_db::models::project::{CreateProject, UpdateProject};
use gigboard_db::repositories::{ClientRepo, FreelancerRepo, ProjectRepo};
use sqlx::error::ErrorKind;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_freelancer(name: &str) -> CreateFreelancer {
    CreateFreelancer {
        name: name.to_string(),
        email: None,
        specialty: None,
    }
}

fn new_client(name: &str) -> CreateClient {
    CreateClient {
        name: name.to_string(),
        email: None,
        company: None,
    }
}

fn new_project(title: &str, freelancer_id: i64, client_id: i64) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        description: format!("{title} description"),
        rate: 100.0,
        freelancer_id,
        client_id,
    }
}

/// Create one freelancer and one client, returning their ids.
async fn parties(pool: &SqlitePool) -> (i64, i64) {
    let freelancer = FreelancerRepo::create(pool, &new_freelancer("Ada"))
        .await
        .unwrap();
    let client = ClientRepo::create(pool, &new_client("Acme")).await.unwrap();
    (freelancer.id, client.id)
}

// ---------------------------------------------------------------------------
// Freelancers and clients
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_freelancer_create_find_list(pool: SqlitePool) {
    let created = FreelancerRepo::create(
        &pool,
        &CreateFreelancer {
            name: "Ada".into(),
            email: Some("ada@example.com".into()),
            specialty: Some("Rust".into()),
        },
    )
    .await
    .unwrap();
    FreelancerRepo::create(&pool, &new_freelancer("Grace"))
        .await
        .unwrap();

    let found = FreelancerRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.name, "Ada");
    assert_eq!(found.specialty.as_deref(), Some("Rust"));

    let all = FreelancerRepo::list(&pool).await.unwrap();
    let names: Vec<_> = all.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Grace"]);

    assert!(FreelancerRepo::exists(&pool, created.id).await.unwrap());
    assert!(!FreelancerRepo::exists(&pool, 999).await.unwrap());
    assert!(FreelancerRepo::find_by_id(&pool, 999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_client_create_and_list(pool: SqlitePool) {
    let created = ClientRepo::create(&pool, &new_client("Acme")).await.unwrap();
    assert!(ClientRepo::exists(&pool, created.id).await.unwrap());

    let all = ClientRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Acme");
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_project_create_returns_relations(pool: SqlitePool) {
    let (freelancer_id, client_id) = parties(&pool).await;

    let project = ProjectRepo::create(&pool, &new_project("Landing Page", freelancer_id, client_id))
        .await
        .unwrap();

    assert_eq!(project.project.title, "Landing Page");
    assert_eq!(project.freelancer.id, freelancer_id);
    assert_eq!(project.freelancer.name, "Ada");
    assert_eq!(project.client.id, client_id);
    assert_eq!(project.client.name, "Acme");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_project_create_with_missing_freelancer_fails(pool: SqlitePool) {
    let (_, client_id) = parties(&pool).await;

    let err = ProjectRepo::create(&pool, &new_project("Orphan", 999, client_id))
        .await
        .unwrap_err();
    assert_matches!(err, sqlx::Error::Database(db_err) => {
        assert_eq!(db_err.kind(), ErrorKind::ForeignKeyViolation);
    });

    assert_eq!(ProjectRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_project_negative_rate_violates_check(pool: SqlitePool) {
    let (freelancer_id, client_id) = parties(&pool).await;
    let mut input = new_project("Cheap", freelancer_id, client_id);
    input.rate = -5.0;

    let err = ProjectRepo::create(&pool, &input).await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(db_err) => {
        assert_eq!(db_err.kind(), ErrorKind::CheckViolation);
    });
}

#[sqlx::test(migrations = "./migrations")]
async fn test_project_list_has_one_entry_per_row(pool: SqlitePool) {
    let (freelancer_id, client_id) = parties(&pool).await;
    for title in ["One", "Two", "Three"] {
        ProjectRepo::create(&pool, &new_project(title, freelancer_id, client_id))
            .await
            .unwrap();
    }

    let projects = ProjectRepo::list(&pool).await.unwrap();
    let titles: Vec<_> = projects.iter().map(|p| p.project.title.as_str()).collect();
    assert_eq!(titles, vec!["One", "Two", "Three"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_project_partial_update(pool: SqlitePool) {
    let (freelancer_id, client_id) = parties(&pool).await;
    let other = FreelancerRepo::create(&pool, &new_freelancer("Grace"))
        .await
        .unwrap();
    let created = ProjectRepo::create(&pool, &new_project("Original", freelancer_id, client_id))
        .await
        .unwrap();

    let update = UpdateProject {
        rate: Some(250.0),
        freelancer_id: Some(other.id),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, created.project.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.project.title, "Original");
    assert_eq!(updated.project.rate, 250.0);
    assert_eq!(updated.freelancer.id, other.id);
    assert_eq!(updated.freelancer.name, "Grace");
    assert_eq!(updated.client.id, client_id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_project_update_missing_row_returns_none(pool: SqlitePool) {
    let update = UpdateProject {
        title: Some("Nope".into()),
        ..Default::default()
    };
    let result = ProjectRepo::update(&pool, 999, &update).await.unwrap();
    assert!(result.is_none());

    let empty = ProjectRepo::update(&pool, 999, &UpdateProject::default())
        .await
        .unwrap();
    assert!(empty.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_project_update_with_missing_client_leaves_row_unchanged(pool: SqlitePool) {
    let (freelancer_id, client_id) = parties(&pool).await;
    let created = ProjectRepo::create(&pool, &new_project("Stable", freelancer_id, client_id))
        .await
        .unwrap();

    let update = UpdateProject {
        title: Some("Changed".into()),
        client_id: Some(999),
        ..Default::default()
    };
    let err = ProjectRepo::update(&pool, created.project.id, &update)
        .await
        .unwrap_err();
    assert_matches!(err, sqlx::Error::Database(db_err) => {
        assert_eq!(db_err.kind(), ErrorKind::ForeignKeyViolation);
    });

    let current = ProjectRepo::find_by_id(&pool, created.project.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(current.project.title, "Stable");
    assert_eq!(current.client.id, client_id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_project_delete_removes_only_that_row(pool: SqlitePool) {
    let (freelancer_id, client_id) = parties(&pool).await;
    let keep = ProjectRepo::create(&pool, &new_project("Keep", freelancer_id, client_id))
        .await
        .unwrap();
    let gone = ProjectRepo::create(&pool, &new_project("Gone", freelancer_id, client_id))
        .await
        .unwrap();

    assert!(ProjectRepo::delete(&pool, gone.project.id).await.unwrap());
    assert!(!ProjectRepo::delete(&pool, gone.project.id).await.unwrap());

    assert!(ProjectRepo::find_by_id(&pool, gone.project.id)
        .await
        .unwrap()
        .is_none());
    assert!(ProjectRepo::find_by_id(&pool, keep.project.id)
        .await
        .unwrap()
        .is_some());
    assert!(FreelancerRepo::exists(&pool, freelancer_id).await.unwrap());
    assert!(ClientRepo::exists(&pool, client_id).await.unwrap());
}
