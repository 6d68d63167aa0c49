//! CRUD round-trip tests for theme records and theme asset files.

use sqlx::SqlitePool;

use skinsmith_db::models::theme::{CreateTheme, UpdateTheme};
use skinsmith_db::models::theme_file::{CreateThemeFile, UpdateThemeFile};
use skinsmith_db::repositories::{ThemeFileRepo, ThemeRepo};

fn sample_theme(name: &str) -> CreateTheme {
    CreateTheme {
        name: name.to_string(),
        description: Some("a theme".to_string()),
        author: "A".to_string(),
        version: "1.0".to_string(),
    }
}

#[sqlx::test]
async fn create_and_find_theme(pool: SqlitePool) {
    let created = ThemeRepo::create(&pool, &sample_theme("Dracula"))
        .await
        .unwrap();
    assert_eq!(created.name, "Dracula");
    assert!(!created.is_active);

    let by_id = ThemeRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(by_id.unwrap().name, "Dracula");

    let by_name = ThemeRepo::find_by_name(&pool, "Dracula").await.unwrap();
    assert_eq!(by_name.unwrap().id, created.id);

    assert!(ThemeRepo::find_by_name(&pool, "Nope")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test]
async fn duplicate_name_violates_unique_index(pool: SqlitePool) {
    ThemeRepo::create(&pool, &sample_theme("Dup")).await.unwrap();
    let err = ThemeRepo::create(&pool, &sample_theme("Dup")).await;
    assert!(err.is_err());
}

#[sqlx::test]
async fn list_paginates(pool: SqlitePool) {
    for i in 0..5 {
        ThemeRepo::create(&pool, &sample_theme(&format!("T{i}")))
            .await
            .unwrap();
    }

    let page = ThemeRepo::list(&pool, 2, 0).await.unwrap();
    assert_eq!(page.len(), 2);
    let rest = ThemeRepo::list(&pool, 10, 2).await.unwrap();
    assert_eq!(rest.len(), 3);
}

#[sqlx::test]
async fn patch_updates_only_present_fields(pool: SqlitePool) {
    let created = ThemeRepo::create(&pool, &sample_theme("Patchy"))
        .await
        .unwrap();

    let patch = UpdateTheme {
        version: Some("2.0".to_string()),
        is_active: Some(true),
        ..UpdateTheme::default()
    };
    let updated = ThemeRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Patchy");
    assert_eq!(updated.author, "A");
    assert_eq!(updated.version, "2.0");
    assert!(updated.is_active);
    assert!(updated.updated_at >= created.updated_at);

    // Patching a missing record yields None.
    let missing = ThemeRepo::update(&pool, 9999, &patch).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn delete_removes_the_row(pool: SqlitePool) {
    let created = ThemeRepo::create(&pool, &sample_theme("Gone"))
        .await
        .unwrap();

    assert!(ThemeRepo::delete(&pool, created.id).await.unwrap());
    assert!(ThemeRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
    assert!(!ThemeRepo::delete(&pool, created.id).await.unwrap());
}

#[sqlx::test]
async fn theme_file_crud(pool: SqlitePool) {
    let theme = ThemeRepo::create(&pool, &sample_theme("Holder"))
        .await
        .unwrap();

    let file = ThemeFileRepo::create(
        &pool,
        &CreateThemeFile {
            theme_id: theme.id,
            file_path: "webkit.css".to_string(),
            file_type: "css".to_string(),
            content: "body {}".to_string(),
        },
    )
    .await
    .unwrap();

    let listed = ThemeFileRepo::list_by_theme(&pool, theme.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, file.id);

    let patch = UpdateThemeFile {
        content: Some("body { margin: 0; }".to_string()),
        ..UpdateThemeFile::default()
    };
    let updated = ThemeFileRepo::update(&pool, file.id, &patch)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.file_path, "webkit.css");
    assert_eq!(updated.content, "body { margin: 0; }");

    assert!(ThemeFileRepo::delete(&pool, file.id).await.unwrap());
    assert!(ThemeFileRepo::list_by_theme(&pool, theme.id)
        .await
        .unwrap()
        .is_empty());
}
