//! Integration tests for the entity repositories.
//!
//! Exercises the full repository layer against a real database:
//! - CRUD for movies, directors, and genres
//! - Foreign-key enforcement on movie references
//! - Filtered and paginated movie listing

use cinelist_db::models::director::{CreateDirector, UpdateDirector};
use cinelist_db::models::genre::CreateGenre;
use cinelist_db::models::movie::{CreateMovie, MovieFilter, UpdateMovie};
use cinelist_db::repositories::{DirectorRepo, GenreRepo, MovieRepo};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_movie(title: &str) -> CreateMovie {
    CreateMovie {
        title: title.to_string(),
        description: "A test movie".to_string(),
        trailer: "https://example.com/trailer.mp4".to_string(),
        year: 2020,
        rating: 7.5,
        genre_id: None,
        director_id: None,
    }
}

fn no_movie_changes() -> UpdateMovie {
    UpdateMovie {
        title: None,
        description: None,
        trailer: None,
        year: None,
        rating: None,
        genre_id: None,
        director_id: None,
    }
}

// ---------------------------------------------------------------------------
// Test: Movie CRUD round trip
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_movie_crud_round_trip(pool: SqlitePool) {
    let created = MovieRepo::create(&pool, &new_movie("Alien"))
        .await
        .unwrap();
    assert_eq!(created.title, "Alien");
    assert_eq!(created.year, 2020);
    assert!(created.genre_id.is_none());

    let fetched = MovieRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("created movie should be fetchable");
    assert_eq!(fetched.title, "Alien");
    assert_eq!(fetched.rating, 7.5);

    let updated = MovieRepo::update(
        &pool,
        created.id,
        &UpdateMovie {
            title: Some("Aliens".to_string()),
            rating: Some(8.4),
            ..no_movie_changes()
        },
    )
    .await
    .unwrap()
    .expect("update should match the existing row");
    assert_eq!(updated.title, "Aliens");
    assert_eq!(updated.rating, 8.4);
    // Untouched fields keep their stored values.
    assert_eq!(updated.description, "A test movie");
    assert_eq!(updated.year, 2020);

    let deleted = MovieRepo::delete(&pool, created.id).await.unwrap();
    assert!(deleted);
    assert!(MovieRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test]
async fn test_movie_update_missing_id_matches_no_row(pool: SqlitePool) {
    let updated = MovieRepo::update(
        &pool,
        9999,
        &UpdateMovie {
            title: Some("Ghost".to_string()),
            ..no_movie_changes()
        },
    )
    .await
    .unwrap();
    assert!(updated.is_none());
}

#[sqlx::test]
async fn test_movie_delete_missing_id_reports_no_row(pool: SqlitePool) {
    let deleted = MovieRepo::delete(&pool, 9999).await.unwrap();
    assert!(!deleted);
}

// ---------------------------------------------------------------------------
// Test: Foreign-key references
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_movie_with_references(pool: SqlitePool) {
    let director = DirectorRepo::create(
        &pool,
        &CreateDirector {
            name: "Ridley Scott".to_string(),
        },
    )
    .await
    .unwrap();
    let genre = GenreRepo::create(
        &pool,
        &CreateGenre {
            name: "Sci-Fi".to_string(),
        },
    )
    .await
    .unwrap();

    let movie = MovieRepo::create(
        &pool,
        &CreateMovie {
            genre_id: Some(genre.id),
            director_id: Some(director.id),
            ..new_movie("Blade Runner")
        },
    )
    .await
    .unwrap();
    assert_eq!(movie.genre_id, Some(genre.id));
    assert_eq!(movie.director_id, Some(director.id));
}

#[sqlx::test]
async fn test_movie_with_dangling_reference_rejected(pool: SqlitePool) {
    let result = MovieRepo::create(
        &pool,
        &CreateMovie {
            genre_id: Some(4242),
            ..new_movie("Orphan")
        },
    )
    .await;

    let err = result.expect_err("insert with a dangling genre_id should fail");
    match err {
        sqlx::Error::Database(db_err) => {
            assert!(matches!(
                db_err.kind(),
                sqlx::error::ErrorKind::ForeignKeyViolation
            ));
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Test: Filtered listing
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_movie_list_filters_compose(pool: SqlitePool) {
    let scott = DirectorRepo::create(
        &pool,
        &CreateDirector {
            name: "Ridley Scott".to_string(),
        },
    )
    .await
    .unwrap();
    let nolan = DirectorRepo::create(
        &pool,
        &CreateDirector {
            name: "Christopher Nolan".to_string(),
        },
    )
    .await
    .unwrap();
    let scifi = GenreRepo::create(
        &pool,
        &CreateGenre {
            name: "Sci-Fi".to_string(),
        },
    )
    .await
    .unwrap();
    let horror = GenreRepo::create(
        &pool,
        &CreateGenre {
            name: "Horror".to_string(),
        },
    )
    .await
    .unwrap();

    MovieRepo::create(
        &pool,
        &CreateMovie {
            genre_id: Some(scifi.id),
            director_id: Some(scott.id),
            ..new_movie("Blade Runner")
        },
    )
    .await
    .unwrap();
    MovieRepo::create(
        &pool,
        &CreateMovie {
            genre_id: Some(horror.id),
            director_id: Some(scott.id),
            ..new_movie("Alien")
        },
    )
    .await
    .unwrap();
    MovieRepo::create(
        &pool,
        &CreateMovie {
            genre_id: Some(scifi.id),
            director_id: Some(nolan.id),
            ..new_movie("Inception")
        },
    )
    .await
    .unwrap();

    let by_director = MovieRepo::list(
        &pool,
        &MovieFilter {
            director_id: Some(scott.id),
            ..MovieFilter::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(by_director.len(), 2);
    assert!(by_director.iter().all(|m| m.director_id == Some(scott.id)));

    let by_genre = MovieRepo::list(
        &pool,
        &MovieFilter {
            genre_id: Some(scifi.id),
            ..MovieFilter::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(by_genre.len(), 2);

    // Both filters together select the intersection.
    let both = MovieRepo::list(
        &pool,
        &MovieFilter {
            director_id: Some(scott.id),
            genre_id: Some(scifi.id),
            ..MovieFilter::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].title, "Blade Runner");
}

// ---------------------------------------------------------------------------
// Test: Pagination
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_movie_list_pages_are_disjoint(pool: SqlitePool) {
    for i in 1..=7 {
        MovieRepo::create(&pool, &new_movie(&format!("Movie {i}")))
            .await
            .unwrap();
    }

    let page1 = MovieRepo::list(
        &pool,
        &MovieFilter {
            page: Some(1),
            ..MovieFilter::default()
        },
    )
    .await
    .unwrap();
    let page2 = MovieRepo::list(
        &pool,
        &MovieFilter {
            page: Some(2),
            ..MovieFilter::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(page1.len(), 5);
    assert_eq!(page2.len(), 2);

    // Insertion order, no overlap between pages.
    assert_eq!(page1[0].title, "Movie 1");
    assert_eq!(page2[0].title, "Movie 6");
    for m in &page1 {
        assert!(page2.iter().all(|n| n.id != m.id));
    }

    // An absent page parameter means the first page.
    let default_page = MovieRepo::list(&pool, &MovieFilter::default())
        .await
        .unwrap();
    assert_eq!(default_page.len(), 5);
    assert_eq!(default_page[0].id, page1[0].id);
}

// ---------------------------------------------------------------------------
// Test: Director and genre CRUD
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_director_crud(pool: SqlitePool) {
    let created = DirectorRepo::create(
        &pool,
        &CreateDirector {
            name: "Kathryn Bigelow".to_string(),
        },
    )
    .await
    .unwrap();

    let listed = DirectorRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Kathryn Bigelow");

    let updated = DirectorRepo::update(
        &pool,
        created.id,
        &UpdateDirector {
            name: Some("K. Bigelow".to_string()),
        },
    )
    .await
    .unwrap()
    .expect("update should match the existing row");
    assert_eq!(updated.name, "K. Bigelow");

    assert!(DirectorRepo::delete(&pool, created.id).await.unwrap());
    assert!(DirectorRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test]
async fn test_genre_list_preserves_insertion_order(pool: SqlitePool) {
    for name in ["Horror", "Comedy", "Drama"] {
        GenreRepo::create(
            &pool,
            &CreateGenre {
                name: name.to_string(),
            },
        )
        .await
        .unwrap();
    }

    let listed = GenreRepo::list(&pool).await.unwrap();
    let names: Vec<&str> = listed.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["Horror", "Comedy", "Drama"]);
}
