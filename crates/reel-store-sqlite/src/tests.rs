//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use reel_core::{
  entity::NewMovie,
  guard::fold_case,
  mutation::{GenrePatch, MoviePatch},
  query::{ListParams, SortKey, by_genre},
  store::{CatalogStore, MovieQuery, StoreError as _},
};

use crate::SqliteStore;

/// A store seeded with "Português" (id 1) and "English" (id 2).
async fn store() -> SqliteStore {
  let s = SqliteStore::open_in_memory()
    .await
    .expect("in-memory store");
  s.seed_languages(["Português", "English"])
    .await
    .expect("seed languages");
  s
}

fn movie(title: &str, genre_id: i64, language_id: i64) -> NewMovie {
  NewMovie::new(title, genre_id, language_id)
}

fn timed(title: &str, genre_id: i64, minutes: u32) -> NewMovie {
  NewMovie {
    duration: Some(minutes),
    ..movie(title, genre_id, 1)
  }
}

// ─── Languages ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn seeding_languages_is_idempotent() {
  let s = store().await;

  let added = s
    .seed_languages(["english", "Español"])
    .await
    .unwrap();
  assert_eq!(added, 1);

  let names: Vec<_> = s
    .list_languages()
    .await
    .unwrap()
    .into_iter()
    .map(|l| l.name)
    .collect();
  assert_eq!(names, ["Português", "English", "Español"]);
}

// ─── Genres ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_list_genres_in_id_order() {
  let s = store().await;
  let drama = s.create_genre("Drama".into()).await.unwrap();
  let terror = s.create_genre("Terror".into()).await.unwrap();
  assert!(terror.id > drama.id);

  let genres = s.list_genres().await.unwrap();
  assert_eq!(genres, [drama.clone(), terror]);

  let fetched = s.get_genre(drama.id).await.unwrap();
  assert_eq!(fetched, Some(drama));
}

#[tokio::test]
async fn find_genre_by_folded_name_honours_exclusion() {
  let s = store().await;
  let g = s.create_genre("Comédia".into()).await.unwrap();

  let hit = s
    .find_genre_by_name_key(fold_case("COMÉDIA"), None)
    .await
    .unwrap();
  assert_eq!(hit, Some(g.clone()));

  let excluded = s
    .find_genre_by_name_key(fold_case("comédia"), Some(g.id))
    .await
    .unwrap();
  assert!(excluded.is_none());
}

#[tokio::test]
async fn duplicate_genre_key_is_rejected_by_the_schema() {
  let s = store().await;
  s.create_genre("Drama".into()).await.unwrap();

  let err = s.create_genre("DRAMA".into()).await.unwrap_err();
  assert!(err.is_conflict(), "unexpected error: {err}");
}

#[tokio::test]
async fn update_genre_merges_and_reports_absence() {
  let s = store().await;
  let g = s.create_genre("Drama".into()).await.unwrap();

  let renamed = s
    .update_genre(g.id, GenrePatch { name: Some("Melodrama".into()) })
    .await
    .unwrap()
    .unwrap();
  assert_eq!(renamed.name, "Melodrama");
  assert_eq!(renamed.id, g.id);

  // The folded key follows the rename.
  assert!(
    s.find_genre_by_name_key(fold_case("melodrama"), None)
      .await
      .unwrap()
      .is_some()
  );
  assert!(
    s.find_genre_by_name_key(fold_case("drama"), None)
      .await
      .unwrap()
      .is_none()
  );

  let missing = s
    .update_genre(999, GenrePatch { name: Some("X".into()) })
    .await
    .unwrap();
  assert!(missing.is_none());
}

#[tokio::test]
async fn genre_ids_are_not_reused_after_delete() {
  let s = store().await;
  let first = s.create_genre("Drama".into()).await.unwrap();
  assert!(s.delete_genre(first.id).await.unwrap());
  assert!(!s.delete_genre(first.id).await.unwrap());

  let second = s.create_genre("Drama".into()).await.unwrap();
  assert!(second.id > first.id);
}

// ─── Movies ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_movie_roundtrip() {
  let s = store().await;
  let g = s.create_genre("Drama".into()).await.unwrap();

  let input = NewMovie {
    oscar_count: 2,
    release_date: NaiveDate::from_ymd_opt(1998, 4, 3),
    duration: Some(113),
    ..movie("Central do Brasil", g.id, 1)
  };
  let created = s.create_movie(input).await.unwrap();

  let fetched = s.get_movie(created.id).await.unwrap().unwrap();
  assert_eq!(fetched, created);
  assert_eq!(fetched.release_date, NaiveDate::from_ymd_opt(1998, 4, 3));
  assert_eq!(fetched.oscar_count, 2);
}

#[tokio::test]
async fn get_movie_missing_returns_none() {
  let s = store().await;
  assert!(s.get_movie(12345).await.unwrap().is_none());
}

#[tokio::test]
async fn movie_with_unknown_genre_violates_foreign_key() {
  let s = store().await;
  let err = s.create_movie(movie("Órfão", 999, 1)).await.unwrap_err();
  assert!(!err.is_conflict());
}

#[tokio::test]
async fn listing_joins_genre_and_language() {
  let s = store().await;
  let g = s.create_genre("Drama".into()).await.unwrap();
  let m = s.create_movie(movie("Moonlight", g.id, 2)).await.unwrap();

  let listed = s.list_movies(MovieQuery::default()).await.unwrap();
  assert_eq!(listed.len(), 1);
  assert_eq!(listed[0].movie, m);
  assert_eq!(listed[0].genre.name, "Drama");
  assert_eq!(listed[0].language.name, "English");
}

#[tokio::test]
async fn listing_orders_by_sort_key_with_id_tiebreak() {
  let s = store().await;
  let g = s.create_genre("Drama".into()).await.unwrap();
  let a = s.create_movie(timed("Zuzu Angel", g.id, 110)).await.unwrap();
  let b = s.create_movie(timed("aquarius", g.id, 146)).await.unwrap();
  let c = s.create_movie(timed("Bacurau", g.id, 110)).await.unwrap();

  let ids = |rows: Vec<reel_core::entity::MovieDetails>| {
    rows.into_iter().map(|r| r.movie.id).collect::<Vec<_>>()
  };

  let by_duration = s
    .list_movies(MovieQuery {
      sort: SortKey::Duration,
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(ids(by_duration), [a.id, c.id, b.id]);

  let by_title = s
    .list_movies(MovieQuery {
      sort: SortKey::Title,
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(ids(by_title), [b.id, c.id, a.id]);

  let by_id = s.list_movies(MovieQuery::default()).await.unwrap();
  assert_eq!(ids(by_id), [a.id, b.id, c.id]);
}

#[tokio::test]
async fn missing_release_dates_sort_first() {
  let s = store().await;
  let g = s.create_genre("Drama".into()).await.unwrap();
  let dated = s
    .create_movie(NewMovie {
      release_date: NaiveDate::from_ymd_opt(2019, 5, 15),
      ..movie("Bacurau", g.id, 1)
    })
    .await
    .unwrap();
  let undated = s.create_movie(movie("Sem Data", g.id, 1)).await.unwrap();

  let rows = s
    .list_movies(MovieQuery {
      sort: SortKey::ReleaseDate,
      ..Default::default()
    })
    .await
    .unwrap();
  let ids: Vec<_> = rows.iter().map(|r| r.movie.id).collect();
  assert_eq!(ids, [undated.id, dated.id]);
}

#[tokio::test]
async fn language_filter_is_case_insensitive() {
  let s = store().await;
  let g = s.create_genre("Drama".into()).await.unwrap();
  s.create_movie(movie("Central do Brasil", g.id, 1)).await.unwrap();
  s.create_movie(movie("Moonlight", g.id, 2)).await.unwrap();

  let params = ListParams {
    sort:     None,
    language: Some("PORTUGUÊS".into()),
  };
  let rows = s.list_movies(params.to_query()).await.unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].movie.title, "Central do Brasil");

  let params = ListParams {
    sort:     None,
    language: Some("Deutsch".into()),
  };
  assert!(s.list_movies(params.to_query()).await.unwrap().is_empty());
}

#[tokio::test]
async fn genre_filter_is_case_insensitive() {
  let s = store().await;
  let drama = s.create_genre("Drama".into()).await.unwrap();
  let terror = s.create_genre("Terror".into()).await.unwrap();
  s.create_movie(movie("Aquarius", drama.id, 1)).await.unwrap();
  s.create_movie(movie("Trabalhar Cansa", terror.id, 1)).await.unwrap();

  let rows = s.list_movies(by_genre("TERROR")).await.unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].genre, terror);
}

#[tokio::test]
async fn find_movie_by_folded_title() {
  let s = store().await;
  let g = s.create_genre("Drama".into()).await.unwrap();
  let m = s.create_movie(movie("Cidade de Deus", g.id, 1)).await.unwrap();

  let hit = s
    .find_movie_by_title_key(fold_case("CIDADE DE DEUS"), None)
    .await
    .unwrap();
  assert_eq!(hit, Some(m.clone()));

  let excluded = s
    .find_movie_by_title_key(fold_case("cidade de deus"), Some(m.id))
    .await
    .unwrap();
  assert!(excluded.is_none());
}

#[tokio::test]
async fn update_movie_applies_only_patch_fields() {
  let s = store().await;
  let g = s.create_genre("Drama".into()).await.unwrap();
  let original = s
    .create_movie(NewMovie {
      release_date: NaiveDate::from_ymd_opt(2016, 9, 1),
      duration: Some(146),
      ..movie("Aquarius", g.id, 1)
    })
    .await
    .unwrap();

  let updated = s
    .update_movie(original.id, MoviePatch {
      oscar_count: Some(5),
      ..Default::default()
    })
    .await
    .unwrap()
    .unwrap();

  let mut expected = original.clone();
  expected.oscar_count = 5;
  assert_eq!(updated, expected);
  assert_eq!(s.get_movie(original.id).await.unwrap(), Some(expected));
}

#[tokio::test]
async fn update_movie_can_clear_release_date() {
  let s = store().await;
  let g = s.create_genre("Drama".into()).await.unwrap();
  let m = s
    .create_movie(NewMovie {
      release_date: NaiveDate::from_ymd_opt(2016, 9, 1),
      ..movie("Aquarius", g.id, 1)
    })
    .await
    .unwrap();

  s.update_movie(m.id, MoviePatch {
    release_date: Some(None),
    ..Default::default()
  })
  .await
  .unwrap();

  let stored = s.get_movie(m.id).await.unwrap().unwrap();
  assert_eq!(stored.release_date, None);
}

#[tokio::test]
async fn update_missing_movie_returns_none() {
  let s = store().await;
  let result = s
    .update_movie(77, MoviePatch {
      oscar_count: Some(1),
      ..Default::default()
    })
    .await
    .unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn delete_movie_removes_it_from_listings() {
  let s = store().await;
  let g = s.create_genre("Drama".into()).await.unwrap();
  let m = s.create_movie(movie("Aquarius", g.id, 1)).await.unwrap();

  assert!(s.delete_movie(m.id).await.unwrap());
  assert!(s.get_movie(m.id).await.unwrap().is_none());
  assert!(s.list_movies(MovieQuery::default()).await.unwrap().is_empty());
  assert!(!s.delete_movie(m.id).await.unwrap());
}

#[tokio::test]
async fn genre_in_use_cannot_be_deleted() {
  let s = store().await;
  let g = s.create_genre("Drama".into()).await.unwrap();
  s.create_movie(movie("Aquarius", g.id, 1)).await.unwrap();

  assert!(s.delete_genre(g.id).await.is_err());
  assert!(s.get_genre(g.id).await.unwrap().is_some());
}
