//! Derived summaries over movie listings. Never persisted.

use serde::Serialize;

use crate::entity::MovieDetails;

/// Count and duration statistics for a list of movies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationSummary {
  pub total_movies:     usize,
  /// Sum of durations in minutes; a missing duration counts as zero.
  pub total_duration:   u64,
  /// `total_duration / total_movies`, or `0` for an empty list.
  pub average_duration: f64,
}

impl DurationSummary {
  pub fn of<I>(durations: I) -> Self
  where
    I: IntoIterator<Item = Option<u32>>,
  {
    let (total_movies, total_duration) = durations
      .into_iter()
      .fold((0usize, 0u64), |(n, sum), d| {
        (n + 1, sum + u64::from(d.unwrap_or(0)))
      });

    let average_duration = if total_movies > 0 {
      total_duration as f64 / total_movies as f64
    } else {
      0.0
    };

    Self { total_movies, total_duration, average_duration }
  }
}

/// The response of the full movie listing: the movies plus their summary.
#[derive(Debug, Clone, Serialize)]
pub struct MovieListing {
  #[serde(flatten)]
  pub summary: DurationSummary,
  pub movies:  Vec<MovieDetails>,
}

impl MovieListing {
  pub fn new(movies: Vec<MovieDetails>) -> Self {
    let summary = DurationSummary::of(movies.iter().map(|m| m.movie.duration));
    Self { summary, movies }
  }
}
