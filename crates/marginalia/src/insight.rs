use serde::{Deserialize, Serialize};

/// Maximum number of key points surviving validation
pub const MAX_KEY_POINTS: usize = 15;
/// Maximum number of practice points surviving validation
pub const MAX_PRACTICE_POINTS: usize = 10;
/// Minimum trimmed length for a point to survive validation
pub const MIN_POINT_LENGTH: usize = 10;

/// Where the points of an [`Insights`] value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
  /// Recovered from actual source text
  Database,
  /// Synthesized from the static category table
  Fallback,
}

impl std::fmt::Display for ContentSource {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ContentSource::Database => write!(f, "database"),
      ContentSource::Fallback => write!(f, "fallback"),
    }
  }
}

/// Structured insights for a single piece of content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
  /// Distilled takeaways, in narrative order
  pub key_points: Vec<String>,
  /// Actionable steps, in narrative order
  pub practice_points: Vec<String>,
  /// True iff the points were recovered from source text
  pub has_real_content: bool,
  /// Provenance discriminant, kept explicit for display logic
  pub content_source: ContentSource,
}

impl Insights {
  /// Insights recovered from real source text
  pub fn from_source(key_points: Vec<String>, practice_points: Vec<String>) -> Self {
    Self { key_points, practice_points, has_real_content: true, content_source: ContentSource::Database }
  }

  /// Insights synthesized from canned category content
  pub fn from_fallback(key_points: Vec<String>, practice_points: Vec<String>) -> Self {
    Self { key_points, practice_points, has_real_content: false, content_source: ContentSource::Fallback }
  }

  /// Apply the caller-side validation pass: trim every point, drop the ones
  /// at or under the minimum length, and cap both lists preserving order.
  pub fn validated(mut self) -> Self {
    self.key_points = validate_points(self.key_points, MAX_KEY_POINTS);
    self.practice_points = validate_points(self.practice_points, MAX_PRACTICE_POINTS);
    self
  }
}

fn validate_points(points: Vec<String>, cap: usize) -> Vec<String> {
  points
    .into_iter()
    .map(|point| point.trim().to_string())
    .filter(|point| point.len() > MIN_POINT_LENGTH)
    .take(cap)
    .collect()
}
