//! Strategy cascade for recovering structured insights from raw content
//!
//! Strategies run in a fixed order, most precise first, because each is
//! progressively more permissive and more likely to produce noise. The
//! first strategy to recover at least one point in either list wins; when
//! every strategy comes up empty the category fallback takes over.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract;
use crate::fallback;
use crate::insight::Insights;

/// Intermediate result of a single strategy
#[derive(Debug, Default)]
pub struct ParsedPoints {
  pub key_points: Vec<String>,
  pub practice_points: Vec<String>,
}

impl ParsedPoints {
  fn is_empty(&self) -> bool {
    self.key_points.is_empty() && self.practice_points.is_empty()
  }
}

static KEY_HEADING: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?i)key\s+insights?\s*:?").expect("key heading pattern"));

static PRACTICE_HEADING: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"(?i)(?:ready\s+to\s+put\b[^\n]*?\binto\s+practice|put\s+into\s+practice)\s*:?")
    .expect("practice heading pattern")
});

static UNDERSCORE_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_{10,}").expect("rule pattern"));

static SECTION_HEADING: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"(?i)\b(key\s+insights?|insights?|practice|implementation|action|ready\s+to\s+put)\b")
    .expect("section heading pattern")
});

const KEY_MARKER: &str = "KEY_POINTS:";
const PRACTICE_MARKER: &str = "PRACTICE_POINTS:";

// Share of generically extracted points classified as key points by the
// last-resort strategy. Heuristic, not an invariant.
const KEY_POINT_SHARE: f64 = 0.7;

type Strategy = fn(&str) -> Option<ParsedPoints>;

// A strategy returning None, or Some with two empty lists, means "no
// result" and the cascade moves on. That seam is the fault isolation: no
// failure inside a strategy escapes the parser.
const STRATEGIES: &[(&str, Strategy)] = &[
  ("labeled-section", labeled_sections),
  ("structured-marker", structured_markers),
  ("heading-split", heading_split),
  ("natural-language", natural_language),
];

/// Recover structured insights from raw content. Never fails: null-ish and
/// structureless input both land on the canned content for `category`.
/// `title` is used for diagnostics only.
pub fn parse(raw_content: Option<&str>, title: &str, category: &str) -> Insights {
  let text = match raw_content {
    Some(text) => text.trim(),
    None => return fallback_for(title, category),
  };

  if text.is_empty() || text.eq_ignore_ascii_case("null") {
    return fallback_for(title, category);
  }

  for (name, strategy) in STRATEGIES {
    if let Some(points) = strategy(text) {
      if !points.is_empty() {
        scribe::verbose(&format!(
          "parsed \"{title}\" via {name}: {} key, {} practice",
          points.key_points.len(),
          points.practice_points.len()
        ));
        return Insights::from_source(points.key_points, points.practice_points);
      }
    }
  }

  fallback_for(title, category)
}

fn fallback_for(title: &str, category: &str) -> Insights {
  scribe::verbose(&format!("no structure recovered in \"{title}\", using {category} fallback"));
  fallback::generate(category)
}

/// Strategy 1: an explicit "Key Insights" section, terminated by an
/// underscore rule, a practice heading, or end of text, with the practice
/// section hanging off its own heading.
fn labeled_sections(text: &str) -> Option<ParsedPoints> {
  let mut points = ParsedPoints::default();

  if let Some(heading) = KEY_HEADING.find(text) {
    let rest = &text[heading.end()..];
    let mut end = rest.len();
    if let Some(rule) = UNDERSCORE_RULE.find(rest) {
      end = end.min(rule.start());
    }
    if let Some(practice) = PRACTICE_HEADING.find(rest) {
      end = end.min(practice.start());
    }
    points.key_points = extract::numbered_points(&rest[..end]);
  }

  if let Some(heading) = PRACTICE_HEADING.find(text) {
    points.practice_points = extract::bullet_points(&text[heading.end()..]);
  }

  (!points.is_empty()).then_some(points)
}

/// Strategy 2: machine markers emitted by the content tooling. Matched as
/// case-sensitive literals since they are markers, not prose.
fn structured_markers(text: &str) -> Option<ParsedPoints> {
  let key_start = text.find(KEY_MARKER);
  let practice_start = text.find(PRACTICE_MARKER);
  if key_start.is_none() && practice_start.is_none() {
    return None;
  }

  let mut points = ParsedPoints::default();
  if let Some(start) = key_start {
    let block = marker_block(text, start + KEY_MARKER.len(), practice_start);
    points.key_points = extract::generic_points(block);
  }
  if let Some(start) = practice_start {
    let block = marker_block(text, start + PRACTICE_MARKER.len(), key_start);
    points.practice_points = extract::generic_points(block);
  }

  (!points.is_empty()).then_some(points)
}

fn marker_block<'a>(text: &'a str, begin: usize, other_marker: Option<usize>) -> &'a str {
  let end = match other_marker {
    Some(other) if other > begin => other,
    _ => text.len(),
  };
  &text[begin..end]
}

/// Strategy 3: split the whole text at section-heading vocabulary and
/// classify each segment by the heading that opens it.
fn heading_split(text: &str) -> Option<ParsedPoints> {
  let headings: Vec<_> = SECTION_HEADING.find_iter(text).collect();
  if headings.is_empty() {
    return None;
  }

  let mut points = ParsedPoints::default();
  for (index, heading) in headings.iter().enumerate() {
    let end = headings.get(index + 1).map(|next| next.start()).unwrap_or(text.len());
    let segment = &text[heading.end()..end];

    let word = heading.as_str().to_lowercase();
    if word.starts_with("key") || word.starts_with("insight") {
      let mut extracted = extract::numbered_points(segment);
      if extracted.is_empty() {
        extracted = extract::generic_points(segment);
      }
      points.key_points.extend(extracted);
    } else {
      let mut extracted = extract::bullet_points(segment);
      if extracted.is_empty() {
        extracted = extract::generic_points(segment);
      }
      points.practice_points.extend(extracted);
    }
  }

  (!points.is_empty()).then_some(points)
}

/// Strategy 4: no structural anchor at all. Generic extraction over the
/// whole text, split positionally into key and practice points. Approximate
/// by nature and prone to misclassification, which is why it runs last.
fn natural_language(text: &str) -> Option<ParsedPoints> {
  let mut points = extract::generic_points(text);
  if points.len() < 3 {
    return None;
  }

  let split = ((points.len() as f64) * KEY_POINT_SHARE).ceil() as usize;
  let practice_points = points.split_off(split);
  Some(ParsedPoints { key_points: points, practice_points })
}
