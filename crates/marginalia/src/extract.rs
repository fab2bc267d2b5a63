//! Point extraction helpers shared by the parsing strategies
//!
//! Handles bullet runs, numbered runs, and the last-resort generic
//! extraction over unstructured prose.

use once_cell::sync::Lazy;
use regex::Regex;

// A run opened by a marker extends to the next marker or the end of the
// block, even when that over-captures trailing prose. `-` and `*` only count
// at line starts so hyphenated words and emphasis inside a sentence don't
// open a run; `•` never appears in running prose and counts anywhere.
static BULLET_MARKER: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?m)^[ \t]*[-*][ \t]+|•[ \t]*").expect("bullet marker pattern"));

static NUMBER_MARKER: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?m)^[ \t]*\d+\.[ \t]*").expect("number marker pattern"));

static SUB_BULLET: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?m)^([ \t]*)[-*][ \t]+").expect("sub-bullet pattern"));

static EXCESS_BLANK_LINES: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\n{3,}").expect("blank line pattern"));

static LEADING_RESIDUE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[\s•*-]*(?:\d+\.\s*)?").expect("residue pattern"));

static HEADING_LINE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"(?i)^\s*(?:key\s+insights?|insights?|practice|implementation|action|ready\s+to\s+put\b.*?)\s*:?\s*$")
    .expect("heading line pattern")
});

/// Collapse all internal whitespace, newlines included, to single spaces
pub fn collapse_whitespace(text: &str) -> String {
  text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a multi-line point body: `*`/`-` sub-bullets become `•` and
/// runs of 3+ newlines collapse to a paragraph break.
pub fn normalize_block(text: &str) -> String {
  let bulleted = SUB_BULLET.replace_all(text, "${1}• ");
  EXCESS_BLANK_LINES.replace_all(&bulleted, "\n\n").trim().to_string()
}

/// True for a line that is nothing but section-heading vocabulary
pub fn is_heading_line(line: &str) -> bool {
  HEADING_LINE.is_match(line)
}

/// Strip leading bullet glyphs, numbering, and whitespace residue
pub fn strip_residue(point: &str) -> String {
  LEADING_RESIDUE.replace(point, "").to_string()
}

fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
  haystack
    .as_bytes()
    .windows(needle.len())
    .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

fn marker_runs(marker: &Regex, block: &str) -> Vec<String> {
  let markers: Vec<_> = marker.find_iter(block).collect();

  let mut runs = Vec::new();
  for (index, found) in markers.iter().enumerate() {
    let end = markers.get(index + 1).map(|next| next.start()).unwrap_or(block.len());
    let run = block[found.end()..end].trim();
    if !run.is_empty() {
      runs.push(run.to_string());
    }
  }
  runs
}

/// Extract bullet points from a block, fusing split heading/description
/// pairs. Source content sometimes spreads one actionable item across two
/// consecutive bullets connected by the word "in:"; both the inline and the
/// split form collapse to a single `<heading>-in: <description>` point.
pub fn bullet_points(block: &str) -> Vec<String> {
  let raw = marker_runs(&BULLET_MARKER, block);

  let mut fused = Vec::new();
  let mut index = 0;
  while index < raw.len() {
    let current = collapse_whitespace(&raw[index]);

    if let Some(position) = find_ignore_ascii_case(&current, "in:") {
      let heading = current[..position].trim_end();
      let description = current[position + 3..].trim_start();
      fused.push(format!("{heading}-in: {description}"));
      index += 1;
      continue;
    }

    if let Some(next) = raw.get(index + 1) {
      let next = collapse_whitespace(next);
      if next.len() >= 3 && next.as_bytes()[..3].eq_ignore_ascii_case(b"in:") {
        let description = next[3..].trim_start();
        fused.push(format!("{current}-in: {description}"));
        index += 2;
        continue;
      }
    }

    fused.push(current);
    index += 1;
  }
  fused
}

/// Extract numbered points from a block. Points keep their internal
/// structure: embedded sub-bullets and multi-paragraph text belong to the
/// point that opened them, not to the next one.
pub fn numbered_points(block: &str) -> Vec<String> {
  marker_runs(&NUMBER_MARKER, block)
    .iter()
    .map(|run| normalize_block(run))
    .filter(|run| !run.is_empty())
    .collect()
}

fn sentence_points(text: &str) -> Vec<String> {
  text
    .split(['.', '!', '?'])
    .map(str::trim)
    .filter(|sentence| sentence.len() > 20)
    .map(str::to_string)
    .collect()
}

fn line_points(text: &str) -> Vec<String> {
  text.lines().map(str::trim).filter(|line| line.len() > 10).map(str::to_string).collect()
}

/// Last-resort extraction over text with no known structure: numbered runs,
/// else bullet runs, else long sentences, else long lines.
pub fn generic_points(text: &str) -> Vec<String> {
  let mut points = numbered_points(text);
  if points.is_empty() {
    points = bullet_points(text);
  }
  if points.is_empty() {
    points = sentence_points(text);
  }
  if points.is_empty() {
    points = line_points(text);
  }

  points
    .iter()
    .map(|point| collapse_whitespace(&strip_residue(point)))
    .filter(|point| !point.is_empty() && !is_heading_line(point))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_numbered_points_keep_sub_bullets() {
    let block = "1. Alpha\n* sub-note\n2. Beta";
    let points = numbered_points(block);

    assert_eq!(points.len(), 2);
    assert_eq!(points[0], "Alpha\n• sub-note");
    assert_eq!(points[1], "Beta");
  }

  #[test]
  fn test_numbered_points_collapse_excess_blank_lines() {
    let block = "1. First paragraph\n\n\n\nsecond paragraph\n2. Next point entirely";
    let points = numbered_points(block);

    assert_eq!(points[0], "First paragraph\n\nsecond paragraph");
  }

  #[test]
  fn test_bullet_points_plain() {
    let block = "• First idea worth keeping\n• Second idea worth keeping";
    let points = bullet_points(block);

    assert_eq!(points, vec!["First idea worth keeping", "Second idea worth keeping"]);
  }

  #[test]
  fn test_bullet_fusion_inline() {
    let block = "• Exercise in: the morning for best results";
    let points = bullet_points(block);

    assert_eq!(points, vec!["Exercise-in: the morning for best results"]);
  }

  #[test]
  fn test_bullet_fusion_split_pair() {
    let block = "• Morning Routine\n• in: wake up, stretch, hydrate";
    let points = bullet_points(block);

    assert_eq!(points, vec!["Morning Routine-in: wake up, stretch, hydrate"]);
  }

  #[test]
  fn test_dash_bullets_only_count_at_line_start() {
    let block = "- A well-known tip about habit-forming routines\n- Another stand-alone tip";
    let points = bullet_points(block);

    assert_eq!(points.len(), 2);
    assert_eq!(points[0], "A well-known tip about habit-forming routines");
  }

  #[test]
  fn test_generic_points_fall_back_to_sentences() {
    let text = "Momentum compounds faster than motivation ever will. Short. \
                Systems beat goals when the goals are vague.";
    let points = generic_points(text);

    assert_eq!(points.len(), 2);
    assert!(points[0].starts_with("Momentum compounds"));
  }

  #[test]
  fn test_generic_points_drop_heading_entries() {
    let text = "1. Key Insights\n2. A second point long enough to keep";
    let points = generic_points(text);

    assert_eq!(points, vec!["A second point long enough to keep"]);
  }

  #[test]
  fn test_generic_points_fall_back_to_lines() {
    // Every sentence is 20 chars or shorter, so extraction lands on lines
    let text = "Go outside.\nHydrate well.\nSleep eight hours.";
    let points = generic_points(text);

    assert_eq!(points.len(), 3);
    assert_eq!(points[0], "Go outside.");
  }

  #[test]
  fn test_strip_residue() {
    assert_eq!(strip_residue("• 3. leftover numbering"), "leftover numbering");
    assert_eq!(strip_residue("  - dashed"), "dashed");
    assert_eq!(strip_residue("clean"), "clean");
  }
}
