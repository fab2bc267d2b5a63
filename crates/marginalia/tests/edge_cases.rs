use marginalia::fallback;
use marginalia::insight::{ContentSource, MAX_KEY_POINTS, MAX_PRACTICE_POINTS};
use marginalia::parser;

#[test]
fn test_nullish_inputs_resolve_to_the_category_table() {
  let cases: [Option<&str>; 5] = [None, Some(""), Some("   "), Some("null"), Some("NULL")];

  for raw in cases {
    let insights = parser::parse(raw, "Some Title", "Mindfulness & Meditation");
    assert!(!insights.has_real_content, "expected fallback for {raw:?}");
    assert_eq!(insights.content_source, ContentSource::Fallback);
    assert_eq!(insights, fallback::generate("Mindfulness & Meditation"));
  }
}

#[test]
fn test_unrecognized_category_uses_personal_growth() {
  let insights = parser::parse(None, "Some Title", "Competitive Cheese Rolling");
  assert_eq!(insights, fallback::generate("Personal Growth"));
}

#[test]
fn test_validation_caps_oversized_parse_results() {
  let mut text = String::from("Key Insights:\n");
  for index in 1..=30 {
    text.push_str(&format!("{index}. Key takeaway number {index} with enough text\n"));
  }
  text.push_str("Ready to put it into practice:\n");
  for index in 1..=20 {
    text.push_str(&format!("• Practice step number {index} with enough text\n"));
  }

  let insights = parser::parse(Some(&text), "Oversized", "Productivity");
  assert_eq!(insights.key_points.len(), 30);
  assert_eq!(insights.practice_points.len(), 20);

  let validated = insights.validated();
  assert_eq!(validated.key_points.len(), MAX_KEY_POINTS);
  assert_eq!(validated.practice_points.len(), MAX_PRACTICE_POINTS);
  assert_eq!(validated.key_points[0], "Key takeaway number 1 with enough text");
  assert_eq!(validated.key_points[14], "Key takeaway number 15 with enough text");
  assert_eq!(validated.practice_points[9], "Practice step number 10 with enough text");
}

#[test]
fn test_single_point_document_is_still_real_content() {
  let text = "Key Insights:\n1. One single takeaway is enough\n";
  let insights = parser::parse(Some(text), "Thin Book", "Philosophy").validated();

  assert_eq!(insights.content_source, ContentSource::Database);
  assert_eq!(insights.key_points, vec!["One single takeaway is enough"]);
  assert!(insights.practice_points.is_empty());
}

#[test]
fn test_validation_can_empty_a_real_result() {
  // Parsed points at or under the length floor vanish in validation, but
  // provenance stays with the parse
  let text = "Key Insights:\n1. Too terse\n2. Also curt\n";
  let insights = parser::parse(Some(text), "Terse", "Productivity");

  assert_eq!(insights.content_source, ContentSource::Database);
  assert_eq!(insights.key_points.len(), 2);

  let validated = insights.validated();
  assert!(validated.key_points.is_empty());
  assert_eq!(validated.content_source, ContentSource::Database);
}

#[test]
fn test_whitespace_storm_survives_parsing() {
  let text = "Key Insights:\n\n\n\n\n1.    Spaced     takeaway     text\n\n\n\n\n";
  let insights = parser::parse(Some(text), "Messy", "Productivity");

  assert_eq!(insights.key_points, vec!["Spaced     takeaway     text"]);
}

#[test]
fn test_practice_heading_variants() {
  for heading in ["Ready to put these ideas into practice:", "Put into Practice:"] {
    let text = format!("{heading}\n• A concrete step to take tomorrow\n");
    let insights = parser::parse(Some(&text), "Variants", "Productivity");

    assert_eq!(
      insights.practice_points,
      vec!["A concrete step to take tomorrow"],
      "heading variant failed: {heading}"
    );
  }
}
