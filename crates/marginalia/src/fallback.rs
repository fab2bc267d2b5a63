//! Canned category content used when parsing recovers nothing

use crate::insight::Insights;

struct CategoryEntry {
  category: &'static str,
  key_points: &'static [&'static str],
  practice_points: &'static [&'static str],
}

// First entry doubles as the default for unrecognized categories.
const CATEGORY_TABLE: &[CategoryEntry] = &[
  CategoryEntry {
    category: "Personal Growth",
    key_points: &[
      "Growth starts with honest self-assessment rather than comparison to others.",
      "Small consistent improvements compound into meaningful change over time.",
      "Discomfort is a signal of learning, not a reason to retreat.",
      "Reflecting on setbacks turns them into raw material for progress.",
    ],
    practice_points: &[
      "Write down one thing you learned about yourself at the end of each day.",
      "Pick a single habit to improve this month and track it visibly.",
      "Ask one trusted person for candid feedback and listen without defending.",
    ],
  },
  CategoryEntry {
    category: "Productivity",
    key_points: &[
      "Deep, uninterrupted work produces more than scattered busy hours.",
      "Deciding what not to do matters as much as deciding what to do.",
      "Energy management beats time management when schedules get dense.",
      "Clear next actions keep projects moving when motivation dips.",
    ],
    practice_points: &[
      "Block ninety minutes of focused work before opening any inbox.",
      "End each day by writing the single most important task for tomorrow.",
      "Batch shallow tasks like email into two fixed windows per day.",
    ],
  },
  CategoryEntry {
    category: "Leadership",
    key_points: &[
      "Trust is built through consistency between words and actions.",
      "Clarity about direction matters more than certainty about details.",
      "Good leaders multiply the judgment of their teams instead of replacing it.",
      "Listening before deciding surfaces problems while they are still cheap.",
    ],
    practice_points: &[
      "Start one-on-ones by asking what is blocking the other person.",
      "State the intent behind each decision, not just the decision itself.",
      "Delegate one task this week that you are tempted to keep.",
    ],
  },
  CategoryEntry {
    category: "Health & Fitness",
    key_points: &[
      "Consistency in training outperforms intensity applied sporadically.",
      "Sleep and recovery are where adaptation actually happens.",
      "Nutrition fundamentals beat supplements and shortcuts every time.",
      "Movement you enjoy is movement you will still be doing next year.",
    ],
    practice_points: &[
      "Schedule workouts like appointments and protect them accordingly.",
      "Set a fixed wind-down time to defend seven to eight hours of sleep.",
      "Prepare tomorrow's meals when cooking tonight's dinner.",
    ],
  },
  CategoryEntry {
    category: "Mindfulness & Meditation",
    key_points: &[
      "Attention is trainable, and noticing distraction is the training.",
      "Observing thoughts without judgment loosens their grip.",
      "Short daily practice outweighs long occasional sessions.",
      "Calm is a byproduct of practice, not a prerequisite for it.",
    ],
    practice_points: &[
      "Sit for five minutes each morning and follow the breath.",
      "Take three conscious breaths before answering difficult messages.",
      "Do one routine activity per day, like walking or washing dishes, with full attention.",
    ],
  },
  CategoryEntry {
    category: "Philosophy",
    key_points: &[
      "Examining assumptions is the beginning of understanding them.",
      "What is in your control deserves your energy; the rest does not.",
      "A good life is measured by character, not by circumstance.",
      "Questions that resist easy answers are often the ones worth holding.",
    ],
    practice_points: &[
      "Journal on one question each week without rushing to a conclusion.",
      "When frustrated, name what part of the situation you actually control.",
      "Read one difficult text slowly instead of many easy ones quickly.",
    ],
  },
];

fn owned(points: &[&str]) -> Vec<String> {
  points.iter().map(|point| point.to_string()).collect()
}

/// Canned insights for a category; unknown categories resolve to the
/// Personal Growth entry. The result is always tagged as fallback content.
pub fn generate(category: &str) -> Insights {
  let entry = CATEGORY_TABLE
    .iter()
    .find(|entry| entry.category.eq_ignore_ascii_case(category.trim()))
    .unwrap_or(&CATEGORY_TABLE[0]);

  Insights::from_fallback(owned(entry.key_points), owned(entry.practice_points))
}

/// Category names with canned content, in table order
pub fn categories() -> Vec<&'static str> {
  CATEGORY_TABLE.iter().map(|entry| entry.category).collect()
}
