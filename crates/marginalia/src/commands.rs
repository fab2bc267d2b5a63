use anyhow::{anyhow, Context, Result};
use colored::*;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::cache::{ContentRequest, InsightCache};
use crate::fallback;
use crate::fetch::{FetcherConfig, HttpContentFetcher};
use crate::insight::Insights;
use crate::parser;

/// Parse a local content file and print the validated insights
pub fn parse_content(file: &Path, title: &str, category: &str, json: bool) -> Result<()> {
  let raw = read_content(file)?;
  let insights = parser::parse(Some(&raw), title, category).validated();

  print_insights(title, &insights, json)
}

/// Resolve one content id through the cache and the content service
pub async fn fetch_insights(
  id: &str,
  title: &str,
  category: &str,
  config: FetcherConfig,
  json: bool,
) -> Result<()> {
  let cache = InsightCache::new(Arc::new(HttpContentFetcher::with_config(config)));
  let insights = cache.get(id, title, category).await;

  print_insights(title, &insights, json)
}

/// Resolve a whole manifest of content ids and print per-id summaries
pub async fn batch_fetch(manifest: &Path, config: FetcherConfig, json: bool) -> Result<()> {
  let raw = std::fs::read_to_string(manifest)
    .with_context(|| format!("failed to read manifest {}", manifest.display()))?;
  let items: Vec<ContentRequest> =
    serde_json::from_str(&raw).context("manifest must be a JSON array of {id, title, category}")?;

  if items.is_empty() {
    return Err(anyhow!("manifest contains no items"));
  }

  let cache = InsightCache::new(Arc::new(HttpContentFetcher::with_config(config)));
  let results = cache.get_batch(&items).await;

  if json {
    println!("{}", serde_json::to_string_pretty(&results)?);
    return Ok(());
  }

  for item in &items {
    if let Some(insights) = results.get(&item.id) {
      println!(
        "{} {} {}: {} key, {} practice ({})",
        "✓".green(),
        item.id.cyan(),
        item.title.yellow(),
        insights.key_points.len(),
        insights.practice_points.len(),
        source_tag(insights)
      );
    }
  }

  let stats = cache.stats();
  scribe::info(&format!(
    "batch of {}: {} real, {} fallback, avg {:.1} key / {:.1} practice points",
    stats.total_entries,
    stats.real_content_entries,
    stats.fallback_entries,
    stats.avg_key_points,
    stats.avg_practice_points
  ));

  Ok(())
}

/// Print the canned content for a category
pub fn show_fallback(category: &str, json: bool) -> Result<()> {
  let insights = fallback::generate(category);
  print_insights(category, &insights, json)
}

/// List all categories with canned content
pub fn list_categories() -> Result<()> {
  for category in fallback::categories() {
    println!("{}", category.cyan());
  }
  Ok(())
}

fn read_content(file: &Path) -> Result<String> {
  if file.as_os_str() == "-" {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer).context("failed to read stdin")?;
    return Ok(buffer);
  }

  std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}

fn source_tag(insights: &Insights) -> ColoredString {
  if insights.has_real_content {
    insights.content_source.to_string().green()
  } else {
    insights.content_source.to_string().yellow()
  }
}

fn print_insights(title: &str, insights: &Insights, json: bool) -> Result<()> {
  if json {
    println!("{}", serde_json::to_string_pretty(insights)?);
    return Ok(());
  }

  println!("{} ({})", title.bold(), source_tag(insights));

  if !insights.key_points.is_empty() {
    println!("\n{}", "Key Points".bold().underline());
    for (index, point) in insights.key_points.iter().enumerate() {
      println!("{} {}", format!("{}.", index + 1).cyan(), point);
    }
  }

  if !insights.practice_points.is_empty() {
    println!("\n{}", "Practice Points".bold().underline());
    for point in &insights.practice_points {
      println!("{} {}", "•".cyan(), point);
    }
  }

  Ok(())
}
