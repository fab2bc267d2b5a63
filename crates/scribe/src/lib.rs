//! Scribe - Leveled Logging for the Marginalia Workspace
//!
//! ## Features
//!
//! - Standard logging levels (verbose, info, warn, error, debug, success)
//! - Multi-line message support with consistent prefixes
//! - Timestamped event variants for long-running operations
//! - All output to stderr, keeping stdout free for command results
//!
//! ## Usage
//!
//! Standard logging functions: `info()`, `warn()`, `error()`, `debug()`, `success()`
//!
//! Event logging: `event_info()`, `event_warn()`, `event_error()`

use chrono::Local;
use colored::*;

/// Core logging function that handles the actual output
pub fn log(message: &str) {
  for line in message.lines() {
    eprintln!("{line}");
  }
}

/// Format a colored prefix for log messages
fn format_prefix(color: Color, prefix: &str) -> String {
  format!("[{}]{:<width$}", prefix.color(color).bold(), "", width = 8 - prefix.len() - 2)
}

fn log_with_prefix(prefix: &str, message: &str) {
  for line in message.lines() {
    log(&format!("{prefix} {line}"));
  }
}

/// Verbose level logging - chatty progress detail
pub fn verbose(message: &str) {
  log_with_prefix(&format_prefix(Color::Cyan, "verb"), message);
}

/// Info level logging - general information
pub fn info(message: &str) {
  log_with_prefix(&format_prefix(Color::Blue, "info"), message);
}

/// Warning level logging - something needs attention
pub fn warn(message: &str) {
  log_with_prefix(&format_prefix(Color::Yellow, "warn"), message);
}

/// Error level logging - something went wrong
pub fn error(message: &str) {
  log_with_prefix(&format_prefix(Color::Red, "error"), message);
}

/// Debug level logging - detailed diagnostic information
pub fn debug(message: &str) {
  log_with_prefix(&format_prefix(Color::Magenta, "debug"), message);
}

/// Success level logging - something completed successfully
pub fn success(message: &str) {
  log_with_prefix(&format_prefix(Color::Green, "done"), message);
}

fn event_prefix(color: Color) -> String {
  let timestamp = Local::now().format("%H:%M:%S").to_string();
  format!("[{}] [{}]", "event".color(color).bold(), timestamp.cyan())
}

/// Timestamped info event
pub fn event_info(message: &str) {
  log_with_prefix(&event_prefix(Color::Blue), message);
}

/// Timestamped warning event
pub fn event_warn(message: &str) {
  log_with_prefix(&event_prefix(Color::Yellow), message);
}

/// Timestamped error event
pub fn event_error(message: &str) {
  log_with_prefix(&event_prefix(Color::Red), message);
}
