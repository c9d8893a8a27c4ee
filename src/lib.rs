/*!
 * # rawvtt - Raw transcript to WebVTT converter
 *
 * A Rust library for converting raw timestamped transcript files into
 * WebVTT subtitle files.
 *
 * ## Features
 *
 * - Parse raw transcripts (timestamp lines interleaved with body text)
 * - Re-segment over-long cues at sentence and word boundaries
 * - Split cue time ranges proportionally across the new segments
 * - Wrap cue text to subtitle-friendly line widths
 * - Write standard WebVTT output
 * - Batch conversion of whole directories
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `time_of_day`: Wall-clock time values and duration arithmetic
 * - `segmenter`: Text splitting, line wrapping and time splitting
 * - `transcript`: Cue entity model, raw parsing and VTT output
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod segmenter;
pub mod time_of_day;
pub mod transcript;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, ConfigError, SubtitleError};
pub use time_of_day::TimeOfDay;
pub use transcript::{Cue, Transcript};
