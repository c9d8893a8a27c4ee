use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use log::{debug, warn};

use crate::file_utils::FileManager;
use crate::segmenter;
use crate::time_of_day::TimeOfDay;

// @module: Transcript entity model, raw transcript parsing and VTT output

/// First line of every WebVTT file.
pub const VTT_HEADER: &str = "WEBVTT";

// @const: Gap subtracted from a closing timestamp when a cue ends
const CUE_GAP_SECONDS: f64 = 0.5;

// @const: Duration given to the trailing cue left open at end of input
const TRAILING_CUE_SECONDS: f64 = 5.0;

/// One subtitle display interval and its text. `start <= end` is expected
/// (a zero-duration cue is degenerate but permitted). Re-segmentation
/// always produces new values; a cue is never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub text: String,
}

impl Cue {
    pub fn new(start: TimeOfDay, end: TimeOfDay, text: String) -> Self {
        Cue { start, end, text }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} --> {} {:?}", self.start, self.end, self.text)
    }
}

/// Ordered sequence of cues covering one recording, in temporal order as
/// produced by the parser. This is the sole aggregate the conversion
/// pipeline threads through.
#[derive(Debug)]
pub struct Transcript {
    /// Source filename
    pub source_file: PathBuf,

    /// List of cues in temporal order
    pub cues: Vec<Cue>,
}

impl Transcript {
    /// Read and parse a raw transcript file.
    pub fn from_raw_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = FileManager::read_to_string(path)?;
        Ok(Transcript {
            source_file: path.to_path_buf(),
            cues: Self::parse_raw(&content),
        })
    }

    /// Parse raw transcript content: one line per record, where a line
    /// that parses as an ISO local time is a timestamp and everything
    /// else is body text.
    ///
    /// A timestamp closes the pending cue half a second before its own
    /// value and opens a new one; a timestamp with no body collected yet
    /// is skipped outright, so a leading timestamp carries no cue and the
    /// first cue starts at 00:00:00. A malformed timestamp is not an
    /// error, it is body text. Body left pending at end of input becomes
    /// a final cue lasting a flat five seconds.
    pub fn parse_raw(content: &str) -> Vec<Cue> {
        let mut cues = Vec::new();
        let mut start = TimeOfDay::MIDNIGHT;
        let mut pending: Vec<String> = Vec::new();

        for line in content.lines() {
            let trimmed = line.trim();
            match TimeOfDay::parse(trimmed) {
                Some(_) if pending.is_empty() => continue,
                Some(stamp) => {
                    let end = stamp.add_seconds(-CUE_GAP_SECONDS);
                    cues.push(Cue::new(start, end, pending.join(" ")));
                    start = stamp;
                    pending.clear();
                }
                None => pending.push(trimmed.to_string()),
            }
        }

        if !pending.is_empty() {
            // TODO: derive the trailing duration from the next recording
            // marker instead of a flat five seconds
            let end = start.add_seconds(TRAILING_CUE_SECONDS);
            cues.push(Cue::new(start, end, pending.join(" ")));
        }

        cues
    }

    /// Produce a new transcript with every cue longer than `max_chars`
    /// characters re-segmented into bounded cues. The source transcript
    /// is left untouched.
    pub fn split_long_cues(&self, max_chars: usize) -> Transcript {
        let cues: Vec<Cue> = self
            .cues
            .iter()
            .flat_map(|cue| segmenter::resegment(cue, max_chars))
            .collect();

        if cues.len() != self.cues.len() {
            debug!(
                "Re-segmented {} cue(s) into {} cue(s)",
                self.cues.len(),
                cues.len()
            );
        }

        Transcript {
            source_file: self.source_file.clone(),
            cues,
        }
    }

    /// Write the transcript to a WebVTT file: the `WEBVTT` header, a
    /// blank line, then one timing line and wrapped text lines per cue,
    /// each cue followed by a blank separator line.
    pub fn write_to_vtt<P: AsRef<Path>>(&self, path: P, max_line_width: usize) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        let mut file = File::create(path)
            .with_context(|| format!("Failed to create subtitle file: {}", path.display()))?;

        writeln!(file, "{}", VTT_HEADER)?;
        writeln!(file)?;

        for cue in &self.cues {
            if cue.end < cue.start {
                warn!("Cue has end before start: {}", cue);
            }
            writeln!(file, "{} --> {}", cue.start, cue.end)?;
            for line in segmenter::wrap_lines(&cue.text, max_line_width) {
                writeln!(file, "{}", line)?;
            }
            writeln!(file)?;
        }

        Ok(())
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Transcript")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Cues: {}", self.cues.len())?;
        Ok(())
    }
}
