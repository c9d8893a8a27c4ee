use crate::time_of_day::TimeOfDay;
use crate::transcript::Cue;

// @module: Cue re-segmentation: sentence-aware text splitting and
// proportional time splitting for over-long subtitle cues

/// Cues longer than this many characters get re-segmented.
pub const DEFAULT_MAX_CUE_CHARS: usize = 120;

/// Rendered subtitle lines are wrapped to this width.
pub const DEFAULT_MAX_LINE_WIDTH: usize = 60;

// @const: Target duration per split segment, in seconds
const SEGMENT_ALLOTMENT_SECONDS: i64 = 10;

/// Split text into chunks of at most `max_length` characters, preferring
/// sentence boundaries (`.`, `?`, `!`, `,`) and falling back to word
/// boundaries. A mid-word break is accepted as a last resort when a
/// single word spans the whole window. Chunks are trimmed of surrounding
/// whitespace; empty input yields an empty vector.
pub fn split_by_sentences(text: &str, max_length: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let mut cursor = 0;

    while cursor < chars.len() {
        // If the remaining text is short, take it all
        if chars.len() - cursor <= max_length {
            chunks.push(collect_trimmed(&chars[cursor..]));
            break;
        }

        let boundary = match end_of_sentence_before(&chars, cursor + max_length + 1) {
            // Include the punctuation character in the chunk
            Some(end) if end >= cursor => end + 1,
            _ => {
                // No sentence end in the window; walk back to the nearest
                // whitespace to avoid breaking inside a word
                let mut end = cursor + max_length;
                while end > cursor && !matches!(chars[end - 1], ' ' | '\n') {
                    end -= 1;
                }
                if end == cursor { cursor + max_length } else { end }
            }
        };

        chunks.push(collect_trimmed(&chars[cursor..boundary]));
        cursor = boundary;
    }

    chunks
}

/// Find the last sentence-ending character strictly before `pos`.
fn end_of_sentence_before(chars: &[char], pos: usize) -> Option<usize> {
    let limit = pos.min(chars.len());
    (0..limit).rev().find(|&i| matches!(chars[i], '.' | '?' | '!' | ','))
}

fn collect_trimmed(chars: &[char]) -> String {
    chars.iter().collect::<String>().trim().to_string()
}

/// Wrap text into lines of at most `max_width` characters, breaking only
/// at whitespace. A single word longer than the width is emitted on its
/// own line, unsplit; word integrity beats the width limit. Empty or
/// whitespace-only input yields an empty vector.
pub fn wrap_lines(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Split the `start..end` range into `count` contiguous intervals. Each
/// segment is allotted ten seconds where the range allows it, with the
/// last segment absorbing the remainder; a smaller range is divided
/// equally instead.
///
/// Candidate starts are generated while the offset stays below the
/// absolute end value in seconds, then capped at `count`; a zero
/// allotment (range shorter than `count` seconds) therefore degenerates
/// to zero-length steps, and a range ending at midnight generates
/// nothing. Callers zip positionally, so fewer intervals than `count`
/// silently drop the unmatched tail.
pub fn split_time(start: TimeOfDay, end: TimeOfDay, count: usize) -> Vec<(TimeOfDay, TimeOfDay)> {
    if count == 0 {
        return Vec::new();
    }

    let end_seconds = end.total_seconds();
    let total_duration = end_seconds - start.total_seconds();

    // If too small for ten-second segments, just split evenly
    let allotment = SEGMENT_ALLOTMENT_SECONDS.min(total_duration / count as i64);

    let mut starts = Vec::with_capacity(count);
    let mut offset: i64 = 0;
    while offset < end_seconds && starts.len() < count {
        starts.push(start.add_seconds(offset as f64));
        offset += allotment;
    }

    // Each segment ends where the next one starts; the last segment is
    // forced to the original end so the range stays fully covered
    starts
        .iter()
        .enumerate()
        .map(|(i, &seg_start)| (seg_start, starts.get(i + 1).copied().unwrap_or(end)))
        .collect()
}

/// Re-segment one over-long cue into several cues of bounded text length
/// and bounded time span. Cues at or under `max_chars` characters pass
/// through unchanged. The first emitted cue always starts at the original
/// cue's start, and the output never has more cues than text chunks.
pub fn resegment(cue: &Cue, max_chars: usize) -> Vec<Cue> {
    if cue.text.chars().count() <= max_chars {
        return vec![cue.clone()];
    }

    let chunks = split_by_sentences(&cue.text, max_chars);
    let intervals = split_time(cue.start, cue.end, chunks.len());

    chunks
        .into_iter()
        .zip(intervals)
        .map(|(text, (start, end))| Cue::new(start, end, text))
        .collect()
}
