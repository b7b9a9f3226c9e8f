//! Reply splitting for Discord's message size limit
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

/// Discord message content limit
pub const MESSAGE_LIMIT: usize = 2000;

/// Split a reply into pieces no longer than `max_size` bytes.
///
/// Lines are kept whole when they fit; a single oversized line is cut on
/// character boundaries.
pub fn chunk_text(text: &str, max_size: usize) -> Vec<String> {
    if text.len() <= max_size {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        let needed = if current.is_empty() { line.len() } else { line.len() + 1 };
        if current.len() + needed > max_size && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }

        if line.len() > max_size {
            chunks.extend(split_long_line(line, max_size));
            continue;
        }

        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn split_long_line(line: &str, max_size: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();

    for ch in line.chars() {
        if current.len() + ch.len_utf8() > max_size && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }

    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Chunk text for message content (2000 byte limit)
pub fn chunk_for_message(text: &str) -> Vec<String> {
    chunk_text(text, MESSAGE_LIMIT)
}
