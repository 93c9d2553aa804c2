//! Recursive text splitting with overlap
//!
//! Text is cut at the coarsest boundary that keeps pieces under the chunk
//! size: paragraphs first, then lines, sentences, and words. Only a single
//! word longer than the chunk size is cut mid-word. Pieces are then packed
//! greedily into chunks, and each new chunk starts with the trailing pieces
//! of the previous one, up to the overlap length.

use std::collections::VecDeque;

/// Boundaries tried in order, coarsest first
const SEPARATORS: [&str; 4] = ["\n\n", "\n", ". ", " "];

/// Splits long text into overlapping chunks
#[derive(Debug, Clone)]
pub struct TextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl TextSplitter {
    /// Create a splitter; the overlap is clamped below the chunk size
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        Self {
            chunk_size,
            chunk_overlap: chunk_overlap.min(chunk_size - 1),
        }
    }

    /// Split `text` into trimmed, non-empty chunks
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut pieces = Vec::new();
        self.split_pieces(text, 0, &mut pieces);
        self.pack(pieces)
    }

    fn split_pieces<'a>(&self, text: &'a str, level: usize, out: &mut Vec<&'a str>) {
        if char_len(text) <= self.chunk_size {
            out.push(text);
            return;
        }
        let Some(separator) = SEPARATORS.get(level) else {
            self.hard_split(text, out);
            return;
        };

        for part in text.split_inclusive(separator) {
            if char_len(part) <= self.chunk_size {
                out.push(part);
            } else {
                self.split_pieces(part, level + 1, out);
            }
        }
    }

    fn hard_split<'a>(&self, text: &'a str, out: &mut Vec<&'a str>) {
        let mut rest = text;
        while !rest.is_empty() {
            let cut = rest
                .char_indices()
                .nth(self.chunk_size)
                .map(|(index, _)| index)
                .unwrap_or(rest.len());
            out.push(&rest[..cut]);
            rest = &rest[cut..];
        }
    }

    fn pack(&self, pieces: Vec<&str>) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut window: VecDeque<(&str, usize)> = VecDeque::new();
        let mut window_len = 0;

        for piece in pieces {
            let piece_len = char_len(piece);
            if window_len + piece_len > self.chunk_size && !window.is_empty() {
                push_chunk(&window, &mut chunks);
                while window_len > self.chunk_overlap
                    || (window_len + piece_len > self.chunk_size && window_len > 0)
                {
                    match window.pop_front() {
                        Some((_, len)) => window_len -= len,
                        None => break,
                    }
                }
            }
            window.push_back((piece, piece_len));
            window_len += piece_len;
        }
        push_chunk(&window, &mut chunks);
        chunks
    }
}

impl Default for TextSplitter {
    fn default() -> Self {
        Self::new(1000, 200)
    }
}

fn push_chunk(window: &VecDeque<(&str, usize)>, chunks: &mut Vec<String>) {
    let joined: String = window.iter().map(|(piece, _)| *piece).collect();
    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
