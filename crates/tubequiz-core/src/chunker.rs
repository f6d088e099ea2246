//! Overlapping text chunker.
//!
//! Splits long transcripts into segments that fit a model's input budget.
//! Cuts prefer natural boundaries (paragraph, line, sentence, word) and fall
//! back to a hard cut. Sizes count characters, not bytes.

use serde::{Deserialize, Serialize};

use crate::error::ChunkerError;

/// Boundaries tried from the end of the window, most preferred first.
const SEPARATORS: [&str; 4] = ["\n\n", "\n", ". ", " "];

/// One size-bounded piece of a larger text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSegment {
    /// Position in the sequence, starting at 0.
    pub index: usize,
    /// Segment text, including the overlap with the previous segment.
    pub content: String,
    /// Byte length of the prefix of `content` repeated from the previous segment.
    pub overlap: usize,
}

impl TextSegment {
    /// The part of this segment not already covered by its predecessor.
    pub fn fresh(&self) -> &str {
        &self.content[self.overlap..]
    }
}

/// Reassemble the original text from its segments.
pub fn reassemble(segments: &[TextSegment]) -> String {
    segments.iter().map(TextSegment::fresh).collect()
}

/// Split `text` into segments of at most `chunk_size` characters, each
/// starting roughly `overlap` characters before the previous cut.
pub fn split(
    text: &str,
    chunk_size: usize,
    overlap: usize,
) -> Result<Vec<TextSegment>, ChunkerError> {
    if chunk_size == 0 {
        return Err(ChunkerError::ZeroChunkSize);
    }
    if overlap >= chunk_size {
        return Err(ChunkerError::OverlapTooLarge {
            chunk_size,
            overlap,
        });
    }

    // bounds[k] is the byte offset of char k; the last entry is text.len()
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = bounds.len() - 1;

    let mut segments = Vec::new();
    let mut start = 0usize;
    let mut carried = 0usize;

    loop {
        if char_count - start <= chunk_size {
            segments.push(TextSegment {
                index: segments.len(),
                content: text[bounds[start]..].to_string(),
                overlap: bounds[start + carried] - bounds[start],
            });
            break;
        }

        let window_end = start + chunk_size;
        let cut = find_cut(text, &bounds, start + overlap, window_end);

        segments.push(TextSegment {
            index: segments.len(),
            content: text[bounds[start]..bounds[cut]].to_string(),
            overlap: bounds[start + carried] - bounds[start],
        });

        let next = align_to_word(text, &bounds, cut - overlap, cut);
        carried = cut - next;
        start = next;
    }

    Ok(segments)
}

/// Char index of the cut for a window `(floor, window_end]`.
///
/// The cut must land strictly after `floor` so the next segment, which
/// starts `overlap` chars before the cut, still advances.
fn find_cut(text: &str, bounds: &[usize], floor: usize, window_end: usize) -> usize {
    let base = bounds[floor];
    let window = &text[base..bounds[window_end]];

    for sep in SEPARATORS {
        if let Some(pos) = window.rfind(sep) {
            let byte = base + pos + sep.len();
            if let Ok(idx) = bounds.binary_search(&byte) {
                return idx;
            }
        }
    }

    window_end
}

/// Move `from` forward to the first word start before `cut`, if any.
fn align_to_word(text: &str, bounds: &[usize], from: usize, cut: usize) -> usize {
    let slice = &text[bounds[from]..bounds[cut]];
    match slice.find(char::is_whitespace) {
        Some(pos) => {
            let ws_len = slice[pos..].chars().next().map_or(1, char::len_utf8);
            let byte = bounds[from] + pos + ws_len;
            match bounds.binary_search(&byte) {
                Ok(idx) if idx < cut => idx,
                _ => from,
            }
        }
        None => from,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lorem(words: usize) -> String {
        let vocab = [
            "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta",
        ];
        let mut out = String::new();
        for i in 0..words {
            if i > 0 {
                out.push(if i % 11 == 0 { '.' } else { ' ' });
                if i % 11 == 0 {
                    out.push(' ');
                }
            }
            out.push_str(vocab[i % vocab.len()]);
        }
        out
    }

    #[test]
    fn short_text_is_single_segment() {
        let segments = split("Hello world.", 7000, 1000).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].content, "Hello world.");
        assert_eq!(segments[0].overlap, 0);
    }

    #[test]
    fn text_of_exactly_chunk_size_is_single_segment() {
        let text = "abcdefghij";
        let segments = split(text, 10, 3).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].content, text);
    }

    #[test]
    fn empty_text_is_single_empty_segment() {
        let segments = split("", 10, 2).unwrap();
        assert_eq!(segments.len(), 1);
        assert!(segments[0].content.is_empty());
    }

    #[test]
    fn invalid_parameters_rejected() {
        assert_eq!(split("abc", 0, 0), Err(ChunkerError::ZeroChunkSize));
        assert!(matches!(
            split("abc", 10, 10),
            Err(ChunkerError::OverlapTooLarge { .. })
        ));
    }

    #[test]
    fn segments_respect_chunk_size() {
        let text = lorem(2000);
        let segments = split(&text, 200, 40).unwrap();
        assert!(segments.len() > 1);
        for seg in &segments {
            assert!(
                seg.content.chars().count() <= 200,
                "segment {} has {} chars",
                seg.index,
                seg.content.chars().count()
            );
        }
    }

    #[test]
    fn segments_reassemble_to_original() {
        for (size, overlap) in [(50, 10), (200, 40), (7000, 1000), (13, 12)] {
            let text = lorem(3000);
            let segments = split(&text, size, overlap).unwrap();
            assert_eq!(reassemble(&segments), text, "size={size} overlap={overlap}");
        }
    }

    #[test]
    fn hard_cut_when_no_boundary() {
        let text = "x".repeat(25);
        let segments = split(&text, 10, 2).unwrap();
        assert_eq!(segments[0].content, "x".repeat(10));
        assert_eq!(segments[1].overlap, 2);
        assert_eq!(reassemble(&segments), text);
    }

    #[test]
    fn prefers_paragraph_boundary() {
        let text = format!("{}\n\n{}", "a ".repeat(20), "b ".repeat(20));
        let segments = split(&text, 60, 5).unwrap();
        assert!(
            segments[0].content.ends_with("\n\n"),
            "first segment should end at the paragraph break: {:?}",
            segments[0].content
        );
    }

    #[test]
    fn consecutive_segments_overlap() {
        let text = lorem(500);
        let segments = split(&text, 100, 30).unwrap();
        for pair in segments.windows(2) {
            let prev = &pair[0];
            let next = &pair[1];
            assert!(next.overlap > 0);
            let shared = &next.content[..next.overlap];
            assert!(prev.content.ends_with(shared));
        }
    }

    #[test]
    fn multibyte_text_counts_chars() {
        let text = "héllo wörld ünïcode ".repeat(40);
        let segments = split(&text, 30, 8).unwrap();
        for seg in &segments {
            assert!(seg.content.chars().count() <= 30);
        }
        assert_eq!(reassemble(&segments), text);
    }

    #[test]
    fn indices_are_sequential() {
        let segments = split(&lorem(1000), 120, 20).unwrap();
        for (i, seg) in segments.iter().enumerate() {
            assert_eq!(seg.index, i);
        }
    }
}
