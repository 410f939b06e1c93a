//! Byte/character offset handling and length-preserving case folding.
//!
//! # Why two coordinate systems
//!
//! The regex engine reports **byte** offsets, but spans are stored as
//! **code-point** offsets (that is what the downstream trainer's
//! `char_span` alignment expects, and what the curated seed corpus was
//! hand-labeled in). For ASCII titles the two coincide; the moment a title
//! contains `m²`, `€` or an accented French word they diverge:
//!
//! ```text
//! Text: "120 m² à Tunis"
//!
//! bytes: 1   2   0   ␣   m   [ ² ]   ␣  [ à ]  ...
//!        0   1   2   3   4   5-6     7   8-9
//! chars: 1   2   0   ␣   m   ²   ␣   à   ...
//!        0   1   2   3   4   5   6   7
//! ```
//!
//! [`SpanConverter`] builds the byte↔char maps once per title so each regex
//! match converts in O(1).
//!
//! # Why a custom lowercase
//!
//! All matching runs on a lowercased copy of the title while spans must
//! index the *original* string. That only works if lowercasing never
//! changes the code-point count. `str::to_lowercase` can expand a character
//! (e.g. 'İ' becomes "i̇", two code points), which would shift every offset
//! after it. [`fold_lowercase`] maps each character to its single-character
//! lowercase form and leaves expanding characters untouched.

/// Lowercase `text` without changing its code-point count.
///
/// Characters whose full Unicode lowercasing expands to more than one code
/// point are kept as-is; everything a listing title realistically contains
/// (ASCII, accented Latin, currency and unit signs) folds one-to-one.
///
/// # Example
///
/// ```rust
/// use annonce::fold_lowercase;
///
/// assert_eq!(fold_lowercase("VENDRE à Tunis"), "vendre à tunis");
/// assert_eq!(
///     fold_lowercase("İstanbul").chars().count(),
///     "İstanbul".chars().count(),
/// );
/// ```
#[must_use]
pub fn fold_lowercase(text: &str) -> String {
    text.chars()
        .map(|c| {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        })
        .collect()
}

/// Extract the `[start, end)` code-point range of `text` as a `String`.
///
/// Out-of-range offsets are clamped to the end of the text.
#[must_use]
pub fn slice_chars(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end.saturating_sub(start)).collect()
}

/// Precomputed byte↔char offset maps for one string.
///
/// ASCII strings take an identity fast path with no allocation.
#[derive(Debug, Clone)]
pub struct SpanConverter {
    byte_to_char: Vec<usize>,
    char_to_byte: Vec<usize>,
    is_ascii: bool,
}

impl SpanConverter {
    /// Build the maps for `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        if text.is_ascii() {
            return Self {
                byte_to_char: Vec::new(),
                char_to_byte: Vec::new(),
                is_ascii: true,
            };
        }

        // byte_to_char has one slot per byte plus the one-past-the-end
        // offset, so exclusive match ends convert without special-casing.
        let mut byte_to_char = vec![0usize; text.len() + 1];
        let mut char_to_byte = Vec::with_capacity(text.chars().count() + 1);
        for (char_idx, (byte_idx, c)) in text.char_indices().enumerate() {
            char_to_byte.push(byte_idx);
            for offset in 0..c.len_utf8() {
                byte_to_char[byte_idx + offset] = char_idx;
            }
        }
        byte_to_char[text.len()] = char_to_byte.len();
        char_to_byte.push(text.len());

        Self {
            byte_to_char,
            char_to_byte,
            is_ascii: false,
        }
    }

    /// Convert a byte offset to a code-point offset.
    ///
    /// Offsets past the end of the string saturate to the final offset.
    #[must_use]
    pub fn byte_to_char(&self, byte_idx: usize) -> usize {
        if self.is_ascii {
            return byte_idx;
        }
        self.byte_to_char
            .get(byte_idx)
            .copied()
            .unwrap_or_else(|| self.byte_to_char.last().copied().unwrap_or(0))
    }

    /// Convert a code-point offset to a byte offset.
    #[must_use]
    pub fn char_to_byte(&self, char_idx: usize) -> usize {
        if self.is_ascii {
            return char_idx;
        }
        self.char_to_byte
            .get(char_idx)
            .copied()
            .unwrap_or_else(|| self.char_to_byte.last().copied().unwrap_or(0))
    }
}
