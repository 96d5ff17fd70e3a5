//! Punctuation classification
//!
//! Recognizes a fixed catalog of punctuation glyphs at an exact text
//! position. The catalog is closed at build time and covers both the
//! full-width CJK marks (three bytes each in UTF-8) and their ASCII
//! counterparts (one byte each). Catalog order decides: the first matching
//! entry wins.

/// Fixed punctuation catalog as (glyph, byte length) pairs
const CATALOG: &[(&str, usize)] = &[
    ("，", 3),
    ("。", 3),
    ("！", 3),
    ("？", 3),
    ("；", 3),
    ("：", 3),
    ("“", 3),
    ("”", 3),
    ("‘", 3),
    ("’", 3),
    ("『", 3),
    ("』", 3),
    ("【", 3),
    ("】", 3),
    ("《", 3),
    ("》", 3),
    ("、", 3),
    ("（", 3),
    ("）", 3),
    ("［", 3),
    ("］", 3),
    ("｛", 3),
    ("｝", 3),
    ("※", 3),
    ("(", 1),
    (")", 1),
    ("[", 1),
    ("]", 1),
    ("{", 1),
    ("}", 1),
    ("\"", 1),
];

/// Classifier over the fixed punctuation catalog
///
/// No partial or case-normalized matching is performed; a glyph either
/// occurs byte-for-byte at the given position or it does not.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationClassifier;

impl PunctuationClassifier {
    /// Create a new classifier
    pub fn new() -> Self {
        Self
    }

    /// Byte length of the punctuation glyph at the start of `rest`, if any
    pub fn match_at(&self, rest: &str) -> Option<usize> {
        let bytes = rest.as_bytes();
        CATALOG
            .iter()
            .find(|(glyph, _)| bytes.starts_with(glyph.as_bytes()))
            .map(|&(_, len)| len)
    }

    /// Whether `text` is exactly one catalog glyph
    pub fn is_glyph(&self, text: &str) -> bool {
        self.match_at(text) == Some(text.len())
    }
}
