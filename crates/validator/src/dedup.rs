use prospect_types::ContentHash;
use std::collections::HashSet;

/// Token-set Jaccard similarity at or above this value counts as a
/// paraphrase of previously seen evidence.
pub const NEAR_DUPLICATE_JACCARD: f64 = 0.8;

/// Result of checking a piece of evidence against prior evidence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DuplicateCheck {
    /// Byte-identical after normalization.
    Exact,
    /// Paraphrase: token similarity at or above the threshold.
    Near { similarity: f64 },
    /// Not seen before.
    New,
}

impl DuplicateCheck {
    pub fn is_duplicate(&self) -> bool {
        !matches!(self, DuplicateCheck::New)
    }
}

/// Fingerprint of one piece of seen evidence.
#[derive(Clone, Debug)]
struct Fingerprint {
    exact: ContentHash,
    tokens: HashSet<String>,
}

/// Per-hypothesis registry of evidence fingerprints.
///
/// Exact matches compare normalized-text hashes; near matches compare
/// token sets by Jaccard similarity.
#[derive(Clone, Debug, Default)]
pub struct DedupIndex {
    seen: Vec<Fingerprint>,
}

impl DedupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered evidence texts.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Check `text` against everything registered so far.
    pub fn check(&self, text: &str) -> DuplicateCheck {
        let normalized = normalize(text);
        let exact = ContentHash::hash(normalized.as_bytes());
        let tokens = token_set(&normalized);

        let mut best_similarity = 0.0f64;
        for prior in &self.seen {
            if prior.exact == exact {
                return DuplicateCheck::Exact;
            }
            let similarity = jaccard(&tokens, &prior.tokens);
            if similarity > best_similarity {
                best_similarity = similarity;
            }
        }
        if best_similarity >= NEAR_DUPLICATE_JACCARD {
            DuplicateCheck::Near {
                similarity: best_similarity,
            }
        } else {
            DuplicateCheck::New
        }
    }

    /// Register `text` as seen. Returns the normalized-text hash.
    pub fn register(&mut self, text: &str) -> ContentHash {
        let normalized = normalize(text);
        let exact = ContentHash::hash(normalized.as_bytes());
        self.seen.push(Fingerprint {
            exact: exact.clone(),
            tokens: token_set(&normalized),
        });
        exact
    }

    /// Hash of the normalized text, without registering it.
    pub fn excerpt_hash(text: &str) -> ContentHash {
        ContentHash::hash(normalize(text).as_bytes())
    }
}

/// Lowercase, strip punctuation, collapse whitespace.
fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_space = true;
    for c in text.chars() {
        if c.is_alphanumeric() {
            for lower in c.to_lowercase() {
                out.push(lower);
            }
            last_was_space = false;
        } else if !last_was_space {
            out.push(' ');
            last_was_space = true;
        }
    }
    out.trim_end().to_string()
}

fn token_set(normalized: &str) -> HashSet<String> {
    normalized
        .split(' ')
        .filter(|w| !w.is_empty())
        .map(|w| w.to_string())
        .collect()
}

fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}
