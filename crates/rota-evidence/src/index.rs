//! TF-IDF weighting and cosine-ranked search.
//!
//! Tokens are lowercase alphanumeric runs of at least two characters with
//! English stopwords removed. Term weights use smoothed inverse document
//! frequency, `ln((1 + n) / (1 + df)) + 1`, and every document vector is
//! L2-normalized at build time so cosine similarity reduces to a dot product.

use std::collections::{HashMap, HashSet};

use crate::chunk::EvidenceChunk;

/// Common English words excluded from the vocabulary.
const STOPWORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "also", "an", "and", "any", "are", "as", "at", "be",
    "because", "been", "before", "being", "between", "both", "but", "by", "can", "could", "did",
    "do", "does", "each", "few", "for", "from", "had", "has", "have", "he", "her", "here", "his",
    "how", "if", "in", "into", "is", "it", "its", "just", "may", "might", "more", "most", "no",
    "not", "now", "of", "on", "only", "or", "other", "our", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "them", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "very",
    "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will",
    "with", "would", "you", "your",
];

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.len() >= 2 && !STOPWORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// One ranked result: the matching chunk and its cosine score in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub chunk: EvidenceChunk,
    pub score: f64,
}

/// An immutable TF-IDF index over a fixed chunk set.
///
/// Built once from the full corpus; queries are vectorized against the same
/// vocabulary, so terms unseen at build time simply contribute nothing.
#[derive(Debug, Clone)]
pub struct EvidenceIndex {
    chunks: Vec<EvidenceChunk>,
    idf: HashMap<String, f64>,
    vectors: Vec<HashMap<String, f64>>,
}

impl EvidenceIndex {
    /// Tokenize every chunk, compute smoothed IDF over the corpus, and store
    /// one normalized weight vector per chunk.
    pub fn build(chunks: Vec<EvidenceChunk>) -> Self {
        let tokenized: Vec<Vec<String>> = chunks.iter().map(|c| tokenize(&c.text)).collect();

        let n = chunks.len() as f64;
        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        for tokens in &tokenized {
            let distinct: HashSet<&String> = tokens.iter().collect();
            for term in distinct {
                *document_frequency.entry(term.clone()).or_insert(0) += 1;
            }
        }

        let idf: HashMap<String, f64> = document_frequency
            .into_iter()
            .map(|(term, df)| {
                let weight = ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0;
                (term, weight)
            })
            .collect();

        let vectors = tokenized
            .iter()
            .map(|tokens| weigh(&idf, tokens))
            .collect();

        Self {
            chunks,
            idf,
            vectors,
        }
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// The `k` chunks most similar to `query`, best first.
    ///
    /// Ties and zero scores keep corpus order (the sort is stable), and
    /// zero-score hits are not filtered out — a short corpus returns `k`
    /// results even when only some match.
    pub fn search(&self, query: &str, k: usize) -> Vec<SearchHit> {
        if self.chunks.is_empty() || k == 0 {
            return Vec::new();
        }

        let query_vector = weigh(&self.idf, &tokenize(query));

        let mut scored: Vec<(usize, f64)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(i, doc)| (i, dot(&query_vector, doc)))
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);

        scored
            .into_iter()
            .map(|(i, score)| SearchHit {
                chunk: self.chunks[i].clone(),
                score,
            })
            .collect()
    }
}

/// Term-frequency × IDF weights for one token list, L2-normalized.
/// Terms outside the vocabulary are dropped.
fn weigh(idf: &HashMap<String, f64>, tokens: &[String]) -> HashMap<String, f64> {
    let mut counts: HashMap<&String, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut weights: HashMap<String, f64> = counts
        .into_iter()
        .filter_map(|(term, count)| {
            idf.get(term)
                .map(|idf_weight| (term.clone(), count as f64 * idf_weight))
        })
        .collect();

    let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in weights.values_mut() {
            *weight /= norm;
        }
    }

    weights
}

fn dot(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(term, w)| large.get(term).map(|v| w * v))
        .sum()
}
