//! Sentence scoring.
//!
//! Each sentence's score is the sum of its TF-IDF weights divided by its
//! raw word count: all whitespace-delimited words of the original sentence
//! text, stopwords and punctuation included, not the filtered token count.
//! Scores are keyed by sentence index so textually identical sentences stay
//! distinct.

use crate::tfidf::TfIdfTable;
use crate::types::ScoreMap;

/// Score every sentence with at least one whitespace-delimited word.
///
/// Zero-word sentences are excluded from the map rather than dividing by
/// zero; absent entries can never be selected downstream. A sentence whose
/// tokens were all filtered away scores 0, not an error.
pub fn score_sentences(sentences: &[String], tfidf: &TfIdfTable) -> ScoreMap {
    let mut scores = ScoreMap::default();
    for (index, sentence) in sentences.iter().enumerate() {
        let word_count = sentence.split_whitespace().count();
        if word_count == 0 {
            continue;
        }
        scores.insert(index, tfidf.sentence_sum(index) / word_count as f64);
    }
    scores
}
