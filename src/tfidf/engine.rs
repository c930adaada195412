//! TF-IDF engine.
//!
//! Computes per-sentence term frequencies, corpus-level inverse document
//! frequencies, and their product. Term-frequency tables carry no
//! cross-sentence dependency, so for large documents they are computed in
//! parallel; the IDF aggregation is the single barrier that merges the
//! per-sentence output by value.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use super::{TermWeights, TfIdfTable};
use crate::nlp::tokenizer::WordTokenizer;

/// Sentence count above which term frequencies fan out across threads.
const PARALLEL_CUTOFF: usize = 64;

/// Computes TF-IDF tables for a sentence corpus.
///
/// Borrows the pipeline's tokenizer; the stopword set and lemmatizer behind
/// it are built once and shared across every call.
#[derive(Debug)]
pub struct TfIdfEngine<'a> {
    tokenizer: &'a WordTokenizer,
}

impl<'a> TfIdfEngine<'a> {
    /// Create an engine using the given tokenizer.
    pub fn new(tokenizer: &'a WordTokenizer) -> Self {
        Self { tokenizer }
    }

    /// Compute the full TF-IDF table for `sentences`.
    ///
    /// Deterministic for a fixed input and stopword set: the maps carry no
    /// meaningful order and downstream consumers only sum their values.
    pub fn compute(&self, sentences: &[String]) -> TfIdfTable {
        let tf = self.term_frequencies(sentences);
        let idf = inverse_document_frequencies(&tf, sentences.len());

        let weights = tf
            .into_iter()
            .map(|table| {
                table
                    .into_iter()
                    .map(|(term, freq)| {
                        let idf_weight = idf.get(&term).copied().unwrap_or(0.0);
                        (term, freq * idf_weight)
                    })
                    .collect()
            })
            .collect();

        TfIdfTable::new(weights)
    }

    /// Per-sentence normalized term frequencies.
    ///
    /// Each sentence's values sum to 1.0 when it has at least one qualifying
    /// token; a token-less sentence gets an empty map rather than a division
    /// error. Output order matches input order on both paths.
    pub fn term_frequencies(&self, sentences: &[String]) -> Vec<TermWeights> {
        if sentences.len() < PARALLEL_CUTOFF {
            sentences
                .iter()
                .map(|sentence| self.sentence_term_frequencies(sentence))
                .collect()
        } else {
            sentences
                .par_iter()
                .map(|sentence| self.sentence_term_frequencies(sentence))
                .collect()
        }
    }

    fn sentence_term_frequencies(&self, sentence: &str) -> TermWeights {
        let tokens = self.tokenizer.tokenize(sentence);
        let total = tokens.len();
        if total == 0 {
            return TermWeights::default();
        }

        let mut counts = TermWeights::default();
        for token in tokens {
            *counts.entry(token).or_insert(0.0) += 1.0;
        }
        for value in counts.values_mut() {
            *value /= total as f64;
        }
        counts
    }
}

/// Inverse document frequency for every term appearing in `tf`.
///
/// `idf(t) = ln(total_sentences / sentences_containing(t))`, natural log.
/// A term present in every sentence keeps its entry with weight 0.
/// `total_sentences` counts all sentences, including those that tokenized
/// to nothing.
pub fn inverse_document_frequencies(
    tf: &[TermWeights],
    total_sentences: usize,
) -> FxHashMap<String, f64> {
    let mut document_counts: FxHashMap<&str, usize> = FxHashMap::default();
    for table in tf {
        for term in table.keys() {
            *document_counts.entry(term).or_insert(0) += 1;
        }
    }

    let n = total_sentences as f64;
    document_counts
        .into_iter()
        .map(|(term, count)| (term.to_string(), (n / count as f64).ln()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    fn engine_fixture() -> WordTokenizer {
        WordTokenizer::for_language("en")
    }

    #[test]
    fn test_term_frequencies_sum_to_one() {
        let tokenizer = engine_fixture();
        let engine = TfIdfEngine::new(&tokenizer);
        let corpus = sentences(&[
            "the cat jumped on the mat.",
            "zebra zebra zebra near a rug.",
            "a dog and a cat.",
        ]);

        for table in engine.term_frequencies(&corpus) {
            let sum: f64 = table.values().sum();
            assert!((sum - 1.0).abs() < 1e-9, "tf sum was {sum}");
        }
    }

    #[test]
    fn test_all_stopword_sentence_has_empty_table() {
        let tokenizer = engine_fixture();
        let engine = TfIdfEngine::new(&tokenizer);
        let corpus = sentences(&["the cat jumped.", "the, of — and."]);

        let tf = engine.term_frequencies(&corpus);
        assert_eq!(tf.len(), 2);
        assert!(!tf[0].is_empty());
        assert!(tf[1].is_empty());
    }

    #[test]
    fn test_repeated_term_frequency() {
        let tokenizer = engine_fixture();
        let engine = TfIdfEngine::new(&tokenizer);
        let corpus = sentences(&["zebra zebra zebra mat rug."]);

        let tf = engine.term_frequencies(&corpus);
        assert!((tf[0]["zebra"] - 0.6).abs() < 1e-12);
        assert!((tf[0]["mat"] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_idf_zero_for_term_in_every_sentence() {
        let tokenizer = engine_fixture();
        let engine = TfIdfEngine::new(&tokenizer);
        let corpus = sentences(&["cat mat.", "cat rug.", "cat zebra."]);

        let tf = engine.term_frequencies(&corpus);
        let idf = inverse_document_frequencies(&tf, corpus.len());

        // "cat" appears in all three sentences; still present, weight 0.
        assert!((idf["cat"] - 0.0).abs() < 1e-12);
        // "zebra" appears in exactly one; maximum idf for this corpus.
        assert!((idf["zebra"] - 3.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_idf_bounds() {
        let tokenizer = engine_fixture();
        let engine = TfIdfEngine::new(&tokenizer);
        let corpus = sentences(&[
            "cat mat zebra.",
            "cat rug.",
            "cat dog rug.",
            "dog zebra mat.",
        ]);

        let tf = engine.term_frequencies(&corpus);
        let idf = inverse_document_frequencies(&tf, corpus.len());
        let max = (corpus.len() as f64).ln();

        for (term, weight) in &idf {
            assert!(*weight >= 0.0, "idf({term}) was negative: {weight}");
            assert!(*weight <= max + 1e-12, "idf({term}) above ln(n): {weight}");
        }
    }

    #[test]
    fn test_compute_combines_tf_and_idf() {
        let tokenizer = engine_fixture();
        let engine = TfIdfEngine::new(&tokenizer);
        let corpus = sentences(&[
            "the cat jumped on the mat.",
            "a cat jumped on a mat.",
            "zebra zebra zebra jumped on the mat.",
        ]);

        let table = engine.compute(&corpus);

        // "zebra" is unique to sentence 2 and repeated: tf 3/5, idf ln(3).
        let expected = 0.6 * 3.0_f64.ln();
        let weights = table.sentence_weights(2).unwrap();
        assert!((weights["zebra"] - expected).abs() < 1e-12);

        // "jumped"/"mat" appear in every sentence, so they contribute 0.
        assert!((weights["jump"] - 0.0).abs() < 1e-12);
        assert!((table.sentence_sum(2) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_empty_corpus() {
        let tokenizer = engine_fixture();
        let engine = TfIdfEngine::new(&tokenizer);
        let table = engine.compute(&[]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_deterministic_across_runs() {
        let tokenizer = engine_fixture();
        let engine = TfIdfEngine::new(&tokenizer);
        let corpus = sentences(&["cat mat zebra.", "cat rug.", "zebra rug mat."]);

        let first = engine.compute(&corpus);
        let second = engine.compute(&corpus);
        for i in 0..corpus.len() {
            assert_eq!(first.sentence_weights(i), second.sentence_weights(i));
        }
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        let tokenizer = engine_fixture();
        let engine = TfIdfEngine::new(&tokenizer);

        // Enough sentences to cross the parallel cutoff; a small prefix runs
        // on the sequential path for comparison.
        let mut corpus = Vec::new();
        for i in 0..(PARALLEL_CUTOFF + 8) {
            corpus.push(format!("cat {} zebra mat rug.", i));
        }

        let parallel = engine.term_frequencies(&corpus);
        assert_eq!(parallel.len(), corpus.len());
        for (sentence, table) in corpus.iter().zip(&parallel) {
            let sequential = engine.term_frequencies(std::slice::from_ref(sentence));
            assert_eq!(&sequential[0], table);
        }
    }
}
