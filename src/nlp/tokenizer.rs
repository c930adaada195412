//! Word tokenization, filtering, and lemmatization.
//!
//! A sentence is split on Unicode word boundaries; alphanumeric tokens that
//! survive the stopword check are reduced to a canonical form by a Snowball
//! stemmer. The stopword set and stemmer are built once and injected at
//! construction, so repeated tokenization pays no setup cost.

use std::fmt;

use rust_stemmers::{Algorithm, Stemmer};
use unicode_segmentation::UnicodeSegmentation;

use crate::nlp::stopwords::StopwordFilter;

/// Deterministic, language-specific reduction of words to a canonical form.
pub struct Lemmatizer {
    language: String,
    stemmer: Stemmer,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new("en")
    }
}

impl Lemmatizer {
    /// Create a lemmatizer for the given language code.
    ///
    /// Uses the same language set as
    /// [`StopwordFilter`](crate::nlp::stopwords::StopwordFilter); unknown
    /// codes fall back to English.
    pub fn new(language: &str) -> Self {
        let algorithm = match language.to_lowercase().as_str() {
            "en" | "english" => Algorithm::English,
            "de" | "german" => Algorithm::German,
            "fr" | "french" => Algorithm::French,
            "es" | "spanish" => Algorithm::Spanish,
            "it" | "italian" => Algorithm::Italian,
            "pt" | "portuguese" => Algorithm::Portuguese,
            "nl" | "dutch" => Algorithm::Dutch,
            "sv" | "swedish" => Algorithm::Swedish,
            "da" | "danish" => Algorithm::Danish,
            "fi" | "finnish" => Algorithm::Finnish,
            "no" | "norwegian" => Algorithm::Norwegian,
            "ru" | "russian" => Algorithm::Russian,
            _ => Algorithm::English,
        };
        Self {
            language: language.to_lowercase(),
            stemmer: Stemmer::create(algorithm),
        }
    }

    /// Reduce a word to its canonical form.
    pub fn lemma(&self, word: &str) -> String {
        self.stemmer.stem(&word.to_lowercase()).into_owned()
    }

    /// The language code this lemmatizer was built for.
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl fmt::Debug for Lemmatizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lemmatizer")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

/// Tokenizes sentences into filtered, lemmatized word tokens.
#[derive(Debug)]
pub struct WordTokenizer {
    stopwords: StopwordFilter,
    lemmatizer: Lemmatizer,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new(StopwordFilter::default(), Lemmatizer::default())
    }
}

impl WordTokenizer {
    /// Create a tokenizer from an already-built stopword set and lemmatizer.
    pub fn new(stopwords: StopwordFilter, lemmatizer: Lemmatizer) -> Self {
        Self {
            stopwords,
            lemmatizer,
        }
    }

    /// Create a tokenizer for the given language code.
    pub fn for_language(language: &str) -> Self {
        Self::new(StopwordFilter::new(language), Lemmatizer::new(language))
    }

    /// Tokenize one sentence.
    ///
    /// A token is kept iff it is alphanumeric and its lowercase form is not
    /// a stopword; kept tokens come back lemmatized. A sentence with no
    /// qualifying tokens returns an empty vec.
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        sentence
            .unicode_words()
            .filter(|word| word.chars().all(char::is_alphanumeric))
            .filter(|word| !self.stopwords.is_stopword(word))
            .map(|word| self.lemmatizer.lemma(word))
            .collect()
    }

    /// The injected stopword set.
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }
}
