// Text Feature Extraction
// Whitespace tokenization and surface statistics feeding the lexical scorer

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

fn sentence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("sentence regex"))
}

fn paragraph_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").expect("paragraph regex"))
}

fn pronoun_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(i|me|my|mine|myself)\b").expect("pronoun regex"))
}

fn contraction_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\w+'\w+").expect("contraction regex"))
}

/// Split text into whitespace-delimited tokens, lowercased.
/// Punctuation stays attached to tokens; the scorer's thresholds were tuned
/// against this splitting, not against linguistic tokenization.
pub fn tokenize_lower(text: &str) -> Vec<String> {
    text.split_whitespace().map(|w| w.to_lowercase()).collect()
}

/// Count whitespace-delimited words without allocating tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split into sentences on runs of sentence-terminal punctuation (`.` `!` `?`),
/// discarding blank fragments.
pub fn split_sentences(text: &str) -> Vec<&str> {
    sentence_re()
        .split(text)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split into paragraphs on blank lines (one or more consecutive empty lines).
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    paragraph_re()
        .split(text)
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect()
}

/// Distinct phrases from `phrases` found in `text_lower` by case-insensitive
/// substring containment. Callers must pass already-lowercased text; the
/// dictionaries are stored lowercased.
pub fn match_phrases<'a>(text_lower: &str, phrases: &'a [String]) -> Vec<&'a str> {
    phrases
        .iter()
        .filter(|p| text_lower.contains(p.as_str()))
        .map(|p| p.as_str())
        .collect()
}

pub fn count_pronouns(text_lower: &str) -> usize {
    pronoun_re().find_iter(text_lower).count()
}

pub fn count_contractions(text: &str) -> usize {
    contraction_re().find_iter(text).count()
}

pub fn mean(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<usize>() as f64 / values.len() as f64
}

/// Population standard deviation.
pub fn std_dev(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values
        .iter()
        .map(|&v| (v as f64 - m).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Lexical statistics computed once per analysis. Ephemeral; nothing here is
/// cached across calls.
#[derive(Debug, Clone, Default)]
pub struct FeatureSet {
    pub word_count: usize,
    pub sentence_count: usize,
    pub sentence_word_counts: Vec<usize>,
    pub paragraph_word_counts: Vec<usize>,
    pub sentence_len_mean: f64,
    pub sentence_len_std_dev: f64,
    pub vocabulary_diversity: f64,
    pub avg_word_length: f64,
    pub personal_pronoun_count: usize,
    pub contraction_count: usize,
    /// Lowercased whitespace tokens of the full text.
    pub tokens: Vec<String>,
    /// Full text, lowercased once for phrase containment checks.
    pub text_lower: String,
}

pub fn extract_features(text: &str) -> FeatureSet {
    let text_lower = text.to_lowercase();
    let tokens = tokenize_lower(text);
    let word_count = tokens.len();

    let sentences = split_sentences(text);
    let sentence_word_counts: Vec<usize> =
        sentences.iter().map(|s| s.split_whitespace().count()).collect();
    let paragraph_word_counts: Vec<usize> = split_paragraphs(text)
        .iter()
        .map(|p| p.split_whitespace().count())
        .collect();

    let unique: HashSet<&str> = tokens.iter().map(|t| t.as_str()).collect();
    let vocabulary_diversity = if word_count > 0 {
        unique.len() as f64 / word_count as f64
    } else {
        0.0
    };

    let avg_word_length = if word_count > 0 {
        tokens.iter().map(|t| t.chars().count()).sum::<usize>() as f64 / word_count as f64
    } else {
        0.0
    };

    FeatureSet {
        word_count,
        sentence_count: sentences.len(),
        sentence_len_mean: mean(&sentence_word_counts),
        sentence_len_std_dev: std_dev(&sentence_word_counts),
        sentence_word_counts,
        paragraph_word_counts,
        vocabulary_diversity,
        avg_word_length,
        personal_pronoun_count: count_pronouns(&text_lower),
        contraction_count: count_contractions(text),
        tokens,
        text_lower,
    }
}
