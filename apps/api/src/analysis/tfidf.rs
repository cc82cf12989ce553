//! TF-IDF cosine similarity between a resume and a job description.
//!
//! Two-document model: build a shared unigram+bigram vocabulary (English
//! stopwords removed, tokens of at least two word characters), weight term
//! counts with smooth IDF, L2-normalize, and take the dot product.
//! Degenerate input (no usable terms in either document) yields `None` so
//! the caller can substitute its explicit baseline.

use std::collections::HashMap;

/// English stopword list applied before n-gram construction.
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into",
    "is", "it", "its", "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd",
    "made", "many", "may", "me", "meanwhile", "might", "mill", "mine", "more", "moreover",
    "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither",
    "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
    "part", "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "serious", "several", "she", "should", "show", "side", "since",
    "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than", "that", "the",
    "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin", "third", "this",
    "those", "though", "three", "through", "throughout", "thru", "thus", "to", "together",
    "too", "top", "toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up",
    "upon", "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when",
    "whence", "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon",
    "wherever", "whether", "which", "while", "whither", "who", "whoever", "whole", "whom",
    "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your",
    "yours", "yourself", "yourselves",
];

fn is_stopword(token: &str) -> bool {
    STOPWORDS.binary_search(&token).is_ok()
}

/// Splits lowercased text into word tokens of at least two word characters.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
        .map(|t| t.to_string())
        .collect()
}

/// Builds the unigram+bigram term list for one document.
/// Stopwords are removed before bigram formation, matching the usual
/// vectorizer behavior of forming n-grams over the filtered stream.
fn terms(text: &str) -> Vec<String> {
    let tokens: Vec<String> = tokenize(text)
        .into_iter()
        .filter(|t| !is_stopword(t))
        .collect();

    let mut terms = tokens.clone();
    for pair in tokens.windows(2) {
        terms.push(format!("{} {}", pair[0], pair[1]));
    }
    terms
}

fn term_counts(terms: &[String]) -> HashMap<&str, f64> {
    let mut counts: HashMap<&str, f64> = HashMap::new();
    for term in terms {
        *counts.entry(term.as_str()).or_insert(0.0) += 1.0;
    }
    counts
}

/// Cosine similarity between two documents as a 0–100 percentage.
///
/// Returns `None` when the combined vocabulary is empty (both documents
/// reduce to nothing after tokenization and stopword removal); the caller
/// treats that as the explicit-baseline case, not an error.
pub fn cosine_similarity_pct(doc_a: &str, doc_b: &str) -> Option<f64> {
    let terms_a = terms(doc_a);
    let terms_b = terms(doc_b);

    if terms_a.is_empty() && terms_b.is_empty() {
        return None;
    }

    let counts_a = term_counts(&terms_a);
    let counts_b = term_counts(&terms_b);

    // Shared vocabulary with per-term document frequency (1 or 2).
    let mut vocab: HashMap<&str, u32> = HashMap::new();
    for &term in counts_a.keys() {
        *vocab.entry(term).or_insert(0) += 1;
    }
    for &term in counts_b.keys() {
        *vocab.entry(term).or_insert(0) += 1;
    }

    // Smooth IDF over n=2 documents: ln((1+n)/(1+df)) + 1.
    let n = 2.0_f64;
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (term, df) in &vocab {
        let idf = ((1.0 + n) / (1.0 + *df as f64)).ln() + 1.0;
        let wa = counts_a.get(term).copied().unwrap_or(0.0) * idf;
        let wb = counts_b.get(term).copied().unwrap_or(0.0) * idf;
        dot += wa * wb;
        norm_a += wa * wa;
        norm_b += wb * wb;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        // One side vectorized to zero: similarity is defined and is 0.
        return Some(0.0);
    }

    Some(dot / (norm_a.sqrt() * norm_b.sqrt()) * 100.0)
}
