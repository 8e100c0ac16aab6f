//! Skill Matcher: intersects the words and phrase chunks of free text with a
//! fixed skill vocabulary.
//!
//! Algorithm:
//! 1. Lower-case the text and split it into word tokens (`c++`, `c#` and
//!    `node.js` stay whole; trailing sentence punctuation is dropped).
//! 2. Single-token matches: non-stop-word tokens that are vocabulary entries.
//! 3. Phrase chunks: runs of tokens between punctuation and stop words.
//!    Every 2..=N word window inside a chunk is a phrase candidate, where N is
//!    the word count of the longest vocabulary entry.
//! 4. Output is the union of both match sets, sorted for stable rendering.

use std::collections::{BTreeSet, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

/// Closed vocabulary of recognized skills. Entries are lower-case.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "c++",
    "machine learning",
    "deep learning",
    "sql",
    "nlp",
    "flask",
    "django",
    "html",
    "css",
    "javascript",
    "react",
    "data analysis",
    "pandas",
    "numpy",
    "tensorflow",
    "pytorch",
    "git",
    "docker",
    "kubernetes",
    "linux",
    "excel",
];

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-z0-9][a-z0-9+#]*(?:\.[a-z0-9+#]+)*").expect("token pattern is valid")
});

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
        "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
        "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "done",
        "down", "during", "each", "either", "else", "etc", "even", "ever", "every", "few",
        "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
        "herself", "him", "himself", "his", "how", "however", "i", "if", "in", "into", "is",
        "it", "its", "itself", "just", "least", "less", "many", "may", "me", "might", "more",
        "most", "much", "must", "my", "myself", "neither", "no", "nor", "not", "now", "of",
        "off", "often", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
        "out", "over", "own", "per", "please", "put", "quite", "rather", "really", "same",
        "say", "see", "seem", "several", "she", "should", "since", "so", "some", "such",
        "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
        "these", "they", "this", "those", "though", "through", "thus", "to", "together",
        "too", "toward", "under", "until", "up", "upon", "us", "used", "using", "various",
        "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "where",
        "whether", "which", "while", "who", "whole", "whom", "whose", "why", "will", "with",
        "within", "without", "would", "yet", "you", "your", "yours", "yourself",
        "yourselves",
    ]
    .into_iter()
    .collect()
});

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

/// Matches free text against the skill vocabulary.
///
/// Built once at startup and shared through `AppState`.
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    vocabulary: HashSet<&'static str>,
    max_phrase_words: usize,
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillMatcher {
    pub fn new() -> Self {
        Self::with_vocabulary(SKILL_VOCABULARY)
    }

    pub fn with_vocabulary(entries: &[&'static str]) -> Self {
        // Tokenizer tables are built with the matcher, not on first use.
        Lazy::force(&TOKEN_RE);
        Lazy::force(&STOP_WORDS);

        let vocabulary: HashSet<&'static str> = entries.iter().copied().collect();
        let max_phrase_words = vocabulary
            .iter()
            .map(|s| s.split_whitespace().count())
            .max()
            .unwrap_or(1);
        Self {
            vocabulary,
            max_phrase_words,
        }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    #[cfg(test)]
    pub fn is_known(&self, skill: &str) -> bool {
        self.vocabulary.contains(skill)
    }

    /// Returns the vocabulary entries found in `text`, sorted and deduplicated.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        let text = text.to_lowercase();
        let mut found: BTreeSet<&'static str> = BTreeSet::new();

        for chunk in phrase_chunks(&text) {
            // single tokens
            for token in &chunk {
                if let Some(&skill) = self.vocabulary.get(*token) {
                    found.insert(skill);
                }
            }
            // multi-word windows
            for width in 2..=self.max_phrase_words.min(chunk.len()) {
                for window in chunk.windows(width) {
                    let phrase = window.join(" ");
                    if let Some(&skill) = self.vocabulary.get(phrase.as_str()) {
                        found.insert(skill);
                    }
                }
            }
        }

        found.into_iter().map(String::from).collect()
    }
}

/// Splits lower-cased text into phrase chunks of non-stop-word tokens.
/// A chunk ends at a stop word or at any non-whitespace separator between tokens.
fn phrase_chunks(text: &str) -> Vec<Vec<&str>> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut last_end = 0;

    for m in TOKEN_RE.find_iter(text) {
        let separator = &text[last_end..m.start()];
        last_end = m.end();

        let breaks_phrase = separator.chars().any(|c| !c.is_whitespace());
        if breaks_phrase && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }

        let token = m.as_str();
        if is_stop_word(token) {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push(token);
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
