//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

/// Short technical vocabulary for dictionary-style scans.
pub const VOCABULARY: &[&str] = &[
    "rust", "programming", "typescript", "javascript", "python", "golang", "kubernetes", "docker",
    "serverless", "microservices", "api", "database", "postgresql", "redis", "mongodb", "graphql",
    "rest", "websocket", "authentication", "authorization", "encryption", "security",
    "performance", "optimization", "caching", "indexing", "algorithm", "photography",
];

/// Swap the chars at `i` and `i + 1`. Out of range leaves the word as is.
pub fn transpose_at(word: &str, i: usize) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    if i + 1 < chars.len() {
        chars.swap(i, i + 1);
    }
    chars.into_iter().collect()
}

/// Replace the char at `i` with one guaranteed to differ.
pub fn substitute_at(word: &str, i: usize) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    if let Some(c) = chars.get_mut(i) {
        *c = if *c == 'x' { 'y' } else { 'x' };
    }
    chars.into_iter().collect()
}

/// Remove the char at `i`, if there is one.
pub fn delete_at(word: &str, i: usize) -> String {
    word.chars()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .map(|(_, c)| c)
        .collect()
}
