//! Word ladders: shortest transformation sequences that change one letter
//! at a time, where every intermediate word must be in the word list.
//!
//! Words are vertices of an implicit graph; two words are adjacent when they
//! differ in exactly one position. Neighbors are generated on the fly by
//! trying every letter of the alphabet at every position.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

/// Letters tried at each position unless configured otherwise
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Number of words in the shortest ladder from `begin` to `end`, counting
/// both ends, or 0 if there is none.
///
/// `end` must be in `words`; `begin` need not be.
pub fn word_ladder<S: AsRef<str>>(begin: &str, end: &str, words: &[S]) -> usize {
    word_ladder_with_alphabet(begin, end, words, DEFAULT_ALPHABET)
}

/// [`word_ladder`] over a custom alphabet.
pub fn word_ladder_with_alphabet<S: AsRef<str>>(
    begin: &str,
    end: &str,
    words: &[S],
    alphabet: &str,
) -> usize {
    word_ladder_path_with_alphabet(begin, end, words, alphabet).len()
}

/// The words of one shortest ladder from `begin` to `end`, empty if none.
pub fn word_ladder_path<S: AsRef<str>>(begin: &str, end: &str, words: &[S]) -> Vec<String> {
    word_ladder_path_with_alphabet(begin, end, words, DEFAULT_ALPHABET)
}

/// [`word_ladder_path`] over a custom alphabet.
#[tracing::instrument(skip(words, alphabet), level = "debug", fields(words = words.len()))]
pub fn word_ladder_path_with_alphabet<S: AsRef<str>>(
    begin: &str,
    end: &str,
    words: &[S],
    alphabet: &str,
) -> Vec<String> {
    let dictionary: HashSet<&str> = words.iter().map(S::as_ref).collect();
    if !dictionary.contains(end) {
        return Vec::new();
    }
    if begin == end {
        return vec![begin.to_string()];
    }

    let letters: Vec<char> = alphabet.chars().collect();
    let mut parents: HashMap<String, String> = HashMap::new();
    let mut seen: HashSet<String> = HashSet::from([begin.to_string()]);
    let mut queue = VecDeque::from([begin.to_string()]);
    let mut expanded = 0usize;

    while let Some(word) = queue.pop_front() {
        expanded += 1;
        let mut chars: Vec<char> = word.chars().collect();
        for i in 0..chars.len() {
            let original = chars[i];
            for &letter in &letters {
                if letter == original {
                    continue;
                }
                chars[i] = letter;
                let candidate: String = chars.iter().collect();
                if dictionary.contains(candidate.as_str()) && seen.insert(candidate.clone()) {
                    parents.insert(candidate.clone(), word.clone());
                    if candidate == end {
                        debug!(expanded, "ladder_found");
                        return unwind(&parents, candidate);
                    }
                    queue.push_back(candidate);
                }
            }
            chars[i] = original;
        }
    }

    debug!(expanded, "ladder_not_found");
    Vec::new()
}

/// Follow parent links from `end` back to the word with no parent.
fn unwind(parents: &HashMap<String, String>, end: String) -> Vec<String> {
    let mut path = vec![end];
    while let Some(parent) = path.last().and_then(|w| parents.get(w)) {
        path.push(parent.clone());
    }
    path.reverse();
    path
}
