//! Sentence and word segmentation.
//!
//! A document is split into sentences on the literal delimiter `". "`, and
//! each sentence is split into words on single spaces. Words are then
//! cleaned into tokens: lower-cased, stripped of everything that is not an
//! ASCII letter, and trimmed.
//!
//! Empty tokens are kept. A double space or a word made only of punctuation
//! yields `""`, which still takes part in n-gram generation.

/// Delimiter separating sentences in a document.
pub const SENTENCE_DELIMITER: &str = ". ";

/// Split a document into sentences on `". "`.
///
/// The trailing sentence keeps its final period; cleaning removes it later.
pub fn split_sentences(document: &str) -> Vec<&str> {
    document.split(SENTENCE_DELIMITER).collect()
}

/// Split a sentence into raw words on single spaces.
pub fn split_words(sentence: &str) -> Vec<&str> {
    sentence.split(' ').collect()
}

/// Clean a single word into a token.
///
/// ```rust
/// use phrasemap::phrases::segment::clean_word;
///
/// assert_eq!(clean_word("her's"), "hers");
/// assert_eq!(clean_word(" Bye "), "bye");
/// ```
pub fn clean_word(word: &str) -> String {
    let stripped: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect();
    stripped.trim().to_string()
}

/// Clean every word in a list, preserving order and length.
pub fn clean<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words.iter().map(|w| clean_word(w.as_ref())).collect()
}

/// Split a sentence into cleaned tokens.
pub fn tokenize(sentence: &str) -> Vec<String> {
    clean(&split_words(sentence))
}
