//! Dictionary loading utilities
//!
//! A dictionary is a flat list of whitespace-separated words.

use std::fs;
use std::io;
use std::path::Path;

/// Split dictionary text into words
///
/// # Examples
/// ```
/// use termlink::wordlists::loader::parse_dictionary;
///
/// let words = parse_dictionary("alpha bravo\ncharlie  delta");
/// assert_eq!(words, vec!["alpha", "bravo", "charlie", "delta"]);
/// ```
#[must_use]
pub fn parse_dictionary(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use termlink::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_dictionary(&content))
}

/// Convert the embedded string slice to owned words
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
