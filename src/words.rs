// File: src/words.rs
//
// Word-order reversal: keep each word intact, reverse the sequence of
// words. Runs of whitespace collapse to a single separating space.

use std::io::{self, BufRead};

/// Reverse the order of whitespace-separated words in `input`. Empty or
/// all-whitespace input yields the empty string.
pub fn reverse_words(input: &str) -> String {
    input
        .split_whitespace()
        .rev()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Read one line from `reader`, stripping the trailing newline.
pub fn read_line_from<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
