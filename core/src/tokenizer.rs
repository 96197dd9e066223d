use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE: Regex = Regex::new(r"[\p{L}\p{N}_']+").expect("valid regex");
}

/// Split text into word tokens, leaving case and stop words to the index.
///
/// Tokens are maximal runs of letters, digits, underscores and apostrophes;
/// a token made only of apostrophes is dropped.
pub fn tokenize(text: &str) -> Vec<&str> {
    RE.find_iter(text)
        .map(|m| m.as_str())
        .filter(|t| t.chars().any(|c| c != '\''))
        .collect()
}
