//! Notation-to-phonetics normalization
//!
//! Raw verse lines are synth notation, not prose, so a syllable or
//! rhyme estimator tuned for natural language must first see something
//! resembling words. The rewrites below run in order, and the order
//! matters: later rules re-match text produced by earlier ones.

use once_cell::sync::Lazy;
use regex::Regex;

/// `.ar` / `.ir` / `.kr` rate suffixes
pub(crate) static RATE_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.[aik]r").unwrap());

/// Structural punctuation: separators, not pronounceable content
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[{}()\[\],|.!]").unwrap());

/// The connective `in` with its non-word neighbors
static BARE_IN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\Win\W").unwrap());

/// A capitalized run: one uppercase letter plus trailing lowercase
static CAMEL_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z][a-z]*").unwrap());

/// A word bounded by non-word characters on both sides
static BOUNDED_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W([a-zA-Z0-9]+)\W").unwrap());

/// Digit → spelled form, space-padded so neighbors stay separate words
const DIGIT_WORDS: [(&str, &str); 10] = [
    ("1", " one "),
    ("2", " two "),
    ("3", " three "),
    ("4", " four "),
    ("5", " five "),
    ("6", " six "),
    ("7", " seven "),
    ("8", " eight "),
    ("9", " nine "),
    ("0", " zero "),
];

/// Operator → spelled form
const OPERATOR_WORDS: [(&str, &str); 4] = [
    ("*", " times "),
    ("+", " plus "),
    ("-", " minus "),
    ("/", " divided by "),
];

/// Domain-word rewrites: `tanh` and `unipolar` respelled to match how
/// they are read aloud; `Osc` renamed out of the way so restoring the
/// `in` rewrite cannot collide with it later
const GLOSSARY: [(&str, &str); 3] = [("tanh", "tan h"), ("unipolar", "uni polar"), ("Osc", "Mosk")];

/// Spelled form → digit, for recovering a literal trailing word
const SPELLED_DIGITS: [(&str, &str); 10] = [
    ("one", "1"),
    ("two", "2"),
    ("three", "3"),
    ("four", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
    ("nine", "9"),
    ("zero", "0"),
];

/// Slice of a marked line from its first `{` to its first `}`
///
/// Missing or inverted braces yield an empty payload; a malformed line
/// never fails the scan.
pub fn payload(text: &str) -> &str {
    match (text.find('{'), text.find('}')) {
        (Some(open), Some(close)) if open < close => &text[open..close],
        _ => "",
    }
}

/// Rewrite a payload into the string the phonetic primitives see
pub fn normalize(payload: &str) -> String {
    let mut text = RATE_SUFFIX.replace_all(payload, " ").into_owned();
    for (digit, word) in DIGIT_WORDS {
        text = text.replace(digit, word);
    }
    for (operator, word) in OPERATOR_WORDS {
        text = text.replace(operator, word);
    }
    for (term, respelled) in GLOSSARY {
        text = text.replace(term, respelled);
    }
    let text = PUNCTUATION.replace_all(&text, " ");
    let text = BARE_IN.replace_all(&text, " Bin ");
    CAMEL_RUN.replace_all(&text, "$0 ").into_owned()
}

/// Undo the spelled-out forms on a single recovered word
///
/// Idempotent: a word containing no spelled forms passes through
/// unchanged, so reversing an already-reversed word is a no-op.
pub fn unspell(word: &str) -> String {
    let mut word = word.to_string();
    for (spelled, digit) in SPELLED_DIGITS {
        word = word.replace(spelled, digit);
    }
    word.replace(" Bin ", " in ").replace("Mosk", "Osc")
}

/// The line's trailing word, recovered in its literal raw-text form
///
/// Works on the raw line (decoration ranges must address untouched
/// source text, not the normalized string). Rate tokens `ar`/`ir`/`kr`
/// never count as words.
pub fn last_word(raw: &str) -> Option<String> {
    let mut last = None;
    for caps in BOUNDED_WORD.captures_iter(raw) {
        if let Some(word) = caps.get(1) {
            let word = word.as_str();
            if matches!(word, "ar" | "ir" | "kr") {
                continue;
            }
            last = Some(word);
        }
    }
    last.map(unspell)
}
