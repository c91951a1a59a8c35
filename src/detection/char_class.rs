//! Unicode general-category character classes
//!
//! Printable means categories L, M, N, P, S or the ASCII space. Format
//! characters, unassigned and private-use codepoints, separators other than
//! U+0020 and controls are all non-printable. U+FFFD is treated as a decoding
//! error and dropped too. A letter is category L only, so letter numbers such
//! as U+216B do not count.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_PRINTABLE: Regex =
        Regex::new(r"[^\p{L}\p{M}\p{N}\p{P}\p{S} ]|\x{FFFD}").expect("constant pattern");
    static ref LETTER: Regex = Regex::new(r"\p{L}").expect("constant pattern");
}

pub fn is_printable(c: char) -> bool {
    let mut buf = [0u8; 4];
    !NON_PRINTABLE.is_match(c.encode_utf8(&mut buf))
}

/// Remove every non-printable character
pub fn strip_non_printable(s: &str) -> String {
    NON_PRINTABLE.replace_all(s, "").into_owned()
}

pub fn contains_letter(s: &str) -> bool {
    LETTER.is_match(s)
}

pub fn count_letters(s: &str) -> usize {
    LETTER.find_iter(s).count()
}
