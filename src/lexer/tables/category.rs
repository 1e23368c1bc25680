// src/lexer/tables/category.rs
use icu_properties::{GeneralCategory, maps};
use unicode_normalization::UnicodeNormalization;

/// Character that opens a token and later also counts as a terminator.
pub const MARKER: char = '$';

/// Contiguous run alphabet accepted between the marker and the terminator.
pub const RESTRICTED_FIRST: char = 'A';
pub const RESTRICTED_LAST: char = 'F';

/// Input categories used as table columns. Every `char` falls in exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharCategory {
    Marker,
    Digit,
    RestrictedAlphaRun,
    NonAlnum,
    Other,
}
impl CharCategory {
    #[inline]
    pub fn idx(self) -> usize {
        self as usize
    }
}

pub const N_CATEGORIES: usize = 5;

pub const ALL_CATEGORIES: [CharCategory; N_CATEGORIES] = [
    CharCategory::Marker,
    CharCategory::Digit,
    CharCategory::RestrictedAlphaRun,
    CharCategory::NonAlnum,
    CharCategory::Other,
];

#[inline]
pub fn is_restricted(c: char) -> bool {
    (RESTRICTED_FIRST..=RESTRICTED_LAST).contains(&c)
}

/// Unicode digit: any `Nd` char, or an `No` char whose compatibility form
/// carries exactly one decimal digit (`²`, `①`, `⒈`, `⑴`). Fractions and
/// multi-digit forms such as `½` or `⑩` are not digits.
pub fn is_digit(c: char) -> bool {
    if c.is_ascii_digit() {
        return true;
    }
    let gc = maps::general_category();
    match gc.get(c) {
        GeneralCategory::DecimalNumber => true,
        GeneralCategory::OtherNumber => {
            let mut digits = 0;
            for d in std::iter::once(c).nfkc() {
                match gc.get(d) {
                    GeneralCategory::DecimalNumber => digits += 1,
                    GeneralCategory::OtherNumber | GeneralCategory::LetterNumber => return false,
                    _ => {}
                }
            }
            digits == 1
        }
        _ => false,
    }
}

/// Classify one character. Checks run in priority order, so `$` is a
/// `Marker` here even though it is also non-alphanumeric.
pub fn classify(c: char) -> CharCategory {
    if c == MARKER {
        CharCategory::Marker
    } else if is_digit(c) {
        CharCategory::Digit
    } else if is_restricted(c) {
        CharCategory::RestrictedAlphaRun
    } else if !c.is_alphanumeric() {
        CharCategory::NonAlnum
    } else {
        CharCategory::Other
    }
}
