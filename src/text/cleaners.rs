// ============================================================
// Text Cleaners
// ============================================================
// Selected by name from preprocessing.text.text_cleaners:
//
//   basic_cleaners           — lowercase, collapse whitespace
//   transliteration_cleaners — also fold non-English text to ASCII
//   english_cleaners         — full English pipeline, numbers and
//                              abbreviations included

use std::{fmt, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;

use super::numbers::expand_numbers;
use crate::error::DatasetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cleaner {
    Basic,
    Transliteration,
    English,
}

impl Cleaner {
    pub fn name(self) -> &'static str {
        match self {
            Cleaner::Basic => "basic_cleaners",
            Cleaner::Transliteration => "transliteration_cleaners",
            Cleaner::English => "english_cleaners",
        }
    }

    pub fn clean(self, text: &str) -> String {
        match self {
            Cleaner::Basic => collapse_whitespace(&lowercase(text)),
            Cleaner::Transliteration => {
                collapse_whitespace(&lowercase(&convert_to_ascii(text)))
            }
            Cleaner::English => {
                let text = lowercase(&convert_to_ascii(text));
                let text = expand_numbers(&text);
                let text = expand_abbreviations(&text);
                collapse_whitespace(&text)
            }
        }
    }
}

impl FromStr for Cleaner {
    type Err = DatasetError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "basic_cleaners" => Ok(Cleaner::Basic),
            "transliteration_cleaners" => Ok(Cleaner::Transliteration),
            "english_cleaners" => Ok(Cleaner::English),
            other => Err(DatasetError::UnknownCleaner(other.to_string())),
        }
    }
}

impl fmt::Display for Cleaner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run `cleaners` over `text` in order.
pub fn clean_text(text: &str, cleaners: &[Cleaner]) -> String {
    cleaners
        .iter()
        .fold(text.to_string(), |acc, cleaner| cleaner.clean(&acc))
}

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    static ref ABBREVIATIONS: Vec<(Regex, &'static str)> = [
        ("mrs", "misess"),
        ("mr", "mister"),
        ("dr", "doctor"),
        ("st", "saint"),
        ("co", "company"),
        ("jr", "junior"),
        ("maj", "major"),
        ("gen", "general"),
        ("drs", "doctors"),
        ("rev", "reverend"),
        ("lt", "lieutenant"),
        ("hon", "honorable"),
        ("sgt", "sergeant"),
        ("capt", "captain"),
        ("esq", "esquire"),
        ("ltd", "limited"),
        ("col", "colonel"),
        ("ft", "fort"),
    ]
    .into_iter()
    .map(|(abbr, full)| (Regex::new(&format!(r"(?i)\b{abbr}\.")).unwrap(), full))
    .collect();
}

pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").into_owned()
}

pub fn expand_abbreviations(text: &str) -> String {
    ABBREVIATIONS
        .iter()
        .fold(text.to_string(), |acc, (re, full)| re.replace_all(&acc, *full).into_owned())
}

/// Fold text to ASCII. Typographic punctuation and Latin-1 letters
/// get their nearest ASCII spelling; anything else is dropped.
pub fn convert_to_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            out.push(c);
            continue;
        }
        let folded = match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => "'",
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{00AB}' | '\u{00BB}' => "\"",
            '\u{2013}' | '\u{2014}' | '\u{2212}' => "-",
            '\u{2026}' => "...",
            '\u{00A0}' | '\u{2009}' | '\u{202F}' => " ",
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => "a",
            'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' => "A",
            'æ' => "ae",
            'Æ' => "AE",
            'ç' | 'č' | 'ć' => "c",
            'Ç' | 'Č' | 'Ć' => "C",
            'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' | 'ě' => "e",
            'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ę' | 'Ě' => "E",
            'ì' | 'í' | 'î' | 'ï' | 'ī' => "i",
            'Ì' | 'Í' | 'Î' | 'Ï' | 'Ī' => "I",
            'ñ' | 'ń' | 'ň' => "n",
            'Ñ' | 'Ń' | 'Ň' => "N",
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => "o",
            'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' => "O",
            'œ' => "oe",
            'Œ' => "OE",
            'ß' => "ss",
            'š' | 'ś' => "s",
            'Š' | 'Ś' => "S",
            'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' => "u",
            'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ū' | 'Ů' => "U",
            'ý' | 'ÿ' => "y",
            'Ý' | 'Ÿ' => "Y",
            'ž' | 'ź' | 'ż' => "z",
            'Ž' | 'Ź' | 'Ż' => "Z",
            'ł' => "l",
            'Ł' => "L",
            _ => "",
        };
        out.push_str(folded);
    }
    out
}
