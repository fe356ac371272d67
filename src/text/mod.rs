// ============================================================
// Text Front-End
// ============================================================
// Turns a manifest transcript into the integer phoneme ids the
// acoustic model embeds.
//
// Transcripts written by the aligner are mostly ARPAbet inside
// curly braces, e.g.
//
//   "{HH AH0 L OW1 sp W ER1 L D}"
//
// Anything outside braces is run through the configured cleaners
// and encoded one character at a time, so plain text still works.

/// Named normalisation pipelines
pub mod cleaners;

/// Numbers, currency, ordinals and years spelled out as words
pub mod numbers;

/// Symbol inventory and id lookup
pub mod symbols;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Result;
use crate::infra::config::PreprocessConfig;
use cleaners::{clean_text, Cleaner};
use symbols::{symbol, symbol_id, PHONEME_PREFIX};

lazy_static! {
    static ref CURLY: Regex = Regex::new(r"^(.*?)\{(.+?)\}(.*)$").unwrap();
}

/// Encode `text` to symbol ids, cleaning the parts outside braces.
pub fn text_to_sequence(text: &str, cleaners: &[Cleaner]) -> Vec<i64> {
    let mut sequence = Vec::new();
    let mut rest = text.to_string();

    loop {
        let Some(caps) = CURLY.captures(&rest) else {
            sequence.extend(symbols_to_sequence(&clean_text(&rest, cleaners)));
            break;
        };
        sequence.extend(symbols_to_sequence(&clean_text(&caps[1], cleaners)));
        sequence.extend(arpabet_to_sequence(&caps[2]));
        rest = caps[3].to_string();
    }

    sequence
}

/// Decode ids back to text. Consecutive phonemes are wrapped in one
/// pair of braces.
pub fn sequence_to_text(sequence: &[i64]) -> String {
    let mut out = String::new();
    let mut in_braces = false;

    for s in sequence.iter().filter_map(|&id| symbol(id)) {
        match s.strip_prefix(PHONEME_PREFIX) {
            Some(phone) => {
                if in_braces {
                    out.push(' ');
                } else {
                    out.push('{');
                    in_braces = true;
                }
                out.push_str(phone);
            }
            None => {
                if in_braces {
                    out.push('}');
                    in_braces = false;
                }
                out.push_str(s);
            }
        }
    }
    if in_braces {
        out.push('}');
    }
    out
}

fn symbols_to_sequence(text: &str) -> Vec<i64> {
    let mut buf = [0u8; 4];
    text.chars()
        .filter_map(|c| symbol_id(c.encode_utf8(&mut buf)))
        .collect()
}

fn arpabet_to_sequence(phones: &str) -> Vec<i64> {
    phones
        .split_whitespace()
        .filter_map(|p| symbol_id(&format!("{PHONEME_PREFIX}{p}")))
        .collect()
}

// ─── PhonemeEncoder ──────────────────────────────────────────────────────────
/// The configured cleaner chain bundled with the encoder, so datasets
/// only hold one thing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonemeEncoder {
    cleaners: Vec<Cleaner>,
}

impl PhonemeEncoder {
    pub fn new(cleaners: Vec<Cleaner>) -> Self {
        Self { cleaners }
    }

    pub fn from_config(config: &PreprocessConfig) -> Result<Self> {
        Ok(Self::new(config.cleaners()?))
    }

    pub fn cleaners(&self) -> &[Cleaner] {
        &self.cleaners
    }

    pub fn encode(&self, text: &str) -> Vec<i64> {
        text_to_sequence(text, &self.cleaners)
    }
}
