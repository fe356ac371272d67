// ============================================================
// Symbol Inventory
// ============================================================
// Shared by the text front-end and the model's embedding table.
// Ids are positions in SYMBOLS, so the order below must never
// change once a model has been trained on it.

use std::collections::HashMap;

use lazy_static::lazy_static;

pub const PAD: &str = "_";
pub const SPECIAL: &str = "-";
pub const PUNCTUATION: &str = "!'(),.:;? ";
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// CMU dictionary phone set, stress-marked vowels included.
pub const ARPABET: [&str; 84] = [
    "AA", "AA0", "AA1", "AA2", "AE", "AE0", "AE1", "AE2", "AH", "AH0", "AH1", "AH2",
    "AO", "AO0", "AO1", "AO2", "AW", "AW0", "AW1", "AW2", "AY", "AY0", "AY1", "AY2",
    "B", "CH", "D", "DH", "EH", "EH0", "EH1", "EH2", "ER", "ER0", "ER1", "ER2",
    "EY", "EY0", "EY1", "EY2", "F", "G", "HH", "IH", "IH0", "IH1", "IH2", "IY",
    "IY0", "IY1", "IY2", "JH", "K", "L", "M", "N", "NG", "OW", "OW0", "OW1",
    "OW2", "OY", "OY0", "OY1", "OY2", "P", "R", "S", "SH", "T", "TH", "UH",
    "UH0", "UH1", "UH2", "UW", "UW0", "UW1", "UW2", "V", "W", "Y", "Z", "ZH",
];

/// Aligner silence tokens
pub const SILENCES: [&str; 3] = ["@sp", "@spn", "@sil"];

/// Prefix that keeps phoneme symbols apart from plain letters ("@AH0" vs "A").
pub const PHONEME_PREFIX: char = '@';

lazy_static! {
    pub static ref SYMBOLS: Vec<String> = {
        let mut symbols = vec![PAD.to_string()];
        symbols.extend(SPECIAL.chars().map(String::from));
        symbols.extend(PUNCTUATION.chars().map(String::from));
        symbols.extend(LETTERS.chars().map(String::from));
        symbols.extend(ARPABET.iter().map(|p| format!("{PHONEME_PREFIX}{p}")));
        symbols.extend(SILENCES.iter().map(|s| s.to_string()));
        symbols
    };

    pub static ref SYMBOL_TO_ID: HashMap<&'static str, i64> = SYMBOLS
        .iter()
        .enumerate()
        .map(|(i, s)| (s.as_str(), i as i64))
        .collect();
}

/// Id of `symbol` if it belongs in a model input. The pad and `~`
/// symbols never appear in encoded text.
pub fn symbol_id(symbol: &str) -> Option<i64> {
    if symbol == PAD || symbol == "~" {
        return None;
    }
    SYMBOL_TO_ID.get(symbol).copied()
}

pub fn symbol(id: i64) -> Option<&'static str> {
    usize::try_from(id)
        .ok()
        .and_then(|i| SYMBOLS.get(i))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_stable() {
        assert_eq!(SYMBOLS.len(), 1 + 1 + 10 + 52 + 84 + 3);
        assert_eq!(SYMBOL_TO_ID["_"], 0);
        assert_eq!(SYMBOL_TO_ID["-"], 1);
        assert_eq!(SYMBOL_TO_ID["!"], 2);
        assert_eq!(SYMBOL_TO_ID["A"], 12);
        assert_eq!(SYMBOL_TO_ID["@AA"], 64);
        assert_eq!(SYMBOL_TO_ID["@sil"], SYMBOLS.len() as i64 - 1);
    }

    #[test]
    fn pad_is_never_encoded() {
        assert_eq!(symbol_id("_"), None);
        assert_eq!(symbol_id("~"), None);
        assert_eq!(symbol_id("#"), None);
        assert_eq!(symbol_id("a"), Some(38));
        assert_eq!(symbol(38), Some("a"));
        assert_eq!(symbol(-1), None);
    }
}
