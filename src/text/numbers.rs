// ============================================================
// Number Normalisation
// ============================================================
// Spell out digits so the character-level encoder only ever sees
// words:
//
//   "$3.50" → "three dollars, fifty cents"
//   "1984"  → "nineteen eighty-four"
//   "21st"  → "twenty-first"

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref COMMA_NUMBER: Regex = Regex::new(r"([0-9][0-9,]+[0-9])").unwrap();
    static ref DECIMAL_NUMBER: Regex = Regex::new(r"([0-9]+\.[0-9]+)").unwrap();
    static ref POUNDS: Regex = Regex::new(r"£([0-9,]*[0-9]+)").unwrap();
    static ref DOLLARS: Regex = Regex::new(r"\$([0-9.,]*[0-9]+)").unwrap();
    static ref ORDINAL: Regex = Regex::new(r"[0-9]+(st|nd|rd|th)").unwrap();
    static ref NUMBER: Regex = Regex::new(r"[0-9]+").unwrap();
}

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];
const SCALES: [(u64, &str); 4] = [
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

pub fn expand_numbers(text: &str) -> String {
    let text = COMMA_NUMBER.replace_all(text, |c: &Captures| c[1].replace(',', ""));
    let text = POUNDS.replace_all(&text, "$1 pounds");
    let text = DOLLARS.replace_all(&text, |c: &Captures| expand_dollars(&c[1]));
    let text = DECIMAL_NUMBER.replace_all(&text, |c: &Captures| c[1].replace('.', " point "));
    let text = ORDINAL.replace_all(&text, |c: &Captures| expand_ordinal(&c[0]));
    let text = NUMBER.replace_all(&text, |c: &Captures| expand_number(&c[0]));
    text.into_owned()
}

fn expand_dollars(amount: &str) -> String {
    let parts: Vec<&str> = amount.split('.').collect();
    if parts.len() > 2 {
        return format!("{amount} dollars");
    }
    let part = |s: &str| if s.is_empty() { Some(0) } else { s.parse::<u64>().ok() };
    // Too long for u64: leave the digits for expand_number to read out
    let cents = parts.get(1).copied().unwrap_or("");
    let (Some(dollars), Some(cents)) = (part(parts[0]), part(cents)) else {
        return format!("{amount} dollars");
    };
    let unit = |n: u64, one: &'static str, many: &'static str| if n == 1 { one } else { many };

    match (dollars, cents) {
        (0, 0) => "zero dollars".to_string(),
        (d, 0) => format!("{d} {}", unit(d, "dollar", "dollars")),
        (0, c) => format!("{c} {}", unit(c, "cent", "cents")),
        (d, c) => format!(
            "{d} {}, {c} {}",
            unit(d, "dollar", "dollars"),
            unit(c, "cent", "cents")
        ),
    }
}

fn expand_ordinal(token: &str) -> String {
    let digits = &token[..token.len() - 2];
    match digits.parse::<u64>() {
        Ok(n) => ordinal_words(n),
        Err(_) => token.to_string(),
    }
}

fn expand_number(digits: &str) -> String {
    let Ok(n) = digits.parse::<u64>() else {
        // Too long for u64: read digit by digit
        return digits
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| ONES[d as usize])
            .collect::<Vec<_>>()
            .join(" ");
    };

    if n > 1000 && n < 3000 {
        year_words(n)
    } else {
        integer_words(n)
    }
}

/// Years read in pairs: 1905 → "nineteen oh five", 2007 → "two thousand seven".
fn year_words(n: u64) -> String {
    if n == 2000 {
        return "two thousand".to_string();
    }
    if n > 2000 && n < 2010 {
        return format!("two thousand {}", integer_words(n % 100));
    }
    if n % 100 == 0 {
        return format!("{} hundred", integer_words(n / 100));
    }
    let (high, low) = (n / 100, n % 100);
    if low < 10 {
        format!("{} oh {}", integer_words(high), ONES[low as usize])
    } else {
        format!("{} {}", integer_words(high), integer_words(low))
    }
}

pub fn integer_words(n: u64) -> String {
    if n < 20 {
        return ONES[n as usize].to_string();
    }

    let mut words = Vec::new();
    let mut rest = n;

    for (scale, name) in SCALES {
        if rest >= scale {
            words.push(format!("{} {name}", integer_words(rest / scale)));
            rest %= scale;
        }
    }

    if rest >= 100 {
        words.push(format!("{} hundred", ONES[(rest / 100) as usize]));
        rest %= 100;
    }

    if rest >= 20 {
        let (t, o) = (rest / 10, rest % 10);
        if o > 0 {
            words.push(format!("{}-{}", TENS[t as usize], ONES[o as usize]));
        } else {
            words.push(TENS[t as usize].to_string());
        }
    } else if rest > 0 {
        words.push(ONES[rest as usize].to_string());
    }

    words.join(" ")
}

pub fn ordinal_words(n: u64) -> String {
    let cardinal = integer_words(n);
    let split = cardinal.rfind([' ', '-']).map_or(0, |i| i + 1);
    let (head, last) = cardinal.split_at(split);

    let last = match last {
        "one" => "first".to_string(),
        "two" => "second".to_string(),
        "three" => "third".to_string(),
        "five" => "fifth".to_string(),
        "eight" => "eighth".to_string(),
        "nine" => "ninth".to_string(),
        "twelve" => "twelfth".to_string(),
        w if w.ends_with('y') => format!("{}ieth", &w[..w.len() - 1]),
        w => format!("{w}th"),
    };
    format!("{head}{last}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinals() {
        assert_eq!(integer_words(0), "zero");
        assert_eq!(integer_words(13), "thirteen");
        assert_eq!(integer_words(40), "forty");
        assert_eq!(integer_words(123), "one hundred twenty-three");
        assert_eq!(integer_words(1_000_001), "one million one");
        assert_eq!(integer_words(45_300), "forty-five thousand three hundred");
    }

    #[test]
    fn ordinals() {
        assert_eq!(ordinal_words(1), "first");
        assert_eq!(ordinal_words(12), "twelfth");
        assert_eq!(ordinal_words(20), "twentieth");
        assert_eq!(ordinal_words(21), "twenty-first");
        assert_eq!(ordinal_words(104), "one hundred fourth");
    }

    #[test]
    fn years_are_read_in_pairs() {
        assert_eq!(expand_numbers("1984"), "nineteen eighty-four");
        assert_eq!(expand_numbers("1905"), "nineteen oh five");
        assert_eq!(expand_numbers("1900"), "nineteen hundred");
        assert_eq!(expand_numbers("2000"), "two thousand");
        assert_eq!(expand_numbers("2007"), "two thousand seven");
    }

    #[test]
    fn currency_commas_and_decimals() {
        assert_eq!(expand_numbers("$1"), "one dollar");
        assert_eq!(expand_numbers("$3.50"), "three dollars, fifty cents");
        assert_eq!(expand_numbers("$0.01"), "one cent");
        assert_eq!(expand_numbers("£20"), "twenty pounds");
        assert_eq!(expand_numbers("10,000 men"), "ten thousand men");
        assert_eq!(expand_numbers("3.14"), "three point fourteen");
        assert_eq!(expand_numbers("the 3rd of May"), "the third of May");
    }

    #[test]
    fn oversized_dollar_amount_is_read_digit_by_digit() {
        let expected = format!("one{} dollars", " zero".repeat(20));
        assert_eq!(expand_numbers("$100000000000000000000"), expected);
        assert_eq!(
            expand_numbers("$2.100000000000000000000"),
            format!("two point one{} dollars", " zero".repeat(20))
        );
    }
}
