//! English rendering of amounts ("One Hundred and Five Dirhams and Fifty Fils only.").

use crate::amount::MonetaryAmount;
use crate::currency::Currency;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Scale word per 3-digit chunk, least significant first.
///
/// Chunks past `Million` (values of a billion and up) get no scale word: the table is
/// fixed and `2_000_000_000` renders as "Two".
pub const SCALES: [&str; 3] = ["", "Thousand", "Million"];

fn below_hundred(n: u64, out: &mut Vec<&'static str>) {
    let n = n as usize;
    if n < 20 {
        if n > 0 {
            out.push(ONES[n]);
        }
        return;
    }
    out.push(TENS[n / 10]);
    if n % 10 != 0 {
        out.push(ONES[n % 10]);
    }
}

/// Words for a single chunk in `1..1000`.
fn chunk_words(chunk: u64) -> Vec<&'static str> {
    let mut out = Vec::new();
    let hundreds = chunk / 100;
    let rest = chunk % 100;

    if hundreds > 0 {
        out.push(ONES[hundreds as usize]);
        out.push("Hundred");
        if rest != 0 {
            out.push("and");
        }
    }
    below_hundred(rest, &mut out);
    out
}

/// Whole-number words using short-scale 3-digit chunks. `0` is `"Zero"`.
pub fn integer_words(n: u64) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    let mut chunks: Vec<Vec<&'static str>> = Vec::new();
    let mut rest = n;
    let mut index = 0;
    while rest > 0 {
        let chunk = rest % 1000;
        if chunk != 0 {
            let mut words = chunk_words(chunk);
            if let Some(scale) = SCALES.get(index).copied().filter(|s| !s.is_empty()) {
                words.push(scale);
            }
            chunks.push(words);
        }
        rest /= 1000;
        index += 1;
    }

    chunks.reverse();
    chunks.concat().join(" ")
}

/// `"<units> <major>[ and <subunits> <minor>] only."`
pub fn amount_in_words(amount: &MonetaryAmount, currency: &Currency) -> String {
    let mut out = format!("{} {}", integer_words(amount.units()), currency.major);
    if amount.subunits() > 0 {
        out.push_str(&format!(
            " and {} {}",
            integer_words(u64::from(amount.subunits())),
            currency.minor
        ));
    }
    out.push_str(" only.");
    out
}

/// Words for a floating point total in dirhams. Non-positive and non-finite amounts
/// yield an empty string.
pub fn number_to_words(amount: f64) -> String {
    number_to_words_in(amount, &Currency::AED)
}

/// [`number_to_words`] with a caller-chosen currency.
pub fn number_to_words_in(amount: f64, currency: &Currency) -> String {
    match MonetaryAmount::from_f64(amount) {
        Some(a) => amount_in_words(&a, currency),
        None => {
            tracing::debug!(amount, "total is not a renderable positive amount; no words rendered");
            String::new()
        }
    }
}

/// Words for the raw text of a total field. Non-numeric or non-positive input yields
/// an empty string.
pub fn words_for_input(input: &str) -> String {
    match MonetaryAmount::parse(input) {
        Some(a) => amount_in_words(&a, &Currency::AED),
        None => {
            tracing::debug!(input, "total is not a positive number; no words rendered");
            String::new()
        }
    }
}
