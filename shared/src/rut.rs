// Chilean RUT handling: cleaning, display formatting and check digit validation.
//
// Every function here is fail-soft. Malformed input yields an empty or
// unchanged string, or `false`; nothing returns an error.

use crate::utils::group_thousands;

// Raw text a RUT is read from. `None` is absent input and reads as "".
pub trait RawText {
    fn raw_text(&self) -> &str;
}

impl RawText for str {
    fn raw_text(&self) -> &str {
        self
    }
}

impl RawText for String {
    fn raw_text(&self) -> &str {
        self
    }
}

impl<T: RawText + ?Sized> RawText for &T {
    fn raw_text(&self) -> &str {
        (**self).raw_text()
    }
}

impl<T: RawText> RawText for Option<T> {
    fn raw_text(&self) -> &str {
        self.as_ref().map_or("", |text| text.raw_text())
    }
}

// Keeps only ASCII digits and the letter `k`/`K`.
pub fn clean(raw: impl RawText) -> String {
    raw.raw_text()
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, 'k' | 'K'))
        .collect()
}

// Formats a RUT as `12.345.678-5`. Fewer than two significant characters
// come back as cleaned, without hyphen or grouping.
pub fn format(raw: impl RawText) -> String {
    let cleaned = clean(raw);
    match split(&cleaned) {
        Some((body, check_digit)) => format!("{}-{}", group_thousands(body, '.'), check_digit),
        None => cleaned,
    }
}

// Módulo 11 check, case-insensitive on `K`.
pub fn validate(raw: impl RawText) -> bool {
    let cleaned = clean(raw);
    match split(&cleaned) {
        Some((body, provided)) => check_digit(body) == Some(provided),
        None => false,
    }
}

// Expected check digit for a RUT body, weights 2 through 7 applied
// cyclically from the rightmost digit. `None` when the body holds a
// non-digit (a `k` that `clean` left outside the last position).
pub fn check_digit(body: &str) -> Option<char> {
    let mut sum = 0u32;
    let mut multiplier = 2u32;

    for c in body.chars().rev() {
        let digit = c.to_digit(10)?;
        // Reducing as we go keeps the sum bounded for arbitrarily long input.
        sum = (sum + digit * multiplier) % 11;
        multiplier = if multiplier == 7 { 2 } else { multiplier + 1 };
    }

    match 11 - sum {
        11 => Some('0'),
        10 => Some('K'),
        n => char::from_digit(n, 10),
    }
}

// Splits cleaned text into body and upper-cased check digit.
pub(crate) fn split(cleaned: &str) -> Option<(&str, char)> {
    if cleaned.len() < 2 {
        return None;
    }
    // Cleaned text is ASCII only, so byte offsets are char offsets.
    let (body, last) = cleaned.split_at(cleaned.len() - 1);
    let check_digit = last.chars().next()?.to_ascii_uppercase();
    Some((body, check_digit))
}
