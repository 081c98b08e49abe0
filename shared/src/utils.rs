// Text helpers used by both RUT and currency rendering.

// Inserts `separator` between groups of three digits, counting from the
// right of every run of ASCII digits in `text`.
//
// A separator is placed only where the preceding character is a word
// character, so a leading sign or a run at the start of the text never
// gets one: `"12345678"` becomes `"12.345.678"`, `"-1234"` becomes
// `"-1.234"`. Non-digit characters break runs and are kept as they are.
pub fn group_thousands(text: &str, separator: char) -> String {
    let chars: Vec<char> = text.chars().collect();

    // Length of the digit run starting at each position.
    let mut run = vec![0usize; chars.len() + 1];
    for i in (0..chars.len()).rev() {
        run[i] = if chars[i].is_ascii_digit() {
            run[i + 1] + 1
        } else {
            0
        };
    }

    let mut grouped = String::with_capacity(text.len() + text.len() / 3);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && is_word_char(chars[i - 1]) && run[i] > 0 && run[i] % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
