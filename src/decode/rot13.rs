//! rot13 letter substitution

/// Rotate every ASCII letter by 13 places, preserving case.
///
/// Non-letters (digits, punctuation, non-ASCII) pass through unchanged, so
/// applying it twice always gives back the input.
pub fn rot13(input: &str) -> String {
    input.chars().map(rotate_char).collect()
}

fn rotate_char(ch: char) -> char {
    let base = match ch {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return ch,
    };
    (((ch as u8 - base + 13) % 26) + base) as char
}
