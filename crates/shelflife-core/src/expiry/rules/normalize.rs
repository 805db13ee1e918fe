//! OCR text normalization.

/// Uppercase text and repair the letter `O` misread for the digit `0`.
///
/// The repair only fires for an `O` sitting directly between two digits
/// (`2O25` becomes `2025`), so words such as `FOOD` or `BOX` are left
/// alone. Neighbours are judged on the uppercased input, so a run like
/// `2OO5` is not rewritten. Uppercasing is ASCII-only, which keeps byte
/// and character offsets identical to the input.
pub fn normalize(text: &str) -> String {
    let upper = text.to_ascii_uppercase();
    let bytes = upper.as_bytes();

    let mut out = String::with_capacity(upper.len());
    for (i, ch) in upper.char_indices() {
        let between_digits = ch == 'O'
            && i > 0
            && bytes[i - 1].is_ascii_digit()
            && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);

        out.push(if between_digits { '0' } else { ch });
    }
    out
}
