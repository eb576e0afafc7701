#[inline]
pub fn strip_surrounding_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 {
        let first = b[0];
        let last = b[b.len() - 1];
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Splits `line` on `delimiter`, keeping delimiters that appear inside
/// single- or double-quoted fields. Quotes are kept; fields are trimmed.
///
/// A quote only opens a quoted field when it is the field's first
/// non-blank character, so apostrophes inside words stay literal.
pub fn split_preserving_quotes(line: &str, delimiter: char) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes: Option<char> = None;

    for ch in line.chars() {
        match in_quotes {
            Some(q) => {
                if ch == q {
                    in_quotes = None;
                }
                cur.push(ch);
            }
            None => {
                if (ch == '"' || ch == '\'') && cur.trim().is_empty() {
                    in_quotes = Some(ch);
                    cur.push(ch);
                } else if ch == delimiter {
                    out.push(cur.trim().to_string());
                    cur.clear();
                } else {
                    cur.push(ch);
                }
            }
        }
    }
    if !cur.is_empty() {
        out.push(cur.trim().to_string());
    }
    out
}
