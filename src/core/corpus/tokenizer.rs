/// Splits `text` on Unicode whitespace. Case and repeats are preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
