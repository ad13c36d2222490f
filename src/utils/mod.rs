pub mod logging;

/// Keeps only ASCII digits, e.g. `"2a5 min"` becomes `"25"`.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
