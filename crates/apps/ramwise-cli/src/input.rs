//! Fail-open field binding.
//!
//! Anything the user types produces a value, never an error: non-numeric
//! text counts as zero and the engine's own normalization handles the
//! rest. Structural problems (unknown preset, missing entry) are still
//! surfaced to the caller; only field values degrade silently.

pub fn parse_gb(text: &str) -> f64 {
    let value: f64 = text.trim().parse().unwrap_or(0.0);
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

pub fn parse_count(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

pub fn parse_yes_no(text: &str) -> bool {
    matches!(
        text.trim().to_ascii_lowercase().as_str(),
        "yes" | "y" | "true" | "1"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_numerics_become_zero() {
        assert_eq!(parse_gb("sixteen"), 0.0);
        assert_eq!(parse_gb(""), 0.0);
        assert_eq!(parse_gb("-8"), 0.0);
        assert_eq!(parse_gb("NaN"), 0.0);
        assert_eq!(parse_count("4.5"), 0);
        assert_eq!(parse_count("many"), 0);
    }

    #[test]
    fn valid_numerics_pass_through() {
        assert_eq!(parse_gb(" 16 "), 16.0);
        assert_eq!(parse_gb("2.5"), 2.5);
        assert_eq!(parse_count("12"), 12);
    }

    #[test]
    fn yes_no_spellings() {
        assert!(parse_yes_no("yes"));
        assert!(parse_yes_no("Y"));
        assert!(!parse_yes_no("no"));
        assert!(!parse_yes_no("maybe"));
    }
}
