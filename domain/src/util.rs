//! Shared utility functions.

/// Single-line preview of user text for debug logs.
///
/// Whitespace runs collapse to one space. Text longer than `max_bytes` is cut
/// on a UTF-8 character boundary and marked with a trailing `...`.
pub fn log_preview(text: &str, max_bytes: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.len() <= max_bytes {
        return flat;
    }
    let mut end = max_bytes;
    while end > 0 && !flat.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &flat[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(log_preview("sore throat", 40), "sore throat");
    }

    #[test]
    fn newlines_are_flattened() {
        assert_eq!(
            log_preview("rash on arm\n\n  started   Monday", 80),
            "rash on arm started Monday"
        );
    }

    #[test]
    fn long_text_is_marked() {
        assert_eq!(log_preview("persistent dry cough", 10), "persistent...");
    }

    #[test]
    fn cut_respects_char_boundary() {
        // 'é' is 2 bytes; byte 5 falls inside it
        assert_eq!(log_preview("fiévre haute", 3), "fi...");
    }
}
