//! Text shown on the reminder list.

pub const BULLET: &str = "• ";

/// Shown when the store is missing or cannot be read.
pub const FALLBACK_TEXT: &str = "No reminders found.";

/// Prefix every line with a bullet and terminate it with a newline.
pub fn bulleted<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(BULLET);
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out
}

/// Turn the outcome of a store read into display text. Any read error,
/// including a missing store, collapses to [`FALLBACK_TEXT`].
pub fn listing_text<S: AsRef<str>, E>(lines: Result<Vec<S>, E>) -> String {
    match lines {
        Ok(lines) => bulleted(&lines),
        Err(_) => FALLBACK_TEXT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets_each_line_in_order() {
        let lines = vec!["first", "second", "third"];
        assert_eq!(bulleted(&lines), "• first\n• second\n• third\n");
    }

    #[test]
    fn read_error_becomes_fallback() {
        let lines: Result<Vec<String>, &str> = Err("missing");
        assert_eq!(listing_text(lines), "No reminders found.");
    }

    #[test]
    fn empty_store_renders_empty() {
        let lines: Result<Vec<String>, &str> = Ok(vec![]);
        assert_eq!(listing_text(lines), "");
    }
}
