//! Console banner helpers for the demo binary
//!
//! Classic 80-column output: `=` banners for headers, `-` banners for
//! sections, `>>` prefixes for steps. Cosmetic only.

const WIDTH: usize = 80;

/// Format a top-level header banner
pub fn header(title: &str) -> String {
    format!("\n\n{}\n", center(title, '='))
}

/// Format a section banner
pub fn section(title: &str) -> String {
    format!("\n{}\n", center(title, '-'))
}

/// Format a test-step line
pub fn step(label: &str) -> String {
    format!("\n>> {}:\n", label)
}

/// Center ` title ` in a WIDTH-column line of `fill` characters
///
/// Odd leftover padding goes to the right-hand side.
fn center(title: &str, fill: char) -> String {
    let padded = format!(" {} ", title);
    let used = padded.chars().count();
    if used >= WIDTH {
        return padded;
    }
    let left = (WIDTH - used) / 2;
    let right = WIDTH - used - left;
    let fill = fill.to_string();
    format!("{}{}{}", fill.repeat(left), padded, fill.repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_eighty_columns() {
        let banner = header("ITERATORS");
        let line = banner.trim();
        assert_eq!(line.chars().count(), 80);
        assert!(line.starts_with("==="));
        assert!(line.contains(" ITERATORS "));
    }

    #[test]
    fn test_section_uses_dashes() {
        let banner = section("Create instance");
        assert!(banner.trim().starts_with("---"));
    }

    #[test]
    fn test_step_prefix() {
        assert_eq!(step("Draining the cursor"), "\n>> Draining the cursor:\n");
    }

    #[test]
    fn test_long_title_is_not_truncated() {
        let title = "x".repeat(100);
        assert!(header(&title).contains(&title));
    }
}
