/// Derives a URL-safe slug from a title: lowercase, runs of anything outside
/// `[a-z0-9]` collapse to a single dash, no leading or trailing dash.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_dash = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_dash = false;
        } else if !slug.is_empty() && !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic_cases() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  ---Foo Bar---  "), "foo-bar");
        assert_eq!(slugify("Rust Meetup 2026"), "rust-meetup-2026");
    }

    #[test]
    fn slugify_collapses_runs() {
        assert_eq!(slugify("a   &&&   b"), "a-b");
        assert_eq!(slugify("foo/bar\\baz"), "foo-bar-baz");
    }

    #[test]
    fn slugify_output_is_well_formed() {
        for title in ["Hello, World!", "  x  ", "A--B", "tea & biscuits", "日本 rust"] {
            let slug = slugify(title);
            assert!(!slug.starts_with('-'), "{slug:?} starts with a dash");
            assert!(!slug.ends_with('-'), "{slug:?} ends with a dash");
            assert!(!slug.contains("--"), "{slug:?} has a doubled dash");
            assert!(
                slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{slug:?} has characters outside [a-z0-9-]"
            );
        }
    }

    #[test]
    fn slugify_degenerate_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
