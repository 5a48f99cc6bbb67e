use tracing::{debug, instrument};

/// Name substituted into the greeting when no name is supplied.
pub const DEFAULT_NAME: &str = "World";

/// Builds the greeting for `name`.
///
/// `None` falls back to [`DEFAULT_NAME`]. A supplied name is used verbatim,
/// with no trimming, casing, or validation; the empty string is a valid name
/// and is not replaced by the default.
///
/// # Examples
/// ```
/// use hello_world_core::greet;
///
/// assert_eq!(greet(None), "Hello, World!");
/// assert_eq!(greet(Some("Alice")), "Hello, Alice!");
/// ```
#[instrument]
pub fn greet(name: Option<&str>) -> String {
    let name = name.unwrap_or(DEFAULT_NAME);
    debug!(name, "formatting greeting");
    format!("Hello, {name}!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn test_greet_default() {
        assert_eq!(greet(None), "Hello, World!");
    }

    #[test]
    fn test_greet_with_name() {
        assert_eq!(greet(Some("Alice")), "Hello, Alice!");
    }

    #[test]
    fn test_greet_with_empty_string() {
        // An empty name is distinct from an absent one and must be preserved.
        assert_eq!(greet(Some("")), "Hello, !");
    }

    #[test]
    fn test_greet_various_names() {
        let cases = [
            ("Bob", "Hello, Bob!"),
            ("Charlie", "Hello, Charlie!"),
            ("123", "Hello, 123!"),
            ("Test User", "Hello, Test User!"),
        ];
        for (name, expected) in cases {
            assert_eq!(greet(Some(name)), expected);
        }
    }

    #[test]
    fn test_greet_preserves_name_verbatim() {
        for name in ["  padded  ", "O'Brien", "wörld", "line\nbreak"] {
            assert_eq!(greet(Some(name)), format!("Hello, {name}!"));
        }
    }

    #[test]
    fn test_greet_default_snapshot() {
        expect!["Hello, World!"].assert_eq(&greet(None));
    }
}
