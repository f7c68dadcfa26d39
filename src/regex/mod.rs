// Compile a regular expression once and reuse it on every subsequent call.
// The pattern must be a string literal known to be valid; an invalid pattern
// panics on first use.

#[macro_export]
macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}
