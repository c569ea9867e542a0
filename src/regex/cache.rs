/// A `&'static Regex` for a literal pattern. Each call site compiles its
/// pattern the first time it runs and reuses it from then on. Patterns are
/// literals in this crate, so an invalid one is a programming error.
#[macro_export]
macro_rules! pattern {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static PATTERN: OnceLock<::regex::Regex> = OnceLock::new();
        PATTERN.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}
