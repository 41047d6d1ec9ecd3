/// Compile a literal pattern once, on first use.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Declare one entry of a rule table.
///
/// ```ignore
/// rule! {
///     category: Category::Arrete,
///     pattern: format!(r"\b(?:arrêté|arrete)\s+du\s+{}", date()),
///     not_followed_by: r"\s+(?:préfectoral|prefectoral)",
///     normalize: Normalizer::Lowercase,
/// }
/// ```
#[macro_export]
macro_rules! rule {
    (
        category: $category:expr,
        pattern: $pattern:expr
        $(, not_followed_by: $reject:expr)?
        , normalize: $normalizer:expr
        $(,)?
    ) => {
        $crate::RuleSpec {
            category: $category,
            pattern: String::from($pattern),
            not_followed_by: None $(.or(Some(String::from($reject))))?,
            normalizer: $normalizer,
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{Category, Normalizer};

    #[test]
    fn rule_without_exclusion_has_none() {
        let spec = rule! {
            category: Category::Loi,
            pattern: r"\bloi\b",
            normalize: Normalizer::Lowercase,
        };
        assert_eq!(spec.category, Category::Loi);
        assert_eq!(spec.pattern, r"\bloi\b");
        assert_eq!(spec.not_followed_by, None);
    }

    #[test]
    fn rule_with_exclusion_keeps_it() {
        let spec = rule! {
            category: Category::Arrete,
            pattern: format!(r"\barrêté\s+du\s+{}", 2010),
            not_followed_by: r"\s+préfectoral",
            normalize: Normalizer::Fixed("arrêté"),
        };
        assert_eq!(spec.pattern, r"\barrêté\s+du\s+2010");
        assert_eq!(spec.not_followed_by.as_deref(), Some(r"\s+préfectoral"));
        assert_eq!(spec.normalizer, Normalizer::Fixed("arrêté"));
    }
}
