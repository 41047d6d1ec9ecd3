//! Stable locators for references.

use crate::Category;

/// URL-safe form of `text`.
///
/// Lowercases, turns every run of characters outside `[a-z0-9]` into one
/// hyphen, then trims hyphens at both ends. Accented letters are outside the
/// set: `"décret"` becomes `"d-cret"`.
pub fn slug(text: &str) -> String {
    let lower = text.to_lowercase();
    regex!(r"[^a-z0-9]+").replace_all(&lower, "-").trim_matches('-').to_string()
}

/// Locator for a reference: `#ref:<category>:<slug>`.
pub fn href(category: Category, normalized_text: &str) -> String {
    format!("#ref:{}:{}", category.as_str(), slug(normalized_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_replaces_runs_and_trims() {
        assert_eq!(slug("décret n° 77-1133 du 21 septembre 1977"), "d-cret-n-77-1133-du-21-septembre-1977");
        assert_eq!(slug("  --Loi du 12 janvier 2010!! "), "loi-du-12-janvier-2010");
        assert_eq!(slug("DIRECTIVE 2010/75/UE"), "directive-2010-75-ue");
    }

    #[test]
    fn slug_of_empty_or_symbol_only_text_is_empty() {
        assert_eq!(slug(""), "");
        assert_eq!(slug("°° — ’"), "");
    }

    #[test]
    fn href_is_prefixed_with_category() {
        assert_eq!(href(Category::Loi, "loi du 12 janvier 2010"), "#ref:loi:loi-du-12-janvier-2010");
        assert_eq!(href(Category::Code, ""), "#ref:code:");
    }

    #[test]
    fn href_depends_only_on_its_inputs() {
        let a = href(Category::ArreteMinisteriel, "arrêté ministériel du 1er mai 2001");
        let b = href(Category::ArreteMinisteriel, "arrêté ministériel du 1er mai 2001");
        assert_eq!(a, b);
        assert_eq!(a, "#ref:arrete_ministeriel:arr-t-minist-riel-du-1er-mai-2001");
    }
}
