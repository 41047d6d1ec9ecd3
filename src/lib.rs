use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
pub mod export;
pub mod index;
mod rules;

pub use api::{
    Annotation, AnnotationDetails, AnnotationVerbose, MarkupPolicy, Options, RuleSummary, annotate,
    annotate_verbose_with, annotate_with, annotate_with_registry, default_registry, list_categories,
};
pub use engine::{Registry, RegistryBuilder, RuleSpec, href, slug};
pub use error::{IndexError, NormalizeError, RegistryError, UnknownCategory};
pub use rules::normalize::Normalizer;

// --- Categories --------------------------------------------------------------

/// Kind of legal instrument a reference points to.
///
/// The set is closed: every built-in rule and every rule declared through
/// [`RegistryBuilder`] is tagged with one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Code,
    Directive,
    Loi,
    ArreteMinisteriel,
    Decret,
    Circulaire,
    ArretePrefectoral,
    Norme,
    Arrete,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 9] = [
        Category::Code,
        Category::Directive,
        Category::Loi,
        Category::ArreteMinisteriel,
        Category::Decret,
        Category::Circulaire,
        Category::ArretePrefectoral,
        Category::Norme,
        Category::Arrete,
    ];

    /// Tag used in hrefs, markup attributes and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Code => "code",
            Category::Directive => "directive",
            Category::Loi => "loi",
            Category::ArreteMinisteriel => "arrete_ministeriel",
            Category::Decret => "decret",
            Category::Circulaire => "circulaire",
            Category::ArretePrefectoral => "arrete_prefectoral",
            Category::Norme => "norme",
            Category::Arrete => "arrete",
        }
    }

    pub(crate) fn flag(self) -> CategorySet {
        match self {
            Category::Code => CategorySet::CODE,
            Category::Directive => CategorySet::DIRECTIVE,
            Category::Loi => CategorySet::LOI,
            Category::ArreteMinisteriel => CategorySet::ARRETE_MINISTERIEL,
            Category::Decret => CategorySet::DECRET,
            Category::Circulaire => CategorySet::CIRCULAIRE,
            Category::ArretePrefectoral => CategorySet::ARRETE_PREFECTORAL,
            Category::Norme => CategorySet::NORME,
            Category::Arrete => CategorySet::ARRETE,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL.into_iter().find(|c| c.as_str() == s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

bitflags::bitflags! {
    /// Set of categories, e.g. the ones a registry can produce.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CategorySet: u16 {
        const CODE               = 1 << 0;
        const DIRECTIVE          = 1 << 1;
        const LOI                = 1 << 2;
        const ARRETE_MINISTERIEL = 1 << 3;
        const DECRET             = 1 << 4;
        const CIRCULAIRE         = 1 << 5;
        const ARRETE_PREFECTORAL = 1 << 6;
        const NORME              = 1 << 7;
        const ARRETE             = 1 << 8;
    }
}

impl CategorySet {
    /// Iterate the categories in this set, in declaration order.
    pub fn categories(self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |c| self.contains(c.flag()))
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        iter.into_iter().fold(CategorySet::empty(), |set, c| set | c.flag())
    }
}

// --- Spans and matches -------------------------------------------------------

/// Half-open byte interval `[start, end)` into the annotated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Candidate produced by the scanner, before overlap resolution.
///
/// Lives only for the duration of one annotation call.
#[derive(Debug, Clone)]
pub(crate) struct RawMatch {
    pub span: Span,
    pub category: Category,
    /// Index of the producing rule in its registry.
    pub rule: usize,
    pub raw_text: String,
    pub normalized_text: String,
}

/// An accepted legal reference.
///
/// `start`/`end` are byte offsets into the original input; `href` is the
/// locator emitted in the rendered anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub start: usize,
    pub end: usize,
    #[serde(rename = "type")]
    pub category: Category,
    /// Matched slice of the original input.
    #[serde(rename = "text")]
    pub raw_text: String,
    /// Canonical form of `raw_text` produced by the rule's normalizer.
    #[serde(rename = "normalized")]
    pub normalized_text: String,
    pub href: String,
}

impl Reference {
    pub fn span(&self) -> Span {
        Span { start: self.start, end: self.end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tags_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("reglement".parse::<Category>().is_err());
    }

    #[test]
    fn category_set_iterates_in_declaration_order() {
        let set: CategorySet = [Category::Norme, Category::Code, Category::Arrete].into_iter().collect();
        let listed: Vec<Category> = set.categories().collect();
        assert_eq!(listed, vec![Category::Code, Category::Norme, Category::Arrete]);
    }

    #[test]
    fn reference_serializes_with_wire_field_names() {
        let reference = Reference {
            start: 7,
            end: 29,
            category: Category::ArretePrefectoral,
            raw_text: "Arrêté préfectoral du 1er mai 2001".to_string(),
            normalized_text: "arrêté préfectoral du 1er mai 2001".to_string(),
            href: "#ref:arrete_prefectoral:arr-t-pr-fectoral-du-1er-mai-2001".to_string(),
        };
        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(json["type"], "arrete_prefectoral");
        assert_eq!(json["text"], "Arrêté préfectoral du 1er mai 2001");
        assert_eq!(json["normalized"], "arrêté préfectoral du 1er mai 2001");
        assert_eq!(json["start"], 7);
        assert_eq!(json["href"], "#ref:arrete_prefectoral:arr-t-pr-fectoral-du-1er-mai-2001");
    }

    #[test]
    fn spans_overlap_only_when_they_share_a_byte() {
        let a = Span { start: 0, end: 5 };
        let b = Span { start: 5, end: 9 };
        let c = Span { start: 4, end: 6 };
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(b.overlaps(&c));
    }
}
