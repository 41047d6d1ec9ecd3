use juriref::{Annotation, AnnotationDetails};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Longest pattern prefix shown per rule.
const PATTERN_PREVIEW: usize = 60;

/// Print a run report to stderr, keeping stdout for the annotated output.
pub fn print_run(annotation: &Annotation, details: &AnnotationDetails, color: bool) {
    let palette = ansi::Palette::new(color);
    eprintln!(
        "\n{}",
        palette.bold(palette.paint(format!("⚖  Annotated {} references", annotation.references.len()), ansi::CYAN))
    );

    eprintln!("\n{}", palette.paint("━━━ Rules ━━━", ansi::GRAY));
    print_rules(details, &palette);

    eprintln!("\n{}", palette.paint("━━━ Resolution ━━━", ansi::GRAY));
    print_resolution(details, &palette);

    eprintln!("\n{}", palette.paint("━━━ References ━━━", ansi::GRAY));
    if annotation.references.is_empty() {
        eprintln!("{}", palette.dim("  No references found"));
    } else {
        print_references(annotation, &palette);
    }

    eprintln!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    eprintln!(
        "  Total: {}  │  Scan: {}  │  Resolve: {}  │  Render: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.scan), ansi::CYAN),
        palette.dim(format!("{:?}", details.resolve)),
        palette.dim(format!("{:?}", details.render)),
    );
    eprintln!();
}

fn print_rules(details: &AnnotationDetails, palette: &ansi::Palette) {
    if details.rules.is_empty() {
        eprintln!("{}", palette.dim("  No rule matched"));
        return;
    }

    for rule in &details.rules {
        eprintln!(
            "  {} {} {}  {}",
            palette.paint(format!("#{:<2}", rule.index), ansi::GRAY),
            palette.paint(format!("{:<18}", rule.category.as_str()), ansi::BLUE),
            palette.paint(format!("✓ {}", rule.matches), ansi::GREEN),
            palette.dim(preview(&rule.pattern)),
        );
    }
}

fn print_resolution(details: &AnnotationDetails, palette: &ansi::Palette) {
    eprintln!(
        "  Raw matches: {}  │  Discarded: {}  │  Fallbacks: {}",
        palette.paint(details.raw_matches.to_string(), ansi::BLUE),
        palette.paint(details.discarded.to_string(), ansi::YELLOW),
        palette.paint(details.normalize_fallbacks.to_string(), ansi::YELLOW),
    );
    if details.markup_flagged > 0 || details.markup_rejected > 0 {
        eprintln!(
            "  Markup: {} flagged, {} rejected",
            palette.paint(details.markup_flagged.to_string(), ansi::YELLOW),
            palette.paint(details.markup_rejected.to_string(), ansi::YELLOW),
        );
    }
}

fn print_references(annotation: &Annotation, palette: &ansi::Palette) {
    for (idx, reference) in annotation.references.iter().enumerate() {
        eprintln!(
            "  {} {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.bold(palette.paint(&reference.raw_text, ansi::GREEN)),
            palette.dim("│"),
            palette.paint(format!("span {}..{}", reference.start, reference.end), ansi::YELLOW),
        );
        eprintln!(
            "      {} {}  {} {}",
            palette.dim("type:"),
            palette.paint(reference.category.as_str(), ansi::BLUE),
            palette.dim("│ href:"),
            palette.paint(&reference.href, ansi::CYAN)
        );
    }
}

fn preview(pattern: &str) -> String {
    match pattern.char_indices().nth(PATTERN_PREVIEW) {
        Some((cut, _)) => format!("{}…", &pattern[..cut]),
        None => pattern.to_string(),
    }
}
