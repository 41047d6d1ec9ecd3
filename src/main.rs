mod debug_report;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use juriref::export::AnnotatedExport;
use juriref::index::ReferenceIndex;
use juriref::{MarkupPolicy, Options, annotate_verbose_with, default_registry, list_categories};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "juriref")]
#[command(about = "Find and link references to French legal texts")]
#[command(version)]
struct Cli {
    /// Log engine internals and print a run report to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Annotate text given as arguments, read from a file, or read from stdin
    Annotate {
        /// Text to annotate; words are joined with single spaces
        text: Vec<String>,

        /// Read the text from this file instead
        #[arg(long, short, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Print `{"html", "references"}` instead of the annotated text
        #[arg(long)]
        json: bool,

        /// Drop candidates whose span crosses a markup boundary
        #[arg(long)]
        reject_broken_markup: bool,

        /// Force ANSI colors in the run report
        #[arg(long, conflicts_with = "no_color")]
        color: bool,

        /// Disable ANSI colors in the run report
        #[arg(long)]
        no_color: bool,
    },
    /// Index every HTML document under a directory
    Index {
        /// Directory to scan recursively for *.html files
        dir: PathBuf,
    },
    /// Annotate every HTML document under a directory and pack the results
    /// into a ZIP archive
    Zip {
        /// Directory to scan recursively for *.html files
        dir: PathBuf,

        /// Archive to create
        #[arg(long, short, default_value = "annotated.zip")]
        out: PathBuf,

        /// Also write the annotated tree to this directory
        #[arg(long)]
        tree: Option<PathBuf>,
    },
    /// List the reference categories the built-in rules produce
    Categories,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Annotate { text, input, json, reject_broken_markup, color, no_color } => {
            let text = read_input(text, input)?;
            let options = Options {
                markup_policy: if reject_broken_markup { MarkupPolicy::Reject } else { MarkupPolicy::Flag },
            };

            let res = annotate_verbose_with(&text, default_registry(), &options);
            if cli.verbose {
                let color = color || (!no_color && io::stderr().is_terminal());
                debug_report::print_run(&res.annotation, &res.details, color);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&res.annotation)?);
            } else {
                println!("{}", res.annotation.html);
            }
        }
        Command::Index { dir } => {
            let index =
                ReferenceIndex::build(&dir).with_context(|| format!("failed to index {}", dir.display()))?;
            let types: Vec<&str> = index.categories().into_iter().map(|c| c.as_str()).collect();
            let summary = serde_json::json!({ "count": index.len(), "types": types });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Zip { dir, out, tree } => {
            let export =
                AnnotatedExport::build(&dir).with_context(|| format!("failed to annotate {}", dir.display()))?;
            if let Some(tree) = tree {
                export.write_to_dir(&tree)?;
            }
            export.write_zip_file(&out)?;
            println!(
                "Wrote {} ({} documents, {} references)",
                out.display(),
                export.documents(),
                export.references()
            );
        }
        Command::Categories => {
            for category in list_categories() {
                println!("{category}");
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "juriref=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_input(words: Vec<String>, file: Option<PathBuf>) -> Result<String> {
    let text = if let Some(path) = file {
        std::fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?
    } else if !words.is_empty() {
        words.join(" ")
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).context("failed to read stdin")?;
        buffer
    };

    if text.trim().is_empty() {
        bail!("no input provided");
    }
    Ok(text)
}
