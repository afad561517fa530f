//! sigscrape: flat, typed signature listings from API-reference HTML.
//!
//! Two source formats:
//!
//! - **members**: a directory of per-member pages (`M_*.htm`) carrying a
//!   `Microsoft.Help.Id` meta tag and a C# declaration block
//! - **script**: one index page of function sections with an example call
//!   and prose Parameters/Returns tables
//!
//! Each emits one `qualified.name(param: Type, ...) -> Return` line per
//! callable, sorted.

mod error;
mod logger;
mod markup;
mod members;
mod model;
mod output;
mod script;
mod split;
mod types;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use types::prose::{ProseTypeMapper, TypeStyle};

#[derive(Parser)]
#[command(
    name = "sigscrape",
    about = "Extract typed signature listings from API-reference HTML"
)]
struct Cli {
    /// Debug logging (per-page skip reasons)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Errors only
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Per-member pages (M_*.htm) under a directory
    Members(MembersArgs),
    /// A single script-reference index page
    Script(ScriptArgs),
    /// Keep only the lines of a listing under a namespace prefix
    Filter(FilterArgs),
}

#[derive(Args)]
struct MembersArgs {
    /// Directory searched recursively for member pages
    input: PathBuf,

    /// Output listing
    #[arg(short = 'o', long)]
    output: PathBuf,

    /// Also write the lines under this namespace prefix (e.g. Rhino.Geometry)
    #[arg(long, requires = "namespace_output")]
    namespace: Option<String>,

    /// Destination of the namespace subset
    #[arg(long, requires = "namespace")]
    namespace_output: Option<PathBuf>,
}

#[derive(Args)]
struct ScriptArgs {
    /// Index HTML document
    input: PathBuf,

    /// Output listing
    #[arg(short = 'o', long)]
    output: PathBuf,

    /// Module name prefixed to every function
    #[arg(long, default_value = "rhinoscriptsyntax")]
    module: String,

    /// Vocabulary for prose type labels
    #[arg(long, value_enum, default_value_t = TypeStyle::Dotnet)]
    type_style: TypeStyle,
}

#[derive(Args)]
struct FilterArgs {
    /// Existing listing
    input: PathBuf,

    /// Filtered listing
    #[arg(short = 'o', long)]
    output: PathBuf,

    /// Namespace prefix to keep
    #[arg(long)]
    namespace: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose, cli.quiet);

    match cli.command {
        Command::Members(args) => run_members(&args),
        Command::Script(args) => run_script(&args),
        Command::Filter(args) => run_filter(&args),
    }
}

fn run_members(args: &MembersArgs) -> Result<()> {
    let extraction = members::extract_dir(&args.input)?;
    extraction.log_summary("member pages");

    let lines = output::sorted(extraction.lines);
    output::write_lines(&args.output, &lines)?;

    if let (Some(prefix), Some(path)) = (&args.namespace, &args.namespace_output) {
        let subset: Vec<&String> = output::in_namespace(&lines, prefix).collect();
        output::write_lines(path, &subset)?;
        info!("{} lines under {}", subset.len(), prefix);
    }
    Ok(())
}

fn run_script(args: &ScriptArgs) -> Result<()> {
    let bytes = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let doc = markup::decode_page(&bytes);

    let extractor =
        script::ScriptExtractor::new(&args.module, ProseTypeMapper::new(args.type_style));
    let extraction = extractor.extract_document(&doc);
    extraction.log_summary("function sections");

    let lines = output::sorted_unique(extraction.lines);
    output::write_lines(&args.output, &lines)
}

fn run_filter(args: &FilterArgs) -> Result<()> {
    let kept = output::filter_file(&args.input, &args.output, &args.namespace)?;
    info!("{} lines under {}", kept, args.namespace);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn script_defaults() {
        let cli = Cli::parse_from(["sigscrape", "script", "index.html", "-o", "out.txt"]);
        match cli.command {
            Command::Script(args) => {
                assert_eq!(args.module, "rhinoscriptsyntax");
                assert_eq!(args.type_style, TypeStyle::Dotnet);
            }
            _ => panic!("expected script command"),
        }
    }

    #[test]
    fn namespace_flags_come_in_pairs() {
        let result = Cli::try_parse_from([
            "sigscrape", "members", "html", "-o", "all.txt", "--namespace", "Rhino.Geometry",
        ]);
        assert!(result.is_err());
    }
}
