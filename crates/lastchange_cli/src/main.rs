use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use lastchange_core::{
    header_contents, plain_contents, write_if_changed, OverrideTable, ResolveRequest, Resolver,
    RevisionForm, SystemGit, TracingSink, DEFAULT_FILTER, DEFAULT_VERSION_MACRO,
};

mod logging;

/// Exit code for command-line misuse, matching clap's own usage errors.
const USAGE_EXIT_CODE: u8 = 2;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(
    name = "lastchange",
    about = "Write the last relevant git revision as LASTCHANGE text or a C header"
)]
struct Cli {
    /// Name of C #define when using --header.
    #[arg(short = 'm', long, value_name = "NAME", default_value = DEFAULT_VERSION_MACRO)]
    version_macro: String,
    /// Write last change to FILE. Can be combined with --header to write both files.
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,
    /// Write last change to FILE as a C/C++ header. Can be combined with --output.
    #[arg(long, value_name = "FILE")]
    header: Option<String>,
    /// Output the bare commit hash, without the commit position.
    #[arg(long)]
    revision_id_only: bool,
    /// Just print the revision string. Overrides any file-output options.
    #[arg(long)]
    print_only: bool,
    /// Use the repository in this directory (default: the executable's directory).
    #[arg(short, long, value_name = "DIR")]
    source_dir: Option<PathBuf>,
    /// Only consider commits whose message matches this regex. Empty disables filtering.
    #[arg(long, value_name = "REGEX", default_value = DEFAULT_FILTER)]
    filter: String,
    /// Load pinned revisions from a JSON file instead of the built-in table.
    #[arg(long, value_name = "FILE")]
    overrides: Option<PathBuf>,
    /// Same as --output.
    #[arg(value_name = "FILE")]
    positional: Vec<String>,
}

fn default_source_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

fn run(cli: Cli) -> Result<ExitCode> {
    let mut positional = cli.positional.into_iter();
    let output = cli.output.or_else(|| positional.next());
    let unexpected: Vec<String> = positional.collect();
    if !unexpected.is_empty() {
        eprintln!("Unexpected arguments: {unexpected:?}\n");
        eprintln!("{}", Cli::command().render_help());
        return Ok(ExitCode::from(USAGE_EXIT_CODE));
    }

    let overrides = match &cli.overrides {
        Some(path) => OverrideTable::load(path)?,
        None => OverrideTable::builtin(),
    };
    let source_dir = cli.source_dir.unwrap_or_else(default_source_dir);
    let filter = (!cli.filter.is_empty()).then_some(cli.filter.as_str());

    let resolver = Resolver::new(&SystemGit, &TracingSink, &overrides);
    let info = resolver.resolve(&ResolveRequest {
        source_dir: &source_dir,
        filter,
        output_path: output.as_deref(),
        version_macro: Some(cli.version_macro.as_str()),
    });

    let form = if cli.revision_id_only {
        RevisionForm::IdOnly
    } else {
        RevisionForm::Full
    };
    let revision = info.value(form);

    if cli.print_only {
        println!("{revision}");
        return Ok(ExitCode::SUCCESS);
    }

    let contents = plain_contents(revision);
    if output.is_none() && cli.header.is_none() {
        print!("{contents}");
        return Ok(ExitCode::SUCCESS);
    }
    if let Some(path) = &output {
        write_if_changed(Path::new(path), &contents)?;
    }
    if let Some(path) = &cli.header {
        write_if_changed(
            Path::new(path),
            &header_contents(path, &cli.version_macro, revision),
        )?;
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    logging::init_logging();
    run(Cli::parse())
}
