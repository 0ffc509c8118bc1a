#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front-end of `dirlist`. It parses the
//! arguments, configures logging, and delegates the listing itself to
//! [`listing::DirectoryLister`].
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for standard
//! output and error, so tests drive the exact code path used by the binary
//! with in-memory buffers. A [`clap`](https://docs.rs/clap/) command performs
//! the parse; help and version output use fixed text so the wording stays
//! stable.
//!
//! # Invariants
//!
//! - `run` never panics; every failure becomes a non-zero exit code.
//! - Standard output receives listing data (or help/version text) only.
//!   Diagnostics are written to standard error.
//! - When the directory cannot be opened nothing is written to standard output.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run(["dirlist", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(status, 0);
//! assert!(String::from_utf8(stdout).unwrap().starts_with("dirlist "));
//! assert!(stderr.is_empty());
//! ```

mod exit_code;


use std::ffi::OsString;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};
use listing::{DirectoryLister, EntryFormat};
use logging::VerbosityConfig;

pub use exit_code::{ExitCode, HasExitCode};

/// Name used in help output and diagnostics.
pub const PROGRAM_NAME: &str = "dirlist";

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Directory listed when no operand is given.
const DEFAULT_DIRECTORY: &str = ".";

/// Deterministic help text describing the CLI surface.
const HELP_TEXT: &str = concat!(
    "dirlist ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "\n",
    "Usage: dirlist [-h] [-V] [-l] [-v]... [DIR]\n",
    "\n",
    "Print the name of every entry in DIR (default: the current directory),\n",
    "one per line, in the order the filesystem returns them.\n",
    "\n",
    "  -h, --help       Show this help message and exit.\n",
    "  -V, --version    Output version information and exit.\n",
    "  -l, --long       Prefix each name with its inode number and type.\n",
    "  -v, --verbose    Log progress to standard error (repeat for more detail).\n",
    "\n",
    "Exit status is 0 on success, 1 on usage errors, 3 when DIR cannot be\n",
    "opened, and 11 when reading DIR or writing the listing fails.\n",
);

/// Parsed command produced by [`parse_args`].
#[derive(Debug, Default)]
struct ParsedArgs {
    show_help: bool,
    show_version: bool,
    long: bool,
    verbose: u8,
    directory: Option<OsString>,
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("long")
                .long("long")
                .short('l')
                .help("Prefix each name with its inode number and type.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress to standard error.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("directory")
                .value_name("DIR")
                .num_args(1)
                .value_parser(OsStringValueParser::new()),
        )
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        long: matches.get_flag("long"),
        verbose: matches.get_count("verbose"),
        directory: matches.remove_one::<OsString>("directory"),
    })
}

/// Renders the help text describing the supported options.
fn render_help() -> String {
    HELP_TEXT.to_string()
}

/// Renders the version banner.
fn render_version() -> String {
    format!("{PROGRAM_NAME} {}\n", env!("CARGO_PKG_VERSION"))
}

/// Runs the CLI using the provided argument iterator and output handles.
///
/// The function returns the process exit code that should be used by the
/// caller: `0` on success, otherwise one of the [`ExitCode`] values.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(parsed) => execute(parsed, stdout, stderr).as_i32(),
        Err(error) => {
            let rendered = error.to_string();
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {}", rendered.trim_end());
            ExitCode::Syntax.as_i32()
        }
    }
}

fn execute<Out, Err>(parsed: ParsedArgs, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    Out: Write,
    Err: Write,
{
    let ParsedArgs {
        show_help,
        show_version,
        long,
        verbose,
        directory,
    } = parsed;

    if show_help {
        return write_text(stdout, &render_help());
    }

    if show_version {
        return write_text(stdout, &render_version());
    }

    logging::init_tracing(VerbosityConfig::from_verbose_level(verbose));

    let directory =
        directory.map_or_else(|| PathBuf::from(DEFAULT_DIRECTORY), PathBuf::from);
    let format = if long {
        EntryFormat::Long
    } else {
        EntryFormat::Names
    };
    let lister = DirectoryLister::new(directory).format(format);

    let mut out = BufWriter::new(stdout);
    match lister.list(&mut out) {
        Ok(_) => ExitCode::Ok,
        Err(error) => {
            drop(out);
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            error.exit_code()
        }
    }
}

fn write_text<Out: Write>(stdout: &mut Out, text: &str) -> ExitCode {
    match stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
        Ok(()) => ExitCode::Ok,
        Err(_) => ExitCode::FileIo,
    }
}

/// Converts a numeric status into a process exit code, clamping to `0..=255`.
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}
