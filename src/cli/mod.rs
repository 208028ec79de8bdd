//! CLI argument parsing for ast-merge.
//!
//! Uses clap derive macros. The interface is purely positional so the
//! wrapper can be dropped in where a build system expects a linker.
//! Everything after the third positional goes to the compiler verbatim,
//! including tokens like `--help` or `--`.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Program name plus the three fixed positionals.
const LEADING_ARGS: usize = 4;

/// Merge precompiled clang ASTs into a single PCH.
///
/// Runs `<COMPILER> -cc1 -emit-pch -o <TARGET> -ast-merge <LIB>...`,
/// streams the compiler's combined stdout/stderr to stdout and exits with
/// the compiler's exit code.
#[derive(Parser, Debug)]
#[command(name = "ast-merge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Compiler executable to invoke (e.g. clang).
    pub compiler: PathBuf,

    /// Output path for the merged AST.
    pub target: PathBuf,

    /// Source path supplied by the build system. Accepted and ignored.
    pub placeholder: PathBuf,

    /// AST files to merge, in order. Passed through without option parsing.
    pub libraries: Vec<PathBuf>,
}

impl Cli {
    /// Parse command line arguments, exiting with clap's usage error on
    /// failure.
    pub fn parse_args() -> Self {
        Self::try_parse_split(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse `args` with clap seeing only the leading positionals.
    ///
    /// The library tail is split off first so clap never interprets it.
    pub fn try_parse_split<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let tail = if args.len() > LEADING_ARGS {
            args.split_off(LEADING_ARGS)
        } else {
            Vec::new()
        };

        let mut cli = Self::try_parse_from(args)?;
        cli.libraries.extend(tail.into_iter().map(PathBuf::from));
        Ok(cli)
    }
}
