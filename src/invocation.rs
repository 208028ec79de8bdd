//! Compiler command line for the AST merge step.
//!
//! Builds `<compiler> -cc1 -emit-pch -o <target> -ast-merge <lib>...`.
//! Paths are not checked for existence; the compiler reports missing inputs.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Selects the compiler front end instead of the driver.
const FRONTEND_FLAG: &str = "-cc1";

/// Emits a precompiled header as the output artifact.
const EMIT_PCH_FLAG: &str = "-emit-pch";

const OUTPUT_FLAG: &str = "-o";

/// Precedes each AST file to merge.
const AST_MERGE_FLAG: &str = "-ast-merge";

/// A single AST-merge invocation of the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeInvocation {
    compiler: PathBuf,
    target: PathBuf,
    placeholder: PathBuf,
    libraries: Vec<PathBuf>,
}

impl MergeInvocation {
    /// Create an invocation. `placeholder` is kept so callers that pass a
    /// source file in that slot keep working, but it never reaches the
    /// compiler.
    pub fn new(
        compiler: impl Into<PathBuf>,
        target: impl Into<PathBuf>,
        placeholder: impl Into<PathBuf>,
        libraries: impl IntoIterator<Item = impl Into<PathBuf>>,
    ) -> Self {
        Self {
            compiler: compiler.into(),
            target: target.into(),
            placeholder: placeholder.into(),
            libraries: libraries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn compiler(&self) -> &Path {
        &self.compiler
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// The accepted-but-ignored source path.
    pub fn placeholder(&self) -> &Path {
        &self.placeholder
    }

    pub fn libraries(&self) -> &[PathBuf] {
        &self.libraries
    }

    /// Arguments passed to the compiler, without the program itself.
    pub fn compiler_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(4 + 2 * self.libraries.len());
        args.push(FRONTEND_FLAG.into());
        args.push(EMIT_PCH_FLAG.into());
        args.push(OUTPUT_FLAG.into());
        args.push(self.target.clone().into_os_string());

        for lib in &self.libraries {
            args.push(AST_MERGE_FLAG.into());
            args.push(lib.clone().into_os_string());
        }

        args
    }

    /// Full token list with the compiler path as element 0.
    pub fn argv(&self) -> Vec<OsString> {
        let mut argv = vec![self.compiler.clone().into_os_string()];
        argv.extend(self.compiler_args());
        argv
    }

    /// A `Command` with program and arguments set. Stdio is left to the
    /// caller.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.compiler);
        command.args(self.compiler_args());
        command
    }

    /// Shell-quoted command line for diagnostics. Non-UTF-8 bytes are
    /// replaced, so the result is not guaranteed to be re-executable.
    pub fn display_command(&self) -> String {
        let argv = self.argv();
        shell_words::join(argv.iter().map(|arg| arg.to_string_lossy()))
    }
}
