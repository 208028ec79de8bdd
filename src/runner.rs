//! Compiler process runner.
//!
//! Spawns the merge invocation with stdout and stderr sharing one pipe,
//! forwards that pipe to the wrapper's stdout line by line, then waits for
//! the compiler to exit.

use crate::error::{MergeError, Result};
use crate::invocation::MergeInvocation;
use std::io::{self, BufRead, BufReader, Write};
use std::process::ExitStatus;
use tracing::debug;

/// Run the compiler and forward its merged output to `out`.
///
/// Blocks until the compiler exits; there is no timeout. The returned
/// status is the compiler's, whatever it is. Only failures of the wrapper
/// itself are errors.
pub fn run<W: Write>(invocation: &MergeInvocation, out: &mut W) -> Result<ExitStatus> {
    debug!(
        command = %invocation.display_command(),
        target = %invocation.target().display(),
        libraries = invocation.libraries().len(),
        placeholder = %invocation.placeholder().display(),
        "running ast merge"
    );

    let (reader, writer) = io::pipe().map_err(MergeError::Pipe)?;
    let stderr_writer = writer.try_clone().map_err(MergeError::Pipe)?;

    let mut command = invocation.to_command();
    command.stdout(writer).stderr(stderr_writer);

    let mut child = command.spawn().map_err(|e| MergeError::Launch {
        program: invocation.compiler().display().to_string(),
        source: e,
    })?;
    // The command still owns our copies of the write end; EOF only arrives
    // once they are gone.
    drop(command);
    debug!(pid = child.id(), "compiler started");

    let relayed = relay_lines(BufReader::new(reader), out);

    // Reap the child even when forwarding failed.
    let status = child.wait().map_err(MergeError::Wait)?;

    let lines = relayed.map_err(MergeError::Relay)?;
    // A failing compiler is the caller's business; stay quiet by default.
    debug!(lines, %status, success = status.success(), "compiler exited");

    Ok(status)
}

/// Copy `reader` to `out` one line at a time, flushing after each line.
///
/// Lines are raw bytes including their terminator; a trailing line without
/// a newline is forwarded as-is. Returns the number of lines forwarded.
pub fn relay_lines<R: BufRead, W: Write>(mut reader: R, out: &mut W) -> io::Result<usize> {
    let mut line = Vec::new();
    let mut count = 0;

    loop {
        line.clear();
        let read = match reader.read_until(b'\n', &mut line) {
            Ok(read) => read,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if read == 0 {
            break;
        }

        out.write_all(&line)?;
        out.flush()?;
        count += 1;
    }

    Ok(count)
}
