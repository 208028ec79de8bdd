//! Stub compilers for process tests.
//!
//! Stubs are POSIX shell scripts written into a caller-owned temp dir.
//! Tests that write and then execute a stub must be `#[serial]`: a fork in
//! another test thread while the script is still open for writing makes the
//! exec fail with ETXTBSY.

use std::fs::{self, File};
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Write an executable `sh` script named `name` with the given body.
pub(crate) fn stub_compiler(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);

    let mut file = File::create(&path)
        .unwrap_or_else(|e| panic!("failed to create stub {}: {}", path.display(), e));
    writeln!(file, "#!/bin/sh\n{}", body).unwrap();
    file.sync_all().unwrap();
    drop(file);

    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .unwrap_or_else(|e| panic!("failed to chmod stub {}: {}", path.display(), e));

    path
}

/// A stub that prints each argument it receives on its own line.
pub(crate) fn args_echo_stub(dir: &Path) -> PathBuf {
    stub_compiler(dir, "echo-args", "for arg in \"$@\"; do\n  printf '%s\\n' \"$arg\"\ndone")
}
