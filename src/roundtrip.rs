//! File round trip using raw syscall wrappers
//!
//! Linear create → write → close, open → read → close, print, unlink
//! sequence. Every descriptor is a scoped `OwnedFd` dropped right after
//! its leg, so close(2) runs on both success and error paths.

use std::os::fd::OwnedFd;

use nix::errno::Errno;
use nix::fcntl::{open, OFlag};
use nix::sys::stat::Mode;
use nix::unistd::{read, unlink, write};
use thiserror::Error;

/// Default target file, created in the working directory.
pub const DEFAULT_FILE: &str = "student_info.txt";

/// Upper bound on bytes pulled back by the single read call.
const READ_CAP: usize = 1024;

/// Single failure kind covering every leg (create, write, read, unlink).
/// Callers do not distinguish which phase failed.
#[derive(Error, Debug)]
pub enum RoundTripError {
    #[error("I/O failure: {0}")]
    Io(#[from] Errno),
}

/// Create (or truncate) `path` with mode 0644 and write `payload` to it.
pub fn write_record(path: &str, payload: &str) -> Result<(), RoundTripError> {
    let fd: OwnedFd = open(
        path,
        OFlag::O_CREAT | OFlag::O_WRONLY | OFlag::O_TRUNC,
        Mode::from_bits_truncate(0o644),
    )?;
    let written = write(&fd, payload.as_bytes())?;
    tracing::debug!(path, written, "write leg complete");
    drop(fd); // close(2)
    Ok(())
}

/// Reopen `path` read-only and read up to `READ_CAP` bytes in one call.
pub fn read_back(path: &str) -> Result<String, RoundTripError> {
    let fd: OwnedFd = open(path, OFlag::O_RDONLY, Mode::empty())?;
    let mut buf = [0u8; READ_CAP];
    let n = read(&fd, &mut buf)?;
    tracing::debug!(path, bytes = n, "read leg complete");
    drop(fd); // close(2)
    Ok(String::from_utf8_lossy(&buf[..n]).into_owned())
}

/// Unlink `path`.
pub fn remove(path: &str) -> Result<(), RoundTripError> {
    unlink(path)?;
    tracing::debug!(path, "unlink complete");
    Ok(())
}

/// Run the full round trip against `path` and print the results.
///
/// The flow is linear: the first failing leg aborts the rest, so a failed
/// unlink after a successful read leaves the file on disk.
pub fn run(path: &str, payload: &str) -> Result<(), RoundTripError> {
    write_record(path, payload)?;
    println!("File created and data written successfully.");

    let contents = read_back(path)?;
    println!("\nFile contents:");
    println!("{contents}");

    remove(path)?;
    println!("File '{path}' deleted successfully.");

    Ok(())
}
