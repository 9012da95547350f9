//! Fdtrip - file I/O round trip built on raw syscall wrappers
//!
//! Writes a fixed student record to a file with open/write, reads it back
//! with open/read, prints the decoded contents, and unlinks the file. Each
//! descriptor is held as a scoped `OwnedFd`, so the close happens on both
//! success and error paths.

pub mod cli;
pub mod record;
pub mod roundtrip;
