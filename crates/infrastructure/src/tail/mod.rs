//! Log file tailing
//!
//! `FileTailer` follows a resolver log as it grows and yields complete lines
//! through the `LineSource` port.
//!
//! ## States
//!
//! - **Ensure**: `FileTailer::open` creates the file if missing. The only
//!   fatal step.
//! - **Open**: open for reading, retried every `reopen_interval` forever.
//! - **Seek**: jump to end-of-file; history is never replayed.
//! - **Read**: read up to the next newline; on a miss, wait
//!   `poll_interval` and retry.
//!
//! With `follow_rotation`, a read miss also checks whether the path now
//! names a different file (reattach from its start) or the same file
//! shrank (rewind to offset 0).

pub mod file_tailer;
mod identity;

pub use file_tailer::FileTailer;
