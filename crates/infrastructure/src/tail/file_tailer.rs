use super::identity::FileIdentity;
use async_trait::async_trait;
use futures::stream::{self, Stream};
use querytail_application::ports::LineSource;
use querytail_domain::config::TailConfig;
use querytail_domain::DomainError;
use std::io::{ErrorKind, SeekFrom};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncBufReadExt, AsyncSeekExt, BufReader};
use tracing::{debug, info};

/// Follows a growing log file and yields each newly appended line.
///
/// Only content written after [`attach`](Self::attach) is delivered. A line
/// is emitted once its newline has been written; bytes of an unterminated
/// line are held back and completed on a later read, so a writer flushing
/// half a line never splits or loses it. Open and read failures are retried
/// with fixed delays and never reported to the caller.
///
/// ## Example
///
/// ```rust,no_run
/// use querytail_domain::config::TailConfig;
/// use querytail_infrastructure::tail::FileTailer;
///
/// # async fn demo() -> Result<(), querytail_domain::DomainError> {
/// let mut tailer = FileTailer::open(&TailConfig::default()).await?;
/// loop {
///     let line = tailer.next_line().await;
///     println!("{line}");
/// }
/// # }
/// ```
pub struct FileTailer {
    path: PathBuf,
    poll_interval: Duration,
    reopen_interval: Duration,
    follow_rotation: bool,
    log: Option<AttachedLog>,
    /// Bytes read past the last complete line.
    pending: Vec<u8>,
}

struct AttachedLog {
    reader: BufReader<File>,
    position: u64,
    identity: Option<FileIdentity>,
}

impl FileTailer {
    /// Makes sure the log file exists, creating it empty if needed.
    ///
    /// An existing file only needs to be readable. The handle is closed
    /// straight away; reading starts on [`attach`](Self::attach) or the
    /// first [`next_line`](Self::next_line).
    pub async fn open(config: &TailConfig) -> Result<Self, DomainError> {
        let path = config.log_path.clone();

        ensure_exists(&path)
            .await
            .map_err(|e| DomainError::LogFileUnavailable {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        info!(path = %path.display(), "Log file ready for tailing");

        Ok(Self {
            path,
            poll_interval: config.poll_interval(),
            reopen_interval: config.reopen_interval(),
            follow_rotation: config.follow_rotation,
            log: None,
            pending: Vec::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_attached(&self) -> bool {
        self.log.is_some()
    }

    /// Opens the file for reading and seeks to its end. Retries every
    /// `reopen_interval` until the open succeeds. No-op once attached.
    pub async fn attach(&mut self) {
        if self.log.is_none() {
            self.log = Some(self.open_at(SeekFrom::End(0)).await);
        }
    }

    /// Waits for the next complete line and returns it without its line
    /// terminator. Invalid UTF-8 is replaced, not rejected.
    pub async fn next_line(&mut self) -> String {
        loop {
            self.attach().await;
            let Some(log) = self.log.as_mut() else {
                continue;
            };

            match log.reader.read_until(b'\n', &mut self.pending).await {
                Ok(0) => {
                    if !self.reattach_if_rotated().await {
                        tokio::time::sleep(self.poll_interval).await;
                    }
                }
                Ok(n) => {
                    log.position += n as u64;
                    if self.pending.last() == Some(&b'\n') {
                        return self.take_line();
                    }
                }
                Err(e) => {
                    debug!(path = %self.path.display(), error = %e, "Read failed, retrying");
                    tokio::time::sleep(self.poll_interval).await;
                }
            }
        }
    }

    /// Consumes the tailer into an endless stream of lines.
    pub fn into_stream(self) -> impl Stream<Item = String> + Send {
        stream::unfold(self, |mut tailer| async move {
            let line = tailer.next_line().await;
            Some((line, tailer))
        })
    }

    async fn open_at(&self, from: SeekFrom) -> AttachedLog {
        loop {
            match self.try_open_at(from).await {
                Ok(log) => {
                    debug!(path = %self.path.display(), position = log.position, "Attached to log file");
                    return log;
                }
                Err(e) => {
                    debug!(path = %self.path.display(), error = %e, "Open failed, retrying");
                    tokio::time::sleep(self.reopen_interval).await;
                }
            }
        }
    }

    async fn try_open_at(&self, from: SeekFrom) -> std::io::Result<AttachedLog> {
        let mut file = File::open(&self.path).await?;
        let position = file.seek(from).await?;
        let identity = FileIdentity::of(&file.metadata().await?);
        Ok(AttachedLog {
            reader: BufReader::new(file),
            position,
            identity,
        })
    }

    /// Called when the current handle is exhausted. Returns true when the
    /// tailer moved to a new file or rewound, so the caller reads again
    /// without waiting.
    ///
    /// The old handle is abandoned on its first empty read after a rename,
    /// so lines a writer still appends to the renamed file are not seen.
    async fn reattach_if_rotated(&mut self) -> bool {
        if !self.follow_rotation {
            return false;
        }
        let Some(log) = self.log.as_mut() else {
            return false;
        };

        // A missing path keeps the old handle until something reappears.
        let Ok(meta) = tokio::fs::metadata(&self.path).await else {
            return false;
        };

        let current = FileIdentity::of(&meta);
        if current.is_some() && current != log.identity {
            info!(path = %self.path.display(), "Log file replaced, reattaching from start");
            self.discard_pending();
            self.log = Some(self.open_at(SeekFrom::Start(0)).await);
            return true;
        }

        if meta.len() < log.position {
            info!(
                path = %self.path.display(),
                size = meta.len(),
                position = log.position,
                "Log file truncated, rewinding"
            );
            match log.reader.seek(SeekFrom::Start(0)).await {
                Ok(_) => {
                    log.position = 0;
                    self.discard_pending();
                    return true;
                }
                Err(e) => {
                    debug!(path = %self.path.display(), error = %e, "Rewind failed");
                }
            }
        }

        false
    }

    fn discard_pending(&mut self) {
        if !self.pending.is_empty() {
            debug!(bytes = self.pending.len(), "Discarding unterminated line");
            self.pending.clear();
        }
    }

    fn take_line(&mut self) -> String {
        let mut bytes = std::mem::take(&mut self.pending);
        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }
        match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }
}

async fn ensure_exists(path: &Path) -> std::io::Result<()> {
    match File::open(path).await {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "Log file missing, creating it");
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .await
                .map(drop)
        }
        Err(e) => Err(e),
    }
}

#[async_trait]
impl LineSource for FileTailer {
    async fn next_line(&mut self) -> String {
        FileTailer::next_line(self).await
    }
}

impl std::fmt::Debug for FileTailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileTailer")
            .field("path", &self.path)
            .field("attached", &self.is_attached())
            .field("pending_bytes", &self.pending.len())
            .finish()
    }
}
