//! Duplex connection to a spawned analyzer process.
//!
//! The connection owns the child and its captured stdin/stdout handles.
//! Protocol framing over the pair is the host's protocol engine's job.

use std::path::Path;
use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};

/// A live duplex connection: the analyzer's stdout is the read side, its
/// stdin the write side.
///
/// Dropping the connection is the host's teardown lever — the child is
/// spawned with kill-on-drop, so no process outlives the handle the host
/// was given. The manager keeps no reference of its own after activation.
pub struct Connection {
    child: Child,
    reader: ChildStdout,
    writer: ChildStdin,
}

impl Connection {
    /// Spawn the analyzer at `path` with captured standard streams.
    ///
    /// stdin and stdout are piped (never inherited from the parent's
    /// console), stderr is discarded, and no shell is involved.
    pub(crate) fn spawn(path: &Path) -> Result<Self> {
        let mut child = Command::new(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("spawning {}", path.display()))?;

        let reader = child.stdout.take().context("no stdout from analyzer")?;
        let writer = child.stdin.take().context("no stdin from analyzer")?;

        Ok(Self {
            child,
            reader,
            writer,
        })
    }

    /// OS process id of the analyzer, if it is still running.
    #[must_use]
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Read side (the analyzer's stdout).
    #[must_use]
    pub fn reader(&mut self) -> &mut ChildStdout {
        &mut self.reader
    }

    /// Write side (the analyzer's stdin).
    #[must_use]
    pub fn writer(&mut self) -> &mut ChildStdin {
        &mut self.writer
    }

    /// Both sides at once, for callers that read and write concurrently.
    #[must_use]
    pub fn pair(&mut self) -> (&mut ChildStdout, &mut ChildStdin) {
        (&mut self.reader, &mut self.writer)
    }

    /// Tear the connection down: kill the analyzer and reap it.
    ///
    /// Closing the streams and killing the process is the only shutdown
    /// this component owns; protocol-level goodbyes happen on the host's
    /// side before it calls this.
    pub async fn shutdown(mut self) {
        if let Err(e) = self.child.kill().await {
            tracing::debug!("analyzer already gone at shutdown: {e}");
        }
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("pid", &self.child.id())
            .finish_non_exhaustive()
    }
}
