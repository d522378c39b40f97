//! Bounded evidence commands.
//!
//! The child's stdout is drained on a helper thread while the caller polls for exit, so a
//! child that fills the pipe cannot stall the pass. The helper is never joined: its result
//! arrives over a channel within the same deadline, since a grandchild may still hold the
//! pipe after the child exits.

use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug)]
enum Outcome {
    Completed(Vec<u8>),
    Failed(ExitStatus),
    TimedOut,
}

/// Standard output of `argv` as text.
///
/// Spawn failure, non-zero exit, non-UTF-8 output, and timeout all yield an empty string.
pub fn run_command(argv: &[String], timeout: Duration) -> String {
    match capture_stdout(argv, timeout) {
        Ok(Outcome::Completed(bytes)) => String::from_utf8(bytes).unwrap_or_else(|_| {
            tracing::trace!(command = ?argv, "command output is not UTF-8");
            String::new()
        }),
        Ok(Outcome::Failed(status)) => {
            tracing::trace!(command = ?argv, %status, "command exited unsuccessfully");
            String::new()
        }
        Ok(Outcome::TimedOut) => {
            tracing::trace!(command = ?argv, timeout_ms = timeout.as_millis() as u64, "command timed out");
            String::new()
        }
        Err(err) => {
            tracing::trace!(command = ?argv, error = %err, "command could not be run");
            String::new()
        }
    }
}

fn capture_stdout(argv: &[String], timeout: Duration) -> io::Result<Outcome> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command"))?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let mut stdout = child
        .stdout
        .take()
        .ok_or_else(|| io::Error::other("stdout was not captured"))?;
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = tx.send(stdout.read_to_end(&mut buf).map(|_| buf));
    });

    let deadline = Instant::now() + timeout;
    let status = match child.wait_timeout(timeout) {
        Ok(Some(status)) => status,
        Ok(None) => {
            let _ = child.kill();
            let _ = child.wait();
            return Ok(Outcome::TimedOut);
        }
        Err(err) => {
            let _ = child.kill();
            let _ = child.wait();
            return Err(err);
        }
    };

    let bytes = match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
        Ok(read) => read?,
        Err(mpsc::RecvTimeoutError::Timeout) => return Ok(Outcome::TimedOut),
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            return Err(io::Error::other("stdout reader exited without a result"));
        }
    };

    if status.success() {
        Ok(Outcome::Completed(bytes))
    } else {
        Ok(Outcome::Failed(status))
    }
}

/// Extension trait to add `wait_timeout` to `Child`.
trait ChildExt {
    fn wait_timeout(&mut self, timeout: Duration) -> io::Result<Option<ExitStatus>>;
}

impl ChildExt for Child {
    fn wait_timeout(&mut self, timeout: Duration) -> io::Result<Option<ExitStatus>> {
        let start = Instant::now();
        loop {
            if let Some(status) = self.try_wait()? {
                return Ok(Some(status));
            }
            let elapsed = start.elapsed();
            if elapsed >= timeout {
                return Ok(None);
            }
            thread::sleep(POLL_INTERVAL.min(timeout - elapsed));
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    const TIMEOUT: Duration = Duration::from_secs(10);

    #[test]
    fn captures_stdout() {
        let out = run_command(&argv(&["sh", "-c", "echo 'Status: active'"]), TIMEOUT);
        assert_eq!(out, "Status: active\n");
    }

    #[test]
    fn stderr_is_not_evidence() {
        let out = run_command(&argv(&["sh", "-c", "echo oops >&2"]), TIMEOUT);
        assert_eq!(out, "");
    }

    #[test]
    fn missing_binary_is_empty() {
        let out = run_command(&argv(&["hardscore-no-such-binary-xyz"]), TIMEOUT);
        assert_eq!(out, "");
    }

    #[test]
    fn empty_argv_is_empty() {
        assert_eq!(run_command(&[], TIMEOUT), "");
    }

    #[test]
    fn non_zero_exit_discards_output() {
        let out = run_command(&argv(&["sh", "-c", "echo 'Status: active'; exit 3"]), TIMEOUT);
        assert_eq!(out, "");
    }

    #[test]
    fn timeout_is_empty_and_bounded() {
        let start = Instant::now();
        let out = run_command(&argv(&["sleep", "30"]), Duration::from_millis(200));
        assert_eq!(out, "");
        assert!(start.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn lingering_grandchild_does_not_stall() {
        let start = Instant::now();
        let out = run_command(&argv(&["sh", "-c", "sleep 30 & echo started"]), Duration::from_millis(500));
        assert_eq!(out, "");
        assert!(start.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn large_output_does_not_deadlock() {
        let out = run_command(
            &argv(&["sh", "-c", "i=0; while [ $i -lt 20000 ]; do echo 0123456789; i=$((i+1)); done"]),
            Duration::from_secs(30),
        );
        assert_eq!(out.len(), 20000 * 11);
    }
}
