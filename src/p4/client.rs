/// The `p4` client handle and subprocess plumbing.
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Output, Stdio};

use super::errors::P4Error;
use super::locate::locate_on_path;

/// A resolved `p4` binary plus the global options every invocation carries.
///
/// Built once at startup and passed by reference into each operation.
#[derive(Debug, Clone)]
pub struct P4Client {
    program: PathBuf,
    user: Option<String>,
}

/// Captured result of an invocation whose exit status is not trusted.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub status: ExitStatus,
    /// Standard output followed by standard error, lossily decoded.
    pub text: String,
}

impl P4Client {
    /// Construct a client for an already-resolved binary path.
    ///
    /// An empty `user` is treated the same as no user.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>, user: Option<String>) -> Self {
        Self {
            program: program.into(),
            user: user.filter(|u| !u.is_empty()),
        }
    }

    /// Resolve `program` on `PATH` and construct a client for it.
    ///
    /// # Errors
    ///
    /// Returns `Err(P4Error::NotFound)` if the binary cannot be located.
    pub fn discover(program: &str, user: Option<String>) -> Result<Self, P4Error> {
        let path = locate_on_path(program)?;
        tracing::debug!(program = %path.display(), "located p4 client");
        Ok(Self::new(path, user))
    }

    /// Full argument vector, global options first.
    fn argv<'a>(&'a self, args: &[&'a OsStr]) -> Vec<&'a OsStr> {
        let mut full: Vec<&OsStr> = Vec::with_capacity(args.len() + 2);
        if let Some(user) = &self.user {
            full.push(OsStr::new("-u"));
            full.push(OsStr::new(user.as_str()));
        }
        full.extend_from_slice(args);
        full
    }

    /// Render the command line for diagnostics.
    #[must_use]
    pub fn render(&self, args: &[&OsStr]) -> String {
        let mut s = self.program.display().to_string();
        for arg in self.argv(args) {
            s.push(' ');
            s.push_str(&arg.to_string_lossy());
        }
        s
    }

    fn spawn_output(&self, args: &[&OsStr]) -> Result<Output, P4Error> {
        let command = self.render(args);
        tracing::debug!(%command, "running p4");
        Command::new(&self.program)
            .args(self.argv(args))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| P4Error::Spawn { command, source })
    }

    /// Run and return standard output only; a non-zero exit is an error.
    ///
    /// Standard error is captured separately and used only for the error
    /// message, so it never reaches the parsed text.
    ///
    /// # Errors
    ///
    /// Returns `Err(P4Error::Spawn)` if the process cannot start and
    /// `Err(P4Error::ExitStatus)` if it exits unsuccessfully.
    pub fn run_stdout(&self, args: &[&OsStr]) -> Result<String, P4Error> {
        let output = self.spawn_output(args)?;
        if !output.status.success() {
            return Err(P4Error::ExitStatus {
                command: self.render(args),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run and capture both output streams without judging the exit status.
    ///
    /// # Errors
    ///
    /// Returns `Err(P4Error::Spawn)` only if the process cannot start.
    pub fn run_combined(&self, args: &[&OsStr]) -> Result<ToolOutput, P4Error> {
        let output = self.spawn_output(args)?;
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(ToolOutput {
            status: output.status,
            text,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::path::Path;

    /// Write an executable `/bin/sh` script standing in for `p4`.
    #[cfg(unix)]
    pub(crate) fn fake_p4(dir: &Path, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join("p4");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn os(args: &[&'static str]) -> Vec<&'static OsStr> {
        args.iter().copied().map(OsStr::new).collect()
    }

    #[test]
    fn test_render_without_user() {
        let client = P4Client::new("/usr/bin/p4", None);
        assert_eq!(
            client.render(&os(&["files", "//a/b.txt"])),
            "/usr/bin/p4 files //a/b.txt"
        );
    }

    #[test]
    fn test_render_with_user() {
        let client = P4Client::new("p4", Some("alice".to_owned()));
        assert_eq!(
            client.render(&os(&["files", "//a/b.txt"])),
            "p4 -u alice files //a/b.txt"
        );
    }

    #[test]
    fn test_empty_user_is_dropped() {
        let client = P4Client::new("p4", Some(String::new()));
        assert_eq!(client.render(&os(&["info"])), "p4 info");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_stdout_ignores_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let tool = fake_p4(dir.path(), "echo out; echo noise >&2");
        let client = P4Client::new(tool, None);
        assert_eq!(client.run_stdout(&[]).unwrap(), "out\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_stdout_nonzero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let tool = fake_p4(dir.path(), "echo 'no such file' >&2; exit 1");
        let client = P4Client::new(tool, None);
        let err = client.run_stdout(&os(&["files", "//x"])).unwrap_err();
        match err {
            P4Error::ExitStatus { stderr, status, .. } => {
                assert_eq!(status.code(), Some(1));
                assert_eq!(stderr, "no such file\n");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_run_combined_keeps_failure_output() {
        let dir = tempfile::tempdir().unwrap();
        let tool = fake_p4(dir.path(), "echo a; echo b >&2; exit 3");
        let client = P4Client::new(tool, None);
        let out = client.run_combined(&[]).unwrap();
        assert_eq!(out.status.code(), Some(3));
        assert_eq!(out.text, "a\nb\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_user_flag_passed_first() {
        let dir = tempfile::tempdir().unwrap();
        let tool = fake_p4(dir.path(), r#"echo "$@""#);
        let client = P4Client::new(tool, Some("bob".to_owned()));
        assert_eq!(
            client.run_stdout(&os(&["files", "//d/f"])).unwrap(),
            "-u bob files //d/f\n"
        );
    }

    #[test]
    fn test_spawn_failure() {
        let client = P4Client::new("/nonexistent/bin/p4", None);
        let result = client.run_combined(&[]);
        assert!(matches!(result, Err(P4Error::Spawn { .. })));
    }
}
