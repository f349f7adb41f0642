use crate::error::{Error, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Executes a composed shell command inside a working directory.
///
/// This is the only side-effecting seam of the identity applier. The
/// production implementation is [`ShellRunner`]; tests substitute a
/// recording mock.
pub trait CommandRunner {
    /// Run `command` with `cwd` as the working directory.
    ///
    /// # Returns
    /// `Ok(())` if the command exited successfully, otherwise the
    /// underlying failure (spawn error or non-zero exit with stderr).
    fn run(&mut self, command: &str, cwd: &Path) -> Result<()>;
}

/// Runs commands through `sh -c`, capturing stderr for error reports.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &str, cwd: &Path) -> Result<()> {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command).current_dir(cwd);
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::piped());
        run_status(cmd, command)
    }
}

/// Runs a command and maps a non-zero exit to [`Error::CommandFailed`].
///
/// `label` is the human-readable form of the command used in the error.
fn run_status(mut cmd: Command, label: &str) -> Result<()> {
    let out = cmd.output().map_err(|e| Error::Spawn {
        command: label.to_string(),
        source: e,
    })?;

    if out.status.success() {
        Ok(())
    } else {
        Err(Error::CommandFailed {
            command: label.to_string(),
            status: out.status.to_string(),
            stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
        })
    }
}

/// Runs a command and returns its trimmed standard output on success,
/// or its trimmed standard error on failure.
fn run_output(mut cmd: Command) -> std::result::Result<String, String> {
    match cmd.output() {
        Ok(out) => {
            if out.status.success() {
                Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
            } else {
                Err(String::from_utf8_lossy(&out.stderr).trim().to_string())
            }
        }
        Err(e) => Err(e.to_string()),
    }
}

/// Runs `git config --get <key>` in `cwd` and returns the value.
///
/// A missing key, or any failure to run git, yields `None`.
///
/// # Examples
///
/// ```ignore
/// // Ignored because it requires a Git repository.
/// use git_identity::git::config_get;
///
/// if let Some(name) = config_get("user.name", Path::new(".")) {
///     println!("current user.name: {}", name);
/// }
/// ```
pub fn config_get(key: &str, cwd: &Path) -> Option<String> {
    let mut cmd = Command::new("git");
    cmd.arg("config").arg("--get").arg(key).current_dir(cwd);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    match run_output(cmd) {
        Ok(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}

/// Ensures a `git` executable can be found on `PATH`.
pub fn ensure_available() -> Result<()> {
    match which::which("git") {
        Ok(path) => {
            log::debug!("using git at {}", path.display());
            Ok(())
        }
        Err(_) => Err(Error::GitNotFound),
    }
}

/// Builds the command that sets `user.<field>` to `value` in the local config.
///
/// Both the key and the value are single-quoted for the shell, so field
/// names and values containing spaces or shell metacharacters reach git
/// verbatim.
///
/// # Examples
///
/// ```
/// use git_identity::git::config_set_command;
///
/// assert_eq!(
///     config_set_command("name", "Jane Doe"),
///     "git config 'user.name' 'Jane Doe'"
/// );
/// ```
pub fn config_set_command(field: &str, value: &str) -> String {
    let key = format!("user.{}", field);
    format!("git config {} {}", shell_quote(&key), shell_quote(value))
}

/// Wraps `s` in single quotes, escaping embedded single quotes as `'\''`.
pub(crate) fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}
