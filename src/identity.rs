use crate::error::{Error, Result};
use crate::git::{CommandRunner, config_set_command};
use std::path::Path;

/// Composes the chained `git config` command for `fields`.
///
/// Each `(field, value)` pair becomes `git config 'user.<field>' '<value>'`, in
/// the order given, joined with `&&` so the chain stops at the first
/// failure. Returns `None` for an empty list.
pub fn compose_command<K, V>(fields: &[(K, V)]) -> Option<String>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if fields.is_empty() {
        return None;
    }
    let parts: Vec<String> = fields
        .iter()
        .map(|(k, v)| config_set_command(k.as_ref(), v.as_ref()))
        .collect();
    Some(parts.join(" && "))
}

/// Writes `fields` into the local git config of `cwd`.
///
/// All updates are issued through a single invocation of `runner`. Fields
/// before a failing one may already have been written; that state is left
/// as is.
///
/// # Errors
///
/// * [`Error::NoFields`] if `fields` is empty; `runner` is never called.
/// * Whatever `runner` returns, unchanged.
///
/// # Examples
///
/// ```ignore
/// // Ignored because it requires a Git repository.
/// use git_identity::{author::parse_author_str, git::ShellRunner, identity::set_identity};
///
/// let author = parse_author_str("Jane Doe <jane@example.com>").unwrap();
/// set_identity(&author.fields(), Path::new("."), &mut ShellRunner)?;
/// ```
pub fn set_identity<K, V, R>(fields: &[(K, V)], cwd: &Path, runner: &mut R) -> Result<()>
where
    K: AsRef<str>,
    V: AsRef<str>,
    R: CommandRunner + ?Sized,
{
    let command = compose_command(fields).ok_or(Error::NoFields)?;
    log::debug!("running `{}` in {}", command, cwd.display());
    runner.run(&command, cwd)
}
