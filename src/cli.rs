use crate::author::{Author, parse_author};
use crate::error::{Error, Result};
use crate::{git, identity, manifest, prompt};

use clap::{ArgAction, Parser};
use console::style;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};

/// Set the local git identity from arguments or the project manifest.
///
/// With no arguments the `author` field of the manifest is used, either as
/// a "Name <email>" string or as an object with `name` and `email`.
#[derive(Parser, Debug)]
#[command(name = "git-identity")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Author name and email, e.g. `git-identity "Jane Doe" jane@example.com`
    #[arg(value_name = "NAME EMAIL", num_args = 0..)]
    pub args: Vec<String>,

    /// Repository directory to configure
    #[arg(short = 'C', long, value_name = "DIR", env = "GIT_IDENTITY_DIR")]
    pub dir: Option<PathBuf>,

    /// Manifest file to read the author from, relative to the repository directory
    #[arg(
        long,
        value_name = "FILE",
        env = "GIT_IDENTITY_MANIFEST",
        default_value = manifest::DEFAULT_MANIFEST
    )]
    pub manifest: PathBuf,

    /// Prompt for name and email, pre-filled with the resolved author
    #[arg(short, long)]
    pub interactive: bool,

    /// Print the git command instead of running it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Where the raw author descriptor came from.
#[derive(Debug, PartialEq)]
enum Source {
    Args(Value),
    Manifest(Option<Value>),
}

/// Picks the descriptor source from the positional arguments.
///
/// Zero arguments defer to the manifest; exactly two form a
/// `{name, email}` record; anything else is a usage error.
fn select_source(args: &[String], manifest_path: &Path) -> Result<Source> {
    match args {
        [] => Ok(Source::Manifest(manifest::load_author(manifest_path)?)),
        [name, email] => Ok(Source::Args(json!({ "name": name, "email": email }))),
        _ => Err(Error::Usage),
    }
}

/// Resolves the author from the positional arguments or the manifest.
fn resolve_author(args: &[String], manifest_path: &Path) -> Result<Author> {
    let raw = match select_source(args, manifest_path)? {
        Source::Args(v) => {
            log::info!("using author from arguments");
            Some(v)
        }
        Source::Manifest(v) => {
            log::info!("using author from {}", manifest_path.display());
            v
        }
    };
    parse_author(raw.as_ref()).ok_or(Error::InvalidAuthor)
}

/// Prompts for name and email, re-validating the answers.
///
/// Defaults come from `current` when set, otherwise from the repository's
/// existing `git config` values.
fn prompt_author<P: prompt::StringPrompter>(
    prompter: &mut P,
    current: Option<&Author>,
    root: &Path,
) -> Result<Author> {
    let (default_name, default_email) = match current {
        Some(a) => (a.name().to_string(), a.email().to_string()),
        None => (
            git::config_get("user.name", root).unwrap_or_default(),
            git::config_get("user.email", root).unwrap_or_default(),
        ),
    };

    let repo_name = root
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("current repository");

    let defaults = (default_name.as_str(), default_email.as_str());
    let (name, email) =
        prompt::ask_author(prompter, repo_name, defaults).map_err(Error::Prompt)?;
    Author::new(&name, &email).ok_or(Error::InvalidAuthor)
}

/// Maps `-v` occurrences to a log filter.
fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    let env = env_logger::Env::default().default_filter_or(log_filter(verbose));
    if let Err(e) = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init()
    {
        log::debug!("logger already initialized: {}", e);
    }
}

/// Runs the resolved command line against `runner` and `prompter`.
///
/// Returns the line to print on success.
pub fn run<R, P>(cli: &Cli, runner: &mut R, prompter: &mut P) -> Result<String>
where
    R: git::CommandRunner,
    P: prompt::StringPrompter,
{
    let root = match &cli.dir {
        Some(d) => d.clone(),
        None => std::env::current_dir().map_err(Error::CurrentDir)?,
    };
    let manifest_path = root.join(&cli.manifest);

    let author = if cli.interactive {
        let current = match resolve_author(&cli.args, &manifest_path) {
            Ok(a) => Some(a),
            Err(Error::Usage) => return Err(Error::Usage),
            Err(e) => {
                log::debug!("no author to pre-fill: {}", e);
                None
            }
        };
        prompt_author(prompter, current.as_ref(), &root)?
    } else {
        resolve_author(&cli.args, &manifest_path)?
    };
    log::info!("resolved author {}", author);

    if cli.dry_run {
        return identity::compose_command(&author.fields()).ok_or(Error::NoFields);
    }

    identity::set_identity(&author.fields(), &root, runner)?;
    Ok(String::from("success"))
}

/// Main CLI entry point for `git-identity`.
///
/// Parses arguments, resolves the author, and writes `user.name` and
/// `user.email` into the repository's local git config. Prints `success`
/// (or the composed command under `--dry-run`) on stdout, and the error
/// message on stderr otherwise.
///
/// # Exit Codes
///
/// * `0` – The identity was applied (or printed).
/// * Non-zero – Any failure along the way.
pub fn entry() -> std::result::Result<i32, ()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut runner = git::ShellRunner;
    let mut prompter = prompt::DialoguerStringPrompter;

    let res = if cli.dry_run {
        run(&cli, &mut runner, &mut prompter)
    } else {
        git::ensure_available().and_then(|_| run(&cli, &mut runner, &mut prompter))
    };

    match res {
        Ok(msg) => {
            println!("{}", style(msg).green());
            Ok(0)
        }
        Err(e) => {
            log::debug!("{:?}", e);
            eprintln!("{}", style(e).red().bold());
            Err(())
        }
    }
}
