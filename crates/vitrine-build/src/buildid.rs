//! Build identifier resolution.
//!
//! Produces the short revision token embedded into the built site, for
//! display and debugging ("build abc1234"). CI-provided environment
//! variables are preferred so hosted builds never spawn git (checkouts
//! there may be shallow or absent); a local `git rev-parse` is the
//! fallback, and every failure path degrades to [`UNKNOWN_BUILD_ID`].

use std::collections::HashMap;
use std::process::{Command, ExitStatus, Stdio};

/// Sentinel used when no revision identifier can be determined.
pub const UNKNOWN_BUILD_ID: &str = "unknown";

/// CI-provided revision variables, checked in this priority order.
pub const REVISION_ENV_VARS: [&str; 3] = [
    "GITHUB_SHA",
    "VERCEL_GIT_COMMIT_SHA",
    "CF_PAGES_COMMIT_SHA",
];

/// Length of an abbreviated revision hash.
const SHORT_HASH_LEN: usize = 7;

/// Read-only snapshot of the process environment, taken once.
///
/// Passed explicitly into the resolver so tests can inject fixtures
/// instead of mutating real environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Snapshot the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Errors that can occur when running an external command.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    Failed { program: String, status: ExitStatus },

    #[error("{program} produced non-UTF-8 output")]
    NonUtf8 { program: String },
}

/// Capability to run an external command and capture its stdout.
///
/// Injectable so tests can substitute a fake responder without spawning
/// a real binary.
pub trait CommandRunner {
    /// Run `program` with `args` as a literal argument vector and return
    /// its stdout, trimmed of surrounding whitespace.
    fn run(&self, program: &str, args: &[&str]) -> Result<String, RunnerError>;
}

/// Runs commands through `std::process::Command`.
///
/// Arguments are passed as a vector, never through a shell, so paths
/// containing metacharacters cannot alter the command executed. Stdin
/// and stderr are discarded; only stdout is captured.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, RunnerError> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| RunnerError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(RunnerError::Failed {
                program: program.to_string(),
                status: output.status,
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(|_| RunnerError::NonUtf8 {
            program: program.to_string(),
        })?;

        Ok(stdout.trim().to_string())
    }
}

/// Resolves the short build identifier.
pub struct BuildIdResolver<R = SystemRunner> {
    env: EnvSnapshot,
    runner: R,
}

impl BuildIdResolver<SystemRunner> {
    /// Resolver over the real process environment and a real git.
    pub fn from_process() -> Self {
        Self::new(EnvSnapshot::from_process(), SystemRunner)
    }
}

impl<R: CommandRunner> BuildIdResolver<R> {
    pub fn new(env: EnvSnapshot, runner: R) -> Self {
        Self { env, runner }
    }

    /// Resolve the build identifier.
    ///
    /// Priority: the first CI revision variable holding at least 7
    /// characters (truncated to 7), then `git rev-parse --short HEAD`,
    /// then [`UNKNOWN_BUILD_ID`]. Never fails and never aborts a build;
    /// the git-failure path only emits a warning.
    pub fn resolve(&self) -> String {
        for var in REVISION_ENV_VARS {
            if let Some(sha) = self.env.get(var) {
                if sha.chars().count() >= SHORT_HASH_LEN {
                    return sha.chars().take(SHORT_HASH_LEN).collect();
                }
            }
        }

        match self.runner.run("git", &["rev-parse", "--short", "HEAD"]) {
            Ok(hash) if !hash.is_empty() => hash,
            Ok(_) => {
                tracing::warn!("git returned an empty revision; using {UNKNOWN_BUILD_ID:?}");
                UNKNOWN_BUILD_ID.to_string()
            }
            Err(err) => {
                tracing::warn!("could not resolve git revision: {err}");
                UNKNOWN_BUILD_ID.to_string()
            }
        }
    }
}
