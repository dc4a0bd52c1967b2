use std::{
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use anyhow::Context as _;

use crate::{
    foundation::error::{ContribError, ContribResult},
    schedule::builder::{Schedule, ScheduleEntry},
};

/// Consumer of schedule entries.
///
/// `record` is called once per entry in schedule order; `publish` once at the end.
pub trait RecordSink {
    /// Produce one record whose authored-at and recorded-at times are `entry.timestamp`.
    fn record(&mut self, entry: &ScheduleEntry) -> ContribResult<()>;

    /// Make every recorded entry visible externally.
    fn publish(&mut self) -> ContribResult<()>;
}

pub fn is_git_on_path() -> bool {
    Command::new("git")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Emits empty commits into a local repository and pushes them.
#[derive(Debug)]
pub struct GitSink {
    repo_dir: PathBuf,
    remote: String,
    branch: Option<String>,
    committed: usize,
}

impl GitSink {
    /// Check that `repo_dir` is inside a work tree and, if `branch` is set, check it out
    /// with `git checkout -B`.
    pub fn open(
        repo_dir: impl Into<PathBuf>,
        remote: impl Into<String>,
        branch: Option<String>,
    ) -> ContribResult<Self> {
        if !is_git_on_path() {
            return Err(ContribError::dependency_unavailable(
                "git is required to emit commits, but was not found on PATH",
            ));
        }

        let sink = Self {
            repo_dir: repo_dir.into(),
            remote: remote.into(),
            branch,
            committed: 0,
        };

        let detail = match sink.git(["rev-parse", "--is-inside-work-tree"], &[]) {
            Ok(out) if out.trim() == "true" => None,
            Ok(out) => Some(format!("rev-parse answered '{}'", out.trim())),
            Err(e) => Some(e.to_string()),
        };
        if let Some(detail) = detail {
            return Err(ContribError::consumer(format!(
                "'{}' is not inside a git work tree; initialize one and add a remote first ({detail})",
                sink.repo_dir.display()
            )));
        }

        if let Some(branch) = &sink.branch {
            sink.git(["checkout", "-B", branch.as_str()], &[])?;
        }

        Ok(sink)
    }

    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Ref pushed by [`RecordSink::publish`]: the branch if one was given, else `HEAD`.
    pub fn push_ref(&self) -> &str {
        self.branch.as_deref().unwrap_or("HEAD")
    }

    /// Commits created so far through this sink.
    pub fn committed(&self) -> usize {
        self.committed
    }

    fn git<'a>(
        &self,
        args: impl IntoIterator<Item = &'a str>,
        envs: &[(&str, &str)],
    ) -> ContribResult<String> {
        let args: Vec<&str> = args.into_iter().collect();
        let mut cmd = Command::new("git");
        cmd.current_dir(&self.repo_dir)
            .args(&args)
            .stdin(Stdio::null());
        for (k, v) in envs {
            cmd.env(k, v);
        }

        let out = cmd
            .output()
            .with_context(|| format!("spawn git {}", args.join(" ")))?;
        let mut text = String::from_utf8_lossy(&out.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&out.stderr));

        if !out.status.success() {
            return Err(ContribError::consumer(format!(
                "git {} failed ({}): {}",
                args.join(" "),
                out.status,
                text.trim()
            )));
        }
        Ok(text)
    }
}

impl RecordSink for GitSink {
    fn record(&mut self, entry: &ScheduleEntry) -> ContribResult<()> {
        let when = entry.record_time();
        let message = entry.message();
        self.git(
            ["commit", "--allow-empty", "-m", message.as_str(), "--quiet"],
            &[
                ("GIT_AUTHOR_DATE", when.as_str()),
                ("GIT_COMMITTER_DATE", when.as_str()),
            ],
        )?;
        self.committed += 1;
        tracing::trace!(%when, "committed");
        Ok(())
    }

    fn publish(&mut self) -> ContribResult<()> {
        tracing::info!(remote = %self.remote, git_ref = self.push_ref(), "pushing");
        self.git(["push", self.remote.as_str(), self.push_ref()], &[])?;
        Ok(())
    }
}

/// Feed every schedule to `sink` in order, writing `{year} '{word}': {n} commits` per schedule.
///
/// Does not publish. Returns the number of records produced.
pub fn emit_schedules(
    sink: &mut dyn RecordSink,
    schedules: &[Schedule],
    out: &mut dyn Write,
) -> ContribResult<usize> {
    let mut total = 0usize;
    for schedule in schedules {
        writeln!(
            out,
            "{} '{}': {} commits",
            schedule.year,
            schedule.word,
            schedule.len()
        )
        .context("write progress")?;
        for entry in schedule {
            sink.record(entry)?;
            total += 1;
        }
    }
    Ok(total)
}

#[cfg(test)]
#[path = "../../tests/unit/emit/git.rs"]
mod tests;
