use scm::commit::{ScmCommit, TaggedCommits};

pub fn commit(hash: &str, message: &str) -> ScmCommit {
    ScmCommit::new(hash, message)
}

pub fn tagged(tag: &str, commits: Vec<ScmCommit>) -> TaggedCommits {
    TaggedCommits::new(tag, commits)
}

/// Builds `count` commits with deterministic 16 character hashes, newest first.
pub fn commits(prefix: &str, count: usize) -> Vec<ScmCommit> {
    (0..count)
        .rev()
        .map(|i| commit(&format!("{:016x}", i + 1), &format!("{prefix} {}", i + 1)))
        .collect()
}
