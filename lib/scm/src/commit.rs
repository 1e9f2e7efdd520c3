use serde_derive::{Deserialize, Serialize};

use crate::SHORT_HASH_LEN;

// TODO: should we have a CommitHash type?
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct ScmCommit {
    /// Commit hash
    pub hash: String,

    /// Commit message
    pub message: String,
}

impl ScmCommit {
    pub fn new<H: Into<String>, M: Into<String>>(hash: H, message: M) -> Self {
        Self {
            hash: hash.into(),
            message: message.into(),
        }
    }

    /// Abbreviated hash made of at most the first [`SHORT_HASH_LEN`] characters.
    ///
    /// Hashes shorter than that are returned whole rather than padded.
    pub fn short_hash(&self) -> &str {
        match self.hash.char_indices().nth(SHORT_HASH_LEN) {
            Some((idx, _)) => &self.hash[..idx],
            None => &self.hash,
        }
    }
}

/// Commits grouped by tag
///
/// An empty tag marks commits that have not been released yet.
/// Commits are kept in display order, typically newest first.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct TaggedCommits {
    #[serde(default)]
    pub tag: String,

    #[serde(default)]
    pub commits: Vec<ScmCommit>,
}

impl TaggedCommits {
    pub fn new<T: Into<String>>(tag: T, commits: Vec<ScmCommit>) -> Self {
        Self {
            tag: tag.into(),
            commits,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use crate::commit::{ScmCommit, TaggedCommits};

    #[test_case("abcdef1234567890" => "abcdef12"; "full hash")]
    #[test_case("abcdef12" => "abcdef12"; "exactly eight")]
    #[test_case("abc" => "abc"; "shorter than eight")]
    #[test_case("" => ""; "empty")]
    #[test_case("ééééééééé" => "éééééééé"; "multi byte")]
    fn short_hash(hash: &str) -> String {
        ScmCommit::new(hash, "msg").short_hash().to_string()
    }

    #[test]
    fn should_deserialize_tagged_commits() {
        let json = r#"[
            {"tag": "v1.0.0", "commits": [{"hash": "1234567890", "message": "initial"}]},
            {"tag": "", "commits": []},
            {"commits": [{"hash": "abc", "message": "unreleased"}]}
        ]"#;

        let tags: Vec<TaggedCommits> = serde_json::from_str(json).unwrap();
        assert_eq!(3, tags.len());
        assert_eq!("v1.0.0", tags[0].tag);
        assert_eq!(vec![ScmCommit::new("1234567890", "initial")], tags[0].commits);
        assert!(tags[1].tag.is_empty());
        assert!(tags[1].commits.is_empty());
        assert!(tags[2].tag.is_empty());
        assert_eq!("unreleased", tags[2].commits[0].message);
    }
}
