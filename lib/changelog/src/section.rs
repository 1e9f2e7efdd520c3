use indexmap::IndexMap;
use scm::commit::ScmCommit;
use serde_derive::{Deserialize, Serialize};
use tracing::trace;

use crate::diagnostics::{ChangelogLogger, LogFields, EMPTY_TAG_TEMPLATE};

pub const PRE_RELEASE_LABEL: &str = "Pre-Release";

const DEFAULT_HEADING_LEVEL: u8 = 3;

/// Inline styling applied to every rendered tag section.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct SectionStyle {
    /// Heading level from 1 to 6. Out of range values are clamped.
    pub heading_level: u8,

    /// Inline css for the element wrapping a section.
    pub container: IndexMap<String, String>,

    /// Inline css for the section heading.
    pub heading: IndexMap<String, String>,
}

impl SectionStyle {
    pub fn heading_level(&self) -> u8 {
        self.heading_level.clamp(1, 6)
    }
}

impl Default for SectionStyle {
    fn default() -> Self {
        Self {
            heading_level: DEFAULT_HEADING_LEVEL,
            container: IndexMap::from([("margin".to_string(), "6px auto".to_string())]),
            heading: IndexMap::from([("font-weight".to_string(), "bolder".to_string())]),
        }
    }
}

/// A rendered tag: heading followed by one list item per commit message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TagSection {
    pub heading: String,
    pub heading_level: u8,
    pub heading_style: IndexMap<String, String>,
    pub container_style: IndexMap<String, String>,
    pub items: Vec<String>,
}

/// Rendered output for a single tag group.
///
/// `Empty` serializes as `null` so a rendered changelog always has one entry per group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Section {
    Empty,
    Tag(TagSection),
}

impl Section {
    pub fn as_tag(&self) -> Option<&TagSection> {
        match self {
            Section::Empty => None,
            Section::Tag(section) => Some(section),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Section::Empty)
    }
}

impl TagSection {
    /// Renders a tag and its commits.
    ///
    /// A group without commits renders as [`Section::Empty`] and logs a warning through `logger`.
    pub fn render(
        tag: &str,
        commits: &[ScmCommit],
        current_version: &str,
        style: &SectionStyle,
        logger: &dyn ChangelogLogger,
    ) -> Section {
        let Some(latest) = commits.first() else {
            let mut fields = LogFields::new();
            fields.insert(
                "tag".to_string(),
                serde_json::Value::from(tag).to_string(),
            );
            logger.warn(EMPTY_TAG_TEMPLATE, &fields);
            return Section::Empty;
        };

        let heading = heading(tag, current_version, latest);
        trace!("rendering {} commits under {}", commits.len(), &heading);

        Section::Tag(TagSection {
            heading,
            heading_level: style.heading_level(),
            heading_style: style.heading.clone(),
            container_style: style.container.clone(),
            items: commits.iter().map(|c| c.message.clone()).collect(),
        })
    }
}

fn heading(tag: &str, current_version: &str, latest: &ScmCommit) -> String {
    if tag.is_empty() {
        format!(
            "{current_version}@{} ({PRE_RELEASE_LABEL})",
            latest.short_hash()
        )
    } else {
        tag.to_string()
    }
}
