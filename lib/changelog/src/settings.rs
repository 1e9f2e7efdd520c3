use std::fs;
use std::path::Path;

use serde_derive::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ChangelogResult;
use crate::format::ChangelogFormat;
use crate::section::SectionStyle;

pub const DEFAULT_CONFIG_NAME: &str = "changelog.toml";

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct ChangelogSettings {
    pub format: ChangelogFormat,

    pub style: SectionStyle,

    pub templates: TemplateSettings,
}

/// Header and footer are only rendered when the output goes through a template, so JSON output
/// without a `body` override ignores them.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct TemplateSettings {
    /// Rendered before the body.
    pub header: Option<String>,

    /// Replaces the built-in template of the selected format.
    pub body: Option<String>,

    /// Rendered after the body.
    pub footer: Option<String>,

    /// Trim surrounding whitespace from the rendered output.
    pub trim: bool,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            header: None,
            body: None,
            footer: None,
            trim: true,
        }
    }
}

impl ChangelogSettings {
    pub fn from_toml(content: &str) -> ChangelogResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: &Path) -> ChangelogResult<Self> {
        debug!("loading changelog settings from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Loads `changelog.toml` from `dir` falling back to defaults when the file is missing.
    pub fn from_dir_or_default(dir: &Path) -> ChangelogResult<Self> {
        let path = dir.join(DEFAULT_CONFIG_NAME);
        if !path.is_file() {
            debug!("{} not found. using default settings", path.display());
            return Ok(Self::default());
        }
        Self::from_path(&path)
    }

    pub fn to_toml(&self) -> ChangelogResult<String> {
        Ok(toml::to_string(self)?)
    }
}
