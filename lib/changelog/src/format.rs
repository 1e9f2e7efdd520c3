use doctavious_templating::TemplateOptions;
use serde_derive::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, VariantNames};

const HTML_TEMPLATE: &str = r###"
{% for section in sections %}
{% if section %}
<div style="{{ section.container_style | css }}">
<h{{ section.heading_level }} style="{{ section.heading_style | css }}">{{ section.heading }}</h{{ section.heading_level }}>
<ul>
{% for item in section.items %}
<li>{{ item }}</li>
{% endfor %}
</ul>
</div>
{% endif %}
{% endfor %}
"###;

const MARKDOWN_TEMPLATE: &str = r###"
{% for section in sections %}
{% if section %}
{{ "#" | repeat(section.heading_level) }} {{ section.heading }}

{% for item in section.items %}
- {{ item | continuation(2) }}
{% endfor %}

{% endif %}
{% endfor %}
"###;

#[remain::sorted]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    PartialEq,
    Eq,
    Serialize,
    VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChangelogFormat {
    /// Sections as `div`/`h3`/`ul` markup with inline styles.
    Html,

    /// The rendered sections serialized as JSON. Skipped tags are `null`.
    Json,

    /// Sections as markdown headings followed by bullet lists.
    #[default]
    Markdown,
}

impl ChangelogFormat {
    #[must_use]
    pub const fn variants() -> &'static [&'static str] {
        <Self as strum::VariantNames>::VARIANTS
    }

    /// Built-in body template. JSON is serialized directly and has none.
    pub(crate) fn body_template(&self) -> Option<&'static str> {
        match self {
            ChangelogFormat::Html => Some(HTML_TEMPLATE),
            ChangelogFormat::Json => None,
            ChangelogFormat::Markdown => Some(MARKDOWN_TEMPLATE),
        }
    }

    pub(crate) fn template_options(&self) -> TemplateOptions {
        TemplateOptions {
            escape: matches!(self, ChangelogFormat::Html),
            trim_blocks: true,
        }
    }
}
