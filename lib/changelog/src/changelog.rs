use std::io::Write;

use doctavious_templating::{TemplateContext, Templates};
use scm::commit::TaggedCommits;
use serde_derive::Serialize;
use tracing::{debug, warn};

use crate::diagnostics::ChangelogLogger;
use crate::errors::ChangelogResult;
use crate::format::ChangelogFormat;
use crate::section::{Section, SectionStyle, TagSection};
use crate::settings::ChangelogSettings;

const HEADER_TEMPLATE: &str = "header";
const BODY_TEMPLATE: &str = "body";
const FOOTER_TEMPLATE: &str = "footer";

/// Rendered changelog holding one section per tag group, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Changelog {
    version: String,
    sections: Vec<Section>,
}

impl Changelog {
    /// Renders `tags` with the default section style.
    pub fn render(tags: &[TaggedCommits], version: &str, logger: &dyn ChangelogLogger) -> Self {
        Changelog::render_with_style(tags, version, &SectionStyle::default(), logger)
    }

    /// Renders `tags` with the style configured in `settings`.
    pub fn render_with_settings(
        tags: &[TaggedCommits],
        version: &str,
        settings: &ChangelogSettings,
        logger: &dyn ChangelogLogger,
    ) -> Self {
        Changelog::render_with_style(tags, version, &settings.style, logger)
    }

    pub fn render_with_style(
        tags: &[TaggedCommits],
        version: &str,
        style: &SectionStyle,
        logger: &dyn ChangelogLogger,
    ) -> Self {
        let sections = tags
            .iter()
            .map(|tagged| TagSection::render(&tagged.tag, &tagged.commits, version, style, logger))
            .collect();

        Self {
            version: version.to_string(),
            sections,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Sections that produce visible output.
    pub fn tag_sections(&self) -> impl Iterator<Item = &TagSection> {
        self.sections.iter().filter_map(Section::as_tag)
    }

    pub fn generate<W: Write>(&self, out: &mut W, settings: &ChangelogSettings) -> ChangelogResult<()> {
        debug!(
            "generating {} changelog with {} sections",
            settings.format,
            self.sections.len()
        );

        let rendered = match settings.format {
            ChangelogFormat::Json if settings.templates.body.is_none() => {
                if settings.templates.header.is_some() || settings.templates.footer.is_some() {
                    warn!("json changelog without a body template ignores header and footer templates");
                }
                serde_json::to_string_pretty(&self.sections)?
            }
            format => self.render_templates(format, settings)?,
        };

        let rendered = if settings.templates.trim {
            rendered.trim()
        } else {
            rendered.as_str()
        };

        if !rendered.is_empty() {
            writeln!(out, "{}", rendered)?;
        }

        Ok(())
    }

    fn render_templates(
        &self,
        format: ChangelogFormat,
        settings: &ChangelogSettings,
    ) -> ChangelogResult<String> {
        let body = match &settings.templates.body {
            Some(body) => body.clone(),
            None => format.body_template().unwrap_or_default().to_string(),
        };

        let mut sources = Vec::with_capacity(3);
        if let Some(header) = &settings.templates.header {
            sources.push((HEADER_TEMPLATE, header.clone()));
        }
        sources.push((BODY_TEMPLATE, body));
        if let Some(footer) = &settings.templates.footer {
            sources.push((FOOTER_TEMPLATE, footer.clone()));
        }

        let names: Vec<&str> = sources.iter().map(|(name, _)| *name).collect();
        let templates = Templates::new_with_templates(sources, format.template_options())?;

        let mut context = TemplateContext::from_serialize(self)?;
        context.insert("format", &format)?;

        let mut rendered = String::new();
        for name in names {
            rendered.push_str(&templates.render(name, &context)?);
        }

        Ok(rendered)
    }
}
