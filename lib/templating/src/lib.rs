mod filters;

use std::collections::BTreeMap;
use std::error::Error;

use minijinja::{AutoEscape, Environment};
use serde::Serialize;
use serde_json::{to_value, Value};
use thiserror::Error;
use tracing::trace;

#[remain::sorted]
#[derive(Debug, Error)]
pub enum TemplatingError {
    #[error("json serialize/deserialize error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Creating a Context from a Value/Serialize requires it being a JSON object")]
    TemplateContextError(),

    /// Error that may occur while template operations such as parse and render.
    #[error("Template error: `{0}`")]
    TemplateError(#[from] minijinja::Error),

    /// Error that may occur while parsing the template.
    #[error("Template parse error:\n{0}")]
    TemplateParseError(String),
}

pub type TemplatingResult<T> = Result<T, TemplatingError>;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemplateContext {
    pub data: BTreeMap<String, Value>,
}

impl TemplateContext {
    /// Takes a serde-json `Value` and convert it into a `Context` with no overhead/cloning.
    pub fn from_value(obj: Value) -> TemplatingResult<Self> {
        match obj {
            Value::Object(m) => Ok(TemplateContext {
                data: m.into_iter().collect(),
            }),
            _ => Err(TemplatingError::TemplateContextError()),
        }
    }

    /// Takes something that impl Serialize and create a context with it.
    /// Meant to be used if you have a hashmap or a struct and don't want to insert values
    /// one by one in the context.
    pub fn from_serialize(value: impl Serialize) -> TemplatingResult<Self> {
        let obj = to_value(value)?;
        TemplateContext::from_value(obj)
    }

    /// Converts the `val` parameter to `Value` and insert it into the context.
    pub fn insert<T: Serialize + ?Sized, S: Into<String>>(
        &mut self,
        key: S,
        val: &T,
    ) -> TemplatingResult<()> {
        self.data.insert(key.into(), to_value(val)?);
        Ok(())
    }
}

/// Controls how an environment treats whitespace and escaping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TemplateOptions {
    /// HTML escape every expression output.
    pub escape: bool,

    /// Remove the first newline after a block tag and strip whitespace in front of it.
    pub trim_blocks: bool,
}

#[derive(Debug)]
pub struct Templates<'a> {
    env: Environment<'a>,
}

impl<'a> Templates<'a> {
    /// Registers each `(name, source)` pair, failing on the first template that doesn't parse.
    pub fn new_with_templates<I>(templates: I, options: TemplateOptions) -> TemplatingResult<Self>
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        let mut env = environment(options);
        for (name, source) in templates {
            if let Err(e) = env.add_template_owned(name, source) {
                return if let Some(error_source) = e.source() {
                    Err(TemplatingError::TemplateParseError(
                        error_source.to_string(),
                    ))
                } else {
                    Err(TemplatingError::TemplateError(e))
                };
            }
        }

        Ok(Self { env })
    }

    /// Renders a named template.
    pub fn render(&self, template: &str, context: &TemplateContext) -> TemplatingResult<String> {
        trace!(template, "rendering template");
        let tmpl = self.env.get_template(template)?;
        Ok(tmpl.render(&context.data)?)
    }
}

fn environment<'a>(options: TemplateOptions) -> Environment<'a> {
    let mut env = Environment::new();
    if options.escape {
        env.set_auto_escape_callback(|_| AutoEscape::Html);
    } else {
        env.set_auto_escape_callback(|_| AutoEscape::None);
    }
    env.set_trim_blocks(options.trim_blocks);
    env.set_lstrip_blocks(options.trim_blocks);
    env.add_filter("continuation", filters::continuation);
    env.add_filter("css", filters::css);
    env.add_filter("repeat", filters::repeat);
    env
}
