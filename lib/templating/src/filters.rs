use minijinja::value::ValueKind;
use minijinja::{Error, ErrorKind, Value};

/// Renders a map of css properties into an inline style declaration.
///
/// `{"margin": "6px auto", "font-weight": "bolder"}` becomes `margin: 6px auto; font-weight: bolder`
pub(crate) fn css(value: Value) -> Result<String, Error> {
    if value.is_none() || value.is_undefined() {
        return Ok(String::new());
    }

    if value.kind() != ValueKind::Map {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("css filter expects a map but got {}", value.kind()),
        ));
    }

    let mut declarations = Vec::new();
    for key in value.try_iter()? {
        let property = value.get_item(&key)?;
        if property.is_none() || property.is_undefined() {
            continue;
        }
        declarations.push(format!("{key}: {property}"));
    }

    Ok(declarations.join("; "))
}

/// Repeats `value` `count` times, e.g. `"#" | repeat(3)` gives `###`.
pub(crate) fn repeat(value: String, count: usize) -> String {
    value.repeat(count)
}

/// Indents every non-blank line after the first by `width` spaces so multi-line text stays
/// inside a markdown list item.
pub(crate) fn continuation(value: String, width: usize) -> String {
    let indent = " ".repeat(width);
    value
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            if i == 0 || line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{indent}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
