//! Placeholder substitution for notification templates.
//!
//! Two forms are recognised:
//!
//! - `{{name}}` inserts the parameter verbatim.
//! - `{{name|word}}` inserts the count followed by `word`, pluralised with a
//!   trailing `s` unless the count is exactly one (`"1 guest"`, `"4 guests"`).
//!
//! A missing or non-scalar parameter renders as the empty string.

use serde_json::Value;

use dinehub_core::events::TemplateParams;

/// Render `template` against `params`.
pub fn render(template: &str, params: &TemplateParams) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            // Unterminated placeholder: keep the remainder literally.
            out.push_str(&rest[start..]);
            return out;
        };
        out.push_str(&expand(after[..end].trim(), params));
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

fn expand(placeholder: &str, params: &TemplateParams) -> String {
    match placeholder.split_once('|') {
        Some((name, word)) => plural(params.get(name.trim()), word.trim()),
        None => scalar(params.get(placeholder)),
    }
}

fn scalar(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn plural(value: Option<&Value>, word: &str) -> String {
    let count = match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    match count {
        Some(1) => format!("1 {word}"),
        Some(n) => format!("{n} {word}s"),
        None => String::new(),
    }
}
