//! Plain-text usage rendering.

use cli_args_core::{ArgSpec, UsageRenderer, UsageSection};

/// Renders usage sections as plain text.
///
/// Content sections print their header followed by the indented content;
/// option sections print an aligned table of `-a, --name <kind>` signatures
/// and descriptions. Sections are separated by a blank line.
///
/// # Examples
///
/// ```
/// use cli_args::TextUsageRenderer;
/// use cli_args_core::{ArgSpec, UsageRenderer, usage_sections};
///
/// let sections = usage_sections("tool", "Does things.", &[ArgSpec::new("input").with_alias('i')]);
/// let text = TextUsageRenderer.render(&sections);
/// assert_eq!(text, "tool\n\n  Does things.\n\nOptions\n\n  -i, --input <string>");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextUsageRenderer;

impl UsageRenderer for TextUsageRenderer {
    fn render(&self, sections: &[UsageSection]) -> String {
        sections
            .iter()
            .map(render_section)
            .filter(|block| !block.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

fn render_section(section: &UsageSection) -> String {
    match section {
        UsageSection::Content { header, content } => {
            let body = indent(content);
            match (header.is_empty(), body.is_empty()) {
                (_, true) => header.clone(),
                (true, false) => body,
                (false, false) => format!("{header}\n\n{body}"),
            }
        }
        UsageSection::Options {
            header,
            option_list,
        } => {
            if option_list.is_empty() {
                return header.clone();
            }
            format!("{header}\n\n{}", option_table(option_list))
        }
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("  {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn option_table(specs: &[ArgSpec]) -> String {
    let rows: Vec<(String, &str)> = specs
        .iter()
        .map(|spec| {
            (
                option_signature(spec),
                spec.description.as_deref().unwrap_or(""),
            )
        })
        .collect();
    let width = rows
        .iter()
        .map(|(signature, _)| signature.chars().count())
        .max()
        .unwrap_or(0);

    rows.iter()
        .map(|(signature, description)| {
            if description.is_empty() {
                format!("  {signature}")
            } else {
                format!("  {signature:<width$}   {description}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn option_signature(spec: &ArgSpec) -> String {
    let mut signature = match spec.alias {
        Some(alias) => format!("-{alias}, --{}", spec.name),
        None => format!("    --{}", spec.name),
    };
    if let Some(label) = spec.kind.label() {
        signature.push_str(&format!(" <{label}>"));
    }
    signature
}
