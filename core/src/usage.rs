//! Usage document sections handed to a usage renderer.

use serde::Serialize;

use crate::ArgSpec;

/// Header of the option table section.
pub const OPTIONS_HEADER: &str = "Options";

/// One section of a usage document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UsageSection {
    /// Free text under a header.
    Content { header: String, content: String },
    /// A table of options under a header.
    Options {
        header: String,
        option_list: Vec<ArgSpec>,
    },
}

/// Builds the two sections of a usage document: the caller's header and
/// content, followed by the option table.
///
/// # Examples
///
/// ```
/// use cli_args_core::{ArgSpec, UsageSection, usage_sections};
///
/// let sections = usage_sections("tool", "Does things", &[ArgSpec::help()]);
/// assert_eq!(sections.len(), 2);
/// assert!(matches!(&sections[1], UsageSection::Options { header, .. } if header == "Options"));
/// ```
pub fn usage_sections(header: &str, content: &str, specs: &[ArgSpec]) -> Vec<UsageSection> {
    vec![
        UsageSection::Content {
            header: header.to_string(),
            content: content.to_string(),
        },
        UsageSection::Options {
            header: OPTIONS_HEADER.to_string(),
            option_list: specs.to_vec(),
        },
    ]
}
