//! Specification files.
//!
//! A specification file holds the usage header and content together with
//! the ordered argument specifications. YAML and JSON are supported, chosen
//! by file extension.
//!
//! # Example YAML
//!
//! ```yaml
//! header: deploy
//! content: Deploys the current build.
//! options:
//!   - name: env
//!     alias: e
//!     description: Target environment
//!     validation_pattern: "^(dev|staging|prod)$"
//!     validation_message: env must be dev, staging or prod
//!   - name: replicas
//!     type: number
//!     default_value: 2
//!   - name: dry-run
//!     type: boolean
//!     default_value: false
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use cli_args_core::{ArgSpec, validate_specs};
use serde::{Deserialize, Serialize};

use crate::error::{CliArgsError, Result};

/// Serialization format of a specification file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Json,
    Yaml,
}

impl SpecFormat {
    /// Picks the format from the file extension (`.json`, `.yaml`, `.yml`).
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedFormat`](CliArgsError::UnsupportedFormat) for any
    /// other extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Ok(Self::Yaml)
            }
            _ => Err(CliArgsError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Usage text and argument specifications for one command.
///
/// # Examples
///
/// ```
/// use cli_args::SpecFile;
///
/// let spec: SpecFile = serde_yaml::from_str(
///     "header: tool\noptions:\n  - name: input\n    alias: i\n",
/// )
/// .unwrap();
/// assert_eq!(spec.header, "tool");
/// assert_eq!(spec.options[0].alias, Some('i'));
/// assert!(spec.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpecFile {
    /// Usage header (typically the command name).
    #[serde(default)]
    pub header: String,
    /// Usage text shown under the header.
    #[serde(default)]
    pub content: String,
    /// Accepted arguments, in display order.
    #[serde(default)]
    pub options: Vec<ArgSpec>,
}

impl SpecFile {
    /// Loads and validates a specification file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](CliArgsError::IoError) if the file cannot be read,
    /// [`JsonError`](CliArgsError::JsonError) or
    /// [`YamlError`](CliArgsError::YamlError) if parsing fails, and
    /// [`InvalidSpec`](CliArgsError::InvalidSpec) if the specifications break
    /// a structural rule.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = SpecFormat::from_path(path)?;
        let reader = BufReader::new(std::fs::File::open(path)?);
        let spec: Self = match format {
            SpecFormat::Json => serde_json::from_reader(reader)?,
            SpecFormat::Yaml => serde_yaml::from_reader(reader)?,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Saves the specification file in the format its extension names.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedFormat`](CliArgsError::UnsupportedFormat) for an
    /// unknown extension, otherwise I/O and serialization errors.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = SpecFormat::from_path(path)?;
        let writer = BufWriter::new(std::fs::File::create(path)?);
        match format {
            SpecFormat::Json => serde_json::to_writer_pretty(writer, self)?,
            SpecFormat::Yaml => serde_yaml::to_writer(writer, self)?,
        }
        Ok(())
    }

    /// Checks the structural rules of the contained specifications.
    pub fn validate(&self) -> Result<()> {
        match validate_specs(&self.options).into_iter().next() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}
