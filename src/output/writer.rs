//! JSON and YAML writers for statement records.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::types::StatementRecord;

use super::text::{normalize_text, should_wrap_text, wrap_text_default};

/// Output formats supported by the writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Exact wire form: bodies are serialized verbatim.
    Json,

    /// Human-readable form: bodies are normalized and wrapped.
    Yaml,
}

impl OutputFormat {
    /// Parse a format name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// File extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Statement representation for YAML serialization.
#[derive(Debug, Serialize)]
struct YamlStatement {
    identifier: String,
    kind: &'static str,
    title: String,
    statement: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    proof: String,
}

impl From<&StatementRecord> for YamlStatement {
    fn from(record: &StatementRecord) -> Self {
        Self {
            identifier: record.identifier.clone(),
            kind: record.kind.as_str(),
            title: record.title.clone(),
            statement: prettify(&record.statement),
            proof: prettify(&record.proof),
        }
    }
}

/// Normalize and wrap body text for the YAML artifact.
fn prettify(body: &str) -> String {
    let normalized = normalize_text(body);
    if should_wrap_text(&normalized) {
        wrap_text_default(&normalized)
    } else {
        normalized
    }
}

/// Generate a pretty-printed JSON array from statement records.
///
/// Body text is emitted exactly as accumulated; no normalization or
/// wrapping.
pub fn generate_json(records: &[StatementRecord]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');
    Ok(json)
}

/// Generate a YAML document from statement records.
///
/// Starts with the `---` document marker; statement and proof text is
/// normalized and wrapped for readability.
pub fn generate_yaml(records: &[StatementRecord]) -> Result<String> {
    let statements: Vec<YamlStatement> = records.iter().map(YamlStatement::from).collect();
    let yaml = serde_yaml_ng::to_string(&statements)?;

    let lines: Vec<&str> = yaml.lines().map(str::trim_end).collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}

/// Save statement records to a file in the given format.
///
/// Uses atomic write pattern: writes to a temp file, syncs to disk, then
/// renames, so partial writes never corrupt an existing file.
///
/// # Arguments
/// * `records` - The records to save
/// * `format` - Output format
/// * `output_file` - Destination path
///
/// # Returns
/// The destination path
pub fn save_records(
    records: &[StatementRecord],
    format: OutputFormat,
    output_file: &Path,
) -> Result<PathBuf> {
    let content = match format {
        OutputFormat::Json => generate_json(records)?,
        OutputFormat::Yaml => generate_yaml(records)?,
    };

    if let Some(parent) = output_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file_name = output_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let temp_file = output_file.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(output_file)?;
    }

    fs::rename(&temp_file, output_file)?;

    Ok(output_file.to_path_buf())
}
