//! Version report for the scanner and its vulnerability database
//!
//! # Modules
//!
//! - [`format`]: Output format selection
//! - [`table`]: ASCII table layout
//! - [`error`]: Error types for report generation

pub mod error;
pub mod format;
pub mod table;

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::db::{Metadata, MetadataReader, Store};
pub use error::ReportError;
pub use format::OutputFormat;
use table::{Cell, Table};

/// Timestamp layout of the table report
const TABLE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z UTC";

/// Scanner version together with the database snapshot it runs against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    #[serde(rename = "Trivy")]
    pub trivy: String,
    #[serde(
        rename = "VulnerabilityDB",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub vulnerability_db: Option<Metadata>,
}

/// Open the database under `cache_dir` and write the version report to `out`.
///
/// Nothing is written when the metadata cannot be read.
pub fn show_version<W: Write>(
    cache_dir: &Path,
    format: OutputFormat,
    version: &str,
    out: &mut W,
) -> Result<(), ReportError> {
    let store = Store::open(cache_dir).map_err(ReportError::MetadataUnavailable)?;
    write_version(&store, format, version, out)
}

/// Write the version report for an already opened database.
pub fn write_version<R: MetadataReader, W: Write>(
    reader: &R,
    format: OutputFormat,
    version: &str,
    out: &mut W,
) -> Result<(), ReportError> {
    let metadata = reader
        .get_metadata()
        .map_err(ReportError::MetadataUnavailable)?;
    debug!("Rendering version report as {}", format);

    let info = VersionInfo {
        trivy: version.to_string(),
        vulnerability_db: Some(metadata),
    };
    let rendered = render(&info, format)?;
    out.write_all(&rendered)?;
    Ok(())
}

/// Render a report into its final byte form
pub fn render(info: &VersionInfo, format: OutputFormat) -> Result<Vec<u8>, ReportError> {
    match format {
        OutputFormat::Table => Ok(render_table(info).into_bytes()),
        OutputFormat::Json => {
            let mut buf = serde_json::to_vec(info)?;
            buf.push(b'\n');
            Ok(buf)
        }
    }
}

fn render_table(info: &VersionInfo) -> String {
    let mut table = Table::new(["COMPONENT", "VERSION"]);
    table.add_row(vec![Cell::left("Trivy"), Cell::left(info.trivy.as_str())]);

    if let Some(db) = &info.vulnerability_db {
        table
            .add_row(vec![Cell::left("VulnDB Type"), Cell::left(db.db_type.label())])
            .add_row(vec![
                Cell::left("VulnDB Version"),
                Cell::right(db.version.to_string()),
            ])
            .add_row(vec![
                Cell::left("VulnDB Updated At"),
                Cell::left(db.updated_at.format(TABLE_TIME_FORMAT).to_string()),
            ])
            .add_row(vec![
                Cell::left("VulnDB Next Update"),
                Cell::left(db.next_update.format(TABLE_TIME_FORMAT).to_string()),
            ]);
    }

    table.render()
}
