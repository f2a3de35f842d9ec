//! Display utilities and output writing for the coinhisto CLI.

use anyhow::Result;
use clap::ValueEnum;
use coinhisto_lib::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Output format for fetched data.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Price field selection for the wide CSV layout.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Field {
    Open,
    High,
    Low,
    Close,
}

impl From<Field> for PriceField {
    fn from(field: Field) -> Self {
        match field {
            Field::Open => Self::Open,
            Field::High => Self::High,
            Field::Low => Self::Low,
            Field::Close => Self::Close,
        }
    }
}

/// CSV table layout selection.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Layout {
    Wide,
    Long,
}

impl From<Layout> for CsvLayout {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Wide => Self::Wide,
            Layout::Long => Self::Long,
        }
    }
}

/// Write a result set to a file in the specified format.
pub(crate) fn write_result_set(
    result: &ResultSet,
    output: &Path,
    format: Format,
    field: Field,
    layout: Layout,
    date_only: bool,
) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);

    match format {
        Format::Csv => {
            let formatter = CsvFormatter::new()
                .with_field(field.into())
                .with_layout(layout.into())
                .with_date_only(date_only);
            formatter.write_result_set(result, writer)?;
        }
        Format::Json => {
            let formatter = JsonFormatter::new();
            formatter.write_result_set(result, writer)?;
        }
    }

    Ok(())
}
