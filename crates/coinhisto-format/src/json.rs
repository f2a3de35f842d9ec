//! JSON output format.

use coinhisto_types::ResultSet;
use std::io::Write;

use crate::{FormatError, Formatter};

/// JSON formatter.
///
/// Writes the result set as one object keyed by symbol, each value being the
/// symbol's candle array in the API's raw wire shape (post gap-fill).
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print.
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter (compact output).
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Sets whether to pretty-print output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Formatter for JsonFormatter {
    fn write_result_set<W: Write + Send>(
        &self,
        result: &ResultSet,
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, result)?;
        } else {
            serde_json::to_writer(&mut writer, result)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "json"
    }
}
