//! CSV output format.

use chrono::{DateTime, Utc};
use coinhisto_types::{Candle, ResultSet};
use std::io::Write;

use crate::{FormatError, Formatter, PriceField};

/// Table layout for CSV output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CsvLayout {
    /// One row per timestamp, one column per symbol holding the chosen
    /// price field.
    #[default]
    Wide,
    /// One row per (symbol, timestamp) with the full OHLCV fields.
    Long,
}

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
    /// Table layout.
    layout: CsvLayout,
    /// Price field written by the wide layout.
    field: PriceField,
    /// Render the time column as a bare date (daily data).
    date_only: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings (wide, close).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
            layout: CsvLayout::Wide,
            field: PriceField::Close,
            date_only: false,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Sets the table layout.
    #[must_use]
    pub const fn with_layout(mut self, layout: CsvLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the price field written by the wide layout.
    #[must_use]
    pub const fn with_field(mut self, field: PriceField) -> Self {
        self.field = field;
        self
    }

    /// Sets whether the time column is rendered as a bare date.
    #[must_use]
    pub const fn with_date_only(mut self, date_only: bool) -> Self {
        self.date_only = date_only;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
            layout: CsvLayout::Wide,
            field: PriceField::Close,
            date_only: false,
        }
    }

    fn format_time(&self, time: DateTime<Utc>) -> String {
        if self.date_only {
            time.format("%Y-%m-%d").to_string()
        } else {
            time.format("%Y-%m-%dT%H:%M:%SZ").to_string()
        }
    }

    fn write_wide<W: Write>(&self, result: &ResultSet, mut writer: W) -> Result<(), FormatError> {
        let d = self.delimiter;
        let series: Vec<(&str, &[Candle])> = result.iter().collect();
        let Some((_, grid)) = series.first() else {
            return Ok(());
        };

        for (symbol, candles) in &series {
            let aligned = candles.len() == grid.len()
                && candles.iter().zip(grid.iter()).all(|(a, b)| a.time == b.time);
            if !aligned {
                return Err(FormatError::GridMismatch((*symbol).to_string()));
            }
        }

        if self.include_header {
            write!(writer, "time")?;
            for (symbol, _) in &series {
                write!(writer, "{d}{symbol}")?;
            }
            writeln!(writer)?;
        }

        for (row, slot) in grid.iter().enumerate() {
            write!(writer, "{}", self.format_time(slot.time))?;
            for (_, candles) in &series {
                write!(writer, "{d}{}", self.field.extract(&candles[row]))?;
            }
            writeln!(writer)?;
        }

        Ok(())
    }

    fn write_long<W: Write>(&self, result: &ResultSet, mut writer: W) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "ticker{d}time{d}open{d}high{d}low{d}close{d}volumefrom{d}volumeto"
            )?;
        }

        for (symbol, candles) in result.iter() {
            for candle in candles {
                writeln!(
                    writer,
                    "{symbol}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                    self.format_time(candle.time),
                    candle.open,
                    candle.high,
                    candle.low,
                    candle.close,
                    candle.volume_from,
                    candle.volume_to
                )?;
            }
        }

        Ok(())
    }
}

impl Formatter for CsvFormatter {
    fn write_result_set<W: Write + Send>(
        &self,
        result: &ResultSet,
        writer: W,
    ) -> Result<(), FormatError> {
        match self.layout {
            CsvLayout::Wide => self.write_wide(result, writer),
            CsvLayout::Long => self.write_long(result, writer),
        }
    }

    fn extension(&self) -> &str {
        "csv"
    }
}
