use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::{NutriError, Result};
use crate::models::FoodItem;

/// Columns every catalog file must provide (matched after trim + lowercase).
pub const REQUIRED_COLUMNS: [&str; 5] = ["name", "calories", "fat", "proteins", "carbohydrate"];

/// Load the food catalog from a CSV file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| NutriError::DataLoad(format!("cannot open {}: {}", path.display(), e)))?;

    let catalog = read_catalog(file)?;
    info!(path = %path.display(), items = catalog.len(), "Loaded food catalog");
    Ok(catalog)
}

/// Parse a catalog from any CSV reader.
///
/// Extra columns are ignored. Blank numeric cells count as zero.
pub fn read_catalog<R: Read>(reader: R) -> Result<Catalog> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| NutriError::DataLoad(format!("cannot read header row: {}", e)))?
        .clone();
    let columns = resolve_columns(&headers)?;
    debug!(?columns, "Resolved catalog columns");

    let mut items = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        // Header is line 1.
        let line = i + 2;
        let record =
            record.map_err(|e| NutriError::DataLoad(format!("line {}: {}", line, e)))?;
        items.push(parse_row(&record, &columns, line)?);
    }

    Ok(Catalog::new(items))
}

/// Map each required column to its index in the header row.
fn resolve_columns(headers: &StringRecord) -> Result<[usize; 5]> {
    let normalized: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();

    let mut columns = [0usize; 5];
    for (slot, wanted) in columns.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = normalized
            .iter()
            .position(|h| h == wanted)
            .ok_or_else(|| NutriError::DataLoad(format!("missing required column '{}'", wanted)))?;
    }
    Ok(columns)
}

fn parse_row(record: &StringRecord, columns: &[usize; 5], line: usize) -> Result<FoodItem> {
    let field = |idx: usize| record.get(columns[idx]).unwrap_or("");

    Ok(FoodItem {
        name: field(0).to_string(),
        calories: parse_number(field(1), REQUIRED_COLUMNS[1], line)?,
        fat: parse_number(field(2), REQUIRED_COLUMNS[2], line)?,
        proteins: parse_number(field(3), REQUIRED_COLUMNS[3], line)?,
        carbohydrate: parse_number(field(4), REQUIRED_COLUMNS[4], line)?,
    })
}

fn parse_number(raw: &str, column: &str, line: usize) -> Result<f64> {
    if raw.is_empty() {
        return Ok(0.0);
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(NutriError::DataLoad(format!(
            "line {}: column '{}' is not a number: '{}'",
            line, column, raw
        ))),
    }
}
