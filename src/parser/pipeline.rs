use std::io::Read;
use std::path::Path;
use std::time::Instant;

use crate::error::AppError;
use crate::parser::columns::{validate_columns, ColumnMap, TicketColumns, ACCOUNTED_TIME};
use crate::parser::deserializers::{parse_created, parse_opt_f64};
use crate::parser::types::{TicketRow, TicketTable};

/// Load the ticket export at `path`. Any malformed record, timestamp or
/// number aborts the whole load.
pub fn parse_csv(path: &Path) -> Result<TicketTable, AppError> {
    let file = std::fs::File::open(path)?;
    let mut table = parse_csv_reader(std::io::BufReader::new(file))?;
    table.source = Some(path.to_path_buf());
    Ok(table)
}

/// Same as `parse_csv` over any `Read` source.
pub fn parse_csv_reader<R: Read>(reader: R) -> Result<TicketTable, AppError> {
    let start = Instant::now();

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .double_quote(true)
        .quoting(true)
        .from_reader(reader);

    // Phase 1: validate columns
    let headers = rdr.headers()?.clone();
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(AppError::EmptyFile);
    }
    let col_map = ColumnMap::from_headers(&headers);
    let validation = validate_columns(&col_map)?;
    let cols = validation.columns;

    // Phase 2: parse records
    let mut rows: Vec<TicketRow> = Vec::new();
    let mut undated_rows = 0usize;

    for (row_idx, result) in rdr.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(row_idx + 2);

        let row = record_to_row(&cols, &record, line)?;
        if row.created.is_none() {
            undated_rows += 1;
        }
        rows.push(row);
    }

    Ok(TicketTable {
        rows,
        source: None,
        columns: validation.present,
        missing_optional_columns: validation.missing_optional,
        undated_rows,
        parse_duration_ms: start.elapsed().as_millis() as u64,
    })
}

fn record_to_row(
    cols: &TicketColumns,
    record: &csv::StringRecord,
    line: usize,
) -> Result<TicketRow, AppError> {
    let created = match TicketColumns::cell(record, cols.created) {
        None => None,
        Some(raw) => Some(parse_created(raw).ok_or_else(|| AppError::InvalidTimestamp {
            line,
            value: raw.to_string(),
        })?),
    };

    let raw_time = TicketColumns::cell(record, cols.accounted_time).unwrap_or("");
    let accounted_time = parse_opt_f64(raw_time)
        .ok()
        .filter(|v| v.map_or(true, f64::is_finite))
        .ok_or_else(|| AppError::InvalidNumber {
            line,
            column: ACCOUNTED_TIME.to_string(),
            value: raw_time.to_string(),
        })?;

    Ok(TicketRow {
        line,
        queue: TicketColumns::cell(record, cols.queue).map(str::to_string),
        created,
        state: TicketColumns::cell(record, cols.state).map(str::to_string),
        accounted_time,
    })
}

// ─── Tests ────────────────────────────────────────────────────────────────────
