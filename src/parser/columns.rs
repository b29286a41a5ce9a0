use std::collections::HashMap;

use crate::error::AppError;

pub const QUEUE: &str = "Queue";
pub const CREATED: &str = "Created";
pub const STATE: &str = "State";
pub const ACCOUNTED_TIME: &str = "Accounted time";

/// Columns the report cannot do without.
const REQUIRED: &[&str] = &[QUEUE, CREATED, STATE, ACCOUNTED_TIME];

/// Expected in the export but recomputed from `Queue`; absence is only reported.
const OPTIONAL: &[&str] = &["Sub Queue"];

/// Header name → record index lookup.
pub struct ColumnMap {
    indices: HashMap<String, usize>,
    headers: Vec<String>,
}

impl ColumnMap {
    /// Header fields are trimmed; on duplicates the first occurrence wins.
    pub fn from_headers(headers: &csv::StringRecord) -> Self {
        let mut indices = HashMap::new();
        let mut header_list = Vec::with_capacity(headers.len());
        for (i, field) in headers.iter().enumerate() {
            let name = field.trim().to_string();
            indices.entry(name.clone()).or_insert(i);
            header_list.push(name);
        }
        ColumnMap {
            indices,
            headers: header_list,
        }
    }

    pub fn index_of(&self, col: &str) -> Option<usize> {
        self.indices.get(col).copied()
    }

    pub fn has(&self, col: &str) -> bool {
        self.indices.contains_key(col)
    }

    pub fn all_headers(&self) -> &[String] {
        &self.headers
    }
}

/// Record positions of the required columns, resolved once per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketColumns {
    pub queue: usize,
    pub created: usize,
    pub state: usize,
    pub accounted_time: usize,
}

impl TicketColumns {
    /// Cell at `idx`, trimmed; `None` when the record is short or the cell is blank.
    pub fn cell<'a>(record: &'a csv::StringRecord, idx: usize) -> Option<&'a str> {
        record.get(idx).map(str::trim).filter(|s| !s.is_empty())
    }
}

#[derive(Debug)]
pub struct ColumnValidation {
    pub columns: TicketColumns,
    pub present: Vec<String>,
    pub missing_optional: Vec<String>,
}

/// Resolve required columns, or fail with every missing name at once.
pub fn validate_columns(col_map: &ColumnMap) -> Result<ColumnValidation, AppError> {
    let missing_required: Vec<String> = REQUIRED
        .iter()
        .filter(|&&c| !col_map.has(c))
        .map(|c| c.to_string())
        .collect();

    if !missing_required.is_empty() {
        return Err(AppError::MissingColumns(missing_required));
    }

    let index = |c: &str| col_map.index_of(c).ok_or_else(|| AppError::MissingColumns(vec![c.into()]));
    let columns = TicketColumns {
        queue: index(QUEUE)?,
        created: index(CREATED)?,
        state: index(STATE)?,
        accounted_time: index(ACCOUNTED_TIME)?,
    };

    let missing_optional = OPTIONAL
        .iter()
        .filter(|&&c| !col_map.has(c))
        .map(|c| c.to_string())
        .collect();

    Ok(ColumnValidation {
        columns,
        present: col_map.all_headers().to_vec(),
        missing_optional,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_headers(cols: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(cols.to_vec())
    }

    #[test]
    fn test_validate_resolves_indices() {
        let headers = make_headers(&["Number", "Queue", "State", "Created", "Accounted time", "Sub Queue"]);
        let val = validate_columns(&ColumnMap::from_headers(&headers)).unwrap();
        assert_eq!(
            val.columns,
            TicketColumns {
                queue: 1,
                created: 3,
                state: 2,
                accounted_time: 4,
            }
        );
        assert!(val.missing_optional.is_empty());
        assert_eq!(val.present.len(), 6);
    }

    #[test]
    fn test_validate_missing_required() {
        let headers = make_headers(&["Queue", "Title"]);
        match validate_columns(&ColumnMap::from_headers(&headers)).unwrap_err() {
            AppError::MissingColumns(cols) => {
                assert_eq!(cols, vec!["Created", "State", "Accounted time"]);
            }
            e => panic!("Expected MissingColumns, got {:?}", e),
        }
    }

    #[test]
    fn test_validate_missing_optional_sub_queue() {
        let headers = make_headers(&["Queue", "Created", "State", "Accounted time"]);
        let val = validate_columns(&ColumnMap::from_headers(&headers)).unwrap();
        assert_eq!(val.missing_optional, vec!["Sub Queue".to_string()]);
    }

    #[test]
    fn test_headers_trimmed() {
        let cm = ColumnMap::from_headers(&make_headers(&[" Queue ", "Accounted time "]));
        assert_eq!(cm.index_of("Queue"), Some(0));
        assert_eq!(cm.index_of("Accounted time"), Some(1));
    }

    #[test]
    fn test_cell_blank_is_none() {
        let record = csv::StringRecord::from(vec!["Support::DB", "  ", "x"]);
        assert_eq!(TicketColumns::cell(&record, 0), Some("Support::DB"));
        assert_eq!(TicketColumns::cell(&record, 1), None);
        assert_eq!(TicketColumns::cell(&record, 7), None);
    }
}
