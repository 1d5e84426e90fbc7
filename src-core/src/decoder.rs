//! Delimited-text decoder for uploaded observation files.
//!
//! Deliberately simple: lines are split on `\n`, cells on `,`. Quoted fields
//! are not understood, so a comma inside quotes shifts the following columns.

use tracing::info;

use crate::error::DashboardError;

/// A single decoded cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Trim `raw` and store it as a number when it parses as a finite one.
    /// `0x`, `0o` and `0b` integer literals are accepted too.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let number = parse_radix_literal(trimmed).or_else(|| trimmed.parse::<f64>().ok());
        match number {
            Some(n) if !trimmed.is_empty() && n.is_finite() => CellValue::Number(n),
            _ => CellValue::Text(trimmed.to_string()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }
}

/// One data row, keyed by column name in header order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    cells: Vec<(String, CellValue)>,
}

impl Record {
    /// Insert a cell. A repeated column keeps its original position and takes
    /// the new value.
    pub fn insert(&mut self, column: &str, value: CellValue) {
        match self.cells.iter_mut().find(|(name, _)| name == column) {
            Some(slot) => slot.1 = value,
            None => self.cells.push((column.to_string(), value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The decoded contents of a file: column names plus one record per data line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Unsigned `0x1A` / `0o17` / `0b101` literals. Signs are not allowed.
fn parse_radix_literal(s: &str) -> Option<f64> {
    let (radix, digits) = match s.get(..2)? {
        "0x" | "0X" => (16, &s[2..]),
        "0o" | "0O" => (8, &s[2..]),
        "0b" | "0B" => (2, &s[2..]),
        _ => return None,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u128::from_str_radix(digits, radix).ok().map(|n| n as f64)
}

fn is_content_line(line: &str) -> bool {
    !line.trim().is_empty() && !line.starts_with('#')
}

/// Decode raw file text into a [`Dataset`].
///
/// A leading byte order mark is dropped. Blank lines and lines starting with
/// `#` are skipped. The first remaining
/// line is the header row. Values beyond the header width are dropped;
/// columns beyond a short row's width are left out of that record.
pub fn decode(text: &str) -> Result<Dataset, DashboardError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split('\n').filter(|line| is_content_line(line));

    let header_line = lines.next().ok_or(DashboardError::EmptyFile)?;
    let headers: Vec<String> = header_line
        .split(',')
        .map(|h| h.trim().to_string())
        .collect();

    let mut columns: Vec<String> = Vec::with_capacity(headers.len());
    for h in &headers {
        if !columns.contains(h) {
            columns.push(h.clone());
        }
    }

    let records: Vec<Record> = lines
        .map(|line| {
            let mut record = Record::default();
            for (header, value) in headers.iter().zip(line.split(',')) {
                record.insert(header, CellValue::parse(value));
            }
            record
        })
        .collect();

    info!("Decoded {} records with {} columns", records.len(), columns.len());
    Ok(Dataset { columns, records })
}

/// Decode file bytes, replacing invalid UTF-8 sequences.
pub fn decode_bytes(bytes: &[u8]) -> Result<Dataset, DashboardError> {
    decode(&String::from_utf8_lossy(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keys_follow_header_order() {
        let ds = decode("kepid,koi_period,kepoi_name\n10797460,9.488,K00752.01\n").unwrap();
        assert_eq!(ds.len(), 1);
        let record = &ds.records[0];
        assert_eq!(record.len(), 3);
        assert_eq!(
            record.keys().collect::<Vec<_>>(),
            vec!["kepid", "koi_period", "kepoi_name"]
        );
    }

    #[test]
    fn test_numeric_and_text_cells() {
        let ds = decode("a,b,c,d\n 42 , 1e-3 ,K00752.01,  \n").unwrap();
        let r = &ds.records[0];
        assert_eq!(r.get("a"), Some(&CellValue::Number(42.0)));
        assert_eq!(r.get("b"), Some(&CellValue::Number(0.001)));
        assert_eq!(r.get("c"), Some(&CellValue::Text("K00752.01".to_string())));
        assert_eq!(r.get("d"), Some(&CellValue::Text(String::new())));
    }

    #[test]
    fn test_non_finite_stays_text() {
        let ds = decode("x,y,z\ninf,NaN,-infinity\n").unwrap();
        let r = &ds.records[0];
        assert_eq!(r.get("x"), Some(&CellValue::Text("inf".to_string())));
        assert_eq!(r.get("y"), Some(&CellValue::Text("NaN".to_string())));
        assert_eq!(r.get("z"), Some(&CellValue::Text("-infinity".to_string())));
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let text = "# KOI table export\n# columns follow\n\nkepid,koi_prad\n   \n1,2.26\n# trailing note\n2,3.1\n";
        let ds = decode(text).unwrap();
        assert_eq!(ds.columns, vec!["kepid", "koi_prad"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[1].get("kepid"), Some(&CellValue::Number(2.0)));
    }

    #[test]
    fn test_indented_hash_is_data() {
        let ds = decode("name\n  #1 candidate\n").unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(
            ds.records[0].get("name"),
            Some(&CellValue::Text("#1 candidate".to_string()))
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let ds = decode("a,b\r\n1,x\r\n").unwrap();
        assert_eq!(ds.columns, vec!["a", "b"]);
        assert_eq!(ds.records[0].get("b"), Some(&CellValue::Text("x".to_string())));
    }

    #[test]
    fn test_short_row_leaves_columns_absent() {
        let ds = decode("a,b,c\n1,2\n").unwrap();
        let r = &ds.records[0];
        assert_eq!(r.len(), 2);
        assert!(r.get("c").is_none());
    }

    #[test]
    fn test_long_row_drops_excess_values() {
        let ds = decode("a,b\n1,2,3,4\n").unwrap();
        assert_eq!(ds.records[0].len(), 2);
    }

    #[test]
    fn test_quoted_comma_shifts_columns() {
        let ds = decode("name,period\n\"Kepler-22, b\",289.9\n").unwrap();
        let r = &ds.records[0];
        assert_eq!(r.get("name"), Some(&CellValue::Text("\"Kepler-22".to_string())));
        assert_eq!(r.get("period"), Some(&CellValue::Text("b\"".to_string())));
    }

    #[test]
    fn test_duplicate_header_keeps_first_position() {
        let ds = decode("a,b,a\n1,2,3\n").unwrap();
        assert_eq!(ds.columns, vec!["a", "b"]);
        let r = &ds.records[0];
        assert_eq!(r.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(r.get("a"), Some(&CellValue::Number(3.0)));
    }

    #[test]
    fn test_header_only_file() {
        let ds = decode("kepid,koi_period\n").unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.columns.len(), 2);
    }

    #[test]
    fn test_empty_input_is_error() {
        assert!(matches!(decode(""), Err(DashboardError::EmptyFile)));
        assert!(matches!(decode("# only a comment\n\n"), Err(DashboardError::EmptyFile)));
    }

    #[test]
    fn test_decode_bytes_replaces_invalid_utf8() {
        let ds = decode_bytes(b"name\nK\xff1\n").unwrap();
        assert_eq!(
            ds.records[0].get("name"),
            Some(&CellValue::Text("K\u{fffd}1".to_string()))
        );
    }

    #[test]
    fn test_byte_order_mark_is_dropped() {
        let ds = decode_bytes(b"\xEF\xBB\xBF# KOI export\nkepid,koi_period\n1,2.5\n").unwrap();
        assert_eq!(ds.columns, vec!["kepid", "koi_period"]);
        assert_eq!(ds.len(), 1);

        let ds = decode_bytes(b"\xEF\xBB\xBFkepid,koi_period\n1,2.5\n").unwrap();
        assert_eq!(ds.columns, vec!["kepid", "koi_period"]);
        assert_eq!(ds.records[0].get("kepid"), Some(&CellValue::Number(1.0)));
    }

    #[test]
    fn test_radix_literals_are_numbers() {
        assert_eq!(CellValue::parse("0x1A"), CellValue::Number(26.0));
        assert_eq!(CellValue::parse(" 0o17 "), CellValue::Number(15.0));
        assert_eq!(CellValue::parse("0B101"), CellValue::Number(5.0));
        assert_eq!(CellValue::parse("0x"), CellValue::Text("0x".to_string()));
        assert_eq!(CellValue::parse("0xG1"), CellValue::Text("0xG1".to_string()));
        assert_eq!(CellValue::parse("-0x1A"), CellValue::Text("-0x1A".to_string()));
        assert_eq!(CellValue::parse("0x+1"), CellValue::Text("0x+1".to_string()));
        assert_eq!(CellValue::parse("0b12"), CellValue::Text("0b12".to_string()));
    }
}
