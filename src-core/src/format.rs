//! Text formatting shared by the preview and results tables.

use crate::decoder::CellValue;

/// Placeholder for missing values.
pub const MISSING: &str = "N/A";

/// Numbers to 4 decimal places, text unchanged, missing cells as `N/A`.
pub fn format_cell(value: Option<&CellValue>) -> String {
    match value {
        Some(CellValue::Number(n)) => format!("{:.4}", n),
        Some(CellValue::Text(s)) => s.clone(),
        None => MISSING.to_string(),
    }
}

/// Per-row confidence percentage. Zero is shown as missing, the same as the
/// service omitting it.
pub fn format_confidence(confidence: Option<f64>) -> String {
    match confidence {
        Some(c) if c != 0.0 && c.is_finite() => format!("{:.1}%", c),
        _ => MISSING.to_string(),
    }
}

/// A 0-1 fraction as a percentage, e.g. `0.95` -> `95.0%`.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

pub fn display_name(name: Option<&str>) -> String {
    match name {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => MISSING.to_string(),
    }
}

pub fn format_file_size(bytes: usize) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(Some(&CellValue::Number(9.48803557))), "9.4880");
        assert_eq!(format_cell(Some(&CellValue::Number(5778.0))), "5778.0000");
        assert_eq!(format_cell(Some(&CellValue::Text("K00752.01".into()))), "K00752.01");
        assert_eq!(format_cell(Some(&CellValue::Text(String::new()))), "");
        assert_eq!(format_cell(None), "N/A");
    }

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(Some(97.26)), "97.3%");
        assert_eq!(format_confidence(Some(12.0)), "12.0%");
        assert_eq!(format_confidence(Some(0.0)), "N/A");
        assert_eq!(format_confidence(None), "N/A");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.95), "95.0%");
        assert_eq!(format_percent(0.1), "10.0%");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Some("Kepler-227 b")), "Kepler-227 b");
        assert_eq!(display_name(Some("")), "N/A");
        assert_eq!(display_name(None), "N/A");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0.00 KB");
        assert_eq!(format_file_size(1536), "1.50 KB");
    }
}
