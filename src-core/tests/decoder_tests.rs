use std::path::PathBuf;

use exodetect_core::decoder::{decode, CellValue};
use exodetect_core::format::format_cell;
use exodetect_core::preview::Pagination;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_koi_fixture_decodes_all_rows() {
    let text = std::fs::read_to_string(fixture_path("koi_sample.csv")).expect("Failed to read fixture");
    let dataset = decode(&text).expect("Failed to decode fixture");

    assert_eq!(dataset.columns.len(), 15, "Expected 15 KOI columns, got {:?}", dataset.columns);
    assert_eq!(dataset.len(), 5);

    for (i, record) in dataset.records.iter().enumerate() {
        assert_eq!(record.len(), 15, "Row {} should have every column", i);
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, dataset.columns.iter().map(String::as_str).collect::<Vec<_>>());
    }

    let first = &dataset.records[0];
    assert_eq!(first.get("kepid"), Some(&CellValue::Number(10797460.0)));
    assert_eq!(first.get("kepler_name"), Some(&CellValue::Text("Kepler-227 b".to_string())));
    assert_eq!(format_cell(first.get("koi_period")), "9.4880");

    // Unconfirmed candidates have no Kepler name
    assert_eq!(dataset.records[2].get("kepler_name"), Some(&CellValue::Text(String::new())));
}

#[test]
fn test_fixture_previews_on_one_page() {
    let text = std::fs::read_to_string(fixture_path("koi_sample.csv")).unwrap();
    let dataset = decode(&text).unwrap();
    let cursor = Pagination::new(dataset.len(), 20);

    assert_eq!(cursor.total_pages(), 1);
    assert_eq!(cursor.slice(&dataset.records).len(), 5);
}

#[test]
fn test_large_file_paginates_in_order() {
    let mut text = String::from("kepid,koi_score\n");
    for i in 0..47 {
        text.push_str(&format!("{},{}\n", 1000 + i, i as f64 / 100.0));
    }
    let dataset = decode(&text).unwrap();
    let mut cursor = Pagination::new(dataset.len(), 20);
    assert_eq!(cursor.total_pages(), 3);

    let mut seen = Vec::new();
    loop {
        for record in cursor.slice(&dataset.records) {
            seen.push(record.get("kepid").and_then(CellValue::as_f64).unwrap() as u32);
        }
        if !cursor.has_next() {
            break;
        }
        cursor = cursor.next();
    }
    assert_eq!(seen, (1000..1047).collect::<Vec<u32>>());
}
