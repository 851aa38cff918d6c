//! Integration tests for the batch pipeline.
//!
//! Each test builds a raw-data tree in a private temp directory, runs
//! `process_raw_data` over it, and asserts on the returned record set and
//! run summary. Fixture contents mirror the vendor dialects seen in real
//! scrape exports: 3-stage and 2-stage option rows, puzzle forms, pet-mat
//! gauges, a ragged file, and a labeled free-text export.

use std::fs;
use std::path::{Path, PathBuf};

use followscope_pipeline::{export_records, process_raw_data, PipelineError};

/// Creates a fresh fixture root for one test, wiping any previous run.
fn fixture_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("followscope-pipeline-{name}"));
    fs::remove_dir_all(&root).ok();
    fs::create_dir_all(&root).expect("failed to create fixture root");
    root
}

fn write_file(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("fixture path has a parent"))
        .expect("failed to create fixture directory");
    fs::write(&path, contents).expect("failed to write fixture file");
}

/// Builds the full mixed-vendor raw tree: two roll-mat files, a pet-mat
/// file, a puzzle-mat file, one ragged file, and one labeled free-text
/// export.
fn build_full_tree(root: &Path) {
    write_file(
        root,
        "raw/roll/브랜드A 층간소음 롤매트_옵션가격_2025-07-10-05-52.csv",
        "상품명,옵션1,옵션2,옵션3,최종가격\n\
         매트,베이직,두께1.7cm / 폭80cm,1m50cm,\"32,000\"\n\
         매트,,,,\n\
         매트,그레이,단품,,\"12,000\"\n\
         매트,,400x110x4cm,,\"99,000\"\n",
    );
    write_file(
        root,
        "raw/roll/파크론 층간소음 매트_옵션가격_2025-07-11-01-00.csv",
        "옵션1,옵션2,옵션3,최종가격\n\
         (1.7cm) 러그아이보리,100cm,,\"20,000\"\n\
         베이직,베이지스캐터/15mm(리뉴얼),,\"27,000\"\n",
    );
    write_file(
        root,
        "raw/pet/딩굴 강아지매트_옵션가격_2025-07-12-02-30.csv",
        "옵션1,옵션2,옵션3,최종가격\n\
         딩굴,0.6cm(6T),폭 110cm x 100cm,\"39,000\"\n",
    );
    write_file(
        root,
        "raw/puzzle/티지오 퍼즐매트_옵션가격_2025-07-13-03-00.csv",
        "옵션1,옵션2,최종가격\n\
         A타입(100x100x2.5cmx1장),단품,\"15,000\"\n\
         PU_B타입(50x50x4장),(25mm) 50x50 4장,\"30,000\"\n",
    );
    // Ragged record: must fail the file, not the batch.
    write_file(
        root,
        "raw/roll/깨진파일_옵션가격_2025-07-14-04-00.csv",
        "옵션1,옵션2,최종가격\n베이직,110x50\n",
    );
    // No option columns: falls back to labeled free-text extraction.
    write_file(
        root,
        "raw/folder/수출목록_2025-07-15-05-00.csv",
        "item,details\n매트,\"두께 1.7cm 폭 80cm 길이 4m 가격 89,000\"\n",
    );
}

#[test]
fn full_run_counts_and_sorts_records() {
    let root = fixture_root("full-run");
    build_full_tree(&root);

    let output = process_raw_data(&root.join("raw")).unwrap();

    assert_eq!(output.summary.files_discovered, 6);
    assert_eq!(output.summary.files_processed, 5);
    assert_eq!(output.summary.files_failed, 1);
    assert_eq!(output.summary.rows_read, 10);
    assert_eq!(output.summary.rows_skipped, 3);
    assert_eq!(output.summary.records_produced, 7);
    assert_eq!(output.records.len(), 7);

    let keys: Vec<(&str, f64)> = output
        .records
        .iter()
        .map(|r| (r.competitor.as_str(), r.thickness_cm))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("딩굴", 0.6),
            ("브랜드A", 1.7),
            ("브랜드A", 4.0),
            ("수출목록", 1.7),
            ("티지오매트", 2.5),
            ("티지오매트", 2.5),
            ("파크론", 1.7),
        ]
    );

    fs::remove_dir_all(&root).ok();
}

#[test]
fn derived_metrics_follow_dimension_identities() {
    let root = fixture_root("metrics");
    write_file(
        &root,
        "raw/roll/브랜드A 층간소음 롤매트_옵션가격_2025-07-10-05-52.csv",
        "옵션1,옵션2,옵션3,최종가격\n베이직,두께1.7cm / 폭80cm,1m50cm,\"32,000\"\n",
    );

    let output = process_raw_data(&root.join("raw")).unwrap();
    let record = &output.records[0];

    assert_eq!(record.competitor, "브랜드A");
    assert_eq!(record.design, "베이직");
    assert!((record.thickness_cm - 1.7).abs() < f64::EPSILON);
    assert!((record.width_cm - 80.0).abs() < f64::EPSILON);
    assert!((record.length_cm - 150.0).abs() < f64::EPSILON);
    assert!((record.area_cm2 - record.width_cm * record.length_cm).abs() < 1e-9);
    assert!(
        (record.volume_cm3 - record.thickness_cm * record.width_cm * record.length_cm).abs()
            < 1e-9
    );
    assert!(
        (record.price_per_volume.unwrap() - record.price / record.volume_cm3).abs() < 1e-12
    );
    assert_eq!(record.category, "롤매트");

    fs::remove_dir_all(&root).ok();
}

#[test]
fn pet_mats_priced_per_meter_are_halved_to_the_50cm_standard() {
    let root = fixture_root("pet-halving");
    write_file(
        &root,
        "raw/pet/딩굴 강아지매트_옵션가격_2025-07-12-02-30.csv",
        "옵션1,옵션2,옵션3,최종가격\n딩굴,0.6cm(6T),폭 110cm x 100cm,\"39,000\"\n",
    );

    let output = process_raw_data(&root.join("raw")).unwrap();
    let record = &output.records[0];

    assert!((record.length_cm - 50.0).abs() < f64::EPSILON);
    assert!((record.price - 19500.0).abs() < f64::EPSILON);
    assert_eq!(record.category, "강아지매트");

    fs::remove_dir_all(&root).ok();
}

#[test]
fn vendor_fallback_length_applies_when_only_gauge_is_listed() {
    let root = fixture_root("fallback-length");
    write_file(
        &root,
        "raw/roll/파크론 층간소음 매트_옵션가격_2025-07-11-01-00.csv",
        "옵션1,옵션2,옵션3,최종가격\n(1.7cm) 러그아이보리,100cm,,\"20,000\"\n",
    );

    let output = process_raw_data(&root.join("raw")).unwrap();
    let record = &output.records[0];

    assert_eq!(record.competitor, "파크론");
    assert!((record.length_cm - 100.0).abs() < f64::EPSILON);
    assert!((record.width_cm - 100.0).abs() < f64::EPSILON);

    fs::remove_dir_all(&root).ok();
}

#[test]
fn long_rolls_are_recomposed_from_comparison_units() {
    let root = fixture_root("long-roll");
    write_file(
        &root,
        "raw/roll/브랜드A 층간소음 롤매트_옵션가격_2025-07-10-05-52.csv",
        "옵션1,옵션2,옵션3,최종가격\n,400x110x4cm,,\"99,000\"\n",
    );

    let output = process_raw_data(&root.join("raw")).unwrap();
    let record = &output.records[0];

    // 400 cm roll decomposes into 8 x 50 cm units and recomposes to 400 cm.
    assert!((record.length_cm - 400.0).abs() < f64::EPSILON);
    assert!((record.width_cm - 110.0).abs() < f64::EPSILON);
    assert!((record.thickness_cm - 4.0).abs() < f64::EPSILON);

    fs::remove_dir_all(&root).ok();
}

#[test]
fn labeled_free_text_files_are_extracted_without_option_columns() {
    let root = fixture_root("labeled-text");
    write_file(
        &root,
        "raw/folder/수출목록_2025-07-15-05-00.csv",
        "item,details\n매트,\"두께 1.7cm 폭 80cm 길이 4m 가격 89,000\"\n",
    );

    let output = process_raw_data(&root.join("raw")).unwrap();
    let record = &output.records[0];

    assert_eq!(record.competitor, "수출목록");
    assert!((record.thickness_cm - 1.7).abs() < f64::EPSILON);
    assert!((record.width_cm - 80.0).abs() < f64::EPSILON);
    assert!((record.length_cm - 400.0).abs() < f64::EPSILON);
    assert!((record.price - 89000.0).abs() < f64::EPSILON);
    assert_eq!(record.category, "폴더매트");

    fs::remove_dir_all(&root).ok();
}

#[test]
fn reruns_over_the_same_tree_are_identical() {
    let root = fixture_root("rerun");
    build_full_tree(&root);

    let first = process_raw_data(&root.join("raw")).unwrap();
    let second = process_raw_data(&root.join("raw")).unwrap();

    assert_eq!(first.records, second.records);
    assert_eq!(first.summary, second.summary);

    fs::remove_dir_all(&root).ok();
}

#[test]
fn missing_raw_directory_is_a_walk_error() {
    let root = fixture_root("missing-raw");
    let result = process_raw_data(&root.join("does-not-exist"));
    assert!(matches!(result, Err(PipelineError::WalkDir { .. })));
    fs::remove_dir_all(&root).ok();
}

#[test]
fn export_writes_sorted_csv_with_header() {
    let root = fixture_root("export");
    build_full_tree(&root);

    let output = process_raw_data(&root.join("raw")).unwrap();
    let out_path = root.join("processed/processed_data.csv");
    export_records(&output.records, &out_path).unwrap();

    let written = fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 1 + output.records.len());
    assert_eq!(
        lines[0],
        "competitor,design,thickness_cm,width_cm,length_cm,\
         area_cm2,volume_cm3,price,price_per_volume,category"
    );
    assert!(lines[1].starts_with("딩굴,딩굴,0.6,110.0,50.0"));
    assert!(lines[1].ends_with("강아지매트"));

    fs::remove_dir_all(&root).ok();
}
