mod common;

use common::fixtures::{site, weak_score};
use common::pdf_assertions::info_string;
use common::{DOMAIN, GeneratedPdf, TestResult, default_pipeline, generate};
use geo_report::{FullReport, PipelineBuilder};
use std::fs;

#[test]
fn test_document_metadata() -> TestResult {
    let (report, pdf) = generate(&site(), &weak_score())?;
    assert_eq!(
        info_string(&pdf.doc, "Title").as_deref(),
        Some("GEO Audit Report: acme-rockets.example")
    );
    assert_eq!(info_string(&pdf.doc, "Author").as_deref(), Some("GEO Report Generator"));
    assert_eq!(
        info_string(&pdf.doc, "Subject").as_deref(),
        Some("AI citation readiness audit for acme-rockets.example")
    );
    assert_eq!(info_string(&pdf.doc, "ReportId"), Some(report.report_id.clone()));

    let created = info_string(&pdf.doc, "CreationDate").ok_or("missing CreationDate")?;
    assert!(created.starts_with("D:"), "{created}");
    assert!(created.ends_with('Z'), "{created}");
    assert_eq!(created.len(), "D:20240101000000Z".len());
    Ok(())
}

#[test]
fn test_generate_to_file() -> TestResult {
    let pipeline = default_pipeline()?;
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("audit.pdf");

    let report = pipeline.generate_to_file(&site(), &weak_score(), DOMAIN, &path)?;
    let bytes = fs::read(&path)?;
    assert!(bytes.starts_with(b"%PDF-1.7"));

    let pdf = GeneratedPdf::from_bytes(bytes)?;
    assert_pdf_min_pages!(pdf, 6);
    assert_eq!(pdf.page_count(), pipeline.layout_trace(&report).page_count());
    Ok(())
}

#[test]
fn test_report_json_round_trip() -> TestResult {
    let pipeline = default_pipeline()?;
    let report = pipeline.synthesize(&site(), &weak_score(), DOMAIN)?;
    let json = serde_json::to_string_pretty(&report)?;
    assert!(json.contains("\"schema_version\": \"1.0\""));
    assert!(json.contains("\"status\": \"needs_work\""));
    assert!(json.contains("\"target_score\": 100"));

    let parsed: FullReport = serde_json::from_str(&json)?;
    assert_eq!(parsed, report);
    Ok(())
}

#[test]
fn test_config_file() -> TestResult {
    common::init_logging();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("render.json");
    fs::write(&path, r#"{ "pageSize": "Legal", "bodyFontSize": 11 }"#)?;

    let pipeline = PipelineBuilder::new().with_config_file(&path)?.build()?;
    assert_eq!(pipeline.config().body_font_size, 11.0);
    let report = pipeline.synthesize(&[], &weak_score(), DOMAIN)?;
    let pdf = GeneratedPdf::from_bytes(pipeline.render_to_vec(&report)?)?;
    assert_pdf_page_size!(pdf, 1, 612.0, 1008.0);
    Ok(())
}

#[test]
fn test_missing_config_file_is_an_error() {
    let result = PipelineBuilder::new().with_config_file("/nonexistent/render.json");
    assert!(result.is_err());
}
