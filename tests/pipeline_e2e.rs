//! End-to-end tests for the report pipeline: spreadsheet in, rendered document out.

use report_synth::{run, RunConfig};
use rust_xlsxwriter::Workbook;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

const TEXT_TEMPLATE: &str = "\
{% for page in pages %}== Page {{ page.pageIndex }} ==
{% for row in page.rows %}{{ row.q4 }}|{{ row.q1 }}|{{ row.q2 }}|{{ row.q3 }}
{% endfor %}{% endfor %}";

fn write_spreadsheet(dir: &Path, count: usize) -> PathBuf {
    let path = dir.join("ids.xlsx");
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in ["Name", "Region", "Owner", "Code"].iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }
    for i in 0..count {
        let row = i as u32 + 1;
        worksheet.write_string(row, 0, format!("item {i}")).unwrap();
        worksheet.write_string(row, 3, format!("ID-{i:03}")).unwrap();
    }

    workbook.save(&path).unwrap();
    path
}

fn write_docx_template(dir: &Path) -> PathBuf {
    let path = dir.join("template.docx");
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::<()>::default().compression_method(CompressionMethod::Deflated);

    writer.start_file("[Content_Types].xml", options).unwrap();
    writer.write_all(b"<Types/>").unwrap();
    writer.start_file("word/document.xml", options).unwrap();
    writer
        .write_all(
            b"<w:document><w:body>{% for row in rows %}<w:p><w:t>{{ row.q4 }}</w:t></w:p>{% endfor %}\
{% for page in pagesRest %}<w:p><w:t>page {{ page.pageIndex }}</w:t></w:p>{% endfor %}</w:body></w:document>",
        )
        .unwrap();

    let bytes = writer.finish().unwrap().into_inner();
    std::fs::write(&path, bytes).unwrap();
    path
}

fn config(dir: &Path, template: PathBuf, spreadsheet: PathBuf) -> RunConfig {
    let output_dir = dir.join("out");
    std::fs::create_dir_all(&output_dir).unwrap();
    RunConfig {
        template,
        spreadsheet,
        output_base: "report".to_string(),
        output_dir,
        seed: Some(42),
        dry_run: false,
    }
}

fn output_files(config: &RunConfig) -> Vec<PathBuf> {
    std::fs::read_dir(&config.output_dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect()
}

#[test]
fn test_text_template_report() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("report.txt");
    std::fs::write(&template, TEXT_TEMPLATE).unwrap();
    let spreadsheet = write_spreadsheet(dir.path(), 25);
    let config = config(dir.path(), template, spreadsheet);

    let summary = run(&config).unwrap();

    assert_eq!(summary.identifier_count, 25);
    assert_eq!(summary.pagination.page_count, 2);
    assert_eq!(summary.pagination.last_page_row_count, 5);

    let output = summary.output.unwrap();
    let name = output.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("report-"), "{name}");
    assert!(name.ends_with(".txt"), "{name}");
    assert_eq!(output_files(&config), vec![output.clone()]);

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains("== Page 1 =="));
    assert!(content.contains("== Page 2 =="));
    for i in 0..25 {
        assert!(content.contains(&format!("ID-{i:03}|")), "missing ID-{i:03}");
    }
    let page_two = content.split("== Page 2 ==").nth(1).unwrap();
    assert_eq!(page_two.lines().filter(|l| l.contains('|')).count(), 5);
}

#[test]
fn test_docx_template_report() {
    let dir = TempDir::new().unwrap();
    let template = write_docx_template(dir.path());
    let spreadsheet = write_spreadsheet(dir.path(), 41);
    let config = config(dir.path(), template, spreadsheet);

    let summary = run(&config).unwrap();
    assert_eq!(summary.pagination.page_count, 3);

    let output = summary.output.unwrap();
    assert_eq!(output.extension().unwrap(), "docx");

    let bytes = std::fs::read(&output).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut document = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut document)
        .unwrap();

    // Legacy `rows` view covers the first page only
    assert!(document.contains("<w:t>ID-000</w:t>"));
    assert!(document.contains("<w:t>ID-019</w:t>"));
    assert!(!document.contains("<w:t>ID-020</w:t>"));
    assert!(document.contains("<w:t>page 2</w:t>"));
    assert!(document.contains("<w:t>page 3</w:t>"));
    assert!(!document.contains("<w:t>page 1</w:t>"));
}

#[test]
fn test_same_seed_same_data() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("report.txt");
    std::fs::write(&template, TEXT_TEMPLATE).unwrap();
    let spreadsheet = write_spreadsheet(dir.path(), 30);
    let config = RunConfig {
        dry_run: true,
        ..config(dir.path(), template, spreadsheet)
    };

    let first = run(&config).unwrap();
    let second = run(&config).unwrap();
    assert_eq!(first.payload, second.payload);
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("report.txt");
    std::fs::write(&template, TEXT_TEMPLATE).unwrap();
    let spreadsheet = write_spreadsheet(dir.path(), 3);
    let config = RunConfig {
        dry_run: true,
        ..config(dir.path(), template, spreadsheet)
    };

    let summary = run(&config).unwrap();
    assert!(summary.output.is_none());
    assert_eq!(summary.payload.rows().len(), 3);
    assert!(summary.payload.pages_rest().is_empty());
    assert!(output_files(&config).is_empty());

    let json = serde_json::to_value(&summary.payload).unwrap();
    assert_eq!(json["rows"][2]["q4"], "ID-002");
}

#[test]
fn test_missing_template_fails_before_reading_spreadsheet() {
    let dir = TempDir::new().unwrap();
    let config = config(
        dir.path(),
        dir.path().join("missing.docx"),
        dir.path().join("also-missing.xlsx"),
    );

    let err = run(&config).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("template"), "{message}");
    assert!(message.contains("missing.docx"), "{message}");
    assert!(!message.contains("also-missing.xlsx"), "{message}");
    assert!(output_files(&config).is_empty());
}

#[test]
fn test_invalid_spreadsheet_writes_no_output() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("report.txt");
    std::fs::write(&template, TEXT_TEMPLATE).unwrap();
    let spreadsheet = write_spreadsheet(dir.path(), 0);
    let config = config(dir.path(), template, spreadsheet);

    let err = run(&config).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("spreadsheet"), "{message}");
    assert!(output_files(&config).is_empty());
}

#[test]
fn test_broken_template_writes_no_output() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("report.txt");
    std::fs::write(&template, "{% for page in pages %} never closed").unwrap();
    let spreadsheet = write_spreadsheet(dir.path(), 5);
    let config = config(dir.path(), template, spreadsheet);

    assert!(run(&config).is_err());
    assert!(output_files(&config).is_empty());
}
