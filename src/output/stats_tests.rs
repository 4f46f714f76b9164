use super::*;
use crate::scanner::FileDescriptor;

fn result(path: &str, language: &str, code: usize, comment: usize, blank: usize) -> ScanResult {
    ScanResult::new(
        FileDescriptor::new(path, language),
        LineStats {
            code,
            blank,
            comment,
        },
    )
}

fn sample() -> ProjectStatistics {
    ProjectStatistics::new(vec![
        result("src/a.go", "Go", 10, 2, 1),
        result("web/app.ts", "TypeScript", 30, 5, 4),
        result("src/b.go", "Go", 8, 0, 2),
    ])
}

#[test]
fn project_statistics_totals() {
    let stats = sample();

    assert_eq!(stats.total_files, 3);
    assert_eq!(stats.totals.code, 48);
    assert_eq!(stats.totals.comment, 7);
    assert_eq!(stats.totals.blank, 7);
    assert_eq!(stats.totals.total_lines(), 48);
}

#[test]
fn languages_grouped_in_first_seen_order() {
    let stats = sample();
    let names: Vec<&str> = stats.languages.iter().map(|l| l.name.as_str()).collect();

    assert_eq!(names, vec!["Go", "TypeScript"]);
    assert_eq!(stats.languages[0].files, 2);
    assert_eq!(stats.languages[0].stats.code, 18);
}

#[test]
fn empty_statistics() {
    let stats = ProjectStatistics::new(vec![]);

    assert_eq!(stats.total_files, 0);
    assert!(stats.languages.is_empty());
    assert_eq!(stats.totals, LineStats::new());
}

#[test]
fn sort_by_code_descending() {
    let stats = sample().with_sort(SortKey::Code);
    assert_eq!(stats.languages[0].name, "TypeScript");
}

#[test]
fn sort_by_files_descending() {
    let stats = sample().with_sort(SortKey::Files);
    assert_eq!(stats.languages[0].name, "Go");
}

#[test]
fn sort_by_name_ascending() {
    let stats = ProjectStatistics::new(vec![
        result("z.rs", "Rust", 1, 0, 0),
        result("a.c", "C", 1, 0, 0),
    ])
    .with_sort(SortKey::Name);

    assert_eq!(stats.languages[0].name, "C");
}

#[test]
fn sort_ties_broken_by_name() {
    let stats = ProjectStatistics::new(vec![
        result("z.rs", "Rust", 5, 0, 0),
        result("a.c", "C", 5, 0, 0),
    ])
    .with_sort(SortKey::Code);

    assert_eq!(stats.languages[0].name, "C");
}

#[test]
fn sort_key_from_str() {
    assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::Name);
    assert_eq!("comments".parse::<SortKey>().unwrap(), SortKey::Comment);
    assert_eq!("Blank".parse::<SortKey>().unwrap(), SortKey::Blank);
    assert!("size".parse::<SortKey>().is_err());
}

#[test]
fn text_formatter_summary() {
    let output = StatsTextFormatter::default().format(&sample()).unwrap();

    assert!(output.contains("Summary:"));
    assert!(output.contains("  Files: 3"));
    assert!(output.contains("  Code: 48"));
    assert!(output.contains("  Comments: 7"));
    assert!(!output.contains("src/a.go"));
}

#[test]
fn text_formatter_language_table() {
    let output = StatsTextFormatter::default().format(&sample()).unwrap();
    let go_row = output
        .lines()
        .find(|l| l.starts_with("Go "))
        .expect("Go row");

    let cells: Vec<&str> = go_row.split_whitespace().collect();
    assert_eq!(cells, vec!["Go", "2", "18", "2", "3"]);
}

#[test]
fn text_formatter_by_file() {
    let output = StatsTextFormatter::new(true).format(&sample()).unwrap();

    assert!(output.contains("src/a.go: 10 lines (code=10, comment=2, blank=1) [Go]"));
}

#[test]
fn text_formatter_empty() {
    let output = StatsTextFormatter::new(true)
        .format(&ProjectStatistics::default())
        .unwrap();

    assert!(output.starts_with("Summary:"));
    assert!(output.contains("  Files: 0"));
}

#[test]
fn json_formatter_structure() {
    let output = StatsJsonFormatter.format(&sample()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["total_files"], 3);
    assert_eq!(parsed["summary"]["code"], 48);
    assert_eq!(parsed["languages"][1]["name"], "TypeScript");
    assert_eq!(parsed["languages"][1]["comment"], 5);
    assert_eq!(parsed["files"][2]["path"], "src/b.go");
    assert_eq!(parsed["files"][2]["language"], "Go");
}
