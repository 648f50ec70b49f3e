use super::*;
use crate::model::text::AnalysisText;
use crate::pipeline::analyze;
use crate::report::text::render_report_text;

fn report_for(text: &str) -> AnalysisReport {
    let profile = ParserProfile::default_v1();
    let analysis = analyze(&AnalysisText::from_raw(text), &profile);
    AnalysisReport::build(
        &analysis,
        &profile,
        ToolInfo {
            name: "narrative-struct".to_string(),
            version: "test".to_string(),
        },
        InputInfo {
            source: "inline".to_string(),
            bytes: text.len(),
        },
    )
}

#[test]
fn test_tsv_escaping() {
    assert_eq!(escape_tsv_field("plain"), "plain");
    assert_eq!(escape_tsv_field("a\tb"), "a\\tb");
    assert_eq!(escape_tsv_field("a\nb"), "a\\nb");
    assert_eq!(escape_tsv_field("C:\\tmp"), "C:\\\\tmp");
}

#[test]
fn test_table_tsv_rows_in_order() {
    let rows = vec![
        TableRow::new("Market Size", "$4.5B"),
        TableRow::new("Growth", "12%\tCAGR"),
    ];
    assert_eq!(
        render_table_tsv(&rows),
        "key\tvalue\nMarket Size\t$4.5B\nGrowth\t12%\\tCAGR\n"
    );
    assert_eq!(render_table_tsv(&[]), "key\tvalue\n");
}

#[test]
fn test_text_report_for_empty_input() {
    let text = render_report_text(&report_for(""));
    assert!(text.contains("Overall score: not present"));
    assert!(text.contains("No headings detected."));
    assert!(text.contains("No key-value lines detected."));
    assert!(text.contains("No narrative text."));
    assert!(text.contains("Lines: 1 (0 non-blank)"));
}

#[test]
fn test_text_report_aligns_keys() {
    let text = render_report_text(&report_for("Size: 10\nGrowth Rate: 5%"));
    assert!(text.contains("Size:        10\n"));
    assert!(text.contains("Growth Rate: 5%\n"));
}

#[test]
fn test_text_report_lists_points() {
    let text = render_report_text(&report_for(
        "**Overall: 90/100**\nKey Challenges\n- hiring\n- capital",
    ));
    assert!(text.contains("Overall score: 90/100 (stated)"));
    assert!(text.contains("Tier: strong potential [green]"));
    assert!(text.contains("[2] Key Challenges\n    - hiring\n    - capital\n"));
}
