use super::*;
use crate::model::tiers::{BadgeClass, Tier};

const VALIDATION: &str = "\
Here is the validation of your idea.

**Overall Score: 68/100**

**1. Market Opportunity: 82/100**
- Large and growing segment
- Market Size: $4.5B

**2. Competition: 55/100**
1. Crowded incumbents
2. Low switching costs

Key Strengths
• Experienced founders
• Early traction

Recommendations
- Narrow the initial niche
Note:

This is a long sentence that happens to mention: pricing strategy and more context beyond thirty characters";

fn run(text: &str) -> Analysis {
    analyze(&AnalysisText::from_raw(text), &ParserProfile::default_v1())
}

#[test]
fn test_full_validation_text() {
    let a = run(VALIDATION);

    assert_eq!(
        a.formatted.headings,
        vec![
            "Overall Score: 68/100",
            "1. Market Opportunity: 82/100",
            "2. Competition: 55/100",
            "Key Strengths",
            "Recommendations",
        ]
    );
    assert_eq!(
        a.formatted.points_for(0),
        ["Here is the validation of your idea."]
    );
    assert_eq!(
        a.formatted.points_for(1),
        ["Large and growing segment", "Market Size: $4.5B"]
    );
    assert_eq!(
        a.formatted.points_for(2),
        ["Crowded incumbents", "Low switching costs"]
    );

    assert_eq!(a.sections[1].heading, "1. Market Opportunity:");
    assert_eq!(a.sections[1].badge, Some(BadgeClass::Green));
    assert_eq!(a.sections[2].badge, Some(BadgeClass::Red));

    let verdict = a.verdict.as_ref().unwrap();
    assert_eq!(verdict.score.value(), 68);
    assert_eq!(verdict.tier, Tier::NeedsRefinement);

    assert!(a.table.contains(&TableRow::new("Market Size", "$4.5B")));
    assert!(a.paragraphs.iter().all(|p| !p.contains("Market Size")));
    assert!(
        a.paragraphs
            .iter()
            .any(|p| p.contains("happens to mention: pricing strategy"))
    );
    assert_eq!(a.stats.incomplete_key_values, 1);
    assert!(a.paragraphs.iter().any(|p| p.contains("Note:")));

    assert_eq!(a.stats.headings, 5);
    assert_eq!(a.stats.scored_headings, 3);
    assert_eq!(a.stats.points, a.formatted.total_points());
    assert_eq!(a.stats.paragraphs, a.paragraphs.len());
}

#[test]
fn test_headings_and_table_are_independent() {
    let a = run("**Market Size: 70/100**\nTeam Size: 4");
    assert_eq!(a.formatted.headings.len(), 1);
    assert_eq!(
        a.table,
        vec![
            TableRow::new("Market Size", "70/100"),
            TableRow::new("Team Size", "4"),
        ]
    );
    assert!(a.paragraphs.is_empty());
}

#[test]
fn test_unstructured_prose() {
    let a = run("Strong product fit. Clear differentiation. Needs faster execution.");
    assert!(a.formatted.headings.is_empty());
    assert!(a.sections.is_empty());
    assert!(a.verdict.is_none());
    assert!(a.table.is_empty());
    assert_eq!(a.paragraphs.len(), 3);
}

#[test]
fn test_crlf_input() {
    let a = run("**Summary**\r\n- one\r\n- two\r\n");
    assert_eq!(a.formatted.headings, vec!["Summary"]);
    assert_eq!(a.formatted.points_for(0), ["one", "two"]);
}

#[test]
fn test_degenerate_inputs_do_not_panic() {
    for text in ["", "   ", "**", "****", ":", "::::", "\n\n\n", "**a", "1.", "-", "•"] {
        let a = run(text);
        assert!(a.formatted.points.len() <= a.formatted.headings.len());
    }
    assert_eq!(
        run("").stats,
        AnalysisStats {
            lines: 1,
            ..AnalysisStats::default()
        }
    );
}
