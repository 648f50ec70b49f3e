use super::*;

#[test]
fn test_explicit_paragraphs_returned_as_is() {
    let text = "First paragraph here. Still first.\n\nSecond paragraph\n\n\n\nThird one";
    assert_eq!(
        segment_paragraphs(text),
        vec![
            "First paragraph here. Still first.",
            "Second paragraph",
            "Third one"
        ]
    );
}

#[test]
fn test_sentence_fallback() {
    let text = "Strong product fit. Clear differentiation. Needs faster execution.";
    let out = segment_paragraphs(text);
    assert_eq!(
        out,
        vec![
            "Strong product fit.",
            "Clear differentiation.",
            "Needs faster execution."
        ]
    );
    assert!(out.iter().all(|s| s.ends_with('.')));
}

#[test]
fn test_existing_punctuation_not_doubled() {
    let text = "Is the market ready?. Absolutely!. Ship it";
    assert_eq!(
        segment_paragraphs(text),
        vec!["Is the market ready?", "Absolutely!", "Ship it"]
    );

    let text = "Wow. Ready? Go!";
    assert_eq!(segment_paragraphs(text), vec!["Wow.", "Ready? Go!"]);
}

#[test]
fn test_final_fragment_kept_as_written() {
    let text = "Solid unit economics. Weak distribution";
    assert_eq!(
        segment_paragraphs(text),
        vec!["Solid unit economics.", "Weak distribution"]
    );
}

#[test]
fn test_single_sentence() {
    assert_eq!(segment_paragraphs("  One idea only.  "), vec!["One idea only."]);
}

#[test]
fn test_blank_input() {
    assert!(segment_paragraphs("").is_empty());
    assert!(segment_paragraphs("   \n\n  \n\n\t").is_empty());
}

#[test]
fn test_non_empty_input_gives_output() {
    for text in ["a", "a. b", "x\n\ny", ". ", "word. "] {
        let out = segment_paragraphs(text);
        assert!(!out.is_empty(), "no output for {text:?}");
    }
}
