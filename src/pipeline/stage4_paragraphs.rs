const PARAGRAPH_BREAK: &str = "\n\n";
const SENTENCE_BREAK: &str = ". ";

pub fn segment_paragraphs(text: &str) -> Vec<String> {
    let paragraphs: Vec<String> = text
        .split(PARAGRAPH_BREAK)
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string())
        .collect();

    if paragraphs.len() > 1 {
        return paragraphs;
    }
    let Some(blob) = paragraphs.into_iter().next() else {
        return Vec::new();
    };
    split_sentences(&blob)
}

fn split_sentences(blob: &str) -> Vec<String> {
    let fragments: Vec<&str> = blob
        .split(SENTENCE_BREAK)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    let last = fragments.len().saturating_sub(1);

    fragments
        .into_iter()
        .enumerate()
        .map(|(i, fragment)| {
            // The final fragment keeps whatever ending it was written with.
            if i < last && !has_terminal_punctuation(fragment) {
                format!("{fragment}.")
            } else {
                fragment.to_string()
            }
        })
        .collect()
}

fn has_terminal_punctuation(s: &str) -> bool {
    s.ends_with(['.', '!', '?'])
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_paragraphs.rs"]
mod tests;
