/// Free-form analysis text as produced upstream, held as an ordered list of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisText {
    pub raw: String,
    pub lines: Vec<String>,
}

impl AnalysisText {
    pub fn from_raw(raw: &str) -> Self {
        let raw = normalize_newlines(raw);
        let lines = raw.split('\n').map(|l| l.to_string()).collect();
        Self { raw, lines }
    }

    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }

    pub fn non_blank_lines(&self) -> usize {
        self.lines.iter().filter(|l| !l.trim().is_empty()).count()
    }
}

pub fn normalize_newlines(raw: &str) -> String {
    if raw.contains('\r') {
        raw.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        raw.to_string()
    }
}
