use serde::Serialize;

/// Aggregated OCR output. `tables` and `checkboxes` are reserved and always empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub text_blocks: Vec<String>,
    pub tables: Vec<serde_json::Value>,
    pub checkboxes: Vec<serde_json::Value>,
}

impl AnalysisResult {
    pub fn from_text_blocks(text_blocks: Vec<String>) -> Self {
        Self {
            text_blocks,
            ..Self::default()
        }
    }
}

/// Lines recognized on one page, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzedPage {
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzedDocument {
    pub pages: Vec<AnalyzedPage>,
}

impl AnalyzedDocument {
    /// Non-empty line texts in page-then-line order.
    pub fn into_lines(self) -> impl Iterator<Item = String> {
        self.pages
            .into_iter()
            .flat_map(|page| page.lines)
            .filter(|line| !line.is_empty())
    }
}
