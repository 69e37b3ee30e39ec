use super::DocumentType;

pub const SYSTEM_INSTRUCTION: &str = "あなたは医療文書を正確に構造化するアシスタントです。\
OCRテキストを読みやすく整理し、必要な情報を適切に抽出してください。\
出力は読みやすい日本語テキストで、見出しや箇条書きを適宜用いてください。";

const CUSTOM_PROMPT_LEAD_IN: &str = "以下のOCRテキストを処理してください:";

/// Where the user instruction came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSource {
    Template(DocumentType),
    Custom(String),
}

impl PromptSource {
    /// A non-empty custom prompt wins; the document type is then ignored.
    pub fn select(document_type: &str, custom_prompt: Option<&str>) -> Self {
        match custom_prompt {
            Some(custom) if !custom.is_empty() => PromptSource::Custom(custom.to_string()),
            _ => PromptSource::Template(DocumentType::from_label(document_type)),
        }
    }
}

/// System and user messages for one model call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

impl Prompt {
    pub fn build(source: &PromptSource, ocr_text: &str) -> Self {
        let user = match source {
            PromptSource::Custom(custom) => {
                format!("{custom}\n\n{CUSTOM_PROMPT_LEAD_IN}\n\n{ocr_text}")
            }
            PromptSource::Template(document_type) => {
                format!("{}\n\n{ocr_text}", document_type.template())
            }
        };

        Self {
            system: SYSTEM_INSTRUCTION.to_string(),
            user,
        }
    }
}
