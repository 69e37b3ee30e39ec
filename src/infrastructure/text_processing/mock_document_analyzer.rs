use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{DocumentAnalyzer, DocumentAnalyzerError};
use crate::domain::{AnalyzedDocument, AnalyzedPage};

/// Returns canned pages per URL; URLs listed in `failing` error out.
#[derive(Default)]
pub struct MockDocumentAnalyzer {
    documents: HashMap<String, Vec<Vec<String>>>,
    failing: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl MockDocumentAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, url: &str, pages: Vec<Vec<&str>>) -> Self {
        let pages = pages
            .into_iter()
            .map(|lines| lines.into_iter().map(String::from).collect())
            .collect();
        self.documents.insert(url.to_string(), pages);
        self
    }

    pub fn with_failure(mut self, url: &str) -> Self {
        self.failing.push(url.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl DocumentAnalyzer for MockDocumentAnalyzer {
    async fn analyze(&self, url: &str) -> Result<AnalyzedDocument, DocumentAnalyzerError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(url.to_string());
        }

        if self.failing.iter().any(|u| u == url) {
            return Err(DocumentAnalyzerError::AnalysisFailed(format!(
                "InvalidContent: could not read {url}"
            )));
        }

        let pages = self
            .documents
            .get(url)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(|lines| AnalyzedPage { lines })
            .collect();

        Ok(AnalyzedDocument { pages })
    }
}
