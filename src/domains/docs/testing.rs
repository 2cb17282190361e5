//! Test double for [`DocSource`].

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::catalog::Catalog;
use super::fetcher::DocSource;
use super::resolver::ContentResolver;
use crate::core::config::DocsConfig;

/// Answers from a fixed URL-to-text map and records every request in order.
/// Unscripted URLs yield an empty string.
#[derive(Default)]
pub struct ScriptedSource {
    responses: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: impl Into<String>, text: impl Into<String>) -> Self {
        self.responses.insert(url.into(), text.into());
        self
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocSource for ScriptedSource {
    async fn fetch(&self, url: &str, _timeout: Duration) -> String {
        self.calls.lock().unwrap().push(url.to_string());
        self.responses.get(url).cloned().unwrap_or_default()
    }
}

/// A resolver over the default catalog backed by `source`.
pub fn resolver_with(source: Arc<ScriptedSource>) -> ContentResolver {
    ContentResolver::new(source, Catalog::from_config(&DocsConfig::default()))
}

/// Text of the first content block of a tool result.
pub fn result_text(result: &CallToolResult) -> String {
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.clone())
        .unwrap_or_default()
}
