//! Best-effort extraction of network endpoints from documentation text.
//!
//! The scan is line based and intentionally shallow: a line mentioning
//! `wss://` is taken as the WebSocket RPC, a line with `https://` and `rpc` as
//! the HTTP RPC, and the line *after* any mention of "explorer" or "faucet" as
//! that link. Later matches overwrite earlier ones. It can and will pick up
//! prose; callers label the output as coming from the docs.

/// Placeholder shown for fields the scan did not find.
pub const NOT_FOUND: &str = "See docs";

/// Endpoint fields scraped from a network information page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkEndpoints {
    pub rpc_ws: Option<String>,
    pub rpc_http: Option<String>,
    pub explorer: Option<String>,
    pub faucet: Option<String>,
}

impl NetworkEndpoints {
    /// Scan `text` line by line.
    pub fn extract(text: &str) -> Self {
        let lines: Vec<&str> = text.split('\n').collect();
        let mut found = Self::default();

        for (i, line) in lines.iter().enumerate() {
            let lower = line.to_lowercase();
            let next = lines.get(i + 1).map(|l| l.trim().to_string());

            if lower.contains("wss://") {
                found.rpc_ws = Some(line.trim().to_string());
            }
            if lower.contains("https://") && lower.contains("rpc") {
                found.rpc_http = Some(line.trim().to_string());
            }
            if lower.contains("explorer") && next.is_some() {
                found.explorer = next.clone();
            }
            if lower.contains("faucet") && next.is_some() {
                found.faucet = next;
            }
        }

        found
    }

    /// True when no field was found.
    pub fn is_empty(&self) -> bool {
        self.rpc_ws.is_none()
            && self.rpc_http.is_none()
            && self.explorer.is_none()
            && self.faucet.is_none()
    }

    /// Template variables, with [`NOT_FOUND`] for missing fields.
    pub fn template_vars(&self) -> [(&'static str, &str); 4] {
        [
            ("rpc_ws", self.rpc_ws.as_deref().unwrap_or(NOT_FOUND)),
            ("rpc_http", self.rpc_http.as_deref().unwrap_or(NOT_FOUND)),
            ("explorer", self.explorer.as_deref().unwrap_or(NOT_FOUND)),
            ("faucet", self.faucet.as_deref().unwrap_or(NOT_FOUND)),
        ]
    }
}
