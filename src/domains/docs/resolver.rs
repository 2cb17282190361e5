//! Live-fetch-with-fallback content resolution.
//!
//! A [`ContentTable`] maps logical keys to [`ContentSpec`]s. Resolving a key
//! tries the spec's candidate URLs strictly in order, accepts the first
//! non-empty text that satisfies the spec's [`MatchRule`], and renders it with
//! the live template. When nothing is accepted the curated fallback is
//! rendered instead, or, for live-only specs, a pointer to the primary URL.
//!
//! A spec without fallback text is live-only; a spec without candidate URLs
//! is static-only and never touches the network.

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, instrument};

use super::catalog::Catalog;
use super::fetcher::DocSource;
use super::network::NetworkEndpoints;
use super::template::Template;

/// Appended to live content cut at its spec's limit.
pub const TRUNCATION_MARKER: &str = "\n\n... (truncated)";

/// Prefix of every user-facing validation message.
pub const ERROR_MARKER: &str = "❌";

const DEFAULT_TRUNCATE_AT: usize = 3000;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_LIVE_TEMPLATE: &str = "# {{title}} (Live from Docs)

{{content}}

Source: {{source_url}}
Last fetched: Live data";

const DEFAULT_FALLBACK_TEMPLATE: &str = "# {{title}} (Cached)

{{content}}

⚠️ Note: Using cached data. Live fetch failed.";

const DEFAULT_UNAVAILABLE_TEMPLATE: &str = "⚠️ Could not fetch live documentation for '{{key}}'

Please visit the documentation directly: {{primary_url}}";

/// Extra acceptance test applied to non-empty fetched text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchRule {
    /// Text mentions the term, ignoring case.
    Mentions(String),

    /// Text mentions at least one of the terms, ignoring case.
    MentionsAny(Vec<String>),

    /// Text talks about RPC endpoints and the endpoint scan finds something.
    /// Accepted text also exposes `rpc_ws`, `rpc_http`, `explorer` and
    /// `faucet` to the live template.
    NetworkEndpoints,
}

impl MatchRule {
    /// Whether `text` is acceptable.
    pub fn matches(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        match self {
            Self::Mentions(term) => lower.contains(&term.to_lowercase()),
            Self::MentionsAny(terms) => terms.iter().any(|t| lower.contains(&t.to_lowercase())),
            Self::NetworkEndpoints => {
                (lower.contains("rpc") || lower.contains("endpoint"))
                    && !NetworkEndpoints::extract(text).is_empty()
            }
        }
    }
}

/// How a logical key is turned into text.
#[derive(Debug, Clone)]
pub struct ContentSpec {
    /// Lookup key, lowercase.
    pub key: String,

    /// Display name used by templates as `{{title}}`.
    pub title: String,

    /// Pages to try, most specific first.
    pub candidate_urls: Vec<String>,

    /// Acceptance test for fetched text.
    pub match_rule: Option<MatchRule>,

    /// Curated text used when no candidate is accepted.
    pub fallback_text: Option<String>,

    /// Maximum characters of live content.
    pub truncate_at: usize,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Rendered with `content`, `source_url`, `key`, `title`.
    pub live_template: Template,

    /// Rendered with `content` (the fallback text), `key`, `title`.
    pub fallback_template: Template,

    /// Rendered with `primary_url`, `key`, `title`.
    pub unavailable_template: Template,
}

impl ContentSpec {
    /// Create a live-only spec with default limits and templates.
    pub fn new<I, U>(key: impl Into<String>, candidate_urls: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<String>,
    {
        let key = key.into().to_lowercase();
        Self {
            title: key.clone(),
            key,
            candidate_urls: candidate_urls.into_iter().map(Into::into).collect(),
            match_rule: None,
            fallback_text: None,
            truncate_at: DEFAULT_TRUNCATE_AT,
            timeout: DEFAULT_TIMEOUT,
            live_template: Template::new(DEFAULT_LIVE_TEMPLATE),
            fallback_template: Template::new(DEFAULT_FALLBACK_TEMPLATE),
            unavailable_template: Template::new(DEFAULT_UNAVAILABLE_TEMPLATE),
        }
    }

    /// Create a static-only spec that always renders `fallback_text`.
    pub fn fixed(key: impl Into<String>, fallback_text: impl Into<String>) -> Self {
        Self::new(key, Vec::<String>::new()).with_fallback(fallback_text)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_match(mut self, rule: MatchRule) -> Self {
        self.match_rule = Some(rule);
        self
    }

    pub fn with_fallback(mut self, text: impl Into<String>) -> Self {
        self.fallback_text = Some(text.into());
        self
    }

    pub fn truncate_at(mut self, chars: usize) -> Self {
        self.truncate_at = chars;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn live_template(mut self, template: impl Into<Template>) -> Self {
        self.live_template = template.into();
        self
    }

    pub fn fallback_template(mut self, template: impl Into<Template>) -> Self {
        self.fallback_template = template.into();
        self
    }

    pub fn unavailable_template(mut self, template: impl Into<Template>) -> Self {
        self.unavailable_template = template.into();
        self
    }

    fn accepts(&self, text: &str) -> bool {
        !text.is_empty() && self.match_rule.as_ref().is_none_or(|rule| rule.matches(text))
    }

    fn render_live(&self, text: &str, url: &str) -> ResolvedContent {
        let endpoints = match self.match_rule {
            Some(MatchRule::NetworkEndpoints) => Some(NetworkEndpoints::extract(text)),
            _ => None,
        };
        let content = truncate(text, self.truncate_at);
        let mut vars = vec![
            ("key", self.key.as_str()),
            ("title", self.title.as_str()),
            ("content", content.as_ref()),
            ("source_url", url),
        ];
        if let Some(endpoints) = &endpoints {
            vars.extend(endpoints.template_vars());
        }

        ResolvedContent {
            body: self.live_template.render(&vars),
            source: ContentSource::Live,
            source_url: Some(url.to_string()),
        }
    }

    fn render_fallback(&self, fallback: &str) -> ResolvedContent {
        ResolvedContent {
            body: self.fallback_template.render(&[
                ("key", self.key.as_str()),
                ("title", self.title.as_str()),
                ("content", fallback),
            ]),
            source: ContentSource::Fallback,
            source_url: None,
        }
    }

    fn render_unavailable(&self, home_url: &str) -> ResolvedContent {
        let primary_url = self
            .candidate_urls
            .first()
            .map(String::as_str)
            .unwrap_or(home_url);
        ResolvedContent {
            body: self.unavailable_template.render(&[
                ("key", self.key.as_str()),
                ("title", self.title.as_str()),
                ("primary_url", primary_url),
            ]),
            source: ContentSource::Unavailable,
            source_url: None,
        }
    }
}

/// Cut `text` to at most `limit` characters, appending [`TRUNCATION_MARKER`]
/// when anything was removed.
pub fn truncate(text: &str, limit: usize) -> Cow<'_, str> {
    match text.char_indices().nth(limit) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], TRUNCATION_MARKER)),
    }
}

/// A named namespace of content specs.
#[derive(Debug, Clone)]
pub struct ContentTable {
    label: &'static str,
    home_url: String,
    specs: Vec<ContentSpec>,
}

impl ContentTable {
    /// Create an empty table. `label` names the key kind in messages
    /// ("section", "network"); `home_url` is shown when a spec has no URLs.
    pub fn new(label: &'static str, home_url: impl Into<String>) -> Self {
        Self {
            label,
            home_url: home_url.into(),
            specs: Vec::new(),
        }
    }

    pub fn with_spec(mut self, spec: ContentSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn home_url(&self) -> &str {
        &self.home_url
    }

    /// Keys in registration order.
    pub fn keys(&self) -> Vec<&str> {
        self.specs.iter().map(|s| s.key.as_str()).collect()
    }

    /// Look up a key, ignoring case and surrounding whitespace.
    pub fn get(&self, key: &str) -> Option<&ContentSpec> {
        let key = key.trim().to_lowercase();
        self.specs.iter().find(|s| s.key == key)
    }

    /// Look up a key, producing a validation error naming the valid keys.
    pub fn lookup(&self, key: &str) -> Result<&ContentSpec, ResolveError> {
        if key.trim().is_empty() {
            return Err(ResolveError::MissingKey {
                label: self.label,
                available: self.keys().join(", "),
            });
        }
        self.get(key).ok_or_else(|| ResolveError::UnknownKey {
            label: self.label,
            key: key.trim().to_string(),
            available: self.keys().join(", "),
        })
    }
}

/// Validation failures. Never caused by the network.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Please specify a {label} ({available})")]
    MissingKey {
        label: &'static str,
        available: String,
    },

    #[error("Unknown {label} '{key}'. Available: {available}")]
    UnknownKey {
        label: &'static str,
        key: String,
        available: String,
    },
}

impl ResolveError {
    /// The user-facing message, with the error marker.
    pub fn user_message(&self) -> String {
        format!("{} Error: {}", ERROR_MARKER, self)
    }
}

/// Where a resolved body came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    Live,
    Fallback,
    Unavailable,
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Live => "live",
            Self::Fallback => "fallback",
            Self::Unavailable => "unavailable",
        })
    }
}

/// The outcome of one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContent {
    pub body: String,
    pub source: ContentSource,
    pub source_url: Option<String>,
}

/// Resolves logical keys to rendered documentation text.
pub struct ContentResolver {
    source: Arc<dyn DocSource>,
    catalog: Catalog,
}

impl ContentResolver {
    pub fn new(source: Arc<dyn DocSource>, catalog: Catalog) -> Self {
        Self { source, catalog }
    }

    /// The content tables this resolver serves.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Fetch a single page through the underlying source.
    pub async fn fetch(&self, url: &str, timeout: Duration) -> String {
        self.source.fetch(url, timeout).await
    }

    /// Resolve `key` to text. Never fails: validation errors come back as
    /// messages starting with [`ERROR_MARKER`].
    pub async fn resolve(&self, table: &ContentTable, key: &str) -> String {
        match self.resolve_content(table, key).await {
            Ok(content) => content.body,
            Err(e) => e.user_message(),
        }
    }

    /// Resolve `key`, reporting where the content came from.
    #[instrument(skip(self, table), fields(table = table.label()))]
    pub async fn resolve_content(
        &self,
        table: &ContentTable,
        key: &str,
    ) -> Result<ResolvedContent, ResolveError> {
        let spec = match table.lookup(key) {
            Ok(spec) => spec,
            Err(e) => {
                debug!("Rejected key: {}", e);
                return Err(e);
            }
        };

        for url in &spec.candidate_urls {
            debug!("Trying {}", url);
            let text = self.source.fetch(url, spec.timeout).await;
            if spec.accepts(&text) {
                info!("Using live docs for '{}' from {}", spec.key, url);
                return Ok(spec.render_live(&text, url));
            }
            if !text.is_empty() {
                debug!("Content at {} did not match for '{}'", url, spec.key);
            }
        }

        Ok(match &spec.fallback_text {
            Some(fallback) => {
                info!("Using fallback data for '{}'", spec.key);
                spec.render_fallback(fallback)
            }
            None => {
                info!("No live or cached content for '{}'", spec.key);
                spec.render_unavailable(table.home_url())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::docs::testing::{ScriptedSource, resolver_with};

    fn chain_table() -> ContentTable {
        ContentTable::new("topic", "https://home.example/")
            .with_spec(
                ContentSpec::new("chain", ["https://a.example/", "https://b.example/", "https://c.example/"])
                    .with_fallback("static chain text")
                    .truncate_at(10),
            )
            .with_spec(ContentSpec::new("live-only", ["https://live.example/"]))
            .with_spec(ContentSpec::fixed("static", "always the same"))
            .with_spec(
                ContentSpec::new("picky", ["https://a.example/", "https://b.example/"])
                    .with_match(MatchRule::Mentions("Groth16".to_string())),
            )
    }

    #[tokio::test]
    async fn test_unknown_key_lists_keys_without_fetching() {
        let source = Arc::new(ScriptedSource::new());
        let resolver = resolver_with(source.clone());

        let out = resolver.resolve(&chain_table(), "nope").await;
        assert!(out.starts_with(ERROR_MARKER));
        assert!(out.contains("Unknown topic 'nope'"));
        assert!(out.contains("chain, live-only, static, picky"));
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_blank_key_is_validation_error() {
        let source = Arc::new(ScriptedSource::new());
        let resolver = resolver_with(source.clone());

        let err = resolver
            .resolve_content(&chain_table(), "   ")
            .await
            .unwrap_err();
        assert!(matches!(err, ResolveError::MissingKey { .. }));
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_key_lookup_ignores_case_and_whitespace() {
        let source = Arc::new(ScriptedSource::new());
        let resolver = resolver_with(source);

        let content = resolver
            .resolve_content(&chain_table(), "  STATIC ")
            .await
            .unwrap();
        assert_eq!(content.source, ContentSource::Fallback);
    }

    #[tokio::test]
    async fn test_first_candidate_short_circuits() {
        let source = Arc::new(
            ScriptedSource::new()
                .respond("https://a.example/", "from a")
                .respond("https://b.example/", "from b"),
        );
        let resolver = resolver_with(source.clone());

        let content = resolver
            .resolve_content(&chain_table(), "chain")
            .await
            .unwrap();
        assert_eq!(content.source, ContentSource::Live);
        assert_eq!(content.source_url.as_deref(), Some("https://a.example/"));
        assert!(content.body.contains("from a"));
        assert_eq!(source.calls(), vec!["https://a.example/"]);
    }

    #[tokio::test]
    async fn test_candidates_tried_in_order() {
        let source = Arc::new(ScriptedSource::new().respond("https://c.example/", "from c"));
        let resolver = resolver_with(source.clone());

        let content = resolver
            .resolve_content(&chain_table(), "chain")
            .await
            .unwrap();
        assert_eq!(content.source_url.as_deref(), Some("https://c.example/"));
        assert_eq!(
            source.calls(),
            vec!["https://a.example/", "https://b.example/", "https://c.example/"]
        );
    }

    #[tokio::test]
    async fn test_all_empty_with_fallback_is_fallback() {
        let source = Arc::new(ScriptedSource::new());
        let resolver = resolver_with(source.clone());

        let content = resolver
            .resolve_content(&chain_table(), "chain")
            .await
            .unwrap();
        assert_eq!(content.source, ContentSource::Fallback);
        assert!(content.body.contains("static chain text"));
        assert!(content.body.contains("Using cached data"));
        assert_eq!(source.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_fallback_is_never_truncated() {
        let source = Arc::new(ScriptedSource::new());
        let resolver = resolver_with(source);

        // truncate_at is 10 but the fallback text is longer.
        let content = resolver
            .resolve_content(&chain_table(), "chain")
            .await
            .unwrap();
        assert!(content.body.contains("static chain text"));
        assert!(!content.body.contains(TRUNCATION_MARKER));
    }

    #[tokio::test]
    async fn test_all_empty_without_fallback_is_unavailable() {
        let source = Arc::new(ScriptedSource::new());
        let resolver = resolver_with(source);

        let content = resolver
            .resolve_content(&chain_table(), "live-only")
            .await
            .unwrap();
        assert_eq!(content.source, ContentSource::Unavailable);
        assert!(content.body.contains("https://live.example/"));
    }

    #[tokio::test]
    async fn test_static_only_never_fetches() {
        let source = Arc::new(ScriptedSource::new());
        let resolver = resolver_with(source.clone());

        let content = resolver
            .resolve_content(&chain_table(), "static")
            .await
            .unwrap();
        assert_eq!(content.source, ContentSource::Fallback);
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_match_rule_skips_non_matching_pages() {
        let source = Arc::new(
            ScriptedSource::new()
                .respond("https://a.example/", "about plonk only")
                .respond("https://b.example/", "the groth16 verifier"),
        );
        let resolver = resolver_with(source.clone());

        let content = resolver
            .resolve_content(&chain_table(), "picky")
            .await
            .unwrap();
        assert_eq!(content.source_url.as_deref(), Some("https://b.example/"));
        assert_eq!(source.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_live_content_is_truncated_with_marker() {
        let source = Arc::new(ScriptedSource::new().respond("https://a.example/", "0123456789abcdef"));
        let resolver = resolver_with(source);

        let content = resolver
            .resolve_content(&chain_table(), "chain")
            .await
            .unwrap();
        assert!(content.body.contains(&format!("0123456789{}", TRUNCATION_MARKER)));
        assert!(!content.body.contains("abcdef"));
    }

    #[test]
    fn test_truncate_short_text_is_noop() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert!(matches!(truncate("short", 10), Cow::Borrowed(_)));
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let text = "ééééé-rest";
        let cut = truncate(text, 5);
        assert_eq!(cut, format!("ééééé{}", TRUNCATION_MARKER));
    }

    #[test]
    fn test_truncate_keeps_exact_prefix() {
        let text: String = "x".repeat(50);
        let cut = truncate(&text, 20);
        assert_eq!(cut.len(), 20 + TRUNCATION_MARKER.len());
        assert!(cut.starts_with(&"x".repeat(20)));
    }

    #[test]
    fn test_match_rules() {
        assert!(MatchRule::Mentions("RISC0".into()).matches("the risc0 zkvm"));
        assert!(!MatchRule::Mentions("fflonk".into()).matches("groth16"));
        assert!(MatchRule::MentionsAny(vec!["job".into(), "status".into()]).matches("Job id"));
        assert!(MatchRule::NetworkEndpoints.matches("RPC\nwss://node.example"));
        assert!(!MatchRule::NetworkEndpoints.matches("RPC nodes are great"));
        assert!(!MatchRule::NetworkEndpoints.matches("wss://node.example"));
    }

    #[tokio::test]
    async fn test_network_fallback_contains_testnet_rpc() {
        let source = Arc::new(ScriptedSource::new());
        let resolver = resolver_with(source.clone());
        let networks = &resolver.catalog().networks;

        let content = resolver.resolve_content(networks, "testnet").await.unwrap();
        assert_eq!(content.source, ContentSource::Fallback);
        assert!(content.body.contains("wss://testnet-rpc.zkverify.io"));
        assert_eq!(source.calls().len(), networks.get("testnet").unwrap().candidate_urls.len());
    }
}
