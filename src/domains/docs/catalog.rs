//! Every content table the server serves, built once from configuration.

use std::time::Duration;

use super::fallback;
use super::resolver::{ContentSpec, ContentTable, MatchRule};
use crate::core::config::DocsConfig;

/// Resource keys; each is served as `zkverify://<key>`.
pub const RESOURCE_KEYS: [&str; 4] = ["overview", "architecture", "sdk", "tutorials"];

const SECTION_TRUNCATE_AT: usize = 5000;
const PROOF_SYSTEM_TRUNCATE_AT: usize = 2000;
const NETWORK_TRUNCATE_AT: usize = 1000;
const TUTORIAL_TRUNCATE_AT: usize = 3500;
const RELAYER_TRUNCATE_AT: usize = 3000;

/// All content tables plus the pages fetched outside of them.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub resources: ContentTable,
    pub sections: ContentTable,
    pub proof_systems: ContentTable,
    pub networks: ContentTable,
    pub tutorials: ContentTable,
    pub relayer: ContentTable,

    /// Probed to decide the freshness note on SDK snippets.
    pub sdk_docs_url: String,

    /// Probed to decide the data-source note on cost estimates.
    pub pricing_url: String,

    /// Timeout for the two probes above.
    pub probe_timeout: Duration,

    /// Documentation home page.
    pub home_url: String,
}

impl Catalog {
    pub fn from_config(docs: &DocsConfig) -> Self {
        let timeout = Duration::from_secs(docs.fetch_timeout_secs);

        Self {
            resources: resources(docs, timeout),
            sections: sections(docs),
            proof_systems: proof_systems(docs, timeout),
            networks: networks(docs, timeout),
            tutorials: tutorials(docs, timeout),
            relayer: relayer(docs, timeout),
            sdk_docs_url: docs.page("developers/zkverifyjs"),
            pricing_url: docs.page("overview/pricing"),
            probe_timeout: timeout,
            home_url: docs.base_url.clone(),
        }
    }
}

fn resources(docs: &DocsConfig, timeout: Duration) -> ContentTable {
    let sdk_fallback = format!(
        "# {{{{title}}}} (Cached)\n\n{{{{content}}}}\n\n⚠️ Note: Using cached data. For latest SDK docs, visit {}",
        docs.base_url
    );
    let tutorials_fallback = format!(
        "# {{{{title}}}} (Cached)\n\n{{{{content}}}}\n\n⚠️ Note: Using cached data. For latest tutorials, visit {}",
        docs.base_url
    );

    ContentTable::new("resource", docs.base_url.clone())
        .with_spec(
            ContentSpec::new("overview", [docs.page("")])
                .with_title("zkVerify Overview")
                .with_fallback(fallback::OVERVIEW)
                .timeout(timeout),
        )
        .with_spec(
            ContentSpec::new("architecture", [docs.page("architecture/core-architecture")])
                .with_title("zkVerify Architecture")
                .with_fallback(fallback::ARCHITECTURE)
                .timeout(timeout),
        )
        .with_spec(
            ContentSpec::new(
                "sdk",
                [docs.page("developers/zkverifyjs"), docs.page("overview/getting-started")],
            )
            .with_title("zkVerify SDK Documentation")
            .with_fallback(fallback::SDK)
            .fallback_template(sdk_fallback)
            .truncate_at(3500)
            .timeout(timeout),
        )
        .with_spec(
            ContentSpec::new("tutorials", [docs.page("tutorials"), docs.page("developers/tutorials")])
                .with_title("zkVerify Tutorials")
                .with_fallback(fallback::TUTORIALS)
                .fallback_template(tutorials_fallback)
                .truncate_at(3500)
                .timeout(timeout),
        )
}

fn sections(docs: &DocsConfig) -> ContentTable {
    const SECTIONS: [(&str, &str); 5] = [
        ("overview", ""),
        ("architecture", "architecture/core-architecture"),
        ("developers", "overview/getting-started/connect-a-wallet"),
        ("node-operators", "node-operators/getting_started"),
        ("testnet", "incentivizedtestnet/getting_started"),
    ];
    let available = SECTIONS.map(|(key, _)| key).join(", ");
    let timeout = Duration::from_secs(docs.section_timeout_secs);

    let live = "✅ Documentation for '{{key}}' (Live from Docs):

{{content}}

Source: {{source_url}}
Status: Successfully fetched from live documentation";
    let unavailable = format!(
        "⚠️ Could not fetch live documentation for '{{{{key}}}}'\n\n\
         Please visit the documentation directly: {{{{primary_url}}}}\n\n\
         Or try another section: {}",
        available
    );

    SECTIONS
        .iter()
        .fold(ContentTable::new("section", docs.base_url.clone()), |table, (key, path)| {
            table.with_spec(
                ContentSpec::new(*key, [docs.page(path)])
                    .truncate_at(SECTION_TRUNCATE_AT)
                    .timeout(timeout)
                    .live_template(live)
                    .unavailable_template(unavailable.clone()),
            )
        })
}

fn proof_systems(docs: &DocsConfig, timeout: Duration) -> ContentTable {
    let live = format!(
        "✅ {{{{title}}}} Proof System (Live from Docs)\n\n\
         {{{{content}}}}\n\n\
         Source: {{{{source_url}}}}\n\
         Status: ✅ Live data\n\n\
         For complete details, visit: {}",
        docs.base_url
    );

    fallback::PROOF_SYSTEMS.iter().fold(
        ContentTable::new("proof type", docs.base_url.clone()),
        |table, card| {
            table.with_spec(
                ContentSpec::new(
                    card.key,
                    [
                        docs.page(&format!("proof-systems/{}", card.key)),
                        docs.page(&format!("developers/proof-systems/{}", card.key)),
                        docs.page("architecture/proof-systems"),
                        docs.page("overview/supported-proofs"),
                    ],
                )
                .with_title(card.key.to_uppercase())
                .with_match(MatchRule::Mentions(card.key.to_string()))
                .with_fallback(card.render())
                .fallback_template("{{content}}")
                .truncate_at(PROOF_SYSTEM_TRUNCATE_AT)
                .timeout(timeout)
                .live_template(live.clone()),
            )
        },
    )
}

fn networks(docs: &DocsConfig, timeout: Duration) -> ContentTable {
    let candidates = [
        docs.page("overview/getting-started/connect-a-wallet"),
        docs.page("developers/rpc-endpoints"),
        docs.page("incentivizedtestnet/getting_started"),
        docs.page("overview/network-information"),
    ];
    let live = format!(
        "✅ zkVerify {{{{title}}}} (Live from Docs)

**Network Status**: 🟢 Active

**RPC Endpoints**:
- WebSocket: {{{{rpc_ws}}}}
- HTTP: {{{{rpc_http}}}}

**Block Explorer**: {{{{explorer}}}}

**Faucet**: {{{{faucet}}}}

**Additional Information**:
{{{{content}}}}

Source: {{{{source_url}}}}
Status: ✅ Live data

For complete network details, visit: {}",
        docs.base_url
    );

    let spec = |key: &str, title: &str, card: &str| {
        ContentSpec::new(key, candidates.clone())
            .with_title(title)
            .with_match(MatchRule::NetworkEndpoints)
            .with_fallback(card)
            .fallback_template("{{content}}")
            .truncate_at(NETWORK_TRUNCATE_AT)
            .timeout(timeout)
            .live_template(live.clone())
    };

    ContentTable::new("network", docs.base_url.clone())
        .with_spec(spec("testnet", "Testnet", fallback::TESTNET))
        .with_spec(spec("mainnet", "Mainnet", fallback::MAINNET))
}

fn tutorials(docs: &DocsConfig, timeout: Duration) -> ContentTable {
    let tutorials: [(&str, &str, Vec<String>, &str); 4] = [
        (
            "first-proof",
            "Submit Your First Proof",
            vec![
                docs.page("overview/getting-started/submit-proof"),
                docs.page("tutorials/submit-proofs"),
            ],
            fallback::TUTORIAL_FIRST_PROOF,
        ),
        (
            "zkverifyjs",
            "Using zkverifyjs",
            vec![docs.page("developers/zkverifyjs"), docs.page("tutorials/zkverifyjs")],
            fallback::TUTORIAL_ZKVERIFYJS,
        ),
        (
            "relayer",
            "Submitting Proofs Through the Relayer",
            vec![
                docs.page("overview/getting-started/relayer"),
                docs.page("tutorials/relayer"),
            ],
            fallback::TUTORIAL_RELAYER,
        ),
        (
            "run-a-node",
            "Running a zkVerify Node",
            vec![
                docs.page("node-operators/getting_started"),
                docs.page("node-operators/run-a-node"),
            ],
            fallback::TUTORIAL_RUN_A_NODE,
        ),
    ];

    let live = "# Tutorial: {{title}} (Live from Docs)

{{content}}

Source: {{source_url}}
Last fetched: Live data";
    let cached = format!(
        "# Tutorial: {{{{title}}}} (Cached)\n\n{{{{content}}}}\n\n\
         ⚠️ Note: Using cached data. For latest tutorials, visit {}",
        docs.page("tutorials")
    );

    tutorials.into_iter().fold(
        ContentTable::new("tutorial", docs.base_url.clone()),
        |table, (key, title, mut urls, steps)| {
            urls.push(docs.page("tutorials"));
            table.with_spec(
                ContentSpec::new(key, urls)
                    .with_title(title)
                    .with_fallback(steps)
                    .truncate_at(TUTORIAL_TRUNCATE_AT)
                    .timeout(timeout)
                    .live_template(live)
                    .fallback_template(cached.clone()),
            )
        },
    )
}

fn relayer(docs: &DocsConfig, timeout: Duration) -> ContentTable {
    let topics: [(&str, &str, &[&str], &str); 3] = [
        ("overview", "Relayer API Overview", &["relayer", "api"], fallback::RELAYER_OVERVIEW),
        (
            "submit-proof",
            "Relayer API: Submit Proof",
            &["submit-proof", "submitproof", "submit proof"],
            fallback::RELAYER_SUBMIT_PROOF,
        ),
        (
            "job-status",
            "Relayer API: Job Status",
            &["job-status", "jobstatus", "job status"],
            fallback::RELAYER_JOB_STATUS,
        ),
    ];
    let urls = [docs.relayer_docs_url.clone(), docs.relayer_testnet_docs_url.clone()];

    topics.into_iter().fold(
        ContentTable::new("topic", docs.relayer_docs_url.clone()),
        |table, (key, title, terms, summary)| {
            table.with_spec(
                ContentSpec::new(key, urls.clone())
                    .with_title(title)
                    .with_match(MatchRule::MentionsAny(
                        terms.iter().map(|t| t.to_string()).collect(),
                    ))
                    .with_fallback(summary)
                    .truncate_at(RELAYER_TRUNCATE_AT)
                    .timeout(timeout),
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_config(&DocsConfig::default())
    }

    #[test]
    fn test_table_keys() {
        let catalog = catalog();
        assert_eq!(catalog.resources.keys(), RESOURCE_KEYS.to_vec());
        assert_eq!(
            catalog.sections.keys(),
            vec!["overview", "architecture", "developers", "node-operators", "testnet"]
        );
        assert_eq!(catalog.proof_systems.keys(), vec!["groth16", "fflonk", "risc0"]);
        assert_eq!(catalog.networks.keys(), vec!["testnet", "mainnet"]);
        assert_eq!(
            catalog.tutorials.keys(),
            vec!["first-proof", "zkverifyjs", "relayer", "run-a-node"]
        );
        assert_eq!(catalog.relayer.keys(), vec!["overview", "submit-proof", "job-status"]);
    }

    #[test]
    fn test_sections_are_live_only_with_long_timeout() {
        let catalog = catalog();
        let spec = catalog.sections.get("developers").unwrap();
        assert!(spec.fallback_text.is_none());
        assert_eq!(spec.timeout, Duration::from_secs(15));
        assert_eq!(spec.truncate_at, 5000);
        assert_eq!(
            spec.candidate_urls,
            vec!["https://docs.zkverify.io/overview/getting-started/connect-a-wallet"]
        );
        assert_eq!(
            catalog.sections.get("overview").unwrap().candidate_urls,
            vec!["https://docs.zkverify.io/"]
        );
    }

    #[test]
    fn test_proof_system_candidates_in_order() {
        let catalog = catalog();
        let spec = catalog.proof_systems.get("fflonk").unwrap();
        assert_eq!(
            spec.candidate_urls,
            vec![
                "https://docs.zkverify.io/proof-systems/fflonk",
                "https://docs.zkverify.io/developers/proof-systems/fflonk",
                "https://docs.zkverify.io/architecture/proof-systems",
                "https://docs.zkverify.io/overview/supported-proofs",
            ]
        );
        assert_eq!(spec.match_rule, Some(MatchRule::Mentions("fflonk".into())));
        assert_eq!(spec.truncate_at, 2000);
    }

    #[test]
    fn test_resource_limits() {
        let catalog = catalog();
        assert_eq!(catalog.resources.get("overview").unwrap().truncate_at, 3000);
        assert_eq!(catalog.resources.get("architecture").unwrap().truncate_at, 3000);
        assert_eq!(catalog.resources.get("sdk").unwrap().truncate_at, 3500);
        assert_eq!(catalog.resources.get("tutorials").unwrap().candidate_urls.len(), 2);
    }

    #[test]
    fn test_tutorial_chains_end_at_tutorials_index() {
        let catalog = catalog();
        for key in catalog.tutorials.keys() {
            let spec = catalog.tutorials.get(key).unwrap();
            assert_eq!(
                spec.candidate_urls.last().map(String::as_str),
                Some("https://docs.zkverify.io/tutorials")
            );
            assert!(spec.fallback_text.is_some());
        }
    }

    #[test]
    fn test_relayer_tries_mainnet_then_testnet() {
        let catalog = catalog();
        let spec = catalog.relayer.get("job-status").unwrap();
        assert_eq!(
            spec.candidate_urls,
            vec![
                "https://relayer-api.horizenlabs.io/docs",
                "https://relayer-api-testnet.horizenlabs.io/docs",
            ]
        );
    }

    #[test]
    fn test_base_url_override_flows_into_tables() {
        let docs = DocsConfig {
            base_url: "https://mirror.example/".to_string(),
            ..DocsConfig::default()
        };
        let catalog = Catalog::from_config(&docs);
        assert_eq!(catalog.pricing_url, "https://mirror.example/overview/pricing");
        assert_eq!(
            catalog.networks.get("testnet").unwrap().candidate_urls[1],
            "https://mirror.example/developers/rpc-endpoints"
        );
    }
}
