//! Verification cost estimates: zkVerify versus native on-chain verification.
//!
//! All numbers come from a static per-proof table in USD. The pricing page is
//! only consulted to label where the estimate comes from.

use std::num::IntErrorKind;
use thiserror::Error;

/// Requests above this many proofs are clamped.
pub const MAX_PROOFS: u64 = 10_000;

/// Data-source note when the pricing page talks about costs.
pub const SOURCE_DOCUMENTED: &str = "based on latest documentation (approximated)";

/// Data-source note otherwise.
pub const SOURCE_CACHED: &str = "cached estimates";

const PRICING_TERMS: [&str; 3] = ["cost", "price", "fee"];

/// Invalid proof counts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CountError {
    #[error("Invalid number: {0}. Please provide a valid integer.")]
    NotANumber(String),

    #[error("Number of proofs must be at least 1")]
    TooFew,
}

/// Parse a proof count. Blank means one; large values are clamped to
/// [`MAX_PROOFS`].
pub fn parse_proof_count(raw: &str) -> Result<u64, CountError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(1);
    }

    let count: i128 = match trimmed.parse() {
        Ok(count) => count,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => return Ok(MAX_PROOFS),
            IntErrorKind::NegOverflow => return Err(CountError::TooFew),
            _ => return Err(CountError::NotANumber(raw.to_string())),
        },
    };

    if count < 1 {
        return Err(CountError::TooFew);
    }
    Ok(count.min(MAX_PROOFS as i128) as u64)
}

/// Pick the data-source note for the fetched pricing page text.
pub fn data_source(pricing_text: &str) -> &'static str {
    let lower = pricing_text.to_lowercase();
    if PRICING_TERMS.iter().any(|t| lower.contains(t)) {
        SOURCE_DOCUMENTED
    } else {
        SOURCE_CACHED
    }
}

/// Per-proof cost on one chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainRate {
    pub name: &'static str,
    pub per_proof: f64,
}

/// Per-proof costs for one proof system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostTable {
    pub proof_system: &'static str,
    pub zkverify: f64,
    pub chains: [ChainRate; 3],
}

const fn table(proof_system: &'static str, rates: [f64; 4]) -> CostTable {
    CostTable {
        proof_system,
        zkverify: rates[0],
        chains: [
            ChainRate { name: "Ethereum", per_proof: rates[1] },
            ChainRate { name: "Polygon", per_proof: rates[2] },
            ChainRate { name: "Arbitrum", per_proof: rates[3] },
        ],
    }
}

pub const COST_TABLES: [CostTable; 3] = [
    table("groth16", [0.01, 0.50, 0.05, 0.08]),
    table("fflonk", [0.02, 0.80, 0.08, 0.12]),
    table("risc0", [0.05, 2.00, 0.20, 0.30]),
];

impl CostTable {
    /// Look up a proof system, ignoring case and surrounding whitespace.
    pub fn for_proof_system(name: &str) -> Option<&'static CostTable> {
        let name = name.trim().to_lowercase();
        COST_TABLES.iter().find(|t| t.proof_system == name)
    }

    /// Known proof systems, comma separated.
    pub fn available() -> String {
        COST_TABLES
            .iter()
            .map(|t| t.proof_system)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Compare totals for `count` proofs.
    pub fn compare(&self, count: u64) -> CostComparison {
        let n = count as f64;
        let zkverify_total = self.zkverify * n;

        let chains = self
            .chains
            .iter()
            .map(|rate| {
                let total = rate.per_proof * n;
                let saved = total - zkverify_total;
                let savings_pct = if total > 0.0 { saved / total * 100.0 } else { 0.0 };
                ChainCost {
                    name: rate.name,
                    per_proof: rate.per_proof,
                    total,
                    saved,
                    savings_pct,
                }
            })
            .collect();

        CostComparison {
            proof_system: self.proof_system,
            count,
            zkverify_per_proof: self.zkverify,
            zkverify_total,
            chains,
        }
    }
}

/// Totals for one chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainCost {
    pub name: &'static str,
    pub per_proof: f64,
    pub total: f64,
    pub saved: f64,
    pub savings_pct: f64,
}

/// The result of [`CostTable::compare`].
#[derive(Debug, Clone, PartialEq)]
pub struct CostComparison {
    pub proof_system: &'static str,
    pub count: u64,
    pub zkverify_per_proof: f64,
    pub zkverify_total: f64,
    pub chains: Vec<ChainCost>,
}

impl CostComparison {
    /// Render the comparison as a text report pointing readers at `docs_url`.
    pub fn report(&self, data_source: &str, docs_url: &str) -> String {
        let rule = "━".repeat(36);
        let mut out = format!(
            "💰 Cost Comparison for {} {} proof(s):\n\n{}\n",
            self.count,
            self.proof_system.to_uppercase(),
            rule
        );

        out.push_str(&format!(
            "{:<20} ${:.2} ✅\n",
            "**zkVerify**:", self.zkverify_total
        ));
        for chain in &self.chains {
            out.push_str(&format!(
                "{:<20} ${:.2} ({:.0}% more expensive)\n",
                format!("**{}**:", chain.name),
                chain.total,
                chain.savings_pct
            ));
        }
        out.push_str(&rule);

        out.push_str("\n\n💵 **Savings with zkVerify**:\n");
        for chain in &self.chains {
            out.push_str(&format!(
                "- {:<13} ${:.2} saved ({:.0}% reduction)\n",
                format!("vs {}:", chain.name),
                chain.saved,
                chain.savings_pct
            ));
        }

        out.push_str("\n📊 **Per-Proof Cost Breakdown**:\n");
        out.push_str(&format!(
            "- {:<11} ${:.4} USD\n",
            "zkVerify:", self.zkverify_per_proof
        ));
        for chain in &self.chains {
            out.push_str(&format!(
                "- {:<11} ${:.4} USD\n",
                format!("{}:", chain.name),
                chain.per_proof
            ));
        }

        out.push_str(
            "\n⚡ **Additional Benefits on zkVerify**:\n\
             - Faster finality (6 second blocks)\n\
             - Native proof aggregation\n\
             - Multi-proof-system support\n\
             - Simplified integration\n",
        );

        if let Some(reference) = self.chains.first() {
            out.push_str(&format!(
                "\n💡 **Recommendation**: For {} proofs, zkVerify saves ${:.2} compared to {} - that's a {:.0}% cost reduction!\n",
                self.count, reference.saved, reference.name, reference.savings_pct
            ));
        }

        out.push_str(&format!(
            "\n📝 **Data Source**: {}\n\
             ⚠️ Note: Costs are approximate and may vary based on gas prices, proof complexity, and network conditions.\n\n\
             For current pricing information, visit: {}",
            data_source, docs_url
        ));
        out
    }
}
