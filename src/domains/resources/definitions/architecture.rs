//! `zkverify://architecture` resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// Core architecture page: mainchain, verification pallets, aggregation
/// and settlement.
pub struct ArchitectureResource;

impl ResourceDefinition for ArchitectureResource {
    const URI: &'static str = "zkverify://architecture";
    const NAME: &'static str = "zkVerify Architecture";
    const DESCRIPTION: &'static str = "Detailed zkVerify architecture documentation";

    fn content() -> ResourceContent {
        ResourceContent::Docs("architecture")
    }
}
