//! `zkverify://overview` resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

pub struct OverviewResource;

impl ResourceDefinition for OverviewResource {
    const URI: &'static str = "zkverify://overview";
    const NAME: &'static str = "zkVerify Overview";
    const DESCRIPTION: &'static str = "Complete overview of zkVerify platform and ecosystem";

    fn content() -> ResourceContent {
        ResourceContent::Docs("overview")
    }
}
