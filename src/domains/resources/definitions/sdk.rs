//! `zkverify://sdk` resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

pub struct SdkResource;

impl ResourceDefinition for SdkResource {
    const URI: &'static str = "zkverify://sdk";
    const NAME: &'static str = "zkVerify SDK";
    const DESCRIPTION: &'static str = "zkVerify SDK documentation and examples";

    fn content() -> ResourceContent {
        ResourceContent::Docs("sdk")
    }
}
