//! `zkverify://tutorials` resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

pub struct TutorialsResource;

impl ResourceDefinition for TutorialsResource {
    const URI: &'static str = "zkverify://tutorials";
    const NAME: &'static str = "zkVerify Tutorials";
    const DESCRIPTION: &'static str = "Step-by-step tutorials for zkVerify";

    fn content() -> ResourceContent {
        ResourceContent::Docs("tutorials")
    }
}
