//! Resource definitions module.
//!
//! Each resource is defined in its own file with its URI, metadata and the
//! documentation key it resolves.

mod architecture;
mod overview;
mod sdk;
mod tutorials;

pub use architecture::ArchitectureResource;
pub use overview::OverviewResource;
pub use sdk::SdkResource;
pub use tutorials::TutorialsResource;

use super::service::ResourceContent;

/// URI scheme shared by every resource.
pub const URI_SCHEME: &str = "zkverify://";

/// Trait for resource definitions.
///
/// Each resource must implement this trait to provide its metadata and content.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str = "text/markdown";

    /// Get the content for this resource.
    fn content() -> ResourceContent;
}
