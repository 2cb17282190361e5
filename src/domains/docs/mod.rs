//! Documentation fetching and content resolution.
//!
//! [`DocFetcher`] turns a URL into readable text; [`ContentResolver`] turns a
//! logical key into a rendered block, choosing between live documentation
//! and curated fallback content. [`Catalog`] holds every table the server
//! resolves against.

pub mod catalog;
pub mod cost;
pub mod extract;
pub mod fallback;
pub mod fetcher;
pub mod network;
pub mod resolver;
pub mod sdk_examples;
pub mod template;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::Catalog;
pub use fetcher::{DocFetcher, DocSource, FetchError};
pub use resolver::{
    ContentResolver, ContentSource, ContentSpec, ContentTable, MatchRule, ResolveError,
    ResolvedContent,
};
