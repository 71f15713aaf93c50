//! Connector implementations, one per external source.
//!
//! Each module provides a struct implementing [`crate::Connector`] that
//! queries a specific public search API and maps its native JSON into
//! [`crate::ArticleCandidate`] values.

pub mod chronicling_america;
pub mod internet_archive;
pub(crate) mod mediawiki;
pub mod wikipedia;
pub mod wikisource;

pub use chronicling_america::ChroniclingAmericaConnector;
pub use internet_archive::InternetArchiveConnector;
pub use wikipedia::WikipediaConnector;
pub use wikisource::WikisourceConnector;
