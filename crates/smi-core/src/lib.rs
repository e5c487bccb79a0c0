pub mod config;
pub mod logging;

pub mod endpoint;
pub mod error;
pub mod importer;
pub mod sink;
pub mod sitemap;

pub use endpoint::{Endpoint, Scheme};
pub use error::ImportError;
pub use importer::{ImportReport, Importer};
pub use sink::{CollectingSink, JsonLinesSink, SiteMapEntry, SiteMapSink};
