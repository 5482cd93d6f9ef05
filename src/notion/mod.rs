//! Notion API integration: the query client and property decoding.

pub mod client;
pub mod properties;

pub use client::{NotionClient, NotionError, Page};
pub use properties::Property;
