/// Message catalog adapters for localized validation headers
mod message_catalog;

pub use message_catalog::{MessageCatalog, DEFAULT_LOCALE};
