use crate::manifest_validation::domain::MessageKey;
use crate::ports::outbound::MessageProvider;
use crate::shared::Result;
use anyhow::Context;
use toml::{Table, Value};

/// Locale used when a requested locale has no catalog
pub const DEFAULT_LOCALE: &str = "en";

/// Catalogs compiled into the binary, keyed by primary language subtag
const BUNDLED_CATALOGS: [(&str, &str); 2] = [
    ("en", include_str!("locales/en.toml")),
    ("pt", include_str!("locales/pt.toml")),
];

/// MessageCatalog adapter implementing the MessageProvider port
///
/// Catalogs are nested TOML tables; the dotted catalog key of a
/// [`MessageKey`] is resolved one table at a time.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    locale: String,
    messages: Table,
}

impl MessageCatalog {
    /// Loads the bundled catalog for a locale tag such as `pt`, `pt-PT` or `en_US`
    ///
    /// Unknown languages fall back to English.
    pub fn for_locale(tag: &str) -> Result<Self> {
        let language = primary_subtag(tag);
        let (locale, content) = BUNDLED_CATALOGS
            .iter()
            .find(|(locale, _)| *locale == language)
            .or_else(|| {
                BUNDLED_CATALOGS
                    .iter()
                    .find(|(locale, _)| *locale == DEFAULT_LOCALE)
            })
            .copied()
            .ok_or_else(|| anyhow::anyhow!("No bundled message catalog available"))?;

        Self::from_toml_str(locale, content)
    }

    /// Parses a catalog from TOML source
    pub fn from_toml_str(locale: &str, content: &str) -> Result<Self> {
        let messages: Table = toml::from_str(content)
            .with_context(|| format!("Failed to parse message catalog for locale '{}'", locale))?;

        Ok(Self {
            locale: locale.to_string(),
            messages,
        })
    }

    /// Locales with a bundled catalog
    pub fn supported_locales() -> Vec<&'static str> {
        BUNDLED_CATALOGS.iter().map(|(locale, _)| *locale).collect()
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// True when `tag` asked for a language this catalog does not cover
    pub fn is_fallback_for(&self, tag: &str) -> bool {
        primary_subtag(tag) != self.locale
    }

    fn lookup(&self, dotted_key: &str) -> Option<&str> {
        let mut segments = dotted_key.split('.').peekable();
        let mut table = &self.messages;

        while let Some(segment) = segments.next() {
            let value = table.get(segment)?;
            if segments.peek().is_none() {
                return value.as_str();
            }
            table = match value {
                Value::Table(inner) => inner,
                _ => return None,
            };
        }
        None
    }
}

impl MessageProvider for MessageCatalog {
    /// Missing entries fall back to the catalog key itself
    fn message(&self, key: MessageKey) -> String {
        let catalog_key = key.catalog_key();
        self.lookup(&catalog_key)
            .map(str::to_string)
            .unwrap_or(catalog_key)
    }
}

/// `pt-PT` / `pt_PT` / `PT` -> `pt`
fn primary_subtag(tag: &str) -> String {
    tag.split(|c| c == '-' || c == '_')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}
