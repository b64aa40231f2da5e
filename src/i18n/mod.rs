//! Bilingual display content.
//!
//! Both bundles are compiled into the binary from `content/*.json` and
//! checked once by [`LocalizationTable::load`]. After that a lookup is a plain
//! field access and cannot fail.

mod bundle;
mod validate;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use bundle::*;
pub use validate::find_empty_field;

const TR_CONTENT: &str = include_str!("../../content/tr.json");
const EN_CONTENT: &str = include_str!("../../content/en.json");

/// Supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Tr,
    En,
}

impl Lang {
    /// Every supported language, in switcher order.
    pub const ALL: [Lang; 2] = [Lang::Tr, Lang::En];

    /// Two-letter code used in storage and on the command line.
    pub fn code(self) -> &'static str {
        match self {
            Lang::Tr => "tr",
            Lang::En => "en",
        }
    }

    /// The other language.
    pub fn toggled(self) -> Lang {
        match self {
            Lang::Tr => Lang::En,
            Lang::En => Lang::Tr,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error for a language code outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language code '{0}'")]
pub struct UnknownLang(pub String);

impl FromStr for Lang {
    type Err = UnknownLang;

    /// Only the exact lowercase codes are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tr" => Ok(Lang::Tr),
            "en" => Ok(Lang::En),
            other => Err(UnknownLang(other.to_string())),
        }
    }
}

/// Authoring defect in an embedded content bundle.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content for '{lang}' does not match the bundle shape: {source}")]
    Parse {
        lang: Lang,
        #[source]
        source: serde_json::Error,
    },

    #[error("content for '{lang}' has an empty required field at {path}")]
    EmptyField { lang: Lang, path: String },
}

/// Both language bundles, validated.
#[derive(Debug, Clone)]
pub struct LocalizationTable {
    tr: Translations,
    en: Translations,
}

impl LocalizationTable {
    /// Parse and validate the embedded bundles.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_sources(TR_CONTENT, EN_CONTENT)
    }

    /// Parse and validate bundles from raw JSON text.
    pub fn from_sources(tr: &str, en: &str) -> Result<Self, ContentError> {
        let table = Self {
            tr: parse_bundle(Lang::Tr, tr)?,
            en: parse_bundle(Lang::En, en)?,
        };
        tracing::debug!("Loaded localization bundles for {:?}", Lang::ALL);
        Ok(table)
    }

    /// The complete bundle for `lang`.
    pub fn get(&self, lang: Lang) -> &Translations {
        match lang {
            Lang::Tr => &self.tr,
            Lang::En => &self.en,
        }
    }
}

fn parse_bundle(lang: Lang, raw: &str) -> Result<Translations, ContentError> {
    let bundle: Translations =
        serde_json::from_str(raw).map_err(|source| ContentError::Parse { lang, source })?;

    let value =
        serde_json::to_value(&bundle).map_err(|source| ContentError::Parse { lang, source })?;
    if let Some(path) = find_empty_field(&value) {
        return Err(ContentError::EmptyField { lang, path });
    }

    Ok(bundle)
}
