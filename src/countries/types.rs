//! # Country Records
//!
//! Wire types for the REST Countries v3.1 schema, trimmed to the fields the
//! app actually reads. Anything the service may leave out is either
//! `#[serde(default)]` or an `Option`, so a sparse record still decodes.
//!
//! ```text
//! CountryRecord
//! ├── name: CountryName          // common, official, nativeName{lang → NativeName}
//! ├── capital: Vec<String>       // string or list on the wire
//! ├── flags: FlagImages          // png, svg, alt
//! ├── flag: String               // emoji
//! ├── languages: lang → name
//! ├── continents, borders?, timezones?, altSpellings
//! ├── population: u64, area: f64
//! └── cca3: String               // row key
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    pub name: CountryName,
    #[serde(default, deserialize_with = "one_or_many")]
    pub capital: Vec<String>,
    #[serde(default)]
    pub flags: FlagImages,
    #[serde(default)]
    pub flag: String,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub continents: Vec<String>,
    #[serde(default)]
    pub borders: Option<Vec<String>>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub timezones: Option<Vec<String>>,
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub alt_spellings: Vec<String>,
    pub cca3: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
    #[serde(default)]
    pub native_name: BTreeMap<String, NativeName>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NativeName {
    #[serde(default)]
    pub official: String,
    #[serde(default)]
    pub common: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FlagImages {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

impl CountryRecord {
    /// Official name in the given native language, if the service has one.
    pub fn native_official_name(&self, lang: &str) -> Option<&str> {
        self.name
            .native_name
            .get(lang)
            .map(|n| n.official.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Display name of the given spoken language, if listed.
    pub fn language_name(&self, lang: &str) -> Option<&str> {
        self.languages.get(lang).map(String::as_str)
    }

    /// Capital(s) as a single display string. Most countries have one.
    pub fn capital_display(&self) -> String {
        self.capital.join(", ")
    }
}

/// The body of a name search: a list of matches, or an object envelope the
/// service uses to say "nothing matched".
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SearchPayload {
    Countries(Vec<CountryRecord>),
    Envelope(FailureEnvelope),
}

/// Failure envelope. v3.1 answers `{"status":404,"message":"Not Found"}`;
/// some mirrors answer `{"Response":"False","Error":"..."}`.
#[derive(Debug, Default, Deserialize)]
pub struct FailureEnvelope {
    #[serde(default, rename = "Response")]
    pub response: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
}

impl FailureEnvelope {
    pub fn is_not_found(&self) -> bool {
        self.response.as_deref() == Some("False") || self.status == Some(404)
    }
}

/// `capital` is a list in v3.1 but a bare string in older payloads.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(s)) => vec![s],
        Some(OneOrMany::Many(v)) => v,
        None => Vec::new(),
    })
}
