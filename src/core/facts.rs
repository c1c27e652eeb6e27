//! # Country Facts
//!
//! Derives the detail panel for one country as plain labelled strings.
//! Missing optional fields render as empty values, never as errors.

use crate::core::format::{LIST_SEPARATOR, group_thousands, group_thousands_f64, join_list};
use crate::countries::CountryRecord;

/// Unit suffix for land area.
pub const AREA_UNIT: &str = "km²";

/// Which language codes the panel reads from the record's per-language maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactsLocale {
    /// Language whose native official name is shown next to the official name.
    pub native_name_language: String,
    /// Language whose display name is shown under "Languages Spoken".
    pub spoken_language: String,
}

impl Default for FactsLocale {
    fn default() -> Self {
        Self {
            native_name_language: "ita".to_string(),
            spoken_language: "eng".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryFacts {
    pub names: String,
    pub languages: String,
    pub land_size: String,
    pub other_names: String,
    pub continents: String,
    pub borders: String,
    pub population: String,
    pub timezones: String,
}

impl CountryFacts {
    pub fn from_record(record: &CountryRecord, locale: &FactsLocale) -> Self {
        let names = match record.native_official_name(&locale.native_name_language) {
            Some(native) => format!("{}{LIST_SEPARATOR}{native}", record.name.official),
            None => record.name.official.clone(),
        };

        Self {
            names,
            languages: record
                .language_name(&locale.spoken_language)
                .unwrap_or_default()
                .to_string(),
            land_size: format!("{}{AREA_UNIT}", group_thousands_f64(record.area)),
            other_names: record.alt_spellings.join(LIST_SEPARATOR),
            continents: record.continents.join(LIST_SEPARATOR),
            borders: join_list(record.borders.as_deref()),
            population: group_thousands(record.population),
            timezones: join_list(record.timezones.as_deref()),
        }
    }

    /// Label/value pairs in display order.
    pub fn rows(&self) -> [(&'static str, &str); 8] {
        [
            ("Names", self.names.as_str()),
            ("Languages Spoken", self.languages.as_str()),
            ("Land size", self.land_size.as_str()),
            ("Other Names", self.other_names.as_str()),
            ("Continent", self.continents.as_str()),
            ("Borders", self.borders.as_str()),
            ("Population", self.population.as_str()),
            ("Timezones", self.timezones.as_str()),
        ]
    }
}
