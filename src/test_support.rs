//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::countries::{
    CountryName, CountryRecord, CountrySource, FetchError, FlagImages, NativeName,
};

/// A source that always answers with the same result.
pub struct StaticSource(pub Result<Vec<CountryRecord>, FetchError>);

#[async_trait]
impl CountrySource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn search_by_name(&self, _term: &str) -> Result<Vec<CountryRecord>, FetchError> {
        self.0.clone()
    }
}

/// Minimal record: just a code and a common name.
pub fn sample_country(cca3: &str, common: &str) -> CountryRecord {
    CountryRecord {
        name: CountryName {
            common: common.to_string(),
            official: common.to_string(),
            native_name: BTreeMap::new(),
        },
        capital: vec![format!("{common} City")],
        flags: FlagImages {
            png: format!("https://flagcdn.com/w320/{}.png", cca3.to_lowercase()),
            ..Default::default()
        },
        cca3: cca3.to_string(),
        ..Default::default()
    }
}

/// A fully populated record, shaped like the live service's answer.
pub fn germany() -> CountryRecord {
    let mut native_name = BTreeMap::new();
    native_name.insert(
        "deu".to_string(),
        NativeName {
            official: "Bundesrepublik Deutschland".to_string(),
            common: "Deutschland".to_string(),
        },
    );
    let mut languages = BTreeMap::new();
    languages.insert("deu".to_string(), "German".to_string());

    CountryRecord {
        name: CountryName {
            common: "Germany".to_string(),
            official: "Federal Republic of Germany".to_string(),
            native_name,
        },
        capital: vec!["Berlin".to_string()],
        flags: FlagImages {
            png: "https://flagcdn.com/w320/de.png".to_string(),
            svg: Some("https://flagcdn.com/de.svg".to_string()),
            alt: Some("The flag of Germany is composed of three equal horizontal bands of black, red and gold.".to_string()),
        },
        flag: "🇩🇪".to_string(),
        languages,
        continents: vec!["Europe".to_string()],
        borders: Some(
            ["AUT", "BEL", "CZE", "DNK", "FRA", "LUX", "NLD", "POL", "CHE"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ),
        population: 83240525,
        timezones: Some(vec!["UTC+01:00".to_string()]),
        area: 357114.0,
        alt_spellings: vec![
            "DE".to_string(),
            "Federal Republic of Germany".to_string(),
            "Bundesrepublik Deutschland".to_string(),
        ],
        cca3: "DEU".to_string(),
    }
}
