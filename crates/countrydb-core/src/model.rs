// crates/countrydb-core/src/model.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Raw wire structures
// ---------------------------------------------------------------------------

/// Raw country record as served by the REST Countries v3.1 endpoints and by
/// the bundled snapshot. Mirrors the wire JSON; unknown fields are ignored.
/// We do *not* expose this type from the public API — both tiers normalize
/// through [`from_raw`] so neither schema is trusted to match the other
/// field-for-field.
#[derive(Debug, Deserialize)]
pub struct CountryRaw {
    pub name: NameRaw,
    pub cca3: String,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub borders: Option<Vec<String>>,
    #[serde(default)]
    pub flags: FlagsRaw,
    #[serde(default)]
    pub tld: Option<Vec<String>>,
    #[serde(default)]
    pub currencies: HashMap<String, CurrencyRaw>,
    #[serde(default)]
    pub languages: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct NameRaw {
    pub common: String,
    pub official: String,
    /// nativeName: { "deu": { "official": ..., "common": ... }, ... }
    #[serde(rename = "nativeName", default)]
    pub native_name: HashMap<String, NativeNameRaw>,
}

#[derive(Debug, Deserialize)]
pub struct NativeNameRaw {
    pub official: String,
    pub common: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct FlagsRaw {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CurrencyRaw {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

pub type CountriesRaw = Vec<CountryRaw>;

// ---------------------------------------------------------------------------
// Domain model
// ---------------------------------------------------------------------------

/// A country record in the normalized model.
///
/// Immutable once built: lookups and derived views hand out clones or
/// references, never mutations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Unique 3-letter code (cca3). Primary key for lookups and the value
    /// space of `borders`.
    pub code: String,
    pub name: CountryName,
    /// Ordered capital names; commonly zero or one entries.
    pub capital: Vec<String>,
    pub region: String,
    pub subregion: Option<String>,
    pub population: u64,
    /// Codes of bordering countries. Empty means no shared borders; entries
    /// are not guaranteed to resolve in every data tier.
    pub borders: Vec<String>,
    pub flags: Flags,
    pub tld: Vec<String>,
    /// Currency code -> currency.
    pub currencies: HashMap<String, Currency>,
    /// Language code -> display name.
    pub languages: HashMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    pub official: String,
    /// Native-name variants keyed by language code.
    pub native: HashMap<String, NativeName>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NativeName {
    pub common: String,
    pub official: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flags {
    pub png: String,
    pub svg: String,
    pub alt: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub symbol: Option<String>,
}

/// Convert one raw wire record into the domain model.
pub fn country_from_raw(c: CountryRaw) -> Country {
    let native = c
        .name
        .native_name
        .into_iter()
        .map(|(lang, n)| {
            (
                lang,
                NativeName {
                    common: n.common,
                    official: n.official,
                },
            )
        })
        .collect();

    let currencies = c
        .currencies
        .into_iter()
        .map(|(code, cur)| {
            (
                code,
                Currency {
                    name: cur.name,
                    symbol: cur.symbol,
                },
            )
        })
        .collect();

    Country {
        code: c.cca3,
        name: CountryName {
            common: c.name.common,
            official: c.name.official,
            native,
        },
        capital: c.capital,
        region: c.region,
        subregion: c.subregion.filter(|s| !s.is_empty()),
        population: c.population,
        // Absent and empty both mean "no shared borders".
        borders: c.borders.unwrap_or_default(),
        flags: Flags {
            png: c.flags.png,
            svg: c.flags.svg,
            alt: c.flags.alt,
        },
        tld: c.tld.unwrap_or_default(),
        currencies,
        languages: c.languages,
    }
}

/// Convert a raw collection into the domain model, preserving order.
pub fn from_raw(raw: CountriesRaw) -> Vec<Country> {
    raw.into_iter().map(country_from_raw).collect()
}

impl Country {
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Common display name.
    pub fn name(&self) -> &str {
        &self.name.common
    }

    pub fn official_name(&self) -> &str {
        &self.name.official
    }

    /// First capital, if any. This is the display capital.
    pub fn display_capital(&self) -> Option<&str> {
        self.capital.first().map(String::as_str)
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn subregion(&self) -> Option<&str> {
        self.subregion.as_deref()
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn has_borders(&self) -> bool {
        !self.borders.is_empty()
    }

    /// First top-level domain, if any.
    pub fn primary_tld(&self) -> Option<&str> {
        self.tld.first().map(String::as_str)
    }

    /// Vector flag where available, raster otherwise.
    pub fn flag_url(&self) -> &str {
        if self.flags.svg.is_empty() {
            &self.flags.png
        } else {
            &self.flags.svg
        }
    }

    /// Currencies rendered as "Name (symbol)", comma-joined and sorted by
    /// currency code for a stable result.
    pub fn currency_summary(&self) -> String {
        let mut entries: Vec<(&String, &Currency)> = self.currencies.iter().collect();
        entries.sort_by_key(|(code, _)| *code);
        entries
            .iter()
            .map(|(_, cur)| match cur.symbol.as_deref() {
                Some(sym) => format!("{} ({})", cur.name, sym),
                None => cur.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Language display names, comma-joined and sorted by language code.
    pub fn language_summary(&self) -> String {
        let mut entries: Vec<(&String, &String)> = self.languages.iter().collect();
        entries.sort_by_key(|(code, _)| *code);
        entries
            .iter()
            .map(|(_, name)| name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
