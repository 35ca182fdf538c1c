//! Country records as returned by the country service, plus the small
//! enumerations the quiz is parameterised by.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// A native spelling of a country name in one language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NativeName {
    pub official: String,
    pub common: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryName {
    pub common: String,
    pub official: String,
    /// Keyed by language code, e.g. `fra`.
    #[serde(rename = "nativeName", default)]
    pub native_name: Option<BTreeMap<String, NativeName>>,
}

/// Image references for a flag, used when the glyph is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FlagImages {
    pub png: Option<String>,
    pub svg: Option<String>,
    pub alt: Option<String>,
}

/// A number that may arrive either as a JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryRecord {
    pub name: CountryName,
    #[serde(default)]
    pub flag: String,
    #[serde(default)]
    pub flags: Option<FlagImages>,
    pub population: NumericInput,
    #[serde(default)]
    pub capital: Vec<String>,
}

impl CountryRecord {
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    pub fn first_capital(&self) -> Option<&str> {
        self.capital.first().map(String::as_str).filter(|c| !c.is_empty())
    }

    /// Flag glyph, falling back to the image reference when the glyph is empty.
    pub fn flag_display(&self) -> Option<&str> {
        if !self.flag.is_empty() {
            return Some(&self.flag);
        }

        self.flags.as_ref().and_then(|f| f.png.as_deref().or(f.svg.as_deref()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
}

impl Region {
    pub const ALL: [Region; 5] = [Region::Asia, Region::Africa, Region::Americas, Region::Europe, Region::Oceania];

    pub fn name(self) -> &'static str {
        match self {
            Region::Africa => "Africa",
            Region::Americas => "Americas",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::Oceania => "Oceania",
        }
    }

    /// Path segment used by the country service.
    pub fn slug(self) -> String {
        self.name().to_lowercase()
    }
}

/// Geographic scope for picking quiz targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RegionFilter {
    #[default]
    All,
    Only(Region),
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionFilter::All => f.write_str("All"),
            RegionFilter::Only(region) => f.write_str(region.name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown region \"{0}\", expected one of: all, africa, americas, asia, europe, oceania")]
pub struct UnknownRegion(pub String);

impl FromStr for RegionFilter {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == "all" {
            return Ok(RegionFilter::All);
        }

        Region::ALL
            .into_iter()
            .find(|r| r.slug() == wanted)
            .map(RegionFilter::Only)
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

/// What the quiz shows as the prompt. Does not affect scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum QuizMode {
    #[default]
    Flags,
    Capitals,
}

impl QuizMode {
    pub fn toggled(self) -> Self {
        match self {
            QuizMode::Flags => QuizMode::Capitals,
            QuizMode::Capitals => QuizMode::Flags,
        }
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizMode::Flags => f.write_str("flags"),
            QuizMode::Capitals => f.write_str("capitals"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown quiz mode \"{0}\", expected flags or capitals")]
pub struct UnknownMode(pub String);

impl FromStr for QuizMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flags" | "flag" => Ok(QuizMode::Flags),
            "capitals" | "capital" => Ok(QuizMode::Capitals),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}
