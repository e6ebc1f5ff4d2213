use serde::{Deserialize, Serialize};

/// Component manufacturer whose naming conventions a parsing rule targets
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Manufacturer {
    Molex,
    Te,
    Jst,
    Hirose,
    Amphenol,
    Harwin,
    Cree,
    Vishay,
    Osram,
    Lumileds,
    Microchip,
    St,
    Nxp,
    Ti,
    Other(String),
}

impl std::fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Molex => write!(f, "Molex"),
            Self::Te => write!(f, "TE Connectivity"),
            Self::Jst => write!(f, "JST"),
            Self::Hirose => write!(f, "Hirose"),
            Self::Amphenol => write!(f, "Amphenol"),
            Self::Harwin => write!(f, "Harwin"),
            Self::Cree => write!(f, "Cree"),
            Self::Vishay => write!(f, "Vishay"),
            Self::Osram => write!(f, "ams OSRAM"),
            Self::Lumileds => write!(f, "Lumileds"),
            Self::Microchip => write!(f, "Microchip"),
            Self::St => write!(f, "STMicroelectronics"),
            Self::Nxp => write!(f, "NXP"),
            Self::Ti => write!(f, "Texas Instruments"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

/// Confidence level derived from a similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
    Interchangeable,
}

impl Confidence {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 0.85 {
            Self::Interchangeable
        } else if score >= 0.7 {
            Self::High
        } else if score >= 0.4 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}
