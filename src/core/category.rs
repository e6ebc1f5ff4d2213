use serde::{Deserialize, Serialize};

use crate::core::types::Manufacturer;

/// Base component category, without manufacturer refinement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseCategory {
    Connector,
    Led,
    Microcontroller,
    Resistor,
    Capacitor,
    Transistor,
}

impl std::fmt::Display for BaseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connector => write!(f, "connector"),
            Self::Led => write!(f, "LED"),
            Self::Microcontroller => write!(f, "microcontroller"),
            Self::Resistor => write!(f, "resistor"),
            Self::Capacitor => write!(f, "capacitor"),
            Self::Transistor => write!(f, "transistor"),
        }
    }
}

/// Component category tag: a base category, optionally refined to one
/// manufacturer's naming conventions.
///
/// The set is closed. Every refinement resolves to exactly one base category
/// via [`ComponentCategory::base`], which is what applicability checks use;
/// calculators that need the vendor look at [`ComponentCategory::refinement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentCategory {
    // Base tags
    Connector,
    Led,
    Microcontroller,
    Resistor,
    Capacitor,
    Transistor,

    // Connector refinements
    ConnectorMolex,
    ConnectorTe,
    ConnectorJst,
    ConnectorHirose,
    ConnectorAmphenol,
    ConnectorHarwin,

    // LED refinements
    LedCree,
    LedVishay,
    LedOsram,
    LedLumileds,

    // Microcontroller refinements
    MicrocontrollerMicrochip,
    MicrocontrollerSt,
    MicrocontrollerNxp,
    MicrocontrollerTi,
}

impl ComponentCategory {
    /// The base category this tag resolves to (itself, for base tags)
    #[must_use]
    pub fn base(self) -> BaseCategory {
        match self {
            Self::Connector
            | Self::ConnectorMolex
            | Self::ConnectorTe
            | Self::ConnectorJst
            | Self::ConnectorHirose
            | Self::ConnectorAmphenol
            | Self::ConnectorHarwin => BaseCategory::Connector,
            Self::Led | Self::LedCree | Self::LedVishay | Self::LedOsram | Self::LedLumileds => {
                BaseCategory::Led
            }
            Self::Microcontroller
            | Self::MicrocontrollerMicrochip
            | Self::MicrocontrollerSt
            | Self::MicrocontrollerNxp
            | Self::MicrocontrollerTi => BaseCategory::Microcontroller,
            Self::Resistor => BaseCategory::Resistor,
            Self::Capacitor => BaseCategory::Capacitor,
            Self::Transistor => BaseCategory::Transistor,
        }
    }

    /// The manufacturer refinement, if this tag carries one
    #[must_use]
    pub fn refinement(self) -> Option<Manufacturer> {
        match self {
            Self::ConnectorMolex => Some(Manufacturer::Molex),
            Self::ConnectorTe => Some(Manufacturer::Te),
            Self::ConnectorJst => Some(Manufacturer::Jst),
            Self::ConnectorHirose => Some(Manufacturer::Hirose),
            Self::ConnectorAmphenol => Some(Manufacturer::Amphenol),
            Self::ConnectorHarwin => Some(Manufacturer::Harwin),
            Self::LedCree => Some(Manufacturer::Cree),
            Self::LedVishay => Some(Manufacturer::Vishay),
            Self::LedOsram => Some(Manufacturer::Osram),
            Self::LedLumileds => Some(Manufacturer::Lumileds),
            Self::MicrocontrollerMicrochip => Some(Manufacturer::Microchip),
            Self::MicrocontrollerSt => Some(Manufacturer::St),
            Self::MicrocontrollerNxp => Some(Manufacturer::Nxp),
            Self::MicrocontrollerTi => Some(Manufacturer::Ti),
            _ => None,
        }
    }

    /// Whether this tag is a base category rather than a refinement
    #[must_use]
    pub fn is_base(self) -> bool {
        self.refinement().is_none()
    }
}

impl std::fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.refinement() {
            Some(manufacturer) => write!(f, "{} ({manufacturer})", self.base()),
            None => write!(f, "{}", self.base()),
        }
    }
}
