//! Transit operators.
//!
//! The built-in operators are a closed enum. Anything else the data layer
//! knows about travels as [`Operator::Other`] with its wire name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Kmb,
    Ctb,
    Nlb,
    MtrBus,
    Gmb,
    LightRail,
    Mtr,
    SunFerry,
    HkkfFerry,
    FortuneFerry,
    Other(String),
}

impl Operator {
    /// Built-in operators, in catalog order.
    pub const BUILT_IN: [Operator; 10] = [
        Operator::Kmb,
        Operator::Ctb,
        Operator::Nlb,
        Operator::MtrBus,
        Operator::Gmb,
        Operator::LightRail,
        Operator::Mtr,
        Operator::SunFerry,
        Operator::HkkfFerry,
        Operator::FortuneFerry,
    ];

    /// Wire name used by the route catalog.
    pub fn name(&self) -> &str {
        match self {
            Operator::Kmb => "kmb",
            Operator::Ctb => "ctb",
            Operator::Nlb => "nlb",
            Operator::MtrBus => "mtr-bus",
            Operator::Gmb => "gmb",
            Operator::LightRail => "lightRail",
            Operator::Mtr => "mtr",
            Operator::SunFerry => "sunferry",
            Operator::HkkfFerry => "hkkf",
            Operator::FortuneFerry => "fortuneferry",
            Operator::Other(name) => name,
        }
    }

    pub fn is_ferry(&self) -> bool {
        matches!(
            self,
            Operator::SunFerry | Operator::HkkfFerry | Operator::FortuneFerry
        )
    }

    pub fn is_rail(&self) -> bool {
        matches!(self, Operator::Mtr | Operator::LightRail)
    }

    pub fn is_built_in(&self) -> bool {
        !matches!(self, Operator::Other(_))
    }
}

impl FromStr for Operator {
    type Err = std::convert::Infallible;

    /// Unknown names parse as [`Operator::Other`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Operator::BUILT_IN
            .into_iter()
            .find(|op| op.name() == s)
            .unwrap_or_else(|| Operator::Other(s.to_string())))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        let Ok(operator) = name.parse::<Operator>();
        Ok(operator)
    }
}
