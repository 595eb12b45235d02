//! Sort mode selection for listed entries.

use std::fmt;
use std::str::FromStr;

use crate::core::error::ConfigError;

/// Ordering applied to the aggregated listing.
///
/// Parsed from the names accepted by the `S3B_SORT` page setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Keep the store's key order.
    #[default]
    Default,
    /// `OLD2NEW`
    OldToNew,
    /// `NEW2OLD`
    NewToOld,
    /// `A2Z`
    NameAscending,
    /// `Z2A`
    NameDescending,
    /// `BIG2SMALL`
    BigToSmall,
    /// `SMALL2BIG`
    SmallToBig,
}

impl SortMode {
    /// Setting name for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::OldToNew => "OLD2NEW",
            Self::NewToOld => "NEW2OLD",
            Self::NameAscending => "A2Z",
            Self::NameDescending => "Z2A",
            Self::BigToSmall => "BIG2SMALL",
            Self::SmallToBig => "SMALL2BIG",
        }
    }
}

impl FromStr for SortMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEFAULT" => Ok(Self::Default),
            "OLD2NEW" => Ok(Self::OldToNew),
            "NEW2OLD" => Ok(Self::NewToOld),
            "A2Z" => Ok(Self::NameAscending),
            "Z2A" => Ok(Self::NameDescending),
            "BIG2SMALL" => Ok(Self::BigToSmall),
            "SMALL2BIG" => Ok(Self::SmallToBig),
            _ => Err(ConfigError::UnknownSortMode(s.to_string())),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
