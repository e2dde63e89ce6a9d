//! Closed code sets used to classify line records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::LineCodeError;

/// Record-type tag of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum LineTag {
    L,
    G,
    T,
    M,
}

impl LineTag {
    /// Every tag, in canonical order.
    pub const ALL: [Self; 4] = [Self::L, Self::G, Self::T, Self::M];

    /// The code as written in line records.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::L => "L",
            Self::G => "G",
            Self::T => "T",
            Self::M => "M",
        }
    }
}

impl fmt::Display for LineTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineTag {
    type Err = LineCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" => Ok(Self::L),
            "G" => Ok(Self::G),
            "T" => Ok(Self::T),
            "M" => Ok(Self::M),
            _ => Err(LineCodeError::UnknownTag(s.to_string())),
        }
    }
}

/// Attribute code annotating a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[allow(missing_docs)]
pub enum LineAttr {
    Ac,
    Cn,
    Db,
    Ln,
    Sy,
}

impl LineAttr {
    /// Every attribute, in canonical order.
    pub const ALL: [Self; 5] = [Self::Ac, Self::Cn, Self::Db, Self::Ln, Self::Sy];

    /// The code as written in line records.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::Cn => "CN",
            Self::Db => "DB",
            Self::Ln => "LN",
            Self::Sy => "SY",
        }
    }
}

impl fmt::Display for LineAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineAttr {
    type Err = LineCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AC" => Ok(Self::Ac),
            "CN" => Ok(Self::Cn),
            "DB" => Ok(Self::Db),
            "LN" => Ok(Self::Ln),
            "SY" => Ok(Self::Sy),
            _ => Err(LineCodeError::UnknownAttr(s.to_string())),
        }
    }
}
