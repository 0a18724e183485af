use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown colour map '{0}'")]
pub struct UnknownColourMapError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DensityColourMapKind {
    #[default]
    Binary,
    LogGrayscale,
    FireGradient,
}

impl DensityColourMapKind {
    pub const ALL: &'static [Self] = &[Self::Binary, Self::LogGrayscale, Self::FireGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Binary => "Binary",
            Self::LogGrayscale => "Log grayscale",
            Self::FireGradient => "Fire gradient",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::LogGrayscale => "log-grayscale",
            Self::FireGradient => "fire",
        }
    }
}

impl fmt::Display for DensityColourMapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for DensityColourMapKind {
    type Err = UnknownColourMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownColourMapError(s.trim().to_string()))
    }
}
