use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown preset '{0}'")]
pub struct UnknownPresetError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalPreset {
    #[default]
    SierpinskiTriangle,
    BarnsleyFern,
    KochCurve,
    DragonCurve,
    JuliaSet,
    JuliaPetals,
    JuliaLightning,
    JuliaDust,
    JuliaSpiral,
}

impl FractalPreset {
    pub const ALL: &'static [Self] = &[
        Self::SierpinskiTriangle,
        Self::BarnsleyFern,
        Self::KochCurve,
        Self::DragonCurve,
        Self::JuliaSet,
        Self::JuliaPetals,
        Self::JuliaLightning,
        Self::JuliaDust,
        Self::JuliaSpiral,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SierpinskiTriangle => "Sierpinski triangle",
            Self::BarnsleyFern => "Barnsley fern",
            Self::KochCurve => "Koch curve",
            Self::DragonCurve => "Dragon curve",
            Self::JuliaSet => "Julia set",
            Self::JuliaPetals => "Julia petals",
            Self::JuliaLightning => "Julia lightning",
            Self::JuliaDust => "Julia dust",
            Self::JuliaSpiral => "Julia spiral",
        }
    }

    /// Kebab-case name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SierpinskiTriangle => "sierpinski-triangle",
            Self::BarnsleyFern => "barnsley-fern",
            Self::KochCurve => "koch-curve",
            Self::DragonCurve => "dragon-curve",
            Self::JuliaSet => "julia-set",
            Self::JuliaPetals => "julia-petals",
            Self::JuliaLightning => "julia-lightning",
            Self::JuliaDust => "julia-dust",
            Self::JuliaSpiral => "julia-spiral",
        }
    }
}

impl fmt::Display for FractalPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for FractalPreset {
    type Err = UnknownPresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();

        Self::ALL
            .iter()
            .copied()
            .find(|preset| preset.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownPresetError(wanted.to_string()))
    }
}
