use thiserror::Error;

use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::colour_mapping::kinds::UnknownColourMapError;
use crate::core::description::errors::InvalidDescriptionError;
use crate::core::fractals::presets::UnknownPresetError;
use crate::storage::errors::DescriptionFileError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown command '{0}', type 'help' to see available commands")]
    UnknownCommand(String),
    #[error("'{command}' needs a {argument}")]
    MissingArgument {
        command: String,
        argument: &'static str,
    },
    #[error("'{0}' is not a valid number of steps")]
    InvalidStepCount(String),
    #[error("no description loaded, use 'load' or 'preset' first")]
    NoGameLoaded,
    #[error(transparent)]
    Preset(#[from] UnknownPresetError),
    #[error(transparent)]
    ColourMap(#[from] UnknownColourMapError),
    #[error(transparent)]
    File(#[from] DescriptionFileError),
    #[error("invalid description: {0}")]
    InvalidDescription(#[from] InvalidDescriptionError),
    #[error("could not render canvas: {0}")]
    Render(#[from] GeneratePixelBufferError),
    #[error("could not write image: {0}")]
    Io(#[from] std::io::Error),
}

// io::Error and boxed colour map errors are not PartialEq; those variants
// compare by message.
impl PartialEq for CliError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UnknownCommand(a), Self::UnknownCommand(b)) => a == b,
            (
                Self::MissingArgument {
                    command: a,
                    argument: x,
                },
                Self::MissingArgument {
                    command: b,
                    argument: y,
                },
            ) => a == b && x == y,
            (Self::InvalidStepCount(a), Self::InvalidStepCount(b)) => a == b,
            (Self::NoGameLoaded, Self::NoGameLoaded) => true,
            (Self::Preset(a), Self::Preset(b)) => a == b,
            (Self::ColourMap(a), Self::ColourMap(b)) => a == b,
            (Self::InvalidDescription(a), Self::InvalidDescription(b)) => a == b,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other)
                && self.to_string() == other.to_string(),
        }
    }
}
