use std::error::Error;

use crate::core::data::colour::Colour;

pub type ColourMapError = Box<dyn Error + Send + Sync>;

pub trait ColourMap<T>: Sync {
    fn map(&self, value: T) -> Result<Colour, ColourMapError>;

    fn display_name(&self) -> &str;
}
