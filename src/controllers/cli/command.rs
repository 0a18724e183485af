use std::path::PathBuf;

use crate::controllers::cli::errors::CliError;
use crate::core::colour_mapping::kinds::DensityColourMapKind;
use crate::core::fractals::presets::FractalPreset;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Load(PathBuf),
    Save(PathBuf),
    Preset(FractalPreset),
    ListPresets,
    Steps(u64),
    Show,
    Clear,
    Colours(DensityColourMapKind),
    Export(PathBuf),
    Exit,
}

pub const HELP: &str = "\
Available commands:
  help               Show available commands
  load <path>        Load a description file
  save <path>        Save the current description to a file
  preset <name>      Start a built-in fractal (see 'presets')
  presets            List the built-in fractals
  steps <n>          Run n chaos game steps
  show | run         Draw the canvas as text
  clear              Clear the canvas and restart from the origin
  colours <name>     Colour map for export: binary, log-grayscale, fire
  export <path>      Write the canvas as a PPM image
  exit               Leave the program";

impl Command {
    /// Parses one input line; `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, CliError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let rest = words.collect::<Vec<_>>().join(" ");

        let argument = |what: &'static str| {
            if rest.is_empty() {
                Err(CliError::MissingArgument {
                    command: name.to_lowercase(),
                    argument: what,
                })
            } else {
                Ok(rest.clone())
            }
        };

        let command = match name.to_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "load" => Self::Load(PathBuf::from(argument("path")?)),
            "save" => Self::Save(PathBuf::from(argument("path")?)),
            "preset" => Self::Preset(argument("name")?.parse()?),
            "presets" => Self::ListPresets,
            "steps" => {
                let count = argument("count")?;
                let steps = count
                    .parse::<u64>()
                    .map_err(|_| CliError::InvalidStepCount(count))?;
                Self::Steps(steps)
            }
            "show" | "run" => Self::Show,
            "clear" | "reset" => Self::Clear,
            "colours" | "colors" => Self::Colours(argument("name")?.parse()?),
            "export" => Self::Export(PathBuf::from(argument("path")?)),
            "exit" | "quit" => Self::Exit,
            other => return Err(CliError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}
