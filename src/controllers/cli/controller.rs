use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use std::path::Path;

use log::{info, warn};

use crate::controllers::cli::command::{Command, HELP};
use crate::controllers::cli::errors::CliError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::colour_mapping::factory::density_colour_map_factory;
use crate::core::colour_mapping::kinds::DensityColourMapKind;
use crate::core::description::description::ChaosGameDescription;
use crate::core::fractals::factory::description_factory;
use crate::core::fractals::presets::FractalPreset;
use crate::core::game::chaos_game::ChaosGame;
use crate::storage::description_file;

pub const DEFAULT_WIDTH: usize = 150;
pub const DEFAULT_HEIGHT: usize = 150;

const PROMPT: &str = "> ";

/// Line-oriented front end: one [`Command`] per input line, output to any
/// writer. Errors are reported and the session carries on.
pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    game: Option<ChaosGame>,
    width: usize,
    height: usize,
    seed: Option<u64>,
    colour_map: DensityColourMapKind,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P, width: usize, height: usize) -> Self {
        Self {
            presenter,
            game: None,
            width,
            height,
            seed: None,
            colour_map: DensityColourMapKind::default(),
        }
    }

    /// Every game started from now on uses this seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_colour_map(mut self, kind: DensityColourMapKind) -> Self {
        self.colour_map = kind;
        self
    }

    #[must_use]
    pub fn game(&self) -> Option<&ChaosGame> {
        self.game.as_ref()
    }

    #[must_use]
    pub fn colour_map(&self) -> DensityColourMapKind {
        self.colour_map
    }

    pub fn load_preset(&mut self, preset: FractalPreset) -> Result<(), CliError> {
        self.start_game(description_factory(preset))?;
        info!("started preset {}", preset.name());
        Ok(())
    }

    pub fn load_file(&mut self, path: &Path) -> Result<(), CliError> {
        let description = description_file::read(path)?;
        self.start_game(description)?;
        info!("loaded description from {}", path.display());
        Ok(())
    }

    /// Reads commands until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> std::io::Result<()> {
        let mut lines = input.lines();

        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            let Some(line) = lines.next() else {
                writeln!(output)?;
                return Ok(());
            };
            let line = line?;

            let result = Command::parse(&line).and_then(|command| match command {
                Some(command) => self.execute(command, output),
                None => Ok(ControlFlow::Continue(())),
            });

            match result {
                Ok(ControlFlow::Break(())) => return Ok(()),
                Ok(ControlFlow::Continue(())) => {}
                Err(err) => {
                    warn!("command '{}' failed: {err}", line.trim());
                    writeln!(output, "error: {err}")?;
                }
            }
        }
    }

    pub fn execute<W: Write>(
        &mut self,
        command: Command,
        output: &mut W,
    ) -> Result<ControlFlow<()>, CliError> {
        match command {
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Load(path) => {
                self.load_file(&path)?;
                writeln!(output, "loaded {}", path.display())?;
            }
            Command::Save(path) => {
                description_file::write(self.current_game()?.description(), &path)?;
                writeln!(output, "saved {}", path.display())?;
            }
            Command::Preset(preset) => {
                self.load_preset(preset)?;
                writeln!(output, "started {preset}")?;
            }
            Command::ListPresets => {
                for preset in FractalPreset::ALL {
                    writeln!(output, "  {:<20}{}", preset.name(), preset.display_name())?;
                }
            }
            Command::Steps(steps) => {
                let game = self.current_game_mut()?;
                game.run_steps(steps);
                writeln!(
                    output,
                    "ran {steps} steps, {} in total",
                    game.steps_taken()
                )?;
            }
            Command::Show => write!(output, "{}", self.current_game()?.canvas().render_ascii())?,
            Command::Clear => {
                self.current_game_mut()?.reset();
                writeln!(output, "canvas cleared")?;
            }
            Command::Colours(kind) => {
                self.colour_map = kind;
                writeln!(output, "colour map set to {kind}")?;
            }
            Command::Export(path) => {
                let colour_map = density_colour_map_factory(self.colour_map);
                let buffer = generate_pixel_buffer(self.current_game()?.canvas(), &colour_map)?;
                self.presenter.present(&buffer, &path)?;
                info!("exported {}x{} image to {}", buffer.width(), buffer.height(), path.display());
                writeln!(output, "exported {}", path.display())?;
            }
            Command::Exit => return Ok(ControlFlow::Break(())),
        }

        Ok(ControlFlow::Continue(()))
    }

    fn start_game(&mut self, description: ChaosGameDescription) -> Result<(), CliError> {
        let game = match self.seed {
            Some(seed) => ChaosGame::with_seed(description, self.width, self.height, seed)?,
            None => ChaosGame::new(description, self.width, self.height)?,
        };

        self.game = Some(game);
        Ok(())
    }

    fn current_game(&self) -> Result<&ChaosGame, CliError> {
        self.game.as_ref().ok_or(CliError::NoGameLoaded)
    }

    fn current_game_mut(&mut self) -> Result<&mut ChaosGame, CliError> {
        self.game.as_mut().ok_or(CliError::NoGameLoaded)
    }
}
