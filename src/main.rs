use std::io;
use std::path::PathBuf;

use clap::Parser;

use chaos_game::{
    CliController, DEFAULT_HEIGHT, DEFAULT_WIDTH, DensityColourMapKind, FractalPreset, HELP,
    PpmFilePresenter,
};

/// Play the chaos game on an iterated function system.
#[derive(Parser, Debug)]
#[command(name = "chaos_game", version, about)]
struct Args {
    /// Canvas width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Canvas height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Built-in fractal to start with, e.g. barnsley-fern
    #[arg(long, conflicts_with = "load")]
    preset: Option<FractalPreset>,

    /// Description file to start with
    #[arg(long)]
    load: Option<PathBuf>,

    /// Colour map for exported images: binary, log-grayscale or fire
    #[arg(long, default_value = "binary")]
    colours: DensityColourMapKind,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    let presenter = PpmFilePresenter::new();
    let mut controller = CliController::new(presenter, args.width, args.height)
        .with_seed(args.seed)
        .with_colour_map(args.colours);

    if let Some(path) = &args.load {
        controller.load_file(path)?;
        println!("Loaded {}", path.display());
    } else if let Some(preset) = args.preset {
        controller.load_preset(preset)?;
        println!("Started {preset}");
    }

    println!("Canvas: {}x{}", args.width, args.height);
    println!("{HELP}");

    controller.run(io::stdin().lock(), &mut io::stdout())?;

    Ok(())
}
