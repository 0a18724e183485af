use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(filepath)?);

        write_ppm(&mut file, buffer)?;
        file.flush()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

fn write_ppm<W: Write>(out: &mut W, buffer: &PixelBuffer) -> std::io::Result<()> {
    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", buffer.width(), buffer.height())?;
    writeln!(out, "255")?;
    out.write_all(buffer.buffer())
}
