use std::path::Path;

use crate::{
    error::{Error, Result},
    hikari_info,
    math::Spectrum,
};

const PPM_LINE_LEN: usize = 70;

/// A row-major grid of linear RGB pixels
#[derive(Clone, Debug)]
pub struct Film {
    width: usize,
    height: usize,
    pixels: Vec<Spectrum<f64>>,
}

impl Film {
    /// Creates a new black `Film`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Spectrum::zeros(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Spectrum<f64>] {
        &self.pixels
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::InvalidPixel {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Result<Spectrum<f64>> {
        Ok(self.pixels[self.index(x, y)?])
    }

    pub fn write_pixel(&mut self, x: usize, y: usize, colour: Spectrum<f64>) -> Result<()> {
        let i = self.index(x, y)?;
        self.pixels[i] = colour;
        Ok(())
    }

    /// Sets every pixel to `colour`.
    pub fn fill(&mut self, colour: Spectrum<f64>) {
        self.pixels.fill(colour);
    }

    /// Encodes this `Film` as a plain PPM.
    ///
    /// Components are clamped to [0, 1] and scaled to [0, 255]. No line is longer than 70
    /// characters and each row of pixels starts on a new line.
    pub fn to_ppm(&self) -> String {
        let mut ret = format!("P3\n{} {}\n255\n", self.width, self.height);

        for row in self.pixels.chunks(self.width.max(1)) {
            let mut line_len = 0;
            for value in row.iter().flat_map(|c| [c.r, c.g, c.b]) {
                let value = to_u8(value).to_string();
                if line_len == 0 {
                    line_len = value.len();
                } else if line_len + 1 + value.len() > PPM_LINE_LEN {
                    ret.push('\n');
                    line_len = value.len();
                } else {
                    ret.push(' ');
                    line_len += 1 + value.len();
                }
                ret.push_str(&value);
            }
            ret.push('\n');
        }

        ret
    }

    /// Writes this `Film` into `path`, the format is picked from the extension.
    ///
    /// PPM and PNG are clamped to 8 bits, EXR keeps the linear values.
    pub fn write(&self, path: &Path) -> Result<()> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase());

        match extension.as_deref() {
            Some("ppm") => std::fs::write(path, self.to_ppm())?,
            Some("png") => {
                let img = image::RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
                    let c = self.pixels[y as usize * self.width + x as usize];
                    image::Rgb([to_u8(c.r), to_u8(c.g), to_u8(c.b)])
                });
                img.save(path)?;
            }
            Some("exr") => {
                exr::prelude::write_rgb_file(path, self.width, self.height, |x, y| {
                    let c = self.pixels[y * self.width + x];
                    (c.r as f32, c.g as f32, c.b as f32)
                })?;
            }
            _ => return Err(Error::UnsupportedFormat(path.to_path_buf())),
        }

        hikari_info!("Image written to '{}'", path.to_string_lossy());
        Ok(())
    }
}

fn to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
