use crate::{Palette, Result};
use std::{io::Write, sync::Arc};

/// Row-major buffer of palette indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl IndexedImage {
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn index_at(&self, x: u32, y: u32) -> u8 {
        self.pixels[x as usize + y as usize * self.width as usize]
    }
}

/// A single picture of the animation and how long it stays on screen, in
/// hundredths of a second.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub image: IndexedImage,
    pub delay: u16,
}

/// Sequence of indexed frames sharing one palette.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    palette: Arc<Palette>,
    frames: Vec<Frame>,
}

impl Animation {
    pub fn new(palette: Arc<Palette>, frames: Vec<Frame>) -> Self {
        Self { palette, frames }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn palette_arc(&self) -> Arc<Palette> {
        Arc::clone(&self.palette)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Resolves the palette indices of `frame` into opaque RGBA pixels.
    pub fn to_rgba(&self, frame: &Frame) -> image::RgbaImage {
        let mut buf = image::RgbaImage::new(frame.image.width(), frame.image.height());
        for (dst, &index) in buf.pixels_mut().zip(frame.image.pixels()) {
            let c = self.palette.color(index);
            *dst = image::Rgba([c.r, c.g, c.b, u8::MAX]);
        }
        buf
    }

    /// Encodes the animation as a GIF that loops forever.
    pub fn write_gif<W: Write>(&self, writer: W) -> Result<()> {
        use image::codecs::gif::{GifEncoder, Repeat};
        use image::Delay;

        let mut encoder = GifEncoder::new(writer);
        encoder.set_repeat(Repeat::Infinite)?;
        for frame in &self.frames {
            let delay = Delay::from_numer_denom_ms(frame.delay as u32 * 10, 1);
            encoder.encode_frame(image::Frame::from_parts(self.to_rgba(frame), 0, 0, delay))?;
        }
        log::debug!("Encoded {} frames", self.frames.len());
        Ok(())
    }
}
