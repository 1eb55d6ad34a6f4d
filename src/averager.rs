use crate::{Animation, Error, Frame, Palette, Result, Rgb};
use std::collections::HashMap;

/// Blends every pixel with its past so that births and deaths fade in and
/// out instead of popping.
///
/// Output frame `i` shows, per pixel, the mean color of input frames
/// `i + 1 - window ..= i`; the first frames average over the shorter history
/// available. Means are rounded per channel and mapped back to the closest
/// palette entry. Delays are kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameAverager {
    window: usize,
}

impl FrameAverager {
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(Error::ZeroWindow);
        }
        Ok(Self { window })
    }

    pub fn apply(&self, animation: &Animation) -> Result<Animation> {
        let frames = animation.frames();
        let Some(first) = frames.first() else {
            return Ok(animation.clone());
        };
        let size = first.image.pixels().len();
        if let Some(odd) = frames.iter().find(|f| f.image.pixels().len() != size) {
            return Err(Error::DimensionMismatch {
                expected: size,
                given: odd.image.pixels().len(),
            });
        }
        if self.window == 1 {
            return Ok(animation.clone());
        }

        let palette = animation.palette();
        let mut quantizer = Quantizer::new(palette);
        let mut sums = vec![[0u32; 3]; size];
        let mut result = Vec::with_capacity(frames.len());

        for (i, frame) in frames.iter().enumerate() {
            accumulate(&mut sums, palette, frame, |s, c| *s += c);
            if i >= self.window {
                accumulate(&mut sums, palette, &frames[i - self.window], |s, c| *s -= c);
            }
            let count = (i + 1).min(self.window) as u32;

            let mut blended = frame.clone();
            for (dst, sum) in blended.image.pixels_mut().iter_mut().zip(&sums) {
                let [r, g, b] = sum.map(|s| ((s + count / 2) / count) as u8);
                let mean = Rgb::new(r, g, b);
                if palette.color(*dst) != mean {
                    *dst = quantizer.nearest(mean);
                }
            }
            result.push(blended);
        }
        log::debug!(
            "Averaged {} frames over a window of {}",
            result.len(),
            self.window
        );
        Ok(Animation::new(animation.palette_arc(), result))
    }
}

fn accumulate(
    sums: &mut [[u32; 3]],
    palette: &Palette,
    frame: &Frame,
    op: impl Fn(&mut u32, u32),
) {
    for (sum, &index) in sums.iter_mut().zip(frame.image.pixels()) {
        let c = palette.color(index).channels();
        for (s, c) in sum.iter_mut().zip(c) {
            op(s, c as u32);
        }
    }
}

/// Memoized [`Palette::nearest`].
struct Quantizer<'a> {
    palette: &'a Palette,
    cache: HashMap<Rgb, u8>,
}

impl<'a> Quantizer<'a> {
    fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            cache: HashMap::new(),
        }
    }

    fn nearest(&mut self, color: Rgb) -> u8 {
        *self
            .cache
            .entry(color)
            .or_insert_with(|| self.palette.nearest(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IndexedImage;
    use std::sync::Arc;

    fn animation(palette: Palette, frames: &[&[u8]]) -> Animation {
        let frames = frames
            .iter()
            .map(|pixels| Frame {
                image: IndexedImage::from_parts(pixels.len() as u32, 1, pixels.to_vec()),
                delay: 1,
            })
            .collect();
        Animation::new(Arc::new(palette), frames)
    }

    fn gray() -> Palette {
        Palette::gradient(Rgb::BLACK, Rgb::BLACK, Rgb::WHITE)
    }

    fn pixels(anim: &Animation) -> Vec<Vec<u8>> {
        anim.frames()
            .iter()
            .map(|f| f.image.pixels().to_vec())
            .collect()
    }

    #[test]
    fn test_zero_window() {
        assert!(matches!(FrameAverager::new(0), Err(Error::ZeroWindow)));
    }

    #[test]
    fn test_window_of_one_is_identity() {
        let anim = animation(gray(), &[&[0, 255], &[255, 0]]);
        let averaged = FrameAverager::new(1).unwrap().apply(&anim).unwrap();
        assert_eq!(averaged, anim);
    }

    #[test]
    fn test_fades() {
        let anim = animation(gray(), &[&[0, 200], &[200, 200], &[200, 0], &[200, 0]]);
        let averaged = FrameAverager::new(2).unwrap().apply(&anim).unwrap();
        assert_eq!(
            pixels(&averaged),
            vec![vec![0, 200], vec![100, 200], vec![200, 100], vec![200, 0]]
        );
    }

    #[test]
    fn test_shrinking_window_at_start() {
        let anim = animation(gray(), &[&[255], &[0], &[0], &[0]]);
        let averaged = FrameAverager::new(3).unwrap().apply(&anim).unwrap();
        // 255, 255/2, 255/3, 0
        assert_eq!(pixels(&averaged), vec![vec![255], vec![128], vec![85], vec![0]]);
    }

    #[test]
    fn test_keeps_delays_and_palette() {
        let mut anim = animation(gray(), &[&[0], &[10]]);
        let mut frames = anim.clone().into_frames();
        frames[0].delay = 100;
        anim = Animation::new(Arc::new(gray()), frames);
        let averaged = FrameAverager::new(4).unwrap().apply(&anim).unwrap();
        assert_eq!(averaged.frames()[0].delay, 100);
        assert_eq!(averaged.frames()[1].delay, 1);
        assert_eq!(averaged.palette(), anim.palette());
    }

    #[test]
    fn test_bichrome_snaps() {
        let anim = animation(Palette::bichrome(Rgb::BLACK, Rgb::WHITE), &[&[1, 1], &[0, 1], &[0, 0]]);
        let averaged = FrameAverager::new(3).unwrap().apply(&anim).unwrap();
        // half white rounds up to white, a third of it falls back to black
        assert_eq!(pixels(&averaged), vec![vec![1, 1], vec![1, 1], vec![0, 1]]);
    }

    #[test]
    fn test_mismatched_frames() {
        let anim = animation(gray(), &[&[0, 0], &[0]]);
        assert!(matches!(
            FrameAverager::new(2).unwrap().apply(&anim),
            Err(Error::DimensionMismatch { expected: 2, given: 1 })
        ));
    }
}
