//! Assembles fitted frames into a single looping animated GIF.

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame};

/// Encodes `frames` into one infinite-loop GIF where every frame is shown for
/// `frame_delay_ms` milliseconds.
pub fn encode_looping_gif(
    frames: &[DynamicImage],
    frame_delay_ms: u32,
) -> Result<Vec<u8>, image::ImageError> {
    let mut buf = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut buf);
        encoder.set_repeat(Repeat::Infinite)?;
        for frame in frames {
            let delay = Delay::from_numer_denom_ms(frame_delay_ms, 1);
            encoder.encode_frame(Frame::from_parts(frame.to_rgba8(), 0, 0, delay))?;
        }
    }
    Ok(buf)
}
