//! Post-processing: clamp, gamma correction, and 8-bit conversion.

use image::RgbImage;
use lumo_math::Vec3;

use crate::renderer::ImageBuffer;

/// Display gamma applied after clamping.
pub const DEFAULT_GAMMA: f32 = 2.2;

/// Apply gamma correction to one channel.
///
/// The value is clamped to [0, 1] first; the curve is `x^(1/gamma)`.
#[inline]
pub fn linear_to_gamma(linear: f32, gamma: f32) -> f32 {
    let clamped = linear.clamp(0.0, 1.0);
    if clamped > 0.0 {
        clamped.powf(1.0 / gamma)
    } else {
        0.0
    }
}

/// Convert a linear color to gamma-corrected 8-bit RGB.
pub fn color_to_rgb8(color: Vec3, gamma: f32) -> [u8; 3] {
    let r = (255.0 * linear_to_gamma(color.x, gamma)) as u8;
    let g = (255.0 * linear_to_gamma(color.y, gamma)) as u8;
    let b = (255.0 * linear_to_gamma(color.z, gamma)) as u8;
    [r, g, b]
}

/// Clamp and gamma-correct a whole buffer, keeping it in float form.
pub fn tone_map(image: &ImageBuffer, gamma: f32) -> ImageBuffer {
    let mut out = ImageBuffer::new(image.width, image.height);
    for (i, color) in image.pixels.iter().enumerate() {
        out.pixels[i] = Vec3::new(
            linear_to_gamma(color.x, gamma),
            linear_to_gamma(color.y, gamma),
            linear_to_gamma(color.z, gamma),
        );
    }
    out
}

/// Convert a linear buffer to a display-ready 8-bit image.
pub fn to_rgb_image(image: &ImageBuffer, gamma: f32) -> RgbImage {
    let mut out = RgbImage::new(image.width, image.height);
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        *pixel = image::Rgb(color_to_rgb8(image.get(x, y), gamma));
    }
    out
}
