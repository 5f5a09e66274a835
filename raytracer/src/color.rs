use image::Rgb;

/// Colors stay in linear `f32`, conceptually in `[0, 1]` but unclamped,
/// until the pixel-write boundary.
pub type Color = Rgb<f32>;

pub const WHITE: Color = Rgb([1.0, 1.0, 1.0]);
pub const BLACK: Color = Rgb([0.0, 0.0, 0.0]);
pub const RED: Color = Rgb([1.0, 0.0, 0.0]);
pub const GREEN: Color = Rgb([0.0, 1.0, 0.0]);
pub const BLUE: Color = Rgb([0.0, 0.0, 1.0]);

/// Scale a channel by 255 and clamp into a displayable byte. Values are
/// truncated, not rounded.
pub fn channel_byte(channel: f32) -> u8 {
    (channel * 255.0).clamp(0.0, 255.0) as u8
}

/// The three displayable bytes of a pixel.
pub fn to_bytes(color: Color) -> [u8; 3] {
    color.0.map(channel_byte)
}
