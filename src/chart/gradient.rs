#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}

// Red -> yellow -> green diverging palette, evenly spaced stops.
const RD_YL_GN: [Rgb8; 11] = [
    Rgb8::new(0xa5, 0x00, 0x26),
    Rgb8::new(0xd7, 0x30, 0x27),
    Rgb8::new(0xf4, 0x6d, 0x43),
    Rgb8::new(0xfd, 0xae, 0x61),
    Rgb8::new(0xfe, 0xe0, 0x8b),
    Rgb8::new(0xff, 0xff, 0xbf),
    Rgb8::new(0xd9, 0xef, 0x8b),
    Rgb8::new(0xa6, 0xd9, 0x6a),
    Rgb8::new(0x66, 0xbd, 0x63),
    Rgb8::new(0x1a, 0x98, 0x50),
    Rgb8::new(0x00, 0x68, 0x37),
];

/// Color at position `t` in [0, 1] along the palette; out-of-range input is clamped.
pub fn red_to_green(t: f64) -> Rgb8 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let span = (RD_YL_GN.len() - 1) as f64;
    let position = t * span;
    let lower = (position.floor() as usize).min(RD_YL_GN.len() - 2);
    let local = position - lower as f64;

    let from = RD_YL_GN[lower];
    let to = RD_YL_GN[lower + 1];
    Rgb8::new(
        lerp(from.r, to.r, local),
        lerp(from.g, to.g, local),
        lerp(from.b, to.b, local),
    )
}

fn lerp(from: u8, to: u8, t: f64) -> u8 {
    let value = f64::from(from) + (f64::from(to) - f64::from(from)) * t;
    value.round().clamp(0.0, 255.0) as u8
}
