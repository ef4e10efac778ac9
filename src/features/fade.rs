//! Background fade
//!
//! Linear RGB interpolation between the displayed background and the color
//! picked for the current weather, played back one frame per timer tick.

use std::fmt;
use std::str::FromStr;

/// Background shown before the first successful search and for unknown icons
pub const DEFAULT_BACKGROUND: Rgb = Rgb::new(0x1E, 0x3A, 0x5F);

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorError::InvalidHex(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorError::InvalidHex(hex.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Format as uppercase `#RRGGBB`
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<Rgb> for iced::Color {
    fn from(rgb: Rgb) -> Self {
        iced::Color::from_rgb8(rgb.r, rgb.g, rgb.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// Interpolate one channel, truncating `start + delta * step / steps`.
/// The result is never negative, so truncation is floor division.
fn lerp_channel(start: u8, end: u8, step: u32, steps: u32) -> u8 {
    let start = i64::from(start);
    let delta = i64::from(end) - start;
    let value = start + (delta * i64::from(step)).div_euclid(i64::from(steps));
    value as u8
}

/// Build the frame sequence from `start` to `end`.
///
/// Returns `steps + 1` colors: frame `0` is `start` and frame `steps` is `end`.
/// With `steps == 0` the only frame is `end`.
pub fn interpolate(start: Rgb, end: Rgb, steps: u32) -> Vec<Rgb> {
    if steps == 0 {
        return vec![end];
    }

    (0..=steps)
        .map(|i| Rgb {
            r: lerp_channel(start.r, end.r, i, steps),
            g: lerp_channel(start.g, end.g, i, steps),
            b: lerp_channel(start.b, end.b, i, steps),
        })
        .collect()
}

/// Same as [`interpolate`] but over hex strings
#[cfg(test)]
pub fn interpolate_hex(start: &str, end: &str, steps: u32) -> Result<Vec<String>, ColorError> {
    let start = Rgb::from_hex(start)?;
    let end = Rgb::from_hex(end)?;
    Ok(interpolate(start, end, steps)
        .into_iter()
        .map(Rgb::to_hex)
        .collect())
}

/// One requested change of background color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTransition {
    pub start: Rgb,
    pub end: Rgb,
    pub steps: u32,
}

impl ColorTransition {
    pub fn new(start: Rgb, end: Rgb, steps: u32) -> Self {
        Self { start, end, steps }
    }

    pub fn frames(&self) -> Vec<Rgb> {
        interpolate(self.start, self.end, self.steps)
    }
}

/// Frame cursor driven by timer ticks
#[derive(Debug, Clone, Default)]
pub struct FadeAnimation {
    frames: Vec<Rgb>,
    cursor: usize,
}

impl FadeAnimation {
    /// Start playing a transition. Frame 0 equals the color already on screen,
    /// so the first tick shows frame 1.
    pub fn start(transition: ColorTransition) -> Self {
        let frames = transition.frames();
        let cursor = if frames.len() > 1 { 1 } else { 0 };
        Self { frames, cursor }
    }

    pub fn is_running(&self) -> bool {
        self.cursor < self.frames.len()
    }

    /// Advance one tick, returning the color to display
    pub fn next_frame(&mut self) -> Option<Rgb> {
        let frame = self.frames.get(self.cursor).copied();
        if frame.is_some() {
            self.cursor += 1;
        }
        frame
    }

    pub fn target(&self) -> Option<Rgb> {
        self.frames.last().copied()
    }
}

/// Pick the background for an OpenWeatherMap icon code such as `10d` or `01n`
pub fn background_for_icon(icon_code: &str) -> Rgb {
    let night = icon_code.ends_with('n');
    let condition = icon_code.get(..2).unwrap_or_default();

    match (condition, night) {
        ("01", false) => Rgb::new(0x4A, 0x90, 0xE2),
        ("01", true) => Rgb::new(0x0B, 0x1D, 0x3A),
        ("02", false) => Rgb::new(0x6C, 0xA0, 0xDC),
        ("02", true) => Rgb::new(0x1C, 0x2C, 0x4A),
        ("03", false) | ("04", false) => Rgb::new(0x7F, 0x8C, 0x99),
        ("03", true) | ("04", true) => Rgb::new(0x2E, 0x35, 0x40),
        ("09", _) | ("10", false) => Rgb::new(0x4F, 0x6D, 0x7A),
        ("10", true) => Rgb::new(0x22, 0x31, 0x3F),
        ("11", _) => Rgb::new(0x3A, 0x2F, 0x4F),
        ("13", false) => Rgb::new(0xB8, 0xCD, 0xDB),
        ("13", true) => Rgb::new(0x5B, 0x6C, 0x7D),
        ("50", _) => Rgb::new(0x8E, 0x99, 0xA4),
        _ => DEFAULT_BACKGROUND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parse_and_format() {
        let rgb = Rgb::from_hex("#1e3a5f").unwrap();
        assert_eq!(rgb, DEFAULT_BACKGROUND);
        assert_eq!(rgb.to_hex(), "#1E3A5F");
        assert_eq!("4A90E2".parse::<Rgb>().unwrap(), Rgb::new(0x4A, 0x90, 0xE2));
    }

    #[test]
    fn test_hex_rejects_garbage() {
        assert!(Rgb::from_hex("#12345").is_err());
        assert!(Rgb::from_hex("#GGGGGG").is_err());
        assert!(Rgb::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_endpoints_are_exact() {
        let start = Rgb::new(10, 200, 33);
        let end = Rgb::new(250, 3, 77);
        for steps in [1, 2, 7, 30, 255] {
            let frames = interpolate(start, end, steps);
            assert_eq!(frames.len(), steps as usize + 1);
            assert_eq!(frames[0], start);
            assert_eq!(*frames.last().unwrap(), end);
        }
    }

    #[test]
    fn test_midpoint_truncates_toward_zero() {
        // 0 -> 255 in 2 steps: 127.5 truncates to 127
        let up = interpolate(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), 2);
        assert_eq!(up[1], Rgb::new(127, 127, 127));

        // 255 -> 0 in 2 steps: 255 - 127.5 = 127.5 also truncates to 127
        let down = interpolate(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0), 2);
        assert_eq!(down[1], Rgb::new(127, 127, 127));
    }

    #[test]
    fn test_zero_steps_jumps_to_end() {
        let frames = interpolate(Rgb::new(1, 2, 3), Rgb::new(4, 5, 6), 0);
        assert_eq!(frames, vec![Rgb::new(4, 5, 6)]);
    }

    #[test]
    fn test_interpolate_hex() {
        let frames = interpolate_hex("#000000", "#0A0A0A", 10).unwrap();
        assert_eq!(frames.len(), 11);
        assert_eq!(frames[0], "#000000");
        assert_eq!(frames[5], "#050505");
        assert_eq!(frames[10], "#0A0A0A");
        assert!(interpolate_hex("nope", "#000000", 3).is_err());
    }

    #[test]
    fn test_animation_plays_every_frame_after_start() {
        let transition = ColorTransition::new(Rgb::new(0, 0, 0), Rgb::new(30, 30, 30), 3);
        let mut anim = FadeAnimation::start(transition);
        assert!(anim.is_running());
        assert_eq!(anim.target(), Some(Rgb::new(30, 30, 30)));

        let played: Vec<_> = std::iter::from_fn(|| anim.next_frame()).collect();
        assert_eq!(
            played,
            vec![
                Rgb::new(10, 10, 10),
                Rgb::new(20, 20, 20),
                Rgb::new(30, 30, 30)
            ]
        );
        assert!(!anim.is_running());
        assert_eq!(anim.next_frame(), None);
    }

    #[test]
    fn test_default_animation_is_idle() {
        let mut anim = FadeAnimation::default();
        assert!(!anim.is_running());
        assert_eq!(anim.next_frame(), None);
    }

    #[test]
    fn test_icon_backgrounds() {
        assert_eq!(background_for_icon("01d"), Rgb::new(0x4A, 0x90, 0xE2));
        assert_ne!(background_for_icon("01d"), background_for_icon("01n"));
        assert_eq!(background_for_icon("09d"), background_for_icon("09n"));
        assert_eq!(background_for_icon(""), DEFAULT_BACKGROUND);
        assert_eq!(background_for_icon("99x"), DEFAULT_BACKGROUND);
    }
}
