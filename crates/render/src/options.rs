use qrcodegen::QrCodeEcc;
use thiserror::Error;

/// QR error-correction level: redundancy traded against data capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EcLevel {
    /// ~7% of codewords recoverable.
    L,
    /// ~15% recoverable.
    #[default]
    M,
    /// ~25% recoverable.
    Q,
    /// ~30% recoverable.
    H,
}

impl EcLevel {
    pub(crate) fn to_ecc(self) -> QrCodeEcc {
        match self {
            Self::L => QrCodeEcc::Low,
            Self::M => QrCodeEcc::Medium,
            Self::Q => QrCodeEcc::Quartile,
            Self::H => QrCodeEcc::High,
        }
    }
}

/// Error type for color parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,
    #[error("color must start with '#'")]
    MissingHash,
    #[error("invalid color length {0}, expected 3, 4, 6, or 8 hex digits")]
    InvalidLength(usize),
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// An opaque RGB module color.
///
/// Parsed from `#RGB`, `#RGBA`, `#RRGGBB`, or `#RRGGBBAA`; a trailing alpha
/// channel is accepted and discarded since QR modules are always opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        if s.is_empty() {
            return Err(ColorError::Empty);
        }
        let Some(hex) = s.strip_prefix('#') else {
            return Err(ColorError::MissingHash);
        };

        match hex.len() {
            3 | 4 => {
                // Doubled-digit shorthand; the 4th digit is alpha.
                let mut digits = hex.chars().map(parse_hex_digit);
                let r = digits.next().unwrap()? * 17;
                let g = digits.next().unwrap()? * 17;
                let b = digits.next().unwrap()? * 17;
                for d in digits {
                    d?;
                }
                Ok(Self { r, g, b })
            }
            6 | 8 => {
                let r = parse_hex_pair(&hex[0..2])?;
                let g = parse_hex_pair(&hex[2..4])?;
                let b = parse_hex_pair(&hex[4..6])?;
                if hex.len() == 8 {
                    parse_hex_pair(&hex[6..8])?;
                }
                Ok(Self { r, g, b })
            }
            len => Err(ColorError::InvalidLength(len)),
        }
    }

    /// Canonical `#RRGGBB` form, used verbatim in SVG fill attributes.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub(crate) fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }
}

fn parse_hex_digit(c: char) -> Result<u8, ColorError> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'a'..='f' => Ok(c as u8 - b'a' + 10),
        'A'..='F' => Ok(c as u8 - b'A' + 10),
        _ => Err(ColorError::InvalidHex(c)),
    }
}

fn parse_hex_pair(s: &str) -> Result<u8, ColorError> {
    let mut chars = s.chars();
    let high = parse_hex_digit(chars.next().unwrap())?;
    let low = parse_hex_digit(chars.next().unwrap())?;
    Ok(high * 16 + low)
}

/// Resolved rendering configuration for the image-producing formats.
///
/// Callers resolve user input (bounds checks, color parsing, defaults) into
/// this struct once; renderers never apply fallbacks of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Error-correction level for the symbol.
    pub level: EcLevel,
    /// Requested output width in pixels. Rounded down to the nearest
    /// module-aligned size; `None` renders one pixel per module.
    pub width: Option<u32>,
    /// Quiet-zone width in modules.
    pub margin: u32,
    /// Module color.
    pub dark: Color,
    /// Background color.
    pub light: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            level: EcLevel::M,
            width: None,
            margin: 4,
            dark: Color::BLACK,
            light: Color::WHITE,
        }
    }
}

/// Configuration for terminal output. Size and color options do not apply
/// to glyph rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalOptions {
    /// Pack two module rows per text line using half-block glyphs.
    pub small: bool,
}
