use qrgen_render::{Color, EcLevel, RenderOptions};
use rmcp::schemars;
use serde::Deserialize;

pub(crate) const MIN_WIDTH: u32 = 50;
pub(crate) const MAX_WIDTH: u32 = 2000;
pub(crate) const MAX_MARGIN: u32 = 10;

#[derive(Debug, Deserialize, schemars::JsonSchema, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCorrectionLevel {
    L,
    M,
    Q,
    H,
}

impl ErrorCorrectionLevel {
    fn to_level(self) -> EcLevel {
        match self {
            Self::L => EcLevel::L,
            Self::M => EcLevel::M,
            Self::Q => EcLevel::Q,
            Self::H => EcLevel::H,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct ColorOptions {
    /// Module (foreground) color.
    #[schemars(description = "Module (foreground) color as a hex string (default: #000000).")]
    pub dark: Option<String>,

    /// Background color.
    #[schemars(description = "Background color as a hex string (default: #FFFFFF).")]
    pub light: Option<String>,
}

/// Rendering configuration shared by the image-producing tools.
#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeOptions {
    /// Symbol redundancy, trading capacity for damage tolerance.
    #[schemars(description = "Error correction level: L, M, Q, or H (default: M).")]
    pub error_correction_level: Option<ErrorCorrectionLevel>,

    /// Output image width in pixels.
    #[schemars(description = "Output image width in pixels (50..=2000, optional).")]
    pub width: Option<u32>,

    /// Quiet-zone width in modules.
    #[schemars(description = "Quiet-zone width in modules (0..=10, default: 4).")]
    pub margin: Option<u32>,

    /// Module and background colors.
    #[schemars(description = "Module and background colors.")]
    pub color: Option<ColorOptions>,
}

impl QrCodeOptions {
    /// Bounds-check every provided field and fill defaults, in one pass at
    /// the request boundary. Renderers never apply fallbacks of their own.
    pub fn resolve(&self) -> Result<RenderOptions, String> {
        let mut resolved = RenderOptions::default();

        if let Some(level) = self.error_correction_level {
            resolved.level = level.to_level();
        }

        if let Some(width) = self.width {
            if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) {
                return Err(format!(
                    "width must be between {MIN_WIDTH} and {MAX_WIDTH}, got {width}"
                ));
            }
            resolved.width = Some(width);
        }

        if let Some(margin) = self.margin {
            if margin > MAX_MARGIN {
                return Err(format!("margin must be between 0 and {MAX_MARGIN}, got {margin}"));
            }
            resolved.margin = margin;
        }

        if let Some(color) = &self.color {
            if let Some(dark) = color.dark.as_deref() {
                resolved.dark = Color::from_hex(dark)
                    .map_err(|err| format!("invalid dark color '{dark}': {err}"))?;
            }
            if let Some(light) = color.light.as_deref() {
                resolved.light = Color::from_hex(light)
                    .map_err(|err| format!("invalid light color '{light}': {err}"))?;
            }
        }

        Ok(resolved)
    }
}
