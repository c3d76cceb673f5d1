use qrcodegen::QrCode;

use crate::{encode, EcLevel, RenderError, TerminalOptions};

/// Quiet zone for glyph output, in modules. Scanners need it and terminal
/// backgrounds are unpredictable, so it is not configurable.
const QUIET_ZONE: i32 = 4;

/// Render `text` as block glyphs for console display.
///
/// The default layout doubles each module into two full-block characters so
/// cells come out roughly square; `small` packs two module rows per text
/// line with half-block glyphs instead.
pub fn render_terminal(text: &str, options: &TerminalOptions) -> Result<String, RenderError> {
    let qr = encode(text, EcLevel::default())?;
    Ok(if options.small {
        half_block_glyphs(&qr)
    } else {
        full_block_glyphs(&qr)
    })
}

fn full_block_glyphs(qr: &QrCode) -> String {
    let mut out = String::new();
    for y in -QUIET_ZONE..qr.size() + QUIET_ZONE {
        for x in -QUIET_ZONE..qr.size() + QUIET_ZONE {
            out.push_str(if qr.get_module(x, y) { "██" } else { "  " });
        }
        out.push('\n');
    }
    out
}

fn half_block_glyphs(qr: &QrCode) -> String {
    let mut out = String::new();
    let mut y = -QUIET_ZONE;
    while y < qr.size() + QUIET_ZONE {
        for x in -QUIET_ZONE..qr.size() + QUIET_ZONE {
            // get_module is false outside the matrix, so the dangling bottom
            // row of the last pair reads as light.
            let glyph = match (qr.get_module(x, y), qr.get_module(x, y + 1)) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            };
            out.push(glyph);
        }
        out.push('\n');
        y += 2;
    }
    out
}
