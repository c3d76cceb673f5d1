use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{ImageBuffer, Rgb};
use qrcodegen::QrCode;

use crate::{encode, RenderError, RenderOptions};

/// Render `text` as a PNG image wrapped in a `data:image/png;base64,` URL.
pub fn render_data_url(text: &str, options: &RenderOptions) -> Result<String, RenderError> {
    let qr = encode(text, options.level)?;
    let png = rasterize_png(&qr, options)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&png)))
}

fn rasterize_png(qr: &QrCode, options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    let modules = qr.size() as u32 + 2 * options.margin;
    // Integer per-module scale keeps module edges pixel-aligned; the output
    // is the largest aligned size not exceeding the requested width.
    let scale = options.width.map_or(1, |width| (width / modules).max(1));
    let size = modules * scale;

    let dark = options.dark.to_rgb();
    let light = options.light.to_rgb();
    let mut img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::new(size, size);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let qr_x = (x / scale) as i32 - options.margin as i32;
        let qr_y = (y / scale) as i32 - options.margin as i32;
        *pixel = if qr.get_module(qr_x, qr_y) { dark } else { light };
    }

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)?;
    Ok(png)
}
