use crate::{encode, RenderError, RenderOptions};

/// Render `text` as standalone SVG markup.
///
/// The symbol is a single `<path>` of 1x1 module squares over a background
/// rect; the viewBox spans the matrix plus the quiet zone, so the markup
/// scales losslessly. Always uses Unix newlines regardless of platform.
pub fn render_svg(text: &str, options: &RenderOptions) -> Result<String, RenderError> {
    let qr = encode(text, options.level)?;
    let margin = options.margin as i32;
    let dimension = qr.size() + 2 * margin;

    let sizing = options
        .width
        .map(|width| format!(" width=\"{width}\" height=\"{width}\""))
        .unwrap_or_default();

    let mut result = String::new();
    result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    result += &format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {0} {0}\"{1} stroke=\"none\">\n",
        dimension, sizing
    );
    result += &format!(
        "\t<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        options.light.to_hex()
    );
    result += "\t<path d=\"";
    for y in 0..qr.size() {
        for x in 0..qr.size() {
            if qr.get_module(x, y) {
                if x != 0 || y != 0 {
                    result += " ";
                }
                result += &format!("M{},{}h1v1h-1z", x + margin, y + margin);
            }
        }
    }
    result += &format!("\" fill=\"{}\"/>\n", options.dark.to_hex());
    result += "</svg>\n";
    Ok(result)
}
