#[derive(Clone, Copy, Debug)]
pub(crate) struct ToolDescriptor {
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
}

pub(crate) const TOOL_CATALOG: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "generate_dataurl",
        summary: "QR code as a base64 PNG data URL.",
    },
    ToolDescriptor {
        name: "generate_svg",
        summary: "QR code as standalone SVG markup.",
    },
    ToolDescriptor {
        name: "generate_terminal",
        summary: "QR code as block glyphs for console display.",
    },
    ToolDescriptor {
        name: "generate_batch",
        summary: "Up to 10 QR codes in one call; per-item failures never abort the batch.",
    },
];

pub(crate) fn tool_instructions() -> String {
    let mut lines = vec![
        "QRGen turns text or URLs into QR codes.".to_string(),
        "Use generate_dataurl for images, generate_svg for scalable markup, generate_terminal for console display, and generate_batch for several inputs at once.".to_string(),
        "Tools:".to_string(),
    ];
    for tool in TOOL_CATALOG {
        lines.push(format!("- {}: {}", tool.name, tool.summary));
    }
    lines.join("\n")
}
