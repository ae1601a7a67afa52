use std::io::{self, Write};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const INDENT: &str = "  ";

/// XML 1.0 valid char ranges:
/// - 0x09, 0x0A, 0x0D
/// - 0x20..=0xD7FF
/// - 0xE000..=0xFFFD
/// - 0x10000..=0x10FFFF
fn is_valid_xml_char(c: char) -> bool {
    matches!(
        c as u32,
        0x09 | 0x0A | 0x0D | 0x20..=0xD7FF | 0xE000..=0xFFFD | 0x10000..=0x10FFFF
    )
}

pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if !is_valid_xml_char(c) {
            continue;
        }
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Line-oriented SVG emitter.
///
/// Every method writes one or more complete lines. The output format is fixed:
/// elements are indented two spaces and self-closing tags carry a space before
/// `/>`, so the bytes match the figures already published.
pub struct SvgWriter<W: Write> {
    out: W,
}

impl<W: Write> SvgWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Opens the root element and writes the shared style block.
    pub fn header(&mut self, width: u32, height: u32, font_family: &str) -> io::Result<()> {
        writeln!(
            self.out,
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" fill="none" xmlns="{ns}">"#,
            w = width,
            h = height,
            ns = SVG_NS,
        )?;
        writeln!(self.out, "{INDENT}<style>")?;
        writeln!(self.out, "{INDENT}  text {{")?;
        writeln!(
            self.out,
            "{INDENT}    font-family: {};",
            escape_xml(font_family)
        )?;
        writeln!(self.out, "{INDENT}  }}")?;
        writeln!(self.out, "{INDENT}</style>")
    }

    pub fn rect(&mut self, x: i32, y: i32, width: i32, height: i32, fill: &str) -> io::Result<()> {
        writeln!(
            self.out,
            r#"{INDENT}<rect x="{}" y="{}" width="{}" height="{}" fill="{}" />"#,
            x,
            y,
            width,
            height,
            escape_xml(fill)
        )
    }

    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, stroke: &str) -> io::Result<()> {
        writeln!(
            self.out,
            r#"{INDENT}<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" />"#,
            x1,
            y1,
            x2,
            y2,
            escape_xml(stroke)
        )
    }

    pub fn path(&mut self, d: &str, stroke: &str, stroke_width: u32) -> io::Result<()> {
        writeln!(
            self.out,
            r#"{INDENT}<path d="{}" stroke="{}" stroke-width="{}" fill="none" />"#,
            escape_xml(d),
            escape_xml(stroke),
            stroke_width
        )
    }

    pub fn close(&mut self) -> io::Result<()> {
        writeln!(self.out, "</svg>")
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
