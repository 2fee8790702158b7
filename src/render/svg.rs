/// SVG serialization of a finished symbol
use crate::config;
use crate::models::QrSymbol;
use base64::{Engine, engine::general_purpose::STANDARD};
use std::fmt::Write;

/// Prefix of an inline SVG data URI
pub const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// Rendering options for [`render_svg`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgOptions {
    /// Pixels per module
    pub cell_size: usize,
    /// Quiet zone in pixels on each side
    pub margin: usize,
    /// Fill for dark modules
    pub dark_color: String,
    /// Background fill
    pub light_color: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            cell_size: config::default_cell_size(),
            margin: config::default_margin(),
            dark_color: "#000000".to_string(),
            light_color: "#ffffff".to_string(),
        }
    }
}

impl SvgOptions {
    /// Pixels per module, at least 1
    pub fn with_cell_size(mut self, cell_size: usize) -> Self {
        self.cell_size = cell_size.max(1);
        self
    }

    /// Quiet zone width in pixels
    pub fn with_margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    /// Dark module and background colors
    pub fn with_colors(mut self, dark: impl Into<String>, light: impl Into<String>) -> Self {
        self.dark_color = dark.into();
        self.light_color = light.into();
        self
    }

    /// Side length in pixels of a symbol with `modules` modules per side
    pub fn image_size(&self, modules: usize) -> usize {
        self.margin * 2 + modules * self.cell_size
    }
}

/// Escape a value for use inside a double-quoted XML attribute
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render a symbol as a standalone SVG document.
///
/// The background is one rectangle; all dark modules share a single path
/// with one `M x,y h c v c h -c z` square per module.
pub fn render_svg(symbol: &QrSymbol, options: &SvgOptions) -> String {
    let cell = options.cell_size;
    let size = options.image_size(symbol.size());
    let dark = symbol.dark_count();

    // Each subpath is at most ~30 bytes
    let mut path = String::with_capacity(dark * 32);
    for (row, modules) in symbol.rows().enumerate() {
        for (col, &is_dark) in modules.iter().enumerate() {
            if !is_dark {
                continue;
            }
            let x = options.margin + col * cell;
            let y = options.margin + row * cell;
            // Writing into a String never fails
            let _ = write!(path, "M{x},{y}h{cell}v{cell}h-{cell}z");
        }
    }

    let mut svg = String::with_capacity(path.len() + 320);
    let _ = write!(
        svg,
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" "#,
            r#"width="{size}" height="{size}" viewBox="0 0 {size} {size}" "#,
            r#"shape-rendering="crispEdges">"#,
            r#"<rect x="0" y="0" width="{size}" height="{size}" fill="{light}"/>"#,
            r#"<path d="{path}" fill="{dark}"/>"#,
            "</svg>"
        ),
        size = size,
        light = escape_attr(&options.light_color),
        path = path,
        dark = escape_attr(&options.dark_color),
    );
    svg
}

/// Base64 data URI of an SVG document, ready for an `<img src>`
pub fn svg_data_uri(svg: &str) -> String {
    let mut uri = String::with_capacity(SVG_DATA_URI_PREFIX.len() + svg.len() * 4 / 3 + 4);
    uri.push_str(SVG_DATA_URI_PREFIX);
    STANDARD.encode_string(svg.as_bytes(), &mut uri);
    uri
}
