//! Output formats for finished symbols

/// SVG document and data URI output
pub mod svg;

pub use svg::{SvgOptions, render_svg, svg_data_uri};
