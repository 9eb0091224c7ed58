//! SVG document composition.
//!
//! Uses [maud](https://maud.lambda.xyz/) to build the markup, so every
//! interpolated value (text lines and attribute values alike) is escaped.
//! Arbitrary titles, descriptions or colors cannot break the document
//! structure.
//!
//! Output shape:
//!
//! ```text
//! <svg xmlns=... width height viewBox preserveAspectRatio>
//!   <rect/>                       full-canvas background
//!   <g font-family fill>
//!     <text> <tspan/>... </text>  title lines, bold
//!     <text> <tspan/>... </text>  description lines
//!   </g>
//! </svg>
//! ```

use super::layout::{DESCRIPTION_SIZE, TITLE_SIZE, layout_text};
use maud::{Markup, html};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const FONT_STACK: &str = "-apple-system,system-ui,Segoe UI,Roboto,Helvetica,Arial,sans-serif";

/// Everything needed to render one preview image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSpec {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub foreground: String,
    pub title: String,
    pub description: String,
}

/// Render a complete, standalone SVG document for `spec`.
pub fn compose_svg(spec: &ImageSpec) -> String {
    let layout = layout_text(&spec.title, &spec.description, spec.width, spec.height);
    let (w, h) = (spec.width, spec.height);

    let markup = html! {
        svg xmlns=(SVG_NS) width=(w) height=(h) viewBox=(format!("0 0 {w} {h}"))
            preserveAspectRatio="xMidYMid meet" {
            rect width="100%" height="100%" fill=(spec.background) {}
            g font-family=(FONT_STACK) fill=(spec.foreground) {
                text y=(layout.title_y) text-anchor="middle" font-size=(TITLE_SIZE)
                    font-weight="700" {
                    (tspans(&layout.title_lines, layout.title_line_height, layout.center_x))
                }
                text y=(layout.description_y) text-anchor="middle"
                    font-size=(DESCRIPTION_SIZE) {
                    (tspans(
                        &layout.description_lines,
                        layout.description_line_height,
                        layout.center_x,
                    ))
                }
            }
        }
    };

    let mut svg = markup.into_string();
    svg.push('\n');
    svg
}

/// One `tspan` per line, each offset one line height below the previous.
fn tspans(lines: &[String], line_height: u32, center_x: u32) -> Markup {
    html! {
        @for (i, line) in lines.iter().enumerate() {
            tspan x=(center_x) dy=(if i == 0 { 0 } else { line_height }) { (line) }
        }
    }
}
