//! Social preview images rendered from page frontmatter.
//!
//! | Step | Module |
//! |---|---|
//! | **Read** title/description | [`frontmatter`]: `---` block, YAML or key-value |
//! | **Wrap** and position text | `layout`: pure character-budget math |
//! | **Render** the SVG | `compose`: maud markup, escaped |
//! | **Walk** the content tree | `generate`: page roots → `<name>-image.svg` |

mod compose;
pub mod frontmatter;
mod generate;
mod layout;

pub use compose::{ImageSpec, compose_svg};
pub use frontmatter::{Frontmatter, FrontmatterParser, FrontmatterReader, KeyValueParser, YamlParser};
pub use generate::{SvgError, SvgEvent, SvgReport, SvgStyle, generate_images, output_path};
pub use layout::{TextLayout, layout_text, max_line_chars, wrap_by_width};
