// Layout: content-driven font sizing and the fixed export page geometry.

pub mod font_size;
pub mod page;

pub use font_size::{apply_dynamic_font_size, FontScale, FontSizing, SizeClass, SizingConfig};
pub use page::{default_page_geometry, PageGeometry};
