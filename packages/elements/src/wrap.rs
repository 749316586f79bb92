//! Wrappers that put a single presentation concern around a fragment.
//!
//! Each wrapper returns a new container element; the wrapped fragment is
//! moved in unchanged. Composition order is the caller's.

use crate::style::{Alignment, FontSize, FontWeight, TextColor};
use trellis_fragment::Fragment;

/// Fully rounded corners (e.g. portrait images).
pub fn wrap_rounded_corners_full(fragment: Fragment) -> Fragment {
    Fragment::element("div")
        .with_style("border-radius", "9999px")
        .with_style("overflow", "hidden")
        .with_child(fragment)
}

pub fn wrap_text_font_weight(fragment: Fragment, weight: FontWeight) -> Fragment {
    Fragment::element("span")
        .with_style("font-weight", weight.css_value())
        .with_child(fragment)
}

pub fn wrap_text_center(fragment: Fragment) -> Fragment {
    Fragment::element("div")
        .with_style("text-align", "center")
        .with_child(fragment)
}

pub fn wrap_text_responsive_font_size(fragment: Fragment, size: FontSize) -> Fragment {
    Fragment::element("span")
        .with_style("font-size", size.css_value())
        .with_child(fragment)
}

pub fn wrap_text_color(fragment: Fragment, color: TextColor) -> Fragment {
    Fragment::element("span")
        .with_style("color", color.css_value())
        .with_child(fragment)
}

/// Vertical stack with tiny spacing between items.
pub fn wrap_container_vertical_spacing_tiny(items: Vec<Fragment>, align: Alignment) -> Fragment {
    Fragment::element("div")
        .with_style("display", "flex")
        .with_style("flex-direction", "column")
        .with_style("row-gap", "0.25rem")
        .with_style("align-items", align.css_value())
        .with_children(items)
}
