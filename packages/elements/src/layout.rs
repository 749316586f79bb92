//! Generic layout containers shared by the element composers.

use trellis_fragment::Fragment;

/// Centered inner layout used by teaser-style elements.
pub fn build_inner_element_layout_centered(elements: Vec<Fragment>) -> Fragment {
    Fragment::element("div")
        .with_attr("class", "inner-element-layout")
        .with_style("display", "flex")
        .with_style("flex-direction", "column")
        .with_style("align-items", "center")
        .with_style("row-gap", "0.5rem")
        .with_children(elements)
}

/// Cards grid container. Item order is preserved as given.
pub fn build_cards(items: Vec<Fragment>) -> Fragment {
    Fragment::element("div")
        .with_attr("class", "cards")
        .with_style("display", "grid")
        .with_style("grid-template-columns", "repeat(auto-fill, minmax(16rem, 1fr))")
        .with_style("gap", "1.5rem")
        .with_children(items)
}

/// Section layout: heading, body, then the items container.
pub fn build_element_layout_title_body_and_items(
    title: &str,
    body: Fragment,
    items: Fragment,
) -> Fragment {
    Fragment::element("section")
        .with_attr("class", "element-layout")
        .with_child(
            Fragment::element("h2")
                .with_attr("class", "element-layout__title")
                .with_child(Fragment::text(title)),
        )
        .with_child(
            Fragment::element("div")
                .with_attr("class", "element-layout__body")
                .with_child(body),
        )
        .with_child(items)
}
