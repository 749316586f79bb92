//! Person teaser and card composers.
//!
//! Pure value-in, fragment-out; no lookups, no validation. Empty strings
//! pass through unchanged.

use crate::layout::{
    build_cards, build_element_layout_title_body_and_items, build_inner_element_layout_centered,
};
use crate::style::{Alignment, FontSize, FontWeight, TextColor};
use crate::wrap::{
    wrap_container_vertical_spacing_tiny, wrap_rounded_corners_full, wrap_text_center,
    wrap_text_color, wrap_text_font_weight, wrap_text_responsive_font_size,
};
use serde::{Deserialize, Serialize};
use trellis_fragment::Fragment;

/// Build a Person teaser: rounded image on top, centered bold name, then an
/// optional small gray subtitle line. An empty or absent subtitle omits the
/// line entirely.
pub fn build_person_teaser(
    image_url: &str,
    alt: &str,
    name: &str,
    subtitle: Option<&str>,
) -> Fragment {
    let mut elements = Vec::new();

    let image = Fragment::element("img")
        .with_attr("src", image_url)
        .with_attr("alt", alt)
        .with_attr("width", "100");
    elements.push(wrap_rounded_corners_full(image));

    let mut inner_elements = Vec::new();

    let element = wrap_text_font_weight(Fragment::text(name), FontWeight::Bold);
    inner_elements.push(wrap_text_center(element));

    if let Some(subtitle) = subtitle.filter(|s| !s.is_empty()) {
        let element = wrap_text_responsive_font_size(Fragment::text(subtitle), FontSize::Sm);
        let element = wrap_text_center(element);
        inner_elements.push(wrap_text_color(element, TextColor::Gray));
    }

    elements.push(wrap_container_vertical_spacing_tiny(
        inner_elements,
        Alignment::Center,
    ));

    build_inner_element_layout_centered(elements)
}

/// Input for a Person card. Everything past the first four fields has a
/// stock default and can be overridden per card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonCard {
    pub image_url: String,
    pub alt: String,
    pub name: String,
    pub subtitle: String,
    pub badge: String,
    pub email_url: String,
    pub phone_url: String,
    pub email_label: String,
    pub phone_label: String,
}

impl PersonCard {
    pub fn new(
        image_url: impl Into<String>,
        alt: impl Into<String>,
        name: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Self {
            image_url: image_url.into(),
            alt: alt.into(),
            name: name.into(),
            subtitle: subtitle.into(),
            badge: "Admin".to_string(),
            email_url: "mailto:placeholder@example.com".to_string(),
            phone_url: "tel:+10000000000".to_string(),
            email_label: "Email".to_string(),
            phone_label: "Call".to_string(),
        }
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = badge.into();
        self
    }

    pub fn with_email(mut self, url: impl Into<String>, label: impl Into<String>) -> Self {
        self.email_url = url.into();
        self.email_label = label.into();
        self
    }

    pub fn with_phone(mut self, url: impl Into<String>, label: impl Into<String>) -> Self {
        self.phone_url = url.into();
        self.phone_label = label.into();
        self
    }
}

/// Build a Person card with actions: a flat descriptor for the host's card
/// template, all nine fields carried verbatim.
pub fn build_person_card(card: &PersonCard) -> Fragment {
    Fragment::template("person-card")
        .with_prop("image_url", &card.image_url)
        .with_prop("image_alt", &card.alt)
        .with_prop("name", &card.name)
        .with_prop("subtitle", &card.subtitle)
        .with_prop("badge", &card.badge)
        .with_prop("email_url", &card.email_url)
        .with_prop("phone_url", &card.phone_url)
        .with_prop("email_label", &card.email_label)
        .with_prop("phone_label", &card.phone_label)
}

/// Build the People section: pre-built items in a cards grid, under a
/// title + body layout. Item order is preserved.
pub fn build_people_teasers_section(
    title: &str,
    body: Fragment,
    items: Vec<Fragment>,
) -> Fragment {
    build_element_layout_title_body_and_items(title, body, build_cards(items))
}
