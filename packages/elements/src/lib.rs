pub mod layout;
pub mod people;
pub mod style;
pub mod wrap;


pub use layout::{
    build_cards, build_element_layout_title_body_and_items, build_inner_element_layout_centered,
};
pub use people::{build_people_teasers_section, build_person_card, build_person_teaser, PersonCard};
pub use style::{Alignment, FontSize, FontWeight, TextColor};
