use serde::{Deserialize, Serialize};

/// Font weight applied by text wrappers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    Normal,
    Bold,
}

impl FontWeight {
    pub fn css_value(&self) -> &'static str {
        match self {
            FontWeight::Normal => "400",
            FontWeight::Bold => "700",
        }
    }
}

/// Responsive font size steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontSize {
    Sm,
    Base,
    Lg,
}

impl FontSize {
    pub fn css_value(&self) -> &'static str {
        match self {
            FontSize::Sm => "0.875rem",
            FontSize::Base => "1rem",
            FontSize::Lg => "1.125rem",
        }
    }
}

/// Text color applied by text wrappers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextColor {
    Default,
    Gray,
}

impl TextColor {
    pub fn css_value(&self) -> &'static str {
        match self {
            TextColor::Default => "inherit",
            TextColor::Gray => "#6b7280",
        }
    }
}

/// Cross-axis alignment for stacked containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Start,
    Center,
    End,
}

impl Alignment {
    pub fn css_value(&self) -> &'static str {
        match self {
            Alignment::Start => "flex-start",
            Alignment::Center => "center",
            Alignment::End => "flex-end",
        }
    }
}
