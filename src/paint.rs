use owo_colors::{OwoColorize, Stream, Style};
use std::fmt::{Display, Formatter};

use crate::registry::{Framework, Variant};

/// Presentation colour of a catalog label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hue {
    Green,
    Cyan,
}

impl Hue {
    #[must_use]
    pub fn style(self) -> Style {
        match self {
            Hue::Green => Style::new().green(),
            Hue::Cyan => Style::new().cyan(),
        }
    }
}

/// Text shown in `hue` when stdout supports colours, plain otherwise.
#[derive(Debug, Clone, Copy)]
pub struct Painted<'a> {
    text: &'a str,
    hue: Hue,
}

impl<'a> Painted<'a> {
    #[must_use]
    pub fn new(text: &'a str, hue: Hue) -> Self {
        Painted { text, hue }
    }
}

impl Display for Painted<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let style = self.hue.style();

        write!(
            f,
            "{}",
            self.text
                .if_supports_color(Stream::Stdout, |s| s.style(style))
        )
    }
}

impl Display for Framework {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Painted::new(self.display, self.hue).fmt(f)
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Painted::new(self.display, self.hue).fmt(f)
    }
}
