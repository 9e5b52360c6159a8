//! Light and dark terminal themes.
//!
//! The calculator's visible parts are listed once as `ThemeableElement`s,
//! each tagged with the `Role` it plays. A theme maps roles to styles, so
//! switching themes restyles every element without inspecting what kind of
//! element it is.

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Style for an element playing `role` under this theme.
    pub fn style(self, role: Role) -> Style {
        let (fg, bg) = match self {
            Theme::Light => (Ansi::Black, Ansi::White),
            Theme::Dark => (Ansi::White, Ansi::Black),
        };
        match role {
            Role::Label | Role::Input | Role::List => Style {
                fg,
                bg,
                bold: false,
            },
            // Buttons render inverted, like a pressed control.
            Role::Button => Style {
                fg: bg,
                bg: fg,
                bold: true,
            },
            Role::Selector => Style { fg, bg, bold: true },
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}'; expected light or dark", other)),
        }
    }
}

/// What an element does, which decides how it is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Label,
    Input,
    List,
    Button,
    Selector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeableElement {
    pub name: &'static str,
    pub role: Role,
}

/// Elements of the interactive calculator.
pub const SHELL_ELEMENTS: &[ThemeableElement] = &[
    ThemeableElement {
        name: "label",
        role: Role::Label,
    },
    ThemeableElement {
        name: "prompt",
        role: Role::Input,
    },
    ThemeableElement {
        name: "operation",
        role: Role::Selector,
    },
    ThemeableElement {
        name: "history",
        role: Role::List,
    },
    ThemeableElement {
        name: "banner",
        role: Role::Button,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ansi {
    Black,
    White,
}

impl Ansi {
    fn fg_code(self) -> u8 {
        match self {
            Ansi::Black => 30,
            Ansi::White => 97,
        }
    }

    fn bg_code(self) -> u8 {
        match self {
            Ansi::Black => 40,
            Ansi::White => 107,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Ansi,
    pub bg: Ansi,
    pub bold: bool,
}

impl Style {
    /// Wrap `text` in this style's escapes, or return it unchanged.
    pub fn paint(&self, text: &str, color: bool) -> String {
        if !color {
            return text.to_string();
        }
        let bold = if self.bold { "1;" } else { "" };
        format!(
            "\x1b[{}{};{}m{}\x1b[0m",
            bold,
            self.fg.fg_code(),
            self.bg.bg_code(),
            text
        )
    }
}

/// Styles resolved for a set of elements under one theme.
#[derive(Debug, Clone)]
pub struct Skin {
    theme: Theme,
    styles: Vec<(&'static str, Style)>,
    color: bool,
}

impl Skin {
    pub fn apply(theme: Theme, elements: &[ThemeableElement], color: bool) -> Skin {
        let styles = elements
            .iter()
            .map(|el| (el.name, theme.style(el.role)))
            .collect();
        Skin {
            theme,
            styles,
            color,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Paint `text` as the named element. Unknown names are left plain.
    pub fn paint(&self, element: &str, text: &str) -> String {
        match self.styles.iter().find(|(name, _)| *name == element) {
            Some((_, style)) => style.paint(text, self.color),
            None => text.to_string(),
        }
    }
}
