use crate::error::{AuraError, Result};
use crate::level::IntensityLevel;
use crate::model::Rgb;
use ratatui::style::Color;

/// Intensity colors, one per level, lowest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette([Rgb; IntensityLevel::COUNT]);

impl Palette {
    pub const fn from_array(colors: [Rgb; IntensityLevel::COUNT]) -> Self {
        Self(colors)
    }

    /// Rejects anything but exactly one color per intensity level.
    pub fn new(colors: Vec<Rgb>) -> Result<Self> {
        let found = colors.len();
        let colors: [Rgb; IntensityLevel::COUNT] =
            colors.try_into().map_err(|_| AuraError::PaletteLength {
                expected: IntensityLevel::COUNT,
                found,
            })?;
        Ok(Self(colors))
    }

    /// Parses a comma separated list of `#rrggbb` colors.
    pub fn parse(list: &str) -> Result<Self> {
        let colors = list
            .split(',')
            .map(|c| c.trim().parse::<Rgb>())
            .collect::<Result<Vec<_>>>()?;
        Self::new(colors)
    }

    pub fn color(&self, level: IntensityLevel) -> Rgb {
        self.0[level.index()]
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub levels: Palette,
    pub border: Color,
    pub title: Color,
    pub text: Color,
}

impl Theme {
    /// Same theme with its intensity colors replaced.
    pub fn with_palette(&self, levels: Palette) -> Self {
        Self {
            levels,
            ..self.clone()
        }
    }
}

const fn hex(v: u32) -> Rgb {
    Rgb::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

const fn palette(levels: [u32; 5]) -> Palette {
    Palette::from_array([
        hex(levels[0]),
        hex(levels[1]),
        hex(levels[2]),
        hex(levels[3]),
        hex(levels[4]),
    ])
}

const fn rgb(v: u32) -> Color {
    Color::Rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

pub static THEMES: [Theme; 7] = [
    Theme {
        name: "GitHub (Green)",
        levels: palette([0xebedf0, 0x9be9a8, 0x40c463, 0x30a14e, 0x216e39]),
        border: Color::Gray,
        title: Color::Blue,
        text: Color::White,
    },
    Theme {
        name: "Ocean (Blue)",
        levels: palette([0xebedf0, 0x79b8ff, 0x2188ff, 0x005cc5, 0x032f62]),
        border: Color::Blue,
        title: Color::Cyan,
        text: Color::Cyan,
    },
    Theme {
        name: "Dracula (Purple)",
        levels: palette([0x282a36, 0x44475a, 0x6272a4, 0xbd93f9, 0xff79c6]),
        border: Color::Magenta,
        title: Color::Magenta,
        text: Color::Magenta,
    },
    Theme {
        name: "Fire (Red)",
        levels: palette([0xebedf0, 0xff9b9b, 0xff4b4b, 0xc50000, 0x800000]),
        border: Color::Red,
        title: Color::Red,
        text: Color::Red,
    },
    Theme {
        name: "Halloween (Orange)",
        levels: palette([0xebedf0, 0xffee4a, 0xffc501, 0xfe9600, 0x03001c]),
        border: Color::Yellow,
        title: Color::Yellow,
        text: Color::Yellow,
    },
    Theme {
        name: "Catppuccin Mocha",
        levels: palette([0x313244, 0x45475a, 0x89b4fa, 0xb4befe, 0xcba6f7]),
        border: rgb(0xcba6f7),
        title: rgb(0xcba6f7),
        text: rgb(0xcdd6f4),
    },
    Theme {
        name: "Tokyo Night",
        levels: palette([0x1a1b26, 0x414868, 0x7aa2f7, 0xbb9af7, 0x7dcfff]),
        border: rgb(0x7aa2f7),
        title: rgb(0x7aa2f7),
        text: rgb(0xc0caf5),
    },
];

/// Resolves a theme by table index or by case-insensitive name prefix.
pub fn theme_index(query: &str) -> Result<usize> {
    let query = query.trim();
    if let Ok(i) = query.parse::<usize>() {
        return if i < THEMES.len() {
            Ok(i)
        } else {
            Err(AuraError::UnknownTheme(query.to_string()))
        };
    }
    let needle = query.to_lowercase();
    THEMES
        .iter()
        .position(|t| t.name.to_lowercase().starts_with(&needle))
        .ok_or_else(|| AuraError::UnknownTheme(query.to_string()))
}

/// Index of the theme after `index`, wrapping around the table.
pub fn next_theme(index: usize) -> usize {
    (index + 1) % THEMES.len()
}

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::level_of;

    #[test]
    fn palette_requires_five_colors() {
        let four = vec![Rgb::new(0, 0, 0); 4];
        match Palette::new(four) {
            Err(AuraError::PaletteLength { expected, found }) => {
                assert_eq!((expected, found), (5, 4));
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(Palette::new(vec![Rgb::new(0, 0, 0); 6]).is_err());
        assert!(Palette::new(vec![Rgb::new(0, 0, 0); 5]).is_ok());
    }

    #[test]
    fn palette_parses_hex_list() {
        let p = Palette::parse("#000000, #111111,#222222,#333333,#444444").unwrap();
        assert_eq!(p.color(level_of(12)), Rgb::new(0x44, 0x44, 0x44));
        assert_eq!(p.color(level_of(0)), Rgb::new(0, 0, 0));
        assert!(Palette::parse("#000000,#111111").is_err());
        assert!(Palette::parse("#000000,#111111,#222222,#333333,nope").is_err());
    }

    #[test]
    fn builtin_table_matches_known_colors() {
        assert_eq!(THEMES[0].levels.colors()[2].to_string(), "#40c463");
        assert_eq!(THEMES[6].levels.colors()[4].to_string(), "#7dcfff");
    }

    #[test]
    fn themes_resolve_by_index_or_name() {
        assert_eq!(theme_index("0").unwrap(), 0);
        assert_eq!(theme_index("dracula").unwrap(), 2);
        assert_eq!(theme_index("Tokyo").unwrap(), 6);
        assert!(theme_index("7").is_err());
        assert!(theme_index("solarized").is_err());
    }

    #[test]
    fn cycling_wraps() {
        assert_eq!(next_theme(0), 1);
        assert_eq!(next_theme(THEMES.len() - 1), 0);
    }
}
