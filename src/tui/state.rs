use crate::theme::{next_theme, Palette, Theme, THEMES};

/// Presentation state owned by the event loop. Core computations never see
/// it; they only receive the resolved theme colors.
pub struct TuiState {
    pub theme_index: usize,
    pub palette_override: Option<Palette>,
    pub show_help: bool,
}

impl TuiState {
    pub fn new(theme_index: usize, palette_override: Option<Palette>) -> Self {
        Self {
            theme_index: theme_index % THEMES.len(),
            palette_override,
            show_help: false,
        }
    }

    /// Active theme, with the `--palette` colors when one was given.
    pub fn theme(&self) -> Theme {
        let theme = &THEMES[self.theme_index];
        match &self.palette_override {
            Some(palette) => theme.with_palette(palette.clone()),
            None => theme.clone(),
        }
    }

    pub fn cycle_theme(&mut self) {
        self.theme_index = next_theme(self.theme_index);
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new(0, None)
    }
}
