use ratatui::style::{Color, palette::tailwind};

use crate::config::{LOW_SUSTAINABILITY, SUSTAINABILITY_THRESHOLD};

pub struct TableColors {
    pub buffer_bg: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub row_fg: Color,
    pub selected_row_style_fg: Color,
    pub selected_column_style_fg: Color,
    pub selected_cell_style_fg: Color,
    pub normal_row_color: Color,
    pub alt_row_color: Color,
    pub footer_border_color: Color,
    pub popup_border_color: Color,
}

impl TableColors {
    pub const fn new(color: &tailwind::Palette) -> Self {
        Self {
            buffer_bg: tailwind::SLATE.c950,
            header_bg: color.c900,
            header_fg: tailwind::SLATE.c200,
            row_fg: tailwind::SLATE.c200,
            selected_row_style_fg: color.c400,
            selected_column_style_fg: color.c400,
            selected_cell_style_fg: color.c600,
            normal_row_color: tailwind::SLATE.c950,
            alt_row_color: tailwind::SLATE.c900,
            footer_border_color: color.c400,
            popup_border_color: color.c300,
        }
    }

    pub fn sustainability_color(&self, score: f64) -> Color {
        if score >= SUSTAINABILITY_THRESHOLD {
            Color::Green
        } else if score < LOW_SUSTAINABILITY {
            Color::Red
        } else {
            self.row_fg
        }
    }

    pub fn trend_color(&self, rising: bool) -> Color {
        if rising { Color::Green } else { self.row_fg }
    }
}
