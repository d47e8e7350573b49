use crate::color::Color;
use crate::game::SegmentKind;

pub struct Palette {
    pub background_color: Color,
    pub grid_color: Color,
    pub head_color: Color,
    pub body_color: Color,
    pub food_color: Color,
    pub text_color: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background_color: Color::from_rgb(245, 245, 245),
            grid_color: Color::from_rgb(200, 200, 200),
            head_color: Color::from_rgb(0, 82, 172),
            body_color: Color::from_rgb(0, 121, 241),
            food_color: Color::from_rgb(102, 191, 255),
            text_color: Color::BLACK,
        }
    }
}

impl Palette {
    pub fn segment_color(&self, kind: SegmentKind) -> Color {
        match kind {
            SegmentKind::Head => self.head_color,
            SegmentKind::Body => self.body_color,
        }
    }
}
