use ggez::graphics;

#[derive(Deref, DerefMut, Copy, Clone, Debug, PartialEq)]
pub struct Color(pub graphics::Color);

impl Color {
    pub const BLACK: Self = Self(graphics::Color::BLACK);

    #[inline(always)]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(graphics::Color::from_rgb(r, g, b))
    }
}

impl From<Color> for graphics::Color {
    fn from(color: Color) -> Self {
        color.0
    }
}
