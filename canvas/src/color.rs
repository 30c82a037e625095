///
/// Representation of a colour
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Color {
    Rgba(f32, f32, f32, f32)
}

impl Color {
    pub const BLACK: Color          = Color::Rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color          = Color::Rgba(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color            = Color::Rgba(1.0, 0.0, 0.0, 1.0);
    pub const BLUE: Color           = Color::Rgba(0.0, 0.0, 1.0, 1.0);
    pub const LIGHT_GREY: Color     = Color::Rgba(0.8, 0.8, 0.8, 1.0);

    ///
    /// Returns this colour as RGBA components
    ///
    pub fn to_rgba(&self) -> (f32, f32, f32, f32) {
        match self {
            &Color::Rgba(r, g, b, a) => (r, g, b, a)
        }
    }
}
