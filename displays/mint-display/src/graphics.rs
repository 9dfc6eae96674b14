//! `embedded-graphics` backed surface
//!
//! Rasterises the engine's primitives onto any binary-color draw target.
//! The SSD1306 driver reuses the same helpers for its frame buffer.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X9};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use embedded_graphics::text::{Baseline, Text};

use crate::backend::{Color, DisplayError, Rect, Surface, TextStyle};

impl From<Color> for BinaryColor {
    fn from(color: Color) -> Self {
        match color {
            Color::On => BinaryColor::On,
            Color::Off => BinaryColor::Off,
        }
    }
}

fn to_rectangle(rect: Rect) -> Rectangle {
    Rectangle::new(
        Point::new(rect.x, rect.y),
        Size::new(rect.width, rect.height),
    )
}

/// Pick the bitmap font closest to the requested glyph scale
pub(crate) fn font_for(size: u8) -> &'static MonoFont<'static> {
    if size >= 2 {
        &FONT_10X20
    } else {
        &FONT_6X9
    }
}

/// Fill `rect` on a draw target
pub fn fill_rect<D>(target: &mut D, rect: Rect, color: Color) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    if rect.is_empty() {
        return Ok(());
    }
    target.fill_solid(&to_rectangle(rect), color.into())
}

/// Outline `rect` on a draw target, stroke inside the rectangle
pub fn draw_rect<D>(target: &mut D, rect: Rect, color: Color) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    if rect.is_empty() {
        return Ok(());
    }
    let style: PrimitiveStyle<BinaryColor> = PrimitiveStyleBuilder::new()
        .stroke_color(color.into())
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    to_rectangle(rect).into_styled(style).draw(target)
}

/// Draw text with its top-left corner at (`x`, `y`)
pub fn draw_text<D>(
    target: &mut D,
    x: i32,
    y: i32,
    text: &str,
    style: TextStyle,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let character_style = MonoTextStyle::new(font_for(style.size), style.color.into());
    Text::with_baseline(text, Point::new(x, y), character_style, Baseline::Top).draw(target)?;
    Ok(())
}

/// [`Surface`] over an `embedded-graphics` draw target
///
/// The target is drawn to directly, so [`Surface::flush`] is a no-op;
/// targets that need an explicit transfer should present after
/// `update()` via [`GraphicsSurface::target_mut`].
pub struct GraphicsSurface<D> {
    target: D,
}

impl<D> GraphicsSurface<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    /// Wrap a draw target
    pub fn new(target: D) -> Self {
        Self { target }
    }

    /// Borrow the wrapped target
    pub fn target(&self) -> &D {
        &self.target
    }

    /// Mutably borrow the wrapped target
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Release the wrapped target
    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> Surface for GraphicsSurface<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.target
            .clear(BinaryColor::Off)
            .map_err(|_| DisplayError::Communication)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), DisplayError> {
        fill_rect(&mut self.target, rect, color).map_err(|_| DisplayError::Communication)
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), DisplayError> {
        draw_rect(&mut self.target, rect, color).map_err(|_| DisplayError::Communication)
    }

    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        style: TextStyle,
    ) -> Result<(), DisplayError> {
        draw_text(&mut self.target, x, y, text, style).map_err(|_| DisplayError::Communication)
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn pixel_dimensions(&self) -> (u16, u16) {
        let size = self.target.bounding_box().size;
        (size.width as u16, size.height as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;
    use heapless::Vec;

    fn surface() -> GraphicsSurface<MockDisplay<BinaryColor>> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        GraphicsSurface::new(display)
    }

    #[test]
    fn test_fill_rect_pixels() {
        let mut s = surface();
        s.fill_rect(Rect::new(2, 3, 4, 2), Color::On).unwrap();

        let d = s.target();
        assert_eq!(d.get_pixel(Point::new(2, 3)), Some(BinaryColor::On));
        assert_eq!(d.get_pixel(Point::new(5, 4)), Some(BinaryColor::On));
        assert_eq!(d.get_pixel(Point::new(6, 4)), None);
        assert_eq!(d.get_pixel(Point::new(2, 5)), None);
    }

    #[test]
    fn test_outline_is_hollow() {
        let mut s = surface();
        s.draw_rect(Rect::new(0, 0, 5, 5), Color::On).unwrap();

        let d = s.target();
        assert_eq!(d.get_pixel(Point::new(0, 0)), Some(BinaryColor::On));
        assert_eq!(d.get_pixel(Point::new(4, 4)), Some(BinaryColor::On));
        assert_eq!(d.get_pixel(Point::new(2, 2)), None);
    }

    #[test]
    fn test_offscreen_rect_is_clipped() {
        let mut s = surface();
        s.fill_rect(Rect::new(-10, 0, 12, 1), Color::On).unwrap();

        let d = s.target();
        assert_eq!(d.get_pixel(Point::new(0, 0)), Some(BinaryColor::On));
        assert_eq!(d.get_pixel(Point::new(1, 0)), Some(BinaryColor::On));
        assert_eq!(d.get_pixel(Point::new(2, 0)), None);
    }

    #[test]
    fn test_empty_rect_draws_nothing() {
        let mut s = surface();
        s.fill_rect(Rect::new(1, 1, 0, 5), Color::On).unwrap();
        s.draw_rect(Rect::new(1, 1, 5, 0), Color::On).unwrap();
        assert_eq!(s.target().get_pixel(Point::new(1, 1)), None);
    }

    #[test]
    fn test_text_lights_pixels() {
        let mut s = surface();
        s.draw_text(0, 0, "H", TextStyle::default()).unwrap();

        let lit = (0..6)
            .flat_map(|x| (0..9).map(move |y| Point::new(x, y)))
            .filter(|p| s.target().get_pixel(*p) == Some(BinaryColor::On))
            .count();
        assert!(lit > 0);
    }

    #[test]
    fn test_large_text_fits_measured_width() {
        let mut s = surface();
        let style = TextStyle::new(Color::On).with_size(2);
        s.draw_text(0, 0, "ABCD", style).unwrap();

        let width = crate::backend::text_width("ABCD", 2);
        let lit: Vec<Point, 1024> = (0..64)
            .flat_map(|x| (0..20).map(move |y| Point::new(x, y)))
            .filter(|p| s.target().get_pixel(*p) == Some(BinaryColor::On))
            .take(1024)
            .collect();
        assert!(!lit.is_empty());
        assert!(lit.iter().all(|p| p.x < width));
        assert!(lit.iter().any(|p| p.x >= width - 10));
    }

    #[test]
    fn test_dimensions() {
        let s = surface();
        assert_eq!(s.pixel_dimensions(), (64, 64));
    }
}
