// Colour blending
//
// Terminals have no alpha channel. An opacity is rendered by mixing the
// stroke or fill colour into the background it would be drawn over.

use ratatui::style::Color;

/// Interpolate between two RGB colors based on a ratio (0.0 ~ 1.0)
///
/// # Arguments
/// * `color1` - Starting color as (r, g, b) tuple
/// * `color2` - Ending color as (r, g, b) tuple
/// * `ratio` - Interpolation ratio (0.0 = color1, 1.0 = color2)
///
/// # Returns
/// Interpolated Color::Rgb value
pub fn interpolate_color(color1: (u8, u8, u8), color2: (u8, u8, u8), ratio: f32) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);
    let r = (color1.0 as f32 + (color2.0 as f32 - color1.0 as f32) * ratio).round() as u8;
    let g = (color1.1 as f32 + (color2.1 as f32 - color1.1 as f32) * ratio).round() as u8;
    let b = (color1.2 as f32 + (color2.2 as f32 - color1.2 as f32) * ratio).round() as u8;
    Color::Rgb(r, g, b)
}

/// Render `foreground` at `opacity` over `background`
///
/// Non-RGB colours cannot be mixed and are returned unchanged.
pub fn with_opacity(foreground: Color, opacity: f64, background: Color) -> Color {
    match (background, foreground) {
        (Color::Rgb(br, bg, bb), Color::Rgb(fr, fg, fb)) => {
            interpolate_color((br, bg, bb), (fr, fg, fb), opacity as f32)
        }
        _ => foreground,
    }
}
