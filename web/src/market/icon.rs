use shared_types::Weekday;

use crate::market::aggregate::day_counts;
use crate::market::palette::color_for;

/// Rendered size of a marker icon in CSS pixels.
pub const ICON_SIZE: f64 = 25.0;

const CENTER: f64 = 12.5;
const RADIUS: f64 = 12.5;

/// Builds the 25x25 pie-chart marker icon for one location as an SVG data
/// URI: one wedge per distinct day, proportional to how many rows carry
/// that day, colored from the day palette. Transparent background, no
/// border.
pub fn pie_icon_data_uri(dias: &[Weekday]) -> String {
    let counts = day_counts(dias);
    let total: usize = counts.iter().map(|(_, n)| n).sum();

    let mut shapes = String::new();
    if counts.len() == 1 {
        shapes.push_str(&format!(
            "%3Ccircle cx='{CENTER}' cy='{CENTER}' r='{RADIUS}' fill='{}'/%3E",
            encode_color(color_for(counts[0].0)),
        ));
    } else {
        let mut seen = 0usize;
        for (dia, n) in &counts {
            let from = std::f64::consts::TAU * seen as f64 / total as f64;
            seen += n;
            let to = std::f64::consts::TAU * seen as f64 / total as f64;
            shapes.push_str(&wedge_path(from, to, color_for(*dia)));
        }
    }

    format!(
        "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='25' height='25' viewBox='0 0 25 25'%3E{}%3C/svg%3E",
        shapes
    )
}

// One pie wedge from `from` to `to`, angles in radians measured clockwise
// from 12 o'clock.
fn wedge_path(from: f64, to: f64, color: &str) -> String {
    let (x0, y0) = rim_point(from);
    let (x1, y1) = rim_point(to);
    let large_arc = if to - from > std::f64::consts::PI { 1 } else { 0 };
    format!(
        "%3Cpath fill='{}' d='M{CENTER} {CENTER} L{:.3} {:.3} A{RADIUS} {RADIUS} 0 {} 1 {:.3} {:.3} Z'/%3E",
        encode_color(color),
        x0,
        y0,
        large_arc,
        x1,
        y1
    )
}

fn rim_point(angle: f64) -> (f64, f64) {
    (CENTER + RADIUS * angle.sin(), CENTER - RADIUS * angle.cos())
}

// '#' is not valid inside a data URI; percent-encode it the way the rest
// of the SVG markup is.
fn encode_color(color: &str) -> String {
    color.replace('#', "%23")
}
