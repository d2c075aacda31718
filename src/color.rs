use eframe::egui::Color32;

use crate::data::model::FlightMode;

// ---------------------------------------------------------------------------
// Fixed style table
// ---------------------------------------------------------------------------

/// Overlay dataset points (the optional second CSV).
pub const OVERLAY_COLOR: Color32 = Color32::from_rgb(0x1f, 0x77, 0xb4);

/// Direction arrows between consecutive track points.
pub const ARROW_COLOR: Color32 = Color32::from_rgb(0x2c, 0xa0, 0x2c);

/// Highlight for points already picked into the mission.
pub const SELECTION_COLOR: Color32 = Color32::from_rgb(0xff, 0xd7, 0x00);

/// Style for mode labels outside the known set.
const FALLBACK_COLOR: Color32 = Color32::GRAY;

/// Color of a track point, keyed by flight mode.
///
/// Samples without mode information keep the red the primary dataset has
/// always been drawn in.
pub fn mode_color(mode: &FlightMode) -> Color32 {
    match mode {
        FlightMode::Unknown => Color32::from_rgb(0xd6, 0x27, 0x28),
        FlightMode::Manual => Color32::from_rgb(0xff, 0x7f, 0x0e),
        FlightMode::Guided => Color32::from_rgb(0x94, 0x67, 0xbd),
        FlightMode::Auto => Color32::from_rgb(0x17, 0xbe, 0xcf),
        FlightMode::Other(_) => FALLBACK_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_modes_have_distinct_colors() {
        let colors = [
            mode_color(&FlightMode::Unknown),
            mode_color(&FlightMode::Manual),
            mode_color(&FlightMode::Guided),
            mode_color(&FlightMode::Auto),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unrecognized_modes_share_the_fallback() {
        assert_eq!(
            mode_color(&FlightMode::Other("LOITER".into())),
            mode_color(&FlightMode::Other("RTL".into()))
        );
    }
}
