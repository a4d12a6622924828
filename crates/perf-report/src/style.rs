//! Display-name and color tables
//!
//! Process-wide immutable lookup tables with explicit fallbacks for
//! unrecognized keys. Unknown browsers keep their raw name and draw in
//! black; unknown scenarios keep their raw name as the label.

use plotters::style::RGBColor;

/// Default machine description shown under chart titles.
pub const DEFAULT_SUBTITLE: &str = "Apple M1 Max 64GB";

// "zommInOut" is a historical typo that still appears in old result
// files; both spellings label as Zooming.
const SCENARIO_LABELS: &[(&str, &str)] = &[
    ("annotationChange", "Annotation changes"),
    ("zoomInOut", "Zooming"),
    ("zommInOut", "Zooming"),
    ("dragCanvas", "Dragging"),
    ("clickPoint", "Point selection"),
];

const BROWSER_STYLES: &[(&str, &str, RGBColor)] = &[
    ("chrome", "Chrome", RGBColor(0x42, 0x85, 0xF4)),
    ("firefox", "Firefox", RGBColor(0xFF, 0x71, 0x39)),
    ("safari", "Safari", RGBColor(0x0F, 0xB5, 0xEE)),
];

const FALLBACK_COLOR: RGBColor = RGBColor(0, 0, 0);

/// Human-readable label for a scenario name.
pub fn scenario_label(name: &str) -> &str {
    SCENARIO_LABELS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, label)| *label)
        .unwrap_or(name)
}

/// Display name for a browser, falling back to the raw name.
pub fn browser_label(name: &str) -> &str {
    BROWSER_STYLES
        .iter()
        .find(|(key, _, _)| *key == name)
        .map(|(_, label, _)| *label)
        .unwrap_or(name)
}

/// Series color for a browser, falling back to black.
pub fn browser_color(name: &str) -> RGBColor {
    BROWSER_STYLES
        .iter()
        .find(|(key, _, _)| *key == name)
        .map(|(_, _, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_labels() {
        assert_eq!(scenario_label("zoomInOut"), "Zooming");
        assert_eq!(scenario_label("zommInOut"), "Zooming");
        assert_eq!(scenario_label("clickPoint"), "Point selection");
        assert_eq!(scenario_label("somethingNew"), "somethingNew");
    }

    #[test]
    fn test_browser_styles_with_fallback() {
        assert_eq!(browser_label("chrome"), "Chrome");
        assert_eq!(browser_color("firefox"), RGBColor(0xFF, 0x71, 0x39));
        assert_eq!(browser_label("ladybird"), "ladybird");
        assert_eq!(browser_color("ladybird"), RGBColor(0, 0, 0));
    }
}
