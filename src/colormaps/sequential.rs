//! Sequential colormaps (single-hue progression).

use super::colormap::{lerp_color, Colormap};

/// ColorBrewer YlOrBr control points, light to dark.
const YLORBR_STOPS: [[u8; 3]; 9] = [
    [255, 255, 229],
    [255, 247, 188],
    [254, 227, 145],
    [254, 196, 79],
    [254, 153, 41],
    [236, 112, 20],
    [204, 76, 2],
    [153, 52, 4],
    [102, 37, 6],
];

/// YlOrBr colormap - yellow through orange to brown
pub struct YlOrBr;

impl Colormap for YlOrBr {
    fn map_normalized(&self, value: f32) -> [u8; 4] {
        let v = value.clamp(0.0, 1.0);

        let scaled = v * (YLORBR_STOPS.len() - 1) as f32;
        let idx = (scaled as usize).min(YLORBR_STOPS.len() - 2);
        let t = scaled - idx as f32;

        let [r, g, b] = lerp_color(YLORBR_STOPS[idx], YLORBR_STOPS[idx + 1], t);
        [r, g, b, 255]
    }

    fn name(&self) -> &str {
        "ylorbr"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(YlOrBr.map_normalized(0.0), [255, 255, 229, 255]);
        assert_eq!(YlOrBr.map_normalized(1.0), [102, 37, 6, 255]);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(YlOrBr.map_normalized(-0.5), YlOrBr.map_normalized(0.0));
        assert_eq!(YlOrBr.map_normalized(2.0), YlOrBr.map_normalized(1.0));
    }

    #[test]
    fn test_monotonic_darkening() {
        // Brightness should not increase as the value grows
        let mut previous = u32::MAX;
        for i in 0..=8 {
            let [r, g, b, _] = YlOrBr.map_normalized(i as f32 / 8.0);
            let brightness = r as u32 + g as u32 + b as u32;
            assert!(brightness <= previous);
            previous = brightness;
        }
    }

    #[test]
    fn test_range_mapping() {
        // map() normalizes against the data range before sampling the ramp
        assert_eq!(YlOrBr.map(100.0, 100.0, 200.0), YlOrBr.map_normalized(0.0));
        assert_eq!(YlOrBr.map(200.0, 100.0, 200.0), YlOrBr.map_normalized(1.0));
    }
}
