use crate::core::data::colour::Colour;

/// Converts an HSL triple (each component in `0.0..=1.0`) to RGB.
#[must_use]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Colour {
    if saturation == 0.0 {
        let grey = to_channel(lightness);
        return Colour::new(grey, grey, grey);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    Colour {
        r: to_channel(hue_to_channel(p, q, hue + 1.0 / 3.0)),
        g: to_channel(hue_to_channel(p, q, hue)),
        b: to_channel(hue_to_channel(p, q, hue - 1.0 / 3.0)),
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Colour::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), Colour::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), Colour::new(0, 0, 255));
    }

    #[test]
    fn test_secondary_hue() {
        assert_eq!(hsl_to_rgb(60.0 / 360.0, 1.0, 0.5), Colour::new(255, 255, 0));
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        assert_eq!(hsl_to_rgb(0.7, 0.0, 0.5), Colour::new(128, 128, 128));
        assert_eq!(hsl_to_rgb(0.7, 0.0, 1.0), Colour::new(255, 255, 255));
    }

    #[test]
    fn test_lightness_extremes() {
        assert_eq!(hsl_to_rgb(0.3, 1.0, 0.0), Colour::BLACK);
        assert_eq!(hsl_to_rgb(0.3, 1.0, 1.0), Colour::new(255, 255, 255));
    }
}
