//! Easing curves for transition progress.

/// Maps linear progress in `[0, 1]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// `4t^3` for the first half, `1 - (-2t + 2)^3 / 2` for the second.
    #[default]
    EaseInOutCubic,
}

impl Easing {
    /// Applies the curve. Input is clamped to `[0, 1]`; NaN maps to 0.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInOutCubic => "ease-in-out-cubic",
        }
    }
}

impl std::str::FromStr for Easing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Easing::Linear),
            "ease-in-out-cubic" | "ease_in_out_cubic" => Ok(Easing::EaseInOutCubic),
            other => Err(format!("unknown easing '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for easing in [Easing::Linear, Easing::EaseInOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_ease_in_out_cubic_values() {
        let e = Easing::EaseInOutCubic;
        assert_eq!(e.apply(0.5), 0.5);
        assert!((e.apply(0.25) - 0.0625).abs() < 1e-12);
        assert!((e.apply(0.75) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn test_monotonic() {
        let e = Easing::EaseInOutCubic;
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = e.apply(i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_out_of_range_input() {
        assert_eq!(Easing::EaseInOutCubic.apply(-3.0), 0.0);
        assert_eq!(Easing::EaseInOutCubic.apply(4.0), 1.0);
        assert_eq!(Easing::Linear.apply(f64::NAN), 0.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("linear".parse::<Easing>(), Ok(Easing::Linear));
        assert_eq!(
            Easing::EaseInOutCubic.as_str().parse::<Easing>(),
            Ok(Easing::EaseInOutCubic)
        );
        assert!("bounce".parse::<Easing>().is_err());
    }
}
