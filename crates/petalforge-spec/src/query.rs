//! Flat key/value mapping of a parameter set, used for sharing and storage.
//!
//! Keys match the JSON field names. Decoding ignores unknown keys, keeps the
//! default for missing keys and clamps every parsed value.

use url::form_urlencoded;

use crate::color::Color;
use crate::error::ParamsError;
use crate::params::*;

impl ParameterSet {
    /// Flattens the set into `(key, value)` pairs in declaration order.
    ///
    /// Floats use Rust's shortest round-trip formatting, so decoding the pairs
    /// yields bit-identical values.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            (KEY_WAVINESS, self.waviness.to_string()),
            (KEY_STAGGERED_ROTATION, self.staggered_rotation_rad.to_string()),
            (KEY_NUM_PETALS, self.num_petals.to_string()),
            (KEY_NUM_LAYERS, self.num_layers.to_string()),
            (KEY_INNER_RADIUS_MIN, self.inner_radius_min.to_string()),
            (KEY_INNER_RADIUS_MAX, self.inner_radius_max.to_string()),
            (KEY_ANGLE_RANGE, self.angle_range_rad.to_string()),
            (KEY_INNER_AMPLITUDE, self.inner_amplitude.to_string()),
            (KEY_STROKE_WIDTH, self.stroke_width.to_string()),
            (KEY_OPACITY_BASE, self.opacity_base.to_string()),
            (KEY_OPACITY_VARIATION, self.opacity_variation.to_string()),
            (KEY_LINE_ROTATION_SPREAD, self.line_rotation_spread_deg.to_string()),
            (KEY_ANIMATION_DURATION, self.animation_duration_ms.to_string()),
            (KEY_BACKGROUND_COLOR, self.background_color.to_hex()),
            (KEY_LINE_COLOR, self.line_color.to_hex()),
        ]
    }

    /// Builds a set from `(key, value)` pairs on top of the defaults.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ParamsError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::default().with_pairs(pairs)
    }

    /// Applies `(key, value)` pairs on top of this set and clamps the result.
    pub fn with_pairs<I, K, V>(&self, pairs: I) -> Result<Self, ParamsError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = self.clone();
        for (key, value) in pairs {
            let key = key.as_ref().trim();
            let value = value.as_ref().trim();
            match key {
                KEY_WAVINESS => params.waviness = parse_f64(key, value)?,
                KEY_STAGGERED_ROTATION => params.staggered_rotation_rad = parse_f64(key, value)?,
                KEY_NUM_PETALS => params.num_petals = parse_u32(key, value)?,
                KEY_NUM_LAYERS => params.num_layers = parse_u32(key, value)?,
                KEY_INNER_RADIUS_MIN => params.inner_radius_min = parse_f64(key, value)?,
                KEY_INNER_RADIUS_MAX => params.inner_radius_max = parse_f64(key, value)?,
                KEY_ANGLE_RANGE => params.angle_range_rad = parse_f64(key, value)?,
                KEY_INNER_AMPLITUDE => params.inner_amplitude = parse_f64(key, value)?,
                KEY_STROKE_WIDTH => params.stroke_width = parse_f64(key, value)?,
                KEY_OPACITY_BASE => params.opacity_base = parse_f64(key, value)?,
                KEY_OPACITY_VARIATION => params.opacity_variation = parse_f64(key, value)?,
                KEY_LINE_ROTATION_SPREAD => {
                    params.line_rotation_spread_deg = parse_f64(key, value)?
                }
                KEY_ANIMATION_DURATION => params.animation_duration_ms = parse_u32(key, value)?,
                KEY_BACKGROUND_COLOR => params.background_color = Color::parse(value)?,
                KEY_LINE_COLOR => params.line_color = Color::parse(value)?,
                _ => {}
            }
        }
        Ok(params.clamped())
    }

    /// Encodes the set as a URL query string (`key=value&...`), form-encoded.
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_pairs())
            .finish()
    }

    /// Decodes a URL query string. A leading `?` is accepted.
    pub fn from_query(query: &str) -> Result<Self, ParamsError> {
        Self::default().with_query(query)
    }

    /// Applies a URL query string on top of this set.
    ///
    /// An unescaped `#` in a value is kept as-is, so `lineColor=#ff0000`
    /// decodes like `lineColor=%23ff0000`.
    pub fn with_query(&self, query: &str) -> Result<Self, ParamsError> {
        let query = query.trim().trim_start_matches('?');
        self.with_pairs(form_urlencoded::parse(query.as_bytes()))
    }
}

fn parse_f64(key: &str, value: &str) -> Result<f64, ParamsError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(key, value))
}

fn parse_u32(key: &str, value: &str) -> Result<u32, ParamsError> {
    if let Ok(v) = value.parse::<u32>() {
        return Ok(v);
    }
    // Sliders may hand over "12.0" or a negative number; round and saturate.
    let v = parse_f64(key, value)?;
    Ok(v.round().clamp(0.0, u32::MAX as f64) as u32)
}

fn invalid(key: &str, value: &str) -> ParamsError {
    ParamsError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_query_round_trip_is_exact() {
        let params = ParameterSet {
            waviness: 0.123456789,
            staggered_rotation_rad: -0.5,
            num_layers: 70,
            line_color: Color::rgba(10, 20, 30, 40),
            ..Default::default()
        };
        let query = params.to_query();
        assert_eq!(ParameterSet::from_query(&query).unwrap(), params);
    }

    #[test]
    fn test_colors_are_percent_encoded() {
        let query = ParameterSet::default().to_query();
        assert!(query.contains("lineColor=%23f4efe2"));
        assert!(!query.contains('#'));
    }

    #[test]
    fn test_unescaped_hash_is_tolerated() {
        let params = ParameterSet::from_query("?lineColor=#ff0000").unwrap();
        assert_eq!(params.line_color, Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_unknown_keys_are_ignored_and_missing_keep_defaults() {
        let params = ParameterSet::from_query("numPetals=7&theme=dark").unwrap();
        assert_eq!(params.num_petals, 7);
        assert_eq!(params.waviness, ParameterSet::default().waviness);
    }

    #[test]
    fn test_values_are_clamped() {
        let params = ParameterSet::from_query("numLayers=9000&opacityBase=3").unwrap();
        assert_eq!(params.num_layers, 120);
        assert_eq!(params.opacity_base, 1.0);
    }

    #[test]
    fn test_float_integers_are_accepted() {
        let params = ParameterSet::from_query("numPetals=6.0&animationDurationMs=-5").unwrap();
        assert_eq!(params.num_petals, 6);
        assert_eq!(params.animation_duration_ms, 0);
    }

    #[test]
    fn test_garbage_value_is_an_error() {
        let err = ParameterSet::from_query("waviness=lots").unwrap_err();
        match err {
            ParamsError::InvalidValue { key, value } => {
                assert_eq!(key, "waviness");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(ParameterSet::from_query("waviness=NaN").is_err());
        assert!(ParameterSet::from_query("lineColor=%23zz").is_err());
    }

    #[test]
    fn test_with_pairs_layers_on_existing_set() {
        let base = ParameterSet {
            num_petals: 9,
            ..Default::default()
        };
        let params = base.with_pairs([("waviness", "1.25")]).unwrap();
        assert_eq!(params.num_petals, 9);
        assert_eq!(params.waviness, 1.25);
    }

    #[test]
    fn test_form_encoding_is_decoded() {
        let params = ParameterSet::from_query("lineColor=%23FF8000&numPetals+=%207").unwrap();
        assert_eq!(params.line_color, Color::rgb(255, 128, 0));
        assert_eq!(params.num_petals, 7);
        assert!(ParameterSet::from_query("lineColor=rgb(1,+2,+3)").is_ok());
        assert_eq!(
            ParameterSet::from_query("&&waviness=1.5&").unwrap().waviness,
            1.5
        );
    }
}
