use std::collections::HashMap;
use std::sync::Arc;

pub const DEFAULT_PILL_BACKGROUND: &str = "#e5e5e5";
pub const DEFAULT_PILL_FOREGROUND: &str = "#444444";

/// Foreground used on light backgrounds.
pub const DARK_FOREGROUND: &str = "#181818";

/// Foreground used on dark backgrounds.
pub const LIGHT_FOREGROUND: &str = "#ffffff";

/// Lowercased field value to color token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PillColorMap {
    colors: HashMap<String, String>,
}

impl PillColorMap {
    /// Parse a comma-separated list of `value:color` pairs.
    ///
    /// Pairs missing either side are skipped.
    pub fn parse(spec: &str) -> Self {
        let mut colors = HashMap::new();

        for mapping in spec.split(',') {
            let mut parts = mapping.split(':').map(str::trim);
            match (parts.next(), parts.next()) {
                (Some(value), Some(color)) if !value.is_empty() && !color.is_empty() => {
                    colors.insert(value.to_lowercase(), color.to_string());
                }
                _ => {
                    if !mapping.trim().is_empty() {
                        log::debug!("Skipping malformed pill color mapping '{}'", mapping);
                    }
                }
            }
        }

        Self { colors }
    }

    pub fn get(&self, value: &str) -> Option<&str> {
        self.colors.get(&value.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Style for a pill showing `value`, neutral when nothing matches.
    pub fn style_for(&self, value: &str) -> PillStyle {
        if value.is_empty() || self.is_empty() {
            return PillStyle::neutral();
        }

        match self.get(value) {
            Some(color) => PillStyle {
                background: color.to_string(),
                foreground: contrasting_text(color).to_string(),
            },
            None => PillStyle::neutral(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PillStyle {
    pub background: String,
    pub foreground: String,
}

impl PillStyle {
    pub fn neutral() -> Self {
        Self {
            background: DEFAULT_PILL_BACKGROUND.to_string(),
            foreground: DEFAULT_PILL_FOREGROUND.to_string(),
        }
    }

    pub fn css(&self) -> String {
        format!(
            "background-color: {}; color: {};",
            self.background, self.foreground
        )
    }
}

/// Pick a readable foreground for a `#rrggbb` background.
///
/// Uses `L = (0.299R + 0.587G + 0.114B) / 255`; anything that does not parse
/// as six hex digits gets the light foreground.
pub fn contrasting_text(hex_color: &str) -> &'static str {
    let hex = hex_color.trim().trim_start_matches('#');

    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
    };

    let (Some(r), Some(g), Some(b)) = (channel(0..2), channel(2..4), channel(4..6)) else {
        return LIGHT_FOREGROUND;
    };

    let luminance = (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0;

    if luminance > 0.5 {
        DARK_FOREGROUND
    } else {
        LIGHT_FOREGROUND
    }
}

/// Memoizes parsed pill maps by their literal spec string.
///
/// The cache is unbounded; the number of distinct specs equals the number of
/// configured columns.
#[derive(Debug, Default)]
pub struct PillColorResolver {
    cache: HashMap<String, Arc<PillColorMap>>,
    empty: Arc<PillColorMap>,
}

impl PillColorResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, spec: &str) -> Arc<PillColorMap> {
        if spec.is_empty() {
            return self.empty.clone();
        }

        self.cache
            .entry(spec.to_string())
            .or_insert_with(|| Arc::new(PillColorMap::parse(spec)))
            .clone()
    }

    pub fn cached_specs(&self) -> usize {
        self.cache.len()
    }
}
