use fontfall_types::FontClass;

/// Metrics of a locally installed face used as a fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackFace {
    /// Name passed to `local()`.
    pub local_name: String,
    /// Average advance width of the glyphs `a`–`z`, in font units.
    pub az_avg_width: f64,
    pub units_per_em: f64,
}

impl FallbackFace {
    pub fn new(local_name: impl Into<String>, az_avg_width: f64, units_per_em: f64) -> Self {
        Self {
            local_name: local_name.into(),
            az_avg_width,
            units_per_em,
        }
    }

    pub fn times_new_roman() -> Self {
        Self::new("Times New Roman", 854.3953488372093, 2048.0)
    }

    pub fn arial() -> Self {
        Self::new("Arial", 934.5116279069767, 2048.0)
    }

    pub fn courier_new() -> Self {
        Self::new("Courier New", 1229.0, 2048.0)
    }

    /// Average `a`–`z` width as a fraction of the em.
    pub fn az_avg_width_em(&self) -> f64 {
        self.az_avg_width / self.units_per_em
    }

    /// The face used for one of the built-in labels `serif`, `sans-serif` and
    /// `mono`.
    pub fn builtin(class: &FontClass) -> Option<Self> {
        match class.as_str() {
            FontClass::SERIF => Some(Self::times_new_roman()),
            FontClass::SANS_SERIF => Some(Self::arial()),
            FontClass::MONO => Some(Self::courier_new()),
            _ => None,
        }
    }
}
