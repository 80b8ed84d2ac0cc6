/// Options for [`super::ReorderGesture`] and [`super::ReorderController`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReorderOptions {
    /// Row height (in points) used until the row has been measured.
    ///
    /// Also used when a measurement comes back as zero or non-finite.
    pub default_row_height: f32,

    /// Vertical gap between two rows, in points.
    ///
    /// The distance a row travels per swap is `row height + row_spacing`.
    pub row_spacing: f32,

    /// Fraction of the row extent the dragged row has to travel before it swaps with its neighbor.
    ///
    /// Below `0.5` the swap fires before the row fully overlaps the neighbor, which feels more
    /// responsive.
    pub swap_threshold_fraction: f32,

    /// Scale applied to the row while it is lifted.
    pub lift_scale: f32,

    /// Duration (seconds) of the lift scale-up.
    pub lift_duration: f32,

    /// Duration (seconds) of the return-to-rest animation after release.
    pub settle_duration: f32,

    /// If true, each swap requests a selection haptic pulse (when a haptic backend is installed).
    pub haptics: bool,
}

impl Default for ReorderOptions {
    fn default() -> Self {
        Self {
            default_row_height: 76.0,
            row_spacing: 12.0,
            swap_threshold_fraction: 0.45,
            lift_scale: 1.03,
            lift_duration: 0.09,
            settle_duration: 0.14,
            haptics: true,
        }
    }
}

impl ReorderOptions {
    /// Distance between the tops of two neighboring rows.
    ///
    /// Falls back to [`Self::default_row_height`] when `measured` is missing or degenerate.
    /// The result is always positive.
    pub fn row_extent(&self, measured: Option<f32>) -> f32 {
        let height = measured
            .filter(|h| h.is_finite() && *h > 0.0)
            .unwrap_or(self.default_row_height);
        let extent = height + self.row_spacing.max(0.0);
        if extent.is_finite() && extent > 0.0 {
            extent
        } else {
            Self::default().row_extent(None)
        }
    }

    /// Replaces knobs that would break the drag arithmetic with their defaults.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.default_row_height.is_finite() && self.default_row_height > 0.0) {
            self.default_row_height = defaults.default_row_height;
        }
        if !(self.row_spacing.is_finite() && self.row_spacing >= 0.0) {
            self.row_spacing = defaults.row_spacing;
        }
        if !(self.swap_threshold_fraction > 0.0 && self.swap_threshold_fraction <= 1.0) {
            self.swap_threshold_fraction = defaults.swap_threshold_fraction;
        }
        if !(self.lift_scale.is_finite() && self.lift_scale > 0.0) {
            self.lift_scale = defaults.lift_scale;
        }
        if !(self.lift_duration.is_finite() && self.lift_duration >= 0.0) {
            self.lift_duration = defaults.lift_duration;
        }
        if !(self.settle_duration.is_finite() && self.settle_duration >= 0.0) {
            self.settle_duration = defaults.settle_duration;
        }
        self
    }
}

#[cfg(feature = "persistence")]
#[derive(Debug)]
pub enum OptionsError {
    RonSerialize(ron::Error),
    RonDeserialize(ron::error::SpannedError),
}

#[cfg(feature = "persistence")]
impl std::fmt::Display for OptionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RonSerialize(err) => write!(f, "ron serialize error: {err}"),
            Self::RonDeserialize(err) => write!(f, "ron deserialize error: {err}"),
        }
    }
}

#[cfg(feature = "persistence")]
impl std::error::Error for OptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RonSerialize(err) => Some(err),
            Self::RonDeserialize(err) => Some(err),
        }
    }
}

#[cfg(feature = "persistence")]
impl From<ron::Error> for OptionsError {
    fn from(err: ron::Error) -> Self {
        Self::RonSerialize(err)
    }
}

#[cfg(feature = "persistence")]
impl From<ron::error::SpannedError> for OptionsError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::RonDeserialize(err)
    }
}

#[cfg(feature = "persistence")]
impl ReorderOptions {
    /// Parses options from RON. Missing fields take their defaults; the result is sanitized.
    ///
    /// # Errors
    /// Returns [`OptionsError::RonDeserialize`] if `text` is not valid RON for this struct.
    pub fn from_ron_str(text: &str) -> Result<Self, OptionsError> {
        let options: Self = ron::from_str(text)?;
        Ok(options.sanitized())
    }

    /// # Errors
    /// Returns [`OptionsError::RonSerialize`] if serialization fails.
    pub fn to_ron_string(&self) -> Result<String, OptionsError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }
}
