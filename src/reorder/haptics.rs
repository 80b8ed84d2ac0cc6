/// A platform facility that can play short haptic pulses.
///
/// Implementations may fail (no actuator, permission denied, backend busy). The reorder logic
/// treats every failure as "no pulse" and carries on.
pub trait HapticFeedback {
    /// A light "selection changed" tick, played once per swap.
    ///
    /// # Errors
    /// Returns a [`HapticError`] when the pulse could not be delivered.
    fn selection(&self) -> Result<(), HapticError>;
}

#[derive(Debug)]
pub enum HapticError {
    /// The platform has no haptic hardware or the facility is not loaded.
    Unavailable,

    /// The platform refused the request.
    Rejected(String),
}

impl std::fmt::Display for HapticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "haptic feedback unavailable"),
            Self::Rejected(reason) => write!(f, "haptic feedback rejected: {reason}"),
        }
    }
}

impl std::error::Error for HapticError {}

/// Plays a selection pulse and swallows any failure.
pub(super) fn pulse_best_effort(haptics: Option<&dyn HapticFeedback>) {
    let Some(haptics) = haptics else {
        return;
    };
    if let Err(err) = haptics.selection() {
        log::debug!("ignoring haptic failure: {err}");
    }
}
