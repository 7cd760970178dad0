//! Door Configuration Errors
//!
//! Construction-time validation failures for [`DoorController`](super::DoorController)
//! and [`DoorHinge`](super::DoorHinge). Once a door is built it never fails.

/// Errors raised when door parameters cannot form a valid controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DoorConfigError {
    /// `open_radius` must be strictly positive.
    NonPositiveOpenRadius(f32),
    /// `close_radius` must be strictly greater than `open_radius`.
    RadiiOutOfOrder { open: f32, close: f32 },
    /// One of the two open angles is zero.
    ZeroOpenAngle,
    /// Outward and inward open angles must have opposite signs.
    OpenAnglesSameSign { outward: f32, inward: f32 },
    /// Smoothing factor must lie in the open interval (0, 1).
    SmoothingOutOfRange(f32),
    /// A parameter was NaN or infinite.
    NonFinite(&'static str),
    /// The facing axis has zero length on the ground plane.
    ZeroFacing,
    /// Door panel width, height or thickness is not positive.
    InvalidDimensions,
}

impl std::fmt::Display for DoorConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DoorConfigError::NonPositiveOpenRadius(r) => {
                write!(f, "open radius must be positive, got {r}")
            }
            DoorConfigError::RadiiOutOfOrder { open, close } => write!(
                f,
                "close radius ({close}) must be greater than open radius ({open})"
            ),
            DoorConfigError::ZeroOpenAngle => write!(f, "open angles must be nonzero"),
            DoorConfigError::OpenAnglesSameSign { outward, inward } => write!(
                f,
                "outward ({outward}) and inward ({inward}) open angles must have opposite signs"
            ),
            DoorConfigError::SmoothingOutOfRange(s) => {
                write!(f, "smoothing factor must be in (0, 1), got {s}")
            }
            DoorConfigError::NonFinite(field) => write!(f, "{field} is not a finite number"),
            DoorConfigError::ZeroFacing => write!(f, "facing axis must be non-zero"),
            DoorConfigError::InvalidDimensions => {
                write!(f, "door width, height and thickness must be positive")
            }
        }
    }
}

impl std::error::Error for DoorConfigError {}
