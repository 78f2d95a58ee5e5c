//! Error types for usericon.

use usericon_render::RenderError;

use crate::generator::RenderedIcon;

/// Result type alias for usericon operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating or mounting an icon.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The name could not be turned into initials.
    #[error(transparent)]
    Core(#[from] usericon_core::Error),

    /// Serializing or rasterizing the icon failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// No element with the given identifier exists in the document.
    ///
    /// The icon that could not be mounted is handed back unchanged.
    #[error("mount target '{id}' not found")]
    MountTargetNotFound {
        id: String,
        icon: Box<RenderedIcon>,
    },

    /// The element handle is invalid or the element has been removed.
    #[error("invalid or removed element")]
    InvalidElement,
}

impl Error {
    /// Create a mount-target-not-found error carrying the unmounted icon.
    pub fn mount_target_not_found(id: impl Into<String>, icon: RenderedIcon) -> Self {
        Self::MountTargetNotFound {
            id: id.into(),
            icon: Box::new(icon),
        }
    }

    /// Recover the icon from a failed mount.
    ///
    /// Returns `None` for every other error.
    pub fn into_unmounted_icon(self) -> Option<RenderedIcon> {
        match self {
            Self::MountTargetNotFound { icon, .. } => Some(*icon),
            _ => None,
        }
    }

    /// The core error kind, if this error came from initials extraction.
    pub fn core_kind(&self) -> Option<usericon_core::ErrorKind> {
        match self {
            Self::Core(err) => Some(err.kind()),
            _ => None,
        }
    }
}
