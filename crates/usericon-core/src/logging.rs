//! Logging facilities for usericon.
//!
//! usericon uses the `tracing` crate for instrumentation and never installs
//! a subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("usericon=debug,usericon_core=trace")
//!     .init();
//! ```
//!
//! Every target below is the path of the module that logs under it.
//! `usericon-render` does not depend on this crate; its rasterizer logs
//! under its own module path, `usericon_render::raster`.

/// Span names used throughout usericon for tracing.
pub mod span_names {
    /// Icon assembly span.
    pub const GENERATE: &str = "usericon::generate";
    /// Mounting an icon into a document.
    pub const MOUNT: &str = "usericon::mount";
    /// Rasterizing an SVG document.
    pub const RASTERIZE: &str = "usericon::rasterize";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Initials extraction target.
    pub const INITIALS: &str = "usericon_core::initials";
    /// Palette and color selection target.
    pub const PALETTE: &str = "usericon_core::palette";
    /// Icon assembly target.
    pub const GENERATOR: &str = "usericon::generator";
    /// Document and mounting target.
    pub const DOCUMENT: &str = "usericon::document";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_are_module_paths() {
        assert_eq!(targets::INITIALS, "usericon_core::initials");
        assert_eq!(targets::PALETTE, "usericon_core::palette");
        assert_eq!(targets::GENERATOR, "usericon::generator");
        assert_eq!(targets::DOCUMENT, "usericon::document");
    }

    #[test]
    fn test_span_names_are_namespaced() {
        for name in [span_names::GENERATE, span_names::MOUNT, span_names::RASTERIZE] {
            assert!(name.starts_with("usericon::"), "{name}");
        }
    }
}
