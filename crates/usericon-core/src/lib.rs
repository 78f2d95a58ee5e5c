//! Core logic for usericon.
//!
//! This crate holds everything about an avatar icon that does not involve
//! drawing it:
//!
//! - **Initials**: [`extract_initials`] turns a display name into a 0-2
//!   character label
//! - **Palette**: [`ColorPalette::STANDARD`] is the fixed 26-color palette
//! - **Color selection**: [`select_color`] deterministically maps a name to a
//!   palette entry
//!
//! # Example
//!
//! ```
//! use usericon_core::{extract_initials, select_color, ColorPalette};
//!
//! let initials = extract_initials("jane-doe")?;
//! assert_eq!(initials.as_str(), "jd");
//!
//! let color = select_color("jane-doe").unwrap();
//! assert!(ColorPalette::STANDARD.contains(color));
//! assert_eq!(color.to_hex(), "#ff6b6b");
//! # Ok::<(), usericon_core::Error>(())
//! ```

pub mod color;
pub mod initials;
pub mod logging;
pub mod palette;

mod error;

pub use color::Color;
pub use error::{Error, ErrorKind, Result};
pub use initials::{DELIMITERS, Initials, extract_initials};
pub use palette::{ALPHABET, ColorPalette, PALETTE_SIZE, alphabet_position, select_color};
