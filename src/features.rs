//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod fade;
pub mod settings;
pub mod suggest;

pub use fade::{ColorTransition, DEFAULT_BACKGROUND, FadeAnimation, Rgb, background_for_icon};
pub use settings::Settings;
pub use suggest::{CITIES, suggestions};
