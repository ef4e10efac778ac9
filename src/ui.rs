//! UI module - components, animation and theme

pub mod animation;
pub mod components;
pub mod theme;
