//! Software rendering module
//!
//! Immediate-mode fills into an RGBA framebuffer the host blits to screen.

pub mod canvas;
pub mod scene;

pub use canvas::{DrawContext, Framebuffer, Pixel, colors};
pub use scene::draw_game;
