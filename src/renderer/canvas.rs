//! Immediate-mode drawing target
//!
//! `DrawContext` mirrors the tiny graphics API of wrist devices: set a fill
//! colour, then fill shapes at integer pixel coordinates.

use bytemuck::{Pod, Zeroable};

/// RGBA8 pixel, laid out for direct upload to a 2D canvas
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Pixel;

    pub const BLACK: Pixel = Pixel::rgb(0, 0, 0);
    pub const WHITE: Pixel = Pixel::rgb(255, 255, 255);
    pub const BACKGROUND: Pixel = BLACK;
    pub const DISC: Pixel = WHITE;
}

/// Minimal fill-only drawing API
pub trait DrawContext {
    fn set_fill_color(&mut self, color: Pixel);
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32);
    /// Fill a circle centred on a pixel
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32);
}

/// Software RGBA framebuffer
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    fill: Pixel,
    pixels: Vec<Pixel>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fill: colors::WHITE,
            pixels: vec![colors::BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Raw RGBA bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Fill a horizontal span, clipped to the buffer
    fn span(&mut self, y: i32, x0: i32, x1: i32) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(self.width as i32 - 1);
        if x0 > x1 {
            return;
        }
        let row = y as usize * self.width as usize;
        self.pixels[row + x0 as usize..=row + x1 as usize].fill(self.fill);
    }

    /// Text dump for terminals: `#` for lit pixels, `.` for background
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in self.pixels.chunks(self.width as usize) {
            out.extend(row.iter().map(|p| if *p == colors::BACKGROUND { '.' } else { '#' }));
            out.push('\n');
        }
        out
    }
}

impl DrawContext for Framebuffer {
    fn set_fill_color(&mut self, color: Pixel) {
        self.fill = color;
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32) {
        if w == 0 {
            return;
        }
        for row in y..y.saturating_add(h as i32) {
            self.span(row, x, x.saturating_add(w as i32 - 1));
        }
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32) {
        // Only rows inside the buffer are scanned
        let r = i128::from(radius);
        let r2 = r * r;
        let (cx, cy) = (i128::from(cx), i128::from(cy));
        let top = (cy - r).max(0);
        let bottom = (cy + r).min(i128::from(self.height) - 1);
        for y in top..=bottom {
            let dy = y - cy;
            // Widest dx with dx² + dy² <= r²
            let mut dx = ((r2 - dy * dy) as f64).sqrt() as i128;
            while dx * dx + dy * dy > r2 {
                dx -= 1;
            }
            while (dx + 1) * (dx + 1) + dy * dy <= r2 {
                dx += 1;
            }
            let x0 = (cx - dx).max(i128::from(i32::MIN)) as i32;
            let x1 = (cx + dx).min(i128::from(i32::MAX)) as i32;
            self.span(y as i32, x0, x1);
        }
    }
}
