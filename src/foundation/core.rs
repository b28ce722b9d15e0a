use crate::foundation::error::{DiplomaError, DiplomaResult};

/// Integer pixel coordinate. `y` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Parse an `r,g,b` triple of decimal bytes (full-width commas accepted).
    pub fn parse_rgb(s: &str) -> DiplomaResult<Self> {
        let norm = s.replace('，', ",");
        let parts = norm.split(',').map(str::trim).collect::<Vec<_>>();
        let [r, g, b] = parts.as_slice() else {
            return Err(DiplomaError::invalid_color(format!(
                "expected 'r,g,b', got '{s}'"
            )));
        };
        let byte = |c: &str| -> DiplomaResult<u8> {
            c.parse::<u8>().map_err(|e| {
                DiplomaError::invalid_color(format!("component '{c}' of '{s}': {e}"))
            })
        };
        Ok(Self::opaque(byte(r)?, byte(g)?, byte(b)?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
