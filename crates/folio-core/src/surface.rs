/// Pixel width assumed for one terminal cell.
pub const CELL_WIDTH_PX: f32 = 8.0;

/// Pixel height assumed for one terminal cell.
pub const CELL_HEIGHT_PX: f32 = 16.0;

/// Pixel dimensions of a render surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Surface covering a grid of terminal cells.
    pub fn from_cells(columns: u16, rows: u16) -> Self {
        Self::new(columns as f32 * CELL_WIDTH_PX, rows as f32 * CELL_HEIGHT_PX)
    }

    /// Whether both dimensions are positive.
    pub fn is_usable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cells() {
        assert_eq!(Surface::from_cells(96, 30), Surface::new(768.0, 480.0));
    }

    #[test]
    fn test_zero_dimension_is_unusable() {
        assert!(!Surface::new(0.0, 100.0).is_usable());
        assert!(!Surface::new(100.0, 0.0).is_usable());
        assert!(Surface::new(1.0, 1.0).is_usable());
    }
}
