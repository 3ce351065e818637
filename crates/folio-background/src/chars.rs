//! Character constants for the particle background.

use folio_core::ValueRange;

/// Particle glyphs from smallest to largest radius.
pub const PARTICLE_CHARS: &[char] = &['·', '•', '●'];

/// Pick a glyph by where `radius` falls inside the configured size range.
pub fn glyph_for_radius(radius: f32, size: ValueRange) -> char {
    let size = size.ordered();
    let span = size.max - size.min;
    if span <= f32::EPSILON {
        return PARTICLE_CHARS[PARTICLE_CHARS.len() / 2];
    }

    let t = ((radius - size.min) / span).clamp(0.0, 1.0);
    let idx = (t * PARTICLE_CHARS.len() as f32) as usize;
    PARTICLE_CHARS[idx.min(PARTICLE_CHARS.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_buckets() {
        let size = ValueRange::new(1.0, 5.0);
        assert_eq!(glyph_for_radius(1.0, size), '·');
        assert_eq!(glyph_for_radius(3.0, size), '•');
        assert_eq!(glyph_for_radius(5.0, size), '●');
    }

    #[test]
    fn test_degenerate_range_uses_middle_glyph() {
        assert_eq!(glyph_for_radius(2.0, ValueRange::new(2.0, 2.0)), '•');
    }
}
