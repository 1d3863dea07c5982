//! Procedural decoration geometry

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("particle count must be positive")]
    EmptyField,
    #[error("field extent must be positive, got {0}")]
    BadExtent(f32),
}

/// Deterministic point scatter for the hero particle field, uniformly
/// distributed in the cube [-extent, extent]^3.
pub fn particle_field(count: usize, extent: f32, seed: u64) -> Result<Vec<[f32; 3]>, GeometryError> {
    if count == 0 {
        return Err(GeometryError::EmptyField);
    }
    if !extent.is_finite() || extent <= 0.0 {
        return Err(GeometryError::BadExtent(extent));
    }
    let mut state = seed | 1;
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let x = extent * (2.0 * next_unit(&mut state) - 1.0);
        let y = extent * (2.0 * next_unit(&mut state) - 1.0);
        let z = extent * (2.0 * next_unit(&mut state) - 1.0);
        points.push([x, y, z]);
    }
    Ok(points)
}

// xorshift64* with the top mantissa bits mapped into [0, 1)
fn next_unit(state: &mut u64) -> f32 {
    let mut x = *state;
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    *state = x;
    let bits = x.wrapping_mul(0x2545_F491_4F6C_DD1D);
    (bits >> 40) as f32 / (1u64 << 24) as f32
}

/// Gentle bob offset used by floating decorations
pub fn float_offset(elapsed: f32, speed: f32, intensity: f32) -> f32 {
    (elapsed * speed).sin() * intensity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_has_requested_shape() {
        let points = particle_field(500, 4.0, 42).unwrap();
        assert_eq!(points.len(), 500);
        for p in &points {
            for c in p {
                assert!(c.abs() <= 4.0, "{c} escapes the extent");
            }
        }
    }

    #[test]
    fn test_field_is_deterministic() {
        let a = particle_field(64, 2.0, 7).unwrap();
        let b = particle_field(64, 2.0, 7).unwrap();
        let c = particle_field(64, 2.0, 8).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_field_rejects_bad_parameters() {
        assert_eq!(particle_field(0, 2.0, 1), Err(GeometryError::EmptyField));
        assert_eq!(particle_field(10, 0.0, 1), Err(GeometryError::BadExtent(0.0)));
        assert!(particle_field(10, f32::NAN, 1).is_err());
    }

    #[test]
    fn test_float_offset_stays_in_band() {
        for step in 0..100 {
            let t = step as f32 * 0.13;
            assert!(float_offset(t, 1.0, 0.5).abs() <= 0.5 + 1e-6);
        }
        assert_eq!(float_offset(0.0, 2.0, 0.5), 0.0);
    }
}
