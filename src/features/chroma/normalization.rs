//! Chroma normalization helpers

/// L2-normalize a vector to unit length
///
/// An all-zero vector is returned unchanged (the zero vector), which makes
/// silent frames score 0 against every unit-norm template instead of raising
/// an error.
pub fn normalize_l2(v: &[f32]) -> Vec<f32> {
    let norm: f32 = v.iter().map(|&x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        v.iter().map(|&x| x / norm).collect()
    } else {
        v.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_unit_result() {
        let v = vec![3.0, 4.0];
        let unit = normalize_l2(&v);
        let norm: f32 = unit.iter().map(|&x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
        assert!((unit[0] - 0.6).abs() < 1e-6);
        assert!((unit[1] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_zero_vector_stays_zero() {
        let v = vec![0.0f32; 12];
        let unit = normalize_l2(&v);
        assert!(unit.iter().all(|&x| x == 0.0));
    }
}
