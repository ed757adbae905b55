use crate::constants::REFERENCE_CELL_RATIO;
use crate::photo::{PixelSize, Placement, Position, Sizing};

/// Manual size that matches aspect-fit inside a reference cell.
///
/// Unknown dimensions fill the cell.
pub fn fit_size(natural: PixelSize) -> (f32, f32) {
    match natural.aspect_ratio() {
        Some(ratio) if ratio > REFERENCE_CELL_RATIO => {
            (100.0, REFERENCE_CELL_RATIO / ratio * 100.0)
        }
        Some(ratio) => (ratio / REFERENCE_CELL_RATIO * 100.0, 100.0),
        None => (100.0, 100.0),
    }
}

/// Seed a fully manual placement for a photo entering edit mode.
///
/// Existing manual size and position are kept; a missing size comes from
/// [`fit_size`] and a missing position centers the photo.
pub fn initial_fit(placement: &Placement, natural: PixelSize) -> Placement {
    let (width, height) = match placement.sizing {
        Sizing::Manual { width, height } => (width, height),
        Sizing::Auto => fit_size(natural),
    };

    let (x, y) = match placement.position {
        Position::Positioned { x, y } => (x, y),
        Position::Centered => ((100.0 - width) / 2.0, (100.0 - height) / 2.0),
    };

    Placement::manual(width, height, x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.05
    }

    #[test]
    fn test_wide_image() {
        let placement = initial_fit(&Placement::default(), PixelSize::new(1600, 1000));
        let expected_height = 0.707 / 1.6 * 100.0; // ≈ 44.19
        match (placement.sizing, placement.position) {
            (Sizing::Manual { width, height }, Position::Positioned { x, y }) => {
                assert_eq!(width, 100.0);
                assert!(approx(height, expected_height));
                assert!(approx(height, 44.2));
                assert_eq!(x, 0.0);
                assert!(approx(y, 27.9));
            }
            other => panic!("Expected manual placement, got {:?}", other),
        }
    }

    #[test]
    fn test_tall_image() {
        // 1:2, ratio 0.5 < 0.707
        let (width, height) = fit_size(PixelSize::new(500, 1000));
        assert_eq!(height, 100.0);
        assert!(approx(width, 0.5 / 0.707 * 100.0));
    }

    #[test]
    fn test_unknown_size_fills_cell() {
        assert_eq!(fit_size(PixelSize::default()), (100.0, 100.0));
        let placement = initial_fit(&Placement::default(), PixelSize::new(0, 10));
        assert_eq!(placement, Placement::manual(100.0, 100.0, 0.0, 0.0));
    }

    #[test]
    fn test_keeps_existing_size_and_centers() {
        let placement = initial_fit(&Placement::sized(40.0, 60.0), PixelSize::new(1600, 1000));
        assert_eq!(placement, Placement::manual(40.0, 60.0, 30.0, 20.0));
    }

    #[test]
    fn test_keeps_existing_position() {
        let existing = Placement::manual(40.0, 60.0, 1.0, 2.0);
        assert_eq!(initial_fit(&existing, PixelSize::new(10, 10)), existing);
    }
}
