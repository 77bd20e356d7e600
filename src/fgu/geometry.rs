use super::types::Point;

/// Expand a line segment into a quadrilateral ("fat line").
///
/// Each endpoint is pushed away from the other by the length offset, with the
/// sign chosen per axis from which endpoint is larger on that axis. The two
/// extended endpoints are then offset perpendicular to the portal by
/// `half_width`. Corners are emitted as (p1 - w), (p2 - w), (p2 + w), (p1 + w).
///
/// The per-axis extension only follows the segment direction for axis-aligned
/// segments; diagonals are extended on both axes independently. Existing FGU
/// exports depend on this exact shape.
pub fn expand_line_to_quad(
    p1: Point,
    p2: Point,
    half_width: f64,
    half_length: f64,
    angle: f64,
) -> [Point; 4] {
    let (sin, cos) = angle.sin_cos();
    let (width_x, width_y) = (half_width * sin, half_width * cos);
    let (length_x, length_y) = ((half_length * cos).abs(), (half_length * sin).abs());

    let (x1, x2) = if p1.x() > p2.x() {
        (p1.x() + length_x, p2.x() - length_x)
    } else {
        (p1.x() - length_x, p2.x() + length_x)
    };
    let (y1, y2) = if p1.y() > p2.y() {
        (p1.y() + length_y, p2.y() - length_y)
    } else {
        (p1.y() - length_y, p2.y() + length_y)
    };

    [
        Point::new(x1 - width_x, y1 - width_y),
        Point::new(x2 - width_x, y2 - width_y),
        Point::new(x2 + width_x, y2 + width_y),
        Point::new(x1 + width_x, y1 + width_y),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_horizontal_segment_is_axis_aligned_rectangle() {
        let quad = expand_line_to_quad(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 2.0, 1.0, 0.0);
        assert_eq!(
            quad,
            [
                Point::new(-1.0, -2.0),
                Point::new(11.0, -2.0),
                Point::new(11.0, 2.0),
                Point::new(-1.0, 2.0),
            ]
        );

        let width = quad[3].y() - quad[0].y();
        let length = quad[1].x() - quad[0].x();
        assert_eq!(width, 4.0);
        assert_eq!(length, 10.0 + 2.0);
    }

    #[test]
    fn test_reversed_endpoints_extend_outward() {
        let quad = expand_line_to_quad(Point::new(10.0, 0.0), Point::new(0.0, 0.0), 2.0, 1.0, 0.0);
        assert_eq!(quad[0], Point::new(11.0, -2.0));
        assert_eq!(quad[1], Point::new(-1.0, -2.0));
    }

    #[test]
    fn test_vertical_segment_quarter_turn() {
        let quad = expand_line_to_quad(
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            2.0,
            1.0,
            FRAC_PI_2,
        );
        assert_eq!(
            quad,
            [
                Point::new(-2.0, -1.0),
                Point::new(-2.0, 11.0),
                Point::new(2.0, 11.0),
                Point::new(2.0, -1.0),
            ]
        );
    }

    #[test]
    fn test_zero_length_segment_still_has_area() {
        let p = Point::new(5.0, 5.0);
        let quad = expand_line_to_quad(p, p, 1.0, 1.0, 0.0);
        assert_eq!(quad[0], Point::new(4.0, 4.0));
        assert_eq!(quad[2], Point::new(6.0, 6.0));
    }

    #[test]
    fn test_diagonal_extends_each_axis_independently() {
        // 45 degrees: each axis grows by |half_length * cos|, not along the segment
        let angle = std::f64::consts::FRAC_PI_4;
        let quad = expand_line_to_quad(Point::new(0.0, 0.0), Point::new(10.0, 10.0), 0.0, 10.0, angle);
        assert_eq!(quad[0], Point::new(-7.1, -7.1));
        assert_eq!(quad[1], Point::new(17.1, 17.1));
    }
}
