use super::types::Point;
use crate::uvtt::{GridPoint, Resolution};

/// Map one grid-space value onto a pixel axis.
///
/// `extent` is the map dimension in grid cells; callers pass it negated for
/// the X axis so the image center lands on the FGU origin. `flip` negates the
/// input first, mirroring the axis.
pub fn translate_coordinate(value: f64, grid_size: f64, extent: f64, flip: bool) -> f64 {
    let value = if flip { -value } else { value };
    value * grid_size + (extent * grid_size / 2.0).floor()
}

/// Grid to FGU pixel space transform for one map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    pub grid_size: f64,
    pub map_width: f64,
    pub map_height: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl CoordinateTransform {
    pub fn from_resolution(resolution: &Resolution) -> Self {
        let origin = resolution.origin();
        Self {
            grid_size: resolution.pixels_per_grid,
            map_width: resolution.map_size.x,
            map_height: resolution.map_size.y,
            origin_x: origin.x,
            origin_y: origin.y,
        }
    }

    pub fn translate_x(&self, x: f64) -> f64 {
        translate_coordinate(x - self.origin_x, self.grid_size, -self.map_width, false)
    }

    pub fn translate_y(&self, y: f64) -> f64 {
        translate_coordinate(y - self.origin_y, self.grid_size, self.map_height, true)
    }

    pub fn to_point(&self, p: &GridPoint) -> Point {
        Point::new(self.translate_x(p.x), self.translate_y(p.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(origin: Option<GridPoint>) -> CoordinateTransform {
        CoordinateTransform::from_resolution(&Resolution {
            map_origin: origin,
            map_size: GridPoint::new(2.0, 2.0),
            pixels_per_grid: 50.0,
        })
    }

    #[test]
    fn test_translate_coordinate() {
        assert_eq!(translate_coordinate(1.0, 50.0, -2.0, false), 0.0);
        assert_eq!(translate_coordinate(1.0, 50.0, 2.0, true), 0.0);
        // floor applies to the half extent, odd maps land on a half cell
        assert_eq!(translate_coordinate(0.0, 25.0, -3.0, false), -38.0);
        assert_eq!(translate_coordinate(0.0, 25.0, 3.0, true), 37.0);
    }

    #[test]
    fn test_map_corners() {
        let t = transform(None);
        assert_eq!(t.to_point(&GridPoint::new(0.0, 0.0)), Point::new(-50.0, 50.0));
        assert_eq!(t.to_point(&GridPoint::new(2.0, 2.0)), Point::new(50.0, -50.0));
        assert_eq!(t.to_point(&GridPoint::new(1.0, 1.0)), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_y_axis_is_mirrored() {
        let t = transform(None);
        for y in [-3.0, 0.0, 0.5, 1.0, 7.25] {
            let down = t.translate_y(y);
            let up = t.translate_y(y - 1.0);
            assert_eq!(down - up, -50.0);
        }
    }

    #[test]
    fn test_origin_offset() {
        let t = transform(Some(GridPoint::new(1.0, -1.0)));
        assert_eq!(t.to_point(&GridPoint::new(1.0, -1.0)), Point::new(-50.0, 50.0));
        assert_eq!(t.to_point(&GridPoint::new(2.0, 0.0)), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_output_rounded() {
        let t = CoordinateTransform::from_resolution(&Resolution {
            map_origin: None,
            map_size: GridPoint::new(0.0, 0.0),
            pixels_per_grid: 1.0,
        });
        assert_eq!(t.to_point(&GridPoint::new(0.123, 0.456)), Point::new(0.1, -0.5));
    }
}
