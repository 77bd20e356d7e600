use super::occluder::Occluder;

/// Format a coordinate with one decimal place, treating -0 as 0
pub(crate) fn f(n: f64) -> String {
    let n = if n == 0.0 { 0.0 } else { n };
    format!("{:.1}", n)
}

/// Round to the 0.1 pixel precision FGU documents for map geometry
fn round1(n: f64) -> f64 {
    (n * 10.0).round() / 10.0
}

/// A point in FGU pixel space, rounded to one decimal on construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: round1(x),
            y: round1(y),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, fm: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fm, "{},{}", f(self.x), f(self.y))
    }
}

/// Falloff written alongside both light radii
const LIGHT_FALLOFF: f64 = 0.5;

/// A point light
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub id: usize,
    pub position: Point,
    /// Source color hex without a leading `#`
    pub color_hex: String,
    /// Radius in grid units
    pub range: f64,
}

impl Light {
    /// Bright and dim radii: the bright core covers half of the source range
    pub fn range_string(&self) -> String {
        format!(
            "{},{},{},{}",
            f(self.range / 2.0),
            f(LIGHT_FALLOFF),
            f(self.range),
            f(LIGHT_FALLOFF)
        )
    }

    pub fn color(&self) -> String {
        format!("#{}", self.color_hex.trim_start_matches('#'))
    }

    /// Converted lights are always switched on
    pub fn is_on(&self) -> bool {
        true
    }
}

/// The assembled FGU map document
#[derive(Debug, Clone, PartialEq)]
pub struct FguDocument {
    /// Grid cell size in pixels
    pub grid_size: f64,
    pub occluders: Vec<Occluder>,
    pub lights: Vec<Light>,
}

impl FguDocument {
    /// `gridsize` text: the cell size for both axes
    pub fn grid_size_string(&self) -> String {
        format!("{},{}", self.grid_size, self.grid_size)
    }
}
