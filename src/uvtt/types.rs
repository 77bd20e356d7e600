use serde::Deserialize;

/// A coordinate in grid-cell units
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
}

impl GridPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Grid geometry of the map
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Resolution {
    /// Grid-space origin offset. Older exports omit it, in which case the
    /// origin is (0, 0).
    #[serde(default)]
    pub map_origin: Option<GridPoint>,
    /// Map extent in grid cells
    pub map_size: GridPoint,
    /// Size of one grid cell in pixels
    pub pixels_per_grid: f64,
}

impl Resolution {
    pub fn origin(&self) -> GridPoint {
        self.map_origin.unwrap_or(GridPoint::new(0.0, 0.0))
    }
}

/// A door or window
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Portal {
    pub position: GridPoint,
    /// Consumed pairwise as line segments
    pub bounds: Vec<GridPoint>,
    /// Radians
    pub rotation: f64,
    /// `false` marks a window
    pub closed: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UvttLight {
    pub position: GridPoint,
    /// Radius in grid units
    pub range: f64,
    /// Hex color as exported, e.g. `ffeccd8b`
    pub color: String,
}

/// Parsed `.dd2vtt` document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UvttDocument {
    pub resolution: Resolution,
    /// Base64 encoded raster image
    #[serde(default)]
    pub image: String,
    pub line_of_sight: Vec<Vec<GridPoint>>,
    #[serde(default)]
    pub objects_line_of_sight: Option<Vec<Vec<GridPoint>>>,
    pub portals: Vec<Portal>,
    pub lights: Vec<UvttLight>,
}
