//! World ↔ screen projection for the bench view, with pan and zoom.
//!
//! World X runs along the optical axis and world Y perpendicular to it,
//! both in millimeters. In horizontal orientation the axis maps to canvas
//! width (object left, sensor right); in vertical orientation it maps to
//! canvas height, inverted so increasing world X moves toward the top
//! (object bottom, sensor top). All operations are pure and return new
//! snapshots — a viewport is never mutated after construction, so callers
//! may freely hold and compare old and new values.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which canvas dimension the optical axis is laid out along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Object left, sensor right; world X maps to canvas width.
    #[default]
    Horizontal,
    /// Object bottom, sensor top; world X maps to canvas height, inverted.
    Vertical,
}

/// A world-space bounding box handed to [`Viewport::create`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl SceneBounds {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        (self.min_x + self.max_x) / 2.0
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        (self.min_y + self.max_y) / 2.0
    }
}

/// Immutable view state mapping world millimeters to canvas pixels.
///
/// `offset_x` shifts along the optical axis, `offset_y` perpendicular to
/// it. `canvas_h` is carried because the vertical orientation inverts the
/// optical axis against canvas height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Screen offset along the optical axis, in pixels.
    pub offset_x: f64,
    /// Screen offset perpendicular to the optical axis, in pixels.
    pub offset_y: f64,
    /// Pixels per millimeter, uniform in both axes.
    pub scale: f64,
    /// Which canvas dimension the optical axis runs along.
    pub orientation: Orientation,
    /// Canvas height in pixels at creation time.
    pub canvas_h: f64,
}

impl Viewport {
    /// Auto-fit: uniform scale that fits `bounds` inside the canvas minus
    /// `padding` on all sides (fit to the tighter axis), with the scene
    /// bounding-box center on the canvas center.
    #[must_use]
    pub fn create(
        canvas_w: f64,
        canvas_h: f64,
        bounds: SceneBounds,
        padding: f64,
        orientation: Orientation,
    ) -> Self {
        let avail_along = match orientation {
            Orientation::Horizontal => canvas_w,
            Orientation::Vertical => canvas_h,
        } - padding * 2.0;
        let avail_perp = match orientation {
            Orientation::Horizontal => canvas_h,
            Orientation::Vertical => canvas_w,
        } - padding * 2.0;

        let scale = (avail_along / bounds.width()).min(avail_perp / bounds.height());

        match orientation {
            Orientation::Horizontal => Self {
                offset_x: canvas_w / 2.0 - bounds.center_x() * scale,
                offset_y: canvas_h / 2.0 - bounds.center_y() * scale,
                scale,
                orientation,
                canvas_h,
            },
            Orientation::Vertical => Self {
                offset_x: canvas_h / 2.0 - bounds.center_x() * scale,
                offset_y: canvas_w / 2.0 - bounds.center_y() * scale,
                scale,
                orientation,
                canvas_h,
            },
        }
    }

    /// Map a world point (millimeters) to canvas pixels.
    #[must_use]
    pub fn world_to_screen(&self, wx: f64, wy: f64) -> Point {
        match self.orientation {
            Orientation::Horizontal => Point::new(
                wx * self.scale + self.offset_x,
                wy * self.scale + self.offset_y,
            ),
            Orientation::Vertical => Point::new(
                wy * self.scale + self.offset_y,
                self.canvas_h - (wx * self.scale + self.offset_x),
            ),
        }
    }

    /// Map a canvas point (pixels) back to world millimeters. Exact inverse
    /// of [`Self::world_to_screen`].
    #[must_use]
    pub fn screen_to_world(&self, sx: f64, sy: f64) -> Point {
        match self.orientation {
            Orientation::Horizontal => Point::new(
                (sx - self.offset_x) / self.scale,
                (sy - self.offset_y) / self.scale,
            ),
            Orientation::Vertical => Point::new(
                (self.canvas_h - sy - self.offset_x) / self.scale,
                (sx - self.offset_y) / self.scale,
            ),
        }
    }

    /// Multiply the scale by `factor`, anchored at the given screen point:
    /// the world point under the pivot stays under the pivot. No scale
    /// clamp is imposed here; callers may clamp.
    #[must_use]
    pub fn zoom(&self, factor: f64, pivot_x: f64, pivot_y: f64) -> Self {
        let world = self.screen_to_world(pivot_x, pivot_y);
        let scale = self.scale * factor;
        match self.orientation {
            Orientation::Horizontal => Self {
                scale,
                offset_x: pivot_x - world.x * scale,
                offset_y: pivot_y - world.y * scale,
                ..*self
            },
            Orientation::Vertical => Self {
                scale,
                offset_x: self.canvas_h - pivot_y - world.x * scale,
                offset_y: pivot_x - world.y * scale,
                ..*self
            },
        }
    }

    /// Translate by a screen-space delta in pixels.
    #[must_use]
    pub fn pan(&self, dx: f64, dy: f64) -> Self {
        match self.orientation {
            Orientation::Horizontal => Self {
                offset_x: self.offset_x + dx,
                offset_y: self.offset_y + dy,
                ..*self
            },
            // Canvas Y is inverted relative to world X, so a downward drag
            // moves the view toward smaller world X.
            Orientation::Vertical => Self {
                offset_x: self.offset_x - dy,
                offset_y: self.offset_y + dx,
                ..*self
            },
        }
    }
}
