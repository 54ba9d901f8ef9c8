//! Geometry for a small live preview of an easing curve.
//!
//! [`Preview`] does not draw anything itself. It keeps the folded/expanded
//! state of the widget, works out where the preview goes, and produces the
//! colored lines a host renderer should draw, in order: the background, an
//! optional cross through the center, the curve, and an optional border.
//!
//! ```
//! use easetab::preview::{Point, Preview, PreviewConfig};
//! use easetab::Ease;
//!
//! let mut preview = Preview::new(PreviewConfig::default()).unwrap();
//! preview.toggle();
//!
//! let rect = preview.layout(Point::new(0.0, 0.0), 500.0);
//! let frame = preview.frame(Ease::OutBounce, rect);
//!
//! assert_eq!(rect.width, 300.0);
//! assert_eq!(rect.height, 300.0);
//! assert_eq!(frame.curve.len(), 100);
//! ```

use tracing::trace;

use crate::{id, Ease, EaseError};

/// A point in the host's coordinate system, with `y` growing downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a point from its coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

/// An axis-aligned rectangle; `(x, y)` is the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// The x coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// The y coordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// The top-left corner, i.e. `(x, y)`.
    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The top-right corner.
    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.y)
    }

    /// The bottom-left corner, where every preview curve starts.
    pub fn bottom_left(&self) -> Point {
        Point::new(self.x, self.bottom())
    }

    /// The bottom-right corner.
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// The point half way between the left and right and top and bottom edges.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether `p` lies inside the rectangle, edges included.
    ///
    /// # Example
    /// ```
    /// use easetab::preview::{Point, Rect};
    ///
    /// let rect = Rect::new(0.0, 0.0, 10.0, 5.0);
    ///
    /// assert!(rect.contains(rect.bottom_right()));
    /// assert!(!rect.contains(Point::new(10.5, 2.0)));
    /// ```
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

/// An RGBA color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const GREEN: Rgba = Rgba::new(0.0, 1.0, 0.0, 1.0);
    pub const CYAN: Rgba = Rgba::new(0.0, 1.0, 1.0, 1.0);

    /// Create a color from its components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    /// Multiply every component, alpha included, by `factor`.
    pub fn scale(self, factor: f32) -> Self {
        Rgba::new(
            self.r * factor,
            self.g * factor,
            self.b * factor,
            self.a * factor,
        )
    }

    /// Blend from `self` to `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;

        Rgba::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

/// A straight line to be drawn by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
    pub color: Rgba,
    pub thickness: f32,
}

/// The mouse cursor to show while hovering the preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// Clicking will expand the preview.
    Expand,
    /// Clicking will fold the preview.
    Collapse,
}

/// Sizes and overlays of the preview.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PreviewConfig {
    /// Height of the preview while folded.
    pub folded_height: f32,
    /// Upper bound for the width of the preview.
    pub max_width: f32,
    /// Share of the available width the preview takes, in `(0, 1]`.
    pub width_fraction: f32,
    /// Number of line segments the curve is drawn with.
    pub samples: usize,
    /// Draw a cross through the center of the preview.
    pub cross: bool,
    /// Draw a border around the preview.
    pub border: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        PreviewConfig {
            folded_height: 30.0,
            max_width: 300.0,
            width_fraction: 0.72,
            samples: 100,
            cross: true,
            border: true,
        }
    }
}

impl PreviewConfig {
    /// The largest supported number of curve samples.
    pub const MAX_SAMPLES: usize = 10_000;

    /// Check that every value is in range.
    ///
    /// Sizes must be finite and positive, `width_fraction` in `(0, 1]` and
    /// `samples` in `1..=MAX_SAMPLES`.
    pub fn validate(&self) -> Result<(), EaseError> {
        if self.samples == 0 {
            return Err(EaseError::InvalidConfig("samples must be at least one"));
        }
        if self.samples > Self::MAX_SAMPLES {
            return Err(EaseError::InvalidConfig("samples must be at most 10000"));
        }
        if !self.folded_height.is_finite() || self.folded_height <= 0.0 {
            return Err(EaseError::InvalidConfig(
                "folded_height must be finite and positive",
            ));
        }
        if !self.max_width.is_finite() || self.max_width <= 0.0 {
            return Err(EaseError::InvalidConfig("max_width must be finite and positive"));
        }
        if self.width_fraction.is_nan() || self.width_fraction <= 0.0 || self.width_fraction > 1.0
        {
            return Err(EaseError::InvalidConfig("width_fraction must be in (0, 1]"));
        }

        Ok(())
    }
}

const CROSS_THICKNESS: f32 = 2.0;
const BORDER_THICKNESS: f32 = 1.0;
const CURVE_THICKNESS: f32 = 1.0;

/// Everything needed to draw one preview.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub rect: Rect,
    pub background: Rgba,
    pub cross: Vec<Line>,
    pub curve: Vec<Line>,
    pub border: Vec<Line>,
    pub cursor: Cursor,
}

impl Frame {
    /// All lines in the order they should be drawn, on top of the background.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.cross.iter().chain(&self.curve).chain(&self.border)
    }
}

/// A foldable preview of an easing curve.
///
/// The preview starts out folded: a thin strip that shows the part of the
/// curve that fits. Expanded, it is a square showing the whole curve,
/// overshoot included.
#[derive(Clone, Debug)]
pub struct Preview {
    config: PreviewConfig,
    folded: bool,
}

impl Preview {
    /// Create a folded preview, rejecting an invalid `config`.
    pub fn new(config: PreviewConfig) -> Result<Self, EaseError> {
        config.validate()?;

        Ok(Preview {
            config,
            folded: true,
        })
    }

    /// The configuration the preview was created with.
    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    /// Whether the preview is currently folded.
    pub fn is_folded(&self) -> bool {
        self.folded
    }

    /// Fold or expand the preview.
    pub fn set_folded(&mut self, folded: bool) {
        self.folded = folded;
    }

    /// Switch between folded and expanded.
    pub fn toggle(&mut self) {
        self.folded = !self.folded;
        trace!(folded = self.folded, "toggled easing preview");
    }

    /// Toggle the preview if `at` is inside `rect`. Returns whether it did.
    pub fn click(&mut self, rect: Rect, at: Point) -> bool {
        let hit = rect.contains(at);

        if hit {
            self.toggle();
        }

        hit
    }

    /// The cursor to show while hovering the preview.
    pub fn cursor(&self) -> Cursor {
        if self.folded {
            Cursor::Expand
        } else {
            Cursor::Collapse
        }
    }

    /// The rectangle of the preview, placed at `origin` given the width
    /// available to it. A negative available width gives an empty rectangle.
    pub fn layout(&self, origin: Point, available_width: f32) -> Rect {
        let width = self
            .config
            .max_width
            .min(available_width * self.config.width_fraction)
            .max(0.0);
        let height = if self.folded {
            self.config.folded_height
        } else {
            width
        };

        Rect::new(origin.x, origin.y, width, height)
    }

    /// Sample `curve` at evenly spaced times in `[0, 1]`, both ends included.
    ///
    /// The returned points are `(t, value)` pairs in curve space.
    pub fn sample(&self, curve: Ease) -> Vec<Point> {
        let n = self.config.samples;

        (0..=n)
            .map(|i| {
                let t = i as f32 / n as f32;
                Point::new(t, curve.eval(t))
            })
            .collect()
    }

    /// Build the lines showing `curve` inside `rect`.
    pub fn frame(&self, curve: Ease, rect: Rect) -> Frame {
        let cross = if self.config.cross {
            cross_lines(rect)
        } else {
            Vec::new()
        };
        let border = if self.config.border {
            border_lines(rect)
        } else {
            Vec::new()
        };
        let curve_lines = self.curve_lines(curve, rect);

        trace!(
            %curve,
            folded = self.folded,
            segments = curve_lines.len(),
            "built easing preview frame"
        );

        Frame {
            rect,
            background: Rgba::BLACK,
            cross,
            curve: curve_lines,
            border,
            cursor: self.cursor(),
        }
    }

    fn curve_lines(&self, curve: Ease, rect: Rect) -> Vec<Line> {
        let n = self.config.samples;

        // Curve space to screen space: time runs left to right, values bottom
        // to top.
        let to_screen = id::<f32, f32>()
            .scale_min_max(rect.x, rect.right())
            .zip(curve.anim::<f32>().scale_min_max(rect.bottom(), rect.y));

        let mut lines = Vec::with_capacity(n);
        let mut previous = rect.bottom_left();

        for i in 1..=n {
            let t = i as f32 / n as f32;
            let (x, y) = to_screen.eval(t);
            let current = Point::new(x, y);

            // Folded, only what fits is shown; overshoot would spill out of
            // the strip.
            if !self.folded || (rect.contains(previous) && rect.contains(current)) {
                lines.push(Line {
                    from: previous,
                    to: current,
                    color: Rgba::GREEN.lerp(Rgba::CYAN, t),
                    thickness: CURVE_THICKNESS,
                });
            }

            previous = current;
        }

        lines
    }
}

fn cross_lines(rect: Rect) -> Vec<Line> {
    let color = Rgba::WHITE.scale(0.5);
    let center = rect.center();

    vec![
        Line {
            from: Point::new(rect.x, center.y),
            to: Point::new(rect.right(), center.y),
            color,
            thickness: CROSS_THICKNESS,
        },
        Line {
            from: Point::new(center.x, rect.y),
            to: Point::new(center.x, rect.bottom()),
            color,
            thickness: CROSS_THICKNESS,
        },
    ]
}

fn border_lines(rect: Rect) -> Vec<Line> {
    let color = Rgba::WHITE.scale(0.75);
    let corners = [
        rect.top_left(),
        rect.top_right(),
        rect.bottom_right(),
        rect.bottom_left(),
    ];

    (0..corners.len())
        .map(|i| Line {
            from: corners[i],
            to: corners[(i + 1) % corners.len()],
            color,
            thickness: BORDER_THICKNESS,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(PreviewConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_config() {
        let bad = [
            PreviewConfig {
                samples: 0,
                ..Default::default()
            },
            PreviewConfig {
                folded_height: 0.0,
                ..Default::default()
            },
            PreviewConfig {
                max_width: f32::NAN,
                ..Default::default()
            },
            PreviewConfig {
                width_fraction: 1.5,
                ..Default::default()
            },
            PreviewConfig {
                samples: PreviewConfig::MAX_SAMPLES + 1,
                ..Default::default()
            },
            PreviewConfig {
                samples: usize::MAX,
                ..Default::default()
            },
            PreviewConfig {
                folded_height: f32::INFINITY,
                ..Default::default()
            },
            PreviewConfig {
                max_width: f32::INFINITY,
                ..Default::default()
            },
        ];

        for config in bad {
            assert!(matches!(
                Preview::new(config),
                Err(EaseError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn accepts_the_sample_cap() {
        let config = PreviewConfig {
            samples: PreviewConfig::MAX_SAMPLES,
            ..Default::default()
        };

        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn color_lerp_clamps() {
        assert_eq!(Rgba::GREEN.lerp(Rgba::CYAN, -1.0), Rgba::GREEN);
        assert_eq!(Rgba::GREEN.lerp(Rgba::CYAN, 2.0), Rgba::CYAN);
        assert_eq!(Rgba::GREEN.lerp(Rgba::CYAN, 0.5).b, 0.5);
    }

    #[test]
    fn border_is_closed() {
        let lines = border_lines(Rect::new(0.0, 0.0, 10.0, 10.0));

        assert_eq!(lines.len(), 4);
        for pair in lines.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
        assert_eq!(lines[3].to, lines[0].from);
    }
}
