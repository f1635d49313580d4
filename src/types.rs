/// A width/height pair, in surface units.
///
/// Dimension sets start out [`EMPTY`](Self::EMPTY) (NaN-filled) and stay that
/// way until the first measurement pass fills them in.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const EMPTY: Self = Self {
        width: f64::NAN,
        height: f64::NAN,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `true` until a measurement pass has written real values.
    pub fn is_empty(&self) -> bool {
        self.width.is_nan() || self.height.is_nan()
    }
}

/// An absolute scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A scroll delta accumulator, as opposed to the absolute [`Position`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn clear(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
    }
}

/// Placement of one handle inside its parent: offset plus box size.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Whether an offset lookup targets the start or the end of a range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Approach {
    First,
    Last,
}

/// How wheel events are handled.
///
/// `Native` leaves scrolling to the surface and only observes the resulting
/// position changes. `Controlled` consumes raw wheel deltas, maintains the
/// scroll position itself, and writes it back to the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WheelBehavior {
    Native,
    Controlled,
}

/// Dominant axis of the most recent scroll delta, never a blend of both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    None,
    Up,
    Down,
    Left,
    Right,
}

impl ScrollDirection {
    /// Picks the direction for one observed delta: the vertical axis wins
    /// ties, a zero delta yields [`ScrollDirection::None`].
    pub fn for_delta(dx: f64, dy: f64) -> Self {
        if dx == 0.0 && dy == 0.0 {
            return Self::None;
        }
        if dy.abs() >= dx.abs() {
            if dy > 0.0 { Self::Down } else { Self::Up }
        } else if dx > 0.0 {
            Self::Right
        } else {
            Self::Left
        }
    }
}

/// Extra lookahead added around the viewport before computing the window,
/// biased toward the direction of travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Padding {
    /// Symmetric lookahead used while no scroll direction is known.
    pub const DEFAULT: Self = Self {
        top: 200,
        right: 200,
        bottom: 200,
        left: 200,
    };

    /// One-sided padding of `magnitude` on the side the scroll is moving
    /// toward; [`ScrollDirection::None`] falls back to [`Self::DEFAULT`].
    ///
    /// `rtl` swaps the horizontal directions before the side is picked, so a
    /// right-to-left layout prefetches on the correct physical side.
    pub fn for_direction(direction: ScrollDirection, magnitude: u32, rtl: bool) -> Self {
        let direction = if rtl {
            match direction {
                ScrollDirection::Left => ScrollDirection::Right,
                ScrollDirection::Right => ScrollDirection::Left,
                other => other,
            }
        } else {
            direction
        };

        // Exhaustive on purpose: adding a direction without deciding its
        // padding side must fail to compile, not fall through to a default.
        match direction {
            ScrollDirection::None => Self::DEFAULT,
            ScrollDirection::Up => Self {
                top: magnitude,
                right: 0,
                bottom: 0,
                left: 0,
            },
            ScrollDirection::Down => Self {
                top: 0,
                right: 0,
                bottom: magnitude,
                left: 0,
            },
            ScrollDirection::Left => Self {
                top: 0,
                right: 0,
                bottom: 0,
                left: magnitude,
            },
            ScrollDirection::Right => Self {
                top: 0,
                right: magnitude,
                bottom: 0,
                left: 0,
            },
        }
    }
}

/// The row/column index window currently materialized.
///
/// Both axes are half-open `[first, last)` so the bounds drop straight into
/// `for i in first..last` loops and range containment checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Context {
    pub row_first: usize,
    pub row_last: usize,
    pub column_first: usize,
    pub column_last: usize,
}

impl Context {
    pub const EMPTY: Self = Self {
        row_first: 0,
        row_last: 0,
        column_first: 0,
        column_last: 0,
    };

    pub fn contains_row(&self, row: usize) -> bool {
        row >= self.row_first && row < self.row_last
    }

    pub fn contains_column(&self, column: usize) -> bool {
        column >= self.column_first && column < self.column_last
    }
}

/// Which axes are actually virtualized.
///
/// Disabling one axis collapses its sizing to the viewport, turning the grid
/// into a single-column list (`has_columns = false`) or a single-row strip
/// (`has_rows = false`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub has_columns: bool,
    pub has_rows: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            has_columns: true,
            has_rows: true,
        }
    }
}
