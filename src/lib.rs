//! A windowing engine for very large scrollable grids.
//!
//! Renders only the visible slice of a grid (millions of rows, optionally
//! many columns) inside a fixed-size scrollable surface, recycling a small
//! pool of renderable cell handles instead of materializing the whole
//! dataset: dimension math, scroll/wheel interpretation, direction-aware
//! prefetch padding, window index computation, and deferred handle eviction.
//!
//! It is UI-agnostic. A host toolkit implements [`GridSurface`] — a
//! scrollable container that can measure itself, create/position/detach
//! opaque handles, and schedule callbacks — and forwards its scroll, wheel,
//! timer, and tick events into the [`VirtualGrid`] entry points. Cell content
//! comes from the caller through the render callback in [`GridOptions`].
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod dimensions;
mod grid;
mod math;
mod options;
mod pool;
mod queue;
mod scroll;
mod surface;
mod types;
mod window;


pub use dimensions::DimensionSet;
pub use grid::VirtualGrid;
pub use options::{FinishRenderCallback, GridOptions, RemoveNodeCallback, RenderNodeCallback};
pub use scroll::SCROLL_DIRECTION_RESET;
pub use surface::{GridSurface, TimerToken};
pub use types::{
    Approach, Context, Dimensions, Frame, Layout, Padding, Position, ScrollDirection, Vector,
    WheelBehavior,
};
