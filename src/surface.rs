use crate::types::{Dimensions, Frame, Position};

/// Identifies one pending timeout scheduled through
/// [`GridSurface::schedule_timeout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(pub u64);

/// The scrollable container the engine renders into.
///
/// The engine is toolkit-agnostic: everything it needs from the outside world
/// goes through this trait, so it runs unchanged over a DOM, a canvas scene
/// graph, a TUI buffer, or the scripted surface used by the test suite.
///
/// Handles are opaque: the engine creates them, positions them, attaches and
/// detaches them, and hands them to the caller's render callback, but never
/// looks inside.
///
/// # Host contract
///
/// The host owns the event loop and forwards its events into the engine:
///
/// - scroll notifications → [`VirtualGrid::on_scroll`](crate::VirtualGrid::on_scroll)
/// - wheel events (controlled mode) → [`VirtualGrid::on_wheel`](crate::VirtualGrid::on_wheel)
/// - a timeout scheduled here firing → [`VirtualGrid::on_reset_timer`](crate::VirtualGrid::on_reset_timer)
/// - a tick requested via [`request_tick`](Self::request_tick) →
///   [`VirtualGrid::run_scheduled`](crate::VirtualGrid::run_scheduled)
pub trait GridSurface {
    /// One renderable unit (a row container or a cell), owned by the engine's
    /// pool until evicted.
    type Handle;

    /// Current client box size of the container.
    fn measure(&self) -> Dimensions;

    /// Current scroll offset of the container.
    fn scroll_position(&self) -> Position;

    /// Writes the scroll offset back (controlled wheel mode).
    fn set_scroll_position(&mut self, position: Position);

    /// Sizes the filler backing the native scrollbars, so they reflect the
    /// virtual content extent rather than the handful of attached handles.
    fn set_content_extent(&mut self, extent: Dimensions);

    fn create_row(&mut self) -> Self::Handle;

    fn create_cell(&mut self) -> Self::Handle;

    /// Positions a handle inside its parent.
    fn set_frame(&mut self, handle: &Self::Handle, frame: Frame);

    /// Attaches a row container directly under the scroll container.
    fn attach_row(&mut self, row: &Self::Handle);

    /// Attaches a cell under its row container.
    fn attach_cell(&mut self, row: &Self::Handle, cell: &Self::Handle);

    /// Removes a handle (and anything attached under it) from the surface.
    fn detach(&mut self, handle: &Self::Handle);

    /// Asks the host to call `run_scheduled` on the next tick of its event
    /// loop, after the current work unit has painted. At most one request is
    /// outstanding at a time.
    fn request_tick(&mut self);

    /// Schedules a one-shot timeout; the host routes the firing back into
    /// `on_reset_timer`. Time units only need to be consistent with the
    /// timestamps the host passes to the event entry points.
    fn schedule_timeout(&mut self, delay: u64) -> TimerToken;

    fn cancel_timeout(&mut self, token: TimerToken);

    /// Removes every child the engine ever attached. Called once at teardown.
    fn clear(&mut self);
}
