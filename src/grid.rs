use std::sync::Arc;

use crate::dimensions::{self, DimensionSet};
use crate::math::clamp;
use crate::options::GridOptions;
use crate::pool::HandlePool;
use crate::queue::SwapQueue;
use crate::scroll::{SCROLL_DIRECTION_RESET, ScrollState};
use crate::surface::GridSurface;
use crate::types::{Context, Frame, Padding, Position, ScrollDirection, WheelBehavior};
use crate::window;

/// Column index handed to the render callback when column layout is disabled
/// and the callback receives whole row containers.
const ROW_COLUMN_TOKEN: usize = 1;

type Task<S> = Box<dyn FnOnce(&mut VirtualGrid<S>)>;

/// The windowing engine.
///
/// Bound to one [`GridSurface`] and one logical grid shape for its whole
/// life. The host forwards surface events into [`Self::on_scroll`],
/// [`Self::on_wheel`], [`Self::on_reset_timer`], and [`Self::run_scheduled`];
/// the engine keeps exactly the handles for the current window attached,
/// recycling them as the window moves.
///
/// Construction measures the surface and performs the initial render; call
/// [`Self::cleanup`] to tear the instance down.
pub struct VirtualGrid<S: GridSurface> {
    surface: S,
    options: GridOptions<S::Handle>,
    dimensions: DimensionSet,
    scroll: ScrollState,
    padding: Padding,
    context: Context,
    pool: HandlePool<S::Handle>,
    tasks: SwapQueue<Task<S>>,
    tick_requested: bool,
    disposed: bool,
}

impl<S: GridSurface> VirtualGrid<S> {
    pub fn new(surface: S, options: GridOptions<S::Handle>) -> Self {
        let scroll = ScrollState::new(options.wheel_behavior, surface.scroll_position());
        vgdebug!(
            rows = options.row_len,
            columns = options.column_len,
            "VirtualGrid::new"
        );
        let mut grid = Self {
            surface,
            options,
            dimensions: DimensionSet::EMPTY,
            scroll,
            padding: Padding::DEFAULT,
            context: Context::EMPTY,
            pool: HandlePool::new(),
            tasks: SwapQueue::new(),
            tick_requested: false,
            disposed: false,
        };
        grid.measure();
        grid.render();
        grid
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for host integration (event plumbing, resizing the
    /// backing container). The handle tree itself belongs to the engine.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn options(&self) -> &GridOptions<S::Handle> {
        &self.options
    }

    /// The index window materialized by the most recent render pass.
    pub fn context(&self) -> Context {
        self.context
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn dimensions(&self) -> &DimensionSet {
        &self.dimensions
    }

    pub fn scroll_position(&self) -> Position {
        self.scroll.position
    }

    /// `content − root` per axis; negative means that axis cannot scroll.
    pub fn max_scroll_position(&self) -> Position {
        self.scroll.max_position
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.scroll.direction
    }

    /// Timestamp of the most recent observed scroll notification, if any.
    pub fn last_scroll_timestamp(&self) -> Option<u64> {
        self.scroll.timestamp
    }

    pub fn wheel_behavior(&self) -> WheelBehavior {
        self.scroll.wheel_behavior
    }

    /// Number of row containers currently pooled.
    pub fn pooled_rows(&self) -> usize {
        self.pool.len()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Re-reads the surface box and recomputes every derived dimension, the
    /// maximum scroll offsets, and the filler extent backing the native
    /// scrollbars. Hosts forward container resize notifications here.
    pub fn measure(&mut self) {
        if self.disposed {
            return;
        }
        let rendered = self.dimensions.rendered;
        self.dimensions = dimensions::compute(self.surface.measure(), &self.options);
        self.dimensions.rendered = rendered;
        self.scroll.max_position = dimensions::max_scroll_position(&self.dimensions);
        self.surface
            .set_content_extent(dimensions::filler_extent(&self.dimensions));
    }

    /// Consumes a raw wheel delta (controlled mode only): accumulates it,
    /// clamps the resulting position into `[0, max]` per axis, renders, and
    /// writes the position back to the surface. The scroll notification the
    /// write-back echoes is suppressed via the ignore flag.
    pub fn on_wheel(&mut self, dx: f64, dy: f64, now: u64) {
        if self.disposed || self.scroll.wheel_behavior != WheelBehavior::Controlled {
            return;
        }

        let scroll = &mut self.scroll;
        scroll.last_input = Some(now);
        scroll.delta_since_render.x += dx;
        scroll.delta_since_render.y += dy;
        scroll.ignore_next = true;
        scroll.position.x = clamp(
            scroll.position.x + scroll.delta_since_render.x,
            0.0,
            scroll.max_position.x,
        );
        scroll.position.y = clamp(
            scroll.position.y + scroll.delta_since_render.y,
            0.0,
            scroll.max_position.y,
        );

        self.render();
        self.surface.set_scroll_position(self.scroll.position);
        self.note_input(now);
    }

    /// Observes a surface scroll notification: derives direction and padding
    /// from the position delta, then renders. A notification echoed by a
    /// controlled write-back is consumed without side effects.
    pub fn on_scroll(&mut self, position: Position, now: u64) {
        if self.disposed {
            return;
        }

        self.scroll.last_input = Some(now);

        if self.scroll.ignore_next {
            self.scroll.ignore_next = false;
            return;
        }

        // TODO: clamp for scroll bounce
        let delta = self.scroll.observe(position, now);
        self.scroll.direction = ScrollDirection::for_delta(delta.x, delta.y);
        self.padding = Padding::for_direction(
            self.scroll.direction,
            self.options.scroll_padding,
            self.options.rtl,
        );

        self.render();
        self.note_input(now);
    }

    fn note_input(&mut self, now: u64) {
        self.scroll.last_input = Some(now);
        // One pending timer at a time: instead of re-arming on every input
        // event, on_reset_timer restarts it with the remaining quiet time
        // when it fires too early.
        if self.scroll.reset_timer.is_none() {
            self.scroll.reset_timer = Some(self.surface.schedule_timeout(SCROLL_DIRECTION_RESET));
        }
    }

    /// Host entry point for the timeout scheduled through the surface. Resets
    /// direction and padding once a full quiet period has elapsed since the
    /// last input; reschedules itself for the remaining time otherwise.
    pub fn on_reset_timer(&mut self, now: u64) {
        if self.disposed || self.scroll.reset_timer.is_none() {
            return;
        }
        let Some(last_input) = self.scroll.last_input else {
            self.scroll.reset_timer = None;
            return;
        };

        let elapsed = now.saturating_sub(last_input);
        let remaining = SCROLL_DIRECTION_RESET.saturating_sub(elapsed);
        if remaining > 0 {
            self.scroll.reset_timer = Some(self.surface.schedule_timeout(remaining));
        } else {
            self.scroll.reset_timer = None;
            self.scroll.direction = ScrollDirection::None;
            self.padding = Padding::for_direction(
                ScrollDirection::None,
                self.options.scroll_padding,
                self.options.rtl,
            );
            vgtrace!("direction reset after quiet period");
            self.render();
        }
    }

    /// Recomputes the window from the current scroll state, creates handles
    /// for every newly windowed index, and schedules the deferred removal
    /// pass for indices that fell out.
    ///
    /// Rendering twice without an intervening scroll or resize yields an
    /// identical context and touches no handles.
    pub fn render(&mut self) {
        if self.disposed {
            return;
        }
        self.scroll.delta_since_render.clear();
        self.write_nodes();
        // Stale handles are detached on the next tick, after the freshly
        // created ones had a chance to paint.
        self.schedule(Box::new(|grid| {
            if grid.disposed {
                return;
            }
            grid.remove_nodes();
            if let Some(finish) = &grid.options.finish_render {
                finish();
            }
        }));
    }

    fn write_nodes(&mut self) {
        let (next, rendered) = window::compute(
            self.scroll.position,
            self.padding,
            &self.dimensions,
            self.options.row_len,
            self.options.column_len,
        );
        self.dimensions.rendered = rendered;

        let layout = self.options.layout;
        let row_width = if layout.has_columns {
            self.dimensions.content.width
        } else {
            self.dimensions.row.width
        };
        let row_height = self.dimensions.row.height;
        let column_width = self.dimensions.column.width;
        let column_height = self.dimensions.column.height;
        let render_node = Arc::clone(&self.options.render_node);

        for r in next.row_first..next.row_last {
            if !self.pool.contains_row(r) {
                let handle = self.surface.create_row();
                let entry = self.pool.insert_row(r, handle);
                self.surface.set_frame(
                    &entry.handle,
                    Frame {
                        x: 0.0,
                        y: r as f64 * row_height,
                        width: row_width,
                        height: row_height,
                    },
                );
                self.surface.attach_row(&entry.handle);
                if !layout.has_columns {
                    render_node(r, ROW_COLUMN_TOKEN, &entry.handle);
                }
            }

            if layout.has_columns {
                let Some(entry) = self.pool.row_mut(r) else {
                    continue;
                };
                for c in next.column_first..next.column_last {
                    if entry.has_cell(c) {
                        continue;
                    }
                    let cell = self.surface.create_cell();
                    self.surface.set_frame(
                        &cell,
                        Frame {
                            x: c as f64 * column_width,
                            y: 0.0,
                            width: column_width,
                            height: column_height,
                        },
                    );
                    render_node(r, c, &cell);
                    self.surface.attach_cell(&entry.handle, &cell);
                    entry.insert_cell(c, cell);
                }
            }
        }

        vgtrace!(
            row_first = next.row_first,
            row_last = next.row_last,
            column_first = next.column_first,
            column_last = next.column_last,
            pooled = self.pool.len(),
            "write_nodes"
        );

        self.context = next;
    }

    /// Deferred eviction pass, run against the context of the most recent
    /// render: stale rows go wholesale (one detach for the container, one
    /// removal notification per pooled cell), retained rows shed stale cells
    /// one by one.
    fn remove_nodes(&mut self) {
        let context = self.context;
        let remove_node = self.options.remove_node.clone();

        for (row, entry) in self
            .pool
            .take_rows_outside(context.row_first, context.row_last)
        {
            self.surface.detach(&entry.handle);
            if let Some(remove) = &remove_node {
                for (column, cell) in &entry.cells {
                    remove(row, *column, cell);
                }
            }
        }

        for row in self.pool.row_indexes() {
            for (column, cell) in
                self.pool
                    .take_cells_outside(row, context.column_first, context.column_last)
            {
                self.surface.detach(&cell);
                if let Some(remove) = &remove_node {
                    remove(row, column, &cell);
                }
            }
        }
    }

    fn schedule(&mut self, task: Task<S>) {
        self.tasks.push(task);
        if !self.tick_requested {
            self.tick_requested = true;
            self.surface.request_tick();
        }
    }

    /// Drains the deferred-task queue; each queued action runs at most once
    /// and the queue is empty afterwards. The host calls this once per tick
    /// requested through [`GridSurface::request_tick`].
    pub fn run_scheduled(&mut self) {
        self.tick_requested = false;
        let mut batch = self.tasks.swap();
        for task in batch.drain(..) {
            task(self);
        }
        self.tasks.recycle(batch);
    }

    /// Tears the engine down: cancels the pending idle-reset timer, forgets
    /// every pooled handle, and clears the surface. Events arriving after
    /// this point are ignored, and already-queued removal tasks become
    /// no-ops.
    pub fn cleanup(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        if let Some(token) = self.scroll.reset_timer.take() {
            self.surface.cancel_timeout(token);
        }
        self.pool.clear();
        self.context = Context::EMPTY;
        self.surface.clear();
        vgdebug!("VirtualGrid::cleanup");
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &HandlePool<S::Handle> {
        &self.pool
    }

    #[cfg(test)]
    pub(crate) fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(test)]
    pub(crate) fn delta_since_render(&self) -> crate::types::Vector {
        self.scroll.delta_since_render
    }
}

impl<S: GridSurface> core::fmt::Debug for VirtualGrid<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualGrid")
            .field("context", &self.context)
            .field("padding", &self.padding)
            .field("direction", &self.scroll.direction)
            .field("position", &self.scroll.position)
            .field("pooled_rows", &self.pool.len())
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}
