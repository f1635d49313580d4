// Example: a million-row list (no column axis) over a toy in-memory surface.
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use virtual_grid::{
    Dimensions, Frame, GridOptions, GridSurface, Layout, Position, TimerToken, VirtualGrid,
};

/// Minimal scroll container: handles are ids, attachment is a map. A real
/// host would back this with its widget tree and event loop.
struct DemoSurface {
    size: Dimensions,
    scroll: Position,
    next_handle: u64,
    next_timer: u64,
    attached: BTreeMap<u64, Vec<u64>>,
}

impl DemoSurface {
    fn new(width: f64, height: f64) -> Self {
        Self {
            size: Dimensions::new(width, height),
            scroll: Position::ZERO,
            next_handle: 0,
            next_timer: 0,
            attached: BTreeMap::new(),
        }
    }
}

impl GridSurface for DemoSurface {
    type Handle = u64;

    fn measure(&self) -> Dimensions {
        self.size
    }

    fn scroll_position(&self) -> Position {
        self.scroll
    }

    fn set_scroll_position(&mut self, position: Position) {
        self.scroll = position;
    }

    fn set_content_extent(&mut self, _extent: Dimensions) {}

    fn create_row(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }

    fn create_cell(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }

    fn set_frame(&mut self, _handle: &u64, _frame: Frame) {}

    fn attach_row(&mut self, row: &u64) {
        self.attached.insert(*row, Vec::new());
    }

    fn attach_cell(&mut self, row: &u64, cell: &u64) {
        if let Some(cells) = self.attached.get_mut(row) {
            cells.push(*cell);
        }
    }

    fn detach(&mut self, handle: &u64) {
        if self.attached.remove(handle).is_none() {
            for cells in self.attached.values_mut() {
                cells.retain(|cell| cell != handle);
            }
        }
    }

    fn request_tick(&mut self) {
        // The demo drains manually via run_scheduled().
    }

    fn schedule_timeout(&mut self, _delay: u64) -> TimerToken {
        self.next_timer += 1;
        TimerToken(self.next_timer)
    }

    fn cancel_timeout(&mut self, _token: TimerToken) {}

    fn clear(&mut self) {
        self.attached.clear();
    }
}

fn main() {
    let rendered = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&rendered);

    let options = GridOptions::new(1_000_000, 0, 24.0, 0.0, move |_row, _column, _handle: &u64| {
        counter.fetch_add(1, Ordering::Relaxed);
    })
    .with_layout(Layout {
        has_columns: false,
        has_rows: true,
    });

    let mut grid = VirtualGrid::new(DemoSurface::new(400.0, 700.0), options);
    grid.run_scheduled();
    println!(
        "initial: context={:?} pooled={} rendered={}",
        grid.context(),
        grid.pooled_rows(),
        rendered.load(Ordering::Relaxed)
    );

    // Jump deep into the list; the pool swaps to the new window.
    grid.on_scroll(Position::new(0.0, 120_000.0), 16);
    grid.run_scheduled();
    println!(
        "scrolled: context={:?} direction={:?} padding={:?}",
        grid.context(),
        grid.scroll_direction(),
        grid.padding()
    );

    // Quiet period over: padding turns symmetric again.
    grid.on_reset_timer(16 + 500);
    grid.run_scheduled();
    println!(
        "idle:     context={:?} padding={:?} rendered={}",
        grid.context(),
        grid.padding(),
        rendered.load(Ordering::Relaxed)
    );

    grid.cleanup();
}
