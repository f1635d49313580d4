// Example: engine-driven (controlled) wheel scrolling over a 2D grid.
use std::collections::BTreeMap;

use virtual_grid::{
    Dimensions, Frame, GridOptions, GridSurface, Position, TimerToken, VirtualGrid, WheelBehavior,
};

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
    // 100k × 200 grid of 24 × 120 cells in an 800 × 600 container.
    let options = GridOptions::new(100_000, 200, 24.0, 120.0, |_row, _column, _handle: &u64| {})
        .with_wheel_behavior(WheelBehavior::Controlled);

    let mut grid = VirtualGrid::new(DemoSurface::new(800.0, 600.0), options);
    grid.run_scheduled();
    println!("max scroll = {:?}", grid.max_scroll_position());

    // The engine accumulates raw deltas, clamps, renders, and writes the
    // position back; the surface never scrolls on its own.
    for (dx, dy, now) in [
        (0.0, 240.0, 16),
        (0.0, 240.0, 32),
        (360.0, 0.0, 48),
        (0.0, -100_000.0, 64),
    ] {
        grid.on_wheel(dx, dy, now);
        grid.run_scheduled();
        println!(
            "wheel ({dx:>8}, {dy:>9}) -> position={:?} context={:?}",
            grid.scroll_position(),
            grid.context()
        );
    }

    grid.cleanup();
}
