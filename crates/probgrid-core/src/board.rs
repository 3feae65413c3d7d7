//! The board adapter
//!
//! A [`Board`] owns the grid and the region registry and is the only
//! place region geometry is mutated after initial placement. The three
//! mutating transforms are the ones the rendering layer triggers:
//! committed moves (a drag ending in a snap), rotation, and grid
//! regeneration. Mid-drag positions are provisional and never published
//! to the registry, so the evaluator always sees fully committed
//! geometry.

use crate::error::{Error, Result};
use crate::geometry::{self, PixelPoint};
use crate::grid::Grid;
use crate::label::Label;
use crate::region::{BoxSize, RegionSet};
use crate::CELL_SIZE_PX;
use log::{debug, trace};

/// Drag interaction state
///
/// `Idle -> Dragging` on press, `Dragging -> Idle` on release (with a
/// snap side effect). A press while already dragging is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// No drag in flight
    Idle,
    /// A region is being dragged; `position` is provisional
    Dragging {
        label: Label,
        /// Pointer offset from the region's top-left corner at press time
        grab: PixelPoint,
        /// Current provisional top-left corner, clamped to the grid
        position: PixelPoint,
    },
}

/// The grid, its regions, and the drag state machine
#[derive(Debug)]
pub struct Board {
    grid: Grid,
    regions: RegionSet,
    drag: DragState,
}

impl Board {
    /// Create a board over a grid, with no regions
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            regions: RegionSet::new(),
            drag: DragState::Idle,
        }
    }

    /// The current grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The committed regions
    pub fn regions(&self) -> &RegionSet {
        &self.regions
    }

    /// Check whether a drag is in flight
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Replace the grid, discarding all regions and any in-flight drag
    pub fn regenerate(&mut self, grid: Grid) {
        debug!("regenerating grid as {grid}, discarding {} regions", self.regions.len());
        self.grid = grid;
        self.regions.clear();
        self.drag = DragState::Idle;
    }

    /// Discard all regions and any in-flight drag, keeping the grid
    pub fn reset(&mut self) {
        debug!("board reset, discarding {} regions", self.regions.len());
        self.regions.clear();
        self.drag = DragState::Idle;
    }

    /// Place a new region at the grid origin
    ///
    /// Labels are assigned in creation order; at most three regions may
    /// exist. On failure the registry is left unchanged.
    pub fn add_region(&mut self, size: BoxSize) -> Result<Label> {
        let label = self.regions.add(size)?;
        debug!("placed region {label} ({}x{}) at origin", size.width(), size.height());
        Ok(label)
    }

    /// Move a region so its top-left corner lands on the given cell
    ///
    /// Equivalent to a drag that releases over that cell: the position
    /// goes through the same snap-and-clamp commit path.
    pub fn move_region(&mut self, label: Label, row: u16, col: u16) -> Result<()> {
        let region = self
            .regions
            .get(label)
            .ok_or(Error::RegionNotFound(label))?;

        let target = PixelPoint::new(col as i32 * CELL_SIZE_PX, row as i32 * CELL_SIZE_PX);
        let snapped = geometry::snap_to_grid(
            target,
            region.pixel_width(),
            region.pixel_height(),
            &self.grid,
        );
        self.commit_position(label, snapped);
        Ok(())
    }

    /// Rotate a region by swapping its width and height
    ///
    /// The anchor is re-clamped so the rotated footprint still fits the
    /// grid; which cells are covered changes only through the swap.
    pub fn rotate(&mut self, label: Label) -> Result<()> {
        let grid = self.grid;
        let region = self
            .regions
            .get_mut(label)
            .ok_or(Error::RegionNotFound(label))?;

        let (new_width, new_height) = (region.height(), region.width());
        region.resize(new_width, new_height);

        let row = region
            .start_row()
            .min(grid.rows().saturating_sub(new_height));
        let col = region
            .start_col()
            .min(grid.cols().saturating_sub(new_width));
        region.move_to(row, col);

        debug!("rotated region {label} to {new_width}x{new_height} at ({row}, {col})");
        Ok(())
    }

    /// Start dragging a region
    ///
    /// `pointer` is the press position in grid-relative pixels. A press
    /// while another drag is in flight is ignored.
    pub fn begin_drag(&mut self, label: Label, pointer: PixelPoint) -> Result<()> {
        if self.is_dragging() {
            trace!("ignoring press on {label}: drag already in flight");
            return Ok(());
        }

        let region = self
            .regions
            .get(label)
            .ok_or(Error::RegionNotFound(label))?;

        let origin = region.origin_px();
        self.drag = DragState::Dragging {
            label,
            grab: PixelPoint::new(pointer.x - origin.x, pointer.y - origin.y),
            position: origin,
        };
        Ok(())
    }

    /// Update the provisional position from a pointer move
    ///
    /// No-op when idle. The position is clamped to the grid bounds but
    /// not committed to the registry.
    pub fn drag_to(&mut self, pointer: PixelPoint) {
        let DragState::Dragging { label, grab, .. } = self.drag else {
            return;
        };

        // A drag only ever references an existing region; reset and
        // regenerate clear the drag along with the registry.
        let region = self.regions.get(label).unwrap();
        let free = PixelPoint::new(pointer.x - grab.x, pointer.y - grab.y);
        let position = geometry::clamp_to_grid(
            free,
            region.pixel_width(),
            region.pixel_height(),
            &self.grid,
        );

        self.drag = DragState::Dragging {
            label,
            grab,
            position,
        };
    }

    /// Release the drag, snapping and committing the region's position
    ///
    /// Returns the moved region's label, or `None` when idle.
    pub fn end_drag(&mut self) -> Option<Label> {
        let DragState::Dragging {
            label, position, ..
        } = self.drag
        else {
            return None;
        };

        let region = self.regions.get(label).unwrap();
        let snapped = geometry::snap_to_grid(
            position,
            region.pixel_width(),
            region.pixel_height(),
            &self.grid,
        );

        self.drag = DragState::Idle;
        self.commit_position(label, snapped);
        Some(label)
    }

    fn commit_position(&mut self, label: Label, snapped: PixelPoint) {
        let row = (snapped.y / CELL_SIZE_PX) as u16;
        let col = (snapped.x / CELL_SIZE_PX) as u16;
        self.regions.get_mut(label).unwrap().move_to(row, col);
        debug!("committed region {label} at ({row}, {col})");
    }
}
