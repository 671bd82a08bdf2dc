//! Density grid - per-cell visit counters for visualization
//!
//! One `AtomicU32` per lattice cell counting particle-step visits this frame.
//! Write-only from the stepper (atomic increment); the renderer reads it and
//! decides the reset cadence (per tick vs. accumulating).

use std::sync::atomic::{AtomicU32, Ordering};

pub struct DensityGrid {
    width: u32,
    height: u32,
    cells: Vec<AtomicU32>,
}

impl DensityGrid {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: (0..size).map(|_| AtomicU32::new(0)).collect(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    /// Count one particle-step visit. Callers bounds-check first; the stepper
    /// only ever records post-bounce, necessarily-on-grid cells.
    #[inline]
    pub fn increment(&self, cx: i32, cy: i32) {
        debug_assert!(
            cx >= 0 && cx < self.width as i32 && cy >= 0 && cy < self.height as i32,
            "density increment off-grid at ({}, {})",
            cx,
            cy
        );
        let idx = self.index(cx as u32, cy as u32);
        fast!(self.cells, [idx]).fetch_add(1, Ordering::Relaxed);
    }

    // === Renderer boundary ===

    pub fn count(&self, x: u32, y: u32) -> u32 {
        self.cells[self.index(x, y)].load(Ordering::Relaxed)
    }

    /// Row-major copy for the renderer.
    pub fn snapshot(&self) -> Vec<u32> {
        self.cells
            .iter()
            .map(|c| c.load(Ordering::Relaxed))
            .collect()
    }

    /// Zero every counter. Caller policy, typically once per rendered frame.
    pub fn clear(&self) {
        for cell in &self.cells {
            cell.store(0, Ordering::Relaxed);
        }
    }
}
