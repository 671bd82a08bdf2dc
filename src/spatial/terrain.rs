//! Terrain grid - per-cell destructible mass
//!
//! One `AtomicI32` of remaining mass per lattice cell, shared by every
//! particle worker. A cell with mass > 0 is solid and blocks motion; mass <= 0
//! is open. The stepper only ever decrements mass (erosion); growth/refill is
//! the terrain-authoring collaborator's job through `fill`/`set_mass`.
//!
//! Cell indices outside the buffer are always solid: the world edge is an
//! implicit wall.

use std::sync::atomic::{AtomicI32, Ordering};

pub struct TerrainGrid {
    width: u32,
    height: u32,
    cells: Vec<AtomicI32>,
}

impl TerrainGrid {
    /// Create an all-open grid (every mass 0).
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: (0..size).map(|_| AtomicI32::new(0)).collect(),
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

    #[inline]
    pub fn is_on_grid(&self, cx: i32, cy: i32) -> bool {
        cx >= 0 && cx < self.width as i32 && cy >= 0 && cy < self.height as i32
    }

    /// Collision-and-erosion check for one crossed cell.
    ///
    /// Returns true if the cell blocks the particle this step ("bounce").
    /// Off-grid cells block unconditionally and are never mutated. An open
    /// cell (mass <= 0) never blocks and is never mutated. A solid cell takes
    /// `damage_rate * impact_speed` (truncated) of erosion; the bounce
    /// decision uses the mass fetched by the atomic subtract itself, so a cell
    /// eroded to <= 0 this step still bounces this step and only turns
    /// passable for the next one. Two particles racing on the same cell each
    /// get a decision consistent with their own subtract.
    #[inline]
    pub fn try_erode(&self, cx: i32, cy: i32, impact_speed: f32, damage_rate: f32) -> bool {
        if !self.is_on_grid(cx, cy) {
            return true;
        }
        let idx = self.index(cx as u32, cy as u32);
        let cell = fast!(self.cells, [idx]);
        // Gate only: open cells stay untouched. The decision below never uses
        // this value.
        if cell.load(Ordering::Relaxed) <= 0 {
            return false;
        }
        let damage = (damage_rate * impact_speed) as i32;
        cell.fetch_sub(damage, Ordering::Relaxed) > 0
    }

    // === Authoring / readback boundary ===

    /// Set every cell to `mass`.
    pub fn fill(&self, mass: i32) {
        for cell in &self.cells {
            cell.store(mass, Ordering::Relaxed);
        }
    }

    pub fn set_mass(&self, x: u32, y: u32, mass: i32) {
        if self.is_on_grid(x as i32, y as i32) {
            self.cells[self.index(x, y)].store(mass, Ordering::Relaxed);
        }
    }

    /// Current mass; off-grid reads as i32::MAX (solid wall).
    pub fn mass(&self, x: i32, y: i32) -> i32 {
        if self.is_on_grid(x, y) {
            self.cells[self.index(x as u32, y as u32)].load(Ordering::Relaxed)
        } else {
            i32::MAX
        }
    }

    /// Row-major copy for the renderer.
    pub fn snapshot(&self) -> Vec<i32> {
        self.cells
            .iter()
            .map(|c| c.load(Ordering::Relaxed))
            .collect()
    }
}
