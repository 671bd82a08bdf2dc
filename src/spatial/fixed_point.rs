//! Fixed-point particle coordinates
//!
//! Particle position units are packed in a two-level grid:
//! the high-order bits of a `u32` coordinate select a lattice cell (the
//! resolution of the terrain and density buffers), and the low `mantissa_bits`
//! bits hold the sub-cell offset in `[0, cell_size)`.
//!
//! Positions stay unsigned by anchoring the coordinate system: the grid
//! origin sits at `anchor` coarse cells into the unsigned range, so cell
//! indices can go negative near the world edge while the packed word cannot.
//! By default the anchor is halfway into the coarse range, which gives the
//! most room before overflow on either side.
//!
//! This is pretty much just adjustable fixed-point math.

/// Sub-cell precision and anchoring for one simulation instance.
///
/// `mantissa_bits` was historically fixed at 8; it is configurable here and
/// validated at setup time (see [`crate::domain::settings::SimSettings`]).
/// The coarse coordinate must fit a `u32` after adding `anchor`; overflow
/// wraps, which is the caller's documented responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridScale {
    mantissa_bits: u32,
    anchor: i32,
}

impl GridScale {
    /// Scale with the default anchor, halfway into the coarse range.
    pub fn new(mantissa_bits: u32) -> Self {
        debug_assert!((1..=16).contains(&mantissa_bits));
        Self {
            mantissa_bits,
            anchor: Self::default_anchor(mantissa_bits),
        }
    }

    pub fn with_anchor(mantissa_bits: u32, anchor: i32) -> Self {
        debug_assert!((1..=16).contains(&mantissa_bits));
        Self {
            mantissa_bits,
            anchor,
        }
    }

    /// Half the coarse-grid range: the origin that maximizes signed headroom.
    #[inline]
    pub fn default_anchor(mantissa_bits: u32) -> i32 {
        1i32 << (31 - mantissa_bits)
    }

    #[inline]
    pub fn mantissa_bits(&self) -> u32 {
        self.mantissa_bits
    }

    #[inline]
    pub fn anchor(&self) -> i32 {
        self.anchor
    }

    /// Sub-cell units per cell edge.
    #[inline]
    pub fn cell_size(&self) -> i32 {
        1i32 << self.mantissa_bits
    }

    #[inline]
    pub fn half_cell(&self) -> i32 {
        self.cell_size() >> 1
    }

    #[inline]
    pub fn mask(&self) -> u32 {
        (1u32 << self.mantissa_bits) - 1
    }

    /// Cell index of a packed coordinate: logical shift on the unsigned word,
    /// then re-anchor into signed grid space.
    #[inline]
    pub fn cell_of(&self, pos: u32) -> i32 {
        (pos >> self.mantissa_bits) as i32 - self.anchor
    }

    /// Sub-cell offset of a packed coordinate, in `[0, cell_size)`.
    #[inline]
    pub fn remainder_of(&self, pos: u32) -> i32 {
        (pos & self.mask()) as i32
    }

    /// Inverse of `cell_of`/`remainder_of`. Wraps on coarse overflow.
    #[inline]
    pub fn compose(&self, cell: i32, remainder: i32) -> u32 {
        debug_assert!(remainder >= 0 && remainder < self.cell_size());
        (cell.wrapping_add(self.anchor) as u32)
            .wrapping_shl(self.mantissa_bits)
            .wrapping_add(remainder as u32)
    }

    /// Convert a distance in cell units to sub-cell units (round to nearest).
    /// Anchor-free: useful for authoring velocities and offsets.
    #[inline]
    pub fn from_cells(&self, v: f64) -> i32 {
        (v * self.cell_size() as f64).round() as i32
    }
}
