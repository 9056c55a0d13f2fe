use bytemuck::{Pod, Zeroable};

use crate::coords::Viewport;

use super::BoardError;

/// One vertex of a cell quad, in normalized device coordinates.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CellVertex {
    pub pos: [f32; 3],
}

impl CellVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CellVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Vertices per cell: two triangles, no index buffer.
pub const QUAD_VERTEX_COUNT: u32 = 6;

/// Two triangles covering one cell.
pub type CellQuad = [CellVertex; QUAD_VERTEX_COUNT as usize];

/// Maps an `xrows × yrows` board onto NDC.
///
/// Cell `(0, 0)` sits at the bottom-left corner `(-1, -1)`; `x` grows right
/// and `y` grows up. The side of every cell is `2 / xrows` on both axes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoardLayout {
    xrows: usize,
    yrows: usize,
    viewport: Viewport,
}

impl BoardLayout {
    /// Validates the board shape against the viewport.
    ///
    /// Fails when a dimension is zero or the viewport is not square.
    pub fn new(xrows: usize, yrows: usize, viewport: Viewport) -> Result<Self, BoardError> {
        if xrows == 0 || yrows == 0 {
            return Err(BoardError::InvalidDimension { xrows, yrows });
        }
        if !viewport.is_valid() || !viewport.is_square() {
            return Err(BoardError::AspectMismatch {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self { xrows, yrows, viewport })
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.xrows, self.yrows)
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.xrows * self.yrows
    }

    /// Dense arena index of `(x, y)`; matches the board's storage order.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        x * self.yrows + y
    }

    /// Side length of a cell in NDC.
    #[inline]
    pub fn cell_size(&self) -> f32 {
        2.0 / self.xrows as f32
    }

    /// Minimum corner of cell `(i, j)` in NDC.
    pub fn cell_origin(&self, i: usize, j: usize) -> [f32; 2] {
        let half_x = self.xrows as f32 / 2.0;
        let half_y = self.yrows as f32 / 2.0;
        [
            (i as f32 - half_x) / half_x,
            (j as f32 - half_y) / half_y,
        ]
    }

    /// Six vertices for cell `(i, j)`.
    pub fn quad(&self, i: usize, j: usize) -> CellQuad {
        let [x, y] = self.cell_origin(i, j);
        let s = self.cell_size();
        let v = |x: f32, y: f32| CellVertex { pos: [x, y, 0.0] };
        [
            v(x, y),
            v(x + s, y),
            v(x + s, y + s),
            v(x, y),
            v(x, y + s),
            v(x + s, y + s),
        ]
    }

    /// All quads in arena order (`x` outer, `y` inner).
    pub fn quads(&self) -> impl Iterator<Item = CellQuad> + '_ {
        (0..self.xrows).flat_map(move |i| (0..self.yrows).map(move |j| self.quad(i, j)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(xrows: usize, yrows: usize) -> BoardLayout {
        BoardLayout::new(xrows, yrows, Viewport::square(720.0)).unwrap()
    }

    fn min_corner(q: &CellQuad) -> [f32; 2] {
        q.iter().fold([f32::INFINITY; 2], |[mx, my], v| [mx.min(v.pos[0]), my.min(v.pos[1])])
    }

    fn max_corner(q: &CellQuad) -> [f32; 2] {
        q.iter()
            .fold([f32::NEG_INFINITY; 2], |[mx, my], v| [mx.max(v.pos[0]), my.max(v.pos[1])])
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn rejects_non_square_viewport() {
        let err = BoardLayout::new(8, 8, Viewport::new(720.0, 480.0)).unwrap_err();
        assert_eq!(err, BoardError::AspectMismatch { width: 720.0, height: 480.0 });
    }

    #[test]
    fn rejects_zero_dimension() {
        let err = BoardLayout::new(0, 8, Viewport::square(100.0)).unwrap_err();
        assert_eq!(err, BoardError::InvalidDimension { xrows: 0, yrows: 8 });
    }

    #[test]
    fn rejects_empty_viewport() {
        assert!(BoardLayout::new(4, 4, Viewport::square(0.0)).is_err());
    }

    // ── mapping ───────────────────────────────────────────────────────────

    #[test]
    fn first_cell_of_four_wide_board() {
        let l = layout(4, 4);
        assert_eq!(l.cell_size(), 0.5);
        assert_eq!(l.cell_origin(0, 0), [-1.0, -1.0]);

        let q = l.quad(0, 0);
        assert_eq!(min_corner(&q), [-1.0, -1.0]);
        assert_eq!(max_corner(&q), [-0.5, -0.5]);
    }

    #[test]
    fn last_cell_reaches_top_right() {
        let l = layout(4, 4);
        let q = l.quad(3, 3);
        assert_eq!(min_corner(&q), [0.5, 0.5]);
        assert_eq!(max_corner(&q), [1.0, 1.0]);
    }

    #[test]
    fn quad_is_two_triangles_in_plane() {
        let q = layout(4, 4).quad(1, 2);
        assert_eq!(q.len(), QUAD_VERTEX_COUNT as usize);
        assert!(q.iter().all(|v| v.pos[2] == 0.0));
        // Both triangles share the min and max corners.
        assert_eq!(q[0], q[3]);
        assert_eq!(q[2], q[5]);
    }

    #[test]
    fn neighbors_tile_without_gaps() {
        let l = layout(8, 8);
        let a = l.quad(2, 5);
        let b = l.quad(3, 5);
        assert_eq!(max_corner(&a)[0], min_corner(&b)[0]);
    }

    #[test]
    fn odd_board_stays_inside_ndc() {
        let l = layout(5, 5);
        for q in l.quads() {
            let [x0, y0] = min_corner(&q);
            let [x1, y1] = max_corner(&q);
            assert!(x0 >= -1.0 && y0 >= -1.0);
            assert!(x1 <= 1.0 + 1e-6 && y1 <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn odd_board_halves_in_float() {
        let l = layout(5, 5);
        assert_eq!(l.cell_origin(0, 0), [-1.0, -1.0]);
        assert_eq!(l.cell_origin(4, 4), [0.6, 0.6]);

        let [x1, y1] = max_corner(&l.quad(4, 4));
        assert!((x1 - 1.0).abs() < 1e-6 && (y1 - 1.0).abs() < 1e-6);
    }

    #[test]
    fn single_cell_board_fills_ndc() {
        let l = layout(1, 1);
        assert_eq!(l.cell_origin(0, 0), [-1.0, -1.0]);
        assert_eq!(max_corner(&l.quad(0, 0)), [1.0, 1.0]);
    }

    #[test]
    fn rows_use_their_own_axis_for_offset() {
        let l = BoardLayout::new(4, 8, Viewport::square(400.0)).unwrap();
        assert_eq!(l.cell_origin(0, 4), [-1.0, 0.0]);
        assert_eq!(l.cell_size(), 0.5);
    }

    // ── determinism ───────────────────────────────────────────────────────

    #[test]
    fn building_twice_is_bit_identical() {
        let a: Vec<CellQuad> = layout(16, 16).quads().collect();
        let b: Vec<CellQuad> = layout(16, 16).quads().collect();
        assert_eq!(a.len(), 256);
        let bits = |qs: &[CellQuad]| -> Vec<u32> {
            bytemuck::cast_slice::<CellQuad, f32>(qs).iter().map(|f| f.to_bits()).collect()
        };
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn quads_follow_arena_order() {
        let l = layout(3, 2);
        let all: Vec<CellQuad> = l.quads().collect();
        assert_eq!(all[l.index(2, 1)], l.quad(2, 1));
        assert_eq!(all[l.index(1, 0)], l.quad(1, 0));
    }
}
