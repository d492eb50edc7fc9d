/// Number of cells in a 3x3 kernel, used as the box blur divisor.
pub const BOX_BLUR_CELLS: u8 = 9;

/// Horizontal sobel operator, row-major in kernel order (NW, N, NE, W, C, E, SW, S, SE).
pub const SOBEL_X: [i32; 9] = [1, 0, -1, 2, 0, -2, 1, 0, -1];

/// Vertical sobel operator, row-major in kernel order (NW, N, NE, W, C, E, SW, S, SE).
pub const SOBEL_Y: [i32; 9] = [-1, -2, -1, 0, 0, 0, 1, 2, 1];

/// Create the 3x3 sobel operators.
///
/// # Returns
///
/// The horizontal and vertical operators, row-major.
pub fn sobel_kernel_3x3() -> ([i32; 9], [i32; 9]) {
    (SOBEL_X, SOBEL_Y)
}
