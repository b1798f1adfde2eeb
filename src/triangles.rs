use crate::table_spec::TRIANGLE_SIZE;

/// Breakpoints of the triangle shapes, in twelfths.
pub static TRIANGLES_12THS: [[i8; TRIANGLE_SIZE]; TRIANGLE_SIZE] = [
    [0, 3, 6, 7, 10, 12, 13, 15, 17],
    [0, 2, 4, 6, 8, 10, 12, 14, 16],
    [0, 1, 3, 6, 7, 10, 12, 13, 17],
    [0, 3, 5, 8, 10, 12, 13, 15, 17],
    [0, 1, 3, 6, 7, 9, 10, 12, 15],
    [0, 3, 6, 7, 10, 12, 14, 16, 18],
    [0, 2, 5, 7, 10, 13, 15, 17, 19],
    [0, 3, 5, 8, 10, 12, 15, 17, 19],
    [0, 2, 4, 6, 8, 10, 12, 14, 16],
];

pub fn generate() -> Vec<Vec<f32>> {
    TRIANGLES_12THS
        .iter()
        .map(|row| row.iter().map(|&n| f32::from(n) / 12.0).collect())
        .collect()
}
