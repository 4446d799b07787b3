//! 2-D gradient noise used for the noise coloring mode.

use libm::floorf;

/// Fractional bits of the noise coordinates. One lattice cell spans 256 units.
const CELL_SHIFT: u32 = 8;

// Unit-ish gradients, diagonals scaled so all have similar contribution.
const GRADIENTS: [(f32, f32); 8] = [
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (0.7071, 0.7071),
    (-0.7071, 0.7071),
    (0.7071, -0.7071),
    (-0.7071, -0.7071),
];

fn hash(x: u32, y: u32) -> u32 {
    let mut h = x.wrapping_mul(0x27d4_eb2d) ^ y.wrapping_mul(0x1656_67b1);
    h ^= h >> 15;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h
}

fn gradient(ix: u32, iy: u32, dx: f32, dy: f32) -> f32 {
    let (gx, gy) = GRADIENTS[(hash(ix, iy) & 7) as usize];
    gx * dx + gy * dy
}

fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Coherent noise over fixed-point coordinates (8 fractional bits).
///
/// Neighbouring coordinates give neighbouring values; the full output range
/// of `u16` is used with the midpoint at lattice corners.
pub fn noise2(x: u32, y: u32) -> u16 {
    let ix = x >> CELL_SHIFT;
    let iy = y >> CELL_SHIFT;
    let fx = (x & 0xff) as f32 / 256.0;
    let fy = (y & 0xff) as f32 / 256.0;

    let n00 = gradient(ix, iy, fx, fy);
    let n10 = gradient(ix.wrapping_add(1), iy, fx - 1.0, fy);
    let n01 = gradient(ix, iy.wrapping_add(1), fx, fy - 1.0);
    let n11 = gradient(ix.wrapping_add(1), iy.wrapping_add(1), fx - 1.0, fy - 1.0);

    let u = fade(fx);
    let v = fade(fy);
    let value = lerp(lerp(n00, n10, u), lerp(n01, n11, u), v);
    // 2-D gradient noise stays within about +-0.71.
    let scaled = floorf((value * 0.7071 + 0.5) * 65535.0);
    scaled.clamp(0.0, 65535.0) as u16
}
