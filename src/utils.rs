/// compute the product of a row vector and a matrix, v.M
pub fn dot(v: [f64; 3], m: [[f64; 3]; 3]) -> [f64; 3] {
    let mut out = [0f64; 3];
    for (i, out) in out.iter_mut().enumerate() {
        *out = v[0] * m[0][i] + v[1] * m[1][i] + v[2] * m[2][i]
    }
    out
}

/// compute the dot product between two vectors
pub fn vdot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// compute the norm of a vector
pub fn norm(a: [f64; 3]) -> f64 {
    vdot(a, a).sqrt()
}

/// compute the determinant of a 3x3 matrix
pub fn determinant(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
    - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
    + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// calculates the inverse of a 3x3 lattice, None if it doesn't span 3D space
pub fn invert_lattice(lattice: &[[f64; 3]; 3]) -> Option<[[f64; 3]; 3]> {
    let det = determinant(lattice);
    if det.abs() < 1e-16 || !det.is_finite() {
        return None;
    }
    let l = lattice;
    Some([[(l[1][1] * l[2][2] - l[1][2] * l[2][1]) / det,
           (l[0][2] * l[2][1] - l[0][1] * l[2][2]) / det,
           (l[0][1] * l[1][2] - l[0][2] * l[1][1]) / det],
          [(l[1][2] * l[2][0] - l[1][0] * l[2][2]) / det,
           (l[0][0] * l[2][2] - l[0][2] * l[2][0]) / det,
           (l[0][2] * l[1][0] - l[0][0] * l[1][2]) / det],
          [(l[1][0] * l[2][1] - l[1][1] * l[2][0]) / det,
           (l[0][1] * l[2][0] - l[0][0] * l[2][1]) / det,
           (l[0][0] * l[1][1] - l[0][1] * l[1][0]) / det]])
}
