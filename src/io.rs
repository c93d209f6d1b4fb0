pub mod output;
pub mod poscar;

/// Default name of the file holding the MAGMOM line.
pub const MAGMOM_FILE: &str = "MAGMOM";
/// Default name of the file holding the plane assignment table.
pub const TABLE_FILE: &str = "coplanar_planes.txt";
