use crate::atoms::Atoms;
use crate::utils;
use std::cmp::Ordering;

/// The projection of a selected atom onto the plane normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// 0-based atom number.
    pub atom: usize,
    /// The distance along the normal, p = cart . n̂.
    pub value: f64,
}

/// A set of atoms considered to lie on the same plane.
///
/// The plane is anchored on `reference`, the projection of the first atom
/// assigned to it, which never moves as atoms are added. Every member sits
/// strictly within the tolerance of the anchor, so two members can be up to
/// twice the tolerance apart.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    pub reference: f64,
    /// 0-based atom numbers in the order they were assigned.
    pub members: Vec<usize>,
}

impl Plane {
    fn new(projection: Projection) -> Self {
        Self { reference: projection.value,
               members: vec![projection.atom] }
    }

    /// whether a projection is strictly within `tolerance` of the anchor
    pub fn accepts(&self, value: f64, tolerance: f64) -> bool {
        (value - self.reference).abs() < tolerance
    }
}

/// Projects every selected atom onto the unit normal, in atom order.
pub fn project(atoms: &Atoms, mask: &[bool], normal: [f64; 3]) -> Vec<Projection> {
    atoms.positions
         .iter()
         .zip(mask)
         .enumerate()
         .filter(|(_, (_, selected))| **selected)
         .map(|(atom, (position, _))| Projection { atom,
                                                  value: utils::vdot(*position,
                                                                     normal) })
         .collect()
}

/// Groups projections into planes in a single pass.
///
/// Each projection joins the first plane, in creation order, whose anchor is
/// strictly closer than `tolerance`, otherwise it becomes the anchor of a new
/// plane. Planes are never merged, so the result depends on the order of
/// `projections`: with a tolerance of 0.04 the sequence 0.00, 0.03, 0.06 gives
/// two planes as 0.06 is only ever compared with the anchor at 0.00.
pub fn cluster(projections: &[Projection], tolerance: f64) -> Vec<Plane> {
    let mut planes: Vec<Plane> = Vec::new();
    for projection in projections.iter() {
        match planes.iter_mut()
                    .find(|plane| plane.accepts(projection.value, tolerance))
        {
            Some(plane) => plane.members.push(projection.atom),
            None => planes.push(Plane::new(*projection)),
        }
    }
    planes
}

/// Sorts the planes along the normal. The position of a plane in the
/// returned vector is its ordered plane index. The sort is stable so planes
/// with equal anchors keep their creation order.
pub fn order(mut planes: Vec<Plane>) -> Vec<Plane> {
    planes.sort_by(|a, b| {
              a.reference
               .partial_cmp(&b.reference)
               .unwrap_or(Ordering::Equal)
          });
    planes
}
