use crate::atoms::Atoms;
use crate::config::Config;
use crate::direction;
use crate::errors::InvalidBlockSizeError;
use crate::planes::{self, Plane};
use crate::selection::Selection;
use anyhow::{Context, Result};
use log::{debug, info};

/// The sign of the plane at `ordered_index` when planes are grouped in blocks
/// of `block_size`: +1 for even blocks and -1 for odd blocks.
pub fn plane_sign(ordered_index: usize,
                  block_size: isize)
                  -> Result<i8, InvalidBlockSizeError> {
    if block_size <= 0 {
        return Err(InvalidBlockSizeError { block_size });
    }
    match (ordered_index / block_size as usize) % 2 {
        0 => Ok(1),
        _ => Ok(-1),
    }
}

/// A row of the plane assignment table.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneRow {
    /// 1-based atom number.
    pub atom: usize,
    pub symbol: String,
    /// The ordered plane index.
    pub plane: usize,
    pub sign: i8,
    pub fractional: [f64; 3],
}

/// The result of assigning moments to planes.
///
/// > normal: [f64; 3] - the unit normal the atoms were projected on
/// > planes: Vec<Plane> - the planes sorted along the normal
/// > signs: Vec<i8> - the sign of each plane in `planes`
/// > moments: Vec<f64> - the moment of every atom, zero if it wasn't selected
/// > rows: Vec<PlaneRow> - one row per selected atom, by plane then atom
pub struct MagneticOrder {
    pub normal: [f64; 3],
    pub planes: Vec<Plane>,
    pub signs: Vec<i8>,
    pub moments: Vec<f64>,
    pub rows: Vec<PlaneRow>,
}

impl MagneticOrder {
    /// Builds the moments and table rows from planes already sorted along
    /// `normal`. Nothing is built if the block size is invalid.
    pub fn build(atoms: &Atoms,
                 normal: [f64; 3],
                 planes: Vec<Plane>,
                 block_size: isize,
                 magnitude: f64)
                 -> Result<Self, InvalidBlockSizeError> {
        let signs = (0..planes.len()).map(|k| plane_sign(k, block_size))
                                     .collect::<Result<Vec<i8>, _>>()?;
        let mut moments = vec![0f64; atoms.len()];
        let mut rows = Vec::with_capacity(planes.iter()
                                                .map(|p| p.members.len())
                                                .sum());
        for (k, (plane, sign)) in planes.iter().zip(&signs).enumerate() {
            for atom in plane.members.iter() {
                moments[*atom] = *sign as f64 * magnitude;
                rows.push(PlaneRow { atom: atom + 1,
                                     symbol: atoms.symbols[*atom].clone(),
                                     plane: k,
                                     sign: *sign,
                                     fractional: atoms.fractional[*atom] });
            }
        }
        Ok(Self { normal,
                  planes,
                  signs,
                  moments,
                  rows })
    }

    /// the number of planes found
    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }
}

/// Finds the planes of the selected atoms perpendicular to `direction` and
/// assigns each an alternating moment.
///
/// Every step runs to completion before the next starts and any error is
/// returned before a moment is assigned.
pub fn assign_planes(atoms: &Atoms,
                     direction: [f64; 3],
                     selection: &Selection,
                     config: &Config)
                     -> Result<MagneticOrder> {
    config.validate().context("Invalid configuration")?;
    let normal = direction::resolve(direction,
                                    &atoms.lattice,
                                    config.direction_mode)?;
    debug!("Plane normal: [{:.6}, {:.6}, {:.6}]",
           normal[0], normal[1], normal[2]);
    let mask = selection.mask(&atoms.symbols)
                        .context("Failed to select the atoms of interest")?;
    let projections = planes::project(atoms, &mask, normal);
    info!("Selected {} of {} atoms.", projections.len(), atoms.len());
    let planes =
        planes::order(planes::cluster(&projections, config.tolerance));
    info!("Found {} planes (tol={}).", planes.len(), config.tolerance);
    Ok(MagneticOrder::build(atoms,
                            normal,
                            planes,
                            config.block_size,
                            config.magnitude)?)
}
