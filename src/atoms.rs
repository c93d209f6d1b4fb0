use crate::errors::StructureParseError;
use crate::utils;

/// struct for containing the information about the atoms
///
/// > lattice: Lattice - the lattice of the structure
/// > symbols: Vec<String> - the element symbol of each atom
/// > fractional: Vec<[f64; 3]> - the positions of the atoms in fractional coordinates
/// > positions: Vec<[f64; 3]> - the positions of the atoms in cartesian coordinates
///
/// Every vector is indexed by the 0-based atom number in file order.
pub struct Atoms {
    pub lattice: Lattice,
    pub symbols: Vec<String>,
    pub fractional: Vec<[f64; 3]>,
    pub positions: Vec<[f64; 3]>,
}

impl Atoms {
    /// initialises the structure, the fractional positions are kept as given
    /// and are not wrapped back into the cell
    pub fn new(lattice: Lattice,
               symbols: Vec<String>,
               fractional: Vec<[f64; 3]>)
               -> Self {
        let positions = fractional.iter()
                                  .map(|f| utils::dot(*f, lattice.to_cartesian))
                                  .collect::<Vec<[f64; 3]>>();
        Self { lattice,
               symbols,
               fractional,
               positions }
    }

    /// number of atoms in the structure
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// whether the structure contains no atoms
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// the distinct element symbols present, sorted
    pub fn species(&self) -> Vec<&str> {
        let mut species =
            self.symbols.iter().map(|s| s.as_str()).collect::<Vec<&str>>();
        species.sort_unstable();
        species.dedup();
        species
    }
}

/// Lattice - structure for containing information on the cell
///
/// > a: f64 - length of the a-vector
/// > b: f64 - length of the b-vector
/// > c: f64 - length of the c-vector
/// > to_fractional: [[f64; 3]; 3] - transformation matrix for converting to fractional
/// >                                coordinates
/// > to_cartesian: [[f64; 3]; 3] - transformation matrix for converting to cartesian
/// >                               coordinates
/// > volume: f64 - the volume of the cell
pub struct Lattice {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub to_fractional: [[f64; 3]; 3],
    pub to_cartesian: [[f64; 3]; 3],
    pub volume: f64,
}

impl Lattice {
    /// Initialises the structure. Builds all the fields of the lattice structure
    /// from a 2d array in the form:
    ///
    /// > [
    /// >     [ax, ay, az],
    /// >     [bx, by, bz],
    /// >     [cx, cy, cz],
    /// >  ]
    pub fn new(lattice: [[f64; 3]; 3]) -> Result<Self, StructureParseError> {
        let to_fractional = utils::invert_lattice(&lattice)
            .ok_or(StructureParseError::DegenerateLattice)?;
        Ok(Self { a: utils::norm(lattice[0]),
                  b: utils::norm(lattice[1]),
                  c: utils::norm(lattice[2]),
                  to_fractional,
                  to_cartesian: lattice,
                  volume: utils::determinant(&lattice).abs() })
    }

    /// converts a fractional position into cartesian coordinates
    pub fn cartesian(&self, fractional: [f64; 3]) -> [f64; 3] {
        utils::dot(fractional, self.to_cartesian)
    }

    /// converts a cartesian position into fractional coordinates
    pub fn fractional(&self, cartesian: [f64; 3]) -> [f64; 3] {
        utils::dot(cartesian, self.to_fractional)
    }
}
