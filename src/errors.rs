use std::fmt::{Debug, Display};

/// An error for a direction vector that resolves to zero length.
pub struct InvalidDirectionError {
    /// The direction as supplied, before resolution.
    pub direction: [f64; 3],
    /// The direction in cartesian coordinates.
    pub cartesian: [f64; 3],
}

impl Display for InvalidDirectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Direction ({} {} {}) resolves to the cartesian vector ({} {} {}) which has no usable length.",
            self.direction[0],
            self.direction[1],
            self.direction[2],
            self.cartesian[0],
            self.cartesian[1],
            self.cartesian[2]
        )
    }
}

impl Debug for InvalidDirectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::error::Error for InvalidDirectionError {}

/// An error for selecting an atom that isn't in the structure.
pub enum SelectionIndexError {
    /// The 1-based index is outside of [1, natoms].
    /// OutOfRange(index, natoms)
    OutOfRange(usize, usize),
    /// A range with its start after its end.
    /// Reversed(start, end)
    Reversed(usize, usize),
}

impl Display for SelectionIndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(index, natoms) => write!(
                f,
                "Atom index {} is out of range, the structure has atoms 1 to {}.",
                index, natoms
            ),
            Self::Reversed(start, end) => write!(
                f,
                "The atom range \"{}-{}\" ends before it starts.",
                start, end
            ),
        }
    }
}

impl Debug for SelectionIndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::error::Error for SelectionIndexError {}

/// An error for a block size that cannot group planes.
pub struct InvalidBlockSizeError {
    pub block_size: isize,
}

impl Display for InvalidBlockSizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Planes per block ({}) must be a positive integer.",
            self.block_size
        )
    }
}

impl Debug for InvalidBlockSizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::error::Error for InvalidBlockSizeError {}

/// Error for values in the configuration that the calculation can't use.
pub enum ConfigError {
    /// The coplanarity tolerance is negative or not a number.
    Tolerance(f64),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tolerance(tol) => write!(
                f,
                "Coplanarity tolerance ({}) must be a non-negative number.",
                tol
            ),
        }
    }
}

impl Debug for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::error::Error for ConfigError {}

/// Error for reading a structure file.
pub enum StructureParseError {
    /// The file ended early.
    /// MissingLine(what was expected)
    MissingLine(&'static str),
    /// A value couldn't be parsed.
    /// Unparsable(line, value, what was expected)
    Unparsable(usize, String, &'static str),
    /// A line had the wrong number of values.
    /// WrongLength(line, expected, found)
    WrongLength(usize, usize, usize),
    /// The species line is missing (VASP 4 layout).
    MissingSpecies,
    /// The number of species and counts differ.
    /// CountMismatch(species, counts)
    CountMismatch(usize, usize),
    /// The lattice vectors don't span 3D space.
    DegenerateLattice,
}

impl Display for StructureParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingLine(what) => {
                write!(f, "Unexpected end of file while reading the {}.", what)
            }
            Self::Unparsable(line, value, what) => write!(
                f,
                "Line {}: the value \"{}\" is unparsable as a {}.",
                line, value, what
            ),
            Self::WrongLength(line, expected, found) => write!(
                f,
                "Line {}: expected {} values but found {}.",
                line, expected, found
            ),
            Self::MissingSpecies => write!(
                f,
                "No element symbols found, the species line is required to select atoms."
            ),
            Self::CountMismatch(species, counts) => write!(
                f,
                "Found {} element symbols but {} atom counts.",
                species, counts
            ),
            Self::DegenerateLattice => {
                write!(f, "Lattice doesn't span 3D space.")
            }
        }
    }
}

impl Debug for StructureParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::error::Error for StructureParseError {}
