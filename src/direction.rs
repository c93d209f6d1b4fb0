use crate::atoms::Lattice;
use crate::errors::InvalidDirectionError;
use crate::utils;

/// How the supplied direction vector should be read.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DirectionMode {
    /// Fractional if every component has magnitude <= 1, otherwise cartesian.
    Auto,
    /// Always in units of the lattice vectors.
    Fractional,
    /// Always cartesian.
    Cartesian,
}

impl Default for DirectionMode {
    fn default() -> Self {
        Self::Auto
    }
}

impl DirectionMode {
    /// Whether `direction` will be treated as fractional under this mode.
    ///
    /// In `Auto` a short cartesian vector such as [0.5, 0.5, 0] is read as
    /// fractional, pass `Cartesian` to avoid this.
    pub fn is_fractional(&self, direction: [f64; 3]) -> bool {
        match self {
            Self::Auto => direction.iter().all(|x| x.abs() <= 1.),
            Self::Fractional => true,
            Self::Cartesian => false,
        }
    }
}

/// Resolves a direction into a unit cartesian normal, n̂.
///
/// Fractional directions are converted with the row-vector convention,
/// cart = frac . lattice.
pub fn resolve(direction: [f64; 3],
               lattice: &Lattice,
               mode: DirectionMode)
               -> Result<[f64; 3], InvalidDirectionError> {
    let cartesian = if mode.is_fractional(direction) {
        lattice.cartesian(direction)
    } else {
        direction
    };
    let length = utils::norm(cartesian);
    if length == 0. || !length.is_finite() {
        return Err(InvalidDirectionError { direction, cartesian });
    }
    Ok([cartesian[0] / length,
        cartesian[1] / length,
        cartesian[2] / length])
}
