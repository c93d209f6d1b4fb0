use crate::direction::DirectionMode;
use crate::errors::{ConfigError, InvalidBlockSizeError};
use anyhow::Result;

/// Default coplanarity tolerance in Angstrom.
pub const DEFAULT_TOLERANCE: f64 = 0.02;
/// Default number of planes sharing a sign.
pub const DEFAULT_BLOCK_SIZE: isize = 1;
/// Default magnitude of the magnetic moment.
pub const DEFAULT_MAGNITUDE: f64 = 1.;

/// The parameters of a plane assignment.
///
/// > tolerance: f64 - an atom joins a plane if its projection is strictly closer
/// >                  than this to the plane's anchor (Angstrom, default 0.02)
/// > block_size: isize - consecutive planes sharing a sign, L (default 1)
/// > magnitude: f64 - the size of each moment, M (default 1)
/// > direction_mode: DirectionMode - how to read the direction (default Auto)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub tolerance: f64,
    pub block_size: isize,
    pub magnitude: f64,
    pub direction_mode: DirectionMode,
}

impl Default for Config {
    fn default() -> Self {
        Self { tolerance: DEFAULT_TOLERANCE,
               block_size: DEFAULT_BLOCK_SIZE,
               magnitude: DEFAULT_MAGNITUDE,
               direction_mode: DirectionMode::default() }
    }
}

impl Config {
    /// Checks the parameters before any calculation is done. The magnitude
    /// is used as given.
    pub fn validate(&self) -> Result<()> {
        if self.block_size <= 0 {
            return Err(InvalidBlockSizeError { block_size: self.block_size }.into());
        }
        if !self.tolerance.is_finite() || self.tolerance < 0. {
            return Err(ConfigError::Tolerance(self.tolerance).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default() {
        let config = Config::default();
        assert_eq!(config.tolerance, 0.02);
        assert_eq!(config.block_size, 1);
        assert_eq!(config.magnitude, 1.);
        assert_eq!(config.direction_mode, DirectionMode::Auto);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_block_size_zero() {
        let config = Config { block_size: 0, ..Config::default() };
        let e = config.validate().unwrap_err();
        assert!(e.downcast_ref::<InvalidBlockSizeError>().is_some());
    }

    #[test]
    fn config_block_size_negative() {
        let config = Config { block_size: -2, ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_tolerance_negative() {
        let config = Config { tolerance: -0.1, ..Config::default() };
        let e = config.validate().unwrap_err();
        assert!(e.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn config_tolerance_not_finite() {
        for tolerance in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN].iter() {
            let config = Config { tolerance: *tolerance, ..Config::default() };
            let e = config.validate().unwrap_err();
            assert!(e.downcast_ref::<ConfigError>().is_some());
        }
    }

    #[test]
    fn config_tolerance_zero() {
        let config = Config { tolerance: 0., ..Config::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_any_magnitude() {
        let config = Config { magnitude: -1e6, ..Config::default() };
        assert!(config.validate().is_ok());
    }
}
