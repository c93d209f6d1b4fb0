//! Finds the planes of atoms stacked along a direction in a crystal structure
//! and assigns them alternating magnetic moments, producing the MAGMOM line
//! for an antiferromagnetic VASP calculation.
//!
//! ## Installing the binary
//! ### From Source
//! ```sh
//! $ cargo build --verbose --release
//! ```
//! which will create the ./target/release/magplanes executable.
//!
//! ## Usage
//! The program takes a POSCAR (or CONTCAR), a direction and optionally the
//! atoms of interest. Every selected atom is projected onto the direction and
//! atoms at the same height, within a tolerance, make a plane. The planes are
//! sorted along the direction and given a moment of +M or -M, flipping every
//! L planes.
//! ```sh
//! $ magplanes POSCAR 0 0 1 -s Fe -L 2 -m 4
//! ```
//! The direction is in units of the lattice vectors when every component has
//! magnitude <= 1 and cartesian otherwise, use --direction-mode to choose.
//! For a detailed list of usage options run
//! ```sh
//! $ magplanes --help
//! ```
//!
//! ## Planes
//! An atom joins the first plane, in the order planes were found, whose
//! anchor is strictly closer than the tolerance. The anchor of a plane is the
//! first atom assigned to it and never moves, so atoms in one plane may be up
//! to twice the tolerance apart, and the planes found depend on the order of
//! the atoms in the file.
//!
//! ## Output
//! The program writes two files, MAGMOM & coplanar_planes.txt. MAGMOM holds the
//! line to copy into the INCAR, with a moment for every atom in the file
//! (zero for unselected atoms). coplanar_planes.txt lists each selected atom
//! with its element, plane and sign.
//! ## License
//! MIT

/// For parsing command-line arguments.
pub mod arguments;
/// Contains [Atoms](atoms::Atoms) for storing the structure and
/// [Lattice](atoms::Lattice) for converting between coordinate systems.
pub mod atoms;
/// The [Config](config::Config) of a plane assignment and its defaults.
pub mod config;
/// Resolves the user's direction into a unit cartesian normal.
pub mod direction;
/// Provides custom errors types.
pub mod errors;
/// Reading of POSCAR files and formatting and writing of the results.
pub mod io;
/// Assigns signed moments to ordered planes, see
/// [assign_planes](magnetism::assign_planes).
pub mod magnetism;
/// Projection of atoms onto the normal and the grouping of them into planes.
pub mod planes;
/// Turns the user's selection into a mask over the atoms.
pub mod selection;
/// Misc functions for vector and matrix manipulation.
pub mod utils;
