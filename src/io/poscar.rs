use crate::atoms::{Atoms, Lattice};
use crate::errors::StructureParseError;
use crate::utils;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// The coordinate system.
enum Coord {
    /// Fractional coordinates.
    Fractional,
    /// Cartesian coordinates.
    Cartesian,
}

/// Walks the lines of the file keeping track of the line number.
struct Lines<'a> {
    lines: std::str::Lines<'a>,
    number: usize,
}

impl<'a> Lines<'a> {
    fn next(&mut self,
            what: &'static str)
            -> Result<(usize, &'a str), StructureParseError> {
        self.number += 1;
        self.lines
            .next()
            .map(|line| (self.number, line))
            .ok_or(StructureParseError::MissingLine(what))
    }
}

fn parse_floats(number: usize,
                line: &str,
                what: &'static str)
                -> Result<Vec<f64>, StructureParseError> {
    line.split_whitespace()
        .map(|x| {
            x.parse::<f64>().map_err(|_| {
                StructureParseError::Unparsable(number, x.to_string(), what)
            })
        })
        .collect()
}

/// Parses the first three values of a line, anything after is ignored.
fn parse_vector(number: usize,
                line: &str,
                what: &'static str)
                -> Result<[f64; 3], StructureParseError> {
    let mut vector = [0f64; 3];
    let mut tokens = line.split_whitespace();
    for (i, v) in vector.iter_mut().enumerate() {
        let token = tokens.next()
                          .ok_or(StructureParseError::WrongLength(number, 3, i))?;
        *v = token.parse::<f64>().map_err(|_| {
                 StructureParseError::Unparsable(number,
                                                 token.to_string(),
                                                 what)
             })?;
    }
    Ok(vector)
}

/// Parse the text of a VASP 5 POSCAR or CONTCAR.
///
/// The scale can be a single value, three values (one per lattice vector
/// component) or a negative value which is the volume of the cell. The
/// species line is required. Cartesian positions are converted with the
/// scaled lattice.
pub fn parse(text: &str) -> Result<Atoms, StructureParseError> {
    let mut lines = Lines { lines: text.lines(),
                            number: 0 };
    // comment
    let _ = lines.next("comment line")?;
    let (number, line) = lines.next("scaling factor")?;
    let scale = parse_floats(number, line, "scaling factor")?;
    let mut lattice = [[0f64; 3]; 3];
    for vector in lattice.iter_mut() {
        let (number, line) = lines.next("lattice vectors")?;
        *vector = parse_vector(number, line, "lattice vector")?;
    }
    let scale: [f64; 3] = match scale.as_slice() {
        [s] if *s < 0. => {
            let volume = utils::determinant(&lattice).abs();
            [(-s / volume).cbrt(); 3]
        }
        [s] => [*s; 3],
        [x, y, z] => [*x, *y, *z],
        _ => {
            return Err(StructureParseError::WrongLength(number,
                                                        3,
                                                        scale.len()))
        }
    };
    for vector in lattice.iter_mut() {
        for (v, s) in vector.iter_mut().zip(&scale) {
            *v *= s;
        }
    }
    let lattice = Lattice::new(lattice)?;
    // the species line
    let (_, line) = lines.next("element symbols")?;
    let species = line.split_whitespace().collect::<Vec<&str>>();
    if species.iter().all(|s| s.parse::<usize>().is_ok()) {
        return Err(StructureParseError::MissingSpecies);
    }
    let (number, line) = lines.next("atom counts")?;
    let counts = line.split_whitespace()
                     .map(|x| {
                         x.parse::<usize>().map_err(|_| {
                             StructureParseError::Unparsable(number,
                                                             x.to_string(),
                                                             "atom count")
                         })
                     })
                     .collect::<Result<Vec<usize>, StructureParseError>>()?;
    if counts.len() != species.len() {
        return Err(StructureParseError::CountMismatch(species.len(),
                                                      counts.len()));
    }
    let symbols = species.iter()
                         .zip(&counts)
                         .flat_map(|(s, c)| std::iter::repeat(s.to_string()).take(*c))
                         .collect::<Vec<String>>();
    let (_, mut line) = lines.next("coordinate system")?;
    if line.trim_start().to_lowercase().starts_with('s') {
        line = lines.next("coordinate system")?.1;
    }
    let coord = match line.trim_start().chars().next() {
        Some('c') | Some('C') | Some('k') | Some('K') => Coord::Cartesian,
        _ => Coord::Fractional,
    };
    let mut fractional = Vec::with_capacity(symbols.len());
    for _ in 0..symbols.len() {
        let (number, line) = lines.next("atomic positions")?;
        let p = parse_vector(number, line, "atomic position")?;
        fractional.push(match coord {
                            Coord::Fractional => p,
                            Coord::Cartesian => lattice.fractional(p),
                        });
    }
    Ok(Atoms::new(lattice, symbols, fractional))
}

/// Read a POSCAR or CONTCAR from disk.
pub fn read(path: impl AsRef<Path>) -> Result<Atoms> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let atoms = parse(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(atoms)
}
