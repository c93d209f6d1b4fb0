use crate::config::{Config, DEFAULT_BLOCK_SIZE, DEFAULT_MAGNITUDE,
                    DEFAULT_TOLERANCE};
use crate::direction::DirectionMode;
use crate::io;
use anyhow::{bail, Context, Result};
use clap::{crate_authors, Arg, ArgMatches, Command};

/// Create a container for dealing with clap and being able to test arg parsing
pub enum ClapApp {
    App,
}

impl ClapApp {
    /// Create and return the clap::Command
    pub fn get(&self) -> Command<'static> {
        Command::new("Coplanar Magnetic Planes")
            .author(crate_authors!())
            .version(env!("CARGO_PKG_VERSION"))
            .allow_negative_numbers(true)
            .allow_hyphen_values(true)
            .arg(Arg::new("file")
                .required(true)
                .index(1)
                .help("The POSCAR or CONTCAR to read."))
            .arg(Arg::new("direction")
                .required(true)
                .index(2)
                .multiple_values(true)
                .max_values(3)
                .help("The direction the planes are stacked along.")
                .long_help(
"The normal of the planes, either as three numbers (0 0 1) or a single quoted
string (\"0 0 1\"). When every component has magnitude <= 1 the direction is
in units of the lattice vectors, otherwise it is cartesian. This can be forced
with --direction-mode."))
            .arg(Arg::new("select")
                .short('s')
                .long("select")
                .takes_value(true)
                .multiple_values(true)
                .help("Atoms of interest, as symbols or 1-based indices.")
                .long_help(
"The atoms to assign moments to. Either element symbols (-s Fe Ni) or atom
numbers counting from 1 (-s 1 2 5-8). Unselected atoms are given a zero
moment. By default every atom is selected."))
            .arg(Arg::new("tolerance")
                .short('t')
                .long("tol")
                .takes_value(true)
                .default_value("0.02")
                .help("Coplanarity tolerance in Angstrom.")
                .long_help(
"An atom joins a plane if its distance along the normal from the first atom
of that plane is strictly less than the tolerance. Atoms of one plane can
therefore be up to twice the tolerance apart."))
            .arg(Arg::new("layers")
                .short('L')
                .long("layers")
                .takes_value(true)
                .default_value("1")
                .help("Planes per ferromagnetic block.")
                .long_help(
"The number of consecutive planes sharing a sign before the sign flips. A
value of 1 gives +-+-, a value of 2 gives ++--."))
            .arg(Arg::new("magnitude")
                .short('m')
                .long("magnitude")
                .takes_value(true)
                .default_value("1")
                .help("Magnitude of the magnetic moment."))
            .arg(Arg::new("direction mode")
                .short('d')
                .long("direction-mode")
                .takes_value(true)
                .possible_values(["auto", "fractional", "cartesian"])
                .default_value("auto")
                .help("How to read the direction.")
                .long_help(
"Use \"fractional\" or \"cartesian\" to fix how the direction is read. The
default, \"auto\", reads it as fractional when every component has magnitude
<= 1, which misreads short cartesian vectors."))
            .arg(Arg::new("magmom file")
                .short('o')
                .long("magmom")
                .takes_value(true)
                .default_value(io::MAGMOM_FILE)
                .help("File to write the MAGMOM line to."))
            .arg(Arg::new("table file")
                .long("table")
                .takes_value(true)
                .default_value(io::TABLE_FILE)
                .help("File to write the plane assignment table to."))
            .arg(Arg::new("quiet")
                .short('q')
                .long("quiet")
                .takes_value(false)
                .help("Don't print the plane assignment table."))
            .arg(Arg::new("verbose")
                .short('v')
                .long("verbose")
                .takes_value(false)
                .help("Print debug information."))
    }
}

/// Parse a value that clap guarantees is present through a default.
fn parse_default<T: std::str::FromStr>(arguments: &ArgMatches,
                                       name: &str,
                                       default: T)
                                       -> Result<T>
    where T::Err: std::error::Error + Send + Sync + 'static
{
    match arguments.value_of(name) {
        Some(s) => s.parse::<T>().with_context(|| {
                                     format!("Couldn't parse {} from \"{}\"",
                                             name, s)
                                 }),
        None => Ok(default),
    }
}

/// Holds the arguments passed to the program from the command-line
pub struct Args {
    pub file: String,
    pub direction: [f64; 3],
    pub selection: Vec<String>,
    pub config: Config,
    pub magmom_file: String,
    pub table_file: String,
    pub quiet: bool,
    pub verbose: bool,
}

impl Args {
    /// Initialises the structure from the command-line arguments.
    pub fn new(arguments: ArgMatches) -> Result<Self> {
        let file = match arguments.value_of("file") {
            Some(f) => String::from(f),
            None => String::new(),
        };
        let direction = match arguments.values_of("direction") {
            Some(values) => values.flat_map(|v| v.split_whitespace())
                                  .map(|x| {
                                      x.parse::<f64>().with_context(|| {
                                          format!("Couldn't parse direction component \"{}\"", x)
                                      })
                                  })
                                  .collect::<Result<Vec<f64>>>()?,
            None => Vec::with_capacity(0),
        };
        if direction.len() != 3 {
            bail!("The direction needs 3 components, {} were supplied.",
                  direction.len())
        }
        let direction = [direction[0], direction[1], direction[2]];
        let selection = match arguments.values_of("select") {
            Some(x) => x.flat_map(|s| s.split_whitespace())
                        .map(String::from)
                        .collect(),
            None => Vec::with_capacity(0),
        };
        let direction_mode = match arguments.value_of("direction mode") {
            Some("fractional") => DirectionMode::Fractional,
            Some("cartesian") => DirectionMode::Cartesian,
            _ => DirectionMode::Auto,
        };
        let config = Config { tolerance: parse_default(&arguments,
                                                       "tolerance",
                                                       DEFAULT_TOLERANCE)?,
                              block_size: parse_default(&arguments,
                                                        "layers",
                                                        DEFAULT_BLOCK_SIZE)?,
                              magnitude: parse_default(&arguments,
                                                       "magnitude",
                                                       DEFAULT_MAGNITUDE)?,
                              direction_mode };
        let magmom_file = match arguments.value_of("magmom file") {
            Some(f) => String::from(f),
            None => String::from(io::MAGMOM_FILE),
        };
        let table_file = match arguments.value_of("table file") {
            Some(f) => String::from(f),
            None => String::from(io::TABLE_FILE),
        };
        Ok(Self { file,
                  direction,
                  selection,
                  config,
                  magmom_file,
                  table_file,
                  quiet: arguments.is_present("quiet"),
                  verbose: arguments.is_present("verbose") })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: Vec<&str>) -> Result<Args> {
        let app = ClapApp::App.get();
        Args::new(app.try_get_matches_from(v)?)
    }

    #[test]
    fn clapapp_get() {
        let app = ClapApp::App.get();
        assert_eq!(app.get_name(), "Coplanar Magnetic Planes")
    }

    #[test]
    fn argument_file() {
        let args = args(vec!["magplanes", "POSCAR", "0", "0", "1"]).unwrap();
        assert_eq!(args.file, String::from("POSCAR"));
        assert_eq!(args.direction, [0., 0., 1.]);
    }

    #[test]
    fn argument_no_file() {
        assert!(args(vec!["magplanes"]).is_err());
    }

    #[test]
    fn argument_direction_string() {
        let args = args(vec!["magplanes", "POSCAR", "1 1 0"]).unwrap();
        assert_eq!(args.direction, [1., 1., 0.]);
    }

    #[test]
    fn argument_direction_negative() {
        let args = args(vec!["magplanes", "POSCAR", "-1", "0", "2.5"]).unwrap();
        assert_eq!(args.direction, [-1., 0., 2.5]);
    }

    #[test]
    fn argument_direction_string_negative() {
        let args = args(vec!["magplanes", "POSCAR", "-1 1 0"]).unwrap();
        assert_eq!(args.direction, [-1., 1., 0.]);
    }

    #[test]
    fn argument_direction_string_negative_then_flags() {
        let args = args(vec!["magplanes", "POSCAR", "-1 1 0", "-L", "2",
                             "--tol", "0.05", "-s", "Fe"]).unwrap();
        assert_eq!(args.direction, [-1., 1., 0.]);
        assert_eq!(args.config.block_size, 2);
        assert_eq!(args.config.tolerance, 0.05);
        assert_eq!(args.selection, vec![String::from("Fe")]);
    }

    #[test]
    fn argument_direction_too_short() {
        assert!(args(vec!["magplanes", "POSCAR", "1", "0"]).is_err());
    }

    #[test]
    fn argument_direction_not_float() {
        assert!(args(vec!["magplanes", "POSCAR", "1", "x", "0"]).is_err());
    }

    #[test]
    fn argument_defaults() {
        let args = args(vec!["magplanes", "POSCAR", "0 0 1"]).unwrap();
        assert_eq!(args.config, Config::default());
        assert!(args.selection.is_empty());
        assert_eq!(args.magmom_file, "MAGMOM");
        assert_eq!(args.table_file, "coplanar_planes.txt");
        assert!(!args.quiet);
        assert!(!args.verbose);
    }

    #[test]
    fn argument_select_symbols() {
        let args = args(vec!["magplanes", "POSCAR", "0 0 1", "-s", "Fe", "Ni"])
            .unwrap();
        assert_eq!(args.selection, vec!["Fe", "Ni"]);
    }

    #[test]
    fn argument_select_string() {
        let args = args(vec!["magplanes", "POSCAR", "0 0 1", "--select", "1 2 5-8"])
            .unwrap();
        assert_eq!(args.selection, vec!["1", "2", "5-8"]);
    }

    #[test]
    fn argument_parameters() {
        let args = args(vec!["magplanes", "POSCAR", "0 0 1", "-t", "0.05",
                             "-L", "2", "--magnitude", "3.5"]).unwrap();
        assert_eq!(args.config.tolerance, 0.05);
        assert_eq!(args.config.block_size, 2);
        assert_eq!(args.config.magnitude, 3.5);
    }

    #[test]
    fn argument_layers_zero() {
        let args = args(vec!["magplanes", "POSCAR", "0 0 1", "-L", "0"]).unwrap();
        assert_eq!(args.config.block_size, 0);
        assert!(args.config.validate().is_err());
    }

    #[test]
    fn argument_layers_not_int() {
        assert!(args(vec!["magplanes", "POSCAR", "0 0 1", "-L", "1.5"]).is_err());
    }

    #[test]
    fn argument_tolerance_not_float() {
        assert!(args(vec!["magplanes", "POSCAR", "0 0 1", "--tol", "0.0.1"]).is_err());
    }

    #[test]
    fn argument_direction_mode() {
        let args = args(vec!["magplanes", "POSCAR", "0 0 1", "-d", "cartesian"])
            .unwrap();
        assert_eq!(args.config.direction_mode, DirectionMode::Cartesian);
    }

    #[test]
    fn argument_direction_mode_not_mode() {
        assert!(args(vec!["magplanes", "POSCAR", "0 0 1", "-d", "reduced"]).is_err());
    }

    #[test]
    fn argument_files() {
        let args = args(vec!["magplanes", "POSCAR", "0 0 1", "-o", "INCAR_MAGMOM",
                             "--table", "planes.dat", "-q", "-v"]).unwrap();
        assert_eq!(args.magmom_file, "INCAR_MAGMOM");
        assert_eq!(args.table_file, "planes.dat");
        assert!(args.quiet);
        assert!(args.verbose);
    }
}
