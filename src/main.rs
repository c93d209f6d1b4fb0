use anyhow::{Context, Result};
use env_logger::Env;
use log::info;
use magplanes::arguments::{Args, ClapApp};
use magplanes::io::{output, poscar};
use magplanes::magnetism::assign_planes;
use magplanes::selection::Selection;

fn main() -> Result<()> {
    // argument parsing
    let app = ClapApp::App;
    let args = Args::new(app.get().get_matches())?;
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .init();
    info!("Coplanar Magnetic Planes ({})", env!("CARGO_PKG_VERSION"));
    // read the structure
    let atoms = poscar::read(&args.file)?;
    info!("Read {} atoms from {}.", atoms.len(), args.file);
    info!("Elements present: {}", atoms.species().join(" "));
    let selection = Selection::from_tokens(&args.selection[..])
        .context("Failed to parse the atom selection")?;
    // find the planes and assign the moments
    let order =
        assign_planes(&atoms, args.direction, &selection, &args.config)?;
    // both outputs are built before either file is written
    let magmom = format!("{}\n", output::magmom_line(&order.moments));
    let table = output::plane_table(&order.rows);
    if !args.quiet {
        println!("\n{}", table);
    }
    output::write(magmom, args.magmom_file.clone())
        .with_context(|| format!("Failed to write {}", args.magmom_file))?;
    info!("Created {} with {} entries.", args.magmom_file, atoms.len());
    output::write(table, args.table_file.clone())
        .with_context(|| format!("Failed to write {}", args.table_file))?;
    info!("Wrote detailed plane assignment to {}", args.table_file);
    println!("{}", output::summary(&order, &args.config));
    Ok(())
}
