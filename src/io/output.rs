use crate::config::Config;
use crate::magnetism::{MagneticOrder, PlaneRow};
use prettytable::{format, row, Row, Table};
use std::fs::File;
use std::io::Write;

/// Formats the moments as an INCAR MAGMOM line, every value is signed.
///
/// > MAGMOM = +1  -1  +0  +0
pub fn magmom_line(moments: &[f64]) -> String {
    let values = moments.iter()
                        .map(|m| format!("{:+}", m))
                        .collect::<Vec<String>>();
    format!("MAGMOM = {}", values.join("  "))
}

/// Creates a format for the output table: a title, a dashed rule and no
/// borders.
pub fn table_format() -> format::TableFormat {
    let line_separator = format::LineSeparator::new('-', '-', '-', '-');
    format::FormatBuilder::new().column_separator(' ')
                                .separators(&[format::LinePosition::Title],
                                            line_separator)
                                .padding(0, 1)
                                .build()
}

/// Header of the plane assignment table.
pub fn plane_titles() -> Row {
    row!["atom_index", "element", "plane_ID", "sign", "frac_coords"]
}

/// Builds the plane assignment table, one row per selected atom.
pub fn plane_table(rows: &[PlaneRow]) -> String {
    let mut table = Table::new();
    table.set_format(table_format());
    table.set_titles(plane_titles());
    for r in rows.iter() {
        let frac = r.fractional
                    .iter()
                    .map(|x| format!("{:.3}", x))
                    .collect::<Vec<String>>()
                    .join(" ");
        table.add_row(row![r.atom.to_string(),
                           r.symbol,
                           r.plane.to_string(),
                           format!("{:+}", r.sign),
                           frac]);
    }
    table.to_string()
}

/// One line description of the assignment.
pub fn summary(order: &MagneticOrder, config: &Config) -> String {
    format!("{} planes found (tol={} Å). Sign repeats every {} plane(s).  M = {:?}",
            order.plane_count(),
            config.tolerance,
            config.block_size,
            config.magnitude)
}

/// Write the file
///
/// * `contents`: The contents of the file.
/// * `filename`: Where to write it.
pub fn write(contents: String, filename: String) -> std::io::Result<()> {
    let mut file = File::create(filename)?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}
