#[cfg(test)]
mod tests {
    use magplanes::config::Config;
    use magplanes::direction::DirectionMode;
    use magplanes::errors::{SelectionIndexError, StructureParseError};
    use magplanes::io::{output, poscar};
    use magplanes::magnetism::assign_planes;
    use magplanes::selection::Selection;

    const NIO: &str = "tests/poscar/POSCAR_NiO";
    const CRI: &str = "tests/poscar/CONTCAR_CrI_cartesian";

    #[test]
    fn poscar_read_direct() {
        let atoms = match poscar::read(NIO) {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        };
        assert_eq!(atoms.len(), 8);
        assert_eq!(atoms.species(), vec!["Ni", "O"]);
        assert_eq!(atoms.symbols[3], "Ni");
        assert_eq!(atoms.symbols[4], "O");
        assert_eq!(atoms.positions[7], [2.085, 2.085, 2.085]);
    }

    #[test]
    fn poscar_read_cartesian() {
        let atoms = match poscar::read(CRI) {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        };
        assert_eq!(atoms.len(), 6);
        assert!((atoms.fractional[1][2] - 0.251).abs() < 1e-12);
        assert!((atoms.positions[1][0] - 1.5).abs() < 1e-9);
        assert!((atoms.positions[1][1] - 0.8660254038).abs() < 1e-9);
    }

    #[test]
    fn nio_001_layers() {
        let atoms = poscar::read(NIO).unwrap();
        let selection = Selection::from_tokens(&["Ni"]).unwrap();
        let config = Config { magnitude: 2., ..Config::default() };
        let order = assign_planes(&atoms, [0., 0., 1.], &selection, &config)
            .unwrap();
        assert_eq!(order.plane_count(), 2);
        assert_eq!(order.planes[0].members, vec![0, 1]);
        assert_eq!(order.planes[1].members, vec![2, 3]);
        assert_eq!(output::magmom_line(&order.moments),
                   "MAGMOM = +2  +2  -2  -2  +0  +0  +0  +0");
    }

    #[test]
    fn nio_111_layers() {
        let atoms = poscar::read(NIO).unwrap();
        let selection = Selection::from_tokens(&["Ni"]).unwrap();
        let order = assign_planes(&atoms,
                                  [1., 1., 1.],
                                  &selection,
                                  &Config::default()).unwrap();
        assert_eq!(order.plane_count(), 2);
        assert!((order.planes[1].reference - 4.17 / 3f64.sqrt()).abs() < 1e-9);
        assert_eq!(order.moments, vec![1., -1., -1., -1., 0., 0., 0., 0.]);
    }

    #[test]
    fn nio_all_atoms() {
        let atoms = poscar::read(NIO).unwrap();
        let order = assign_planes(&atoms,
                                  [0., 0., 1.],
                                  &Selection::All,
                                  &Config::default()).unwrap();
        assert_eq!(order.plane_count(), 2);
        assert_eq!(order.planes[0].members, vec![0, 1, 4, 5]);
        assert_eq!(order.planes[1].members, vec![2, 3, 6, 7]);
        let table = output::plane_table(&order.rows);
        assert_eq!(table.lines().count(), 2 + 8);
    }

    #[test]
    fn cri_indices() {
        let atoms = poscar::read(CRI).unwrap();
        let selection = Selection::from_tokens(&["1-4"]).unwrap();
        let order = assign_planes(&atoms,
                                  [0., 0., 1.],
                                  &selection,
                                  &Config::default()).unwrap();
        assert_eq!(order.plane_count(), 2);
        assert_eq!(order.moments, vec![1., 1., -1., -1., 0., 0.]);
    }

    #[test]
    fn cri_blocks() {
        let atoms = poscar::read(CRI).unwrap();
        let selection = Selection::from_tokens(&["Cr"]).unwrap();
        let config = Config { block_size: 2, ..Config::default() };
        let order = assign_planes(&atoms, [0., 0., 1.], &selection, &config)
            .unwrap();
        assert_eq!(order.moments, vec![1., 1., 1., 1., 0., 0.]);
    }

    #[test]
    fn cri_tight_tolerance() {
        // every Cr becomes its own plane, sorted 2.50 2.51 7.49 7.50
        let atoms = poscar::read(CRI).unwrap();
        let selection = Selection::from_tokens(&["Cr"]).unwrap();
        let config = Config { tolerance: 0.005, ..Config::default() };
        let order = assign_planes(&atoms, [0., 0., 1.], &selection, &config)
            .unwrap();
        assert_eq!(order.plane_count(), 4);
        assert_eq!(order.planes
                        .iter()
                        .map(|p| p.members[0])
                        .collect::<Vec<usize>>(),
                   vec![0, 1, 3, 2]);
        assert_eq!(order.moments, vec![1., -1., -1., 1., 0., 0.]);
    }

    #[test]
    fn cri_cartesian_direction() {
        let atoms = poscar::read(CRI).unwrap();
        let selection = Selection::from_tokens(&["Cr"]).unwrap();
        let config = Config { direction_mode: DirectionMode::Cartesian,
                              ..Config::default() };
        let order = assign_planes(&atoms, [0., 0., 0.2], &selection, &config)
            .unwrap();
        assert!((order.normal[2] - 1.).abs() < 1e-12);
        assert_eq!(order.moments, vec![1., 1., -1., -1., 0., 0.]);
    }

    #[test]
    fn cri_index_out_of_range() {
        let atoms = poscar::read(CRI).unwrap();
        let selection = Selection::from_tokens(&["2", "7"]).unwrap();
        let e = assign_planes(&atoms,
                              [0., 0., 1.],
                              &selection,
                              &Config::default()).err()
                                                 .unwrap();
        assert!(e.downcast_ref::<SelectionIndexError>().is_some());
    }

    #[test]
    fn poscar_read_missing() {
        let e = poscar::read("tests/poscar/POSCAR_missing").err().unwrap();
        assert!(e.downcast_ref::<StructureParseError>().is_none());
    }
}
