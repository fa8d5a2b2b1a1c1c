#![cfg(feature = "hdf5")]

use mp_berry::archive::{open_archive, ArchiveKind, Hdf5Archive, RecordArchive};
use mp_berry::prelude::*;
use ndarray::{Array2, Array3};

fn write_fixture(path: &std::path::Path, names: &[&str]) {
    let file = hdf5::File::create(path).unwrap();
    for name in names {
        let g = file.create_group(name).unwrap();
        g.new_dataset_builder()
            .with_data(&Array3::<f64>::from_elem((1, 4, 5), 0.5))
            .create("optical")
            .unwrap();
        g.new_dataset_builder()
            .with_data(&Array2::<f32>::from_elem((4, 5), 1.0))
            .create("thermal")
            .unwrap();
    }
}

#[test]
fn reads_groups_in_name_order() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("test.hdf5");
    write_fixture(&p, &["b", "a", "c"]);

    let mut ar = Hdf5Archive::open(&p).unwrap();
    assert_eq!(ar.names().unwrap(), ["a", "b", "c"]);

    let opt = ar.read("a", "optical").unwrap();
    assert_eq!(opt.shape(), &[1, 4, 5]);
    assert_eq!(opt[[0, 3, 4]], 0.5);

    assert!(matches!(
        ar.read("a", "thermal_raw"),
        Err(PrepError::MissingDomain { .. })
    ));
}

#[test]
fn full_run_from_hdf5() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_fixture(&input.path().join("test.hdf5"), &["1", "2"]);
    write_fixture(&input.path().join("training.hdf5"), &["3", "4", "5", "6", "7"]);

    let config = PrepConfig::with_defaults("/", input.path(), output.path()).unwrap();
    let summary = run(&config).unwrap();

    assert_eq!(summary.count(Domain::A, Split::Test), 2);
    assert_eq!(summary.count(Domain::B, Split::Train), 4);
    assert_eq!(summary.count(Domain::B, Split::Val), 1);
    assert!(output.path().join("multipoint/B/val/7.jpg").is_file());
}

#[test]
fn garbage_file_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("test.hdf5");
    std::fs::write(&p, b"not hdf5").unwrap();
    assert!(matches!(
        open_archive(ArchiveKind::Hdf5, &p),
        Err(PrepError::ArchiveFormat { .. })
    ));
}
