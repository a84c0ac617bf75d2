//! # Binary Loading Tests

use std::io::Write;

use siasim_core::common::SimError;
use siasim_core::config::Config;
use siasim_core::sim::loader;
use siasim_core::{Simulator, asm};
use tempfile::NamedTempFile;

fn create_temp_binary(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_bytes_verbatim() {
    let image = asm::assemble("move 5 r1\nadd r1 r1 r2\nhalt\n").bytes;
    let file = create_temp_binary(&image);
    assert_eq!(loader::load_binary(file.path()).unwrap(), image);
}

#[test]
fn empty_file_is_an_empty_image() {
    let file = create_temp_binary(&[]);
    assert!(loader::load_binary(file.path()).unwrap().is_empty());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.bin");
    let err = loader::load_binary(&path).unwrap_err();
    assert!(matches!(err, SimError::Io { path: ref p, .. } if *p == path));
    assert!(err.to_string().contains("absent.bin"));
}

#[test]
fn loaded_image_runs() {
    let image = asm::assemble("move 4 r1\nmultiply r1 r1 r2\nhalt\n").bytes;
    let file = create_temp_binary(&image);

    let mut sim = Simulator::new(&Config::default());
    sim.load_program(&loader::load_binary(file.path()).unwrap())
        .unwrap();
    let _ = sim.run().unwrap();
    assert_eq!(sim.cpu.regs.read(2), 16);
}

#[test]
fn oversized_image_is_rejected() {
    let mut sim = Simulator::new(&Config::default());
    let err = sim.load_program(&[0; 1001]).unwrap_err();
    assert!(matches!(
        err,
        SimError::ProgramTooLarge {
            len: 1001,
            capacity: 1000
        }
    ));
}
