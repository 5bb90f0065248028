use crate::file_reader;
use crate::file_reader::ReadContentError;

#[test]
fn reads_utf8_file_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.json");
    std::fs::write(&path, "{\"data\": {}}").unwrap();

    assert_eq!(file_reader::read_content(&path).unwrap(), "{\"data\": {}}");
}

#[test]
fn missing_file_is_reported_as_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.json");

    assert_eq!(
        file_reader::read_content(&path),
        Err(ReadContentError::FileNotFound(path.to_owned())),
    );
}

#[test]
fn directory_is_not_a_file() {
    let dir = tempfile::tempdir().unwrap();

    let err = file_reader::read_content(dir.path()).unwrap_err();
    assert_eq!(err, ReadContentError::PathIsNotAFile(dir.path().to_path_buf()));
}

#[test]
fn invalid_utf8_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.json");
    std::fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

    let err = file_reader::read_content(&path).unwrap_err();
    assert!(matches!(
        err,
        ReadContentError::FileDecodeError { ref file_path, .. } if file_path == &path,
    ));
}
