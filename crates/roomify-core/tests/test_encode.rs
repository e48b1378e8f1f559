mod common;

use std::io::Write;

use roomify_core::upload::{encode, FileSource, UploadTarget};

#[tokio::test]
async fn test_encode_file_from_disk() {
    let bytes = common::png_bytes(4, 3);
    let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
    file.write_all(&bytes).unwrap();
    file.flush().unwrap();

    let target = UploadTarget::from_path(file.path()).unwrap();
    assert_eq!(target.size, bytes.len() as u64);
    assert_eq!(target.declared_type, "image/png");

    let encoded = encode(&target).await.unwrap();
    assert!(encoded.as_str().starts_with("data:image/png;base64,"));
    assert_eq!(encoded.media_type(), "image/png");
    assert_eq!(encoded.decode_bytes().unwrap(), bytes);
}

#[tokio::test]
async fn test_encode_in_memory_bytes() {
    let target = UploadTarget::from_bytes("plan.jpg", vec![0xFF, 0xD8, 0xFF, 0xE0], None);

    let encoded = encode(&target).await.unwrap();
    assert_eq!(encoded.as_str(), "data:image/jpeg;base64,/9j/4A==");
}

#[tokio::test]
async fn test_encode_without_declared_type_uses_octet_stream() {
    let target = UploadTarget::from_bytes("blob", vec![1, 2, 3], None);

    let encoded = encode(&target).await.unwrap();
    assert!(encoded
        .as_str()
        .starts_with("data:application/octet-stream;base64,"));
}

#[tokio::test]
async fn test_encode_missing_file_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let target = UploadTarget {
        source: FileSource::Path(dir.path().join("missing.png")),
        name: "missing.png".into(),
        size: 10,
        declared_type: "image/png".into(),
    };

    let err = encode(&target).await.unwrap_err();
    assert_eq!(err.name, "missing.png");
    assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
    assert!(err.to_string().starts_with("Failed to read missing.png"));
}

#[test]
fn test_from_path_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(UploadTarget::from_path(&dir.path().join("nope.png")).is_err());
}
