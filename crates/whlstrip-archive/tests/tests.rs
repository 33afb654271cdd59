use std::fs;
use std::io::{Cursor, Write};

use whlstrip_archive::{Error, Scratch, extract_wheel, repack_dir};
use zip::write::SimpleFileOptions;

fn build_wheel(members: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in members {
        writer
            .start_file(name.to_string(), SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

fn member_names(data: &[u8]) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data.to_vec())).unwrap();
    let mut names = Vec::new();
    for i in 0..archive.len() {
        names.push(archive.by_index(i).unwrap().name().to_string());
    }
    names.sort();
    names
}

#[test]
fn extract_reports_members() {
    let data = build_wheel(&[
        ("pkg/lib.so", &[0u8; 64]),
        ("pkg/readme.txt", b"hello"),
    ]);

    let scratch = Scratch::new().unwrap();
    let report = extract_wheel(Cursor::new(data), scratch.path()).unwrap();

    assert_eq!(report.entry_count, 2);
    assert_eq!(report.total_bytes, 64 + 5);
    assert_eq!(
        fs::read(scratch.path().join("pkg/readme.txt")).unwrap(),
        b"hello"
    );
    assert_eq!(fs::read(scratch.path().join("pkg/lib.so")).unwrap().len(), 64);
}

#[test]
fn roundtrip_preserves_member_set_and_content() {
    let input = build_wheel(&[
        ("pkg/lib.so", &[1u8; 128]),
        ("pkg/readme.txt", b"docs"),
        ("pkg/data/table.csv", b"a,b\n1,2\n"),
    ]);

    let scratch = Scratch::new().unwrap();
    extract_wheel(Cursor::new(input.clone()), scratch.path()).unwrap();

    let out = tempfile::tempdir().unwrap();
    let target = out.path().join("pkg.whl");
    repack_dir(scratch.path(), &target).unwrap();

    let output = fs::read(&target).unwrap();
    assert_eq!(member_names(&input), member_names(&output));

    let mut archive = zip::ZipArchive::new(Cursor::new(output)).unwrap();
    let mut readme = Vec::new();
    std::io::Read::read_to_end(
        &mut archive.by_name("pkg/readme.txt").unwrap(),
        &mut readme,
    )
    .unwrap();
    assert_eq!(readme, b"docs");
}

#[test]
fn corrupted_archive_rejected() {
    let scratch = Scratch::new().unwrap();
    let result = extract_wheel(Cursor::new(vec![0u8; 16]), scratch.path());
    assert!(matches!(result, Err(Error::Corrupted)));
}

#[test]
fn escaping_entry_rejected() {
    let data = build_wheel(&[("../evil.txt", b"gotcha")]);
    let scratch = Scratch::new().unwrap();
    let result = extract_wheel(Cursor::new(data), scratch.path());
    assert!(matches!(
        result,
        Err(Error::InvalidPath | Error::ZipSlip { .. })
    ));
    assert!(!scratch.path().join("../evil.txt").exists());
}

#[cfg(unix)]
#[test]
fn roundtrip_preserves_unix_modes() {
    use std::os::unix::fs::PermissionsExt;

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file(
            "pkg/lib.so",
            SimpleFileOptions::default().unix_permissions(0o755),
        )
        .unwrap();
    writer.write_all(&[0u8; 32]).unwrap();
    let data = writer.finish().unwrap().into_inner();

    let scratch = Scratch::new().unwrap();
    let report = extract_wheel(Cursor::new(data), scratch.path()).unwrap();
    assert_eq!(report.entries[0].mode, Some(0o755));

    let mode = fs::metadata(scratch.path().join("pkg/lib.so"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o755);

    let out = tempfile::tempdir().unwrap();
    let target = out.path().join("pkg.whl");
    repack_dir(scratch.path(), &target).unwrap();

    let mut archive = zip::ZipArchive::new(fs::File::open(&target).unwrap()).unwrap();
    let member = archive.by_name("pkg/lib.so").unwrap();
    assert_eq!(member.unix_mode().map(|m| m & 0o777), Some(0o755));
}

#[test]
fn scratch_is_gone_after_failed_extraction() {
    let scratch = Scratch::new().unwrap();
    let path = scratch.path().to_path_buf();
    let result = extract_wheel(Cursor::new(vec![0u8; 4]), &path);
    assert!(result.is_err());
    drop(scratch);
    assert!(!path.exists());
}
