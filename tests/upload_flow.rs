use auto_eda::{EdaService, ErrorKind, LoaderConfig, UploadedFile};
use proptest::prelude::*;
use std::io::Write;

fn csv_upload(name: &str, body: &str) -> UploadedFile {
    UploadedFile::from_bytes(name, body.as_bytes().to_vec())
}

#[test]
fn test_csv_with_missing_value() {
    let mut service = EdaService::default();
    let result = service.process_upload(&csv_upload("t.csv", "a,b\n1,x\n2,\n3,z\n"));

    assert!(result.success);
    assert_eq!(result.column_names, vec!["a", "b"]);
    let stats = result.basic_stats.as_ref().unwrap();
    assert_eq!(stats.total_rows, 3);
    assert_eq!(stats.total_columns, 2);
    assert!(stats.has_missing_values);

    let info = service.column_information().unwrap();
    let b = info.iter().find(|c| c.name == "b").unwrap();
    assert_eq!(b.non_null_count, 2);
    assert_eq!(b.unique_count, 2);
}

#[test]
fn test_pdf_is_rejected() {
    let mut service = EdaService::default();
    let result = service.process_upload(&csv_upload("report.pdf", "%PDF-1.7"));

    assert!(!result.success);
    assert_eq!(result.error_kind, Some(ErrorKind::UnsupportedType));
    assert!(result.error.unwrap().to_lowercase().contains("unsupported"));
    assert!(!service.has_data());
}

#[test]
fn test_xlsx_without_codec() {
    let mut service = EdaService::new(LoaderConfig {
        excel_enabled: false,
        ..LoaderConfig::default()
    });
    let result = service.process_upload(&UploadedFile::from_bytes("sheet.xlsx", vec![0x50, 0x4b]));

    assert!(!result.success);
    assert_eq!(result.error_kind, Some(ErrorKind::MissingCodec));
    let message = result.error.unwrap();
    assert!(message.contains("calamine"));
    assert!(!message.contains("panicked"));
    assert_eq!(result.file_info.unwrap().extension, ".xlsx");
}

#[test]
fn test_all_null_column_still_listed() {
    let mut service = EdaService::default();
    let result = service.process_upload(&csv_upload("n.csv", "id,note\n1,\n2,\n3,\n"));

    assert!(result.success);
    assert!(result.column_names.contains(&"note".to_string()));
    let info = service.column_information().unwrap();
    let note = info.iter().find(|c| c.name == "note").unwrap();
    assert_eq!(note.non_null_count, 0);
    assert_eq!(note.unique_count, 0);
}

#[test]
fn test_column_information_is_idempotent() {
    let mut service = EdaService::default();
    service.process_upload(&csv_upload("t.csv", "x,y,z\n1,a,true\n2,b,false\n2,,true\n"));

    let first = service.column_information();
    let second = service.column_information();
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_reupload_replaces_table() {
    let mut service = EdaService::default();
    service.process_upload(&csv_upload("one.csv", "a\n1\n"));
    let result = service.process_upload(&csv_upload("two.csv", "p;q;r\n1;2;3\n4;5;6\n"));

    assert!(result.success);
    assert_eq!(result.column_names, vec!["p", "q", "r"]);
    assert_eq!(service.current_data().unwrap().height(), 2);
    assert_eq!(service.file_info().unwrap().filename, "two.csv");
}

#[test]
fn test_upload_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.csv");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(b"name,age\nada,36\ngrace,45\n").unwrap();

    let file = UploadedFile::from_path(&path).unwrap();
    let mut service = EdaService::default();
    let result = service.process_upload(&file);

    assert!(result.success);
    let info = result.file_info.unwrap();
    assert_eq!(info.file_type, "text/csv");
    assert_eq!(info.file_size, 25);
}

proptest! {
    #[test]
    fn prop_unsupported_extension_rejected(
        stem in "[a-z]{1,8}",
        ext in "[a-z]{1,5}",
        preload in any::<bool>(),
    ) {
        prop_assume!(!["csv", "xlsx", "xls"].contains(&ext.as_str()));

        let mut service = EdaService::default();
        if preload {
            service.process_upload(&csv_upload("seed.csv", "a\n1\n"));
        }
        let before = service.has_data();

        let result = service.process_upload(&csv_upload(&format!("{}.{}", stem, ext), "a\n1\n"));
        prop_assert!(!result.success);
        prop_assert_eq!(result.error_kind, Some(ErrorKind::UnsupportedType));
        prop_assert_eq!(service.has_data(), before);
    }

    #[test]
    fn prop_dtype_counts_sum_to_columns(
        kinds in proptest::collection::vec(0u8..3, 1..8),
        rows in 1usize..20,
    ) {
        let header: Vec<String> = (0..kinds.len()).map(|i| format!("c{}", i)).collect();
        let mut body = header.join(",");
        body.push('\n');
        for r in 0..rows {
            let cells: Vec<String> = kinds
                .iter()
                .map(|k| match k {
                    0 => r.to_string(),
                    1 => format!("{}.5", r),
                    _ => format!("s{}", r),
                })
                .collect();
            body.push_str(&cells.join(","));
            body.push('\n');
        }

        let mut service = EdaService::default();
        let result = service.process_upload(&csv_upload("gen.csv", &body));
        prop_assert!(result.success);

        let stats = result.basic_stats.unwrap();
        prop_assert_eq!(stats.total_rows, rows);
        prop_assert_eq!(stats.total_columns, kinds.len());
        let total: usize = service.dtype_summary().values().sum();
        prop_assert_eq!(total, stats.total_columns);
    }
}
