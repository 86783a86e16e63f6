use lessonplan_calendar::{DateRange, WeekdaySet};
use lessonplan_export::{DocumentExporter, DocumentMeta, FieldMap, JsonExporter, write_document};
use lessonplan_schedule::generate_default;

fn meta() -> DocumentMeta {
    DocumentMeta {
        name: "Петров П.П.".to_string(),
        kvant_name: "Хайтек".to_string(),
        year: "2023-2024".to_string(),
        group: "ХТ-2".to_string(),
        module: "Базовый".to_string(),
        doc_name: "Рабочая программа".to_string(),
    }
}

#[test]
fn schedule_to_json_document() {
    let range = DateRange::new(2023, 9, 1, 2023, 9).unwrap();
    let fridays = WeekdaySet::from_indices(&[5]).unwrap();
    let schedule = generate_default(&range, fridays, 72).unwrap();
    let labels = vec!["Вводное занятие".to_string(), "Техника безопасности".to_string()];

    let fields = FieldMap::from_schedule(&meta(), schedule.entries(), &labels);
    assert_eq!(fields.len(), 6 + 2 * schedule.len());

    let dir = tempfile::tempdir().expect("create temp dir");
    let exporter = JsonExporter;
    let path = dir.path().join(exporter.file_name());
    let bytes = exporter.export(&fields).unwrap();
    write_document(&path, &bytes).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed["doc_name"], "Рабочая программа");
    assert_eq!(parsed["date_1"], "01.09.2023");
    assert_eq!(parsed["head_1"], "Вводное занятие");
    assert_eq!(parsed["head_2"], "Техника безопасности");
    assert_eq!(parsed["date_5"], "29.09.2023");
    assert_eq!(parsed["head_5"], "");
    assert!(parsed.get("date_6").is_none());
}

#[test]
fn empty_schedule_keeps_meta() {
    let fields = FieldMap::from_schedule(&meta(), &[], &["unused".to_string()]);
    assert_eq!(fields.len(), 6);
    assert_eq!(fields.get("kvant_name"), Some("Хайтек"));
}
