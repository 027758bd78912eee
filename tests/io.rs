#![forbid(unsafe_code)]
use chrono::{NaiveDate, NaiveTime};
use roulement::{
    expand, from_view, io, to_view, LocationId, RosterState, RotationTemplateEntry,
    RotationTemplateView, WorkerId,
};
use std::fs;
use tempfile::tempdir;

const TEMPLATES_CSV: &str = "\
location,start_day,start_time,end_day,end_time,default_worker
accueil,0,08:00,0,16:00,alice
garde,6,19:00,0,06:00
";

#[test]
fn import_templates_from_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("templates.csv");
    fs::write(&path, TEMPLATES_CSV).unwrap();

    let entries = io::import_templates_csv(&path).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].default_worker, Some(WorkerId::new("alice")));
    assert_eq!(entries[1].start_day_offset, 6);
    assert_eq!(entries[1].end_time, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
    assert_eq!(entries[1].default_worker, None);
}

#[test]
fn import_reports_offending_line() {
    let csv = "location,start_day,start_time,end_day,end_time\nposte,0,08:00,0,16:00\nposte,x,08:00,0,16:00\n";
    let err = io::read_templates_csv(csv.as_bytes()).unwrap_err();
    assert!(format!("{err:#}").contains("line 3: invalid start_day"));
}

#[test]
fn shifts_csv_export() {
    let templates = io::read_templates_csv(TEMPLATES_CSV.as_bytes()).unwrap();
    let state = RosterState::initial(7, NaiveDate::from_ymd_opt(2025, 10, 6).unwrap()).unwrap();
    let out = expand(&state, &templates, 7).unwrap();

    let mut buf = Vec::new();
    io::write_shifts_csv(&mut buf, &out.shifts).unwrap();
    let csv = String::from_utf8(buf).unwrap();
    insta::assert_snapshot!(csv, @r"
    location,start,end,rotation_offset,assigned_worker
    accueil,2025-10-06T08:00:00+00:00,2025-10-06T16:00:00+00:00,0,alice
    garde,2025-10-12T19:00:00+00:00,2025-10-13T06:00:00+00:00,6,
    ");
}

#[test]
fn template_view_round_trip() {
    let entry = RotationTemplateEntry::new(
        LocationId::new("garde"),
        6,
        NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
        0,
        NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    )
    .with_default_worker(WorkerId::new("bob"));

    let view = to_view(&entry, 7).unwrap();
    assert_eq!(view.from_cycle_start_seconds, (6 * 24 + 19) * 3600);
    assert_eq!(view.span_seconds, 11 * 3600);

    let json = serde_json::to_string(&view).unwrap();
    let parsed: RotationTemplateView = serde_json::from_str(&json).unwrap();
    assert_eq!(from_view(&parsed, 7).unwrap(), entry);
}

#[test]
fn view_with_empty_location_is_rejected() {
    let view = RotationTemplateView {
        location_id: " ".into(),
        from_cycle_start_seconds: 0,
        span_seconds: 3600,
        default_worker: None,
    };
    assert!(from_view(&view, 7).is_err());
}
