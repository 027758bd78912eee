use crate::model::{GeneratedShift, LocationId, RotationTemplateEntry, WorkerId};
use crate::schedule::Schedule;
use anyhow::{bail, Context};
use chrono::NaiveTime;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Import du motif depuis CSV:
/// header `location,start_day,start_time,end_day,end_time[,default_worker]`
pub fn import_templates_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<RotationTemplateEntry>> {
    let path = path.as_ref();
    let rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_templates(rdr)
}

/// Même format que [`import_templates_csv`], depuis n'importe quel lecteur.
pub fn read_templates_csv<R: std::io::Read>(reader: R) -> anyhow::Result<Vec<RotationTemplateEntry>> {
    let rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    read_templates(rdr)
}

fn read_templates<R: std::io::Read>(
    mut rdr: csv::Reader<R>,
) -> anyhow::Result<Vec<RotationTemplateEntry>> {
    let mut out = Vec::new();
    for (idx, rec) in rdr.records().enumerate() {
        let rec = rec?;
        // ligne 1 = header
        let line = idx + 2;
        let location = rec.get(0).context("missing location")?.trim();
        if location.is_empty() {
            bail!("line {line}: empty location");
        }
        let start_day = parse_day(rec.get(1).context("missing start_day")?)
            .with_context(|| format!("line {line}: invalid start_day"))?;
        let start_time = parse_time(rec.get(2).context("missing start_time")?)
            .with_context(|| format!("line {line}: invalid start_time"))?;
        let end_day = parse_day(rec.get(3).context("missing end_day")?)
            .with_context(|| format!("line {line}: invalid end_day"))?;
        let end_time = parse_time(rec.get(4).context("missing end_time")?)
            .with_context(|| format!("line {line}: invalid end_time"))?;

        let mut entry = RotationTemplateEntry::new(
            LocationId::new(location),
            start_day,
            start_time,
            end_day,
            end_time,
        );
        if let Some(worker) = rec.get(5).map(str::trim).filter(|w| !w.is_empty()) {
            entry = entry.with_default_worker(WorkerId::new(worker));
        }
        out.push(entry);
    }
    Ok(out)
}

fn parse_day(raw: &str) -> anyhow::Result<u32> {
    let raw = raw.trim();
    raw.parse::<u32>()
        .with_context(|| format!("expected day offset, got {raw:?}"))
}

/// Accepte `HH:MM` ou `HH:MM:SS`.
pub fn parse_time(raw: &str) -> anyhow::Result<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .with_context(|| format!("expected HH:MM[:SS], got {raw:?}"))
}

/// Export JSON du planning complet (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(schedule)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export JSON d'une liste de créneaux
pub fn export_shifts_json<P: AsRef<Path>>(path: P, shifts: &[GeneratedShift]) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(shifts)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV des créneaux: header `location,start,end,rotation_offset,assigned_worker`
pub fn export_shifts_csv<P: AsRef<Path>>(path: P, shifts: &[GeneratedShift]) -> anyhow::Result<()> {
    let file = fs::File::create(path.as_ref())
        .with_context(|| format!("creating {}", path.as_ref().display()))?;
    write_shifts_csv(file, shifts)
}

pub fn write_shifts_csv<W: Write>(writer: W, shifts: &[GeneratedShift]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(writer);
    w.write_record(["location", "start", "end", "rotation_offset", "assigned_worker"])?;
    for s in shifts {
        let start = s.start.to_rfc3339();
        let end = s.end.to_rfc3339();
        let offset = s.rotation_offset.to_string();
        let worker = s.assigned_worker.as_ref().map(WorkerId::as_str).unwrap_or("");
        w.write_record([
            s.location_id.as_str(),
            start.as_str(),
            end.as_str(),
            offset.as_str(),
            worker,
        ])?;
    }
    w.flush()?;
    Ok(())
}
