use crate::rotation;
use crate::schedule::Schedule;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait Storage {
    /// Charge un planning depuis un support.
    fn load(&self) -> anyhow::Result<Schedule>;
    /// Sauvegarde de manière atomique.
    fn save(&self, schedule: &Schedule) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<Schedule> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let schedule: Schedule = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        schedule.state.validate()?;
        for (idx, entry) in schedule.templates.iter().enumerate() {
            rotation::template_offsets(entry, schedule.state.rotation_length).with_context(
                || {
                    format!(
                        "template {idx} ({}) in {}",
                        entry.location_id.as_str(),
                        self.path.display()
                    )
                },
            )?;
        }
        Ok(schedule)
    }

    fn save(&self, schedule: &Schedule) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(schedule)?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}
