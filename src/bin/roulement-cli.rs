#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use chrono::{Days, NaiveDate};
use clap::{Parser, Subcommand};
use roulement::{
    io,
    model::{LocationId, RotationTemplateEntry, WorkerId},
    schedule::{self, Schedule},
    storage::{JsonStorage, Storage},
    view,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de planning tournant (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`, filtre via RUST_LOG)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du planning
    #[arg(long, global = true, default_value = "schedule.json")]
    schedule: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialiser un planning vide
    Init {
        /// Nombre de jours du cycle
        #[arg(long)]
        rotation_length: u32,
        /// Premier jour (offset 0), YYYY-MM-DD
        #[arg(long)]
        start: String,
        #[arg(long, default_value_t = roulement::rotation::DEFAULT_PUBLISH_LENGTH)]
        publish_length: u32,
        /// Écrase un planning existant
        #[arg(long)]
        force: bool,
    },

    /// Importer des entrées du motif depuis un CSV
    ImportTemplates {
        #[arg(long)]
        csv: String,
    },

    /// Ajouter une entrée au motif
    AddTemplate {
        #[arg(long)]
        location: String,
        #[arg(long)]
        start_day: u32,
        /// HH:MM[:SS]
        #[arg(long)]
        start_time: String,
        #[arg(long)]
        end_day: u32,
        /// HH:MM[:SS]
        #[arg(long)]
        end_time: String,
        #[arg(long)]
        worker: Option<String>,
    },

    /// Afficher le motif (forme durées absolues, JSON)
    Templates,

    /// Dérouler N jours supplémentaires
    Extend {
        #[arg(long)]
        days: i64,
    },

    /// Publier `publish_length` jours et dérouler d'autant
    Publish,

    /// Lister et optionnellement exporter
    List {
        /// Planning complet, ou seulement les créneaux listés avec --draft
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
        /// Seulement la fenêtre de brouillon
        #[arg(long)]
        draft: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.schedule)?;

    let code = match cli.cmd {
        Commands::Init {
            rotation_length,
            start,
            publish_length,
            force,
        } => {
            if storage.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    storage.path().display()
                );
            }
            let start = NaiveDate::parse_from_str(&start, "%Y-%m-%d")
                .with_context(|| format!("invalid start date: {start}"))?;
            let mut sched = Schedule::new(rotation_length, start)?;
            sched.state.publish_length = publish_length;
            storage.save(&sched)?;
            println!("Schedule {} initialised", sched.id.as_str());
            0
        }
        Commands::ImportTemplates { csv } => {
            let entries = io::import_templates_csv(&csv)?;
            let count = entries.len();
            let mut sched = storage.load()?;
            let base = sched.version;
            for entry in entries {
                sched.add_template(entry)?;
            }
            sched.version += 1;
            schedule::commit(&storage, base, &sched)?;
            println!("Imported {count} template(s)");
            0
        }
        Commands::AddTemplate {
            location,
            start_day,
            start_time,
            end_day,
            end_time,
            worker,
        } => {
            let mut entry = RotationTemplateEntry::new(
                LocationId::new(location),
                start_day,
                io::parse_time(&start_time)?,
                end_day,
                io::parse_time(&end_time)?,
            );
            if let Some(w) = worker {
                entry = entry.with_default_worker(WorkerId::new(w));
            }
            let mut sched = storage.load()?;
            let base = sched.version;
            sched.add_template(entry)?;
            sched.version += 1;
            schedule::commit(&storage, base, &sched)?;
            0
        }
        Commands::Templates => {
            let sched = storage.load()?;
            let views = sched
                .templates
                .iter()
                .map(|t| view::to_view(t, sched.state.rotation_length))
                .collect::<Result<Vec<_>, _>>()?;
            println!("{}", serde_json::to_string_pretty(&views)?);
            0
        }
        Commands::Extend { days } => {
            let sched = schedule::extend(&storage, days)?;
            // days >= 0 : sinon extend a déjà échoué
            let previous = sched
                .state
                .last_draft_date
                .checked_sub_days(Days::new(days.unsigned_abs()))
                .context("draft horizon before calendar start")?;
            println!(
                "Drafted {} shift(s) up to {} (next offset {})",
                sched.shifts_after(previous).count(),
                sched.state.last_draft_date,
                sched.state.unplanned_rotation_offset
            );
            0
        }
        Commands::Publish => {
            let sched = schedule::publish(&storage)?;
            println!(
                "Published up to {}, draft horizon at {}",
                sched.state.first_draft_date, sched.state.last_draft_date
            );
            0
        }
        Commands::List {
            out_json,
            out_csv,
            draft,
        } => {
            let sched = storage.load()?;
            let shifts: Vec<_> = if draft {
                sched.draft_shifts().cloned().collect()
            } else {
                sched.shifts.clone()
            };
            match out_json {
                Some(path) if draft => io::export_shifts_json(path, &shifts)?,
                Some(path) => io::export_schedule_json(path, &sched)?,
                None => {}
            }
            if let Some(path) = out_csv {
                io::export_shifts_csv(path, &shifts)?;
            }
            // impression compacte
            for s in &shifts {
                let assigned = s
                    .assigned_worker
                    .as_ref()
                    .map(|w| w.as_str())
                    .unwrap_or("-");
                println!(
                    "{} | {} → {} ({} min) | {}",
                    s.location_id.as_str(),
                    s.start.to_rfc3339(),
                    s.end.to_rfc3339(),
                    s.duration_minutes(),
                    assigned
                );
            }
            0
        }
    };

    std::process::exit(code);
}
