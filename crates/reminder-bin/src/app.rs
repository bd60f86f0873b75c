//! Object graph and command handlers.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Args;
use reminder_auth::{auth_signal, AuthStateObserver, AuthUser};
use reminder_config_and_utils::{Config, Paths};
use reminder_database::Database;
use reminder_repository::{
    IoDispatcher, ReminderDataSource, ReminderResult, RemindersLocalRepository,
};
use reminder_save_flow::{
    GeofenceRequest, ReminderDataItem, RemindersListState, SaveReminderSession, SelectedLocation,
    NO_DATA_MESSAGE,
};
use tracing::{debug, info};

#[derive(Args, Debug, Default)]
pub struct AddArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Place name; omit for a custom location
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub latitude: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub longitude: Option<f64>,
    /// Overwrite the reminder with this id instead of creating a new one
    #[arg(long)]
    pub id: Option<String>,
}

impl AddArgs {
    fn into_session(self) -> SaveReminderSession {
        let mut session = SaveReminderSession::new();
        if let Some(id) = self.id {
            session = session.with_reminder_id(id);
        }
        session.title = self.title;
        session.description = self.description;

        if let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) {
            session.select_location(match self.location.filter(|l| !l.is_empty()) {
                Some(name) => SelectedLocation::PointOfInterest {
                    name,
                    latitude,
                    longitude,
                },
                None => SelectedLocation::Custom {
                    latitude,
                    longitude,
                },
            });
        }
        session
    }
}

pub struct App {
    config: Config,
    repository: RemindersLocalRepository<Database>,
    auth: AuthStateObserver,
}

impl App {
    pub fn build(paths: &Paths, config: Config, user: Option<String>) -> anyhow::Result<Self> {
        let db_path = paths.database_file();
        let db = Database::open(&db_path)
            .with_context(|| format!("Failed to open database at {}", db_path.display()))?;
        db.health_check().context("Database health check failed")?;
        debug!(path = ?db.path(), "Database opened");

        let (_signal, auth) = auth_signal(user.map(AuthUser::new));

        Ok(Self {
            config,
            repository: RemindersLocalRepository::new(Arc::new(db), IoDispatcher::BlockingPool),
            auth,
        })
    }

    fn require_sign_in(&self) -> anyhow::Result<()> {
        let state = self.auth.current();
        if state.requires_sign_in() {
            bail!("Sign in required: pass --user or set REMINDERS_USER");
        }
        debug!(state = ?state, "Authentication checked");
        Ok(())
    }

    pub async fn list(&self, out: &mut impl Write) -> anyhow::Result<()> {
        self.require_sign_in()?;

        let state = RemindersListState::from_result(self.repository.get_reminders().await);
        if let RemindersListState::Failed(message) = &state {
            bail!(message.clone());
        }
        if state.show_no_data() {
            writeln!(out, "{NO_DATA_MESSAGE}")?;
        }
        for item in state.items() {
            writeln!(out, "{}", summary_line(item))?;
        }
        Ok(())
    }

    pub async fn show(&self, id: &str, out: &mut impl Write) -> anyhow::Result<()> {
        self.require_sign_in()?;

        match self.repository.get_reminder(id).await {
            ReminderResult::Success(dto) => {
                let item = ReminderDataItem::from(dto);
                writeln!(out, "{}", serde_json::to_string_pretty(&item)?)?;
                Ok(())
            }
            ReminderResult::Error { message, .. } => bail!(message),
        }
    }

    pub async fn add(&self, args: AddArgs, out: &mut impl Write) -> anyhow::Result<()> {
        self.require_sign_in()?;

        let mut session = args.into_session();
        let item = session.validate_and_save(&self.repository).await?;
        let expected = item.to_dto()?;

        // Saves report faults only through the log. Compare the whole record
        // so a failed overwrite is not mistaken for the old row.
        match self.repository.get_reminder(&item.id).await {
            ReminderResult::Success(stored) if stored == expected => {}
            ReminderResult::Success(_) => {
                bail!("Reminder was not saved: {} still holds older values", item.id)
            }
            ReminderResult::Error { message, .. } => bail!("Reminder was not saved: {message}"),
        }
        info!(id = %item.id, "Reminder saved");

        let geofence = GeofenceRequest::for_reminder(&item)?
            .with_radius_meters(self.config.geofence_radius_meters)
            .with_expiration(Duration::from_secs(self.config.geofence_expiration_secs));
        info!(id = %item.id, radius = geofence.radius_meters, "Geofence request built");

        writeln!(out, "Reminder saved: {}", item.id)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&geofence)?)?;
        session.on_clear();
        Ok(())
    }

    pub async fn clear(&self, out: &mut impl Write) -> anyhow::Result<()> {
        self.require_sign_in()?;

        self.repository.delete_all_reminders().await;
        writeln!(out, "Reminders cleared")?;
        Ok(())
    }
}

fn summary_line(item: &ReminderDataItem) -> String {
    let coords = item
        .coordinates()
        .map(|(lat, lon)| format!(" ({lat}, {lon})"))
        .unwrap_or_default();
    format!(
        "{}\t{}\t{}{}",
        item.id,
        item.title.as_deref().unwrap_or_default(),
        item.location.as_deref().unwrap_or_default(),
        coords
    )
}
