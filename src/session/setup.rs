//! Session setup and dataset loading

use super::SessionError;
use crate::config::{ColumnNames, Config};
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::dataset::{Dataset, DatasetSource, LoadError, SpreadsheetSource};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Resolved configuration
    pub config: Arc<Config>,
    /// Where the dataset is read from
    pub source: Arc<dyn DatasetSource>,
}

impl std::fmt::Debug for SessionData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionData")
            .field("config", &self.config)
            .field("source", &self.source.describe())
            .finish()
    }
}

/// Handles to a running background load.
#[derive(Debug)]
pub struct DatasetLoader {
    /// Progress events for the activity log
    pub event_receiver: mpsc::Receiver<Event>,
    /// Delivers the loaded dataset exactly once
    pub dataset_receiver: oneshot::Receiver<Result<Dataset, LoadError>>,
    pub join_handle: JoinHandle<()>,
}

/// Resolves configuration and the dataset source for a session.
///
/// # Arguments
/// * `dataset` - Dataset path from the command line, overriding the config
/// * `config_path` - Explicit config file, if any
pub fn setup_session(
    dataset: Option<PathBuf>,
    config_path: Option<&Path>,
) -> Result<SessionData, SessionError> {
    let mut config = Config::resolve(config_path)?;
    if let Some(path) = dataset {
        config.dataset_path = path;
    }
    let source = SpreadsheetSource::new(config.dataset_path.clone());
    Ok(SessionData {
        config: Arc::new(config),
        source: Arc::new(source),
    })
}

/// Reads the dataset synchronously, logging progress.
pub fn load_dataset(
    source: &dyn DatasetSource,
    columns: &ColumnNames,
) -> Result<Dataset, LoadError> {
    let started = Instant::now();
    log::info!("Loading dataset from {}", source.describe());
    match source.load(columns) {
        Ok(dataset) => {
            if dataset.is_empty() {
                log::warn!("Dataset {} has no records", source.describe());
            }
            log::info!(
                "Loaded {} records in {} ms",
                dataset.len(),
                started.elapsed().as_millis()
            );
            Ok(dataset)
        }
        Err(e) => {
            log::error!("Dataset load failed: {}", e);
            Err(e)
        }
    }
}

/// Loads the dataset on a blocking task.
///
/// The dataset arrives on the oneshot channel; progress is reported as
/// loader events.
pub fn spawn_loader(session: &SessionData) -> DatasetLoader {
    let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    let (dataset_sender, dataset_receiver) = oneshot::channel();
    let source = Arc::clone(&session.source);
    let config = Arc::clone(&session.config);

    let join_handle = tokio::task::spawn_blocking(move || {
        // The queue is far larger than the handful of events sent here.
        let _ = event_sender.try_send(Event::loader_with_level(
            format!("Reading dataset from {}", source.describe()),
            EventType::Waiting,
            LogLevel::Info,
        ));

        let result = load_dataset(source.as_ref(), &config.columns);
        let event = match &result {
            Ok(dataset) => Event::loader_with_level(
                format!("Loaded {} records", dataset.len()),
                EventType::Success,
                LogLevel::Info,
            ),
            Err(e) => Event::loader_with_level(
                format!("Dataset load failed: {}", e),
                EventType::Error,
                LogLevel::Error,
            ),
        };
        let _ = event_sender.try_send(event);
        let _ = dataset_sender.send(result);
    });

    DatasetLoader {
        event_receiver,
        dataset_receiver,
        join_handle,
    }
}
