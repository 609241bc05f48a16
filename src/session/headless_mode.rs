//! Headless mode execution

use super::{DatasetLoader, SessionData, SessionError, setup::spawn_loader};
use crate::controller::{Controller, Selection};
use crate::logging::init_headless_logger;
use crate::ui::snapshot::chart_to_text;

/// Runs a single render pass and prints the chart as plain text
///
/// Progress goes to stderr through the logger; stdout carries only the
/// chart.
///
/// # Arguments
/// * `session` - Session data from setup
/// * `selection` - Chart to draw
/// * `width`, `height` - Size of the text canvas in cells
///
/// # Returns
/// * `Ok(())` - The chart was printed
/// * `Err` - Loading or rendering failed
pub async fn run_headless_mode(
    session: SessionData,
    selection: Selection,
    width: u16,
    height: u16,
) -> Result<(), SessionError> {
    init_headless_logger();

    let DatasetLoader {
        dataset_receiver,
        join_handle,
        ..
    } = spawn_loader(&session);
    let dataset = dataset_receiver
        .await
        .map_err(|_| SessionError::LoaderClosed)??;
    let _ = join_handle.await;

    let controller = Controller::new(&dataset, &session.config);
    let chart = controller.render(selection).inspect_err(|e| {
        log::warn!("Render of {} failed: {}", selection, e);
    })?;
    log::info!("Rendered {} from {} records", chart.title, dataset.len());

    println!("{}", chart_to_text(&chart, width, height)?);
    Ok(())
}
