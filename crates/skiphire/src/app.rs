//! Application entry point and dispatch.

use std::io;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use skiphire_catalog::{CatalogSource, FileCatalog, HttpCatalog};
use skiphire_core::constants::exit_codes;
use skiphire_core::SelectionController;

use crate::config::AppConfig;
use crate::errors::handle_error;
use crate::presenter::CliPresenter;

/// Run the application and return the process exit code.
///
/// # Errors
///
/// Returns an error if the terminal cannot be driven or output cannot be written.
pub fn run(config: &AppConfig) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "skiphire", &mut io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    let source = match build_source(config) {
        Ok(source) => source,
        Err(err) => {
            CliPresenter::new(config.json).present_error(&err);
            return Ok(handle_error(&err));
        }
    };
    info!(source = %source.describe(), "catalog source ready");

    if config.list {
        return run_list(config, source.as_ref());
    }

    run_tui(config, source)
}

/// Pick the catalog source from the configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn build_source(
    config: &AppConfig,
) -> Result<Arc<dyn CatalogSource>, skiphire_core::CatalogError> {
    if let Some(path) = &config.catalog_file {
        return Ok(Arc::new(FileCatalog::new(path)));
    }
    let client = HttpCatalog::new(config.query(), config.timeout_duration())?;
    Ok(Arc::new(client))
}

fn run_list(config: &AppConfig, source: &dyn CatalogSource) -> Result<i32> {
    let presenter = CliPresenter::new(config.json);

    let skips = match source.fetch() {
        Ok(skips) => skips,
        Err(err) => {
            presenter.present_error(&err);
            return Ok(handle_error(&err));
        }
    };

    let mut controller = SelectionController::with_catalog(skips);
    for waste in &config.waste {
        if !controller.waste_types().contains(waste) {
            controller.toggle_waste_type(*waste);
        }
    }

    let waste_types: Vec<_> = controller.waste_types().iter().copied().collect();
    let stdout = io::stdout();
    presenter.present_skips(&mut stdout.lock(), controller.available_skips(), &waste_types)?;
    Ok(exit_codes::SUCCESS)
}

fn run_tui(config: &AppConfig, source: Arc<dyn CatalogSource>) -> Result<i32> {
    let (tx, rx) = crossbeam_channel::unbounded::<skiphire_tui::TuiMessage>();

    let mut app = skiphire_tui::TuiApp::new(source, tx, rx);
    app.preselect(&config.waste);
    app.start_fetch();
    app.run()?;

    if app.cancelled {
        return Ok(exit_codes::ERROR_CANCELED);
    }
    if let Some(skip) = &app.checkout {
        info!(skip_id = skip.id, "checkout");
        let stdout = io::stdout();
        CliPresenter::new(config.json).present_checkout(&mut stdout.lock(), skip)?;
    }
    Ok(exit_codes::SUCCESS)
}
