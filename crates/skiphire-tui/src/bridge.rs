//! Bridge between the blocking catalog fetch and TUI messages.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;
use tracing::debug;

use skiphire_catalog::CatalogSource;

use crate::messages::TuiMessage;

/// Run one fetch on a background thread and post the outcome, tagged with
/// `generation`, to the TUI channel.
///
/// The request is never cancelled. If the TUI has exited the send fails and
/// the result is dropped.
pub fn spawn_catalog_fetch(
    source: Arc<dyn CatalogSource>,
    generation: u64,
    tx: Sender<TuiMessage>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        debug!(generation, source = %source.describe(), "fetching skip catalog");
        let result = source.fetch();
        if tx
            .send(TuiMessage::CatalogLoaded { generation, result })
            .is_err()
        {
            debug!(generation, "TUI gone, catalog result dropped");
        }
    })
}
