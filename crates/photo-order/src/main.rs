//! # PhotoResto Configurator Demo
//!
//! Walks one page view through a full order:
//! 1.  Start the [`ConfiguratorSystem`].
//! 2.  Pick the Héritage 10 pack with rush delivery and prints.
//! 3.  Drop three photos, one of them too large.
//! 4.  Submit and wait for the confirmation.
//!
//! Run with `RUST_LOG=info` (or `debug` for payloads).

use photo_order::config::WidgetConfig;
use photo_order::dispatch::{UiEffect, UiEvent};
use photo_order::lifecycle::ConfiguratorSystem;
use photo_order::model::{Catalog, FileDescriptor, FormField, FormSnapshot, OptionId, PackId};
use session_actor::tracing::setup_tracing;
use tracing::{info, warn, Instrument};

const MIB: u64 = 1024 * 1024;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let system = ConfiguratorSystem::new(Catalog::default(), WidgetConfig::default());
    let mut page = system.open_page().await.map_err(|e| e.to_string())?;
    info!(session = %page.session(), "Page opened");

    let pack = system
        .catalog
        .pack(&PackId::from("heritage10"))
        .ok_or("heritage10 missing from catalog")?;
    let checked = ["rush", "print"]
        .into_iter()
        .filter_map(|id| system.catalog.option(&OptionId::from(id)))
        .map(|o| o.checked())
        .collect();

    let span = tracing::info_span!("selection");
    async {
        page.dispatch(UiEvent::pack_card(pack)).await?;
        page.dispatch(UiEvent::OptionsChanged(checked)).await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let files = vec![
        FileDescriptor::new("grand-mere-1952.jpg", 3 * MIB, "image/jpeg"),
        FileDescriptor::new("mariage.png", 800 * 1024, "image/png"),
        FileDescriptor::new("scan-600dpi.tiff", 14 * MIB, "image/tiff"),
    ];
    page.dispatch(UiEvent::DragEnter).await.map_err(|e| e.to_string())?;
    let dropped = page
        .dispatch(UiEvent::Drop(files))
        .await
        .map_err(|e| e.to_string())?;
    for effect in &dropped.effects {
        if let UiEffect::Notify(notice) = effect {
            warn!(message = %notice.message, "Upload notice");
        }
    }

    let form = FormSnapshot::new("alice@example.com")
        .with_field(FormField::text("name", "Alice Martin").required())
        .with_field(FormField::checkbox("cgv", true).required());
    page.dispatch(UiEvent::FormSubmitted(form))
        .await
        .map_err(|e| e.to_string())?;

    tokio::time::sleep(system.config.submit_delay() + std::time::Duration::from_millis(100)).await;
    for effect in page.sync().await.map_err(|e| e.to_string())? {
        if let UiEffect::Notify(notice) = effect {
            info!(message = %notice.message, "Notice");
        }
    }

    let snapshot = system
        .order_client
        .snapshot(page.session())
        .await
        .map_err(|e| e.to_string())?;
    info!(total = snapshot.total(), files = snapshot.state.files().len(), "Order state");

    drop(page);
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
