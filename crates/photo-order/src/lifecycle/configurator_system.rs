use crate::clients::OrderClient;
use crate::config::WidgetConfig;
use crate::dispatch::UiDispatcher;
use crate::gateway::{SimulatedGateway, SubmissionGateway};
use crate::model::Catalog;
use crate::order_actor::{self, OrderError, SessionContext, SubmissionScheduler};
use crate::validation::EmailValidator;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Runtime for the order configurator.
///
/// Owns the order actor task and the root cancellation token that every deferred
/// submission derives from.
///
/// # Example
///
/// ```ignore
/// let system = ConfiguratorSystem::new(Catalog::default(), WidgetConfig::default());
///
/// let mut page = system.open_page().await?;
/// page.dispatch(UiEvent::pack_card(&heritage10)).await?;
///
/// system.shutdown().await?;
/// ```
pub struct ConfiguratorSystem {
    /// Client for the order actor
    pub order_client: OrderClient,

    pub catalog: Arc<Catalog>,
    pub config: Arc<WidgetConfig>,

    shutdown: CancellationToken,
    handle: tokio::task::JoinHandle<()>,
}

impl ConfiguratorSystem {
    /// Starts the system with the simulated gateway.
    pub fn new(catalog: Catalog, config: WidgetConfig) -> Self {
        let gateway = Arc::new(SimulatedGateway::new(config.submit_delay()));
        Self::with_gateway(catalog, config, gateway)
    }

    /// Starts the system with a caller-supplied submission gateway.
    pub fn with_gateway(
        catalog: Catalog,
        config: WidgetConfig,
        gateway: Arc<dyn SubmissionGateway>,
    ) -> Self {
        let catalog = Arc::new(catalog);
        let config = Arc::new(config);
        let shutdown = CancellationToken::new();

        // 1. Create the actor (no context yet)
        let (actor, client) = order_actor::new(config.channel_buffer);

        // 2. Build the context from a weak handle so the actor can post to itself
        let context = SessionContext {
            catalog: Arc::clone(&catalog),
            config: Arc::clone(&config),
            validator: EmailValidator::new(),
            scheduler: SubmissionScheduler::new(client.downgrade(), gateway, shutdown.clone()),
        };
        let handle = tokio::spawn(actor.run(context));

        info!(
            services = catalog.services.len(),
            packs = catalog.packs.len(),
            options = catalog.options.len(),
            "PhotoResto configurator initialized"
        );

        Self {
            order_client: OrderClient::new(client),
            catalog,
            config,
            shutdown,
            handle,
        }
    }

    /// Opens a session and returns the event router for it.
    pub async fn open_page(&self) -> Result<UiDispatcher, OrderError> {
        let session = self.order_client.open_session().await?;
        Ok(UiDispatcher::new(
            self.order_client.clone(),
            session,
            self.config.scroll_delay(),
        ))
    }

    /// Stops the system.
    ///
    /// Pending submissions are cancelled first, then the client is dropped so the actor
    /// loop ends. Dispatchers still holding a client clone keep the actor alive until
    /// they are dropped.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down configurator...");

        self.shutdown.cancel();
        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Configurator shutdown complete.");
        Ok(())
    }
}
