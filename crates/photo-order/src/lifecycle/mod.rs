//! # System Lifecycle
//!
//! Starts the order actor with its injected context and stops it cleanly.
//!
//! ## Wiring
//!
//! The actor is created first and its context second, because the context needs a
//! handle to the actor itself:
//!
//! ```rust,ignore
//! let (actor, client) = order_actor::new(config.channel_buffer);
//! let context = SessionContext {
//!     catalog,
//!     config,
//!     validator: EmailValidator::new(),
//!     scheduler: SubmissionScheduler::new(client.downgrade(), gateway, shutdown.clone()),
//! };
//! tokio::spawn(actor.run(context));
//! ```
//!
//! The scheduler only holds a [`WeakResourceClient`](session_actor::WeakResourceClient),
//! so the actor still stops once every [`OrderClient`](crate::clients::OrderClient) is gone.
//!
//! ## Shutdown
//!
//! 1. **Cancel** the root token: every submission still waiting on the gateway stops.
//! 2. **Drop** the client: the actor's `recv()` returns `None`.
//! 3. **Clean up**: remaining sessions get `on_delete`.
//! 4. **Await** the actor task.
//!
//! Tracing is set up once by the binary through
//! [`session_actor::tracing::setup_tracing`].

pub mod configurator_system;

pub use configurator_system::*;
