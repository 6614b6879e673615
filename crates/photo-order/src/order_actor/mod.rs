//! # Order Actor
//!
//! Hosts every [`OrderSession`] in one [`ResourceActor`]. Requests for all sessions are
//! processed one at a time, so each UI transition runs to completion before the next.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](session_actor::ActorEntity) implementation for [`OrderSession`]
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`]
//! - [`context`] - [`SessionContext`] and the [`SubmissionScheduler`]
//! - [`error`] - [`OrderError`]
//!
//! ## Usage
//!
//! ```rust
//! use photo_order::clients::OrderClient;
//! use photo_order::config::WidgetConfig;
//! use photo_order::gateway::SimulatedGateway;
//! use photo_order::model::Catalog;
//! use photo_order::order_actor::{self, SessionContext, SubmissionScheduler};
//! use photo_order::validation::EmailValidator;
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = order_actor::new(32);
//!     let context = SessionContext {
//!         catalog: Arc::new(Catalog::default()),
//!         config: Arc::new(WidgetConfig::default()),
//!         validator: EmailValidator::new(),
//!         scheduler: SubmissionScheduler::new(
//!             generic_client.downgrade(),
//!             Arc::new(SimulatedGateway::new(Duration::from_millis(10))),
//!             CancellationToken::new(),
//!         ),
//!     };
//!     tokio::spawn(actor.run(context));
//!
//!     let client = OrderClient::new(generic_client);
//!     let session = client.open_session().await?;
//!     client.select_pack(session, "famille3".into(), 3, 49).await?;
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod context;
pub mod entity;
pub mod error;

pub use actions::*;
pub use context::*;
pub use error::*;

use crate::model::OrderSession;
use session_actor::{ResourceActor, ResourceClient};

/// Creates the order actor and its client. The actor is started with `run(context)`.
pub fn new(buffer_size: usize) -> (ResourceActor<OrderSession>, ResourceClient<OrderSession>) {
    ResourceActor::new(buffer_size)
}
