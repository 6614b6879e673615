//! # Session Actor
//!
//! A small, type-safe actor runtime for hosting per-visitor sessions. One
//! [`ResourceActor`] task owns every live entity of a type and handles their requests
//! strictly one after another, which gives each entity run-to-completion semantics
//! without locks.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]): the domain state and its action handler.
//! 2. **Runtime Layer** ([`ResourceActor`]): the message loop and the entity store.
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]): typed async calls.
//!
//! ## Lifecycle
//!
//! Entities are created, read as snapshots, driven through actions and deleted:
//!
//! ```rust
//! use session_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Visit { id: u32, clicks: u32 }
//!
//! #[derive(Debug)] struct VisitOpen;
//! #[derive(Debug)] enum VisitAction { Click }
//! #[derive(Debug, thiserror::Error)] #[error("visit error")] struct VisitError;
//!
//! #[async_trait]
//! impl ActorEntity for Visit {
//!     type Id = u32;
//!     type Create = VisitOpen;
//!     type Action = VisitAction;
//!     type ActionResult = u32;
//!     type Context = ();
//!     type Error = VisitError;
//!
//!     fn from_create_params(id: u32, _: VisitOpen) -> Result<Self, Self::Error> {
//!         Ok(Self { id, clicks: 0 })
//!     }
//!
//!     async fn handle_action(&mut self, action: VisitAction, _: &()) -> Result<u32, Self::Error> {
//!         match action {
//!             VisitAction::Click => { self.clicks += 1; Ok(self.clicks) }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Visit>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(VisitOpen).await.unwrap();
//!     client.perform_action(id, VisitAction::Click).await.unwrap();
//!     let visit = client.get(id).await.unwrap().unwrap();
//!     assert_eq!(visit.clicks, 1);
//!     client.delete(id).await.unwrap();
//! }
//! ```
//!
//! ## Context Injection and Self-Messages
//!
//! The context is handed to [`ResourceActor::run`], not to `new`, so it can be built
//! from the actor's own client. An entity that schedules work for later (a timer, a
//! simulated network call) keeps a [`WeakResourceClient`] in its context and posts the
//! completion back as an ordinary action. The weak handle does not keep the actor
//! alive: dropping every strong client still stops the loop.
//!
//! ## Testing
//!
//! See [`mock`] for clients that answer without a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::{ResourceClient, WeakResourceClient};
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
