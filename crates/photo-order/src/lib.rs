//! # PhotoResto Order Configurator
//!
//! Order widget for the photo restoration site: pick a service or a pack, add
//! options, upload photos and send the request.
//!
//! - [`model`]: catalog, order state, form values and the rendered view.
//! - [`pricing`], [`upload`], [`validation`], [`submission`]: pure rules.
//! - [`order_actor`]: the session entity hosted by a `session_actor::ResourceActor`.
//! - [`clients`]: the typed [`OrderClient`](clients::OrderClient).
//! - [`dispatch`]: page events in, page effects out.
//! - [`lifecycle`]: starting and stopping the whole thing.

pub mod clients;
pub mod config;
pub mod dispatch;
pub mod gateway;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod pricing;
pub mod submission;
pub mod upload;
pub mod validation;
