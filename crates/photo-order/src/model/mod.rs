//! Plain data: catalog, order state, form values and the rendered view.

pub mod catalog;
pub mod form;
pub mod order;
pub mod session;
pub mod view;

pub use catalog::*;
pub use form::*;
pub use order::*;
pub use session::*;
pub use view::*;
