//! Interactive state engines driven by serializable intents
//!
//! This crate implements three small client-side state engines and the glue
//! that coordinates them:
//!
//! - [`domain::calculator`]: a four-function calculator as a pure
//!   finite-state reducer
//! - [`domain::todo`]: an ordered todo collection with derived filtered
//!   views (plus the companion [`domain::cart`] engine)
//! - [`prefs`]: theme resolution and persistence with palette emission
//!   into a style registry
//!
//! Every engine exposes a single pure transition (`apply(state, intent)`),
//! so all side effects live at the edges: [`platform`] for storage and
//! system detection, [`ui`] for the style registry, [`app`] for routing.

pub mod app;
pub mod domain;
pub mod input;
pub mod platform;
pub mod prefs;
pub mod ui;
