//! Shared client-side state models.
//!
//! DESIGN
//! ======
//! State is split by domain (`view`, `widgets`, `tickets`, `poll`,
//! `notify`) so individual components can depend on small focused models,
//! and every model stays free of browser types so it tests natively.

pub mod notify;
pub mod poll;
pub mod tickets;
pub mod view;
pub mod widgets;
