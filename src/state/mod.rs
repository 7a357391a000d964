//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`board`, `toasts`) so individual components can
//! depend on small focused models. Each model is a plain struct held in an
//! `RwSignal` provided via context, with pure reducer methods so every
//! transition is unit-testable without a DOM.

pub mod board;
pub mod toasts;
