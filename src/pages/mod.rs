//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The board is the only screen. The page owns orchestration — every remote
//! operation funnels through its actions — and delegates rendering details
//! to `components`.

pub mod board;
