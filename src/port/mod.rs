//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌──────────────┐      ┌──────────────┐      ┌──────────────────┐
//!   │ HTTP adapter │ ───▶ │ ProductStore │ ◀─── │ Postgres / Memory│
//!   │  (inbound)   │      │    (port)    │      │    (outbound)    │
//!   └──────────────┘      └──────────────┘      └──────────────────┘
//! ```

pub mod outbound;

pub use outbound::store::ProductStore;
