//! # HTTP Routes
//!
//! ## Route Organization
//! ```text
//! routes/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── receipts.rs  ◄─── Submit receipts, look up points
//! └── health.rs    ◄─── Liveness
//! ```
//!
//! Every handler takes only `State<AppState>` plus its own extractors and
//! returns `ApiResult<Json<T>>`.

pub mod health;
pub mod receipts;
