//! Browser push notification setup.
//!
//! Sequences the three host capabilities a web app needs before it can receive
//! push messages: notification permission, service worker registration, and
//! push subscription.
//!
//! # Flow
//!
//! ```text
//! initialize_push_notifications(script_url, options)
//!     │
//!     ├── 1. register_service_worker(script_url)   ── RegistrationFailed
//!     │
//!     ├── 2. request_permission()                   ── PermissionDenied
//!     │
//!     └── 3. subscribe_to_push(registration, opts)  ── SubscriptionFailed
//!             │
//!             └── PushSubscription → caller → backend
//! ```
//!
//! The worker is registered before the permission prompt fires because some
//! browsers require an active worker scope first. The first failing step ends
//! the chain and its error is returned unchanged.
//!
//! # Hosts
//!
//! Nothing here talks to a browser directly. Callers supply a [`PushHost`]
//! that exposes each capability as an `Option`, so a missing capability is a
//! typed condition. `push-setup-wasm` provides the browser implementation.
//!
//! # Modules
//!
//! - [`host`] - Capability traits the orchestrator calls through
//! - [`orchestrator`] - The four operations
//! - [`options`] - Subscription options passed to the host
//! - [`permission`] - Notification permission status
//! - [`subscription`] - Backend-facing subscription record
//! - [`config`] - JSON setup configuration
//! - [`error`] - Error taxonomy

// Rust guideline compliant 2026-02

pub mod config;
pub mod error;
pub mod host;
pub mod options;
pub mod orchestrator;
pub mod permission;
pub mod subscription;

pub use config::PushSetup;
pub use error::{Capability, PushError};
pub use host::{NotificationCapability, PushHost, PushManagerCapability, ServiceWorkerCapability};
pub use options::{ApplicationServerKey, SubscriptionOptions};
pub use orchestrator::{
    initialize_from_setup, initialize_push_notifications, register_service_worker,
    request_permission, subscribe_to_push,
};
pub use permission::PermissionStatus;
pub use subscription::{BrowserSubscription, SubscriptionInfo};
