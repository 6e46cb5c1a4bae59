//! Push setup operations.
//!
//! Each operation checks that the capability it needs is present, makes a
//! single host call, and translates the outcome into [`PushError`]. The
//! operations hold no state between calls; permission status and registration
//! identity live in the host.

// Rust guideline compliant 2026-02

use crate::config::PushSetup;
use crate::error::{Capability, PushError};
use crate::host::PushHost;
use crate::options::SubscriptionOptions;
use crate::permission::PermissionStatus;

/// Request notification permission.
///
/// Succeeds only when the host reports `granted`. Any other answer fails with
/// [`PushError::PermissionDenied`] carrying the observed status.
pub async fn request_permission<H: PushHost>(
    host: &H,
) -> Result<PermissionStatus, PushError<H::Error>> {
    let notifications = host
        .notifications()
        .ok_or(PushError::UnsupportedCapability(Capability::Notifications))?;

    let status = notifications
        .request_permission()
        .await
        .map_err(PushError::PermissionRequestFailed)?;

    if status.is_granted() {
        log::debug!("[Push] Notification permission granted");
        Ok(status)
    } else {
        log::debug!("[Push] Notification permission not granted ({status})");
        Err(PushError::PermissionDenied(status))
    }
}

/// Register the service worker at `script_url`.
pub async fn register_service_worker<H: PushHost>(
    host: &H,
    script_url: &str,
) -> Result<H::Registration, PushError<H::Error>> {
    let service_worker = host
        .service_worker()
        .ok_or(PushError::UnsupportedCapability(Capability::ServiceWorker))?;

    let registration = service_worker
        .register(script_url)
        .await
        .map_err(PushError::RegistrationFailed)?;

    log::debug!("[Push] Service worker registered: {script_url}");
    Ok(registration)
}

/// Subscribe `registration` to push messages.
///
/// The registration must expose push management, and the host's current
/// permission must be `granted`; these are checked in that order. The host's
/// subscription is returned as-is.
pub async fn subscribe_to_push<H: PushHost>(
    host: &H,
    registration: &H::Registration,
    options: &SubscriptionOptions,
) -> Result<H::Subscription, PushError<H::Error>> {
    let push_manager = host
        .push_manager(registration)
        .ok_or(PushError::UnsupportedCapability(Capability::PushManager))?;

    // No notification support means nothing was ever granted.
    let permission = host
        .notifications()
        .map_or(PermissionStatus::Default, |n| n.permission());
    if !permission.is_granted() {
        return Err(PushError::PermissionNotGranted);
    }

    let subscription = push_manager
        .subscribe(options)
        .await
        .map_err(PushError::SubscriptionFailed)?;

    log::debug!("[Push] Push subscription created");
    Ok(subscription)
}

/// Register the worker, request permission, then subscribe.
///
/// Steps run strictly in that order and the first failure is returned
/// unchanged; later steps are never started.
pub async fn initialize_push_notifications<H: PushHost>(
    host: &H,
    script_url: &str,
    options: &SubscriptionOptions,
) -> Result<H::Subscription, PushError<H::Error>> {
    let result = run_steps(host, script_url, options).await;
    if result.is_err() {
        log::debug!("[Push] Initialization stopped before a subscription was created");
    }
    result
}

/// [`initialize_push_notifications`] with the worker URL and options from `setup`.
pub async fn initialize_from_setup<H: PushHost>(
    host: &H,
    setup: &PushSetup,
) -> Result<H::Subscription, PushError<H::Error>> {
    initialize_push_notifications(host, &setup.service_worker_url, &setup.subscription).await
}

async fn run_steps<H: PushHost>(
    host: &H,
    script_url: &str,
    options: &SubscriptionOptions,
) -> Result<H::Subscription, PushError<H::Error>> {
    let registration = register_service_worker(host, script_url).await?;
    request_permission(host).await?;
    subscribe_to_push(host, &registration, options).await
}
