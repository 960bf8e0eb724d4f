//! The consent gate over the physical sensor categories.
//!
//! Every `listen` call queries the host's consent state for the three fixed
//! physical categories backing the catalog — accelerometer, gyroscope,
//! magnetometer — before any sensor is constructed, regardless of which bits
//! the mask actually selects. The result is informational: a denied category
//! does not block construction, because a real denial surfaces later as a
//! per-sensor fault record.

use std::collections::HashMap;
use std::fmt;

use futures::future::try_join_all;
use serde::{Deserialize, Serialize};

use crate::error::PermissionError;
use crate::host::PermissionHost;

/// A physical sensor category the host tracks consent for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionCategory {
    /// Linear acceleration hardware.
    Accelerometer,
    /// Rotation rate hardware.
    Gyroscope,
    /// Magnetic field hardware.
    Magnetometer,
}

impl PermissionCategory {
    /// Every category the gate queries, in query order.
    pub const ALL: [Self; 3] = [Self::Accelerometer, Self::Gyroscope, Self::Magnetometer];

    /// The category's host-facing name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Accelerometer => "accelerometer",
            Self::Gyroscope => "gyroscope",
            Self::Magnetometer => "magnetometer",
        }
    }
}

impl fmt::Display for PermissionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A consent state as the host reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    /// The user has granted access.
    Granted,
    /// The user has denied access.
    Denied,
    /// The host will ask the user on first use.
    Prompt,
}

impl PermissionState {
    /// The state's conventional string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Granted => "granted",
            Self::Denied => "denied",
            Self::Prompt => "prompt",
        }
    }
}

impl fmt::Display for PermissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Consent states per category, as returned by [`check_permissions`].
pub type PermissionReport = HashMap<PermissionCategory, PermissionState>;

/// Queries consent for all of [`PermissionCategory::ALL`] concurrently.
///
/// All three queries are issued up front and the gate resolves only once
/// every one of them has resolved. A single rejected query rejects the whole
/// gate; it is never swallowed.
///
/// # Errors
///
/// Propagates the first [`PermissionError`] any individual query produced.
pub async fn check_permissions<H: PermissionHost>(
    host: &H,
) -> std::result::Result<PermissionReport, PermissionError> {
    let queries = PermissionCategory::ALL
        .iter()
        .map(|category| host.permission_state(*category));
    let states = try_join_all(queries).await?;

    Ok(PermissionCategory::ALL.into_iter().zip(states).collect())
}
