use crate::models::Sanitize;
use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ContextTagKey(&'static str);

impl ContextTagKey {
    const fn new(key: &'static str) -> Self {
        ContextTagKey(key)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Serialize for ContextTagKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0)
    }
}

pub type Tags = BTreeMap<ContextTagKey, String>;

/// Unique client device id. Computer name in most cases.
pub const DEVICE_ID: ContextTagKey = ContextTagKey::new("ai.device.id");

/// Device locale using <language>-<REGION> pattern, following RFC 5646.
/// Example 'en-US'.
pub const DEVICE_LOCALE: ContextTagKey = ContextTagKey::new("ai.device.locale");

/// Operating system name and version of the device the end user of the
/// application is using. Example 'Windows 10 Pro 10.0.10586.0'.
pub const DEVICE_OS_VERSION: ContextTagKey = ContextTagKey::new("ai.device.osVersion");

/// The type of the device the end user of the application is using. Used
/// primarily to distinguish JavaScript telemetry from server side telemetry.
pub const DEVICE_TYPE: ContextTagKey = ContextTagKey::new("ai.device.type");

/// SDK version. See
/// https://github.com/Microsoft/ApplicationInsights-Home/blob/master/SDK-AUTHORING.md#sdk-version-specification
/// for information.
pub const INTERNAL_SDK_VERSION: ContextTagKey = ContextTagKey::new("ai.internal.sdkVersion");

impl Sanitize for Tags {
    fn sanitize(&mut self) {
        for (key, value) in self.iter_mut() {
            value.truncate(match *key {
                DEVICE_ID => 1024,
                DEVICE_LOCALE => 64,
                DEVICE_OS_VERSION => 256,
                DEVICE_TYPE => 64,
                INTERNAL_SDK_VERSION => 64,
                _ => 0,
            });
        }
    }
}
