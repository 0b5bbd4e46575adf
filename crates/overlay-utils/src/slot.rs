//! Configuration slot keys for overlay definitions.
//!
//! An overlay definition may carry optional static configuration: the base it
//! extends, a debug instance name, the events it exposes securely, and the
//! public attributes it accepts. Each of those lives under an [`OverlaySlot`]
//! rather than under a plain string key, so slot configuration can never
//! collide with an ordinary named field.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique key for one optional piece of static overlay configuration.
///
/// Slots are a closed set and a type of their own: a slot only ever equals
/// itself, never a string or a number, which makes it safe as a map key next
/// to user-provided field names.
///
/// ```rust
/// use std::collections::HashMap;
/// use overlay_utils::OverlaySlot;
///
/// let mut statics = HashMap::new();
/// statics.insert(OverlaySlot::InstanceName, "custom-overlay");
/// assert_eq!(statics[&OverlaySlot::InstanceName], "custom-overlay");
/// assert!(!statics.contains_key(&OverlaySlot::Parent));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverlaySlot {
    /// Base definition an extended overlay builds on.
    Parent,
    /// Name the overlay instance is registered under, for easier debugging.
    InstanceName,
    /// Secure access to overlay events.
    Secure,
    /// Public attribute names the overlay accepts values for.
    Properties,
    /// Public attribute names that must have a value assigned.
    RequiredProperties,
}

impl OverlaySlot {
    /// All slots, in declaration order.
    pub const ALL: [OverlaySlot; 5] = [
        OverlaySlot::Parent,
        OverlaySlot::InstanceName,
        OverlaySlot::Secure,
        OverlaySlot::Properties,
        OverlaySlot::RequiredProperties,
    ];

    /// Human-readable description, used for debugging only.
    ///
    /// Descriptions are not identities: two slots never compare equal because
    /// of their descriptions.
    pub fn description(self) -> &'static str {
        match self {
            OverlaySlot::Parent => "parent",
            OverlaySlot::InstanceName => "instanceName",
            OverlaySlot::Secure => "secure event",
            OverlaySlot::Properties => "properties",
            OverlaySlot::RequiredProperties => "requiredProperties",
        }
    }
}

impl fmt::Display for OverlaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description())
    }
}

pub const PARENT: OverlaySlot = OverlaySlot::Parent;
pub const INSTANCE_NAME: OverlaySlot = OverlaySlot::InstanceName;
pub const SECURE: OverlaySlot = OverlaySlot::Secure;
pub const PROPERTIES: OverlaySlot = OverlaySlot::Properties;
pub const REQUIRED_PROPERTIES: OverlaySlot = OverlaySlot::RequiredProperties;
