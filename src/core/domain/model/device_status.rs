//! Domain model for the appliance status document.
//!
//! The appliance publishes one XML document per connection on its status
//! port. Element names follow the appliance's NASD schema (`mSerial`,
//! `mSlotsExp`, ...); the JSON view uses camelCase names.

use serde::{Deserialize, Deserializer, Serialize};

/// One parsed snapshot of appliance-wide status plus per-slot drive status.
///
/// The appliance omits elements it has no value for, so every field falls
/// back to its zero value rather than failing the parse.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DeviceStatus {
    /// Appliance serial number.
    #[serde(rename(deserialize = "mSerial", serialize = "serial"))]
    pub serial: String,
    /// Appliance name as configured by the owner.
    #[serde(rename(deserialize = "mName", serialize = "name"))]
    pub name: String,
    /// Firmware version string.
    #[serde(rename(deserialize = "mVersion", serialize = "version"))]
    pub version: String,
    /// Total protected capacity in bytes.
    #[serde(rename(deserialize = "mTotalCapacityProtected", serialize = "totalCapacity"))]
    pub total_capacity: u64,
    /// Used protected capacity in bytes.
    #[serde(rename(deserialize = "mUsedCapacityProtected", serialize = "usedCapacity"))]
    pub used_capacity: u64,
    /// Free protected capacity in bytes.
    #[serde(rename(deserialize = "mFreeCapacityProtected", serialize = "freeCapacity"))]
    pub free_capacity: u64,
    /// DNAS service status code.
    #[serde(rename(deserialize = "DNASStatus", serialize = "dnasStatus"))]
    pub dnas_status: i32,
    /// Appliance-wide status code. Drives the health verdict.
    #[serde(rename(deserialize = "mStatus", serialize = "status"))]
    pub status: i32,
    /// Per-bay drive status, in slot order.
    #[serde(
        rename(deserialize = "mSlotsExp", serialize = "slots"),
        deserialize_with = "slot_sequence"
    )]
    pub slots: Vec<SlotStatus>,
}

/// Status of one physical drive bay.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SlotStatus {
    /// Slot number, counted from zero.
    #[serde(rename(deserialize = "mSlotNumber", serialize = "slotNumber"))]
    pub slot_number: u32,
    /// Slot status code.
    #[serde(rename(deserialize = "mStatus", serialize = "status"))]
    pub status: i32,
    /// Disk state code.
    #[serde(rename(deserialize = "mDiskState", serialize = "diskState"))]
    pub disk_state: i32,
    /// Cumulative error count reported for the drive.
    #[serde(rename(deserialize = "mErrorCount", serialize = "errorCount"))]
    pub error_count: u32,
    /// Drive manufacturer string.
    #[serde(rename(deserialize = "mMake", serialize = "make"))]
    pub make: String,
    /// Drive firmware revision.
    #[serde(rename(deserialize = "mDiskFwRev", serialize = "diskFwRev"))]
    pub disk_fw_rev: String,
    /// Drive serial number.
    #[serde(rename(deserialize = "mSerial", serialize = "serial"))]
    pub serial: String,
    /// Raw physical capacity of the drive in bytes.
    #[serde(rename(deserialize = "mPhysicalCapacity", serialize = "physicalCapacity"))]
    pub physical_capacity: u64,
    /// Rotational speed in RPM, 0 for solid-state drives.
    #[serde(rename(deserialize = "RotationalSpeed", serialize = "rotationalSpeed"))]
    pub rotational_speed: u32,
}

/// Unwraps the `mSlotsExp` container into a flat slot sequence.
///
/// The container's children carry an arbitrary element name, so they are
/// collected by content rather than by tag.
fn slot_sequence<'de, D>(deserializer: D) -> Result<Vec<SlotStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize, Default)]
    #[serde(default)]
    struct SlotsExp {
        #[serde(rename = "$value")]
        slots: Vec<SlotStatus>,
    }

    Ok(SlotsExp::deserialize(deserializer)?.slots)
}
