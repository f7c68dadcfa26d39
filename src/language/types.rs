//! Types representing a parsed ERV campaign. These serialize (via serde) to
//! the camelCase JSON document consumed by editors.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A complete campaign: the trigger saying when it fires, and the ordered
/// steps it performs. A parse always produces one of these; if the trigger
/// line was not understood the trigger is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Campaign {
    #[serde(flatten)]
    pub trigger: Option<Trigger>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "triggerKind", rename_all_fields = "camelCase")]
pub enum Trigger {
    /// "when a user registers"
    Event { event_type: String },

    /// "every Monday and Friday at 9am, 1.30pm". Either list is absent if
    /// one of its items was invalid.
    Recurring {
        #[serde(skip_serializing_if = "Option::is_none")]
        weekdays: Option<Vec<Weekday>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        hours: Option<Vec<Time>>,
    },

    /// "on 01/12/14 at 3pm". The date and time are kept as written.
    OneOff { local_datetime: String },
}

impl Trigger {
    pub fn kind(&self) -> &'static str {
        match self {
            Trigger::Event { .. } => "Event",
            Trigger::Recurring { .. } => "Recurring",
            Trigger::OneOff { .. } => "OneOff",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Email {
        template_id: String,
        custom_fields: Vec<CustomField>,
    },
    Condition {
        predicate_id: String,
    },
    Wait {
        wait_minutes: Option<u32>,
    },
    // placeholder for a line that is not a step, keeping one entry per line
    Unrecognized,
}

// Written out by hand so that the placeholder serializes as an empty map
// rather than carrying a kind of its own.
impl Serialize for Step {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            Step::Email {
                template_id,
                custom_fields,
            } => {
                map.serialize_entry("stepKind", "Email")?;
                map.serialize_entry("templateId", template_id)?;
                map.serialize_entry("customFields", custom_fields)?;
            }
            Step::Condition { predicate_id } => {
                map.serialize_entry("stepKind", "Condition")?;
                map.serialize_entry("predicateId", predicate_id)?;
            }
            Step::Wait { wait_minutes } => {
                map.serialize_entry("stepKind", "Wait")?;
                if let Some(minutes) = wait_minutes {
                    map.serialize_entry("waitMinutes", minutes)?;
                }
            }
            Step::Unrecognized => {}
        }
        map.end()
    }
}

/// A key/value parameter passed along to an email template. Keys are not
/// required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustomField {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    pub fn number(self) -> u8 {
        self as u8
    }
}

impl Serialize for Weekday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

/// A time of day as written in a recurring trigger. Afternoon times carry
/// 12 added to the hour, so "12pm" is hour 24.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
}

impl Time {
    /// Encode as `hour * 100 + minute`, so 1.30pm is 1330.
    pub fn encoded(self) -> u16 {
        self.hour as u16 * 100 + self.minute as u16
    }
}

impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.encoded())
    }
}
