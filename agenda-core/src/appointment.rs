//! Appointment records.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::DATE_FORMAT;
use crate::error::{AgendaError, AgendaResult};

/// A scheduled interview.
///
/// Older data files use Portuguese field names; they are accepted on read.
/// Missing or `null` string fields read as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, alias = "nome", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, alias = "congregacao", deserialize_with = "null_as_default")]
    pub group: String,
    #[serde(default, alias = "contato", deserialize_with = "null_as_default")]
    pub contact: String,
    #[serde(default, alias = "data", deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, alias = "horario", deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
}

/// User-supplied fields of an appointment that doesn't exist yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAppointment {
    pub name: String,
    pub group: String,
    pub contact: String,
    pub date: String,
    pub time: String,
}

impl NewAppointment {
    /// Build the fields, canonicalizing `date` to `YYYY-MM-DD` and `time` to `HH:MM`.
    ///
    /// An empty time is allowed.
    pub fn new(
        name: impl Into<String>,
        group: impl Into<String>,
        contact: impl Into<String>,
        date: &str,
        time: &str,
    ) -> AgendaResult<Self> {
        Ok(NewAppointment {
            name: name.into(),
            group: group.into(),
            contact: contact.into(),
            date: canonical_date(date)?,
            time: canonical_time(time),
        })
    }

    pub(crate) fn into_appointment(self, id: String) -> Appointment {
        Appointment {
            id,
            name: self.name,
            group: self.group,
            contact: self.contact,
            date: self.date,
            time: self.time,
            completed: false,
        }
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({}) - Contact: {} - {}", self.name, self.group, self.contact, self.date)?;
        if !self.time.is_empty() {
            write!(f, " at {}", self.time)?;
        }
        Ok(())
    }
}

/// Read a JSON `null` the same way as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a `YYYY-MM-DD` date (single-digit parts allowed) and return it zero-padded.
pub fn canonical_date(input: &str) -> AgendaResult<String> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .map_err(|_| AgendaError::InvalidDate(input.to_string()))
}

/// Normalize `H:MM` style input to `HH:MM`. Anything unparseable is kept as typed.
pub fn canonical_time(input: &str) -> String {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|_| trimmed.to_string())
}

/// Generate a timestamp-based id not already taken by `existing`.
pub(crate) fn next_id(existing: &[Appointment], now_millis: i64) -> String {
    let mut candidate = now_millis;
    while existing.iter().any(|a| a.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

// =============================================================================
// Tests
// =============================================================================
