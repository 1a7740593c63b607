/// Storage key of the appointment list blob.
pub const APPOINTMENTS_KEY: &str = "appointments";

/// Storage key of the mirrored calendar event blob.
pub const CALENDAR_EVENTS_KEY: &str = "calendar_events";

/// Joins the date and time of a mirrored event. Starts with a space so the
/// date is always the first space-separated token.
pub const TIME_SEPARATOR: &str = " às ";

/// Canonical date format used as grouping key.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
