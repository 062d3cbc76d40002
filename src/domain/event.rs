//! Event model
//!
//! The five bookable event types. Every event shares a schedule (date,
//! time, venue) and carries its own details; pricing and the stored
//! detail text are a single exhaustive match over those details.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Event type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Marriage,
    Birthday,
    Engagement,
    BabyShower,
    Anniversary,
}

impl EventType {
    /// All event types, in the order they are offered to customers
    pub const ALL: [EventType; 5] = [
        EventType::Marriage,
        EventType::Birthday,
        EventType::Engagement,
        EventType::BabyShower,
        EventType::Anniversary,
    ];

    /// Label written to the `event_type` column of stored bookings
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Marriage => "Marriage",
            EventType::Birthday => "Birthday Party",
            EventType::Engagement => "Engagement Ceremony",
            EventType::BabyShower => "Baby Shower",
            EventType::Anniversary => "Anniversary Celebration",
        }
    }

    /// snake_case tag used on the wire
    pub fn tag(&self) -> &'static str {
        match self {
            EventType::Marriage => "marriage",
            EventType::Birthday => "birthday",
            EventType::Engagement => "engagement",
            EventType::BabyShower => "baby_shower",
            EventType::Anniversary => "anniversary",
        }
    }

    /// Human-readable pricing rule
    pub fn pricing_rule(&self) -> &'static str {
        match self {
            EventType::Marriage => "50000 flat",
            EventType::Birthday => "15000 flat",
            EventType::Engagement => "30000 + 500 per guest",
            EventType::BabyShower => "20000 + 300 per guest",
            EventType::Anniversary => "25000 + 1000 per year completed",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for an unrecognised event type name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown event type: {0}")]
pub struct UnknownEventType(pub String);

impl FromStr for EventType {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        EventType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s) || t.tag() == s)
            .ok_or_else(|| UnknownEventType(s.to_string()))
    }
}

/// Date, time and venue shared by every event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSchedule {
    /// `DD/MM/YYYY`
    pub date: String,
    /// `HH:MM AM`
    pub time: String,
    /// Free text, empty when the event type does not ask for one
    pub venue: String,
}

impl EventSchedule {
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        venue: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            venue: venue.into(),
        }
    }
}

/// Type-specific event details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum EventDetails {
    Marriage {
        bride: String,
        groom: String,
    },
    Birthday {
        celebrant: String,
    },
    Engagement {
        couple_names: String,
        venue_preference: String,
        guest_count: u32,
    },
    BabyShower {
        mother_name: String,
        theme: String,
        guest_count: u32,
    },
    Anniversary {
        couple_names: String,
        venue_type: String,
        years_completed: u32,
    },
}

impl EventDetails {
    pub fn event_type(&self) -> EventType {
        match self {
            EventDetails::Marriage { .. } => EventType::Marriage,
            EventDetails::Birthday { .. } => EventType::Birthday,
            EventDetails::Engagement { .. } => EventType::Engagement,
            EventDetails::BabyShower { .. } => EventType::BabyShower,
            EventDetails::Anniversary { .. } => EventType::Anniversary,
        }
    }

    /// Price of the event, a pure function of the details
    pub fn price(&self) -> Decimal {
        match self {
            EventDetails::Marriage { .. } => Decimal::from(50_000),
            EventDetails::Birthday { .. } => Decimal::from(15_000),
            EventDetails::Engagement { guest_count, .. } => {
                Decimal::from(30_000) + Decimal::from(500) * Decimal::from(*guest_count)
            }
            EventDetails::BabyShower { guest_count, .. } => {
                Decimal::from(20_000) + Decimal::from(300) * Decimal::from(*guest_count)
            }
            EventDetails::Anniversary {
                years_completed, ..
            } => Decimal::from(25_000) + Decimal::from(1_000) * Decimal::from(*years_completed),
        }
    }

    /// Detail text stored in `extra_details`. The layout is fixed; existing
    /// rows depend on it.
    pub fn extra_details(&self) -> String {
        match self {
            EventDetails::Marriage { bride, groom } => {
                format!("Bride: {bride}, Groom: {groom}")
            }
            EventDetails::Birthday { celebrant } => format!("Birthday Name: {celebrant}"),
            EventDetails::Engagement {
                couple_names,
                guest_count,
                ..
            } => format!("Couple: {couple_names}, Guests: {guest_count}"),
            EventDetails::BabyShower {
                mother_name,
                theme,
                guest_count,
            } => format!("Mother: {mother_name}, Theme: {theme}, Guests: {guest_count}"),
            EventDetails::Anniversary {
                couple_names,
                venue_type,
                years_completed,
            } => format!("Couple: {couple_names}, Years: {years_completed}, Venue: {venue_type}"),
        }
    }
}

/// A fully specified event booking request
///
/// Inputs are trusted: build events through [`crate::domain::intake`] when
/// the fields come straight from a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    schedule: EventSchedule,
    details: EventDetails,
}

impl Event {
    pub fn new(schedule: EventSchedule, details: EventDetails) -> Self {
        Self { schedule, details }
    }

    pub fn marriage(
        bride: impl Into<String>,
        groom: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        venue: impl Into<String>,
    ) -> Self {
        Self::new(
            EventSchedule::new(date, time, venue),
            EventDetails::Marriage {
                bride: bride.into(),
                groom: groom.into(),
            },
        )
    }

    pub fn birthday(
        celebrant: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        venue: impl Into<String>,
    ) -> Self {
        Self::new(
            EventSchedule::new(date, time, venue),
            EventDetails::Birthday {
                celebrant: celebrant.into(),
            },
        )
    }

    /// The venue preference doubles as the booking venue.
    pub fn engagement(
        couple_names: impl Into<String>,
        venue_preference: impl Into<String>,
        guest_count: u32,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        let venue_preference = venue_preference.into();
        Self::new(
            EventSchedule::new(date, time, venue_preference.clone()),
            EventDetails::Engagement {
                couple_names: couple_names.into(),
                venue_preference,
                guest_count,
            },
        )
    }

    /// Baby showers do not collect a venue.
    pub fn baby_shower(
        mother_name: impl Into<String>,
        theme: impl Into<String>,
        guest_count: u32,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self::new(
            EventSchedule::new(date, time, String::new()),
            EventDetails::BabyShower {
                mother_name: mother_name.into(),
                theme: theme.into(),
                guest_count,
            },
        )
    }

    /// The venue type doubles as the booking venue.
    pub fn anniversary(
        couple_names: impl Into<String>,
        venue_type: impl Into<String>,
        years_completed: u32,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        let venue_type = venue_type.into();
        Self::new(
            EventSchedule::new(date, time, venue_type.clone()),
            EventDetails::Anniversary {
                couple_names: couple_names.into(),
                venue_type,
                years_completed,
            },
        )
    }

    pub fn event_type(&self) -> EventType {
        self.details.event_type()
    }

    pub fn price(&self) -> Decimal {
        self.details.price()
    }

    pub fn extra_details(&self) -> String {
        self.details.extra_details()
    }

    pub fn date(&self) -> &str {
        &self.schedule.date
    }

    pub fn time(&self) -> &str {
        &self.schedule.time
    }

    pub fn venue(&self) -> &str {
        &self.schedule.venue
    }

    pub fn schedule(&self) -> &EventSchedule {
        &self.schedule
    }

    pub fn details(&self) -> &EventDetails {
        &self.details
    }
}
