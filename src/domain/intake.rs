//! Form intake
//!
//! Raw, untrusted form fields as a customer types them. Validation here is
//! the only gate in front of [`Event`] and [`NewCustomer`] construction.

use serde::{Deserialize, Deserializer, Serialize};

use super::customer::NewCustomer;
use super::error::DomainError;
use super::event::Event;
use super::validation::{is_valid_date, is_valid_phone, is_valid_time};

pub const MSG_FILL_ALL_FIELDS: &str = "Please fill all fields.";
pub const MSG_INVALID_PHONE: &str = "Enter valid phone number (7-15 digits).";
pub const MSG_INVALID_DATE: &str = "Enter valid date in DD/MM/YYYY format.";
pub const MSG_INVALID_TIME: &str = "Enter valid time in HH:MM AM/PM format (e.g. 07:30 PM).";
pub const MSG_INVALID_GUEST_COUNT: &str = "Guest count must be a non-negative integer.";
pub const MSG_INVALID_YEARS: &str = "Years completed must be a non-negative integer.";

/// Largest count a form may carry (a signed 32-bit integer)
pub const MAX_COUNT: u32 = i32::MAX as u32;

/// Customer details form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerIntake {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl CustomerIntake {
    pub fn validate(&self) -> Result<NewCustomer, DomainError> {
        let name = self.name.trim();
        let phone = self.phone.trim();
        let address = self.address.trim();

        require_filled(&[name, phone, address])?;
        if !is_valid_phone(phone) {
            return Err(DomainError::invalid_input(MSG_INVALID_PHONE));
        }

        Ok(NewCustomer {
            name: name.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
        })
    }
}

/// Event details form, one shape per event type.
///
/// Counts stay as text until validated; JSON numbers are accepted too.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum EventIntake {
    Marriage {
        #[serde(default)]
        bride: String,
        #[serde(default)]
        groom: String,
        #[serde(default)]
        venue: String,
        #[serde(default)]
        date: String,
        #[serde(default)]
        time: String,
    },
    Birthday {
        #[serde(default)]
        celebrant: String,
        #[serde(default)]
        venue: String,
        #[serde(default)]
        date: String,
        #[serde(default)]
        time: String,
    },
    Engagement {
        #[serde(default)]
        couple_names: String,
        #[serde(default)]
        venue_preference: String,
        #[serde(default, deserialize_with = "text_or_number")]
        guest_count: String,
        #[serde(default)]
        date: String,
        #[serde(default)]
        time: String,
    },
    BabyShower {
        #[serde(default)]
        mother_name: String,
        #[serde(default)]
        theme: String,
        #[serde(default, deserialize_with = "text_or_number")]
        guest_count: String,
        #[serde(default)]
        date: String,
        #[serde(default)]
        time: String,
    },
    Anniversary {
        #[serde(default)]
        couple_names: String,
        #[serde(default, deserialize_with = "text_or_number")]
        years_completed: String,
        #[serde(default)]
        venue_type: String,
        #[serde(default)]
        date: String,
        #[serde(default)]
        time: String,
    },
}

impl EventIntake {
    /// Validate the form and build the event.
    ///
    /// Checks run in a fixed order: required fields, counts, date, time.
    pub fn validate(&self) -> Result<Event, DomainError> {
        match self {
            EventIntake::Marriage {
                bride,
                groom,
                venue,
                date,
                time,
            } => {
                let (bride, groom, venue) = (bride.trim(), groom.trim(), venue.trim());
                let (date, time) = (date.trim(), time.trim());
                require_filled(&[bride, groom, venue, date, time])?;
                require_schedule(date, time)?;
                Ok(Event::marriage(bride, groom, date, time, venue))
            }
            EventIntake::Birthday {
                celebrant,
                venue,
                date,
                time,
            } => {
                let (celebrant, venue) = (celebrant.trim(), venue.trim());
                let (date, time) = (date.trim(), time.trim());
                require_filled(&[celebrant, venue, date, time])?;
                require_schedule(date, time)?;
                Ok(Event::birthday(celebrant, date, time, venue))
            }
            EventIntake::Engagement {
                couple_names,
                venue_preference,
                guest_count,
                date,
                time,
            } => {
                let (couple, preference) = (couple_names.trim(), venue_preference.trim());
                let guests = guest_count.trim();
                let (date, time) = (date.trim(), time.trim());
                require_filled(&[couple, preference, guests, date, time])?;
                let guests = parse_count(guests, MSG_INVALID_GUEST_COUNT)?;
                require_schedule(date, time)?;
                Ok(Event::engagement(couple, preference, guests, date, time))
            }
            EventIntake::BabyShower {
                mother_name,
                theme,
                guest_count,
                date,
                time,
            } => {
                let (mother, theme) = (mother_name.trim(), theme.trim());
                let guests = guest_count.trim();
                let (date, time) = (date.trim(), time.trim());
                require_filled(&[mother, theme, guests, date, time])?;
                let guests = parse_count(guests, MSG_INVALID_GUEST_COUNT)?;
                require_schedule(date, time)?;
                Ok(Event::baby_shower(mother, theme, guests, date, time))
            }
            EventIntake::Anniversary {
                couple_names,
                years_completed,
                venue_type,
                date,
                time,
            } => {
                let (couple, venue_type) = (couple_names.trim(), venue_type.trim());
                let years = years_completed.trim();
                let (date, time) = (date.trim(), time.trim());
                require_filled(&[couple, years, venue_type, date, time])?;
                let years = parse_count(years, MSG_INVALID_YEARS)?;
                require_schedule(date, time)?;
                Ok(Event::anniversary(couple, venue_type, years, date, time))
            }
        }
    }
}

fn require_filled(fields: &[&str]) -> Result<(), DomainError> {
    if fields.iter().any(|f| f.is_empty()) {
        return Err(DomainError::invalid_input(MSG_FILL_ALL_FIELDS));
    }
    Ok(())
}

fn require_schedule(date: &str, time: &str) -> Result<(), DomainError> {
    if !is_valid_date(date) {
        return Err(DomainError::invalid_input(MSG_INVALID_DATE));
    }
    if !is_valid_time(time) {
        return Err(DomainError::invalid_input(MSG_INVALID_TIME));
    }
    Ok(())
}

fn parse_count(text: &str, message: &'static str) -> Result<u32, DomainError> {
    text.parse::<u32>()
        .ok()
        .filter(|count| *count <= MAX_COUNT)
        .ok_or_else(|| DomainError::invalid_input(message))
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn baby_shower(guests: &str, date: &str, time: &str) -> EventIntake {
        EventIntake::BabyShower {
            mother_name: "Priya".to_string(),
            theme: "Jungle".to_string(),
            guest_count: guests.to_string(),
            date: date.to_string(),
            time: time.to_string(),
        }
    }

    fn rejection(intake: &EventIntake) -> String {
        intake.validate().unwrap_err().to_string()
    }

    #[test]
    fn test_customer_intake_trims_and_accepts() {
        let intake = CustomerIntake {
            name: "  Asha Rao ".to_string(),
            phone: " 9876543210 ".to_string(),
            address: "12 MG Road".to_string(),
        };
        let customer = intake.validate().unwrap();
        assert_eq!(customer.name, "Asha Rao");
        assert_eq!(customer.phone, "9876543210");
    }

    #[test]
    fn test_customer_intake_requires_all_fields() {
        let intake = CustomerIntake {
            name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            address: "   ".to_string(),
        };
        assert_eq!(intake.validate().unwrap_err().to_string(), MSG_FILL_ALL_FIELDS);
    }

    #[test]
    fn test_customer_intake_rejects_bad_phone() {
        let intake = CustomerIntake {
            name: "Asha".to_string(),
            phone: "98765-43210".to_string(),
            address: "12 MG Road".to_string(),
        };
        assert_eq!(intake.validate().unwrap_err().to_string(), MSG_INVALID_PHONE);
    }

    #[test]
    fn test_baby_shower_intake_builds_event() {
        let event = baby_shower("20", "15/08/2025", "04:00 PM").validate().unwrap();
        assert_eq!(event.price(), dec!(26000));
        assert_eq!(event.venue(), "");
        assert_eq!(event.extra_details(), "Mother: Priya, Theme: Jungle, Guests: 20");
    }

    #[test]
    fn test_count_must_be_non_negative_integer() {
        assert_eq!(rejection(&baby_shower("-1", "15/08/2025", "04:00 PM")), MSG_INVALID_GUEST_COUNT);
        assert_eq!(rejection(&baby_shower("twenty", "15/08/2025", "04:00 PM")), MSG_INVALID_GUEST_COUNT);
        assert_eq!(rejection(&baby_shower("2.5", "15/08/2025", "04:00 PM")), MSG_INVALID_GUEST_COUNT);
    }

    #[test]
    fn test_count_capped_at_signed_32_bit() {
        let event = baby_shower("2147483647", "15/08/2025", "04:00 PM").validate().unwrap();
        assert_eq!(event.price(), dec!(644245114100));
        assert_eq!(rejection(&baby_shower("2147483648", "15/08/2025", "04:00 PM")), MSG_INVALID_GUEST_COUNT);
        assert_eq!(rejection(&baby_shower("4294967296", "15/08/2025", "04:00 PM")), MSG_INVALID_GUEST_COUNT);
    }

    #[test]
    fn test_checks_run_in_order() {
        // Empty field wins over everything else
        assert_eq!(rejection(&baby_shower("", "bad", "bad")), MSG_FILL_ALL_FIELDS);
        // Count is checked before the date
        assert_eq!(rejection(&baby_shower("x", "bad", "bad")), MSG_INVALID_GUEST_COUNT);
        // Date before time
        assert_eq!(rejection(&baby_shower("5", "31/04/2024", "bad")), MSG_INVALID_DATE);
        assert_eq!(rejection(&baby_shower("5", "30/04/2024", "7:30PM")), MSG_INVALID_TIME);
    }

    #[test]
    fn test_anniversary_years_message() {
        let intake = EventIntake::Anniversary {
            couple_names: "Sita & Ram".to_string(),
            years_completed: "-3".to_string(),
            venue_type: "Banquet".to_string(),
            date: "01/01/2026".to_string(),
            time: "08:00 PM".to_string(),
        };
        assert_eq!(rejection(&intake), MSG_INVALID_YEARS);
    }

    #[test]
    fn test_anniversary_years_at_cap() {
        let intake = EventIntake::Anniversary {
            couple_names: "Sita & Ram".to_string(),
            years_completed: "2147483647".to_string(),
            venue_type: "Banquet".to_string(),
            date: "01/01/2026".to_string(),
            time: "08:00 PM".to_string(),
        };
        assert_eq!(intake.validate().unwrap().price(), dec!(2147483672000));
    }

    #[test]
    fn test_marriage_requires_venue() {
        let intake = EventIntake::Marriage {
            bride: "Asha".to_string(),
            groom: "Ravi".to_string(),
            venue: String::new(),
            date: "01/12/2025".to_string(),
            time: "07:30 PM".to_string(),
        };
        assert_eq!(rejection(&intake), MSG_FILL_ALL_FIELDS);
    }

    #[test]
    fn test_intake_accepts_numeric_json_counts() {
        let json = serde_json::json!({
            "event_type": "engagement",
            "couple_names": "Kiran & Dev",
            "venue_preference": "Lawn",
            "guest_count": 100,
            "date": "14/02/2026",
            "time": "06:30 PM"
        });
        let intake: EventIntake = serde_json::from_value(json).unwrap();
        let event = intake.validate().unwrap();
        assert_eq!(event.price(), dec!(80000));
        assert_eq!(event.venue(), "Lawn");
    }

    #[test]
    fn test_intake_missing_fields_default_to_empty() {
        let json = serde_json::json!({ "event_type": "birthday", "celebrant": "Meera" });
        let intake: EventIntake = serde_json::from_value(json).unwrap();
        assert_eq!(intake.validate().unwrap_err().to_string(), MSG_FILL_ALL_FIELDS);
    }
}
