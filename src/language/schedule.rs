//! Parsing of the small value tokens found in campaign lines: lists of
//! weekdays, times of day, and wait units.

use super::types::{Time, Weekday};

/// Split a sentence-style list like "Monday, Wednesday and Friday" into its
/// items. Items are separated by a comma or the word " and "; a comma
/// followed by "and" leaves an empty item which is dropped.
pub fn split_list(input: &str) -> Vec<&str> {
    let re = regex!(r",| and ");

    re.split(input)
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect()
}

impl Weekday {
    /// Look up a day by its English name, ignoring case.
    pub fn from_name(name: &str) -> Option<Weekday> {
        let day = match name
            .to_lowercase()
            .as_str()
        {
            "monday" => Weekday::Monday,
            "tuesday" => Weekday::Tuesday,
            "wednesday" => Weekday::Wednesday,
            "thursday" => Weekday::Thursday,
            "friday" => Weekday::Friday,
            "saturday" => Weekday::Saturday,
            "sunday" => Weekday::Sunday,
            _ => return None,
        };
        Some(day)
    }
}

/// Parse a list of weekdays. On failure the first item that isn't a day is
/// returned and the rest of the list is not examined.
pub fn parse_weekdays(input: &str) -> Result<Vec<Weekday>, &str> {
    let items = split_list(input);
    if items.is_empty() {
        return Err(input.trim());
    }

    items
        .into_iter()
        .map(|item| Weekday::from_name(item).ok_or(item))
        .collect()
}

/// Parse a time token in the form "9am" or "3.30pm".
pub fn parse_time(input: &str) -> Option<Time> {
    let re = regex!(r"(?i)^([0-9.]+)(am|pm)$");

    let cap = re.captures(input)?;
    let digits = cap
        .get(1)?
        .as_str();
    let meridiem = cap
        .get(2)?
        .as_str()
        .to_ascii_lowercase();

    let mut parts = digits.split('.');
    let hour = parts.next()?;
    let minute = parts.next();
    if parts
        .next()
        .is_some()
    {
        return None;
    }

    let hour: u8 = hour
        .parse()
        .ok()?;
    let minute: u8 = match minute {
        Some(minute) => minute
            .parse()
            .ok()?,
        None => 0,
    };

    if hour > 12 || minute > 59 {
        return None;
    }

    let hour = match meridiem.as_str() {
        "am" if hour == 12 => 0,
        "am" => hour,
        "pm" => hour + 12,
        _ => return None,
    };

    Some(Time { hour, minute })
}

/// Parse a list of times. On failure the first invalid token is returned.
pub fn parse_times(input: &str) -> Result<Vec<Time>, &str> {
    let items = split_list(input);
    if items.is_empty() {
        return Err(input.trim());
    }

    items
        .into_iter()
        .map(|item| parse_time(item).ok_or(item))
        .collect()
}

/// The number of minutes in one of the given unit, if it is a unit a wait
/// step understands.
pub fn wait_multiplier(unit: &str) -> Option<u32> {
    match unit
        .to_lowercase()
        .as_str()
    {
        "minute" | "minutes" | "mins" => Some(1),
        "hour" | "hours" => Some(60),
        "day" | "days" => Some(60 * 24),
        _ => None,
    }
}
