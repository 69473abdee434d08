use chrono::{NaiveDate, NaiveTime};

use super::event::{DEFAULT_STATUS, Event};

pub fn default_ministries() -> Vec<String> {
    [
        "Daybreak",
        "Prayers",
        "Debater's",
        "Kaka",
        "Waridi Dada",
        "Missions",
        "SFC",
        "Fisher's",
        "Crossroads",
        "Transition Team",
        "YAM",
        "SAFE",
        "Hospitality",
        "Joyful Sounds",
        "Youth Worship Team",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

pub fn sample_events() -> Vec<Event> {
    let rows = [
        (
            1,
            "Youth Prayer Night",
            "Prayers",
            (2024, 7, 15),
            (18, 0),
            "Main Sanctuary",
            "Join us for an evening of powerful prayer and worship",
            45,
        ),
        (
            2,
            "Debate Competition",
            "Debater's",
            (2024, 7, 20),
            (14, 0),
            "Fellowship Hall",
            "Annual inter-ministry debate competition",
            28,
        ),
        (
            3,
            "Morning Devotion",
            "Daybreak",
            (2024, 7, 18),
            (6, 0),
            "Prayer Garden",
            "Start your day with God's word and fellowship",
            32,
        ),
        (
            4,
            "Worship Practice",
            "Youth Worship Team",
            (2024, 7, 22),
            (16, 0),
            "Music Room",
            "Preparing for Sunday worship service",
            15,
        ),
        (
            5,
            "Community Outreach",
            "Missions",
            (2024, 7, 25),
            (9, 0),
            "Kibera Slums",
            "Feeding program and gospel sharing",
            38,
        ),
    ];

    rows.into_iter()
        .filter_map(
            |(id, title, ministry, (y, m, d), (hour, minute), venue, description, attendees)| {
                let date = NaiveDate::from_ymd_opt(y, m, d)?;
                let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
                Some(Event {
                    id,
                    title: title.to_string(),
                    ministry: ministry.to_string(),
                    date,
                    time,
                    venue: venue.to_string(),
                    description: description.to_string(),
                    attendees,
                    status: DEFAULT_STATUS.to_string(),
                })
            },
        )
        .collect()
}
