//! Semesters, weekdays and the weekday-period slots a course occupies.

use crate::text::squash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Semester {
    S1,
    S2,
    A1,
    A2,
    /// Winter intensive term.
    W,
}

impl Semester {
    pub fn code(self) -> &'static str {
        match self {
            Semester::S1 => "S1",
            Semester::S2 => "S2",
            Semester::A1 => "A1",
            Semester::A2 => "A2",
            Semester::W => "W",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "S1" => Some(Semester::S1),
            "S2" => Some(Semester::S2),
            "A1" => Some(Semester::A1),
            "A2" => Some(Semester::A2),
            "W" => Some(Semester::W),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

const WEEKDAY_KANJI: [char; 7] = ['月', '火', '水', '木', '金', '土', '日'];

impl Weekday {
    /// Zero-based index the search endpoint counts weekdays with.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Weekday::Mon),
            1 => Some(Weekday::Tue),
            2 => Some(Weekday::Wed),
            3 => Some(Weekday::Thu),
            4 => Some(Weekday::Fri),
            5 => Some(Weekday::Sat),
            6 => Some(Weekday::Sun),
            _ => None,
        }
    }
}

/// One weekday-period pair, e.g. 月曜3限.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub weekday: Weekday,
    /// 1-based period within the day.
    pub period: u8,
}

/// Parse a period cell like `月曜3限` or `月曜3限、木曜3限`.
///
/// Intensive courses (`集中`) and per-semester composites like
/// `S1: 集中、A1: 月曜3限 他` have no fixed slots and come back empty.
/// Tokens that name no weekday or period are skipped.
pub fn parse_slots(text: &str) -> Vec<Slot> {
    let text = squash(text);
    if text.contains(':') || text.contains('：') || text.contains("集中") {
        return Vec::new();
    }
    text.split('、').filter_map(parse_one).collect()
}

fn parse_one(token: &str) -> Option<Slot> {
    let weekday = WEEKDAY_KANJI
        .iter()
        .position(|kanji| token.contains(*kanji))
        .and_then(Weekday::from_index)?;
    let digits: String = token
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    let period = digits.parse().ok()?;
    Some(Slot { weekday, period })
}
