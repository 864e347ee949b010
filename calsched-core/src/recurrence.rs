//! Weekly recurrence expansion.
//!
//! A recurrence starts from an anchor occurrence and a set of weekdays. Each
//! weekday yields one "first iteration": the nearest matching day in the
//! anchor's own week, or in the following week when that weekday has already
//! passed. First iterations are then repeated every seven days until the
//! termination rule is met.
//!
//! Everything here is pure: the functions build ordered sets of occurrences
//! and leave storing them (and assigning a series) to the calendar.

use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{CalSchedError, CalSchedResult};
use crate::event::Event;

/// Map a pattern letter to its weekday: M T W R F S U, Monday through Sunday.
pub fn weekday_from_letter(letter: char) -> Option<Weekday> {
    match letter {
        'M' => Some(Weekday::Mon),
        'T' => Some(Weekday::Tue),
        'W' => Some(Weekday::Wed),
        'R' => Some(Weekday::Thu),
        'F' => Some(Weekday::Fri),
        'S' => Some(Weekday::Sat),
        'U' => Some(Weekday::Sun),
        _ => None,
    }
}

/// The weekdays an event repeats on, e.g. `"MWF"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayPattern(Vec<Weekday>);

impl WeekdayPattern {
    pub fn weekdays(&self) -> &[Weekday] {
        &self.0
    }
}

impl FromStr for WeekdayPattern {
    type Err = CalSchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let weekdays = s
            .chars()
            .map(|c| weekday_from_letter(c).ok_or(CalSchedError::InvalidWeekday(c)))
            .collect::<CalSchedResult<Vec<_>>>()?;

        if weekdays.is_empty() {
            return Err(CalSchedError::EmptyWeekdayPattern);
        }
        Ok(WeekdayPattern(weekdays))
    }
}

/// When a recurrence stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Exactly this many occurrences, anchor included.
    Count(u32),
    /// Occurrences starting strictly before this date.
    Until(NaiveDate),
}

/// First occurrence of each requested weekday, split by the week it lands in.
#[derive(Debug, Clone, Default)]
pub struct FirstIterations {
    /// Weekdays on or after the anchor's weekday.
    pub this_week: Vec<Event>,
    /// Weekdays before the anchor's weekday, pushed into the next week.
    pub next_week: Vec<Event>,
}

impl FirstIterations {
    /// Both groups merged into the event order.
    pub fn into_ordered(self) -> BTreeSet<Event> {
        self.this_week.into_iter().chain(self.next_week).collect()
    }
}

/// Compute the first iteration of every weekday in `pattern` relative to `anchor`.
pub fn first_iterations(anchor: &Event, pattern: &WeekdayPattern) -> FirstIterations {
    let anchor_ordinal = i64::from(anchor.start().weekday().num_days_from_monday());
    let mut firsts = FirstIterations::default();

    for weekday in pattern.weekdays() {
        let offset = i64::from(weekday.num_days_from_monday()) - anchor_ordinal;
        if offset >= 0 {
            firsts.this_week.push(anchor.shifted_by_days(offset));
        } else {
            firsts.next_week.push(anchor.shifted_by_days(offset + 7));
        }
    }

    firsts
}

/// Repeat first iterations week by week until exactly `count` occurrences exist.
///
/// The anchor is always the first occurrence. A first iteration equal to the
/// anchor collapses into it, so it does not count twice.
pub fn expand_count(anchor: &Event, firsts: &BTreeSet<Event>, count: u32) -> BTreeSet<Event> {
    let target = count as usize;
    let mut occurrences = BTreeSet::from([anchor.shifted_by_days(0)]);
    if firsts.is_empty() {
        return occurrences;
    }

    let mut week = 0;
    while occurrences.len() < target {
        for first in firsts {
            if occurrences.len() >= target {
                break;
            }
            occurrences.insert(first.shifted_by_days(7 * week));
        }
        week += 1;
    }

    occurrences
}

/// Repeat first iterations week by week, keeping occurrences that start before `until`.
///
/// The number of weeks is estimated as the whole weeks between the anchor and
/// `until`; every candidate is still checked, and `until` itself is excluded.
pub fn expand_until(anchor: &Event, firsts: &BTreeSet<Event>, until: NaiveDate) -> BTreeSet<Event> {
    let anchor_date = anchor.start().date();
    let weeks = (until - anchor_date).num_days() / 7;
    let mut occurrences = BTreeSet::new();

    if anchor_date < until {
        occurrences.insert(anchor.shifted_by_days(0));
    }

    for first in firsts {
        for week in 0..=weeks {
            let occurrence = first.shifted_by_days(7 * week);
            if occurrence.start().date() < until {
                occurrences.insert(occurrence);
            }
        }
    }

    occurrences
}

/// Expand `anchor` into every occurrence of its recurrence.
///
/// Fails with [`CalSchedError::CrossDayEvent`] if the anchor does not start and
/// end on the same date.
pub fn occurrences(
    anchor: &Event,
    pattern: &WeekdayPattern,
    termination: Termination,
) -> CalSchedResult<BTreeSet<Event>> {
    if anchor.spans_days() {
        return Err(CalSchedError::CrossDayEvent {
            start: anchor.start(),
            end: anchor.end(),
        });
    }

    let firsts = first_iterations(anchor, pattern).into_ordered();

    Ok(match termination {
        Termination::Count(count) => expand_count(anchor, &firsts, count),
        Termination::Until(until) => expand_until(anchor, &firsts, until),
    })
}
