use calsched_core::time::{format_date_time, parse_date, parse_date_time};
use calsched_core::{Availability, CalSchedError, Calendar, CalendarConfig, Event, Status};

fn starts(calendar: &Calendar) -> Vec<String> {
    calendar
        .events()
        .map(|e| format_date_time(&e.start()))
        .collect()
}

#[test]
fn lunch_shows_up_on_its_day() {
    let mut calendar = Calendar::new();
    calendar
        .create_single_event("Lunch", "2024-07-01T12:00", "2024-07-01T13:00")
        .unwrap();

    let events = calendar.events_on_date("2024-07-01").unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].subject(), "Lunch");
    assert!(calendar.events_on_date("2024-07-02").unwrap().is_empty());
}

#[test]
fn all_day_event_reads_back_fixed_window() {
    let mut calendar = Calendar::new();
    calendar.create_single_all_day("Holiday", "2024-07-04").unwrap();

    let event = calendar.events().next().unwrap();
    assert!(event.is_all_day());
    assert_eq!(format_date_time(&event.start()), "2024-07-04T08:00");
    assert_eq!(format_date_time(&event.end()), "2024-07-04T17:00");
}

#[test]
fn weekly_gym_twice() {
    let mut calendar = Calendar::new();
    let series = calendar
        .create_recurring_n_times("Gym", "2024-07-02T18:00", "2024-07-02T19:00", "T", 2)
        .unwrap()
        .expect("two occurrences form a series");

    assert_eq!(starts(&calendar), vec!["2024-07-02T18:00", "2024-07-09T18:00"]);
    assert!(calendar.events().all(|e| e.series() == Some(series)));
}

#[test]
fn onward_subject_edit_leaves_earlier_weeks() {
    let mut calendar = Calendar::new();
    calendar
        .create_recurring_n_times("Standup", "2024-07-01T09:00", "2024-07-01T09:15", "M", 3)
        .unwrap();

    calendar
        .edit_onward("subject", "Standup", "2024-07-08T09:00", "Retro")
        .unwrap();

    let labels: Vec<_> = calendar
        .events()
        .map(|e| (e.start().date().to_string(), e.subject().to_string()))
        .collect();
    assert_eq!(
        labels,
        vec![
            ("2024-07-01".to_string(), "Standup".to_string()),
            ("2024-07-08".to_string(), "Retro".to_string()),
            ("2024-07-15".to_string(), "Retro".to_string()),
        ]
    );
}

#[test]
fn status_boundary_is_exclusive() {
    let mut calendar = Calendar::new();
    calendar
        .create_single_event("Meeting", "2024-07-01T09:00", "2024-07-01T10:00")
        .unwrap();

    assert_eq!(calendar.status_at("2024-07-01T09:30").unwrap(), Availability::Busy);
    assert_eq!(
        calendar.status_at("2024-07-01T09:00").unwrap().to_string(),
        "available"
    );
}

#[test]
fn exact_range_is_not_returned() {
    let mut calendar = Calendar::new();
    calendar
        .create_single_event("Focus", "2024-07-01T13:00", "2024-07-01T15:00")
        .unwrap();

    assert!(calendar
        .events_between("2024-07-01T13:00", "2024-07-01T15:00")
        .unwrap()
        .is_empty());
    assert_eq!(
        calendar
            .events_between("2024-07-01T12:59", "2024-07-01T15:01")
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn single_time_edit_detaches_from_large_series() {
    let mut calendar = Calendar::new();
    let series = calendar
        .create_recurring_all_day_n_times("Office", "2024-07-01", "MTWRF", 10)
        .unwrap()
        .unwrap();
    assert_eq!(calendar.series(series).count(), 10);

    calendar
        .edit_single(
            "start",
            "Office",
            "2024-07-03T08:00",
            "2024-07-03T17:00",
            "2024-07-03T10:00",
        )
        .unwrap();

    let edited = calendar
        .find("Office", parse_date_time("2024-07-03T10:00").unwrap())
        .unwrap();
    assert_eq!(edited.series(), None);
    assert!(!edited.is_all_day());
    assert_eq!(calendar.series(series).count(), 9);
}

#[test]
fn recurring_until_stays_before_end_date() {
    let mut calendar = Calendar::new();
    let until = parse_date("2024-08-01").unwrap();
    calendar
        .create_recurring_until(
            "Yoga",
            "2024-07-03T07:00",
            "2024-07-03T08:00",
            "MWF",
            "2024-08-01",
        )
        .unwrap();

    assert_eq!(calendar.len(), 13);
    assert!(calendar.events().all(|e| e.start().date() < until));
}

#[test]
fn description_only_duplicates_are_absorbed() {
    let mut calendar = Calendar::new();
    let mut first = Event::timed(
        "Review",
        parse_date_time("2024-07-01T15:00").unwrap(),
        parse_date_time("2024-07-01T16:00").unwrap(),
    )
    .unwrap();
    first.set_description("first copy");
    let mut second = first.clone();
    second.set_description("second copy");
    second.set_status(Status::Public);

    assert!(calendar.add_event(first));
    assert!(!calendar.add_event(second));
    assert_eq!(calendar.len(), 1);
    assert_eq!(calendar.events().next().unwrap().description(), "first copy");
}

#[test]
fn onward_time_edit_splits_series_in_two() {
    let mut calendar = Calendar::new();
    let original = calendar
        .create_recurring_n_times("Class", "2024-07-01T10:00", "2024-07-01T11:00", "MW", 6)
        .unwrap()
        .unwrap();

    calendar
        .edit_onward("end", "Class", "2024-07-08T10:00", "2024-07-31T11:30")
        .unwrap();

    let split = calendar
        .series_of("Class", parse_date_time("2024-07-08T10:00").unwrap())
        .unwrap();
    assert_ne!(split, original);
    assert_eq!(calendar.series(original).count(), 2);
    assert_eq!(calendar.series(split).count(), 4);

    // The later part now moves together.
    calendar
        .edit_all("location", "Class", "2024-07-10T10:00", "online")
        .unwrap();
    let online = calendar.events().filter(|e| e.location().is_some()).count();
    assert_eq!(online, 4);
}

#[test]
fn calendar_from_config_tags_query_results() {
    let config: CalendarConfig = "name = \"Team\"\ntimezone = \"Europe/London\""
        .parse()
        .unwrap();
    let mut calendar = Calendar::from_config(&config).unwrap();
    calendar
        .create_single_event("Lunch", "2024-07-01T12:00", "2024-07-01T13:00")
        .unwrap();

    let events = calendar.events_on_date("2024-07-01").unwrap();
    assert_eq!(events[0].timezone(), Some("Europe/London"));
    assert!(events[0].to_string().ends_with("in time zone Europe/London"));

    assert!(matches!(
        calendar.set_timezone("Europe/Atlantis"),
        Err(CalSchedError::InvalidTimezone(_))
    ));
}
