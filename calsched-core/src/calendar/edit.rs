//! Series-aware event editing.
//!
//! Events are located structurally: by subject and start (plus end for single
//! edits). When several events share a subject and start, the first one in
//! calendar order is edited.

use tracing::debug;

use super::Calendar;
use crate::error::{CalSchedError, CalSchedResult};
use crate::event::{EditProperty, Event};
use crate::series::SeriesId;
use crate::time::parse_date_time;

impl Calendar {
    /// Edit the one event matching subject, start and end exactly.
    ///
    /// Changing start or end detaches the event from its series.
    pub fn edit_single(
        &mut self,
        property: &str,
        subject: &str,
        start: &str,
        end: &str,
        value: &str,
    ) -> CalSchedResult<()> {
        self.ensure_not_empty()?;
        let property: EditProperty = property.parse()?;
        let start = parse_date_time(start)?;
        let end = parse_date_time(end)?;

        let target = self
            .find_exact(subject, start, end)
            .cloned()
            .ok_or_else(|| not_found(subject, start))?;

        self.edit_stored(&target, property, value)?;
        Ok(())
    }

    /// Edit an event and every later event of its series.
    ///
    /// When start or end changes, the edited event and the later events move
    /// into a new series of their own; earlier events keep the old one.
    pub fn edit_onward(
        &mut self,
        property: &str,
        subject: &str,
        start: &str,
        value: &str,
    ) -> CalSchedResult<()> {
        self.ensure_not_empty()?;
        let property: EditProperty = property.parse()?;
        let start = parse_date_time(start)?;

        let target = self
            .find(subject, start)
            .cloned()
            .ok_or_else(|| not_found(subject, start))?;

        let Some(series) = target.series() else {
            self.edit_stored(&target, property, value)?;
            return Ok(());
        };

        let later: Vec<Event> = self
            .series(series)
            .filter(|e| **e > target)
            .cloned()
            .collect();

        let regroup = property.is_temporal().then(SeriesId::new);
        debug!(
            %series,
            later = later.len(),
            regrouped = regroup.is_some(),
            "Editing series onward"
        );

        for event in std::iter::once(target).chain(later) {
            let edited = self.edit_stored(&event, property, value)?;
            if let Some(id) = regroup {
                self.assign_series(&edited, Some(id));
            }
        }
        Ok(())
    }

    /// Edit every event of the series the matched event belongs to, or just
    /// that event if it has no series.
    ///
    /// Each member is edited through the same setters as a single edit, so a
    /// start or end change detaches every member and the series dissolves.
    pub fn edit_all(
        &mut self,
        property: &str,
        subject: &str,
        start: &str,
        value: &str,
    ) -> CalSchedResult<()> {
        self.ensure_not_empty()?;
        let property: EditProperty = property.parse()?;
        let start = parse_date_time(start)?;

        let target = self
            .find(subject, start)
            .cloned()
            .ok_or_else(|| not_found(subject, start))?;

        let members: Vec<Event> = match target.series() {
            Some(series) => self.series(series).cloned().collect(),
            None => vec![target],
        };

        debug!(count = members.len(), ?property, "Editing all events in series");
        for event in &members {
            self.edit_stored(event, property, value)?;
        }
        Ok(())
    }

    fn ensure_not_empty(&self) -> CalSchedResult<()> {
        if self.events.is_empty() {
            return Err(CalSchedError::EmptyCollection);
        }
        Ok(())
    }

    /// Apply an edit to the stored event equal to `key` and return its new form.
    ///
    /// On failure the stored event is left unchanged. If the edited event now
    /// equals another stored event, it replaces that one.
    fn edit_stored(
        &mut self,
        key: &Event,
        property: EditProperty,
        value: &str,
    ) -> CalSchedResult<Event> {
        let mut event = self
            .events
            .take(key)
            .ok_or_else(|| not_found(key.subject(), key.start()))?;

        if let Err(e) = event.apply(property, value) {
            self.events.insert(event);
            return Err(e);
        }

        debug!(%event, ?property, "Edited event");
        if let Some(replaced) = self.events.replace(event.clone()) {
            debug!(event = %replaced, "Edited event replaced an identical one");
        }
        Ok(event)
    }

    fn assign_series(&mut self, key: &Event, series: Option<SeriesId>) {
        if let Some(mut event) = self.events.take(key) {
            event.set_series(series);
            self.events.insert(event);
        }
    }
}

fn not_found(subject: &str, start: chrono::NaiveDateTime) -> CalSchedError {
    CalSchedError::NotFound {
        subject: subject.to_string(),
        start,
    }
}
