// Schedule interaction module
// Interactions waiting for a slot, stepped through from the dashboard side panel

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Stepping through an ordered set of records.
pub trait Navigable {
    type Item;

    fn current(&self) -> Option<&Self::Item>;

    /// Advance and return the new current item; stays put at the end.
    fn next(&mut self) -> Option<&Self::Item>;

    /// Step back and return the new current item; stays put at the start.
    fn previous(&mut self) -> Option<&Self::Item>;

    fn has_next(&self) -> bool;

    fn has_previous(&self) -> bool;
}

pub trait Validatable {
    fn validate(&self) -> Result<(), String>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleInteraction {
    pub id: i64,
    pub title: String,
    pub speak_dial_in: Option<String>,
    pub scheduled_at: Option<NaiveDateTime>,
}

impl ScheduleInteraction {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            speak_dial_in: None,
            scheduled_at: None,
        }
    }

    pub fn with_dial_in(mut self, dial_in: impl Into<String>) -> Self {
        self.speak_dial_in = Some(dial_in.into());
        self
    }
}

impl Validatable for ScheduleInteraction {
    fn validate(&self) -> Result<(), String> {
        match self.speak_dial_in.as_deref().map(str::trim) {
            Some(dial_in) if !dial_in.is_empty() => Ok(()),
            _ => Err("Speak dial-in can't be blank".to_string()),
        }
    }
}

/// Interactions awaiting scheduling, with a cursor for the side panel.
#[derive(Debug, Clone, Default)]
pub struct InteractionQueue {
    items: Vec<ScheduleInteraction>,
    position: Option<usize>,
}

impl InteractionQueue {
    pub fn new(items: Vec<ScheduleInteraction>) -> Self {
        let position = (!items.is_empty()).then_some(0);
        Self { items, position }
    }

    pub fn items(&self) -> &[ScheduleInteraction] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Move the cursor to the interaction with `id`.
    pub fn select(&mut self, id: i64) -> Option<&ScheduleInteraction> {
        let index = self.items.iter().position(|item| item.id == id)?;
        self.position = Some(index);
        self.items.get(index)
    }

    /// Hide the side panel: no current interaction.
    pub fn close(&mut self) {
        self.position = None;
    }

    pub fn current_mut(&mut self) -> Option<&mut ScheduleInteraction> {
        self.position.and_then(|index| self.items.get_mut(index))
    }

    /// Assign `value` to the current interaction once it validates.
    pub fn schedule_current(&mut self, value: NaiveDateTime) -> Result<(), String> {
        let current = self
            .current_mut()
            .ok_or_else(|| "No interaction selected".to_string())?;
        current.validate()?;
        current.scheduled_at = Some(value);
        log::info!("Scheduled interaction {} at {}", current.id, value);
        Ok(())
    }
}

impl Navigable for InteractionQueue {
    type Item = ScheduleInteraction;

    fn current(&self) -> Option<&ScheduleInteraction> {
        self.position.and_then(|index| self.items.get(index))
    }

    fn next(&mut self) -> Option<&ScheduleInteraction> {
        if self.has_next() {
            self.position = self.position.map(|index| index + 1);
        }
        self.current()
    }

    fn previous(&mut self) -> Option<&ScheduleInteraction> {
        if self.has_previous() {
            self.position = self.position.map(|index| index - 1);
        }
        self.current()
    }

    fn has_next(&self) -> bool {
        self.position
            .is_some_and(|index| index + 1 < self.items.len())
    }

    fn has_previous(&self) -> bool {
        self.position.is_some_and(|index| index > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn queue() -> InteractionQueue {
        InteractionQueue::new(vec![
            ScheduleInteraction::new(1, "Intro call").with_dial_in("+1 555 0100"),
            ScheduleInteraction::new(2, "Follow-up"),
            ScheduleInteraction::new(3, "Review").with_dial_in("   "),
        ])
    }

    #[test]
    fn test_navigation_stops_at_ends() {
        let mut queue = queue();
        assert_eq!(queue.current().map(|i| i.id), Some(1));
        assert!(!queue.has_previous());
        assert_eq!(queue.previous().map(|i| i.id), Some(1));

        assert_eq!(queue.next().map(|i| i.id), Some(2));
        assert_eq!(queue.next().map(|i| i.id), Some(3));
        assert!(!queue.has_next());
        assert_eq!(queue.next().map(|i| i.id), Some(3));
    }

    #[test]
    fn test_select_and_close() {
        let mut queue = queue();
        assert_eq!(queue.select(3).map(|i| i.title.as_str()), Some("Review"));
        assert!(queue.select(99).is_none());
        assert_eq!(queue.position(), Some(2));

        queue.close();
        assert!(queue.current().is_none());
        assert!(!queue.has_next());
        assert!(queue.next().is_none());
    }

    #[test]
    fn test_empty_queue() {
        let mut queue = InteractionQueue::new(Vec::new());
        assert!(queue.is_empty());
        assert!(queue.current().is_none());
        assert!(queue.previous().is_none());
    }

    #[test]
    fn test_dial_in_presence() {
        let queue = queue();
        assert!(queue.items()[0].is_valid());
        assert!(!queue.items()[1].is_valid());
        // Whitespace does not count as present
        assert!(!queue.items()[2].is_valid());
    }

    #[test]
    fn test_schedule_current_requires_valid_interaction() {
        let slot = NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(7, 30, 0)
            .unwrap();
        let mut queue = queue();
        queue.schedule_current(slot).unwrap();
        assert_eq!(queue.current().and_then(|i| i.scheduled_at), Some(slot));

        queue.next();
        let err = queue.schedule_current(slot).unwrap_err();
        assert!(err.contains("dial-in"));
        assert_eq!(queue.current().and_then(|i| i.scheduled_at), None);
    }
}
