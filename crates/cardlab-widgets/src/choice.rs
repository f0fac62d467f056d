#![forbid(unsafe_code)]

//! Single-choice scale sub-widget.
//!
//! One selection among caller-supplied labels. The only failure condition
//! is submitting a required scale with nothing selected, which is surfaced
//! inline and leaves the state intact.

use serde::{Deserialize, Serialize};
use web_time::Instant;

use cardlab_core::clock::InteractionClock;
use cardlab_core::event::{KeyCode, KeyEvent};

use crate::error::{RejectedSubmit, SubmitError};

/// The result record handed back on submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOutcome {
    /// 0-based index of the chosen label, if any.
    pub response_index: Option<usize>,
    /// The chosen label's text, if any.
    pub response_label: Option<String>,
    /// Milliseconds from initialization to submission.
    pub reaction_time_ms: u64,
}

/// Single-choice scale over an ordered label list.
#[derive(Debug)]
pub struct ChoiceScale {
    labels: Vec<String>,
    selected: Option<usize>,
    required: bool,
    clock: InteractionClock,
}

impl ChoiceScale {
    pub fn new<I, S>(labels: I, required: bool, now: Instant) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            selected: None,
            required,
            clock: InteractionClock::start(now),
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select the 0-based option `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.labels.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Keyboard input adapter: digits select 1-based options.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let KeyCode::Char(c) = key.code
            && let Some(digit) = c.to_digit(10)
            && digit >= 1
        {
            return self.select(digit as usize - 1);
        }
        false
    }

    /// Confirm submission, consuming the scale.
    ///
    /// A required scale with nothing selected is refused with the
    /// missing-response condition and handed back untouched. An optional
    /// scale submits with empty response fields.
    pub fn submit(self, now: Instant) -> Result<ChoiceOutcome, RejectedSubmit<Self>> {
        if self.required && self.selected.is_none() {
            return Err(RejectedSubmit {
                collector: self,
                error: SubmitError::MissingResponse,
            });
        }
        let response_label = self.selected.map(|i| self.labels[i].clone());
        Ok(ChoiceOutcome {
            response_index: self.selected,
            response_label,
            reaction_time_ms: self.clock.elapsed_ms(now),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const LABELS: [&str; 4] = ["very unlikely", "unlikely", "likely", "very likely"];

    #[test]
    fn select_and_submit() {
        let t0 = Instant::now();
        let mut scale = ChoiceScale::new(LABELS, true, t0);
        assert!(scale.select(2));
        let outcome = scale.submit(t0 + Duration::from_millis(800)).unwrap();
        assert_eq!(outcome.response_index, Some(2));
        assert_eq!(outcome.response_label.as_deref(), Some("likely"));
        assert_eq!(outcome.reaction_time_ms, 800);
    }

    #[test]
    fn out_of_range_selection_ignored() {
        let mut scale = ChoiceScale::new(LABELS, true, Instant::now());
        assert!(!scale.select(4));
        assert_eq!(scale.selected(), None);
    }

    #[test]
    fn required_without_response_is_refused() {
        let t0 = Instant::now();
        let scale = ChoiceScale::new(LABELS, true, t0);
        let rejected = scale.submit(t0).unwrap_err();
        assert_eq!(rejected.error, SubmitError::MissingResponse);

        // State preserved: select and resubmit.
        let mut scale = rejected.collector;
        scale.select(0);
        assert!(scale.submit(t0).is_ok());
    }

    #[test]
    fn optional_without_response_submits_empty() {
        let t0 = Instant::now();
        let scale = ChoiceScale::new(LABELS, false, t0);
        let outcome = scale.submit(t0).unwrap();
        assert_eq!(outcome.response_index, None);
        assert_eq!(outcome.response_label, None);
    }

    #[test]
    fn digit_keys_select_one_based() {
        let mut scale = ChoiceScale::new(LABELS, true, Instant::now());
        assert!(scale.handle_key(KeyEvent::new(KeyCode::Char('3'))));
        assert_eq!(scale.selected(), Some(2));
        assert!(!scale.handle_key(KeyEvent::new(KeyCode::Char('0'))));
        assert!(!scale.handle_key(KeyEvent::new(KeyCode::Char('9'))));
        assert_eq!(scale.selected(), Some(2));
    }

    #[test]
    fn clear_resets_selection() {
        let mut scale = ChoiceScale::new(LABELS, false, Instant::now());
        scale.select(1);
        scale.clear();
        assert_eq!(scale.selected(), None);
    }

    #[test]
    fn outcome_round_trips_through_json() {
        let t0 = Instant::now();
        let mut scale = ChoiceScale::new(LABELS, true, t0);
        scale.select(1);
        let outcome = scale.submit(t0).unwrap();
        let json = serde_json::to_string(&outcome).unwrap();
        let back: ChoiceOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }
}
