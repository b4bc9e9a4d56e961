//! Report wizard state machine.
//!
//! Walks `CollectingRange → CollectingGroups → Submitting → Polling → Done`.
//! Transitions are strictly forward; once submission starts there is no
//! way back, and a wizard that already produced a report refuses to
//! submit again.

use crate::domain::foundation::{ReportId, ValidationError};

use super::model::{DateRange, ExpoGroup, ReportRequest};

/// Wizard lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    /// Collecting the report date range.
    CollectingRange,
    /// Collecting exposition groupings.
    CollectingGroups,
    /// Creation request is being sent.
    Submitting,
    /// Waiting for the backend job to finish.
    Polling,
    /// Report is durable; wizard is finished.
    Done,
}

impl WizardState {
    /// Returns true if transition from self to target is valid.
    pub fn can_transition_to(&self, target: &Self) -> bool {
        use WizardState::*;
        matches!(
            (self, target),
            (CollectingRange, CollectingGroups)
                | (CollectingGroups, Submitting)
                | (Submitting, Polling)
                | (Polling, Done)
        )
    }

    /// Performs transition with validation.
    pub fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "wizard_state",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// The single forward successor, if any.
    pub fn next(&self) -> Option<Self> {
        use WizardState::*;
        match self {
            CollectingRange => Some(CollectingGroups),
            CollectingGroups => Some(Submitting),
            Submitting => Some(Polling),
            Polling => Some(Done),
            Done => None,
        }
    }

    /// Terminal state check.
    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }
}

/// One report-creation session.
///
/// Owns the range and group list for the duration of the session; the
/// groups are discarded on submission, converted to their id-only POST
/// shape.
#[derive(Debug, Clone)]
pub struct ReportWizard {
    state: WizardState,
    range: Option<DateRange>,
    groups: Vec<ExpoGroup>,
    report_id: Option<ReportId>,
}

impl ReportWizard {
    pub fn new() -> Self {
        Self {
            state: WizardState::CollectingRange,
            range: None,
            groups: Vec::new(),
            report_id: None,
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn report_id(&self) -> Option<ReportId> {
        self.report_id
    }

    /// Sets or replaces the date range; allowed while collecting.
    pub fn set_range(&mut self, range: DateRange) -> Result<(), ValidationError> {
        match self.state {
            WizardState::CollectingRange | WizardState::CollectingGroups => {
                self.range = Some(range);
                Ok(())
            }
            _ => Err(ValidationError::invalid_format(
                "wizard_state",
                "range can no longer be edited",
            )),
        }
    }

    /// Adds an exposition grouping; allowed while collecting groups.
    pub fn add_group(&mut self, group: ExpoGroup) -> Result<(), ValidationError> {
        if self.state != WizardState::CollectingGroups {
            return Err(ValidationError::invalid_format(
                "wizard_state",
                "groups can only be edited in the groups step",
            ));
        }
        if group.name.is_empty() {
            return Err(ValidationError::empty_field("nom"));
        }
        self.groups.push(group);
        Ok(())
    }

    /// Moves from a collecting state to the next step.
    ///
    /// No validation is performed on the collected groups beyond the
    /// non-empty name check at insertion; empty group lists are accepted.
    pub fn advance(&mut self) -> Result<WizardState, ValidationError> {
        match self.state {
            WizardState::CollectingRange => {
                if self.range.is_none() {
                    return Err(ValidationError::empty_field("date_range"));
                }
                self.state = self.state.transition_to(WizardState::CollectingGroups)?;
            }
            WizardState::CollectingGroups => {
                self.state = self.state.transition_to(WizardState::Submitting)?;
            }
            other => {
                return Err(ValidationError::invalid_format(
                    "wizard_state",
                    format!("advance() is not valid in {:?}", other),
                ));
            }
        }
        Ok(self.state)
    }

    /// Produces the creation request exactly once.
    ///
    /// Guards against resubmission: only valid in `Submitting` with no
    /// report attached yet.
    pub fn take_request(&self) -> Result<ReportRequest, ValidationError> {
        if self.state != WizardState::Submitting {
            return Err(ValidationError::invalid_format(
                "wizard_state",
                format!("cannot submit from {:?}", self.state),
            ));
        }
        if self.report_id.is_some() {
            return Err(ValidationError::invalid_format(
                "wizard_state",
                "report already submitted",
            ));
        }
        let range = self
            .range
            .ok_or_else(|| ValidationError::empty_field("date_range"))?;
        Ok(ReportRequest::new(range, &self.groups))
    }

    /// Records the shell report and enters the polling phase.
    pub fn mark_submitted(&mut self, report_id: ReportId) -> Result<(), ValidationError> {
        self.state = self.state.transition_to(WizardState::Polling)?;
        self.report_id = Some(report_id);
        Ok(())
    }

    /// Marks the backend job finished and returns the durable view route.
    pub fn complete(&mut self) -> Result<String, ValidationError> {
        self.state = self.state.transition_to(WizardState::Done)?;
        let id = self
            .report_id
            .ok_or_else(|| ValidationError::empty_field("report_id"))?;
        Ok(format!("/availability-ratio-reports/view/{}", id))
    }
}

impl Default for ReportWizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range() -> DateRange {
        DateRange::try_new(
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn happy_path_walks_all_states_forward() {
        let mut wizard = ReportWizard::new();
        assert_eq!(wizard.state(), WizardState::CollectingRange);

        wizard.set_range(range()).unwrap();
        assert_eq!(wizard.advance().unwrap(), WizardState::CollectingGroups);

        wizard.add_group(ExpoGroup::new("G1")).unwrap();
        assert_eq!(wizard.advance().unwrap(), WizardState::Submitting);

        let request = wizard.take_request().unwrap();
        assert_eq!(request.groups.len(), 1);

        wizard.mark_submitted(ReportId::new(4)).unwrap();
        assert_eq!(wizard.state(), WizardState::Polling);

        let route = wizard.complete().unwrap();
        assert_eq!(route, "/availability-ratio-reports/view/4");
        assert!(wizard.state().is_terminal());
    }

    #[test]
    fn advance_without_range_is_rejected() {
        let mut wizard = ReportWizard::new();
        assert!(wizard.advance().is_err());
    }

    #[test]
    fn empty_group_list_is_accepted_at_submission() {
        let mut wizard = ReportWizard::new();
        wizard.set_range(range()).unwrap();
        wizard.advance().unwrap();
        wizard.advance().unwrap();

        let request = wizard.take_request().unwrap();
        assert!(request.groups.is_empty());
    }

    #[test]
    fn group_with_empty_name_is_rejected() {
        let mut wizard = ReportWizard::new();
        wizard.set_range(range()).unwrap();
        wizard.advance().unwrap();
        assert!(wizard.add_group(ExpoGroup::new("")).is_err());
    }

    #[test]
    fn no_backward_transition_once_submitting() {
        let mut wizard = ReportWizard::new();
        wizard.set_range(range()).unwrap();
        wizard.advance().unwrap();
        wizard.advance().unwrap();

        assert!(wizard.set_range(range()).is_err());
        assert!(wizard.add_group(ExpoGroup::new("late")).is_err());
    }

    #[test]
    fn resubmission_is_guarded() {
        let mut wizard = ReportWizard::new();
        wizard.set_range(range()).unwrap();
        wizard.advance().unwrap();
        wizard.advance().unwrap();
        wizard.take_request().unwrap();
        wizard.mark_submitted(ReportId::new(1)).unwrap();

        // Polling state: a second submission attempt must fail.
        assert!(wizard.take_request().is_err());
        assert!(wizard.mark_submitted(ReportId::new(2)).is_err());
    }

    #[test]
    fn state_transitions_are_strictly_forward() {
        use WizardState::*;
        for (from, to) in [
            (CollectingGroups, CollectingRange),
            (Submitting, CollectingGroups),
            (Polling, Submitting),
            (Done, Polling),
            (CollectingRange, Submitting),
        ] {
            assert!(!from.can_transition_to(&to), "{:?} -> {:?}", from, to);
        }
    }
}
