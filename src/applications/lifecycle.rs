//! Application status transitions

use super::models::ApplicationStatus;

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Draft => "draft",
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::Viewed => "viewed",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Offered => "offered",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Withdrawn => "withdrawn",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::Rejected | ApplicationStatus::Withdrawn
        )
    }

    /// Only unsent applications can be edited or submitted
    pub fn is_unsubmitted(&self) -> bool {
        matches!(self, ApplicationStatus::Draft | ApplicationStatus::Pending)
    }

    /// Whether `next` is reachable from `self` in one step
    pub fn can_transition_to(&self, next: ApplicationStatus) -> bool {
        use ApplicationStatus::*;

        if self.is_terminal() {
            return false;
        }

        match next {
            Draft | Pending => false,
            Submitted => self.is_unsubmitted(),
            Withdrawn => true,
            // Reviewer-side updates only follow a submission
            Viewed => matches!(self, Submitted),
            Interview => matches!(self, Submitted | Viewed),
            Offered => matches!(self, Submitted | Viewed | Interview),
            Rejected => matches!(self, Submitted | Viewed | Interview | Offered),
        }
    }

    /// Statuses an admin may set directly
    pub fn is_reviewer_status(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::Viewed
                | ApplicationStatus::Interview
                | ApplicationStatus::Offered
                | ApplicationStatus::Rejected
        )
    }
}
