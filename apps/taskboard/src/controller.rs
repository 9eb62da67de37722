//! Form/modal controller
//!
//! Two states: closed, and open in either create or edit mode. The
//! validation gate runs before any network call; a draft that fails it
//! never leaves this module. Closing happens on cancel or after the caller
//! reports a successful submission.

use chrono::NaiveDate;
use domain_tasks::{Task, TaskDraft, TaskId, TaskPriority};

/// What the open form will do on submit
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(TaskId),
}

/// In-progress field values; required fields stay unset until chosen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDraft {
    pub title: String,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<NaiveDate>,
    pub status: bool,
}

/// Field-level validation messages
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub title: Option<&'static str>,
    pub priority: Option<&'static str>,
    pub due_date: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.priority.is_none() && self.due_date.is_none()
    }

    pub fn messages(&self) -> Vec<&'static str> {
        [self.title, self.priority, self.due_date]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// A draft that passed the validation gate, ready for the repository
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub mode: FormMode,
    pub draft: TaskDraft,
}

#[derive(Debug, Clone, PartialEq)]
enum FormState {
    Closed,
    Open { mode: FormMode, draft: FormDraft },
}

/// Modal form state machine
#[derive(Debug)]
pub struct FormController {
    state: FormState,
}

impl FormController {
    pub fn new() -> Self {
        Self {
            state: FormState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, FormState::Open { .. })
    }

    pub fn mode(&self) -> Option<&FormMode> {
        match &self.state {
            FormState::Open { mode, .. } => Some(mode),
            FormState::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&FormDraft> {
        match &self.state {
            FormState::Open { draft, .. } => Some(draft),
            FormState::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut FormDraft> {
        match &mut self.state {
            FormState::Open { draft, .. } => Some(draft),
            FormState::Closed => None,
        }
    }

    /// Open in create mode with an empty draft; completion defaults to false
    pub fn open_create(&mut self) {
        self.state = FormState::Open {
            mode: FormMode::Create,
            draft: FormDraft::default(),
        };
    }

    /// Open in edit mode, pre-populated from the existing record
    pub fn open_edit(&mut self, task: &Task) {
        self.state = FormState::Open {
            mode: FormMode::Edit(task.id.clone()),
            draft: FormDraft {
                title: task.title.clone(),
                priority: Some(task.priority),
                due_date: Some(task.due_date),
                status: task.status,
            },
        };
    }

    /// Close the modal, discarding the draft
    pub fn close(&mut self) {
        self.state = FormState::Closed;
    }

    /// Cancel is close; the draft is not persisted anywhere
    pub fn cancel(&mut self) {
        self.close();
    }

    /// Validation gate. Returns the submission when all required fields are
    /// present, or the field-level messages otherwise. Never performs IO;
    /// the modal stays open either way.
    pub fn validate(&self) -> Option<Result<Submission, FieldErrors>> {
        let (mode, draft) = match &self.state {
            FormState::Open { mode, draft } => (mode, draft),
            FormState::Closed => return None,
        };

        let mut errors = FieldErrors::default();
        if draft.title.trim().is_empty() {
            errors.title = Some("Please enter a task title.");
        }
        if draft.priority.is_none() {
            errors.priority = Some("Please select a priority.");
        }
        if draft.due_date.is_none() {
            errors.due_date = Some("Please select a due date.");
        }

        if let (true, Some(priority), Some(due_date)) =
            (errors.is_empty(), draft.priority, draft.due_date)
        {
            return Some(Ok(Submission {
                mode: mode.clone(),
                draft: TaskDraft {
                    title: draft.title.trim().to_string(),
                    priority,
                    due_date,
                    status: draft.status,
                },
            }));
        }

        Some(Err(errors))
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> Task {
        Task {
            id: TaskId::new("1"),
            title: "Buy milk".to_string(),
            priority: TaskPriority::Low,
            due_date: "2024-01-01".parse().unwrap(),
            status: true,
        }
    }

    #[test]
    fn test_starts_closed() {
        let controller = FormController::new();
        assert!(!controller.is_open());
        assert!(controller.validate().is_none());
    }

    #[test]
    fn test_open_create_starts_with_an_empty_draft() {
        let mut controller = FormController::new();
        controller.open_create();

        assert!(controller.is_open());
        assert_eq!(controller.mode(), Some(&FormMode::Create));

        let draft = controller.draft().unwrap();
        assert!(draft.title.is_empty());
        assert!(draft.priority.is_none());
        assert!(draft.due_date.is_none());
        assert!(!draft.status);
    }

    #[test]
    fn test_open_edit_prefills_from_the_record() {
        let mut controller = FormController::new();
        controller.open_edit(&task());

        assert_eq!(controller.mode(), Some(&FormMode::Edit(TaskId::new("1"))));
        let draft = controller.draft().unwrap();
        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.priority, Some(TaskPriority::Low));
        assert_eq!(draft.due_date, Some("2024-01-01".parse().unwrap()));
        assert!(draft.status);
    }

    #[test]
    fn test_cancel_discards_the_draft() {
        let mut controller = FormController::new();
        controller.open_edit(&task());
        controller.cancel();

        assert!(!controller.is_open());
        assert!(controller.draft().is_none());
    }

    #[test]
    fn test_validation_gate_blocks_missing_fields() {
        let mut controller = FormController::new();
        controller.open_create();

        let errors = controller.validate().unwrap().unwrap_err();
        assert_eq!(errors.title, Some("Please enter a task title."));
        assert_eq!(errors.priority, Some("Please select a priority."));
        assert_eq!(errors.due_date, Some("Please select a due date."));

        // The modal stays open for correction
        assert!(controller.is_open());
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let mut controller = FormController::new();
        controller.open_create();
        {
            let draft = controller.draft_mut().unwrap();
            draft.title = "   ".to_string();
            draft.priority = Some(TaskPriority::High);
            draft.due_date = Some("2024-02-02".parse().unwrap());
        }

        let errors = controller.validate().unwrap().unwrap_err();
        assert_eq!(errors.title, Some("Please enter a task title."));
        assert!(errors.priority.is_none());
        assert!(errors.due_date.is_none());
    }

    #[test]
    fn test_valid_submission_in_create_mode() {
        let mut controller = FormController::new();
        controller.open_create();
        {
            let draft = controller.draft_mut().unwrap();
            draft.title = " Write report ".to_string();
            draft.priority = Some(TaskPriority::High);
            draft.due_date = Some("2024-02-02".parse().unwrap());
        }

        let submission = controller.validate().unwrap().unwrap();
        assert_eq!(submission.mode, FormMode::Create);
        assert_eq!(submission.draft.title, "Write report");
        assert_eq!(submission.draft.priority, TaskPriority::High);
        assert!(!submission.draft.status);
    }

    #[test]
    fn test_valid_submission_in_edit_mode_keeps_the_id() {
        let mut controller = FormController::new();
        controller.open_edit(&task());
        controller.draft_mut().unwrap().status = false;

        let submission = controller.validate().unwrap().unwrap();
        assert_eq!(submission.mode, FormMode::Edit(TaskId::new("1")));
        assert!(!submission.draft.status);
    }
}
