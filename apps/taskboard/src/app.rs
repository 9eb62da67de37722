//! Interactive event loop
//!
//! Single-threaded, line-driven: one command at a time, every network
//! operation awaited on the same flow. A failed operation prints its
//! notice and returns to the prompt; it never tears down the loop.

use domain_tasks::{Task, TaskRepository, TaskService, TaskStore};
use eyre::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio::sync::watch;
use tracing::warn;

use crate::controller::{FormController, FormMode, Submission};
use crate::view;

/// Top-level commands accepted at the prompt
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add,
    Edit(usize),
    Delete(usize),
    Refresh,
    Help,
    Quit,
}

impl Command {
    /// Parse a prompt line; rows are the 1-based table row numbers
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Err("Type 'help' for the command list.".to_string());
        };
        let arg = parts.next();

        match (word.to_ascii_lowercase().as_str(), arg) {
            ("add", None) => Ok(Command::Add),
            ("edit", Some(row)) => parse_row(row).map(Command::Edit),
            ("delete", Some(row)) => parse_row(row).map(Command::Delete),
            ("refresh", None) | ("list", None) => Ok(Command::Refresh),
            ("help", None) => Ok(Command::Help),
            ("quit", None) | ("exit", None) => Ok(Command::Quit),
            _ => Err(format!(
                "Unknown command '{}'. Type 'help' for the command list.",
                line.trim()
            )),
        }
    }
}

fn parse_row(arg: &str) -> Result<usize, String> {
    arg.parse::<usize>()
        .ok()
        .filter(|row| *row >= 1)
        .ok_or_else(|| format!("'{arg}' is not a row number."))
}

/// Explicit yes/no confirmation; only an explicit yes proceeds
pub fn parse_confirmation(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// The single owner of application state: the task service (collection
/// mirror) and the form controller (modal draft).
pub struct Taskboard<R: TaskRepository> {
    service: TaskService<R>,
    controller: FormController,
    revision: watch::Receiver<u64>,
}

impl<R: TaskRepository> Taskboard<R> {
    pub fn new(service: TaskService<R>) -> Self {
        let revision = service.store().subscribe();
        Self {
            service,
            controller: FormController::new(),
            revision,
        }
    }

    /// Read access to the mirrored collection
    pub fn store(&self) -> &TaskStore {
        self.service.store()
    }

    /// Drive the loop from any line-oriented source; production wires
    /// stdin, tests wire a scripted reader.
    pub async fn run<In>(&mut self, reader: In) -> Result<()>
    where
        In: AsyncBufRead + Unpin,
    {
        let mut input = reader.lines();

        println!("Task Management");
        println!("Loading tasks...");
        if let Err(err) = self.service.refresh().await {
            warn!(error = %err, "Initial load failed");
            println!("{}", err.notice());
        }
        println!("{}", view::render_table(self.service.store().tasks()));
        print_help();

        loop {
            prompt("> ");
            let Some(line) = input.next_line().await? else {
                break;
            };

            match Command::parse(&line) {
                Err(message) => println!("{message}"),
                Ok(Command::Quit) => break,
                Ok(Command::Help) => print_help(),
                Ok(Command::Refresh) => {
                    println!("Loading tasks...");
                    if let Err(err) = self.service.refresh().await {
                        warn!(error = %err, "Refresh failed");
                        println!("{}", err.notice());
                    }
                    self.render_if_changed();
                }
                Ok(Command::Add) => {
                    self.controller.open_create();
                    self.run_form(&mut input).await?;
                    self.render_if_changed();
                }
                Ok(Command::Edit(row)) => match self.task_at(row) {
                    Some(task) => {
                        self.controller.open_edit(&task);
                        self.run_form(&mut input).await?;
                        self.render_if_changed();
                    }
                    None => println!("No task at row {row}."),
                },
                Ok(Command::Delete(row)) => {
                    self.delete_with_confirmation(row, &mut input).await?;
                    self.render_if_changed();
                }
            }
        }

        Ok(())
    }

    /// Re-render the table only when the store signalled a change
    fn render_if_changed(&mut self) {
        if self.revision.has_changed().unwrap_or(false) {
            self.revision.borrow_and_update();
            println!("{}", view::render_table(self.service.store().tasks()));
        }
    }

    fn task_at(&self, row: usize) -> Option<Task> {
        self.service.store().tasks().get(row - 1).cloned()
    }

    /// The modal flow: prompt for each field, run the validation gate,
    /// submit. Stays open on validation or network failure; closes on
    /// cancel or successful submission.
    async fn run_form<In>(&mut self, input: &mut Lines<In>) -> Result<()>
    where
        In: AsyncBufRead + Unpin,
    {
        loop {
            if let (Some(mode), Some(draft)) = (self.controller.mode(), self.controller.draft()) {
                println!("{}", view::render_form(mode, draft, &Default::default()));
            }

            if !self.prompt_fields(input).await? {
                self.controller.cancel();
                println!("Cancelled.");
                return Ok(());
            }

            let Some(outcome) = self.controller.validate() else {
                return Ok(());
            };

            match outcome {
                Err(errors) => {
                    for message in errors.messages() {
                        println!("  ! {message}");
                    }
                }
                Ok(submission) => {
                    if self.submit(submission).await {
                        self.controller.close();
                        return Ok(());
                    }
                    // Failure notice already printed; keep the modal open
                    // with the draft intact so the user can retry.
                }
            }
        }
    }

    /// Prompt for the four form fields. Empty input keeps the current
    /// value; `cancel` (or EOF) aborts. Returns false on cancel.
    async fn prompt_fields<In>(&mut self, input: &mut Lines<In>) -> Result<bool>
    where
        In: AsyncBufRead + Unpin,
    {
        prompt("Task Title: ");
        let Some(line) = input.next_line().await? else {
            return Ok(false);
        };
        let line = line.trim().to_string();
        if line.eq_ignore_ascii_case("cancel") {
            return Ok(false);
        }
        if let Some(draft) = self.controller.draft_mut() {
            if !line.is_empty() {
                draft.title = line;
            }
        }

        prompt("Priority (High/Medium/Low): ");
        let Some(line) = input.next_line().await? else {
            return Ok(false);
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("cancel") {
            return Ok(false);
        }
        if !line.is_empty() {
            match line.parse::<domain_tasks::TaskPriority>() {
                Ok(priority) => {
                    if let Some(draft) = self.controller.draft_mut() {
                        draft.priority = Some(priority);
                    }
                }
                Err(_) => println!("  ! Priority must be High, Medium, or Low."),
            }
        }

        prompt("Due Date (YYYY-MM-DD): ");
        let Some(line) = input.next_line().await? else {
            return Ok(false);
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("cancel") {
            return Ok(false);
        }
        if !line.is_empty() {
            match line.parse::<chrono::NaiveDate>() {
                Ok(due_date) => {
                    if let Some(draft) = self.controller.draft_mut() {
                        draft.due_date = Some(due_date);
                    }
                }
                Err(_) => println!("  ! Dates are YYYY-MM-DD."),
            }
        }

        prompt("Completed? (y/N): ");
        let Some(line) = input.next_line().await? else {
            return Ok(false);
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("cancel") {
            return Ok(false);
        }
        if !line.is_empty() {
            if let Some(draft) = self.controller.draft_mut() {
                draft.status = parse_confirmation(line);
            }
        }

        Ok(true)
    }

    /// Issue the remote call for a validated submission. Returns true on
    /// success after printing the notice.
    async fn submit(&mut self, submission: Submission) -> bool {
        let Submission { mode, draft } = submission;
        let result = match &mode {
            FormMode::Create => self
                .service
                .create_task(&draft)
                .await
                .map(|_| "Task added successfully!"),
            FormMode::Edit(id) => self
                .service
                .update_task(id, &draft)
                .await
                .map(|_| "Task updated successfully!"),
        };

        match result {
            Ok(notice) => {
                println!("{notice}");
                true
            }
            Err(err) => {
                warn!(error = %err, "Submission failed");
                println!("{}", err.notice());
                false
            }
        }
    }

    /// Delete is gated by an explicit confirmation; declining issues no
    /// request.
    async fn delete_with_confirmation<In>(
        &mut self,
        row: usize,
        input: &mut Lines<In>,
    ) -> Result<()>
    where
        In: AsyncBufRead + Unpin,
    {
        let Some(task) = self.task_at(row) else {
            println!("No task at row {row}.");
            return Ok(());
        };

        prompt(&format!(
            "Are you sure you want to delete '{}'? (y/N) ",
            task.title
        ));
        let Some(line) = input.next_line().await? else {
            return Ok(());
        };

        if !parse_confirmation(&line) {
            println!("Delete cancelled.");
            return Ok(());
        }

        match self.service.delete_task(&task.id).await {
            Ok(()) => println!("Task deleted successfully!"),
            Err(err) => {
                warn!(error = %err, "Delete failed");
                println!("{}", err.notice());
            }
        }
        Ok(())
    }
}

fn prompt(text: &str) {
    use std::io::Write;
    print!("{text}");
    let _ = std::io::stdout().flush();
}

fn print_help() {
    println!(
        "Commands: add | edit <row> | delete <row> | refresh | help | quit\n\
         In the form, empty input keeps the current value; 'cancel' closes it."
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_tasks::repository::MockTaskRepository;
    use domain_tasks::{TaskError, TaskId, TaskPriority};
    use tokio::io::BufReader;

    fn record(id: &str, title: &str) -> Task {
        Task {
            id: TaskId::new(id),
            title: title.to_string(),
            priority: TaskPriority::Low,
            due_date: "2024-01-01".parse().unwrap(),
            status: false,
        }
    }

    async fn run_script<R: TaskRepository>(board: &mut Taskboard<R>, script: &str) {
        board
            .run(BufReader::new(script.as_bytes()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_declining_delete_confirmation_issues_no_request() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo
            .expect_list()
            .returning(|| Ok(vec![record("1", "Buy milk")]));
        mock_repo.expect_delete().times(0);

        let mut board = Taskboard::new(TaskService::new(mock_repo));
        run_script(&mut board, "delete 1\nn\nquit\n").await;

        assert_eq!(board.store().len(), 1);
        assert!(board.store().get(&TaskId::new("1")).is_some());
    }

    #[tokio::test]
    async fn test_confirmed_delete_removes_the_row() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo
            .expect_list()
            .returning(|| Ok(vec![record("1", "Buy milk")]));
        mock_repo
            .expect_delete()
            .times(1)
            .returning(|_| Ok(()));

        let mut board = Taskboard::new(TaskService::new(mock_repo));
        run_script(&mut board, "delete 1\ny\nquit\n").await;

        assert!(board.store().is_empty());
    }

    #[tokio::test]
    async fn test_modal_stays_open_for_retry_after_failed_submission() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo.expect_list().returning(|| Ok(vec![]));
        // First submission fails; the retry with the retained draft succeeds.
        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(TaskError::Create("500 Internal Server Error".into())));
        mock_repo.expect_create().times(1).returning(|d| {
            Ok(Task {
                id: TaskId::new("2"),
                title: d.title.clone(),
                priority: d.priority,
                due_date: d.due_date,
                status: d.status,
            })
        });

        let mut board = Taskboard::new(TaskService::new(mock_repo));
        // add, four field lines, then four empty lines re-submitting the
        // same draft, then quit.
        let script = "add\nWrite report\nHigh\n2024-02-02\n\n\n\n\n\nquit\n";
        run_script(&mut board, script).await;

        assert_eq!(board.store().len(), 1);
        let created = &board.store().tasks()[0];
        assert_eq!(created.id, TaskId::new("2"));
        assert_eq!(created.title, "Write report");
        assert_eq!(created.priority, TaskPriority::High);
    }

    #[tokio::test]
    async fn test_cancelling_the_form_issues_no_request() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo.expect_list().returning(|| Ok(vec![]));
        mock_repo.expect_create().times(0);

        let mut board = Taskboard::new(TaskService::new(mock_repo));
        run_script(&mut board, "add\ncancel\nquit\n").await;

        assert!(board.store().is_empty());
    }

    #[test]
    fn test_command_parsing() {
        assert_eq!(Command::parse("add").unwrap(), Command::Add);
        assert_eq!(Command::parse("  EDIT 3 ").unwrap(), Command::Edit(3));
        assert_eq!(Command::parse("delete 1").unwrap(), Command::Delete(1));
        assert_eq!(Command::parse("refresh").unwrap(), Command::Refresh);
        assert_eq!(Command::parse("list").unwrap(), Command::Refresh);
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_command_parsing_rejects_bad_rows() {
        assert!(Command::parse("edit").is_err());
        assert!(Command::parse("edit zero").is_err());
        assert!(Command::parse("delete 0").is_err());
        assert!(Command::parse("").is_err());
        assert!(Command::parse("frobnicate").is_err());
    }

    #[test]
    fn test_confirmation_requires_an_explicit_yes() {
        assert!(parse_confirmation("y"));
        assert!(parse_confirmation("YES"));
        assert!(parse_confirmation("  yes  "));

        assert!(!parse_confirmation(""));
        assert!(!parse_confirmation("n"));
        assert!(!parse_confirmation("no"));
        assert!(!parse_confirmation("maybe"));
        assert!(!parse_confirmation("yep"));
    }
}
