//! Form/list synchronizer: the in-memory mirror of the remote employee
//! collection plus the transient draft being edited.
//!
//! # Design
//! `EmployeeForm` owns the mirror and the draft and never touches the
//! network. Submitting hands the host a [`Submission`] — a correlation
//! [`Ticket`] plus the `HttpRequest` to execute — and the host feeds the
//! outcome back through [`EmployeeForm::complete`]. The mirror is mutated
//! only from server-confirmed responses, never from local guesses, so a
//! failed operation leaves the displayed state exactly as it was.
//!
//! Tickets carry a sequence number: a response that straggles in after the
//! user cancelled the dialog (or after a newer refresh was issued) no longer
//! describes the active dialog and is dropped instead of applied.

use std::fmt;

use log::{debug, warn};

use crate::client::RosterClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Employee, EmployeeDraft};

/// The remote operations a form can have in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Refresh,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Refresh => "refresh",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Which flavor of editing the form is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Blank form; submitting creates a new record.
    Create,
    /// Dialog opened from a list row; submitting rewrites or deletes that
    /// record.
    Update,
}

/// Correlates a completed response with the submission that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    op: Operation,
    seq: u64,
}

impl Ticket {
    pub fn operation(&self) -> Operation {
        self.op
    }
}

/// A request the host must execute, plus the ticket to hand back with the
/// outcome.
#[derive(Debug)]
pub struct Submission {
    pub ticket: Ticket,
    pub request: HttpRequest,
}

/// Local rejections raised before any request is built.
#[derive(Debug)]
pub enum FormError {
    /// Create submitted with an empty name field.
    EmptyName,
    /// Create submitted with an empty salary field.
    EmptySalary,
    /// Update or delete attempted with no record selected.
    NoSelection,
    /// The id is not present in the mirror.
    UnknownId(String),
    /// A submission for this dialog is already in flight.
    Busy,
    /// The draft could not be encoded for transmission.
    Api(ApiError),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::EmptyName => write!(f, "name must not be empty"),
            FormError::EmptySalary => write!(f, "salary must not be empty"),
            FormError::NoSelection => write!(f, "no record is selected"),
            FormError::UnknownId(id) => write!(f, "no record with id {id} in the list"),
            FormError::Busy => write!(f, "a submission is already in flight"),
            FormError::Api(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for FormError {}

/// User-visible acknowledgment produced by a terminal completion. Each
/// confirmed create/update/delete yields exactly one.
#[derive(Debug)]
pub enum Notice {
    Added,
    Updated,
    Deleted,
    Failed { op: Operation, error: ApiError },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Added => write!(f, "employee added"),
            Notice::Updated => write!(f, "employee updated"),
            Notice::Deleted => write!(f, "employee deleted"),
            Notice::Failed { op, error } => write!(f, "{op} failed: {error}"),
        }
    }
}

/// Dialog/submission lifecycle. `Awaiting` remembers the composing mode to
/// fall back to on failure, and the id the request addressed so
/// reconciliation never trusts the response to name the right record.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Idle,
    Composing(Mode),
    Awaiting {
        mode: Mode,
        op: Operation,
        seq: u64,
        target: Option<String>,
    },
}

/// Owns the collection mirror and the edit draft, and reconciles both
/// against server-confirmed responses.
#[derive(Debug)]
pub struct EmployeeForm {
    client: RosterClient,
    mirror: Vec<Employee>,
    name: String,
    salary: String,
    selected: Option<Employee>,
    phase: Phase,
    pending_refresh: Option<u64>,
    next_seq: u64,
}

impl EmployeeForm {
    pub fn new(client: RosterClient) -> Self {
        Self {
            client,
            mirror: Vec::new(),
            name: String::new(),
            salary: String::new(),
            selected: None,
            phase: Phase::Idle,
            pending_refresh: None,
            next_seq: 0,
        }
    }

    /// The client-held copy of the remote collection, in the order the
    /// server listed it. Re-read after every [`complete`](Self::complete)
    /// call to pick up changes.
    pub fn mirror(&self) -> &[Employee] {
        &self.mirror
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn salary(&self) -> &str {
        &self.salary
    }

    /// The record the dialog was opened from, if any.
    pub fn selected(&self) -> Option<&Employee> {
        self.selected.as_ref()
    }

    /// Whether the edit dialog is showing.
    pub fn dialog_open(&self) -> bool {
        matches!(
            self.phase,
            Phase::Composing(Mode::Update)
                | Phase::Awaiting {
                    mode: Mode::Update,
                    ..
                }
        )
    }

    /// Current editing mode; `None` when the form is idle.
    pub fn mode(&self) -> Option<Mode> {
        match self.phase {
            Phase::Idle => None,
            Phase::Composing(mode) | Phase::Awaiting { mode, .. } => Some(mode),
        }
    }

    fn ticket(&mut self, op: Operation) -> Ticket {
        self.next_seq += 1;
        Ticket {
            op,
            seq: self.next_seq,
        }
    }

    /// Build the full-list fetch that (re)populates the mirror. Issued once
    /// at startup and again whenever the host wants a fresh copy; a newer
    /// refresh supersedes any older one still in flight.
    pub fn refresh(&mut self) -> Submission {
        let ticket = self.ticket(Operation::Refresh);
        self.pending_refresh = Some(ticket.seq);
        Submission {
            ticket,
            request: self.client.build_list(),
        }
    }

    /// Edit the draft's name field. Typing into a blank form begins a
    /// create.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        if self.phase == Phase::Idle {
            self.phase = Phase::Composing(Mode::Create);
        }
    }

    /// Edit the draft's salary field. Typing into a blank form begins a
    /// create.
    pub fn set_salary(&mut self, salary: impl Into<String>) {
        self.salary = salary.into();
        if self.phase == Phase::Idle {
            self.phase = Phase::Composing(Mode::Create);
        }
    }

    /// Open the edit dialog for the mirror record with `id`, pre-filling
    /// the draft from it. At most one record is selected at a time.
    pub fn select(&mut self, id: &str) -> Result<(), FormError> {
        if matches!(self.phase, Phase::Awaiting { .. }) {
            return Err(FormError::Busy);
        }
        let record = self
            .mirror
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| FormError::UnknownId(id.to_string()))?;
        self.name = record.name.clone();
        self.salary = record.salary.clone();
        self.selected = Some(record);
        self.phase = Phase::Composing(Mode::Update);
        Ok(())
    }

    /// Submit the draft: a create from the blank form, an update from the
    /// dialog. Create validates both fields locally and builds no request
    /// when either is empty; update trusts the source record and skips
    /// validation.
    pub fn submit(&mut self) -> Result<Submission, FormError> {
        match self.phase {
            Phase::Awaiting { .. } => Err(FormError::Busy),
            Phase::Idle | Phase::Composing(Mode::Create) => self.submit_create(),
            Phase::Composing(Mode::Update) => self.submit_update(),
        }
    }

    fn submit_create(&mut self) -> Result<Submission, FormError> {
        if self.name.is_empty() {
            return Err(FormError::EmptyName);
        }
        if self.salary.is_empty() {
            return Err(FormError::EmptySalary);
        }
        let request = self.client.build_create(&self.draft()).map_err(FormError::Api)?;
        let ticket = self.ticket(Operation::Create);
        self.phase = Phase::Awaiting {
            mode: Mode::Create,
            op: Operation::Create,
            seq: ticket.seq,
            target: None,
        };
        Ok(Submission { ticket, request })
    }

    fn submit_update(&mut self) -> Result<Submission, FormError> {
        let Some(record) = &self.selected else {
            return Err(FormError::NoSelection);
        };
        let id = record.id.clone();
        let request = self
            .client
            .build_update(&id, &self.draft())
            .map_err(FormError::Api)?;
        let ticket = self.ticket(Operation::Update);
        self.phase = Phase::Awaiting {
            mode: Mode::Update,
            op: Operation::Update,
            seq: ticket.seq,
            target: Some(id),
        };
        Ok(Submission { ticket, request })
    }

    /// Delete the record the dialog was opened from.
    pub fn delete_selected(&mut self) -> Result<Submission, FormError> {
        if matches!(self.phase, Phase::Awaiting { .. }) {
            return Err(FormError::Busy);
        }
        let Some(record) = &self.selected else {
            return Err(FormError::NoSelection);
        };
        let id = record.id.clone();
        let request = self.client.build_delete(&id);
        let ticket = self.ticket(Operation::Delete);
        self.phase = Phase::Awaiting {
            mode: Mode::Update,
            op: Operation::Delete,
            seq: ticket.seq,
            target: Some(id),
        };
        Ok(Submission { ticket, request })
    }

    /// Close the dialog and discard the draft without touching the remote
    /// collection. A submission still in flight is orphaned; its response
    /// will be dropped on arrival.
    pub fn cancel(&mut self) {
        self.reset_draft();
        self.phase = Phase::Idle;
    }

    /// Feed the outcome of an executed submission back in. The host passes
    /// the response, or `ApiError::Network` when the transport failed.
    ///
    /// Returns the acknowledgment to show the user; `None` for refresh
    /// outcomes and for stale tickets.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<HttpResponse, ApiError>,
    ) -> Option<Notice> {
        if ticket.op == Operation::Refresh {
            self.complete_refresh(ticket.seq, outcome);
            return None;
        }

        let (mode, target) = match &self.phase {
            Phase::Awaiting {
                mode,
                op,
                seq,
                target,
            } if *op == ticket.op && *seq == ticket.seq => (*mode, target.clone()),
            _ => {
                debug!("dropping stale {} response", ticket.op);
                return None;
            }
        };

        let notice = match ticket.op {
            Operation::Create => match outcome.and_then(|r| self.client.parse_create(r)) {
                Ok(created) => {
                    self.mirror.push(created);
                    self.reset_draft();
                    self.phase = Phase::Idle;
                    Notice::Added
                }
                Err(error) => self.fail(Operation::Create, mode, error),
            },
            Operation::Update => match outcome.and_then(|r| self.client.parse_update(r)) {
                Ok(updated) => {
                    // Reconcile against the id the request addressed; a
                    // response claiming a different id must not strand the
                    // old record in the mirror.
                    if let Some(id) = &target {
                        if let Some(slot) = self.mirror.iter_mut().find(|e| e.id == *id) {
                            *slot = updated;
                        }
                    }
                    self.reset_draft();
                    self.phase = Phase::Idle;
                    Notice::Updated
                }
                Err(error) => self.fail(Operation::Update, mode, error),
            },
            Operation::Delete => match outcome.and_then(|r| self.client.parse_delete(r)) {
                Ok(()) => {
                    if let Some(id) = &target {
                        self.mirror.retain(|e| e.id != *id);
                    }
                    self.reset_draft();
                    self.phase = Phase::Idle;
                    Notice::Deleted
                }
                Err(error) => self.fail(Operation::Delete, mode, error),
            },
            // handled before the phase check
            Operation::Refresh => return None,
        };
        Some(notice)
    }

    fn complete_refresh(&mut self, seq: u64, outcome: Result<HttpResponse, ApiError>) {
        if self.pending_refresh != Some(seq) {
            debug!("dropping superseded refresh response");
            return;
        }
        self.pending_refresh = None;
        match outcome.and_then(|r| self.client.parse_list(r)) {
            Ok(list) => self.mirror = list,
            Err(error) => warn!("refresh failed, keeping current mirror: {error}"),
        }
    }

    fn fail(&mut self, op: Operation, mode: Mode, error: ApiError) -> Notice {
        warn!("{op} failed: {error}");
        self.phase = Phase::Composing(mode);
        Notice::Failed { op, error }
    }

    fn reset_draft(&mut self) {
        self.name.clear();
        self.salary.clear();
        self.selected = None;
    }

    fn draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.clone(),
            salary: self.salary.clone(),
        }
    }
}
