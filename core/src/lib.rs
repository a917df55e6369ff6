//! Client core for a remote employee roster: a stateless request
//! builder/parser plus a form/list synchronizer.
//!
//! # Overview
//! The crate mirrors one REST collection resource (`{base}/employee`) into
//! local state and keeps that mirror consistent with what the remote
//! service confirms. No I/O happens here (host-does-IO pattern): the host
//! executes each `HttpRequest` and feeds the `HttpResponse` back, which
//! makes every behavior — including network-failure handling — drivable
//! from tests with canned responses.
//!
//! # Design
//! - `RosterClient` is stateless; each operation is a `build_*`/`parse_*`
//!   pair with the I/O boundary between them.
//! - `EmployeeForm` owns the collection mirror and the edit draft, and
//!   mutates the mirror only from server-confirmed responses.
//! - Responses are correlated with submissions by ticket, so a response
//!   arriving after the user abandoned the dialog is dropped, not applied.
//! - Types use owned `String` / `Vec` fields so values cross thread and
//!   embedding boundaries freely.

pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod types;

pub use client::RosterClient;
pub use error::ApiError;
pub use form::{EmployeeForm, FormError, Mode, Notice, Operation, Submission, Ticket};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Employee, EmployeeDraft};
