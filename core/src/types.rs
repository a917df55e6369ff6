//! Domain DTOs for the employee collection resource.
//!
//! # Design
//! `id` is an opaque string: the remote service is the sole authority for
//! assigning ids and the client never interprets them (the bundled mock
//! backend hands out UUID strings, the hosted service used numeric strings).
//! `salary` is likewise carried exactly as the string the service stores —
//! no currency parsing happens anywhere in the core.

use serde::{Deserialize, Serialize};

/// A single employee record as confirmed by the remote service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub salary: String,
}

/// Request payload for creating or rewriting an employee. The service
/// assigns (create) or preserves (update) the id; the payload never carries
/// one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub salary: String,
}
