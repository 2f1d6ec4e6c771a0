// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use leavecal_domain::DomainError;

/// Errors that can occur in calendar components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// A leave request row index is out of range.
    #[error("Leave request {index} not found: table has {len} rows")]
    RequestNotFound {
        /// The requested row.
        index: usize,
        /// The number of rows in the table.
        len: usize,
    },
    /// A repository could not provide its data.
    #[error("Failed to load {repository}: {message}")]
    RepositoryUnavailable {
        /// What was being loaded.
        repository: String,
        /// A description of the failure.
        message: String,
    },
}
