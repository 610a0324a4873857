//! Error taxonomy of the translation core.
//!
//! Recoverable row-level problems (`BadEncoding`, `CannotPresentAs`) never
//! abort an enumeration pass on their own; whether they surface at all is
//! governed by `OntConfig::ignore_read_errors`. `WriteContract` is a caller
//! contract violation and fails the whole facade call.

use crate::profile::ViewKind;
use ontograph_graph::GraphError;

#[derive(Debug, thiserror::Error)]
pub enum OntError {
    /// A candidate statement matched a kind's coarse pattern but violates
    /// its shape rules.
    #[error("bad axiom encoding at {triple}: {reason}")]
    BadEncoding { triple: String, reason: String },

    /// A node cannot present the typed view a kind requires.
    #[error("cannot present {node} as {kind:?}")]
    CannotPresentAs { node: String, kind: ViewKind },

    /// `add` was called with an axiom whose components cannot be written.
    #[error("write contract violation: {0}")]
    WriteContract(String),

    /// A view outlived its owning model facade.
    #[error("axiom view has no live origin")]
    NoOrigin,

    #[error(transparent)]
    Graph(#[from] GraphError),
}
