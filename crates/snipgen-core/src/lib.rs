//! Snipgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Snipgen
//! snippet authoring tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           snipgen-cli (CLI)             │
//! │   (flags, prompts, $EDITOR, stdout)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (FormSession, SnippetRenderer,          │
//! │  CopyService, EditorSession)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Clipboard, Clock, EditorHost)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    snipgen-adapters (Infrastructure)    │
//! │ (SystemClipboard, SystemClock, files)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (FormModel, Prefix, transform, catalog) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use snipgen_core::prelude::*;
//!
//! let mut session = FormSession::default();
//! session.apply(FieldUpdate::Name("log".into()));
//! session.apply(FieldUpdate::PrefixInput("log, clg".into()));
//! session.apply(FieldUpdate::Body("console.log($1)".into()));
//!
//! let json = session.preview().unwrap();
//! assert!(json.contains("\"log\": {"));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CopyOutcome, CopyService, EditorSession, FieldUpdate, FormSession, SnippetRenderer,
        ports::{Clipboard, Clock, EditorHost},
    };
    pub use crate::domain::{
        FormModel, Insertion, Prefix, Scope, ScopeOption, SnippetExportEntry, VscodeSnippet,
        insert_at_cursor, scope_catalog, transform,
    };
    pub use crate::error::{SnipgenError, SnipgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
