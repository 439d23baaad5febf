//! Editor Session - glue between the form and the body editor.
//!
//! Responsibilities:
//! 1. Register editor languages with the host, once per session
//! 2. Derive the highlighting hint from the first scope
//! 3. Round-trip the body through the host editor

use std::{collections::HashSet, sync::Mutex};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::EditorHost,
        services::{FieldUpdate, FormSession},
    },
    domain::{
        Scope,
        scope_catalog::{self, PLAINTEXT},
    },
    error::SnipgenResult,
};

/// Per-session editor integration state.
pub struct EditorSession {
    host: Box<dyn EditorHost>,
    /// Languages the host has accepted so far.
    registered: Mutex<HashSet<&'static str>>,
    language: &'static str,
}

impl EditorSession {
    pub fn new(host: Box<dyn EditorHost>) -> Self {
        Self {
            host,
            registered: Mutex::new(HashSet::new()),
            language: PLAINTEXT,
        }
    }

    /// Register every distinct editor language with the host.
    ///
    /// Each language is registered at most once per session. After a failed
    /// registration the next call resumes with the languages still missing.
    pub fn ensure_registered(&self) -> SnipgenResult<usize> {
        let mut registered = self
            .registered
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let languages = scope_catalog::editor_languages();
        let pending: Vec<&'static str> = languages
            .iter()
            .copied()
            .filter(|language| !registered.contains(language))
            .collect();
        if pending.is_empty() {
            return Ok(registered.len());
        }

        for language in pending {
            self.host.register_language(language)?;
            registered.insert(language);
        }

        info!(count = registered.len(), "Editor languages registered");
        Ok(registered.len())
    }

    /// Update and return the language hint for `scope`.
    ///
    /// An empty scope resets to plain text. An identifier the catalog does
    /// not know leaves the previous hint in place.
    pub fn sync_language(&mut self, scope: &Scope) -> &'static str {
        match scope.first() {
            None => self.language = PLAINTEXT,
            Some(id) => match scope_catalog::find(id) {
                Some(option) => self.language = option.editor_language(),
                None => debug!(scope = id, "Unknown scope, keeping language hint"),
            },
        }
        self.language
    }

    pub fn language(&self) -> &'static str {
        self.language
    }

    /// Edit the session's body in the host editor.
    ///
    /// Returns `true` when the body was replaced, `false` when the editor
    /// was closed without saving.
    #[instrument(skip_all)]
    pub fn edit_body(&mut self, session: &mut FormSession) -> SnipgenResult<bool> {
        self.ensure_registered()?;
        let language = self.sync_language(&session.form().scope);

        match self.host.edit(&session.form().body, language)? {
            Some(body) => {
                session.apply(FieldUpdate::Body(body));
                Ok(true)
            }
            None => {
                debug!("Editor closed without saving");
                Ok(false)
            }
        }
    }
}
