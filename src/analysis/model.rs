//! Lazily loaded, shared annotator.
//!
//! [`ModelHandle`] runs its loader exactly once. The first caller flips the state to
//! `Loading` and runs the loader outside the lock; concurrent callers wait on a condvar
//! until the state settles. A load failure is sticky: every caller, present and future,
//! receives [`AnalysisError::ModelUnavailable`].

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Condvar, Mutex, MutexGuard};

use anyhow::Result;

use crate::annotator::sentences::ensure_sentences;
use crate::annotator::DocumentAnnotator;
use crate::error::AnalysisError;

/// Produces the annotator on first use.
pub type AnnotatorLoader = Box<dyn Fn() -> Result<Box<dyn DocumentAnnotator>> + Send + Sync>;

/// Observable lifecycle of a [`ModelHandle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelStatus {
    Uninitialized,
    Loading,
    Ready,
    Failed(String),
}

enum State {
    Uninitialized,
    Loading,
    Ready(Arc<dyn DocumentAnnotator>),
    Failed(String),
}

pub struct ModelHandle {
    loader: AnnotatorLoader,
    state: Mutex<State>,
    settled: Condvar,
}

impl ModelHandle {
    pub fn new(loader: AnnotatorLoader) -> Self {
        Self {
            loader,
            state: Mutex::new(State::Uninitialized),
            settled: Condvar::new(),
        }
    }

    /// Wrap an already-built annotator. Sentence segmentation is still ensured.
    pub fn ready(annotator: Box<dyn DocumentAnnotator>) -> Self {
        let annotator: Arc<dyn DocumentAnnotator> = Arc::from(ensure_sentences(annotator));
        Self {
            loader: Box::new(|| -> Result<Box<dyn DocumentAnnotator>> {
                anyhow::bail!("annotator already loaded")
            }),
            state: Mutex::new(State::Ready(annotator)),
            settled: Condvar::new(),
        }
    }

    /// Return the shared annotator, loading it on first call.
    pub fn ensure_model(&self) -> Result<Arc<dyn DocumentAnnotator>, AnalysisError> {
        let mut state = self.lock()?;
        loop {
            match &*state {
                State::Ready(annotator) => return Ok(Arc::clone(annotator)),
                State::Failed(reason) => {
                    return Err(AnalysisError::model_unavailable(reason.clone()))
                }
                State::Uninitialized => break,
                State::Loading => {}
            }
            state = self.settled.wait(state).map_err(|e| {
                AnalysisError::model_unavailable(format!("model lock poisoned: {e}"))
            })?;
        }

        *state = State::Loading;
        drop(state);

        let loaded = self.load();

        let mut state = self.lock()?;
        let result = match loaded {
            Ok(annotator) => {
                *state = State::Ready(Arc::clone(&annotator));
                Ok(annotator)
            }
            Err(reason) => {
                *state = State::Failed(reason.clone());
                Err(AnalysisError::model_unavailable(reason))
            }
        };
        self.settled.notify_all();
        result
    }

    pub fn status(&self) -> ModelStatus {
        match self.state.lock() {
            Ok(state) => match &*state {
                State::Uninitialized => ModelStatus::Uninitialized,
                State::Loading => ModelStatus::Loading,
                State::Ready(_) => ModelStatus::Ready,
                State::Failed(reason) => ModelStatus::Failed(reason.clone()),
            },
            Err(e) => ModelStatus::Failed(format!("model lock poisoned: {e}")),
        }
    }

    fn load(&self) -> Result<Arc<dyn DocumentAnnotator>, String> {
        tracing::info!("loading annotator");
        // Everything before publishing runs under catch_unwind so the state always settles.
        let loaded = panic::catch_unwind(AssertUnwindSafe(|| self.prepare()))
            .unwrap_or_else(|_| Err(anyhow::anyhow!("annotator load panicked")));
        loaded.map_err(|e| {
            tracing::error!(error = %format!("{e:#}"), "annotator failed to load");
            format!("{e:#}")
        })
    }

    fn prepare(&self) -> Result<Arc<dyn DocumentAnnotator>> {
        let annotator = (self.loader)()?;
        let capabilities = annotator.capabilities();
        if !capabilities.noun_phrases {
            tracing::warn!("annotator has no noun-phrase support, keyword tier will be empty");
        }
        let annotator: Arc<dyn DocumentAnnotator> = Arc::from(ensure_sentences(annotator));
        tracing::info!(?capabilities, "annotator ready");
        Ok(annotator)
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, AnalysisError> {
        self.state
            .lock()
            .map_err(|e| AnalysisError::model_unavailable(format!("model lock poisoned: {e}")))
    }
}
