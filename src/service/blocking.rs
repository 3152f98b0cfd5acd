//! Synchronous facade over [`GoalPipeline`].
//!
//! [`BlockingGoalPipeline`] owns a dedicated current-thread runtime, so it
//! can be called from plain synchronous code and from inside an already
//! running tokio runtime alike. In the second case the batch is driven on
//! a scoped worker thread: blocking on a runtime from a thread that is
//! already inside one would panic.

use std::future::Future;

use tokio::runtime::{Builder, Handle, Runtime};

use crate::api::JsonSource;
use crate::domain::{GameSummary, Goal};
use crate::error::GoalsError;

use super::GoalPipeline;

/// Blocking wrapper around a [`GoalPipeline`] with its own runtime.
#[derive(Debug)]
pub struct BlockingGoalPipeline<S> {
    // Always `Some` until dropped.
    runtime: Option<Runtime>,
    pipeline: GoalPipeline<S>,
}

impl<S: JsonSource> BlockingGoalPipeline<S> {
    /// Wraps `pipeline` and builds the isolated runtime that drives it.
    ///
    /// # Errors
    ///
    /// Returns [`GoalsError::Runtime`] if the runtime cannot be created.
    pub fn new(pipeline: GoalPipeline<S>) -> Result<Self, GoalsError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .thread_name("nhl-goals-fetch")
            .build()
            .map_err(|e| GoalsError::Runtime(format!("failed to build runtime: {e}")))?;
        Ok(Self {
            runtime: Some(runtime),
            pipeline,
        })
    }

    /// Returns the wrapped async pipeline.
    #[must_use]
    pub const fn pipeline(&self) -> &GoalPipeline<S> {
        &self.pipeline
    }

    /// Blocking version of [`GoalPipeline::collect_goals`].
    ///
    /// # Errors
    ///
    /// Same as [`GoalPipeline::collect_goals`], plus
    /// [`GoalsError::Runtime`] if the worker thread panics.
    pub fn collect_goals(
        &self,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Vec<Goal>, GoalsError> {
        self.run(|| self.pipeline.collect_goals(start, end))
    }

    /// Blocking version of [`GoalPipeline::resolve_games`].
    ///
    /// # Errors
    ///
    /// Same as [`GoalPipeline::resolve_games`], plus
    /// [`GoalsError::Runtime`] if the worker thread panics.
    pub fn resolve_games(
        &self,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Vec<GameSummary>, GoalsError> {
        self.run(|| self.pipeline.resolve_games(start, end))
    }

    fn run<'a, F, Fut, T>(&'a self, make: F) -> Result<T, GoalsError>
    where
        F: FnOnce() -> Fut + Send + 'a,
        Fut: Future<Output = Result<T, GoalsError>> + 'a,
        T: Send + 'a,
    {
        let Some(runtime) = self.runtime.as_ref() else {
            return Err(GoalsError::Runtime("runtime already shut down".to_string()));
        };
        if Handle::try_current().is_err() {
            return runtime.block_on(make());
        }

        tracing::debug!("runtime already active on this thread, using a worker thread");
        std::thread::scope(|scope| {
            scope
                .spawn(|| runtime.block_on(make()))
                .join()
                .unwrap_or_else(|_| {
                    Err(GoalsError::Runtime("pipeline worker thread panicked".to_string()))
                })
        })
    }
}

impl<S> Drop for BlockingGoalPipeline<S> {
    fn drop(&mut self) {
        // Dropping a runtime inside an async context panics.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
