//! Fatal startup errors.

use std::fmt;
use std::panic::Location;

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Startup step that failed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StartupStage {
    EventLoop,
    Window,
    Renderer,
    Canvas,
    Font,
    Icon,
}

impl fmt::Display for StartupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StartupStage::EventLoop => "event loop",
            StartupStage::Window => "window",
            StartupStage::Renderer => "renderer",
            StartupStage::Canvas => "composition buffer",
            StartupStage::Font => "font",
            StartupStage::Icon => "icon",
        })
    }
}

/// A failure during startup. Not retried: the harness reports it and exits.
///
/// Records the source location that raised it so the report can name the
/// failing call site.
#[derive(Debug, Error)]
#[error("{stage} initialization failed")]
pub struct StartupError {
    stage: StartupStage,
    location: &'static Location<'static>,
    #[source]
    source: BoxError,
}

impl StartupError {
    /// Wraps `source`, recording the caller's location. `anyhow` errors keep
    /// their context chain.
    #[track_caller]
    pub fn new(stage: StartupStage, source: impl Into<BoxError>) -> Self {
        Self { stage, location: Location::caller(), source: source.into() }
    }

    #[inline]
    pub fn stage(&self) -> StartupStage {
        self.stage
    }

    /// Source line of the failing call site.
    #[inline]
    pub fn line(&self) -> u32 {
        self.location.line()
    }

    #[inline]
    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    /// `"<this>: <source>: <source's source>..."`.
    pub fn chain(&self) -> String {
        let mut out = self.to_string();
        let mut next: Option<&(dyn std::error::Error + 'static)> = Some(self.source.as_ref());
        while let Some(err) = next {
            out.push_str(": ");
            out.push_str(&err.to_string());
            next = err.source();
        }
        out
    }

    /// Logs `FAILED (@<line>): <chain>` at error level.
    pub fn report(&self) {
        log::error!("FAILED (@{}): {}", self.line(), self.chain());
    }
}
