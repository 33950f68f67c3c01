//! Non fatal conditions hit while converting rows
//!
//! Nothing in the row functions is allowed to fail or panic because of bad pixel data or a bad
//! buffer description. Instead the condition is handed to a [`Diagnostics`] sink and the
//! affected pixel is skipped or rendered black.

use std::sync::atomic::{AtomicU32, Ordering};

/// A condition worth telling someone about, with the detail of the first occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// A surface uses a color encoding without a conversion matrix
    UnsupportedEncoding { raw: u32 },

    /// A source pixel lies outside the mapped slice of `plane` (or the plane is missing)
    SourceOutOfBounds { plane: usize },

    /// A destination pixel lies outside the mapped slice of `plane` (or the plane is missing)
    DestinationOutOfBounds { plane: usize },
}

/// The cause of a [`Diagnostic`] without its detail, used for suppression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum DiagnosticKind {
    UnsupportedEncoding = 0,
    SourceOutOfBounds = 1,
    DestinationOutOfBounds = 2,
}

impl Diagnostic {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::UnsupportedEncoding { .. } => DiagnosticKind::UnsupportedEncoding,
            Diagnostic::SourceOutOfBounds { .. } => DiagnosticKind::SourceOutOfBounds,
            Diagnostic::DestinationOutOfBounds { .. } => DiagnosticKind::DestinationOutOfBounds,
        }
    }
}

/// Receiver of [`Diagnostic`]s, called from the per pixel hot path
pub trait Diagnostics: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Logs every distinct [`DiagnosticKind`] once through `tracing` and drops repeats
#[derive(Debug, Default)]
pub struct LogOnce {
    seen: AtomicU32,
}

impl LogOnce {
    pub const fn new() -> Self {
        Self {
            seen: AtomicU32::new(0),
        }
    }

    pub fn has_reported(&self, kind: DiagnosticKind) -> bool {
        self.seen.load(Ordering::Relaxed) & kind_bit(kind) != 0
    }

    /// Number of distinct kinds reported so far
    pub fn reported_count(&self) -> u32 {
        self.seen.load(Ordering::Relaxed).count_ones()
    }
}

fn kind_bit(kind: DiagnosticKind) -> u32 {
    1 << kind as u32
}

impl Diagnostics for LogOnce {
    fn report(&self, diagnostic: Diagnostic) {
        let bit = kind_bit(diagnostic.kind());

        if self.seen.fetch_or(bit, Ordering::Relaxed) & bit != 0 {
            return;
        }

        match diagnostic {
            Diagnostic::UnsupportedEncoding { raw } => {
                tracing::warn!(raw, "Not supported color encoding, rendering black");
            }
            Diagnostic::SourceOutOfBounds { plane } => {
                tracing::warn!(plane, "Source pixel outside of the mapped plane, skipping");
            }
            Diagnostic::DestinationOutOfBounds { plane } => {
                tracing::warn!(plane, "Destination pixel outside of the mapped plane, skipping");
            }
        }
    }
}

static GLOBAL: LogOnce = LogOnce::new();

/// Process wide sink used by surfaces and writeback jobs unless another one is injected
pub fn global() -> &'static LogOnce {
    &GLOBAL
}
