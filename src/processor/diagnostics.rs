use std::fmt::Debug;

/// Every converter diagnostic fails the round on the host side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    Error,
}

/// Soft failures the converter reports and keeps going after
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    InvalidFieldModifier,
    PrivateEnclosingClass,
    UnmappableFieldType,
}

/// What a diagnostic points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject<E, C> {
    Element(E),
    Class(C),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic<E, C> {
    pub kind: DiagnosticKind,
    pub code: DiagnosticCode,
    pub message: String,
    pub subject: Subject<E, C>,
}

impl<E, C> Diagnostic<E, C> {
    pub fn error(code: DiagnosticCode, message: impl Into<String>, subject: Subject<E, C>) -> Self {
        Self { kind: DiagnosticKind::Error, code, message: message.into(), subject }
    }
}

/// Write-only diagnostic sink owned by the host for one round
pub trait Messager<E, C> {
    fn print_message(&mut self, diagnostic: Diagnostic<E, C>);
}

/// Collects diagnostics in report order
#[derive(Debug, Clone)]
pub struct Diagnostics<E, C> {
    entries: Vec<Diagnostic<E, C>>,
}

impl<E, C> Default for Diagnostics<E, C> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<E, C> Diagnostics<E, C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|d| d.kind == DiagnosticKind::Error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic<E, C>> {
        self.entries.iter()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|d| d.message.as_str()).collect()
    }

    pub fn with_code(&self, code: DiagnosticCode) -> impl Iterator<Item = &Diagnostic<E, C>> {
        self.entries.iter().filter(move |d| d.code == code)
    }

    pub fn into_vec(self) -> Vec<Diagnostic<E, C>> {
        self.entries
    }
}

impl<E, C> Messager<E, C> for Diagnostics<E, C> {
    fn print_message(&mut self, diagnostic: Diagnostic<E, C>) {
        self.entries.push(diagnostic);
    }
}

/// Forwards every diagnostic to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingMessager {
    reported: usize,
}

impl LoggingMessager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl<E: Debug, C: Debug> Messager<E, C> for LoggingMessager {
    fn print_message(&mut self, diagnostic: Diagnostic<E, C>) {
        self.reported += 1;
        match diagnostic.kind {
            DiagnosticKind::Error => log::error!("{} [{:?}] at {:?}", diagnostic.message, diagnostic.code, diagnostic.subject),
        }
    }
}
