//! Error types for the trait-dispatch lowering pass.
//!
//! Two disjoint failure domains, kept apart in the type system:
//!
//! ```text
//! GraftError (top-level wrapper)
//! ├── CompileError - raised while the pass runs, with source locations
//! └── ResolveError - raised later, when the synthesized resolver executes
//!                    inside the host program
//! ```
//!
//! `CompileError` is fatal to the pass: no partial recovery, no output.
//! `ResolveError` never occurs during the pass at all; it is the failure
//! vocabulary of the generated resolver routine, mirrored here by the
//! runtime reference model in [`crate::runtime`].

use thiserror::Error;

use crate::Span;

/// Errors raised while running the lowering pass over one compiled unit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    /// A provider statement appeared somewhere other than directly inside
    /// a block or the unit's top level.
    #[error("at {span}: provider statement must be placed in a block or at the top level")]
    MisplacedProvider {
        /// Where the provider statement occurred.
        span: Span,
    },

    /// A provider statement did not wrap exactly one expression.
    #[error("at {span}: provider statement requires an expression")]
    ProviderMissingExpression {
        /// Where the provider statement occurred.
        span: Span,
    },

    /// A trait-access marker did not have the expected two-level member
    /// shape. The upstream lexical layer never produces this, so it is
    /// surfaced as an internal error.
    #[error("internal error at {span}: malformed trait access marker")]
    MalformedTraitAccess {
        /// Where the marker occurred.
        span: Span,
    },

    /// A placeholder marker survived the pass. The usual cause is a trait
    /// access with no provider declaration anywhere in its ancestor chain.
    #[error("at {span}: trait access used without any governing provider declaration")]
    UnresolvedMarker {
        /// Where the leftover marker occurred.
        span: Span,
    },
}

impl CompileError {
    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            CompileError::MisplacedProvider { span } => *span,
            CompileError::ProviderMissingExpression { span } => *span,
            CompileError::MalformedTraitAccess { span } => *span,
            CompileError::UnresolvedMarker { span } => *span,
        }
    }
}

/// Failures of the resolver routine at host-program runtime.
///
/// These carry no spans: by the time they can occur the pass is long
/// finished and no source mapping exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Two or more visible providers expose the requested trait name.
    #[error("multiple providers for trait {name}")]
    MultipleProviders {
        /// The ambiguous trait name.
        name: String,
    },

    /// No visible provider exposes the requested trait name.
    #[error("no provider for trait {name}")]
    NoProvider {
        /// The missing trait name.
        name: String,
    },
}

/// The unified error type wrapping both failure domains.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraftError {
    /// A compile-time error from the pass itself.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// A runtime error of the resolver contract.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl GraftError {
    /// Check if this is a compile-time error.
    pub fn is_compile(&self) -> bool {
        matches!(self, GraftError::Compile(_))
    }

    /// Check if this is a resolver runtime error.
    pub fn is_resolve(&self) -> bool {
        matches!(self, GraftError::Resolve(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_display() {
        let err = CompileError::MisplacedProvider {
            span: Span::new(4, 9, 10),
        };
        assert_eq!(
            format!("{err}"),
            "at 4:9: provider statement must be placed in a block or at the top level"
        );
    }

    #[test]
    fn compile_error_span() {
        let span = Span::new(7, 3, 12);
        assert_eq!(CompileError::UnresolvedMarker { span }.span(), span);
        assert_eq!(CompileError::MalformedTraitAccess { span }.span(), span);
    }

    #[test]
    fn resolve_error_display() {
        let err = ResolveError::MultipleProviders {
            name: "value".to_string(),
        };
        assert_eq!(format!("{err}"), "multiple providers for trait value");

        let err = ResolveError::NoProvider {
            name: "value".to_string(),
        };
        assert_eq!(format!("{err}"), "no provider for trait value");
    }

    #[test]
    fn unified_wrapper_is_transparent() {
        let err: GraftError = CompileError::ProviderMissingExpression {
            span: Span::new(1, 1, 1),
        }
        .into();
        assert!(err.is_compile());
        assert!(!err.is_resolve());
        assert_eq!(format!("{err}"), "at 1:1: provider statement requires an expression");

        let err: GraftError = ResolveError::NoProvider {
            name: "x".to_string(),
        }
        .into();
        assert!(err.is_resolve());
    }
}
