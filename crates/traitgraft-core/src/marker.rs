//! Reserved marker spellings shared between the passes.
//!
//! The upstream lexical layer recognizes the surface syntax and encodes it
//! as placeholder tree shapes before this pass ever sees the unit:
//!
//! | surface                    | placeholder encoding                  |
//! |----------------------------|---------------------------------------|
//! | `use traits * from <e>;`   | labeled statement `__traits__: <e>;`  |
//! | `obj.*name`                | `obj.__traitref__.name`               |
//! | `obj.*[expr]`              | `obj.__traitref__[expr]`              |
//!
//! The substitution is purely lexical, so it can also fire inside string
//! and template literal text; the literal text patcher restores the surface
//! spellings there after the structural passes finish.

/// Reserved label marking a provider statement.
pub const TRAITS_LABEL: &str = "__traits__";

/// Reserved placeholder property marking a trait access.
pub const TRAIT_REF_PROP: &str = "__traitref__";

/// Textual spelling of the provider marker as it appears in literal text.
pub const PROVIDER_MARKER_TEXT: &str = "__traits__:";

/// Canonical surface spelling of the provider syntax.
pub const PROVIDER_SURFACE_TEXT: &str = "use traits * from";

/// Textual spelling of the access marker as it appears in literal text.
pub const ACCESS_MARKER_TEXT: &str = ".__traitref__.";

/// Canonical surface spelling of the access syntax.
pub const ACCESS_SURFACE_TEXT: &str = ".*";
