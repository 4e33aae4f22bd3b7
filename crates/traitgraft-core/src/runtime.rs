//! Runtime reference model of the resolver contract.
//!
//! The synthesized resolver routine executes later, inside the host
//! program, under the host runtime. This module states its semantics as
//! plain Rust over a minimal dynamic value model, so the runtime failure
//! domain (ambiguity, absence) is executable and testable here without a
//! host evaluator: given a trait name and ordered provider values, scan in
//! order for properties whose runtime kind is "unique token", require
//! exactly one candidate, and return it.

use rustc_hash::FxHashMap;

use crate::error::ResolveError;

/// An opaque unique token contributed by a provider for one trait name.
///
/// Plays the role of a host-runtime symbol: distinct from every ordinary
/// property key and from every other token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraitToken(u32);

/// Mints [`TraitToken`]s, each distinct from all previously minted ones.
#[derive(Debug, Default)]
pub struct TokenSource {
    next: u32,
}

impl TokenSource {
    /// A fresh source starting from zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a new unique token.
    pub fn mint(&mut self) -> TraitToken {
        let token = TraitToken(self.next);
        self.next += 1;
        token
    }
}

/// A dynamic runtime value, just rich enough to model provider objects.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Number(f64),
    Str(String),
    Token(TraitToken),
    Object(FxHashMap<String, Value>),
}

impl Value {
    /// Build an object value from key/value pairs.
    pub fn object(props: impl IntoIterator<Item = (&'static str, Value)>) -> Value {
        Value::Object(
            props
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    /// The property at `key`, if this is an object that has it.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(props) => props.get(key),
            _ => None,
        }
    }
}

/// Resolve a trait name against ordered provider values.
///
/// A provider contributes a candidate when it carries a value at `name`
/// whose runtime kind is a unique token; any other value there (or a
/// non-object provider) is ignored. More than one candidate across the
/// scan fails with [`ResolveError::MultipleProviders`]; zero candidates
/// fail with [`ResolveError::NoProvider`].
pub fn resolve(name: &str, providers: &[Value]) -> Result<TraitToken, ResolveError> {
    let mut found: Option<TraitToken> = None;
    for provider in providers {
        if let Some(Value::Token(token)) = provider.get(name) {
            if found.is_some() {
                return Err(ResolveError::MultipleProviders {
                    name: name.to_string(),
                });
            }
            found = Some(*token);
        }
    }
    found.ok_or_else(|| ResolveError::NoProvider {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique() {
        let mut source = TokenSource::new();
        let a = source.mint();
        let b = source.mint();
        assert_ne!(a, b);
    }

    #[test]
    fn resolves_single_candidate() {
        let mut source = TokenSource::new();
        let token = source.mint();
        let provider = Value::object([("one", Value::Token(token))]);
        assert_eq!(resolve("one", &[provider]), Ok(token));
    }

    #[test]
    fn later_provider_can_supply_the_name() {
        let mut source = TokenSource::new();
        let one = source.mint();
        let two = source.mint();
        let first = Value::object([("one", Value::Token(one))]);
        let second = Value::object([("two", Value::Token(two))]);
        assert_eq!(resolve("two", &[first, second]), Ok(two));
    }

    #[test]
    fn two_candidates_are_ambiguous() {
        let mut source = TokenSource::new();
        let first = Value::object([("value", Value::Token(source.mint()))]);
        let second = Value::object([("value", Value::Token(source.mint()))]);
        assert_eq!(
            resolve("value", &[first, second]),
            Err(ResolveError::MultipleProviders {
                name: "value".to_string()
            })
        );
    }

    #[test]
    fn zero_candidates_is_absence() {
        let provider = Value::object([("other", Value::Number(1.0))]);
        assert_eq!(
            resolve("value", &[provider]),
            Err(ResolveError::NoProvider {
                name: "value".to_string()
            })
        );
    }

    #[test]
    fn non_token_properties_are_not_candidates() {
        let mut source = TokenSource::new();
        let token = source.mint();
        // A plain number under the same name does not make this ambiguous.
        let noise = Value::object([("value", Value::Number(7.0))]);
        let real = Value::object([("value", Value::Token(token))]);
        assert_eq!(resolve("value", &[noise, real]), Ok(token));
    }

    #[test]
    fn non_object_providers_are_skipped() {
        let mut source = TokenSource::new();
        let token = source.mint();
        let real = Value::object([("value", Value::Token(token))]);
        assert_eq!(
            resolve("value", &[Value::Undefined, Value::Number(3.0), real]),
            Ok(token)
        );
    }
}
