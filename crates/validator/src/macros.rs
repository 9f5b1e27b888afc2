//! Macros for declaring rules and rule-sets with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: Create a single-template leaf rule (struct + `Rule` impl + factory fn)
//! - [`rules!`]: Box a list of rules into a `Vec<Box<dyn Rule>>`
//! - [`field_rules!`]: Build a [`FieldRules`](crate::engine::FieldRules) mapping
//!
//! # Examples
//!
//! ```
//! use vigil_validator::prelude::*;
//! use vigil_validator::rule;
//!
//! rule! {
//!     /// Accepts strings without whitespace.
//!     pub NoSpaces as "no_spaces";
//!     message "{{ value }} must not contain spaces.";
//!     rule(value) { value.as_str().is_some_and(|s| !s.contains(' ')) }
//!     fn no_spaces();
//! }
//!
//! let rules = field_rules! {
//!     "login" => [not_null(), no_spaces()],
//! };
//! assert_eq!(rules.len(), 1);
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a leaf rule with a single message template: struct definition,
/// `new`/`Default`, a `.message(...)` builder, the [`Rule`](crate::foundation::Rule)
/// implementation, and a `const` factory function.
///
/// `#[derive(Debug, Clone, PartialEq, Eq)]` is always applied.
///
/// # Variants
///
/// **Null-passing rule** (the usual case, `null` is always valid):
/// ```rust,ignore
/// rule! {
///     pub Boolean as "boolean";
///     message "This value should be of type {{ type }}." with { "type" => "boolean" };
///     rule(value) { value.is_boolean() }
///     fn boolean();
/// }
/// ```
///
/// **Strict rule** (`null` goes through the check like any other value):
/// ```rust,ignore
/// rule! {
///     pub NotNull as "not_null";
///     message "This value should not be null.";
///     strict rule(value) { !value.is_null() }
///     fn not_null();
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Shared expansion ─────────────────────────────────────────────────
    (
        @define
        $(#[$meta:meta])*
        $vis:vis $name:ident as $rule_name:literal;
        message $default:literal $(with { $($key:literal => $param:expr),+ $(,)? })?;
        rule($inp:ident) $cond:expr;
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis struct $name {
            message: $crate::foundation::Message,
        }

        impl $name {
            /// Template used when no custom message is set.
            pub const DEFAULT_MESSAGE: &'static str = $default;

            /// Creates the rule with its default message.
            #[must_use]
            pub const fn new() -> Self {
                Self {
                    message: $crate::foundation::Message::from_static(Self::DEFAULT_MESSAGE),
                }
            }

            /// Replaces the failure message template.
            #[must_use = "builder methods must be chained or built"]
            pub fn message(mut self, template: impl Into<::std::string::String>) -> Self {
                self.message = $crate::foundation::Message::custom(template);
                self
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::foundation::Rule for $name {
            fn name(&self) -> &'static str {
                $rule_name
            }

            fn validate(
                &self,
                $inp: &$crate::foundation::Value,
            ) -> ::std::result::Result<(), $crate::foundation::RuleFailure> {
                if $cond {
                    Ok(())
                } else {
                    Err(self.message.failure($inp, &[$($(($key, $param)),+)?]))
                }
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name::new()
        }
    };

    // ── Strict: null is checked like any other value ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident as $rule_name:literal;
        message $default:literal $(with { $($key:literal => $param:expr),+ $(,)? })?;
        strict rule($inp:ident) $check:block
        fn $factory:ident();
    ) => {
        $crate::rule! {
            @define
            $(#[$meta])*
            $vis $name as $rule_name;
            message $default $(with { $($key => $param),+ })?;
            rule($inp) $check;
            fn $factory();
        }
    };

    // ── Null-passing ─────────────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident as $rule_name:literal;
        message $default:literal $(with { $($key:literal => $param:expr),+ $(,)? })?;
        rule($inp:ident) $check:block
        fn $factory:ident();
    ) => {
        $crate::rule! {
            @define
            $(#[$meta])*
            $vis $name as $rule_name;
            message $default $(with { $($key => $param),+ })?;
            rule($inp) ($inp.is_null() || $check);
            fn $factory();
        }
    };
}

// ============================================================================
// RULES MACRO
// ============================================================================

/// Boxes rules of any concrete type into a `Vec<Box<dyn Rule>>`.
///
/// ```rust,ignore
/// let rules = rules![not_null(), length_min(3), alphabetic()];
/// ```
#[macro_export]
macro_rules! rules {
    () => {
        ::std::vec::Vec::<::std::boxed::Box<dyn $crate::foundation::Rule>>::new()
    };
    ($($rule:expr),+ $(,)?) => {
        ::std::vec![
            $(::std::boxed::Box::new($rule) as ::std::boxed::Box<dyn $crate::foundation::Rule>),+
        ]
    };
}

// ============================================================================
// FIELD RULES MACRO
// ============================================================================

/// Builds a [`FieldRules`](crate::engine::FieldRules) mapping.
///
/// ```rust,ignore
/// let rules = field_rules! {
///     "email" => [not_null(), email()],
///     "tags" => [collection(rules![length_min(3)])],
/// };
/// ```
#[macro_export]
macro_rules! field_rules {
    ($($field:expr => [$($rule:expr),* $(,)?]),* $(,)?) => {
        $crate::engine::FieldRules::new()
            $(.field($field, $crate::rules![$($rule),*]))*
    };
}

// ============================================================================
// TESTS
// ============================================================================
