//! Declarative builders for 3GPP scalar types.
//!
//! Each scalar is a transparent newtype over its JSON base type; the macro
//! arm decides which constraint its `Validate` impl checks.

macro_rules! string_scalar {
    (@common $(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
    ($(#[$meta:meta])* $name:ident) => {
        string_scalar!(@common $(#[$meta])* $name);

        impl $crate::utils::validation::Validate for $name {
            fn validate_into(&self, _ctx: &mut $crate::utils::validation::ValidationContext) {}
        }
    };
    ($(#[$meta:meta])* $name:ident, pattern = $($pattern:literal),+) => {
        string_scalar!(@common $(#[$meta])* $name);

        impl $name {
            /// Patterns a valid value must match, all of them.
            pub const PATTERNS: &'static [&'static str] = &[$($pattern),+];
        }

        impl $crate::utils::validation::Validate for $name {
            fn validate_into(&self, ctx: &mut $crate::utils::validation::ValidationContext) {
                static COMPILED: ::once_cell::sync::Lazy<Vec<(::regex::Regex, &'static str)>> =
                    ::once_cell::sync::Lazy::new(|| {
                        $name::PATTERNS
                            .iter()
                            .map(|p| {
                                let re = ::regex::Regex::new(p)
                                    .unwrap_or_else(|e| panic!("bad pattern for {}: {}", stringify!($name), e));
                                (re, *p)
                            })
                            .collect()
                    });
                ctx.pattern(&self.0, &COMPILED);
            }
        }
    };
}

macro_rules! integer_scalar {
    (@common $(#[$meta:meta])* $name:ident: $ty:ty) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub $ty);

        impl $name {
            pub fn value(self) -> $ty {
                self.0
            }
        }

        impl From<$ty> for $name {
            fn from(value: $ty) -> Self {
                Self(value)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
    ($(#[$meta:meta])* $name:ident: $ty:ty) => {
        integer_scalar!(@common $(#[$meta])* $name: $ty);

        impl $crate::utils::validation::Validate for $name {
            fn validate_into(&self, _ctx: &mut $crate::utils::validation::ValidationContext) {}
        }
    };
    ($(#[$meta:meta])* $name:ident: $ty:ty, range = $min:literal ..= $max:literal) => {
        integer_scalar!(@common $(#[$meta])* $name: $ty);

        impl $name {
            pub const MIN: $ty = $min;
            pub const MAX: $ty = $max;
        }

        impl $crate::utils::validation::Validate for $name {
            fn validate_into(&self, ctx: &mut $crate::utils::validation::ValidationContext) {
                ctx.range(self.0, Self::MIN, Self::MAX);
            }
        }
    };
    ($(#[$meta:meta])* $name:ident: $ty:ty, min = $min:literal) => {
        integer_scalar!(@common $(#[$meta])* $name: $ty);

        impl $name {
            pub const MIN: $ty = $min;
        }

        impl $crate::utils::validation::Validate for $name {
            fn validate_into(&self, ctx: &mut $crate::utils::validation::ValidationContext) {
                ctx.minimum(self.0, Self::MIN);
            }
        }
    };
}

macro_rules! float_scalar {
    (@common $(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub f64);

        impl $name {
            pub fn value(self) -> f64 {
                self.0
            }
        }

        impl From<f64> for $name {
            fn from(value: f64) -> Self {
                Self(value)
            }
        }
    };
    ($(#[$meta:meta])* $name:ident) => {
        float_scalar!(@common $(#[$meta])* $name);

        impl $crate::utils::validation::Validate for $name {
            fn validate_into(&self, _ctx: &mut $crate::utils::validation::ValidationContext) {}
        }
    };
    ($(#[$meta:meta])* $name:ident, range = $min:literal ..= $max:literal) => {
        float_scalar!(@common $(#[$meta])* $name);

        impl $name {
            pub const MIN: f64 = $min;
            pub const MAX: f64 = $max;
        }

        impl $crate::utils::validation::Validate for $name {
            fn validate_into(&self, ctx: &mut $crate::utils::validation::ValidationContext) {
                ctx.range(self.0, Self::MIN, Self::MAX);
            }
        }
    };
    ($(#[$meta:meta])* $name:ident, min = $min:literal) => {
        float_scalar!(@common $(#[$meta])* $name);

        impl $name {
            pub const MIN: f64 = $min;
        }

        impl $crate::utils::validation::Validate for $name {
            fn validate_into(&self, ctx: &mut $crate::utils::validation::ValidationContext) {
                ctx.minimum(self.0, Self::MIN);
            }
        }
    };
}

/// Extensible 3GPP enumeration: known tokens get a variant, anything else
/// decodes into `Other` and fails validation.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// A token outside the declared set.
            Other(String),
        }

        impl $name {
            pub const TOKENS: &'static [&'static str] = &[$($token),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $token,)+
                    Self::Other(value) => value,
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($token => Self::$variant,)+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(other) => other,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::utils::validation::Validate for $name {
            fn validate_into(&self, ctx: &mut $crate::utils::validation::ValidationContext) {
                if let Self::Other(value) = self {
                    ctx.unknown_token(value, Self::TOKENS);
                }
            }
        }
    };
}
