//! Code-keyed lookup tables shared by every service.

/// A code returned by (or sent to) a service that no table entry matches.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {table} code: {code}")]
pub struct UnknownCode {
    pub table: &'static str,
    pub code: String,
}

impl UnknownCode {
    pub fn new(table: &'static str, code: impl Into<String>) -> Self {
        Self {
            table,
            code: code.into(),
        }
    }
}

/// Declares a fieldless enum whose variants each carry a wire code and a
/// description, with a total `by_code` lookup.
///
/// String-coded tables take `&str` in `by_code`, numeric tables take the
/// code type by value. Both serialize as their code.
macro_rules! code_table {
    (@define
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $ty:ty {
            $($(#[$vmeta:meta])* $variant:ident = ($code:expr, $desc:expr)),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),*
        }

        impl $name {
            /// Every entry, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub fn code(&self) -> $ty {
                match self {
                    $($name::$variant => $code),*
                }
            }

            pub fn description(&self) -> &'static str {
                match self {
                    $($name::$variant => $desc),*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&self.code(), serializer)
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: str as $table:literal {
            $($(#[$vmeta:meta])* $variant:ident = ($code:expr, $desc:expr)),* $(,)?
        }
    ) => {
        code_table!(@define
            $(#[$meta])*
            $vis enum $name: &'static str {
                $($(#[$vmeta])* $variant = ($code, $desc)),*
            }
        );

        impl $name {
            /// First entry whose code equals `code`.
            pub fn by_code(code: &str) -> Result<Self, $crate::UnknownCode> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|entry| entry.code() == code)
                    .ok_or_else(|| $crate::UnknownCode::new($table, code))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::by_code(&code).map_err(serde::de::Error::custom)
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $ty:ty as $table:literal {
            $($(#[$vmeta:meta])* $variant:ident = ($code:expr, $desc:expr)),* $(,)?
        }
    ) => {
        code_table!(@define
            $(#[$meta])*
            $vis enum $name: $ty {
                $($(#[$vmeta])* $variant = ($code, $desc)),*
            }
        );

        impl $name {
            /// First entry whose code equals `code`.
            pub fn by_code(code: $ty) -> Result<Self, $crate::UnknownCode> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|entry| entry.code() == code)
                    .ok_or_else(|| $crate::UnknownCode::new($table, code.to_string()))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = <$ty as serde::Deserialize>::deserialize(deserializer)?;
                Self::by_code(code).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use code_table;
