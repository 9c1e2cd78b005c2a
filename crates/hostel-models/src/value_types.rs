//! Enumerated value types shared by the entities and their forms.
//!
//! Each enum serializes exactly as the backend spells it and exposes `ALL`
//! so form selectors can list the options in a stable order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error type for value type parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueTypeError {
    pub kind: &'static str,
    pub value: String,
}

impl std::error::Error for ValueTypeError {}

impl fmt::Display for ValueTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {}: {}", self.kind, self.value)
    }
}

macro_rules! define_choice {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, default = $default:ident, { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValueTypeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|choice| choice.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| ValueTypeError {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

define_choice!(
    /// A student's gender as recorded by the backend.
    Gender, "gender", default = Male, {
        Male => "Male",
        Female => "Female",
    }
);

define_choice!(
    /// Which students a hostel houses.
    HostelType, "hostel type", default = Boys, {
        Boys => "Boys",
        Girls => "Girls",
    }
);

define_choice!(
    /// Room occupancy class.
    RoomType, "room type", default = Single, {
        Single => "Single",
        Double => "Double",
        Triple => "Triple",
        Quad => "Quad",
    }
);

/// Label shown for a year of study in the student form selector.
pub fn year_label(year: u8) -> String {
    let suffix = match year {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{}{} Year", year, suffix)
}

/// Years of study offered by the student form.
pub const YEARS: [u8; 4] = [1, 2, 3, 4];
