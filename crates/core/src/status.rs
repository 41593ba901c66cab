//! Status and category vocabularies persisted as `TEXT` columns.
//!
//! Each variant maps to exactly one stored value; the same value is used on
//! the JSON wire. Tables carry matching `CHECK` constraints, and row decoding
//! goes through [`TryFrom<String>`] so an out-of-set value never reaches a
//! model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The stored text value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $val ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $val => Ok($name::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        "Invalid {} '{other}', expected one of: {}",
                        stringify!($name),
                        [$($val),+].join(", "),
                    ))),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

define_status_enum! {
    /// Project lifecycle status.
    #[derive(Default)]
    ProjectStatus {
        #[default]
        Open = "offen",
        InProgress = "in arbeit",
        Done = "abgeschlossen",
        Paused = "pausiert",
    }
}

define_status_enum! {
    /// Progress of a subsystem, position or material item.
    #[derive(Default)]
    ItemStatus {
        #[default]
        Open = "offen",
        Ordered = "bestellt",
        Delivered = "geliefert",
        Installed = "verbaut",
        Closed = "abgeschlossen",
    }
}

define_status_enum! {
    /// Kind of machine in the fleet.
    VehicleCategory {
        ScissorLift = "scherenbuehne",
        TelescopicBoomLift = "teleskopbuehne",
        VerticalMastLift = "vertikalmastbuehne",
        MastClimbingPlatform = "mauerbuehne",
        TelescopicHandler = "teleskop_frontlader",
        MiniExcavator = "kleinbagger",
        BackhoeLoader = "baggerlader",
        TrackedDumper = "raupendumper",
        MiniCrane = "minikran",
        TowerCrane = "turmdrehkran",
        Other = "sonstiges",
    }
}

define_status_enum! {
    /// Availability of a fleet vehicle.
    #[derive(Default)]
    VehicleStatus {
        #[default]
        Available = "verfuegbar",
        Reserved = "reserviert",
        InMaintenance = "in_wartung",
        OutOfService = "ausser_betrieb",
    }
}

define_status_enum! {
    /// Role of a user profile.
    #[derive(Default)]
    UserRole {
        Admin = "admin",
        ProjectLead = "projektleiter",
        #[default]
        Staff = "mitarbeiter",
    }
}
