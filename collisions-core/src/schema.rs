//! The fixed collision attribute list.
//!
//! Every column is declared exactly once in the table at the bottom of this
//! file. The table expands into the [`Field`] enum, the [`Collision`] struct
//! and the per-field decode, read and compare logic, so construction,
//! serialisation and filter-key validation cannot drift apart.

use std::fmt;
use std::str::FromStr;

use crate::collision::coerce_count;
use crate::{CollisionParseError, FieldValue, RawRow, UnknownFieldError};

/// How a field's raw value is stored on a [`Collision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Coerced to a non-negative integer, or absent when missing.
    Integer,
    /// Stored exactly as supplied.
    Verbatim,
}

macro_rules! storage {
    (int) => { Option<u32> };
    (raw) => { FieldValue };
}

macro_rules! kind {
    (int) => {
        FieldKind::Integer
    };
    (raw) => {
        FieldKind::Verbatim
    };
}

macro_rules! getter {
    (int, $ident:ident, $name:literal) => {
        #[doc = concat!("Value of the `", $name, "` column, `None` when the source left it blank.")]
        #[must_use]
        pub const fn $ident(&self) -> Option<u32> {
            self.$ident
        }
    };
    (raw, $ident:ident, $name:literal) => {
        #[doc = concat!("Value of the `", $name, "` column as supplied by the source.")]
        #[must_use]
        pub const fn $ident(&self) -> &FieldValue {
            &self.$ident
        }
    };
}

macro_rules! decode {
    (int, $field:expr, $value:expr) => {
        coerce_count($field, $value)?
    };
    (raw, $field:expr, $value:expr) => {
        $value
    };
}

macro_rules! read {
    (int, $stored:expr) => {
        FieldValue::from($stored)
    };
    (raw, $stored:expr) => {
        $stored.clone()
    };
}

macro_rules! compare {
    (int, $stored:expr, $expected:expr) => {
        FieldValue::from($stored).matches($expected)
    };
    (raw, $stored:expr, $expected:expr) => {
        $stored.matches($expected)
    };
}

macro_rules! collision_schema {
    ($($variant:ident => $ident:ident: $kind:ident = $name:literal,)+) => {
        /// Names every attribute carried by a [`Collision`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Field {
            $(
                #[doc = concat!("The `", $name, "` column.")]
                $variant,
            )+
        }

        impl Field {
            /// Every field, in column-name order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The exact, case-sensitive column name used by the source data.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// How values of this field are stored.
            #[must_use]
            pub const fn kind(self) -> FieldKind {
                match self {
                    $(Self::$variant => kind!($kind),)+
                }
            }
        }

        /// One road collision event.
        ///
        /// Built once from a [`RawRow`] and never mutated afterwards. Counter
        /// fields hold `Option<u32>`; every other field keeps the
        /// [`FieldValue`] supplied by the source.
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(try_from = "RawRow", into = "RawRow"))]
        pub struct Collision {
            $($ident: storage!($kind),)+
        }

        impl Collision {
            $(getter!($kind, $ident, $name);)+

            pub(crate) fn decode(mut row: RawRow) -> Result<Self, CollisionParseError> {
                Ok(Self {
                    $($ident: {
                        let value = take(&mut row, Field::$variant)?;
                        decode!($kind, Field::$variant, value)
                    },)+
                })
            }

            /// Read any field as a [`FieldValue`].
            ///
            /// Counter fields report `Integer` or `Missing`.
            #[must_use]
            pub fn value(&self, field: Field) -> FieldValue {
                match field {
                    $(Field::$variant => read!($kind, self.$ident),)+
                }
            }

            pub(crate) fn field_matches(&self, field: Field, expected: &FieldValue) -> bool {
                match field {
                    $(Field::$variant => compare!($kind, self.$ident, expected),)+
                }
            }
        }
    };
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = UnknownFieldError;

    /// Resolve a column name. Matching is case-sensitive, so `DCA_code`
    /// resolves and `dca_code` does not.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.name() == name)
            .ok_or_else(|| UnknownFieldError {
                name: name.to_owned(),
            })
    }
}

fn take(row: &mut RawRow, field: Field) -> Result<FieldValue, CollisionParseError> {
    row.remove(field.name())
        .ok_or(CollisionParseError::MissingField {
            field: field.name(),
        })
}

collision_schema! {
    DcaCode => dca_code: raw = "DCA_code",
    Animals => animals: int = "animals",
    Approximate => approximate: raw = "approximate",
    Bicycle => bicycle: int = "bicycle",
    Bus => bus: int = "bus",
    Car4x4 => car_4x4: int = "car_4x4",
    CarSedan => car_sedan: int = "car_sedan",
    CarStationWagon => car_station_wagon: int = "car_station_wagon",
    CarUtility => car_utility: int = "car_utility",
    CarVan => car_van: int = "car_van",
    Casualties => casualties: int = "casualties",
    Comment => comment: raw = "comment",
    Country => country: raw = "country",
    CrashId => crash_id: raw = "crash_id",
    CrashType => crash_type: raw = "crash_type",
    DayOfMonth => day_of_month: raw = "day_of_month",
    DayOfWeek => day_of_week: int = "day_of_week",
    DescriptionId => description_id: raw = "description_id",
    DrugsAlcohol => drugs_alcohol: raw = "drugs_alcohol",
    Fatalities => fatalities: int = "fatalities",
    Hour => hour: int = "hour",
    Inanimate => inanimate: int = "inanimate",
    Intersection => intersection: raw = "intersection",
    Latitude => latitude: raw = "latitude",
    Lighting => lighting: raw = "lighting",
    LocalGovernmentArea => local_government_area: raw = "local_government_area",
    Longitude => longitude: raw = "longitude",
    Midblock => midblock: raw = "midblock",
    MinorInjuries => minor_injuries: int = "minor_injuries",
    Month => month: int = "month",
    MotorCycle => motor_cycle: int = "motor_cycle",
    Pedestrian => pedestrian: int = "pedestrian",
    RoadPositionHorizontal => road_position_horizontal: raw = "road_position_horizontal",
    RoadPositionVertical => road_position_vertical: raw = "road_position_vertical",
    RoadSealed => road_sealed: raw = "road_sealed",
    RoadWet => road_wet: raw = "road_wet",
    Scooter => scooter: int = "scooter",
    SeriousInjuries => serious_injuries: int = "serious_injuries",
    Severity => severity: raw = "severity",
    SpeedLimit => speed_limit: raw = "speed_limit",
    State => state: raw = "state",
    StatisticalArea => statistical_area: raw = "statistical_area",
    Suburb => suburb: raw = "suburb",
    Taxi => taxi: int = "taxi",
    TrafficControls => traffic_controls: raw = "traffic_controls",
    Train => train: int = "train",
    Tram => tram: int = "tram",
    TruckLarge => truck_large: int = "truck_large",
    TruckSmall => truck_small: int = "truck_small",
    VehicleOther => vehicle_other: int = "vehicle_other",
    Weather => weather: raw = "weather",
    Year => year: raw = "year",
}
