// ABOUTME: Domain enumerations shared by the builder tree and backend responses
// ABOUTME: Program focus, difficulty, session focus, weekday, block scheme, set tag, metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Overall training focus of a program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProgramFocus {
    /// `CrossFit` style mixed modal training
    Crossfit,
    /// Yoga practice
    Yoga,
    /// Strength and conditioning hybrid
    Hybrid,
    /// Cardio and endurance
    Cardio,
    /// Strength training
    #[default]
    Strength,
    /// Triathlon preparation (backend spelling kept on the wire)
    Triathalon,
}

impl ProgramFocus {
    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crossfit => "Crossfit",
            Self::Yoga => "Yoga",
            Self::Hybrid => "Hybrid",
            Self::Cardio => "Cardio",
            Self::Strength => "Strength",
            Self::Triathalon => "Triathalon",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Triathalon => "Triathlon",
            other => other.as_str(),
        }
    }
}

/// Program difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// Suitable for new lifters
    #[default]
    Beginner,
    /// Requires a training base
    Intermediate,
    /// For experienced athletes
    Advanced,
}

impl Difficulty {
    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.as_str()
    }
}

/// Focus of a single session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SessionFocus {
    /// Resistance training
    #[default]
    Lift,
    /// Conditioning
    Cardio,
    /// Mobility work
    Stretch,
}

impl SessionFocus {
    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lift => "Lift",
            Self::Cardio => "Cardio",
            Self::Stretch => "Stretch",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.as_str()
    }
}

/// Day a session is scheduled on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayOfWeek {
    /// Sunday
    Sunday,
    /// Monday
    #[default]
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
}

impl DayOfWeek {
    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.as_str()
    }
}

/// Execution pattern shared by the activities of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemeType {
    /// Straight sets, one activity after another
    #[default]
    Standard,
    /// Activities performed back to back for rounds
    Circuit,
    /// Work/rest intervals
    Interval,
    /// Every minute on the minute
    Emom,
    /// As many rounds as possible
    Amrap,
    /// Rounds for time
    Rft,
    /// 20s on / 10s off
    Tabata,
}

impl SchemeType {
    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Circuit => "CIRCUIT",
            Self::Interval => "INTERVAL",
            Self::Emom => "EMOM",
            Self::Amrap => "AMRAP",
            Self::Rft => "RFT",
            Self::Tabata => "TABATA",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard List",
            Self::Circuit => "Circuit",
            Self::Interval => "Intervals",
            Self::Emom => "Every Minute on the Minute",
            Self::Amrap => "As Many Rounds as Possible",
            Self::Rft => "Rounds for Time",
            Self::Tabata => "Tabata",
        }
    }

    /// Whether `duration_target` is meaningful for this scheme
    #[must_use]
    pub const fn uses_duration_target(self) -> bool {
        matches!(self, Self::Amrap | Self::Emom | Self::Tabata)
    }

    /// Whether `rounds_target` is meaningful for this scheme
    #[must_use]
    pub const fn uses_rounds_target(self) -> bool {
        matches!(self, Self::Rft | Self::Circuit)
    }
}

/// Kind of set within a prescription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SetTag {
    /// Normal working set
    #[default]
    #[serde(rename = "N")]
    Normal,
    /// Warmup set
    #[serde(rename = "W")]
    Warmup,
    /// Drop set
    #[serde(rename = "D")]
    Drop,
    /// Taken to failure / AMRAP set
    #[serde(rename = "F")]
    Failure,
    /// Cool down set
    #[serde(rename = "C")]
    CoolDown,
}

impl SetTag {
    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "N",
            Self::Warmup => "W",
            Self::Drop => "D",
            Self::Failure => "F",
            Self::CoolDown => "C",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal / Working Set",
            Self::Warmup => "Warmup",
            Self::Drop => "Drop Set",
            Self::Failure => "Failure / AMRAP",
            Self::CoolDown => "Cool Down",
        }
    }
}

/// The measurement a prescription is driven by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryMetric {
    /// Repetitions
    #[default]
    Reps,
    /// Duration
    Time,
    /// Distance
    Distance,
    /// Calories on an erg
    Calories,
    /// No primary metric
    None,
}

impl PrimaryMetric {
    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reps => "reps",
            Self::Time => "time",
            Self::Distance => "distance",
            Self::Calories => "calories",
            Self::None => "none",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reps => "Reps",
            Self::Time => "Time",
            Self::Distance => "Distance",
            Self::Calories => "Calories",
            Self::None => "None",
        }
    }
}

/// How a prescription's intensity is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityType {
    /// Absolute weight
    Weight,
    /// Rate of perceived exertion
    Rpe,
    /// Power output
    Power,
    /// Percentage of functional threshold power
    PercFtp,
    /// Percentage of one-rep max
    #[serde(rename = "percent_1rm")]
    Percent1Rm,
    /// Heart rate zone
    HeartRateZone,
    /// Absolute heart rate
    HeartRate,
    /// Pace
    Pace,
    /// Watts
    Watts,
}

impl IntensityType {
    /// Wire value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Rpe => "rpe",
            Self::Power => "power",
            Self::PercFtp => "perc_ftp",
            Self::Percent1Rm => "percent_1rm",
            Self::HeartRateZone => "heart_rate_zone",
            Self::HeartRate => "heart_rate",
            Self::Pace => "pace",
            Self::Watts => "watts",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weight => "Weight",
            Self::Rpe => "RPE",
            Self::Power => "Power",
            Self::PercFtp => "%FTP",
            Self::Percent1Rm => "%1RM",
            Self::HeartRateZone => "HR Zone",
            Self::HeartRate => "Heart Rate",
            Self::Pace => "Pace",
            Self::Watts => "Watts",
        }
    }
}

/// Measurement system preferred by a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Kilograms and meters
    Metric,
    /// Pounds and miles
    #[default]
    Imperial,
}

impl Units {
    /// Wire code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Metric => "Metric",
            Self::Imperial => "Imperial",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values_match_serde() {
        for scheme in [
            SchemeType::Standard,
            SchemeType::Circuit,
            SchemeType::Interval,
            SchemeType::Emom,
            SchemeType::Amrap,
            SchemeType::Rft,
            SchemeType::Tabata,
        ] {
            let json = serde_json::to_value(scheme).unwrap();
            assert_eq!(json, scheme.as_str());
        }
        assert_eq!(serde_json::to_value(SetTag::CoolDown).unwrap(), "C");
        assert_eq!(
            serde_json::to_value(IntensityType::Percent1Rm).unwrap(),
            "percent_1rm"
        );
        assert_eq!(serde_json::to_value(PrimaryMetric::None).unwrap(), "none");
    }

    #[test]
    fn test_scheme_targets() {
        assert!(SchemeType::Amrap.uses_duration_target());
        assert!(SchemeType::Tabata.uses_duration_target());
        assert!(!SchemeType::Standard.uses_duration_target());
        assert!(SchemeType::Rft.uses_rounds_target());
        assert!(!SchemeType::Emom.uses_rounds_target());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ProgramFocus::default(), ProgramFocus::Strength);
        assert_eq!(Difficulty::default(), Difficulty::Beginner);
        assert_eq!(DayOfWeek::default(), DayOfWeek::Monday);
        assert_eq!(PrimaryMetric::default(), PrimaryMetric::Reps);
    }
}
