//! Travel modalities and their estimation policy.
//!
//! The set of modes is fixed. Each mode carries an average speed, a minimum
//! duration representing unavoidable overhead, and a descriptor for display.
//!
//! # Examples
//! ```
//! use tripline_core::TravelMode;
//!
//! assert_eq!(TravelMode::Flying.as_str(), "flying");
//! assert_eq!(TravelMode::default(), TravelMode::Driving);
//! assert_eq!(TravelMode::from_id_or_default("teleport"), TravelMode::Driving);
//! ```

use log::warn;
use thiserror::Error;

/// How a traveller moves between two consecutive stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "&'static str", from = "String")
)]
pub enum TravelMode {
    /// Travelling by car.
    #[default]
    Driving,
    /// Travelling on foot.
    Walking,
    /// Public transport.
    Transit,
    /// Scheduled flights.
    Flying,
}

/// Display metadata for a [`TravelMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelModeDescriptor {
    /// Mode being described.
    pub mode: TravelMode,
    /// Human-readable name.
    pub name: &'static str,
    /// Icon reference understood by the presentation layer.
    pub icon: &'static str,
}

/// Error returned when parsing an unrecognised mode identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown travel mode '{0}'")]
pub struct UnknownTravelMode(pub String);

impl TravelMode {
    /// Every mode, in presentation order. The first entry is the default.
    pub const ALL: [Self; 4] = [Self::Driving, Self::Walking, Self::Transit, Self::Flying];

    /// Return the lowercase identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Transit => "transit",
            Self::Flying => "flying",
        }
    }

    /// Average speed used for estimates, in km/h.
    pub const fn average_speed_kmh(self) -> f64 {
        match self {
            Self::Driving => 50.0,
            Self::Walking => 5.0,
            Self::Transit => 30.0,
            Self::Flying => 500.0,
        }
    }

    /// Fixed overhead added to the moving time, in minutes.
    ///
    /// Only flying carries one: check-in, security and boarding.
    pub const fn fixed_overhead_minutes(self) -> u32 {
        match self {
            Self::Flying => 90,
            Self::Driving | Self::Walking | Self::Transit => 0,
        }
    }

    /// Shortest estimate this mode will ever report, in minutes.
    pub const fn minimum_minutes(self) -> u32 {
        match self {
            Self::Driving | Self::Walking => 5,
            Self::Transit => 10,
            Self::Flying => 120,
        }
    }

    /// Display metadata for the mode.
    pub const fn descriptor(self) -> TravelModeDescriptor {
        let (name, icon) = match self {
            Self::Driving => ("Driving", "car"),
            Self::Walking => ("Walking", "walk"),
            Self::Transit => ("Transit", "bus"),
            Self::Flying => ("Flying", "plane"),
        };
        TravelModeDescriptor {
            mode: self,
            name,
            icon,
        }
    }

    /// Parse `id`, falling back to the default mode for unknown identifiers.
    ///
    /// The fallback is silent towards the caller and only leaves a warning in
    /// the log.
    pub fn from_id_or_default(id: &str) -> Self {
        id.parse().unwrap_or_else(|err: UnknownTravelMode| {
            warn!("{err}; falling back to {}", Self::default());
            Self::default()
        })
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TravelMode {
    type Err = UnknownTravelMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "driving" => Ok(Self::Driving),
            "walking" => Ok(Self::Walking),
            "transit" => Ok(Self::Transit),
            "flying" => Ok(Self::Flying),
            _ => Err(UnknownTravelMode(s.to_owned())),
        }
    }
}

impl From<TravelMode> for &'static str {
    fn from(mode: TravelMode) -> Self {
        mode.as_str()
    }
}

impl From<String> for TravelMode {
    fn from(id: String) -> Self {
        Self::from_id_or_default(&id)
    }
}
