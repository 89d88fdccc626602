use std::fmt;

/// The closed set of entity categories a patch can address.
///
/// Any tag outside the known set is `Unknown`, which never resolves to a
/// collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    RoadVehicle,
    Train,
    Plane,
    Ship,
    Unknown,
}

impl Category {
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "road_vehicle" => Self::RoadVehicle,
            "train" => Self::Train,
            "plane" => Self::Plane,
            "ship" => Self::Ship,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RoadVehicle => "road_vehicle",
            Self::Train => "train",
            Self::Plane => "plane",
            Self::Ship => "ship",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
