use retune_policy::GrowthSubject;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Building {
    pub level: i32,
}

/// The player's hub in a city. Slots may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hub {
    pub buildings: Vec<Option<Building>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct City {
    pub name: String,
    pub level: i32,
    pub important: bool,
    pub capital: bool,
    pub resort: bool,
    /// Name of the sea the city lies on, if any.
    pub sea: Option<String>,
    pub hub: Option<Hub>,
}

impl City {
    pub fn new(name: impl Into<String>, level: i32) -> Self {
        Self {
            name: name.into(),
            level,
            ..Self::default()
        }
    }
}

impl GrowthSubject for City {
    fn level(&self) -> i32 {
        self.level
    }

    fn is_important(&self) -> bool {
        self.important
    }

    fn is_capital(&self) -> bool {
        self.capital
    }

    fn is_resort(&self) -> bool {
        self.resort
    }

    fn has_secondary_feature(&self) -> bool {
        self.sea.is_some()
    }

    fn component_levels(&self) -> Vec<Option<i32>> {
        self.hub
            .iter()
            .flat_map(|hub| hub.buildings.iter().map(|b| b.map(|b| b.level)))
            .collect()
    }
}
