//! A minimal host for runtime tests.

#![allow(dead_code)]

use retune_apply::Collections;
use retune_model::{FieldSet, FieldTable, Patchable, TargetEntity};
use retune_policy::GrowthSubject;
use retune_runtime::Host;
use std::cell::Cell;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tunables {
    pub rail_price: i64,
    pub stop_time: i32,
}

impl Patchable for Tunables {
    fn field_table() -> &'static FieldTable<Self> {
        static TABLE: OnceLock<FieldTable<Tunables>> = OnceLock::new();
        TABLE.get_or_init(|| {
            FieldTable::<Self>::new()
                .long("Rail_price", |t, v| t.rail_price = v)
                .int("Stop_time", |t, v| t.stop_time = v)
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carrier {
    pub name: String,
    pub capacity: i32,
}

impl Carrier {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            capacity: 10,
        }
    }
}

impl Patchable for Carrier {
    fn field_table() -> &'static FieldTable<Self> {
        static TABLE: OnceLock<FieldTable<Carrier>> = OnceLock::new();
        TABLE.get_or_init(|| {
            FieldTable::<Self>::new().int("Capacity", |c, v| c.capacity = v)
        })
    }
}

impl TargetEntity for Carrier {
    fn entity_name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Default)]
pub struct World {
    pub tunables: Tunables,
    pub buses: Vec<Carrier>,
    pub trains: Vec<Carrier>,
    pub planes: Vec<Carrier>,
    pub ships: Vec<Carrier>,
    pub state_logged: Cell<usize>,
}

impl World {
    pub fn fresh() -> Self {
        Self {
            buses: vec![Carrier::named("bus_a")],
            trains: vec![Carrier::named("class_87")],
            ..Self::default()
        }
    }
}

impl Host for World {
    fn defaults(&mut self) -> &mut dyn FieldSet {
        &mut self.tunables
    }

    fn collections(&mut self) -> Collections<'_> {
        Collections {
            road_vehicles: &mut self.buses,
            trains: &mut self.trains,
            planes: &mut self.planes,
            ships: &mut self.ships,
        }
    }

    fn log_state(&self) {
        self.state_logged.set(self.state_logged.get() + 1);
    }
}

/// A town with one building level and no bonuses.
pub struct Hamlet {
    pub level: i32,
}

impl GrowthSubject for Hamlet {
    fn level(&self) -> i32 {
        self.level
    }
    fn is_important(&self) -> bool {
        false
    }
    fn is_capital(&self) -> bool {
        false
    }
    fn is_resort(&self) -> bool {
        false
    }
    fn has_secondary_feature(&self) -> bool {
        false
    }
    fn component_levels(&self) -> Vec<Option<i32>> {
        vec![Some(1)]
    }
}
