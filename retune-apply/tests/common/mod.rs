//! Shared fixtures for applier tests.

#![allow(dead_code)]

use retune_apply::Collections;
use retune_model::{FieldTable, Parameter, Patchable, TargetEntity};
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub road_price: i64,
    pub bus_station_time: i32,
    pub max_level: u8,
}

impl Patchable for Settings {
    fn field_table() -> &'static FieldTable<Self> {
        static TABLE: OnceLock<FieldTable<Settings>> = OnceLock::new();
        TABLE.get_or_init(|| {
            FieldTable::<Self>::new()
                .long("Road_price", |s, v| s.road_price = v)
                .int("Bus_station_time", |s, v| s.bus_station_time = v)
                .byte("Max_level", |s, v| s.max_level = v)
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Unit {
    pub name: String,
    pub capacity: i32,
    pub price: i64,
}

impl Unit {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            capacity: 10,
            price: 1_000,
        }
    }
}

impl Patchable for Unit {
    fn field_table() -> &'static FieldTable<Self> {
        static TABLE: OnceLock<FieldTable<Unit>> = OnceLock::new();
        TABLE.get_or_init(|| {
            FieldTable::<Self>::new()
                .int("Capacity", |u, v| u.capacity = v)
                .long("Price", |u, v| u.price = v)
        })
    }
}

impl TargetEntity for Unit {
    fn entity_name(&self) -> &str {
        &self.name
    }
}

/// Four independent collections with a couple of units each.
#[derive(Debug, Clone, PartialEq)]
pub struct Fleet {
    pub road: Vec<Unit>,
    pub trains: Vec<Unit>,
    pub planes: Vec<Unit>,
    pub ships: Vec<Unit>,
}

impl Fleet {
    pub fn fresh() -> Self {
        Self {
            road: vec![Unit::named("bus_a"), Unit::named("bus_b")],
            trains: vec![Unit::named("class_87"), Unit::named("apex_3")],
            planes: vec![Unit::named("a950l")],
            ships: vec![Unit::named("silver_tide")],
        }
    }

    pub fn collections(&mut self) -> Collections<'_> {
        Collections {
            road_vehicles: &mut self.road,
            trains: &mut self.trains,
            planes: &mut self.planes,
            ships: &mut self.ships,
        }
    }
}

pub fn int(name: &str, value: &str) -> Parameter {
    Parameter::new(name, "int", value)
}

pub fn long(name: &str, value: &str) -> Parameter {
    Parameter::new(name, "long", value)
}
