use crate::{City, GameDefaults, Vehicle};
use retune_apply::Collections;
use retune_model::FieldSet;
use retune_runtime::{Host, Runtime};
use tracing::{debug, info};

/// The simulation state retune tunes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportWorld {
    pub defaults: GameDefaults,
    pub road_vehicles: Vec<Vehicle>,
    pub trains: Vec<Vehicle>,
    pub planes: Vec<Vehicle>,
    pub ships: Vec<Vehicle>,
    pub cities: Vec<City>,
}

impl TransportWorld {
    /// Tries to level up every city once. Returns how many grew.
    pub fn grow_cities(&mut self, runtime: &Runtime) -> usize {
        let mut grown = 0;
        for city in &mut self.cities {
            if runtime.permit_level_up(&*city) {
                city.level = city.level.saturating_add(1);
                grown += 1;
            } else {
                debug!("{} stays at level {}", city.name, city.level);
            }
        }
        grown
    }
}

fn log_roster(title: &str, roster: &[Vehicle]) {
    info!("--- {} ---", title);
    for vehicle in roster {
        info!("{}", vehicle);
    }
}

impl Host for TransportWorld {
    fn defaults(&mut self) -> &mut dyn FieldSet {
        &mut self.defaults
    }

    fn collections(&mut self) -> Collections<'_> {
        Collections {
            road_vehicles: &mut self.road_vehicles,
            trains: &mut self.trains,
            planes: &mut self.planes,
            ships: &mut self.ships,
        }
    }

    fn log_state(&self) {
        info!("Defaults: {:?}", self.defaults);
        log_roster("ROAD VEHICLES", &self.road_vehicles);
        log_roster("TRAINS", &self.trains);
        log_roster("SHIPS", &self.ships);
        log_roster("PLANES", &self.planes);
    }
}
