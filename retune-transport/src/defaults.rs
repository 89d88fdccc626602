use retune_model::{FieldTable, Patchable};
use retune_types::BigDecimal;
use std::sync::OnceLock;

/// Global simulation tunables.
///
/// Field names in the document match the simulation's own property names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDefaults {
    pub passenger_max_search_connections: i32,
    pub road_price: i64,
    pub rails_price: i64,
    pub bus_station_time: i32,
    pub train_station_time: i32,
    pub plane_airport_time: i32,
    pub ship_port_time: i32,
    /// Seconds between generated passengers for a destination.
    pub city_destination_progress: i32,
    pub city_destination_progress_cap: i32,
    /// A city shrinks when its fulfilment falls below this.
    pub city_shrink_threshold: BigDecimal,
    /// The last destination is replaced when its fulfilment falls below this.
    pub city_destination_change: BigDecimal,
    pub max_level_destination: u8,
}

impl Default for GameDefaults {
    fn default() -> Self {
        Self {
            passenger_max_search_connections: 6,
            road_price: 150_000,
            rails_price: 250_000,
            bus_station_time: 900,
            train_station_time: 300,
            plane_airport_time: 3_600,
            ship_port_time: 3_600,
            city_destination_progress: 5_760,
            city_destination_progress_cap: 15,
            city_shrink_threshold: BigDecimal::new(3.into(), 1),
            city_destination_change: BigDecimal::new(3.into(), 1),
            max_level_destination: 4,
        }
    }
}

impl Patchable for GameDefaults {
    fn field_table() -> &'static FieldTable<Self> {
        static TABLE: OnceLock<FieldTable<GameDefaults>> = OnceLock::new();
        TABLE.get_or_init(|| {
            FieldTable::<Self>::new()
                .int("Passenger_max_search_connections", |d, v| {
                    d.passenger_max_search_connections = v;
                })
                .long("Road_price", |d, v| d.road_price = v)
                .long("Rails_price", |d, v| d.rails_price = v)
                .int("Bus_station_time", |d, v| d.bus_station_time = v)
                .int("Train_station_time", |d, v| d.train_station_time = v)
                .int("Plane_airport_time", |d, v| d.plane_airport_time = v)
                .int("Ship_port_time", |d, v| d.ship_port_time = v)
                .int("City_destination_progress", |d, v| d.city_destination_progress = v)
                .int("City_destination_progress_cap", |d, v| {
                    d.city_destination_progress_cap = v;
                })
                .decimal("City_shrink_threshold", |d, v| d.city_shrink_threshold = v)
                .decimal("City_destination_change", |d, v| d.city_destination_change = v)
                .byte("Max_level_destination", |d, v| d.max_level_destination = v)
        })
    }
}
