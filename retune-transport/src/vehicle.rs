use retune_model::{FieldTable, Patchable, TargetEntity};
use retune_types::BigDecimal;
use std::fmt;
use std::sync::OnceLock;

/// One vehicle model in a roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vehicle {
    pub id: u16,
    /// Stable internal name, e.g. `vehicle_antero`. Not tunable.
    pub name: String,
    pub tier: u8,
    pub speed: i32,
    pub capacity: i32,
    pub min_passengers: i32,
    pub price: i64,
    pub passenger_pay_per_km: BigDecimal,
    /// Planes only; zero elsewhere.
    pub range: i32,
}

impl Vehicle {
    pub fn new(id: u16, name: impl Into<String>, tier: u8) -> Self {
        Self {
            id,
            name: name.into(),
            tier,
            ..Self::default()
        }
    }
}

impl Patchable for Vehicle {
    fn field_table() -> &'static FieldTable<Self> {
        static TABLE: OnceLock<FieldTable<Vehicle>> = OnceLock::new();
        TABLE.get_or_init(|| {
            FieldTable::<Self>::new()
                .byte("Tier", |v, x| v.tier = x)
                .int("Speed", |v, x| v.speed = x)
                .int("Capacity", |v, x| v.capacity = x)
                .int("Min_passengers", |v, x| v.min_passengers = x)
                .long("Price", |v, x| v.price = x)
                .decimal("Passenger_pay_per_km", |v, x| v.passenger_pay_per_km = x)
                .int("Range", |v, x| v.range = x)
        })
    }
}

impl TargetEntity for Vehicle {
    fn entity_name(&self) -> &str {
        &self.name
    }
}

/// Roster listing line: `id tTier sSpeed cCapacity mMin pPrice ePay [rRange] name`.
impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} t{} s{} c{} m{} p{} e{}",
            self.id,
            self.tier,
            self.speed,
            self.capacity,
            self.min_passengers,
            self.price,
            self.passenger_pay_per_km
        )?;
        if self.range > 0 {
            write!(f, " r{}", self.range)?;
        }
        write!(f, " {}", self.name)
    }
}
