use crate::Category;
use retune_model::TargetEntity;

/// A host collection searchable by entity name.
pub trait Collection {
    /// Returns the first entity whose name equals `name`.
    fn find_mut(&mut self, name: &str) -> Option<&mut dyn TargetEntity>;
}

impl<T: TargetEntity> Collection for [T] {
    fn find_mut(&mut self, name: &str) -> Option<&mut dyn TargetEntity> {
        self.iter_mut()
            .find(|e| e.entity_name() == name)
            .map(|e| e as &mut dyn TargetEntity)
    }
}

impl<T: TargetEntity> Collection for Vec<T> {
    fn find_mut(&mut self, name: &str) -> Option<&mut dyn TargetEntity> {
        self.as_mut_slice().find_mut(name)
    }
}

/// The host's live collections, one per known [`Category`].
pub struct Collections<'a> {
    pub road_vehicles: &'a mut dyn Collection,
    pub trains: &'a mut dyn Collection,
    pub planes: &'a mut dyn Collection,
    pub ships: &'a mut dyn Collection,
}

impl<'a> Collections<'a> {
    /// Picks the collection for a category. `Unknown` has none.
    pub fn resolve(&mut self, category: Category) -> Option<&mut (dyn Collection + 'a)> {
        match category {
            Category::RoadVehicle => Some(&mut *self.road_vehicles),
            Category::Train => Some(&mut *self.trains),
            Category::Plane => Some(&mut *self.planes),
            Category::Ship => Some(&mut *self.ships),
            Category::Unknown => None,
        }
    }
}
