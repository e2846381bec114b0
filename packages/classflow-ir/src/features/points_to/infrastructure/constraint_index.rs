//! Base-variable grouping index for constraint elements
//!
//! The propagation engine consumes loads and stores grouped by their base
//! variable: growing pts(base) requires re-evaluating every element that
//! shares that base. Per-base element order is insertion order, so
//! repeated runs enumerate elements deterministically.

use rustc_hash::FxHashMap;

use super::super::domain::element::{InstanceLoad, InstanceStore, VarId};
use super::super::ports::ConstraintConsumer;

/// Loads/stores grouped by base variable
#[derive(Debug, Clone, Default)]
pub struct ConstraintIndex {
    loads: FxHashMap<VarId, Vec<InstanceLoad>>,
    stores: FxHashMap<VarId, Vec<InstanceStore>>,
    load_count: usize,
    store_count: usize,
}

impl ConstraintIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_load(&mut self, load: InstanceLoad) {
        self.loads.entry(load.base().id()).or_default().push(load);
        self.load_count += 1;
    }

    pub fn add_store(&mut self, store: InstanceStore) {
        self.stores.entry(store.base().id()).or_default().push(store);
        self.store_count += 1;
    }

    pub fn len(&self) -> usize {
        self.load_count + self.store_count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn load_count(&self) -> usize {
        self.load_count
    }

    pub fn store_count(&self) -> usize {
        self.store_count
    }

    /// Loads whose base is `base`, in insertion order
    pub fn loads_on(&self, base: VarId) -> &[InstanceLoad] {
        self.loads.get(&base).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Stores whose base is `base`, in insertion order
    pub fn stores_on(&self, base: VarId) -> &[InstanceStore] {
        self.stores.get(&base).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every base variable with at least one grouped element, ascending
    pub fn bases(&self) -> impl Iterator<Item = VarId> {
        let mut ids: Vec<VarId> = self
            .loads
            .keys()
            .chain(self.stores.keys())
            .copied()
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids.into_iter()
    }

    /// Drive one re-evaluation callback per element grouped under `base`.
    ///
    /// The engine calls this whenever pts(base) grew; elements with other
    /// bases are untouched.
    pub fn notify_growth(&self, base: VarId, consumer: &mut dyn ConstraintConsumer) {
        for load in self.loads_on(base) {
            consumer.reevaluate_load(load);
        }
        for store in self.stores_on(base) {
            consumer.reevaluate_store(store);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::points_to::domain::element::{Field, Variable};

    fn var(id: VarId, name: &str) -> Variable {
        Variable::new(id, name, "com.example.A.run()", "com.example.Box")
    }

    fn field() -> Field {
        Field::new("com.example.Box", "value", "java.lang.Object")
    }

    #[derive(Default)]
    struct Recorder {
        loads: Vec<InstanceLoad>,
        stores: Vec<InstanceStore>,
    }

    impl ConstraintConsumer for Recorder {
        fn reevaluate_load(&mut self, load: &InstanceLoad) {
            self.loads.push(load.clone());
        }

        fn reevaluate_store(&mut self, store: &InstanceStore) {
            self.stores.push(store.clone());
        }
    }

    #[test]
    fn test_groups_by_base_variable() {
        let mut index = ConstraintIndex::new();
        index.add_load(InstanceLoad::new_unchecked(var(1, "x"), var(2, "b"), field()));
        index.add_load(InstanceLoad::new_unchecked(var(3, "y"), var(2, "b"), field()));
        index.add_store(InstanceStore::new_unchecked(var(2, "b"), field(), var(1, "x")));
        index.add_store(InstanceStore::new_unchecked(var(4, "c"), field(), var(1, "x")));

        assert_eq!(index.len(), 4);
        assert_eq!(index.loads_on(2).len(), 2);
        assert_eq!(index.stores_on(2).len(), 1);
        assert_eq!(index.loads_on(4).len(), 0);
        assert_eq!(index.bases().collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn test_growth_notification_reaches_every_sharing_element() {
        let mut index = ConstraintIndex::new();
        index.add_load(InstanceLoad::new_unchecked(var(1, "x"), var(2, "b"), field()));
        index.add_store(InstanceStore::new_unchecked(var(2, "b"), field(), var(3, "y")));
        index.add_load(InstanceLoad::new_unchecked(var(5, "z"), var(4, "c"), field()));

        let mut recorder = Recorder::default();
        index.notify_growth(2, &mut recorder);

        assert_eq!(recorder.loads.len(), 1);
        assert_eq!(recorder.stores.len(), 1);
        assert!(recorder.loads.iter().all(|l| l.base().id() == 2));
        assert!(recorder.stores.iter().all(|s| s.base().id() == 2));
    }
}
