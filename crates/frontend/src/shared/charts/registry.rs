//! Slot → widget registry on top of an external chart library.

use contracts::shared::charts::{ChartConfig, ChartSlot};
use std::collections::BTreeMap;

/// Operations the dashboard needs from a chart library.
pub trait ChartBackend {
    type Handle;

    fn construct(&mut self, slot: ChartSlot, config: &ChartConfig) -> Result<Self::Handle, String>;
    fn destroy(&mut self, handle: Self::Handle);
    fn resize(&mut self, handle: &Self::Handle);
}

pub struct ChartRegistry<B: ChartBackend> {
    backend: B,
    handles: BTreeMap<ChartSlot, B::Handle>,
}

impl<B: ChartBackend> ChartRegistry<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            handles: BTreeMap::new(),
        }
    }

    /// Builds the widget for `slot` unless one is already registered.
    ///
    /// Returns `Ok(true)` when a new widget was constructed.
    pub fn ensure_chart(&mut self, slot: ChartSlot) -> Result<bool, String> {
        if self.handles.contains_key(&slot) {
            return Ok(false);
        }
        let handle = self.backend.construct(slot, &slot.config())?;
        self.handles.insert(slot, handle);
        Ok(true)
    }

    pub fn is_registered(&self, slot: ChartSlot) -> bool {
        self.handles.contains_key(&slot)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn resize_all(&mut self) {
        for handle in self.handles.values() {
            self.backend.resize(handle);
        }
    }

    pub fn destroy_all(&mut self) {
        for (_, handle) in std::mem::take(&mut self.handles) {
            self.backend.destroy(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Calls {
        constructed: Vec<ChartSlot>,
        destroyed: Vec<u32>,
        resized: Vec<u32>,
    }

    /// In-memory backend; `missing` slots behave like an absent canvas.
    struct FakeBackend {
        calls: Rc<RefCell<Calls>>,
        next_id: u32,
        missing: Vec<ChartSlot>,
    }

    impl ChartBackend for FakeBackend {
        type Handle = u32;

        fn construct(&mut self, slot: ChartSlot, config: &ChartConfig) -> Result<u32, String> {
            if self.missing.contains(&slot) {
                return Err(format!("canvas #{} not found", slot.canvas_id()));
            }
            assert!(!config.data.datasets.is_empty());
            self.calls.borrow_mut().constructed.push(slot);
            self.next_id += 1;
            Ok(self.next_id)
        }

        fn destroy(&mut self, handle: u32) {
            self.calls.borrow_mut().destroyed.push(handle);
        }

        fn resize(&mut self, handle: &u32) {
            self.calls.borrow_mut().resized.push(*handle);
        }
    }

    fn registry(missing: Vec<ChartSlot>) -> (ChartRegistry<FakeBackend>, Rc<RefCell<Calls>>) {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let backend = FakeBackend {
            calls: calls.clone(),
            next_id: 0,
            missing,
        };
        (ChartRegistry::new(backend), calls)
    }

    #[test]
    fn ensure_chart_is_idempotent() {
        let (mut reg, calls) = registry(vec![]);
        assert_eq!(reg.ensure_chart(ChartSlot::WaterQuality), Ok(true));
        assert_eq!(reg.ensure_chart(ChartSlot::WaterQuality), Ok(false));

        assert_eq!(reg.len(), 1);
        assert_eq!(calls.borrow().constructed, vec![ChartSlot::WaterQuality]);
    }

    #[test]
    fn missing_canvas_leaves_slot_empty() {
        let (mut reg, _) = registry(vec![ChartSlot::Prediction]);
        assert!(reg.ensure_chart(ChartSlot::Prediction).is_err());
        assert!(!reg.is_registered(ChartSlot::Prediction));
        assert!(reg.is_empty());
    }

    #[test]
    fn destroy_all_clears_every_slot() {
        let (mut reg, calls) = registry(vec![]);
        for slot in ChartSlot::all() {
            reg.ensure_chart(slot).unwrap();
        }
        reg.destroy_all();

        assert!(reg.is_empty());
        let mut destroyed = calls.borrow().destroyed.clone();
        destroyed.sort_unstable();
        assert_eq!(destroyed, vec![1, 2, 3]);

        assert_eq!(reg.ensure_chart(ChartSlot::DiseaseTrend), Ok(true));
    }

    #[test]
    fn resize_touches_live_widgets_only() {
        let (mut reg, calls) = registry(vec![]);
        reg.resize_all();
        assert!(calls.borrow().resized.is_empty());

        reg.ensure_chart(ChartSlot::DiseaseTrend).unwrap();
        reg.resize_all();
        assert_eq!(calls.borrow().resized, vec![1]);
    }
}
