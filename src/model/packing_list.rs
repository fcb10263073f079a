use log::debug;

use super::item::{Item, ItemId, Quantity};

/// The packing list and its pending add-form fields.
///
/// Items are only ever created by [`PackingList::submit_add`] (or
/// [`PackingList::add`]), flipped by [`PackingList::toggle`] and dropped by
/// [`PackingList::clear_all`]. The pending description and quantity are
/// uncommitted form input and reset after every successful add.
#[derive(Debug, Clone, Default)]
pub struct PackingList {
    items: Vec<Item>,
    pending_description: String,
    pending_quantity: Quantity,
    /// Last id handed out; ids are never reused, even across clear_all
    last_id: u64,
}

impl PackingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in display (insertion) order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn packed_count(&self) -> usize {
        self.items.iter().filter(|item| item.packed).count()
    }

    /// Whether the "clear all" control is shown
    pub fn show_clear_all(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn pending_description(&self) -> &str {
        &self.pending_description
    }

    pub fn pending_description_mut(&mut self) -> &mut String {
        &mut self.pending_description
    }

    pub fn set_pending_description(&mut self, description: impl Into<String>) {
        self.pending_description = description.into();
    }

    pub fn pending_quantity(&self) -> Quantity {
        self.pending_quantity
    }

    pub fn set_pending_quantity(&mut self, quantity: Quantity) {
        self.pending_quantity = quantity;
    }

    /// Submit the add form using the pending fields.
    ///
    /// With an empty description nothing happens at all. Otherwise the item
    /// is appended and both pending fields go back to their defaults.
    pub fn submit_add(&mut self) -> Option<ItemId> {
        let description = self.pending_description.clone();
        let quantity = self.pending_quantity;
        self.add(description, quantity)
    }

    /// Add an item as if the form had been submitted with these values.
    pub fn add(&mut self, description: impl Into<String>, quantity: Quantity) -> Option<ItemId> {
        let description = description.into();
        if description.is_empty() {
            return None;
        }

        let id = self.next_id();
        debug!("adding item {}: {} x {}", id, quantity, description);
        self.items.push(Item {
            id,
            description,
            quantity,
            packed: false,
        });

        self.pending_quantity = Quantity::default();
        self.pending_description.clear();
        Some(id)
    }

    /// Flip the packed flag of the item with `id`. Unknown ids are ignored.
    pub fn toggle(&mut self, id: ItemId) {
        let items = std::mem::take(&mut self.items);
        self.items = items
            .into_iter()
            .map(|item| {
                if item.id == id {
                    debug!("toggling item {} to packed={}", id, !item.packed);
                    Item {
                        packed: !item.packed,
                        ..item
                    }
                } else {
                    item
                }
            })
            .collect();
    }

    /// Drop every item
    pub fn clear_all(&mut self) {
        debug!("clearing {} items", self.items.len());
        self.items = Vec::new();
    }

    fn next_id(&mut self) -> ItemId {
        self.last_id += 1;
        ItemId(self.last_id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    fn qty(n: u8) -> Quantity {
        Quantity::try_from(n).unwrap()
    }

    fn sample_list() -> PackingList {
        let mut list = PackingList::new();
        list.add("Socks", qty(2));
        list.add("Passport", qty(1));
        list.add("Charger", qty(3));
        list
    }

    #[test]
    fn test_submit_add_appends_and_resets_form() {
        let mut list = PackingList::new();
        list.set_pending_description("Socks");
        list.set_pending_quantity(qty(4));

        let id = list.submit_add().unwrap();

        assert_eq!(list.len(), 1);
        let item = &list.items()[0];
        assert_eq!(item.id, id);
        assert_eq!(item.description, "Socks");
        assert_eq!(item.quantity, qty(4));
        assert!(!item.packed);
        assert_eq!(list.pending_quantity(), qty(1));
        assert_eq!(list.pending_description(), "");
    }

    #[test]
    fn test_submit_add_empty_is_noop() {
        let mut list = sample_list();
        let before = list.items().to_vec();
        list.set_pending_quantity(qty(3));

        assert_eq!(list.submit_add(), None);

        assert_eq!(list.items(), before.as_slice());
        assert_eq!(list.pending_quantity(), qty(3));
        assert_eq!(list.pending_description(), "");
    }

    #[test]
    fn test_add_preserves_order() {
        let list = sample_list();
        let names: Vec<&str> = list.items().iter().map(|i| i.description.as_str()).collect();
        assert_eq!(names, vec!["Socks", "Passport", "Charger"]);
    }

    #[test]
    fn test_ids_unique_across_clear() {
        let mut list = sample_list();
        let mut seen: HashSet<ItemId> = list.items().iter().map(|i| i.id).collect();
        assert_eq!(seen.len(), 3);
        list.clear_all();
        for _ in 0..10 {
            let id = list.add("Towel", qty(1)).unwrap();
            assert!(seen.insert(id), "id {} reused", id);
        }
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut list = sample_list();
        let before = list.items().to_vec();
        let target = before[1].id;

        list.toggle(target);

        let after = list.items();
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(
            after[1],
            Item {
                packed: true,
                ..before[1].clone()
            }
        );

        list.toggle(target);
        assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = sample_list();
        let before = list.items().to_vec();
        list.toggle(ItemId(999));
        assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn test_clear_all() {
        let mut list = sample_list();
        list.toggle(list.items()[0].id);
        list.clear_all();
        assert!(list.is_empty());
        assert!(!list.show_clear_all());

        // Clearing an empty list is fine too
        list.clear_all();
        assert!(list.is_empty());
    }

    #[test]
    fn test_packed_count_and_get() {
        let mut list = sample_list();
        let id = list.items()[2].id;
        assert_eq!(list.packed_count(), 0);
        list.toggle(id);
        assert_eq!(list.packed_count(), 1);
        assert!(list.get(id).is_some_and(|item| item.packed));
        assert!(list.get(ItemId(42)).is_none());
    }
}
