//! The player's inventory

use crate::domain::entities::Item;
use crate::domain::value_objects::ItemId;

/// Items carried by the player, in the order they were picked up.
/// Membership is unique by item id.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item_id: &ItemId) -> bool {
        self.items.iter().any(|item| item.id() == item_id)
    }

    /// Returns the item back if one with the same id is already held
    pub fn insert(&mut self, item: Item) -> Result<(), Item> {
        if self.contains(item.id()) {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    /// First item matching the predicate
    pub fn find(&self, mut predicate: impl FnMut(&Item) -> bool) -> Option<&Item> {
        self.items.iter().find(|item| predicate(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_unique() {
        let mut inventory = Inventory::new();
        let seal = Item::new("Royal Seal", "The official seal").unwrap();

        assert!(inventory.insert(seal.clone()).is_ok());
        assert_eq!(inventory.insert(seal), Err(Item::new("Royal Seal", "The official seal").unwrap()));
        assert_eq!(inventory.len(), 1);
        assert!(inventory.contains(&ItemId::from_name("royal seal")));
    }

    #[test]
    fn test_find_short_circuits_on_first_match() {
        let mut inventory = Inventory::new();
        inventory.insert(Item::new("Holy Sword", "A gleaming sword").unwrap()).unwrap();
        inventory.insert(Item::new("Dragon Slayer", "A massive sword").unwrap()).unwrap();

        let mut inspected = 0;
        let found = inventory.find(|item| {
            inspected += 1;
            item.name().contains("Sword")
        });
        assert_eq!(found.map(|i| i.name()), Some("Holy Sword"));
        assert_eq!(inspected, 1);
    }
}
