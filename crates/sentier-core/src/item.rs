use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::room::RoomId;

/// What a consumable item does when used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemEffect {
    /// Restore this much stamina, then vanish.
    RestoreStamina(f64),
}

/// A plain data item.
#[derive(Debug, Clone, PartialEq)]
pub struct PlainItem {
    /// Text shown in inventory listings.
    pub description: String,
    /// Weight in kilograms.
    pub weight: f64,
    /// Effect applied by `use`, if the item is a consumable.
    pub effect: Option<ItemEffect>,
}

impl PlainItem {
    /// Create an item with no use effect.
    pub fn new(description: impl Into<String>, weight: f64) -> Self {
        Self {
            description: description.into(),
            weight,
            effect: None,
        }
    }

    /// Make the item a consumable with the given effect.
    pub fn with_effect(mut self, effect: ItemEffect) -> Self {
        self.effect = Some(effect);
        self
    }
}

/// A rechargeable teleport device.
///
/// Charging memorises a room; using it sends the player back there and
/// empties the charge.
#[derive(Debug, Clone, PartialEq)]
pub struct Beamer {
    /// Text shown in inventory listings.
    pub description: String,
    /// Weight in kilograms.
    pub weight: f64,
    /// The memorised room, if charged.
    pub saved_room: Option<RoomId>,
}

impl Default for Beamer {
    fn default() -> Self {
        Self {
            description: "Un étrange appareil technologique permettant de se téléporter.".to_string(),
            weight: 1.5,
            saved_room: None,
        }
    }
}

impl Beamer {
    /// Create an uncharged beamer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Memorise `room` as the teleport destination.
    pub fn charge(&mut self, room: RoomId) {
        self.saved_room = Some(room);
    }

    /// Whether a destination is memorised.
    pub fn is_charged(&self) -> bool {
        self.saved_room.is_some()
    }

    /// Take the destination out of the device, discharging it.
    pub fn discharge(&mut self) -> Option<RoomId> {
        self.saved_room.take()
    }
}

/// Something that can lie in a room or be carried.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Static data, optionally consumable.
    Plain(PlainItem),
    /// An item with behaviour of its own.
    Device(Beamer),
}

impl Item {
    /// Text shown in inventory listings.
    pub fn description(&self) -> &str {
        match self {
            Item::Plain(item) => &item.description,
            Item::Device(device) => &device.description,
        }
    }

    /// Weight in kilograms.
    pub fn weight(&self) -> f64 {
        match self {
            Item::Plain(item) => item.weight,
            Item::Device(device) => device.weight,
        }
    }
}

/// Round a weight or stamina figure to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A name-keyed container of items.
///
/// Rooms and the player each own one. Moving an item between containers is
/// a `remove` followed by an `insert` under the same key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    items: BTreeMap<String, Item>,
}

impl Inventory {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an item in under `name`, returning any item it displaced.
    pub fn insert(&mut self, name: impl Into<String>, item: Item) -> Option<Item> {
        self.items.insert(name.into(), item)
    }

    /// Take an item out by exact name.
    pub fn remove(&mut self, name: &str) -> Option<Item> {
        self.items.remove(name)
    }

    /// Whether an item with exactly this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Borrow an item by exact name.
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// Mutably borrow an item by exact name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.items.get_mut(name)
    }

    /// Number of items held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the container is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over `(name, item)` pairs in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Item> {
        self.items.iter()
    }

    /// Sum of all item weights, rounded to two decimals.
    pub fn total_weight(&self) -> f64 {
        round2(self.items.values().map(Item::weight).sum())
    }

    /// Render the contents as a bulleted list, or `empty` when there is nothing.
    pub fn describe(&self, empty: &str, header: &str) -> String {
        if self.items.is_empty() {
            return format!("{empty}\n");
        }
        let mut output = format!("{header}\n");
        for (name, item) in &self.items {
            output.push_str(&format!(
                "    - {name} : {} ({} kg)\n",
                item.description(),
                item.weight()
            ));
        }
        output
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = (&'a String, &'a Item);
    type IntoIter = btree_map::Iter<'a, String, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
