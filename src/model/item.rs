use std::fmt;

/// Identifier of an item, unique within the list that allocated it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub(crate) u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Error type for quantity conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    #[error("quantity must be between {min} and {max}, got {0}", min = Quantity::MIN, max = Quantity::MAX)]
    OutOfRange(u8),
}

/// How many of an item to pack (always 1 through 5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quantity(u8);

impl Quantity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Every selectable quantity, ascending
    pub fn all() -> impl Iterator<Item = Quantity> {
        (Self::MIN..=Self::MAX).map(Quantity)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// One more, clamped at the maximum
    pub fn increment(self) -> Self {
        Quantity((self.0 + 1).min(Self::MAX))
    }

    /// One less, clamped at the minimum
    pub fn decrement(self) -> Self {
        Quantity(self.0.saturating_sub(1).max(Self::MIN))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity(Self::MIN)
    }
}

impl TryFrom<u8> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Quantity(value))
        } else {
            Err(QuantityError::OutOfRange(value))
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry in the packing list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub quantity: Quantity,
    pub packed: bool,
}

impl Item {
    /// The row label, e.g. `2 x Socks`
    pub fn label(&self) -> String {
        format!("{} x {}", self.quantity, self.description)
    }
}
