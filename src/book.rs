use serde::Serialize;
use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
};

pub const ISBN_LENGTH: usize = 13;

/// A title on the shelf. Books are ordered and compared by ISBN only.
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    pub isbn: String,
    #[serde(rename = "quantity")]
    pub quantity_on_shelf: u64,
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {}", self.isbn, self.quantity_on_shelf)
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for Book {}

impl PartialOrd for Book {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Book {
    fn cmp(&self, other: &Self) -> Ordering {
        self.isbn.cmp(&other.isbn)
    }
}

impl Book {
    pub fn new(isbn: &str, quantity_on_shelf: u64) -> Self {
        Book {
            isbn: isbn.to_string(),
            quantity_on_shelf,
        }
    }

    /// Builds a book from a well-typed record, or `None` when the ISBN length
    /// or the quantity sign is wrong.
    pub fn validated(isbn: &str, quantity: i32) -> Option<Self> {
        if isbn.chars().count() == ISBN_LENGTH && quantity >= 0 {
            Some(Book::new(isbn, quantity as u64))
        } else {
            None
        }
    }

    /// Adds delivered copies. Stock saturates at `u64::MAX` instead of wrapping.
    pub fn add_to_shelf(&mut self, quantity: u64) {
        self.quantity_on_shelf = self.quantity_on_shelf.saturating_add(quantity);
    }
}

#[cfg(test)]
impl Book {
    pub fn as_pair(&self) -> (&str, u64) {
        (self.isbn.as_str(), self.quantity_on_shelf)
    }
}
