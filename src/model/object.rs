//! Raw PDF objects discovered by the textual scanner.

use indexmap::IndexMap;

/// A single `<n> <gen> obj ... endobj` block found in the file.
#[derive(Debug, Clone)]
pub struct RawObject {
    /// Object number (the first digit run of the header).
    pub number: u32,
    /// Object body between `obj` and `endobj`, surrounding whitespace trimmed.
    pub body: Vec<u8>,
}

impl RawObject {
    /// Create a new raw object.
    pub fn new(number: u32, body: Vec<u8>) -> Self {
        Self { number, body }
    }
}

/// Mapping from object number to [`RawObject`], built once per document.
///
/// Iteration yields objects in order of first appearance in the file.
/// A later object with a duplicate number overwrites the earlier body but
/// keeps the original position, matching simple in-order scanning.
#[derive(Debug, Default)]
pub struct ObjectTable {
    objects: IndexMap<u32, RawObject>,
}

impl ObjectTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object. Last-wins on duplicate numbers.
    pub fn insert(&mut self, object: RawObject) {
        self.objects.insert(object.number, object);
    }

    /// Look up an object by number.
    pub fn get(&self, number: u32) -> Option<&RawObject> {
        self.objects.get(&number)
    }

    /// Number of distinct objects in the table.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate objects in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = &RawObject> {
        self.objects.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut table = ObjectTable::new();
        table.insert(RawObject::new(3, b"<< /Type /Page >>".to_vec()));
        table.insert(RawObject::new(1, b"<< /Type /Catalog >>".to_vec()));

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(3).unwrap().body, b"<< /Type /Page >>");
        assert!(table.get(7).is_none());
    }

    #[test]
    fn test_duplicate_number_last_wins_keeps_order() {
        let mut table = ObjectTable::new();
        table.insert(RawObject::new(5, b"first".to_vec()));
        table.insert(RawObject::new(2, b"other".to_vec()));
        table.insert(RawObject::new(5, b"second".to_vec()));

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(5).unwrap().body, b"second");

        // Overwriting keeps the original scan position.
        let order: Vec<u32> = table.iter().map(|o| o.number).collect();
        assert_eq!(order, vec![5, 2]);
    }
}
