// testcat-core/src/domain/catalog.rs

use std::fmt;

/// One class and its methods, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub class: String,
    pub methods: Vec<String>,
}

/// A parsed catalog file: class names mapped to method lists.
///
/// Entry order follows the source document. Catalogs are never merged, so a
/// class that appears in two files yields its lines once per file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestCatalog {
    entries: Vec<CatalogEntry>,
}

impl TestCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn class_count(&self) -> usize {
        self.entries.len()
    }

    pub fn method_count(&self) -> usize {
        self.entries.iter().map(|e| e.methods.len()).sum()
    }

    /// Flattened `class#method` records in output order.
    pub fn records(&self) -> impl Iterator<Item = TestRecord<'_>> {
        self.entries.iter().flat_map(|entry| {
            entry.methods.iter().map(move |method| TestRecord {
                class: &entry.class,
                method,
            })
        })
    }
}

/// A single output line, rendered as `<class>#<method>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestRecord<'a> {
    pub class: &'a str,
    pub method: &'a str,
}

impl fmt::Display for TestRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.class, self.method)
    }
}
