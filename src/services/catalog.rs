//! Menu catalog service
//!
//! Owns the growable array of menu items, the id allocator that numbers
//! them, and the `menu.txt` file they are loaded from and saved to.

use crate::containers::GrowableArray;
use crate::error::{BistroError, BistroResult};
use crate::models::{MenuIdAllocator, MenuItem, MenuItemId, Money};
use crate::storage::{format_menu_line, parse_menu_line, TextFile};

/// The set of dishes currently offered
pub struct Catalog {
    items: GrowableArray<MenuItem>,
    ids: MenuIdAllocator,
    file: TextFile,
}

impl Catalog {
    /// Create an empty catalog backed by `file`
    pub fn new(file: TextFile, capacity: usize) -> Self {
        Self {
            items: GrowableArray::with_capacity(capacity),
            ids: MenuIdAllocator::new(),
            file,
        }
    }

    /// Load items from the menu file
    ///
    /// Blank and malformed lines are skipped with a warning. A missing or
    /// empty file leaves the catalog as it is. Returns how many items were
    /// added.
    pub fn load(&mut self) -> usize {
        let lines = match self.file.read() {
            Ok(lines) => lines,
            Err(e) => {
                tracing::warn!(error = %e, "no menu data to load");
                return 0;
            }
        };

        let mut loaded = 0;
        for (number, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let item = match parse_menu_line(line) {
                Ok(item) => item,
                Err(e) => {
                    tracing::warn!(line = number + 1, error = %e, "skipping menu line");
                    continue;
                }
            };

            if self.find(item.id).is_some() {
                tracing::warn!(line = number + 1, id = %item.id, "skipping duplicate menu id");
                continue;
            }

            self.ids.reserve(item.id);
            self.items.add(item);
            loaded += 1;
        }

        tracing::debug!(loaded, "menu loaded");
        loaded
    }

    /// Write every item to the menu file
    pub fn save(&self) -> BistroResult<()> {
        if self.items.is_empty() {
            return self.file.clear();
        }

        let content = self
            .items
            .iter()
            .map(format_menu_line)
            .collect::<BistroResult<Vec<_>>>()?
            .join("\n");
        self.file.write(&content)
    }

    /// Add a new dish and persist the catalog
    pub fn add_item(
        &mut self,
        name: &str,
        description: &str,
        price: Money,
    ) -> BistroResult<MenuItem> {
        // Work on a copy so a rejected item does not consume an id
        let mut ids = self.ids.clone();
        let item = MenuItem::new(&mut ids, name.trim(), description.trim(), price)
            .and_then(|item| item.validate().map(|()| item))
            .map_err(|e| BistroError::Validation(e.to_string()))?;

        self.ids = ids;
        self.items.add(item.clone());
        self.persist();
        Ok(item)
    }

    /// Remove the dish with the given id and persist the catalog
    pub fn delete_item(&mut self, id: MenuItemId) -> BistroResult<MenuItem> {
        let pos = self
            .items
            .position(|item| item.id == id)
            .ok_or_else(|| BistroError::menu_item_not_found(id.to_string()))?;

        let removed = self.items.remove_at(pos)?;
        self.persist();
        Ok(removed)
    }

    /// Empty the catalog and truncate the menu file
    ///
    /// Ids already handed out stay used.
    pub fn reset(&mut self) {
        self.items.clear();
        if let Err(e) = self.file.clear() {
            tracing::warn!(error = %e, "failed to clear menu file");
        }
    }

    /// Look up a dish by id (linear scan)
    pub fn find(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Copy out the dishes for an order, in the order given
    pub fn pick(&self, ids: &[MenuItemId]) -> BistroResult<Vec<MenuItem>> {
        ids.iter()
            .map(|id| {
                self.find(*id)
                    .cloned()
                    .ok_or_else(|| BistroError::menu_item_not_found(id.to_string()))
            })
            .collect()
    }

    pub fn get(&self, pos: usize) -> BistroResult<&MenuItem> {
        self.items.get(pos)
    }

    pub fn size(&self) -> usize {
        self.items.size()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Every stored item, in insertion order
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> + '_ {
        self.items.iter()
    }

    /// Items shown on the menu: zero-priced placeholders are left out
    pub fn listed(&self) -> impl Iterator<Item = &MenuItem> + '_ {
        self.items.iter().filter(|item| !item.is_placeholder())
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            tracing::warn!(error = %e, "failed to save menu");
        }
    }
}
