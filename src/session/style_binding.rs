use std::collections::BTreeMap;

use crate::foundation::error::{FlexPlayError, FlexPlayResult};

/// Handle of a style sheet owned by a [`StyleSheetHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SheetId(pub u64);

/// Something that can hold live style sheets, e.g. a document head.
pub trait StyleSheetHost {
    /// Attach a new sheet containing `css`.
    fn insert_sheet(&mut self, css: &str) -> FlexPlayResult<SheetId>;

    /// Replace the text of an attached sheet.
    fn set_sheet_text(&mut self, id: SheetId, css: &str) -> FlexPlayResult<()>;

    /// Detach a sheet. Unknown ids are ignored.
    fn remove_sheet(&mut self, id: SheetId);
}

impl<H: StyleSheetHost + ?Sized> StyleSheetHost for &mut H {
    fn insert_sheet(&mut self, css: &str) -> FlexPlayResult<SheetId> {
        (**self).insert_sheet(css)
    }

    fn set_sheet_text(&mut self, id: SheetId, css: &str) -> FlexPlayResult<()> {
        (**self).set_sheet_text(id, css)
    }

    fn remove_sheet(&mut self, id: SheetId) {
        (**self).remove_sheet(id)
    }
}

/// The player's live style sheet, scoped to the binding's lifetime.
///
/// Acquiring inserts exactly one sheet; dropping removes it.
#[derive(Debug)]
pub struct StyleBinding<H: StyleSheetHost> {
    host: H,
    sheet: SheetId,
    text: String,
}

impl<H: StyleSheetHost> StyleBinding<H> {
    /// Insert a sheet with `initial` text into `host`.
    pub fn acquire(mut host: H, initial: &str) -> FlexPlayResult<Self> {
        let sheet = host.insert_sheet(initial)?;
        tracing::debug!(sheet = sheet.0, "style binding acquired");
        Ok(Self {
            host,
            sheet,
            text: initial.to_string(),
        })
    }

    /// Replace the sheet's text.
    pub fn apply(&mut self, css: &str) -> FlexPlayResult<()> {
        self.host.set_sheet_text(self.sheet, css)?;
        self.text.clear();
        self.text.push_str(css);
        Ok(())
    }

    /// Text most recently applied.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sheet handle inside the host.
    pub fn sheet(&self) -> SheetId {
        self.sheet
    }

    /// The host holding the sheet.
    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<H: StyleSheetHost> Drop for StyleBinding<H> {
    fn drop(&mut self) {
        self.host.remove_sheet(self.sheet);
        tracing::debug!(sheet = self.sheet.0, "style binding released");
    }
}

/// Headless [`StyleSheetHost`] that keeps sheet text in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStyleHost {
    next_id: u64,
    sheets: BTreeMap<SheetId, String>,
}

impl InMemoryStyleHost {
    /// Empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of an attached sheet.
    pub fn sheet_text(&self, id: SheetId) -> Option<&str> {
        self.sheets.get(&id).map(String::as_str)
    }

    /// Number of attached sheets.
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }
}

impl StyleSheetHost for InMemoryStyleHost {
    fn insert_sheet(&mut self, css: &str) -> FlexPlayResult<SheetId> {
        let id = SheetId(self.next_id);
        self.next_id += 1;
        self.sheets.insert(id, css.to_string());
        Ok(id)
    }

    fn set_sheet_text(&mut self, id: SheetId, css: &str) -> FlexPlayResult<()> {
        let slot = self
            .sheets
            .get_mut(&id)
            .ok_or_else(|| FlexPlayError::validation(format!("sheet {} is not attached", id.0)))?;
        css.clone_into(slot);
        Ok(())
    }

    fn remove_sheet(&mut self, id: SheetId) {
        self.sheets.remove(&id);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/style_binding.rs"]
mod tests;
