/// Text typed into the new-folder field and what the backend said about it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewFolderDraft {
    pub name: String,
    /// Set once the user has edited the field.
    pub touched: bool,
    /// A folder or dashboard with this name (case-insensitive) exists.
    /// Only meaningful when `touched` is set.
    pub exists: bool,
}

impl NewFolderDraft {
    /// Trimmed name, or `None` if nothing but whitespace was typed.
    pub fn trimmed_name(&self) -> Option<&str> {
        let trimmed = self.name.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// Whether the picker shows the dropdown or the new-folder field.
///
/// Exactly one mode is active, so "creating" and "valid selection" can
/// never disagree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// The dropdown is shown.
    #[default]
    Browsing,
    /// The new-folder field is shown.
    Creating(NewFolderDraft),
}

impl SelectionMode {
    /// Returns true if the new-folder field is shown.
    pub fn is_creating(&self) -> bool {
        matches!(self, SelectionMode::Creating(_))
    }

    pub fn draft(&self) -> Option<&NewFolderDraft> {
        match self {
            SelectionMode::Creating(draft) => Some(draft),
            SelectionMode::Browsing => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut NewFolderDraft> {
        match self {
            SelectionMode::Creating(draft) => Some(draft),
            SelectionMode::Browsing => None,
        }
    }
}

/// Ticket for one name-collision search.
///
/// Results are only applied if the ticket is still the latest one issued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameCheck {
    pub(crate) seq: u64,
    pub(crate) name: String,
}

impl NameCheck {
    /// The name the search was issued for.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}
