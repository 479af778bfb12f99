//! Accessible objects: roles, states and the behaviors chosen for them.

use ahash::AHashSet;

/// Window classes used by the office suite's frames
pub mod window_class {
    pub const SAL_FRAME: &str = "SALFRAME";
    pub const SAL_SUB_FRAME: &str = "SALSUBFRAME";
    pub const SAL_TMP_SUB_FRAME: &str = "SALTMPSUBFRAME";
}

/// Accessibility technology an object was reached through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Technology {
    /// IAccessible2
    Ia2,
    /// Java Access Bridge
    Jab,
}

/// Object roles the adapter cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Document,
    TextFrame,
    Paragraph,
    Heading,
    Table,
    TableCell,
    Canvas,
    Panel,
    Label,
    Other,
}

/// Object states the adapter reads or rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Focused,
    Focusable,
    Selected,
    Selectable,
    Editable,
    Multiline,
    HasFormula,
    ReadOnly,
}

/// A set of [`State`]s
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct States(AHashSet<State>);

impl States {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, state: State) -> bool {
        self.0.insert(state)
    }

    pub fn remove(&mut self, state: State) -> bool {
        self.0.remove(&state)
    }

    pub fn contains(&self, state: State) -> bool {
        self.0.contains(&state)
    }

    /// Whether every state in `states` is present
    pub fn contains_all(&self, states: &[State]) -> bool {
        states.iter().all(|s| self.0.contains(s))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = State> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<State> for States {
    fn from_iter<I: IntoIterator<Item = State>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[State; N]> for States {
    fn from(states: [State; N]) -> Self {
        states.into_iter().collect()
    }
}

/// What the adapter knows about an object before choosing behaviors for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectInfo {
    pub role: Role,
    pub window_class: String,
    pub technology: Technology,
    /// The object implements the accessible text interface
    pub has_text_interface: bool,
    pub parent_role: Option<Role>,
    pub description: Option<String>,
}

impl ObjectInfo {
    pub fn new<S: Into<String>>(technology: Technology, role: Role, window_class: S) -> Self {
        Self {
            role,
            window_class: window_class.into(),
            technology,
            has_text_interface: false,
            parent_role: None,
            description: None,
        }
    }

    pub fn with_text_interface(mut self) -> Self {
        self.has_text_interface = true;
        self
    }

    pub fn with_parent_role(mut self, role: Role) -> Self {
        self.parent_role = Some(role);
        self
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    fn in_window(&self, classes: &[&str]) -> bool {
        classes.contains(&self.window_class.as_str())
    }
}

/// Behavior layered over a generic accessible object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    /// IA2 spreadsheet or text table cell
    TableCell,
    /// IA2 table with selection announcements
    Table,
    /// IA2 text with office-suite formatting
    Text,
    /// Text paragraph without value or description
    Paragraph,
    /// JAB table cell with coordinates taken from its name
    JabTableCell,
    /// JAB table that hides its dimensions
    JabTable,
}

impl Overlay {
    /// The accessible name is replaced by the cell coordinates
    pub fn suppresses_name(&self) -> bool {
        matches!(self, Overlay::TableCell)
    }

    pub fn suppresses_value(&self) -> bool {
        matches!(self, Overlay::Paragraph)
    }

    pub fn suppresses_description(&self) -> bool {
        matches!(self, Overlay::Paragraph)
    }
}

/// Pick the overlays for an object, most specific first
pub fn choose_overlays(obj: &ObjectInfo) -> Vec<Overlay> {
    use self::window_class::*;

    let mut overlays = Vec::new();
    match obj.technology {
        Technology::Ia2 if obj.in_window(&[SAL_TMP_SUB_FRAME, SAL_SUB_FRAME, SAL_FRAME]) => {
            match obj.role {
                Role::TableCell => overlays.push(Overlay::TableCell),
                Role::Table => overlays.push(Overlay::Table),
                _ if obj.has_text_interface => overlays.push(Overlay::Text),
                _ => {}
            }
            if obj.role == Role::Paragraph {
                overlays.insert(0, Overlay::Paragraph);
            }
        }
        Technology::Jab if obj.window_class == SAL_FRAME => match obj.role {
            Role::Panel | Role::Label if obj.parent_role == Some(Role::Table) => {
                overlays.push(Overlay::JabTableCell)
            }
            Role::Table => overlays.push(Overlay::JabTable),
            _ => {}
        },
        _ => {}
    }
    overlays
}

/// Changes made to an object when it is first created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitOutcome {
    /// The role was rewritten
    pub role_changed: bool,
    /// The object is a word processor document and should be browsed as a
    /// compound document
    pub compound_document: bool,
}

/// Fix up an object's role and description on creation
pub fn normalize_on_init(obj: &mut ObjectInfo) -> InitOutcome {
    use self::window_class::*;

    let mut outcome = InitOutcome::default();

    // The JAB tree reports documents as canvases.
    if obj.technology == Technology::Jab && obj.window_class == SAL_FRAME && obj.role == Role::Canvas {
        obj.role = Role::Document;
        outcome.role_changed = true;
    }

    let has_description = obj.description.as_deref().is_some_and(|d| !d.is_empty());
    if obj.in_window(&[SAL_TMP_SUB_FRAME, SAL_FRAME])
        && matches!(obj.role, Role::Document | Role::TextFrame)
        && has_description
    {
        tracing::debug!("treating {:?} in {} as a word processor document", obj.role, obj.window_class);
        obj.description = None;
        outcome.compound_document = true;
    }

    outcome
}
