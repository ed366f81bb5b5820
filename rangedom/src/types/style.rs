use super::{Edge, Length};

/// Inline positional style of an element.
///
/// Declarations keep the order in which they were first set, so serialized
/// output is stable across renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    declarations: Vec<(Edge, Length)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left(mut self, value: Length) -> Self {
        self.set(Edge::Left, value);
        self
    }

    pub fn right(mut self, value: Length) -> Self {
        self.set(Edge::Right, value);
        self
    }

    pub fn top(mut self, value: Length) -> Self {
        self.set(Edge::Top, value);
        self
    }

    pub fn bottom(mut self, value: Length) -> Self {
        self.set(Edge::Bottom, value);
        self
    }

    /// Set an edge, replacing an earlier declaration in place.
    pub fn set(&mut self, edge: Edge, value: Length) {
        match self.declarations.iter_mut().find(|(e, _)| *e == edge) {
            Some(slot) => slot.1 = value,
            None => self.declarations.push((edge, value)),
        }
    }

    pub fn get(&self, edge: Edge) -> Option<Length> {
        self.declarations
            .iter()
            .find(|(e, _)| *e == edge)
            .map(|(_, v)| *v)
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn declarations(&self) -> &[(Edge, Length)] {
        &self.declarations
    }

    /// Serialize as a `style` attribute value, e.g. `left: 12.00%; top: 0`.
    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(edge, value)| format!("{}: {value}", edge.as_str()))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
