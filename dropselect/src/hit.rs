use crate::event::Part;
use crate::layout::Rect;

/// Interactive regions recorded while rendering a dropdown.
///
/// Regions registered later sit on top: a click on the clear control
/// resolves to [`Part::Clear`] even though it lies inside the trigger.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Part)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, rect: Rect, part: Part) {
        if !rect.is_empty() {
            self.regions.push((rect, part));
        }
    }

    /// Topmost part containing the point.
    pub fn hit(&self, x: u16, y: u16) -> Option<Part> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, part)| *part)
    }

    /// Rectangle covering every region, or `None` before the first render.
    pub fn bounds(&self) -> Option<Rect> {
        self.regions
            .iter()
            .map(|(rect, _)| *rect)
            .reduce(Rect::union)
    }

    /// Rectangle recorded for `part`, if any.
    pub fn rect_of(&self, part: Part) -> Option<Rect> {
        self.regions
            .iter()
            .rev()
            .find(|(_, p)| *p == part)
            .map(|(rect, _)| *rect)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
