use leptos::prelude::*;

/// Distance, in pixels, that hovered elements rise.
pub const LIFT_PX: u32 = 5;

/// The CSS transition applied to lifted elements.
pub const LIFT_TRANSITION: &str = "transform 150ms ease-out";

/// Hover state of a single element that rises while the pointer is over it.
///
/// Bind [`raise`](HoverLift::raise) to `mouseenter`,
/// [`rest`](HoverLift::rest) to `mouseleave`, and
/// [`transform`](HoverLift::transform) to the element's `transform` style.
#[derive(Debug, Clone, Copy)]
pub struct HoverLift {
    hovered: RwSignal<bool>,
}

impl Default for HoverLift {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverLift {
    pub fn new() -> Self {
        Self {
            hovered: RwSignal::new(false),
        }
    }

    pub fn raise(&self) {
        self.hovered.set(true);
    }

    pub fn rest(&self) {
        self.hovered.set(false);
    }

    pub fn is_raised(&self) -> bool {
        self.hovered.get()
    }

    pub fn transform(&self) -> String {
        lift_transform(self.is_raised())
    }
}

pub fn lift_transform(raised: bool) -> String {
    if raised {
        format!("translateY(-{LIFT_PX}px)")
    } else {
        "translateY(0px)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_follows_hover() {
        assert_eq!(lift_transform(true), "translateY(-5px)");
        assert_eq!(lift_transform(false), "translateY(0px)");
    }

    #[test]
    fn raise_and_rest() {
        let owner = Owner::new();
        owner.set();

        let lift = HoverLift::new();
        assert!(!lift.is_raised());
        lift.raise();
        assert!(lift.is_raised());
        assert_eq!(lift.transform(), "translateY(-5px)");
        lift.rest();
        assert!(!lift.is_raised());
    }
}
