use super::layout::AffordanceLayout;
use super::pages::Page;
use crate::messages;
use crate::models::feature::{FeatureCatalog, FeatureDescriptor, LISTENING_FEATURE};
use std::sync::Arc;

/// Outcome of selecting a feature control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The control is locked; show the notice and change nothing else.
    Locked(&'static str),
    /// Switch the whole view to another page.
    OpenPage(Page),
    /// Replace the detail pane with this content.
    Render(FeatureDescriptor),
    /// The feature has no content; nothing to render.
    NoContent,
    /// No control with that id exists.
    UnknownControl,
}

pub struct FeatureDispatcher {
    catalog: Arc<FeatureCatalog>,
}

impl FeatureDispatcher {
    pub fn new(catalog: Arc<FeatureCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &FeatureCatalog {
        &self.catalog
    }

    pub fn select(&self, layout: &mut AffordanceLayout, control_id: &str) -> Dispatch {
        let Some(control) = layout.get(control_id) else {
            return Dispatch::UnknownControl;
        };

        if control.locked {
            return Dispatch::Locked(messages::FEATURE_LOCKED);
        }

        let feature = control.feature.clone();
        layout.set_active(control_id);

        if feature == LISTENING_FEATURE {
            return Dispatch::OpenPage(Page::Listening);
        }

        match self.catalog.get(&feature) {
            Some(descriptor) => Dispatch::Render(descriptor.clone()),
            None => Dispatch::NoContent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::access::apply_plan_lock;
    use crate::client::layout::{Affordance, AffordanceGroup};
    use crate::models::plan::{AccessTiers, Plan};

    fn dispatcher() -> FeatureDispatcher {
        FeatureDispatcher::new(Arc::new(FeatureCatalog::standard()))
    }

    #[test]
    fn test_locked_control_changes_nothing() {
        let mut layout = AffordanceLayout::standard();
        apply_plan_lock(&mut layout, &AccessTiers::default(), Plan::Basic);
        layout.set_active("sidebar-vocabulary");
        let before = layout.clone();

        let outcome = dispatcher().select(&mut layout, "sidebar-mock");
        assert_eq!(outcome, Dispatch::Locked(messages::FEATURE_LOCKED));
        assert_eq!(layout, before);
    }

    #[test]
    fn test_unlocked_control_renders_and_activates() {
        let mut layout = AffordanceLayout::standard();
        let outcome = dispatcher().select(&mut layout, "top-reading");

        match outcome {
            Dispatch::Render(descriptor) => assert_eq!(descriptor.title, "Reading Practice"),
            other => panic!("expected render, got {:?}", other),
        }
        assert_eq!(layout.active().unwrap().id, "top-reading");
    }

    #[test]
    fn test_listening_opens_page() {
        let mut layout = AffordanceLayout::standard();
        let outcome = dispatcher().select(&mut layout, "sidebar-listening");
        assert_eq!(outcome, Dispatch::OpenPage(Page::Listening));
        assert_eq!(layout.active().unwrap().id, "sidebar-listening");
    }

    #[test]
    fn test_feature_without_descriptor_is_noop_but_activates() {
        let mut layout = AffordanceLayout::new(vec![Affordance::new(
            AffordanceGroup::Top,
            "grammar",
            0,
        )]);
        assert_eq!(dispatcher().select(&mut layout, "top-grammar"), Dispatch::NoContent);
        assert!(layout.get("top-grammar").unwrap().active);
    }

    #[test]
    fn test_unknown_control() {
        let mut layout = AffordanceLayout::standard();
        assert_eq!(dispatcher().select(&mut layout, "nope"), Dispatch::UnknownControl);
    }
}
