//! Ordered records of the feature controls shown on the dashboard.
//!
//! Lock decisions depend on a control's position within its group, so the
//! position is carried explicitly as `order` rather than taken from however
//! the controls happen to be rendered.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffordanceGroup {
    Sidebar,
    Top,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordance {
    pub id: String,
    pub feature: String,
    pub group: AffordanceGroup,
    pub order: u32,
    pub locked: bool,
    pub active: bool,
}

impl Affordance {
    pub fn new(group: AffordanceGroup, feature: &str, order: u32) -> Self {
        let prefix = match group {
            AffordanceGroup::Sidebar => "sidebar",
            AffordanceGroup::Top => "top",
        };
        Self {
            id: format!("{}-{}", prefix, feature),
            feature: feature.to_string(),
            group,
            order,
            locked: false,
            active: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffordanceLayout {
    items: Vec<Affordance>,
}

impl AffordanceLayout {
    pub fn new(items: Vec<Affordance>) -> Self {
        Self { items }
    }

    /// The dashboard's built-in controls.
    pub fn standard() -> Self {
        let sidebar = [
            "listening",
            "vocabulary",
            "reading",
            "writing",
            "speaking",
            "band9",
            "mock",
            "leaderboard",
        ];
        let top = [
            "vocabulary",
            "reading",
            "writing",
            "speaking",
            "translation",
            "lessons",
            "students",
        ];

        let items = sidebar
            .iter()
            .enumerate()
            .map(|(i, f)| Affordance::new(AffordanceGroup::Sidebar, f, i as u32))
            .chain(
                top.iter()
                    .enumerate()
                    .map(|(i, f)| Affordance::new(AffordanceGroup::Top, f, i as u32)),
            )
            .collect();

        Self::new(items)
    }

    /// Indices into `items` for one group, sorted by `order`. Ties keep insertion order.
    pub(crate) fn ordered_indices(&self, group: AffordanceGroup) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.group == group)
            .map(|(i, _)| i)
            .collect();
        indices.sort_by_key(|&i| self.items[i].order);
        indices
    }

    pub fn group(&self, group: AffordanceGroup) -> Vec<&Affordance> {
        self.ordered_indices(group)
            .into_iter()
            .map(|i| &self.items[i])
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Affordance> {
        self.items.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Affordance> {
        self.items.iter().find(|item| item.id == id)
    }

    /// First control for `feature`, sidebar before top.
    pub fn find_by_feature(&self, feature: &str) -> Option<&Affordance> {
        [AffordanceGroup::Sidebar, AffordanceGroup::Top]
            .into_iter()
            .flat_map(|group| self.group(group))
            .find(|item| item.feature == feature)
    }

    /// Marks `id` as the single active control across every group.
    pub fn set_active(&mut self, id: &str) {
        for item in &mut self.items {
            item.active = item.id == id;
        }
    }

    pub fn active(&self) -> Option<&Affordance> {
        self.items.iter().find(|item| item.active)
    }

    pub(crate) fn item_mut(&mut self, index: usize) -> &mut Affordance {
        &mut self.items[index]
    }
}
