use super::layout::{AffordanceGroup, AffordanceLayout};
use crate::models::plan::{AccessTier, AccessTiers, Plan};

/// Locks every control whose 0-based position in its group reaches the tier's
/// limit and unlocks the rest. Re-applying with the same tier changes nothing.
pub fn apply_feature_lock(layout: &mut AffordanceLayout, tier: &AccessTier) {
    for (group, limit) in [
        (AffordanceGroup::Sidebar, tier.sidebar_limit),
        (AffordanceGroup::Top, tier.top_limit),
    ] {
        for (position, index) in layout.ordered_indices(group).into_iter().enumerate() {
            layout.item_mut(index).locked = !limit.allows(position);
        }
    }
}

pub fn apply_plan_lock(layout: &mut AffordanceLayout, tiers: &AccessTiers, plan: Plan) {
    apply_feature_lock(layout, tiers.tier(plan));
}
