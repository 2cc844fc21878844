pub mod feature;
pub mod plan;
pub mod user;

pub use feature::{FeatureCatalog, FeatureDescriptor, LISTENING_FEATURE};
pub use plan::{AccessTier, AccessTiers, Limit, Plan, UnknownPlan};
pub use user::{NewUser, PublicUser, Role, User};
