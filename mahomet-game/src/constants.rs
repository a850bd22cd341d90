//! Tuning values shared across the engine.

/// Lower clamp bound for every resource.
pub const RESOURCE_MIN: i32 = 0;
/// Upper clamp bound for every resource.
pub const RESOURCE_MAX: i32 = 100;

/// Largest magnitude a catalog-declared effect may carry.
pub const EFFECT_MAGNITUDE_LIMIT: i32 = 100;

/// Trip length of the default Champaign-to-Mahomet data set.
pub const DEFAULT_TOTAL_DISTANCE_MILES: f32 = 12.0;

/// Minimum miles credited per continue action.
pub const PROGRESS_MIN_MILES: f32 = 0.5;
/// Maximum miles credited per continue action.
pub const PROGRESS_MAX_MILES: f32 = 2.5;

/// Smallest patience penalty the corn-field ford can roll.
pub const CORN_PENALTY_MIN: i32 = 5;
/// Largest patience penalty the corn-field ford can roll.
pub const CORN_PENALTY_MAX: i32 = 1000;
/// Van damage is the patience penalty divided by this factor, floored.
pub const CORN_VAN_DAMAGE_DIVISOR: i32 = 10;
/// Severity tier boundaries for the corn-field narration.
pub const CORN_TIER_MILD: i32 = 100;
pub const CORN_TIER_ROUGH: i32 = 300;
pub const CORN_TIER_LOST: i32 = 600;

/// Shot budget for the midpoint snack gallery.
pub const GALLERY_DEFAULT_SHOTS: u32 = 12;
/// Chance a single gallery shot connects.
pub const GALLERY_DEFAULT_HIT_CHANCE: f32 = 0.55;
/// Most snacks a single gallery run can award.
pub const GALLERY_DEFAULT_REWARD_CAP: u32 = 40;
