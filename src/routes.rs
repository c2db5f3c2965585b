// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const PROVERBS: &str = "/proverbs";
pub const PROVERB_ITEM: &str = "/proverbs/{id}";
