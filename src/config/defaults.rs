pub const DEFAULT_WIDTH: usize = 40;
pub const MIN_WIDTH: usize = 24;
pub const MAX_WIDTH: usize = 200;

pub const DEFAULT_PERMISSION_DELAY_MS: u64 = 1200;
pub const MAX_PERMISSION_DELAY_MS: u64 = 60_000;
