//! ANSI escape code constants for terminal styling
//!
//! Only the attributes and colours the renderer actually paints with.

// ============================================================================
// TEXT ATTRIBUTES
// ============================================================================

pub const RESET: &str = "\x1b[0m"; // Reset all attributes
pub const BOLD: &str = "\x1b[1m"; // Bold text
pub const DIM: &str = "\x1b[2m"; // Dimmed/faint text
pub const REVERSE: &str = "\x1b[7m"; // Reverse video (swap fg/bg)

// ============================================================================
// STANDARD FOREGROUND COLORS (30-37)
// ============================================================================

pub const FG_RED: &str = "\x1b[31m";
pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_YELLOW: &str = "\x1b[33m";
pub const FG_MAGENTA: &str = "\x1b[35m";
pub const FG_CYAN: &str = "\x1b[36m";

// ============================================================================
// 256 COLOR MODE - FOREGROUND COLORS (38;5;n)
// ============================================================================

pub const FG_256_STEEL_BLUE_LIGHT: &str = "\x1b[38;5;75m";
pub const FG_256_ORANGE: &str = "\x1b[38;5;208m";
pub const FG_256_GRAY: &str = "\x1b[38;5;244m";

// ============================================================================
// JSON TOKEN COLORS
// ============================================================================

pub const JSON_KEY: &str = FG_256_STEEL_BLUE_LIGHT;
pub const JSON_STRING: &str = FG_GREEN;
pub const JSON_NUMBER: &str = FG_256_ORANGE;
pub const JSON_BOOLEAN: &str = FG_MAGENTA;
pub const JSON_NULL: &str = FG_256_GRAY;

// ============================================================================
// PANEL COLORS
// ============================================================================

pub const LOADING: &str = FG_YELLOW;
pub const ERROR_BANNER: &str = FG_RED;
pub const HEADER: &str = FG_CYAN;
