//! Domain-level constants.

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_USER: &str = "user";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// Pagination
// =============================================================================

/// First page number (pages are 1-based)
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// Page size used when the caller does not pick one
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Upper bound for a single page
pub const MAX_PAGE_SIZE: u64 = 100;
