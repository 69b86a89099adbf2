/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const API_VERSION_COMPONENT: &str = "v1";
pub const API_VERSION_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", API_VERSION_COMPONENT);

pub const CONTACT_ROUTE_COMPONENT: &str = "contact";
pub const CONTACT_ROUTE_PREFIX: &str =
    const_str::concat!(API_VERSION_PREFIX, "/", CONTACT_ROUTE_COMPONENT);

pub const HEALTH_ROUTE_COMPONENT: &str = "health";

/// Upper bound on records returned by the contact listing.
pub const DEFAULT_LIST_LIMIT: u32 = 1000;
