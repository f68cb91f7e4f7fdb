/// Client for the deal management API
pub mod deals;
