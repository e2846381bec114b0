pub mod scope_filter;

pub use scope_filter::ScopeFilter;
