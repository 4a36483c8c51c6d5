pub mod chart;
pub mod debounce;
pub mod dom;
pub mod viewport;
