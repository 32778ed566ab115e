pub mod bindings;
pub mod held;
pub mod queue;
