// Utility functions
// DOM access helpers

pub mod dom;
