// Employee profiles and the role catalog.
// Thin CRUD over the store traits; records are validated with the same rules the engine applies.

pub mod handlers;
