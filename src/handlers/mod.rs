// One module per resource. Each exposes list/get/post/put/delete, wired up
// in `crate::app`.
pub mod motoristas;
pub mod system;
pub mod veiculos;
