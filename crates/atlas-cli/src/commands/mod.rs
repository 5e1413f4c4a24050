pub mod gate;
pub mod order;
pub mod reset;
pub mod sigil;
pub mod status;
pub mod tiles;
pub mod value;
