mod address;
mod map;
mod panel;

pub use self::{address::*, map::*, panel::*};
