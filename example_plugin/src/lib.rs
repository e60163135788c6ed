// Example plugin: a flag enumeration, an owner holding a flag register, and
// the C exports a scripting host links against.

bitmask::entry!();

pub mod debuffs;

pub use debuffs::{DebuffHolder, ElementalDamage};
