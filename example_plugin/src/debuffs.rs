// Elemental debuffs demo: an owner keeps its negative status effects in one
// flag register and drives it through the mutating API.

use bitmask::prelude::*;

/// Damage types that can linger on a target as debuffs.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FlagEnum)]
#[repr(u8)]
pub enum ElementalDamage {
    None = 0,
    Fire = 1 << 0,
    Frost = 1 << 1,
    Lightning = 1 << 2,
    Poison = 1 << 3,
}

/// Something that can be debuffed. Stores the raw register so it can be
/// handed to a host as a plain integer through the accessors.
#[derive(Debug, Default)]
pub struct DebuffHolder {
    name: String,
    debuffs: Register,
}

impl DebuffHolder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), debuffs: 0 }
    }

    pub fn debuffs(&self) -> Register {
        self.debuffs
    }

    pub fn set_debuffs(&mut self, debuffs: Register) {
        self.debuffs = debuffs;
    }

    /// Typed view of the register.
    pub fn active(&self) -> FlagMask<ElementalDamage> {
        FlagMask::from_bits(self.debuffs)
    }

    /// Start-of-play setup: burning and shocked. Returns whether the holder
    /// is now affected by lightning or poison.
    pub fn begin_play(&mut self) -> bool {
        self.debuffs.add_flags(ElementalDamage::Fire | ElementalDamage::Lightning);

        let shocked_or_poisoned = self
            .debuffs
            .has_any_flags(ElementalDamage::Poison | ElementalDamage::Lightning);
        blog!(
            LOG_DISPLAY,
            "[Debuffs] {} begins play with {} (lightning or poison: {})",
            self.name,
            self.active(),
            shocked_or_poisoned
        );
        shocked_or_poisoned
    }

    pub fn apply(&mut self, damage: impl FlagBits) {
        self.debuffs.add_flags(damage);
    }

    pub fn cleanse(&mut self, damage: impl FlagBits) {
        self.debuffs.remove_flags(damage);
    }

    pub fn is_affected_by_all(&self, damage: impl FlagBits) -> bool {
        self.debuffs.has_all_flags(damage)
    }

    /// Accepts a register from the host, warning about bits no damage type
    /// declares. Unknown bits are kept.
    pub fn set_debuffs_from_host(&mut self, debuffs: Register) {
        let unknown = FlagMask::<ElementalDamage>::from_bits(debuffs).unknown_bits();
        if unknown != 0 {
            blog!(
                LOG_WARNING,
                "[Debuffs] {}: register {:#x} has undeclared bits {:#x}",
                self.name,
                debuffs,
                unknown
            );
        }
        self.set_debuffs(debuffs);
    }
}
