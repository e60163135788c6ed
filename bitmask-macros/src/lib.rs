// bitmask-macros: #[derive(FlagEnum)] for flag enumerations.

mod flag_enum;

/// Derive `FlagBits` + `FlagEnum` for a fieldless enum and make `|` on its
/// variants produce a `FlagMask`.
///
/// Every non-zero variant must be a single bit, no two variants may share a
/// bit, and every value must fit in 32 bits. These are checked at compile
/// time; add `#[flags(unchecked)]` to the enum to skip the check (e.g. for
/// composite aliases).
///
/// # Example
/// ```ignore
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, FlagEnum)]
/// #[repr(u8)]
/// pub enum ElementalDamage {
///     None = 0,
///     Fire = 1 << 0,
///     Frost = 1 << 1,
///     Lightning = 1 << 2,
///     Poison = 1 << 3,
/// }
///
/// let mut debuffs = 0;
/// debuffs.add_flags(ElementalDamage::Fire | ElementalDamage::Lightning);
/// ```
#[proc_macro_derive(FlagEnum, attributes(flags))]
pub fn derive_flag_enum(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    match flag_enum::expand_flag_enum(input.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
