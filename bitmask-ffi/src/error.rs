/// FFI error codes shared with the host.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitmaskErrorCode {
    Ok = 0,
    NullArgument = 1,
    AlreadyRegistered = 2,
}
