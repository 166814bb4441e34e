/// Domain layer - KB table parsing and BIOS fingerprint resolution
///
/// Everything in here is pure: no file system, no console. Adapters feed it
/// text and collect the results.
pub mod domain;
pub mod policies;
pub mod services;
