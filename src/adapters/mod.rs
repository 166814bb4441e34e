/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// file system access, console progress and output formatters.
pub mod outbound;
