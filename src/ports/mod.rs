/// Ports module defining the interfaces between the core and the outside world
///
/// Only outbound (driven) ports exist: the core reads KB text, snapshots,
/// dmidecode dumps and templates, and hands formatted output back.
pub mod outbound;
