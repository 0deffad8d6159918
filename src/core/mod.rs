//! Core-Domänentypen: Geräte-Typen, Katalog, Nodes, Links, Topology.

pub mod catalog;
pub mod device;
pub mod link;
/// Core-Datenmodelle der Netzwerk-Topologie
///
/// - Topology: Container für alle Nodes und Links
/// - TopologyNode: platziertes Gerät mit Position
/// - TopologyLink: Verbindung zwischen zwei Nodes
pub mod node;
pub mod topology;

pub use catalog::{DeviceCategory, DeviceDescriptor, DEVICE_CATALOG};
pub use device::DeviceType;
pub use link::{LinkId, TopologyLink};
pub use node::{NodeId, TopologyNode};
pub use topology::Topology;
