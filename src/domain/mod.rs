// Domain layer: parcel records, drafts and the manifest artifact, plus the
// port the save collaborator implements.

pub mod model;
pub mod ports;
