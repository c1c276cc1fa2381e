mod annotator;
mod policy;

pub use annotator::ReferenceAnnotator;
pub use policy::ReferencePolicy;
