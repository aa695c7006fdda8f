pub mod bone;
pub mod nerve;
pub mod record;

pub use bone::{Bone, BoneCategory};
pub use nerve::NerveForamen;
pub use record::{ExportPayload, Stats, UserRecord, WrongAnswer};
