use crate::registry::structs::holder::Holder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub holder: Holder,
    pub size: u64,
    /// Whether the follow-up publish to the tracker succeeded.
    pub self_published: bool,
}
