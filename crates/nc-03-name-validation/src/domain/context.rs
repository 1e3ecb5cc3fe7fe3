//! Heights and policy a validation runs against.

use shared_types::{BlockHeight, NameParams};

/// Stage a validation runs at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Pool admission against the confirmed tip.
    Admission,
    /// Connection of a block at its height.
    Confirmation,
}

/// Heights and policy for one validation.
#[derive(Clone, Copy, Debug)]
pub struct ValidationContext<'a> {
    /// Policy parameters.
    pub params: &'a NameParams,
    /// Height name activity is evaluated at.
    pub activity_height: BlockHeight,
    /// Height the transaction would confirm at.
    pub inclusion_height: BlockHeight,
    /// Stage of this validation.
    pub stage: Stage,
}

impl<'a> ValidationContext<'a> {
    /// Context for pool admission with the chain at `tip`.
    pub fn admission(params: &'a NameParams, tip: BlockHeight) -> Self {
        Self {
            params,
            activity_height: tip,
            inclusion_height: tip.saturating_add(1),
            stage: Stage::Admission,
        }
    }

    /// Context for connecting a block at `height`.
    pub fn confirmation(params: &'a NameParams, height: BlockHeight) -> Self {
        Self {
            params,
            activity_height: height,
            inclusion_height: height,
            stage: Stage::Confirmation,
        }
    }
}
