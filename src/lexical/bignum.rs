//! Big integer type definition.

use super::math::*;

/// Storage for a big integer type.
#[derive(Clone, Default, PartialEq, Eq)]
pub(crate) struct Bigint {
    /// Internal storage for the Bigint, in little-endian order.
    pub(crate) data: LimbVecType,
}

impl Math for Bigint {
    #[inline]
    fn data(&self) -> &LimbVecType {
        &self.data
    }

    #[inline]
    fn data_mut(&mut self) -> &mut LimbVecType {
        &mut self.data
    }
}
