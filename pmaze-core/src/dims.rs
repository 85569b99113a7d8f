use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use paste::paste;

/// Signed offset between two grid positions, also used for grid sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);

    /// Number of single steps needed to cover this offset, saturating at `i32::MAX`.
    pub fn abs_sum(self) -> i32 {
        self.0.abs().saturating_add(self.1.abs())
    }

    /// Component-wise addition, `None` if either axis overflows.
    pub fn checked_add(self, other: Dims) -> Option<Dims> {
        Some(Dims(self.0.checked_add(other.0)?, self.1.checked_add(other.1)?))
    }
}

impl Neg for Dims {
    type Output = Dims;

    fn neg(self) -> Dims {
        Dims(-self.0, -self.1)
    }
}

macro_rules! dims_op {
    ($($trait:ident => $op:ident),*) => {
        $(
            impl $trait for Dims {
                type Output = Dims;

                fn $op(self, other: Dims) -> Dims {
                    Dims(self.0.$op(other.0), self.1.$op(other.1))
                }
            }

            paste! {
                impl [<$trait Assign>] for Dims {
                    fn [<$op _assign>](&mut self, other: Dims) {
                        *self = self.$op(other);
                    }
                }
            }
        )*
    };
}

dims_op!(Add => add, Sub => sub);
