//! Implements the standard arithmetic operator traits for single-field newtypes.

#[macro_export]
macro_rules! op {
    (binary $name:ident, $op:ident, $fn_name:ident) => {
        impl $op for $name {
            type Output = Self;

            fn $fn_name(self, rhs: Self) -> Self::Output {
                Self(self.0.$fn_name(rhs.0))
            }
        }
    };
    (inplace $name:ident, $op:ident, $fn_name:ident) => {
        impl $op for $name {
            fn $fn_name(&mut self, rhs: Self) {
                self.0.$fn_name(rhs.0)
            }
        }
    };
    (unary $name:ident, $op:ident, $fn_name:ident) => {
        impl $op for $name {
            type Output = Self;

            fn $fn_name(self) -> Self::Output {
                Self(self.0.$fn_name())
            }
        }
    };
}
